//! Console output formatter for verdicts

use colored::Colorize;
use phishguard_application::UrlReport;
use phishguard_domain::Safety;

/// Formats batch results for console display.
///
/// Color is chosen from the structured [`Safety`] value, never by
/// inspecting the reason text.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally disable colored output (for `color = false` configs and
    /// non-terminal destinations).
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// One line per URL: `{url} -> {reason}`, green when safe, red when not.
    pub fn format_line(report: &UrlReport) -> String {
        let line = format!("{} -> {}", report.url, report.verdict.reason);
        match report.verdict.safety {
            Safety::Safe => line.green().to_string(),
            Safety::Unsafe => line.red().to_string(),
        }
    }

    /// All verdict lines followed by a summary.
    pub fn format_text(reports: &[UrlReport]) -> String {
        let mut output = String::new();
        for report in reports {
            output.push_str(&Self::format_line(report));
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&Self::format_summary(reports));
        output
    }

    /// Count summary, e.g. `3 safe, 2 unsafe`.
    pub fn format_summary(reports: &[UrlReport]) -> String {
        let safe = reports.iter().filter(|r| r.verdict.is_safe()).count();
        format!("{} safe, {} unsafe", safe, reports.len() - safe)
    }

    /// JSON array of verdict records.
    pub fn format_json(reports: &[UrlReport]) -> String {
        serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
    }
}
