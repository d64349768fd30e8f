//! CLI entrypoint for phishguard
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration, adapters, use cases, output.

use anyhow::{Context, Result, bail};
use clap::Parser;
use phishguard_application::{
    AnalysisProgress, AnalyzeBatchUseCase, AnalyzeUrlUseCase, CircuitController, ExecutionParams,
    NoProgress, VerificationStrategy,
};
use phishguard_domain::{HeuristicClassifier, UrlCandidate};
use phishguard_infrastructure::{
    BrowserStrategy, ChromiumBrowserDriver, ConfigLoader, ContentKeywordStrategy, FileConfig,
    JsonlVerdictLog, NoopStrategy, ProxyFetcher, TorCircuitController,
};
use phishguard_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter, StrategyChoice};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration and apply CLI overrides
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("could not load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli)?;
    config.validate().context("invalid configuration")?;

    if !config.output.color {
        ConsoleFormatter::disable_color();
    }

    let candidates = collect_candidates(&cli)?;
    if candidates.is_empty() {
        bail!("No URLs to analyze. Pass URLs as arguments or via --file.");
    }

    info!("Starting phishguard for {} URL(s)", candidates.len());

    // Optional fresh circuit before the batch
    if cli.new_identity {
        let controller = TorCircuitController::new(config.circuit.clone());
        controller
            .request_new_identity()
            .await
            .context("could not request a new Tor identity")?;
    }

    let params = config.execution_params();

    // === Dependency Injection ===
    let strategy = build_strategy(&cli, &config, &params)?;
    let mut analyze =
        AnalyzeUrlUseCase::new(HeuristicClassifier::new(config.heuristics.clone()), strategy);

    if let Some(path) = &cli.log {
        match JsonlVerdictLog::new(path) {
            Some(log) => analyze = analyze.with_logger(Arc::new(log)),
            None => bail!("Could not open verdict log at {}", path.display()),
        }
    }

    let batch = AnalyzeBatchUseCase::new(analyze, params);

    // Execute with or without progress reporting
    let reporter = ProgressReporter::new();
    let no_progress = NoProgress;
    let progress: &dyn AnalysisProgress = if cli.quiet { &no_progress } else { &reporter };

    let reports = batch.execute(candidates, progress).await?;
    reporter.finish();

    // Output results
    match cli.output {
        OutputFormat::Text => println!("{}", ConsoleFormatter::format_text(&reports)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&reports)),
    }

    Ok(())
}

/// Fold CLI flags into the loaded configuration.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) -> Result<()> {
    if let Some(timeout) = cli.timeout {
        config.verification.timeout_seconds = timeout;
    }
    if let Some(jobs) = cli.jobs {
        config.verification.concurrency = jobs;
    }
    if cli.no_proxy {
        config.proxy.enabled = false;
    }
    if let Some(proxy) = &cli.proxy {
        let (host, port) = proxy
            .rsplit_once(':')
            .context("--proxy must be HOST:PORT")?;
        config.proxy.host = host.to_string();
        config.proxy.port = port.parse().context("invalid proxy port")?;
        config.proxy.enabled = true;
    }
    Ok(())
}

/// Gather URL candidates from arguments and the optional input file.
fn collect_candidates(cli: &Cli) -> Result<Vec<UrlCandidate>> {
    let mut raw: Vec<String> = cli.urls.clone();

    if let Some(path) = &cli.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        raw.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );
    }

    raw.into_iter()
        .map(|url| UrlCandidate::new(url).map_err(anyhow::Error::from))
        .collect()
}

/// Construct the verification adapter selected on the command line.
fn build_strategy(
    cli: &Cli,
    config: &FileConfig,
    params: &ExecutionParams,
) -> Result<Arc<dyn VerificationStrategy>> {
    let strategy: Arc<dyn VerificationStrategy> = match cli.strategy {
        StrategyChoice::Noop => {
            let fetcher = Arc::new(ProxyFetcher::new(&config.proxy, params.timeout())?);
            Arc::new(NoopStrategy::new(fetcher))
        }
        StrategyChoice::Content => {
            let fetcher = Arc::new(ProxyFetcher::new(&config.proxy, params.timeout())?);
            Arc::new(
                ContentKeywordStrategy::new(fetcher)
                    .with_title_keywords(config.verification.title_keywords.clone()),
            )
        }
        StrategyChoice::Browser => {
            let driver = Arc::new(ChromiumBrowserDriver::new(
                config.browser.clone(),
                config.proxy.clone(),
                params.timeout(),
            ));
            Arc::new(
                BrowserStrategy::new(driver)
                    .with_title_keywords(config.browser.title_keywords.clone()),
            )
        }
    };
    Ok(strategy)
}
