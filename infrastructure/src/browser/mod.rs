//! Headless browser adapters

pub mod chromium;

pub use chromium::ChromiumBrowserDriver;
