//! HTTP adapters

pub mod proxy_fetcher;

pub use proxy_fetcher::ProxyFetcher;
