// src/web_scraper/fetcher.rs
use crate::web_scraper::types::{FetchError, FetchErrorKind, ScrapeConfig};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Per-run fetch state: which URLs were retrieved and which attempts failed.
/// Created fresh by the orchestrator for every scrape so nothing leaks
/// between runs.
#[derive(Debug, Default)]
pub struct RunContext {
    pub visited: HashSet<String>,
    pub errors: Vec<FetchError>,
}

impl RunContext {
    fn record_failure(&mut self, url: &str, error: &reqwest::Error) {
        let kind = if error.is_timeout() {
            FetchErrorKind::Timeout
        } else {
            FetchErrorKind::RequestError
        };
        warn!("Error fetching {}: {}", url, error);
        self.errors.push(FetchError {
            url: url.to_string(),
            message: error.to_string(),
            kind,
        });
    }
}

pub struct PageFetcher {
    client: Client,
    max_pages: usize,
}

impl PageFetcher {
    pub fn new(config: &ScrapeConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_pages: config.max_pages,
        }
    }

    /// Fetch one page. Returns `None` when the URL was already visited or
    /// the page budget is spent (silent skip, no network call), and on any
    /// transport failure (recorded in the context's error log). The URL only
    /// enters the visited set once a 2xx body has been read.
    pub async fn fetch(&self, url: &str, ctx: &mut RunContext) -> Option<String> {
        if ctx.visited.contains(url) || ctx.visited.len() >= self.max_pages {
            return None;
        }

        debug!("Fetching: {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                ctx.record_failure(url, &e);
                return None;
            }
        };

        if let Err(e) = response.error_for_status_ref() {
            ctx.record_failure(url, &e);
            return None;
        }

        match response.text().await {
            Ok(body) => {
                debug!("Fetched {} bytes from {}", body.len(), url);
                ctx.visited.insert(url.to_string());
                Some(body)
            }
            Err(e) => {
                ctx.record_failure(url, &e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn skips_already_visited_url_without_recording_an_error() {
        let fetcher = PageFetcher::new(&ScrapeConfig::default());
        let mut ctx = RunContext::default();
        ctx.visited.insert("https://acme.com".to_string());

        let body = fetcher.fetch("https://acme.com", &mut ctx).await;

        assert!(body.is_none());
        assert!(ctx.errors.is_empty());
        assert_eq!(ctx.visited.len(), 1);
    }

    #[tokio::test]
    async fn skips_when_page_budget_is_spent() {
        let config = ScrapeConfig {
            max_pages: 0,
            ..ScrapeConfig::default()
        };
        let fetcher = PageFetcher::new(&config);
        let mut ctx = RunContext::default();

        let body = fetcher.fetch("https://acme.com", &mut ctx).await;

        assert!(body.is_none());
        assert!(ctx.errors.is_empty());
        assert!(ctx.visited.is_empty());
    }

    #[tokio::test]
    async fn records_request_error_on_connection_failure() {
        let config = ScrapeConfig {
            timeout_seconds: 2,
            ..ScrapeConfig::default()
        };
        let fetcher = PageFetcher::new(&config);
        let mut ctx = RunContext::default();

        // Port 1 on loopback is not listening, so the connection is refused.
        let body = fetcher.fetch("http://127.0.0.1:1/", &mut ctx).await;

        assert!(body.is_none());
        assert!(ctx.visited.is_empty());
        assert_eq!(ctx.errors.len(), 1);
        assert_eq!(ctx.errors[0].kind, FetchErrorKind::RequestError);
        assert_eq!(ctx.errors[0].url, "http://127.0.0.1:1/");
        assert!(!ctx.errors[0].message.is_empty());
    }
}
