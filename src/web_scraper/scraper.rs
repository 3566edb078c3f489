// src/web_scraper/scraper.rs
use crate::web_scraper::business_extractor::BusinessExtractor;
use crate::web_scraper::contact_extractor::ContactExtractor;
use crate::web_scraper::fetcher::{PageFetcher, RunContext};
use crate::web_scraper::identity_extractor::IdentityExtractor;
use crate::web_scraper::key_page_locator::KeyPageLocator;
use crate::web_scraper::types::{
    ScrapeConfig, ScrapeFailure, ScrapeMetadata, ScrapeReport, ScrapeResult, ScrapeStatus,
};
use chrono::Utc;
use scraper::Html;
use tracing::info;

/// One scrape run: fetch the homepage, parse it once, hand the parsed
/// document to each extractor, and assemble the result envelope. The
/// extractors hold only compiled patterns and selectors, so one scraper
/// value can serve any number of runs, concurrent ones included.
pub struct CompanyScraper {
    fetcher: PageFetcher,
    identity_extractor: IdentityExtractor,
    contact_extractor: ContactExtractor,
    business_extractor: BusinessExtractor,
    key_page_locator: KeyPageLocator,
}

impl CompanyScraper {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            fetcher: PageFetcher::new(config),
            identity_extractor: IdentityExtractor::new(),
            contact_extractor: ContactExtractor::new(),
            business_extractor: BusinessExtractor::new(),
            key_page_locator: KeyPageLocator::new(),
        }
    }

    pub async fn scrape(&self, url: &str) -> ScrapeResult {
        let url = normalize_url(url);
        info!("Starting scrape of {}", url);

        let mut ctx = RunContext::default();
        let Some(html) = self.fetcher.fetch(&url, &mut ctx).await else {
            return ScrapeResult::Failed(ScrapeFailure {
                error: "Failed to fetch main page".to_string(),
                url,
                status: "failed".to_string(),
            });
        };

        let report = self.extract(&url, &html, ctx);
        info!("Scrape complete. Pages visited: {}", report.metadata.pages_visited);
        ScrapeResult::Completed(report)
    }

    fn extract(&self, url: &str, html: &str, ctx: RunContext) -> ScrapeReport {
        let document = Html::parse_document(html);
        let text = visible_text(&document);

        ScrapeReport {
            metadata: ScrapeMetadata {
                url: url.to_string(),
                timestamp: Utc::now().to_rfc3339(),
                pages_visited: ctx.visited.len(),
                scrape_status: if ctx.errors.is_empty() {
                    ScrapeStatus::Success
                } else {
                    ScrapeStatus::PartialSuccess
                },
                errors: ctx.errors,
            },
            identity: self.identity_extractor.extract(&document, url),
            contact: self.contact_extractor.extract(&text),
            business: self.business_extractor.extract(&document),
            key_pages: self.key_page_locator.locate(url, &document),
        }
    }
}

/// Prefix `https://` when the input carries no scheme.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// All text nodes joined and whitespace-collapsed, the haystack for the
/// contact patterns.
fn visible_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
