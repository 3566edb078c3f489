pub mod business_extractor;
pub mod contact_extractor;
pub mod fetcher;
pub mod identity_extractor;
pub mod key_page_locator;
pub mod scraper;
pub mod types;

// Re-export the main types for easy importing
pub use scraper::CompanyScraper;
pub use types::{ScrapeConfig, ScrapeResult};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
