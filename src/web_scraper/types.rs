// src/web_scraper/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provenance tag on every extracted field. `Found` means the value was read
/// directly from the page, `Inferred` means it was assembled from partial
/// signal, `NotFound` means the page carried no usable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Found,
    Inferred,
    NotFound,
}

/// A value plus its provenance. A `NotFound` field always holds the type's
/// empty sentinel (`T::default()`), so the JSON output never contains a
/// fabricated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedField<T> {
    pub value: T,
    pub classification: Classification,
}

impl<T> ClassifiedField<T> {
    pub fn found(value: T) -> Self {
        Self {
            value,
            classification: Classification::Found,
        }
    }

    pub fn inferred(value: T) -> Self {
        Self {
            value,
            classification: Classification::Inferred,
        }
    }
}

impl<T: Default> ClassifiedField<T> {
    pub fn not_found() -> Self {
        Self {
            value: T::default(),
            classification: Classification::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Timeout,
    RequestError,
}

/// One failed fetch attempt. Appended to the run's error log and carried
/// into the result metadata; never cleared mid-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchError {
    pub url: String,
    pub message: String,
    pub kind: FetchErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeStatus {
    Success,
    PartialSuccess,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeMetadata {
    pub url: String,
    pub timestamp: String,
    pub pages_visited: usize,
    pub errors: Vec<FetchError>,
    pub scrape_status: ScrapeStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub company_name: ClassifiedField<String>,
    pub website_url: ClassifiedField<String>,
    pub tagline: ClassifiedField<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub emails: ClassifiedField<Vec<String>>,
    pub phones: ClassifiedField<Vec<String>>,
    pub addresses: ClassifiedField<Vec<String>>,
    pub social_media: ClassifiedField<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub description: ClassifiedField<String>,
    pub products: ClassifiedField<Vec<String>>,
    pub target_segments: ClassifiedField<Vec<String>>,
}

/// The fixed set of sub-pages the locator looks for. Ordering follows the
/// declaration order, which is also the JSON output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPageCategory {
    About,
    Products,
    Pricing,
    Contact,
    Careers,
    Investors,
}

impl KeyPageCategory {
    pub const ALL: [KeyPageCategory; 6] = [
        KeyPageCategory::About,
        KeyPageCategory::Products,
        KeyPageCategory::Pricing,
        KeyPageCategory::Contact,
        KeyPageCategory::Careers,
        KeyPageCategory::Investors,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            KeyPageCategory::About => &["about", "company", "who-we-are", "our-story", "info"],
            KeyPageCategory::Products => &["products", "solutions", "services", "offerings"],
            KeyPageCategory::Pricing => &["pricing", "plans", "packages", "cost"],
            KeyPageCategory::Contact => &["contact", "get-in-touch", "support", "reach-us"],
            KeyPageCategory::Careers => &["careers", "jobs", "hiring", "work-with-us", "join"],
            KeyPageCategory::Investors => &["investor", "ir", "financial", "shareholders"],
        }
    }
}

pub type KeyPages = BTreeMap<KeyPageCategory, ClassifiedField<String>>;

/// Successful scrape envelope. Field order here is the JSON output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub metadata: ScrapeMetadata,
    pub identity: CompanyIdentity,
    pub contact: ContactDetails,
    pub business: BusinessProfile,
    pub key_pages: KeyPages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeFailure {
    pub error: String,
    pub url: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeResult {
    Completed(ScrapeReport),
    Failed(ScrapeFailure),
}

impl ScrapeResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, ScrapeResult::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub max_pages: usize,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            max_pages: 15,
            timeout_seconds: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}
