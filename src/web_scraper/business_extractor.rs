// src/web_scraper/business_extractor.rs
use crate::web_scraper::types::{BusinessProfile, ClassifiedField};
use scraper::{Html, Selector};

const MAX_PARAGRAPHS_SCANNED: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 500;

pub struct BusinessExtractor {
    paragraph_selector: Selector,
}

impl BusinessExtractor {
    pub fn new() -> Self {
        Self {
            paragraph_selector: Selector::parse("p").unwrap(),
        }
    }

    /// Picks the first of the leading paragraphs whose length suggests a
    /// real description rather than a nav fragment or a wall of legal text.
    pub fn extract(&self, document: &Html) -> BusinessProfile {
        let description = document
            .select(&self.paragraph_selector)
            .take(MAX_PARAGRAPHS_SCANNED)
            .map(|paragraph| paragraph.text().collect::<String>().trim().to_string())
            .find(|text| {
                let chars = text.chars().count();
                chars > MIN_DESCRIPTION_CHARS && chars < MAX_DESCRIPTION_CHARS
            })
            .map(ClassifiedField::found)
            .unwrap_or_else(ClassifiedField::not_found);

        BusinessProfile {
            description,
            products: ClassifiedField::not_found(),
            target_segments: ClassifiedField::inferred(Vec::new()),
        }
    }
}
