// src/web_scraper/contact_extractor.rs
use crate::web_scraper::types::{ClassifiedField, ContactDetails};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

const MAX_EMAILS: usize = 10;
const MAX_PHONES: usize = 5;
const MIN_PHONE_CHARS: usize = 6;

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    social_patterns: Vec<(&'static str, Regex)>,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
            phone_regex: Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4,6}")
                .unwrap(),
            social_patterns: vec![
                ("linkedin", Regex::new(r"linkedin\.com/company/[\w-]+").unwrap()),
                ("twitter", Regex::new(r"twitter\.com/\w+").unwrap()),
                ("facebook", Regex::new(r"facebook\.com/\w+").unwrap()),
                ("instagram", Regex::new(r"instagram\.com/\w+").unwrap()),
                ("youtube", Regex::new(r"youtube\.com/[/@\w]+").unwrap()),
            ],
        }
    }

    /// Pattern-match contact details out of the page's visible text.
    pub fn extract(&self, text: &str) -> ContactDetails {
        let emails = matched_unique(&self.email_regex, text, MAX_EMAILS, 0);
        let phones = matched_unique(&self.phone_regex, text, MAX_PHONES, MIN_PHONE_CHARS);
        debug!("Matched {} emails and {} phones", emails.len(), phones.len());

        let mut social_media = BTreeMap::new();
        for (platform, pattern) in &self.social_patterns {
            if let Some(m) = pattern.find(text) {
                social_media.insert(platform.to_string(), format!("https://{}", m.as_str()));
            }
        }

        // The social mapping is assembled from matched fragments rather than
        // copied verbatim, so it starts out inferred and is only upgraded
        // once at least one platform matched. An empty mapping keeps the
        // inferred tag.
        let social_media = if social_media.is_empty() {
            ClassifiedField::inferred(social_media)
        } else {
            ClassifiedField::found(social_media)
        };

        ContactDetails {
            emails: classify_list(emails),
            phones: classify_list(phones),
            addresses: ClassifiedField::not_found(),
            social_media,
        }
    }
}

/// All matches of `pattern`, deduplicated in first-occurrence order, with
/// matches shorter than `min_chars` discarded and at most `cap` kept.
fn matched_unique(pattern: &Regex, text: &str, cap: usize, min_chars: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for m in pattern.find_iter(text) {
        let value = m.as_str().to_string();
        if value.chars().count() >= min_chars && seen.insert(value.clone()) {
            values.push(value);
            if values.len() == cap {
                break;
            }
        }
    }
    values
}

fn classify_list(values: Vec<String>) -> ClassifiedField<Vec<String>> {
    if values.is_empty() {
        ClassifiedField::not_found()
    } else {
        ClassifiedField::found(values)
    }
}
