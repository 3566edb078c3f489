// src/web_scraper/key_page_locator.rs
use crate::web_scraper::types::{Classification, ClassifiedField, KeyPageCategory, KeyPages};
use scraper::{Html, Selector};
use url::Url;

pub struct KeyPageLocator {
    anchor_selector: Selector,
}

impl KeyPageLocator {
    pub fn new() -> Self {
        Self {
            anchor_selector: Selector::parse("a[href]").unwrap(),
        }
    }

    /// Scan anchors in document order and keyword-match each category.
    /// The first matching anchor wins per category; one anchor may satisfy
    /// several categories.
    pub fn locate(&self, base_url: &str, document: &Html) -> KeyPages {
        let mut pages: KeyPages = KeyPageCategory::ALL
            .iter()
            .map(|category| (*category, ClassifiedField::not_found()))
            .collect();

        let base = Url::parse(base_url).ok();

        for anchor in document.select(&self.anchor_selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let href_lower = href.to_lowercase();
            let text_lower = anchor.text().collect::<String>().to_lowercase();

            for category in KeyPageCategory::ALL {
                if pages[&category].classification == Classification::Found {
                    continue;
                }
                let matched = category
                    .keywords()
                    .iter()
                    .any(|keyword| href_lower.contains(keyword) || text_lower.contains(keyword));
                if !matched {
                    continue;
                }
                if let Some(resolved) = resolve_href(base.as_ref(), href) {
                    pages.insert(category, ClassifiedField::found(resolved));
                }
            }
        }

        pages
    }
}

/// Absolute hrefs pass through; relative ones are joined onto the base URL.
fn resolve_href(base: Option<&Url>, href: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => base
            .and_then(|base| base.join(href).ok())
            .map(|url| url.to_string()),
    }
}
