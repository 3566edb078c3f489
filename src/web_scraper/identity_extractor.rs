// src/web_scraper/identity_extractor.rs
use crate::web_scraper::types::{ClassifiedField, CompanyIdentity};
use scraper::{Html, Selector};

pub struct IdentityExtractor {
    title_selector: Selector,
    heading_selector: Selector,
    meta_description_selector: Selector,
}

impl IdentityExtractor {
    pub fn new() -> Self {
        Self {
            title_selector: Selector::parse("title").unwrap(),
            heading_selector: Selector::parse("h1").unwrap(),
            meta_description_selector: Selector::parse(r#"meta[name="description"]"#).unwrap(),
        }
    }

    pub fn extract(&self, document: &Html, base_url: &str) -> CompanyIdentity {
        let mut company_name: ClassifiedField<String> = ClassifiedField::not_found();

        // Title text before the first '|' delimiter, e.g. "Acme Corp | Home".
        if let Some(title) = document.select(&self.title_selector).next() {
            let name = title
                .text()
                .collect::<String>()
                .split('|')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            if !name.is_empty() {
                company_name = ClassifiedField::found(name);
            }
        }

        // A short first-level heading that differs from the title wins.
        if let Some(heading) = document.select(&self.heading_selector).next() {
            let text = heading.text().collect::<String>().trim().to_string();
            if !text.is_empty() && text.chars().count() < 100 && text != company_name.value {
                company_name = ClassifiedField::found(text);
            }
        }

        let tagline = document
            .select(&self.meta_description_selector)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .map(|content| content.trim().chars().take(200).collect::<String>())
            .filter(|content| !content.is_empty())
            .map(ClassifiedField::found)
            .unwrap_or_else(ClassifiedField::not_found);

        CompanyIdentity {
            company_name,
            website_url: ClassifiedField::found(base_url.to_string()),
            tagline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_scraper::types::Classification;

    fn extract(html: &str) -> CompanyIdentity {
        let document = Html::parse_document(html);
        IdentityExtractor::new().extract(&document, "https://acme.com")
    }

    #[test]
    fn company_name_from_title_before_pipe() {
        let identity = extract("<html><head><title>Acme Corp | Home</title></head><body></body></html>");
        assert_eq!(identity.company_name.value, "Acme Corp");
        assert_eq!(identity.company_name.classification, Classification::Found);
    }

    #[test]
    fn short_heading_overrides_title() {
        let identity = extract(
            "<html><head><title>Acme Corp | Home</title></head>\
             <body><h1>Acme Corporation</h1></body></html>",
        );
        assert_eq!(identity.company_name.value, "Acme Corporation");
        assert_eq!(identity.company_name.classification, Classification::Found);
    }

    #[test]
    fn long_heading_does_not_override_title() {
        let heading = "x".repeat(120);
        let html = format!(
            "<html><head><title>Acme Corp</title></head><body><h1>{}</h1></body></html>",
            heading
        );
        let identity = extract(&html);
        assert_eq!(identity.company_name.value, "Acme Corp");
    }

    #[test]
    fn heading_equal_to_title_is_ignored() {
        let identity = extract(
            "<html><head><title>Acme Corp</title></head><body><h1>Acme Corp</h1></body></html>",
        );
        assert_eq!(identity.company_name.value, "Acme Corp");
        assert_eq!(identity.company_name.classification, Classification::Found);
    }

    #[test]
    fn heading_alone_is_enough() {
        let identity = extract("<html><body><h1>Acme Corp</h1></body></html>");
        assert_eq!(identity.company_name.value, "Acme Corp");
        assert_eq!(identity.company_name.classification, Classification::Found);
    }

    #[test]
    fn missing_title_and_heading_yields_not_found() {
        let identity = extract("<html><body><p>hello</p></body></html>");
        assert_eq!(identity.company_name.value, "");
        assert_eq!(identity.company_name.classification, Classification::NotFound);
    }

    #[test]
    fn website_url_is_always_found_and_verbatim() {
        let identity = extract("<html><body></body></html>");
        assert_eq!(identity.website_url.value, "https://acme.com");
        assert_eq!(identity.website_url.classification, Classification::Found);
    }

    #[test]
    fn tagline_from_meta_description_truncated_to_200_chars() {
        let description = "d".repeat(300);
        let html = format!(
            r#"<html><head><meta name="description" content="{}"></head><body></body></html>"#,
            description
        );
        let identity = extract(&html);
        assert_eq!(identity.tagline.value.chars().count(), 200);
        assert_eq!(identity.tagline.classification, Classification::Found);
    }

    #[test]
    fn missing_meta_description_yields_not_found_tagline() {
        let identity = extract("<html><head><title>Acme</title></head><body></body></html>");
        assert_eq!(identity.tagline.value, "");
        assert_eq!(identity.tagline.classification, Classification::NotFound);
    }
}
