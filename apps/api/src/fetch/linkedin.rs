//! LinkedIn profile extraction from public page HTML.
//!
//! Best-effort only: selectors track LinkedIn's public profile markup, which
//! changes without notice. Callers fall back to demo data when nothing parses.

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tracing::info;

use crate::fetch::RawProfile;

const NAME_SELECTORS: &[&str] = &["h1.text-heading-xlarge", "h1.top-card-layout__title", "h1"];

const HEADLINE_SELECTORS: &[&str] = &[
    "div.text-body-medium",
    ".top-card-layout__headline",
    "h2.top-card-layout__headline",
];

const ABOUT_SELECTORS: &[&str] = &[
    "div.show-more-less-text",
    "section.summary div.core-section-container__content",
    "[class*='about'] p",
];

pub async fn fetch_profile(client: &reqwest::Client, url: &str) -> Result<RawProfile> {
    info!("Scraping LinkedIn profile: {url}");

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch LinkedIn profile page")?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP error: {}", response.status());
    }

    let html = response
        .text()
        .await
        .context("Failed to read response body")?;

    parse_profile_html(&html, url)
}

/// Parses profile fields out of page HTML. Split from the fetch so the
/// selector logic is testable without a network.
pub fn parse_profile_html(html: &str, url: &str) -> Result<RawProfile> {
    let document = Html::parse_document(html);

    let name = find_text_by_selectors(&document, NAME_SELECTORS)
        .unwrap_or_else(|| "Professional".to_string());
    let headline = find_text_by_selectors(&document, HEADLINE_SELECTORS)
        .unwrap_or_else(|| "Professional".to_string());
    let about = find_text_by_selectors(&document, ABOUT_SELECTORS).unwrap_or_default();

    // Headlines commonly read "Role at Company"
    let company = headline
        .split_once(" at ")
        .map(|(_, company)| company.trim().to_string())
        .unwrap_or_default();

    Ok(RawProfile {
        name,
        role: headline.clone(),
        company,
        bio: headline,
        about,
        industry: "Technology".to_string(),
        years_experience: 5,
        language: "english".to_string(),
        profile_url: url.to_string(),
        ..RawProfile::default()
    })
}

fn find_text_by_selectors(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = clean_text(&element.text().collect::<Vec<_>>().join(" "));
                if text.len() > 1 {
                    return Some(text);
                }
            }
        }
    }
    None
}

fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <html><body>
            <h1 class="text-heading-xlarge"> Jane   Smith </h1>
            <div class="text-body-medium">Engineering Manager at Acme Corp</div>
            <div class="show-more-less-text">Leading platform teams. Passionate about reliability.</div>
        </body></html>
    "#;

    #[test]
    fn test_parses_name_headline_and_about() {
        let raw = parse_profile_html(SAMPLE_HTML, "https://linkedin.com/in/janesmith").unwrap();
        assert_eq!(raw.name, "Jane Smith");
        assert_eq!(raw.role, "Engineering Manager at Acme Corp");
        assert!(raw.about.contains("reliability"));
        assert_eq!(raw.profile_url, "https://linkedin.com/in/janesmith");
    }

    #[test]
    fn test_company_extracted_from_headline() {
        let raw = parse_profile_html(SAMPLE_HTML, "https://linkedin.com/in/janesmith").unwrap();
        assert_eq!(raw.company, "Acme Corp");
    }

    #[test]
    fn test_headline_without_at_leaves_company_empty() {
        let html = r#"<html><body>
            <h1 class="text-heading-xlarge">Jane Smith</h1>
            <div class="text-body-medium">Engineering Manager</div>
        </body></html>"#;
        let raw = parse_profile_html(html, "u").unwrap();
        assert!(raw.company.is_empty());
    }

    #[test]
    fn test_empty_page_gets_placeholders() {
        let raw = parse_profile_html("<html><body></body></html>", "u").unwrap();
        assert_eq!(raw.name, "Professional");
        assert_eq!(raw.role, "Professional");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a \n  b\t c "), "a b c");
    }
}
