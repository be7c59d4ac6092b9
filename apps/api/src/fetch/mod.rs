//! Profile-data fetch — best-effort, demo-quality by design.
//!
//! LinkedIn is scraped from page HTML, GitHub goes through the public users
//! API, everything else (and every failure) substitutes a canned demo
//! profile. There is no retry or backoff at this layer: one attempt, then
//! the fallback.

pub mod demo;
pub mod github;
pub mod linkedin;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::profile::Platform;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Raw profile fields as fetched from a platform, before analysis.
/// Missing fields stay at their defaults and the analyzer substitutes
/// placeholders where the data model requires non-empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfile {
    pub name: String,
    pub role: String,
    pub company: String,
    pub bio: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub recent_activity: Vec<String>,
    pub education: String,
    pub industry: String,
    pub location: String,
    pub email: String,
    pub years_experience: u32,
    pub language: String,
    pub profile_url: String,
}

/// Fetches raw profile data for a URL, falling back to a demo profile on any
/// failure or unsupported platform.
pub struct ProfileFetcher {
    client: reqwest::Client,
}

impl Default for ProfileFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetches profile data. Never fails — the demo fallback absorbs every
    /// error path, per the engine's fallback-substitution error model.
    pub async fn fetch(&self, url: &str, platform: Platform) -> RawProfile {
        let result = if url.contains("linkedin.com") || platform == Platform::Linkedin {
            linkedin::fetch_profile(&self.client, url).await
        } else if url.contains("github.com") || platform == Platform::Github {
            github::fetch_profile(&self.client, url).await
        } else {
            Err(anyhow::anyhow!(
                "Unsupported platform: {}",
                platform.as_str()
            ))
        };

        match result {
            Ok(raw) => {
                info!("Fetched profile data for {url}");
                raw
            }
            Err(e) => {
                warn!("Profile fetch failed for {url} ({e}); substituting demo profile");
                demo::fallback_profile(url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_platform_falls_back_to_demo() {
        let fetcher = ProfileFetcher::new();
        let raw = fetcher
            .fetch("https://instagram.com/someone", Platform::Instagram)
            .await;
        // Demo profiles always carry a name and role
        assert!(!raw.name.is_empty());
        assert!(!raw.role.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_falls_back_to_demo() {
        let fetcher = ProfileFetcher::new();
        let raw = fetcher
            .fetch(
                "https://linkedin.com.invalid.localdomain/in/nobody",
                Platform::Linkedin,
            )
            .await;
        assert!(!raw.name.is_empty());
    }
}
