//! GitHub profile extraction via the public users API.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::fetch::RawProfile;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Subset of the GitHub users API response we care about.
#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
    name: Option<String>,
    bio: Option<String>,
    company: Option<String>,
    location: Option<String>,
    email: Option<String>,
}

pub async fn fetch_profile(client: &reqwest::Client, url: &str) -> Result<RawProfile> {
    let username = extract_username(url)
        .with_context(|| format!("Could not extract GitHub username from {url}"))?;

    info!("Fetching GitHub profile: {username}");

    let api_url = format!("{GITHUB_API_BASE}/users/{username}");
    let response = client
        .get(&api_url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .context("Failed to call GitHub users API")?;

    if !response.status().is_success() {
        anyhow::bail!("GitHub API returned {}", response.status());
    }

    let user: GitHubUser = response
        .json()
        .await
        .context("Failed to parse GitHub API response")?;

    Ok(RawProfile {
        name: user.name.unwrap_or_else(|| user.login.clone()),
        role: user.bio.clone().unwrap_or_else(|| "Developer".to_string()),
        company: user.company.unwrap_or_default(),
        bio: user.bio.unwrap_or_default(),
        skills: vec!["Programming".to_string(), "Development".to_string()],
        interests: vec!["Open Source".to_string(), "Coding".to_string()],
        industry: "Technology".to_string(),
        location: user.location.unwrap_or_default(),
        email: user.email.unwrap_or_default(),
        years_experience: 5,
        language: "english".to_string(),
        profile_url: url.to_string(),
        ..RawProfile::default()
    })
}

/// Pulls the username segment out of a github.com URL.
fn extract_username(url: &str) -> Option<String> {
    let rest = url.split("github.com/").nth(1)?;
    let username: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if username.is_empty() {
        None
    } else {
        Some(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_username_plain() {
        assert_eq!(
            extract_username("https://github.com/alexkumar").as_deref(),
            Some("alexkumar")
        );
    }

    #[test]
    fn test_extract_username_with_trailing_path() {
        assert_eq!(
            extract_username("https://github.com/alex-kumar/some-repo").as_deref(),
            Some("alex-kumar")
        );
    }

    #[test]
    fn test_extract_username_rejects_non_github_urls() {
        assert!(extract_username("https://example.com/alexkumar").is_none());
        assert!(extract_username("https://github.com/").is_none());
    }

    #[test]
    fn test_github_user_deserializes_with_nulls() {
        let json = r#"{
            "login": "octocat",
            "name": null,
            "bio": null,
            "company": null,
            "location": null,
            "email": null
        }"#;
        let user: GitHubUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "octocat");
        assert!(user.name.is_none());
    }
}
