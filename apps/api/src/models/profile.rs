use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Communication style bucket detected from profile text.
/// Drives the register of every generated message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    Formal,
    SemiFormal,
    Casual,
    VeryCasual,
    #[default]
    Mixed,
}

impl CommunicationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Formal => "formal",
            CommunicationStyle::SemiFormal => "semi_formal",
            CommunicationStyle::Casual => "casual",
            CommunicationStyle::VeryCasual => "very_casual",
            CommunicationStyle::Mixed => "mixed",
        }
    }
}

/// Source platform a profile was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Linkedin,
    Twitter,
    Instagram,
    Github,
    PersonalWebsite,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Github => "github",
            Platform::PersonalWebsite => "personal_website",
        }
    }
}

/// Seniority bucket derived from the role title (with an experience fallback).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    #[default]
    Junior,
    Mid,
    Senior,
    Lead,
    Founder,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
            Seniority::Lead => "lead",
            Seniority::Founder => "founder",
        }
    }
}

/// Style metrics computed alongside the communication-style bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StyleMetrics {
    pub uses_emojis: bool,
    pub uses_slang: bool,
    pub uses_abbreviations: bool,
    /// 0.0 – 1.0 share of formal signal words. 0.5 when no signal at all.
    pub formal_ratio: f64,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        StyleMetrics {
            uses_emojis: false,
            uses_slang: false,
            uses_abbreviations: false,
            formal_ratio: 0.5,
        }
    }
}

/// An analyzed profile: fetched fields plus computed style/seniority attributes.
///
/// `id` is derived, not assigned: lowercase email when present, else
/// `slug(name)_slug(company)`. Saving the same person twice upserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
    pub company: String,
    pub industry: String,
    pub location: Option<String>,
    pub bio: String,
    pub about: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub recent_activity: Vec<String>,
    pub education: Option<String>,
    pub seniority: Seniority,
    pub communication_style: CommunicationStyle,
    pub language: String,
    pub uses_emojis: bool,
    pub uses_slang: bool,
    pub uses_abbreviations: bool,
    pub formal_ratio: f64,
    pub source_platform: Platform,
    pub profile_url: String,
    pub last_updated: DateTime<Utc>,
    /// Raw fetched payload, kept for reprocessing.
    #[serde(default)]
    pub raw_data: Value,
}

/// A profile row as stored in SQLite. The full `Profile` lives in `data`;
/// the scalar columns exist for search and filtering.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub email: Option<String>,
    pub industry: String,
    pub platform: String,
    pub profile_url: String,
    pub data: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
