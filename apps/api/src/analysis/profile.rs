//! Profile builder — turns raw fetched fields into an analyzed `Profile`
//! with computed style and seniority attributes and a derived id.

use chrono::Utc;
use serde_json::json;

use crate::analysis::seniority::determine_seniority;
use crate::analysis::style::classify_style;
use crate::fetch::RawProfile;
use crate::models::profile::{Platform, Profile};
use crate::util::slugify;

/// Derives the stable profile identifier: lowercase email when known,
/// otherwise `slug(name)_slug(company)`. The same person always maps to the
/// same id, which is what makes saving an upsert.
pub fn derive_profile_id(name: &str, company: &str, email: Option<&str>) -> String {
    match email.filter(|e| !e.trim().is_empty()) {
        Some(email) => email.trim().to_lowercase(),
        None => format!("{}_{}", slugify(name), slugify(company)),
    }
}

/// Builds an analyzed profile from raw fetched data.
/// Empty name/role get placeholders; every other field passes through.
pub fn build_profile(raw: RawProfile, platform: Platform) -> Profile {
    let name = if raw.name.trim().is_empty() {
        "Unknown User".to_string()
    } else {
        raw.name.clone()
    };
    let role = if raw.role.trim().is_empty() {
        "Professional".to_string()
    } else {
        raw.role.clone()
    };

    let (style, metrics) = classify_style(&raw.bio, &raw.about, &raw.recent_activity);
    let seniority = determine_seniority(&role, raw.years_experience);

    let email = Some(raw.email.trim().to_string()).filter(|e| !e.is_empty());
    let id = derive_profile_id(&name, &raw.company, email.as_deref());

    let raw_data = json!(&raw);

    Profile {
        id,
        name,
        email,
        role,
        company: raw.company,
        industry: if raw.industry.is_empty() {
            "Technology".to_string()
        } else {
            raw.industry
        },
        location: Some(raw.location).filter(|l| !l.is_empty()),
        bio: raw.bio,
        about: Some(raw.about).filter(|a| !a.is_empty()),
        skills: raw.skills,
        interests: raw.interests,
        recent_activity: raw.recent_activity,
        education: Some(raw.education).filter(|e| !e.is_empty()),
        seniority,
        communication_style: style,
        language: if raw.language.is_empty() {
            "english".to_string()
        } else {
            raw.language
        },
        uses_emojis: metrics.uses_emojis,
        uses_slang: metrics.uses_slang,
        uses_abbreviations: metrics.uses_abbreviations,
        formal_ratio: metrics.formal_ratio,
        source_platform: platform,
        profile_url: raw.profile_url,
        last_updated: Utc::now(),
        raw_data,
    }
}
