//! Insights extraction — likely pain points, notable achievements, and
//! recommended outreach channels for a profile. Feeds prompt construction.

use serde::Serialize;

use crate::models::message::Channel;
use crate::models::profile::{CommunicationStyle, Platform, Profile};

/// Derived talking points for a profile.
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub pain_points: Vec<String>,
    pub achievements: Vec<String>,
    pub best_channels: Vec<Channel>,
}

pub fn extract_insights(profile: &Profile) -> Insights {
    Insights {
        pain_points: identify_pain_points(&profile.role),
        achievements: extract_achievements(profile),
        best_channels: recommend_channels(profile),
    }
}

/// Maps role keywords to the pain points that role typically carries.
/// Buckets are additive — a "Founder & CTO" collects both sets.
fn identify_pain_points(role: &str) -> Vec<String> {
    let role_lower = role.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| role_lower.contains(k));
    let mut pain_points = Vec::new();

    if has(&["product manager", "pm", "product"]) {
        pain_points.extend([
            "User retention and engagement".to_string(),
            "Feature prioritization".to_string(),
            "Cross-functional coordination".to_string(),
        ]);
    }
    if has(&["founder", "ceo", "startup"]) {
        pain_points.extend([
            "Team scaling".to_string(),
            "Product-market fit".to_string(),
            "Fundraising".to_string(),
        ]);
    }
    if has(&["engineer", "developer", "cto"]) {
        pain_points.extend([
            "Technical debt".to_string(),
            "Team productivity".to_string(),
            "System reliability".to_string(),
        ]);
    }
    if has(&["marketing", "growth", "sales"]) {
        pain_points.extend([
            "Lead generation".to_string(),
            "Conversion optimization".to_string(),
            "Customer acquisition cost".to_string(),
        ]);
    }

    pain_points
}

fn extract_achievements(profile: &Profile) -> Vec<String> {
    let mut achievements = Vec::new();

    if let Some(education) = profile.education.as_deref().filter(|e| !e.is_empty()) {
        achievements.push(format!("Educated at {education}"));
    }
    if !profile.company.is_empty() {
        achievements.push(format!("Works at {}", profile.company));
    }
    if !profile.skills.is_empty() {
        let top: Vec<&str> = profile.skills.iter().take(3).map(String::as_str).collect();
        achievements.push(format!("Skills: {}", top.join(", ")));
    }

    achievements
}

/// Email always; LinkedIn DM when reachable there; messaging apps for casual
/// profiles, SMS otherwise.
fn recommend_channels(profile: &Profile) -> Vec<Channel> {
    let mut channels = vec![Channel::Email];

    if profile.email.is_some() || profile.source_platform == Platform::Linkedin {
        channels.push(Channel::LinkedinDm);
    }

    let casual = matches!(
        profile.communication_style,
        CommunicationStyle::Casual | CommunicationStyle::VeryCasual
    );
    if profile.uses_slang || casual {
        channels.push(Channel::Whatsapp);
        channels.push(Channel::InstagramDm);
    } else {
        channels.push(Channel::Sms);
    }

    channels
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn make_profile(role: &str, style: CommunicationStyle, uses_slang: bool) -> Profile {
        Profile {
            id: "test".to_string(),
            name: "Test Person".to_string(),
            email: None,
            role: role.to_string(),
            company: "TestCorp".to_string(),
            industry: "Technology".to_string(),
            location: None,
            bio: String::new(),
            about: None,
            skills: vec![
                "Rust".to_string(),
                "SQL".to_string(),
                "Kubernetes".to_string(),
                "Go".to_string(),
            ],
            interests: vec![],
            recent_activity: vec![],
            education: Some("MIT".to_string()),
            seniority: Default::default(),
            communication_style: style,
            language: "english".to_string(),
            uses_emojis: false,
            uses_slang,
            uses_abbreviations: false,
            formal_ratio: 0.5,
            source_platform: Platform::Github,
            profile_url: "https://github.com/test".to_string(),
            last_updated: Utc::now(),
            raw_data: json!({}),
        }
    }

    #[test]
    fn test_product_roles_get_product_pain_points() {
        let points = identify_pain_points("Senior Product Manager");
        assert!(points.iter().any(|p| p.contains("retention")));
    }

    #[test]
    fn test_founder_cto_collects_both_buckets() {
        let points = identify_pain_points("Founder & CTO");
        assert!(points.iter().any(|p| p.contains("Fundraising")));
        assert!(points.iter().any(|p| p.contains("Technical debt")));
    }

    #[test]
    fn test_unknown_role_has_no_pain_points() {
        assert!(identify_pain_points("Chef").is_empty());
    }

    #[test]
    fn test_achievements_include_education_company_and_top_skills() {
        let profile = make_profile("Engineer", CommunicationStyle::Mixed, false);
        let achievements = extract_achievements(&profile);
        assert_eq!(achievements.len(), 3);
        assert!(achievements[0].contains("MIT"));
        assert!(achievements[1].contains("TestCorp"));
        // Only the top three skills are listed
        assert!(achievements[2].contains("Kubernetes"));
        assert!(!achievements[2].contains("Go"));
    }

    #[test]
    fn test_casual_profile_gets_messaging_apps() {
        let profile = make_profile("Engineer", CommunicationStyle::VeryCasual, true);
        let channels = recommend_channels(&profile);
        assert!(channels.contains(&Channel::Whatsapp));
        assert!(channels.contains(&Channel::InstagramDm));
        assert!(!channels.contains(&Channel::Sms));
    }

    #[test]
    fn test_formal_profile_gets_sms_not_messaging_apps() {
        let profile = make_profile("Engineer", CommunicationStyle::Formal, false);
        let channels = recommend_channels(&profile);
        assert!(channels.contains(&Channel::Sms));
        assert!(!channels.contains(&Channel::Whatsapp));
    }

    #[test]
    fn test_email_is_always_recommended() {
        let profile = make_profile("Chef", CommunicationStyle::Mixed, false);
        assert_eq!(recommend_channels(&profile)[0], Channel::Email);
    }

    #[test]
    fn test_linkedin_source_recommends_linkedin_dm() {
        let mut profile = make_profile("Engineer", CommunicationStyle::Mixed, false);
        profile.source_platform = Platform::Linkedin;
        assert!(recommend_channels(&profile).contains(&Channel::LinkedinDm));
    }
}
