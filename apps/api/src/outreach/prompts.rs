//! All prompt constants and prompt construction for outreach generation.

use crate::analysis::insights::Insights;
use crate::models::message::Channel;
use crate::models::profile::{CommunicationStyle, Profile};

/// Outreach prompt template. Placeholders are filled by `build_outreach_prompt`.
const OUTREACH_PROMPT_TEMPLATE: &str = r#"You are an expert cold outreach specialist. Generate a personalized, engaging {channel} message.

TARGET PERSON:
- Name: {name}
- Role: {role}
- Company: {company}
- Industry: {industry}
- Seniority: {seniority}
- Skills: {skills}

COMMUNICATION STYLE:
{style_description}

OUTREACH INSTRUCTIONS FOR {channel_upper}:
{channel_instructions}

PAIN POINTS TO ADDRESS:
{pain_points}

REQUIREMENTS:
1. Be specific and personalized - show you did research
2. Match the person's communication style exactly
3. Include a clear, compelling call-to-action
4. Keep it concise and natural
5. Avoid generic corporate language
6. Sound human and authentic{additional_context}

Generate ONLY the message content, no explanations or meta-commentary:"#;

/// Builds the full generation prompt for one channel.
pub fn build_outreach_prompt(
    profile: &Profile,
    channel: Channel,
    insights: &Insights,
    additional_context: Option<&str>,
) -> String {
    let skills = profile
        .skills
        .iter()
        .take(5)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let pain_points = if insights.pain_points.is_empty() {
        "general improvement".to_string()
    } else {
        insights.pain_points.join(", ")
    };

    let additional = additional_context
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!("\nAdditional context: {c}"))
        .unwrap_or_default();

    OUTREACH_PROMPT_TEMPLATE
        .replace("{channel_upper}", &channel.as_str().to_uppercase())
        .replace("{channel}", channel.as_str())
        .replace("{name}", &profile.name)
        .replace("{role}", &profile.role)
        .replace("{company}", &profile.company)
        .replace("{industry}", &profile.industry)
        .replace("{seniority}", profile.seniority.as_str())
        .replace("{skills}", &skills)
        .replace("{style_description}", &describe_style(profile))
        .replace("{channel_instructions}", channel_instructions(channel))
        .replace("{pain_points}", &pain_points)
        .replace("{additional_context}", &additional)
}

/// Describes the target's communication style for the model, including the
/// side metrics the classifier picked up.
pub fn describe_style(profile: &Profile) -> String {
    let base = match profile.communication_style {
        CommunicationStyle::Formal => {
            "Very professional, uses formal language, no slang, structured sentences"
        }
        CommunicationStyle::SemiFormal => {
            "Professional but approachable, some casual touches, clear and organized"
        }
        CommunicationStyle::Casual => "Conversational tone, uses everyday language, approachable",
        CommunicationStyle::VeryCasual => {
            "Very informal, uses slang, emojis, abbreviations, very relaxed"
        }
        CommunicationStyle::Mixed => {
            "Varies between professional and casual depending on context"
        }
    };

    let mut details = Vec::new();
    if profile.uses_emojis {
        details.push("Frequently uses emojis");
    }
    if profile.uses_slang {
        details.push("Uses casual slang and abbreviations");
    }
    if !profile.uses_abbreviations {
        details.push("Writes out full words, no abbreviations");
    }

    if details.is_empty() {
        base.to_string()
    } else {
        format!("{base} | {}", details.join(" | "))
    }
}

/// Per-channel register and length instructions.
pub fn channel_instructions(channel: Channel) -> &'static str {
    match channel {
        Channel::Email => {
            "Write a professional but personalized email. Include: compelling subject line, \
             personal greeting, relevant value proposition, specific CTA. Length: 150-200 words."
        }
        Channel::LinkedinDm => {
            "Write a LinkedIn-appropriate message. Be professional but friendly. LinkedIn users \
             expect concise, direct messages. Length: 100-150 words."
        }
        Channel::Whatsapp => {
            "Write a friendly WhatsApp message. Can use 'Hi' or casual greeting. Can include \
             emojis if profile uses them. Keep it short and conversational. Length: 50-100 words."
        }
        Channel::Sms => {
            "Write a short SMS message. Very concise, direct, with clear CTA. Length: 50-80 words."
        }
        Channel::InstagramDm => {
            "Write an Instagram DM. Can be very casual, use emojis, engage with their visual \
             content if mentioned. Length: 80-120 words."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use crate::models::profile::{Platform, Seniority};

    fn make_profile(style: CommunicationStyle) -> Profile {
        Profile {
            id: "john.doe@techcorp.com".into(),
            name: "John Doe".into(),
            email: Some("john.doe@techcorp.com".into()),
            role: "Senior Product Manager".into(),
            company: "TechCorp Inc".into(),
            industry: "Technology".into(),
            location: None,
            bio: String::new(),
            about: None,
            skills: vec![
                "Product Management".into(),
                "AI/ML".into(),
                "Data Analysis".into(),
                "Leadership".into(),
                "Strategy".into(),
                "Extra Skill".into(),
            ],
            interests: vec![],
            recent_activity: vec![],
            education: None,
            seniority: Seniority::Senior,
            communication_style: style,
            language: "english".into(),
            uses_emojis: false,
            uses_slang: false,
            uses_abbreviations: true,
            formal_ratio: 0.8,
            source_platform: Platform::Linkedin,
            profile_url: "https://linkedin.com/in/johndoe".into(),
            last_updated: Utc::now(),
            raw_data: json!({}),
        }
    }

    fn empty_insights() -> Insights {
        Insights {
            pain_points: vec![],
            achievements: vec![],
            best_channels: vec![],
        }
    }

    #[test]
    fn test_prompt_embeds_profile_fields() {
        let profile = make_profile(CommunicationStyle::Formal);
        let prompt = build_outreach_prompt(&profile, Channel::Email, &empty_insights(), None);
        assert!(prompt.contains("John Doe"));
        assert!(prompt.contains("TechCorp Inc"));
        assert!(prompt.contains("senior"));
        assert!(prompt.contains("OUTREACH INSTRUCTIONS FOR EMAIL"));
    }

    #[test]
    fn test_prompt_caps_skills_at_five() {
        let profile = make_profile(CommunicationStyle::Formal);
        let prompt = build_outreach_prompt(&profile, Channel::Email, &empty_insights(), None);
        assert!(prompt.contains("Strategy"));
        assert!(!prompt.contains("Extra Skill"));
    }

    #[test]
    fn test_prompt_defaults_pain_points() {
        let profile = make_profile(CommunicationStyle::Mixed);
        let prompt = build_outreach_prompt(&profile, Channel::Sms, &empty_insights(), None);
        assert!(prompt.contains("general improvement"));
    }

    #[test]
    fn test_prompt_includes_additional_context() {
        let profile = make_profile(CommunicationStyle::Mixed);
        let prompt = build_outreach_prompt(
            &profile,
            Channel::Whatsapp,
            &empty_insights(),
            Some("We met at RustConf"),
        );
        assert!(prompt.contains("Additional context: We met at RustConf"));
    }

    #[test]
    fn test_blank_additional_context_is_dropped() {
        let profile = make_profile(CommunicationStyle::Mixed);
        let prompt =
            build_outreach_prompt(&profile, Channel::Whatsapp, &empty_insights(), Some("  "));
        assert!(!prompt.contains("Additional context"));
    }

    #[test]
    fn test_style_description_mentions_details() {
        let mut profile = make_profile(CommunicationStyle::VeryCasual);
        profile.uses_emojis = true;
        profile.uses_slang = true;
        let description = describe_style(&profile);
        assert!(description.contains("Very informal"));
        assert!(description.contains("Frequently uses emojis"));
        assert!(description.contains("Uses casual slang"));
    }

    #[test]
    fn test_style_description_notes_no_abbreviations() {
        let mut profile = make_profile(CommunicationStyle::Formal);
        profile.uses_abbreviations = false;
        assert!(describe_style(&profile).contains("Writes out full words"));
    }

    #[test]
    fn test_every_channel_has_instructions() {
        for channel in [
            Channel::Email,
            Channel::LinkedinDm,
            Channel::Whatsapp,
            Channel::Sms,
            Channel::InstagramDm,
        ] {
            assert!(channel_instructions(channel).contains("Length:"));
        }
    }
}
