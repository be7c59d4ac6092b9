//! Outreach generation — per-channel prompt construction, model calls, and
//! message post-processing (subject, CTA, reply-rate estimate).
//!
//! Flow: extract_insights → for each channel: build prompt → generate →
//! post-process. A failed channel is logged and skipped; the caller decides
//! what an empty result set means.

use tracing::{info, warn};

use crate::analysis::insights::{extract_insights, Insights};
use crate::llm_client::{GenerateOptions, TextGenerator};
use crate::models::message::{Channel, GeneratedMessage};
use crate::models::profile::{Profile, Seniority};
use crate::outreach::prompts::build_outreach_prompt;
use crate::util::stable_hash;

/// Email subject fallbacks when no pain point is known. Selection is a
/// stable hash of the name, so the same person always gets the same subject.
const SUBJECT_TEMPLATES: &[&str] = &[
    "Quick question for {first_name}",
    "Idea for {company}",
    "{name} - collaboration idea",
    "Thought you'd find this interesting",
    "Brief question about your work at {company}",
];

const EMAIL_CTAS: &[&str] = &[
    "Would love to hear your thoughts.",
    "Would you be open to a brief chat?",
    "Let me know if this resonates.",
    "Quick 15-minute call?",
];
const LINKEDIN_CTAS: &[&str] = &[
    "Would you be open to connecting?",
    "Happy to discuss further.",
    "Let's connect!",
    "Would love your thoughts.",
];
const WHATSAPP_CTAS: &[&str] = &[
    "Interested in chatting?",
    "Let me know your thoughts!",
    "Thoughts?",
    "Open to discussing this?",
];
const SMS_CTAS: &[&str] = &["Reply if interested?", "Interested?", "Let me know!"];
const INSTAGRAM_CTAS: &[&str] = &[
    "Love your content btw!",
    "Your recent post was great!",
    "Would love to collaborate!",
];

/// Generates messages for the requested channels. Channels whose model call
/// fails or returns nothing are skipped, not fatal — partial output is fine.
pub async fn generate_outreach(
    llm: &dyn TextGenerator,
    profile: &Profile,
    channels: &[Channel],
    additional_context: Option<&str>,
    options: GenerateOptions,
) -> Vec<GeneratedMessage> {
    let insights = extract_insights(profile);
    let mut messages = Vec::with_capacity(channels.len());

    for &channel in channels {
        let prompt = build_outreach_prompt(profile, channel, &insights, additional_context);

        let content = match llm.generate(&prompt, options).await {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Message generation failed for {}: {e}; skipping channel",
                    channel.as_str()
                );
                continue;
            }
        };

        if content.trim().is_empty() {
            warn!("Empty content generated for {}", channel.as_str());
            continue;
        }

        let subject = (channel == Channel::Email)
            .then(|| generate_email_subject(profile, &insights));

        messages.push(GeneratedMessage {
            channel,
            subject,
            cta: pick_cta(&profile.name, channel),
            estimated_reply_rate: estimate_reply_rate(profile, &content),
            tone: profile.communication_style,
            content,
        });
    }

    info!(
        "Generated {}/{} messages for {}",
        messages.len(),
        channels.len(),
        profile.id
    );
    messages
}

/// Subject line for email: a pain-point hook when insights found one,
/// otherwise a deterministic pick from the fixed templates.
pub fn generate_email_subject(profile: &Profile, insights: &Insights) -> String {
    if let Some(pain_point) = insights.pain_points.first() {
        return format!(
            "How we help {} with {}",
            profile.company,
            pain_point.to_lowercase()
        );
    }

    let index = (stable_hash(&profile.name) % SUBJECT_TEMPLATES.len() as u64) as usize;
    let first_name = profile.name.split_whitespace().next().unwrap_or("there");

    SUBJECT_TEMPLATES[index]
        .replace("{first_name}", first_name)
        .replace("{name}", &profile.name)
        .replace("{company}", &profile.company)
}

/// Deterministic CTA pick per channel, keyed on the name.
pub fn pick_cta(name: &str, channel: Channel) -> String {
    let ctas = match channel {
        Channel::Email => EMAIL_CTAS,
        Channel::LinkedinDm => LINKEDIN_CTAS,
        Channel::Whatsapp => WHATSAPP_CTAS,
        Channel::Sms => SMS_CTAS,
        Channel::InstagramDm => INSTAGRAM_CTAS,
    };
    ctas[(stable_hash(name) % ctas.len() as u64) as usize].to_string()
}

/// Heuristic reply likelihood.
///
/// base 0.5 × seniority multiplier, ×1.1 for substantial content (>50 chars),
/// ×0.95 when overlong (>200 chars), ×1.15 each for mentioning the person's
/// name and company, clamped to [0.1, 1.0].
pub fn estimate_reply_rate(profile: &Profile, content: &str) -> f64 {
    let seniority_multiplier = match profile.seniority {
        Seniority::Junior => 0.8,
        Seniority::Mid => 0.7,
        Seniority::Senior => 0.6,
        Seniority::Lead => 0.5,
        Seniority::Founder => 0.4,
    };

    let mut score: f64 = 0.5 * seniority_multiplier;

    if content.len() > 50 {
        score *= 1.1;
    }
    if content.len() > 200 {
        score *= 0.95;
    }

    let content_lower = content.to_lowercase();
    if content_lower.contains(&profile.name.to_lowercase()) {
        score *= 1.15;
    }
    if !profile.company.is_empty() && content_lower.contains(&profile.company.to_lowercase()) {
        score *= 1.15;
    }

    score.clamp(0.1, 1.0)
}
