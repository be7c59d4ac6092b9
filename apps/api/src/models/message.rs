use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::profile::CommunicationStyle;

/// Outreach channel a message is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    LinkedinDm,
    Whatsapp,
    Sms,
    InstagramDm,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::LinkedinDm => "linkedin_dm",
            Channel::Whatsapp => "whatsapp",
            Channel::Sms => "sms",
            Channel::InstagramDm => "instagram_dm",
        }
    }
}

/// A generated outreach message for a single channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMessage {
    pub channel: Channel,
    /// Subject line — email only, `None` for every other channel.
    pub subject: Option<String>,
    pub content: String,
    /// Call to action appended or implied by the message.
    pub cta: String,
    pub tone: CommunicationStyle,
    /// Heuristic reply likelihood, clamped to [0.1, 1.0].
    pub estimated_reply_rate: f64,
}

/// A stored message row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MessageRow {
    pub id: String,
    pub profile_id: String,
    pub channel: String,
    pub subject: Option<String>,
    pub content: String,
    pub cta: String,
    pub tone: String,
    pub created_at: DateTime<Utc>,
}
