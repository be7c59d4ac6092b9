//! Axum route handlers for the Outreach API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::analysis::profile::build_profile;
use crate::errors::AppError;
use crate::llm_client::GenerateOptions;
use crate::models::message::{Channel, GeneratedMessage};
use crate::models::profile::{Platform, Profile};
use crate::outreach::generator::generate_outreach;
use crate::profiles::handlers::infer_platform;
use crate::profiles::store;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OutreachRequest {
    pub profile_url: String,
    pub platform: Option<Platform>,
    #[serde(default = "default_channels")]
    pub channels: Vec<Channel>,
    pub additional_context: Option<String>,
}

fn default_channels() -> Vec<Channel> {
    vec![Channel::Email, Channel::LinkedinDm, Channel::Whatsapp]
}

#[derive(Debug, Serialize)]
pub struct OutreachResponse {
    pub profile: Profile,
    pub messages: Vec<GeneratedMessage>,
    pub generated_at: DateTime<Utc>,
    pub profile_saved: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/outreach/generate
///
/// Full pipeline: fetch → classify → generate per channel → persist.
/// Channels that fail are skipped; every channel failing is a 500. The
/// interaction record is written in a background task so the response does
/// not wait on it.
pub async fn handle_generate_outreach(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<OutreachResponse>, AppError> {
    if request.profile_url.trim().is_empty() {
        return Err(AppError::Validation(
            "profile_url cannot be empty".to_string(),
        ));
    }
    if request.channels.is_empty() {
        return Err(AppError::Validation(
            "channels cannot be empty".to_string(),
        ));
    }

    let platform = request
        .platform
        .unwrap_or_else(|| infer_platform(&request.profile_url));

    let raw = state.fetcher.fetch(&request.profile_url, platform).await;
    let profile = build_profile(raw, platform);

    let options = GenerateOptions {
        max_tokens: state.config.max_tokens,
        temperature: state.config.temperature,
        top_p: state.config.top_p,
    };
    let messages = generate_outreach(
        state.llm.as_ref(),
        &profile,
        &request.channels,
        request.additional_context.as_deref(),
        options,
    )
    .await;

    if messages.is_empty() {
        return Err(AppError::Llm(
            "Message generation failed for every requested channel".to_string(),
        ));
    }

    let profile_saved = match store::save_profile(&state.db, &profile).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save profile {}: {e:?}", profile.id);
            false
        }
    };

    if profile_saved {
        if let Err(e) = store::save_messages(&state.db, &profile.id, &messages).await {
            error!("Failed to save messages for {}: {e:?}", profile.id);
        }

        let db = state.db.clone();
        let profile_id = profile.id.clone();
        let data = json!({
            "channels": request.channels.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            "message_count": messages.len(),
        });
        tokio::spawn(async move {
            if let Err(e) =
                store::save_interaction(&db, &profile_id, "outreach_generated", &data).await
            {
                error!("Failed to record interaction for {profile_id}: {e:?}");
            }
        });
    }

    info!(
        profile_id = %profile.id,
        channels = messages.len(),
        "Outreach generated"
    );

    Ok(Json(OutreachResponse {
        profile,
        messages,
        generated_at: Utc::now(),
        profile_saved,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_default_when_omitted() {
        let req: OutreachRequest =
            serde_json::from_str(r#"{"profile_url": "https://github.com/octocat"}"#).unwrap();
        assert_eq!(
            req.channels,
            vec![Channel::Email, Channel::LinkedinDm, Channel::Whatsapp]
        );
        assert!(req.additional_context.is_none());
    }

    #[test]
    fn test_explicit_channels_are_kept() {
        let req: OutreachRequest = serde_json::from_str(
            r#"{"profile_url": "u", "channels": ["sms"], "additional_context": "met at RustConf"}"#,
        )
        .unwrap();
        assert_eq!(req.channels, vec![Channel::Sms]);
        assert_eq!(req.additional_context.as_deref(), Some("met at RustConf"));
    }
}
