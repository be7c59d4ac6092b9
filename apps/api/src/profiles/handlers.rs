//! Axum route handlers for the Profiles API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::analysis::profile::build_profile;
use crate::errors::AppError;
use crate::models::profile::{Platform, Profile};
use crate::profiles::store;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub profile_url: String,
    /// Optional override; inferred from the URL when absent.
    pub platform: Option<Platform>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub profile: Profile,
    pub profile_saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Serialize)]
pub struct IndustryResponse {
    pub industry: String,
    pub count: usize,
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub database: store::DatabaseStats,
    pub model_name: String,
    pub model_loaded: bool,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub format: String,
    pub path: String,
}

/// Picks the platform for a URL when the caller did not name one.
pub fn infer_platform(url: &str) -> Platform {
    if url.contains("linkedin.com") {
        Platform::Linkedin
    } else if url.contains("github.com") {
        Platform::Github
    } else if url.contains("twitter.com") || url.contains("x.com") {
        Platform::Twitter
    } else if url.contains("instagram.com") {
        Platform::Instagram
    } else {
        Platform::PersonalWebsite
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profiles/analyze
///
/// Fetches and classifies a profile, then upserts it. A save failure is
/// reported in `profile_saved` rather than failing the request — the analyzed
/// profile is still useful without persistence.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.profile_url.trim().is_empty() {
        return Err(AppError::Validation(
            "profile_url cannot be empty".to_string(),
        ));
    }

    let platform = request
        .platform
        .unwrap_or_else(|| infer_platform(&request.profile_url));

    let raw = state.fetcher.fetch(&request.profile_url, platform).await;
    let profile = build_profile(raw, platform);

    let profile_saved = match store::save_profile(&state.db, &profile).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save profile {}: {e:?}", profile.id);
            false
        }
    };

    info!(profile_id = %profile.id, "Profile analyzed");
    Ok(Json(AnalyzeResponse {
        profile,
        profile_saved,
    }))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let profile = store::get_profile(&state.db, &id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;

    Ok(Json(profile))
}

/// GET /api/v1/profiles/search?q=&limit=
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    if params.q.trim().is_empty() {
        return Err(AppError::Validation("q cannot be empty".to_string()));
    }
    let limit = params.limit.unwrap_or(20).min(100);

    let profiles = store::search_profiles(&state.db, params.q.trim(), limit)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(SearchResponse {
        query: params.q,
        count: profiles.len(),
        profiles,
    }))
}

/// GET /api/v1/profiles/industry/:industry
pub async fn handle_by_industry(
    State(state): State<AppState>,
    Path(industry): Path<String>,
) -> Result<Json<IndustryResponse>, AppError> {
    let profiles = store::profiles_by_industry(&state.db, &industry)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(IndustryResponse {
        industry,
        count: profiles.len(),
        profiles,
    }))
}

/// GET /api/v1/stats
pub async fn handle_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let database = store::database_stats(&state.db, &state.config.database_path)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(StatsResponse {
        database,
        model_name: state.llm.model_name().to_string(),
        model_loaded: state.llm.is_loaded(),
    }))
}

/// POST /api/v1/profiles/export?format=json
///
/// Only JSON is supported; any other format is a validation error.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Json<ExportResponse>, AppError> {
    let format = params.format.unwrap_or_else(|| "json".to_string());
    if format != "json" {
        return Err(AppError::Validation(format!(
            "Unsupported export format '{format}'; only 'json' is supported"
        )));
    }

    let path = store::export_profiles(&state.db, &state.config.data_dir)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(ExportResponse {
        format,
        path: path.display().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_platform_from_url() {
        assert_eq!(
            infer_platform("https://www.linkedin.com/in/someone"),
            Platform::Linkedin
        );
        assert_eq!(
            infer_platform("https://github.com/octocat"),
            Platform::Github
        );
        assert_eq!(infer_platform("https://x.com/someone"), Platform::Twitter);
        assert_eq!(
            infer_platform("https://example.com/about"),
            Platform::PersonalWebsite
        );
    }

    #[test]
    fn test_analyze_request_deserializes_without_platform() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"profile_url": "https://github.com/octocat"}"#).unwrap();
        assert!(req.platform.is_none());
    }
}
