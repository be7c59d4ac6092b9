use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

use crate::models::message::GeneratedMessage;
use crate::models::profile::{Profile, ProfileRow};

/// Upserts a profile. `created_at` is preserved across updates.
pub async fn save_profile(pool: &SqlitePool, profile: &Profile) -> Result<()> {
    let data = serde_json::to_string(profile).context("Failed to serialize profile")?;
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO profiles (id, name, role, company, email, industry, platform,
                              profile_url, data, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            role = excluded.role,
            company = excluded.company,
            email = excluded.email,
            industry = excluded.industry,
            platform = excluded.platform,
            profile_url = excluded.profile_url,
            data = excluded.data,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(&profile.id)
    .bind(&profile.name)
    .bind(&profile.role)
    .bind(&profile.company)
    .bind(&profile.email)
    .bind(&profile.industry)
    .bind(profile.source_platform.as_str())
    .bind(&profile.profile_url)
    .bind(&data)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    debug!(profile_id = %profile.id, "Profile saved");
    Ok(())
}

pub async fn get_profile(pool: &SqlitePool, id: &str) -> Result<Option<Profile>> {
    let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let profile =
                serde_json::from_str(&row.data).context("Failed to deserialize stored profile")?;
            Ok(Some(profile))
        }
        None => Ok(None),
    }
}

/// Case-insensitive LIKE search over name, company and role.
pub async fn search_profiles(pool: &SqlitePool, query: &str, limit: u32) -> Result<Vec<Profile>> {
    let pattern = format!("%{}%", query);
    let rows: Vec<ProfileRow> = sqlx::query_as(
        r#"
        SELECT * FROM profiles
        WHERE name LIKE ? OR company LIKE ? OR role LIKE ?
        ORDER BY updated_at DESC
        LIMIT ?
        "#,
    )
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows_to_profiles(rows)
}

pub async fn profiles_by_industry(pool: &SqlitePool, industry: &str) -> Result<Vec<Profile>> {
    let rows: Vec<ProfileRow> =
        sqlx::query_as("SELECT * FROM profiles WHERE industry = ? COLLATE NOCASE")
            .bind(industry)
            .fetch_all(pool)
            .await?;

    rows_to_profiles(rows)
}

/// Profiles sharing the industry or role of the given profile, excluding it.
pub async fn similar_profiles(pool: &SqlitePool, profile: &Profile) -> Result<Vec<Profile>> {
    let rows: Vec<ProfileRow> = sqlx::query_as(
        r#"
        SELECT * FROM profiles
        WHERE id != ? AND (industry = ? OR role = ?)
        LIMIT 10
        "#,
    )
    .bind(&profile.id)
    .bind(&profile.industry)
    .bind(&profile.role)
    .fetch_all(pool)
    .await?;

    rows_to_profiles(rows)
}

pub async fn save_messages(
    pool: &SqlitePool,
    profile_id: &str,
    messages: &[GeneratedMessage],
) -> Result<()> {
    let now = Utc::now();
    for message in messages {
        sqlx::query(
            r#"
            INSERT INTO messages (id, profile_id, channel, subject, content, cta, tone, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(profile_id)
        .bind(message.channel.as_str())
        .bind(&message.subject)
        .bind(&message.content)
        .bind(&message.cta)
        .bind(message.tone.as_str())
        .bind(now)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn save_interaction(
    pool: &SqlitePool,
    profile_id: &str,
    action: &str,
    data: &serde_json::Value,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO interactions (profile_id, action, data, timestamp) VALUES (?, ?, ?, ?)",
    )
    .bind(profile_id)
    .bind(action)
    .bind(data.to_string())
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(())
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DatabaseStats {
    pub total_profiles: i64,
    pub total_messages: i64,
    pub total_interactions: i64,
    pub database_size_bytes: u64,
}

pub async fn database_stats(pool: &SqlitePool, database_path: &Path) -> Result<DatabaseStats> {
    let total_profiles: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await?;
    let total_messages: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
        .fetch_one(pool)
        .await?;
    let total_interactions: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM interactions")
        .fetch_one(pool)
        .await?;

    // In-memory databases have no file to measure.
    let database_size_bytes = tokio::fs::metadata(database_path)
        .await
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(DatabaseStats {
        total_profiles: total_profiles.0,
        total_messages: total_messages.0,
        total_interactions: total_interactions.0,
        database_size_bytes,
    })
}

/// Dumps every stored profile to `<data_dir>/profiles_export.json` and
/// returns the path written.
pub async fn export_profiles(pool: &SqlitePool, data_dir: &Path) -> Result<std::path::PathBuf> {
    let rows: Vec<ProfileRow> = sqlx::query_as("SELECT * FROM profiles ORDER BY updated_at DESC")
        .fetch_all(pool)
        .await?;
    let profiles = rows_to_profiles(rows)?;

    tokio::fs::create_dir_all(data_dir)
        .await
        .context("Failed to create export directory")?;
    let path = data_dir.join("profiles_export.json");
    let json =
        serde_json::to_string_pretty(&profiles).context("Failed to serialize export payload")?;
    tokio::fs::write(&path, json)
        .await
        .context("Failed to write export file")?;

    debug!(count = profiles.len(), path = %path.display(), "Profiles exported");
    Ok(path)
}

fn rows_to_profiles(rows: Vec<ProfileRow>) -> Result<Vec<Profile>> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_str(&row.data).context("Failed to deserialize stored profile")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::run_migrations;
    use crate::models::message::Channel;
    use crate::models::profile::{CommunicationStyle, Platform, Seniority};

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn sample_profile(id: &str, name: &str, industry: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            role: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            industry: industry.to_string(),
            location: None,
            bio: "Builds things".to_string(),
            about: None,
            skills: vec!["rust".to_string()],
            interests: vec![],
            recent_activity: vec![],
            education: None,
            seniority: Seniority::Mid,
            communication_style: CommunicationStyle::Mixed,
            language: "english".to_string(),
            uses_emojis: false,
            uses_slang: false,
            uses_abbreviations: false,
            formal_ratio: 0.5,
            source_platform: Platform::Linkedin,
            profile_url: "https://linkedin.com/in/sample".to_string(),
            last_updated: Utc::now(),
            raw_data: serde_json::json!({}),
        }
    }

    #[tokio::test]
    async fn test_save_and_get_round_trip() {
        let pool = test_pool().await;
        let profile = sample_profile("jane_acme", "Jane", "Technology");
        save_profile(&pool, &profile).await.unwrap();

        let loaded = get_profile(&pool, "jane_acme").await.unwrap().unwrap();
        assert_eq!(loaded.name, "Jane");
        assert_eq!(loaded.company, "Acme");
    }

    #[tokio::test]
    async fn test_get_missing_profile_is_none() {
        let pool = test_pool().await;
        assert!(get_profile(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_twice_upserts() {
        let pool = test_pool().await;
        let mut profile = sample_profile("jane_acme", "Jane", "Technology");
        save_profile(&pool, &profile).await.unwrap();

        profile.role = "Staff Engineer".to_string();
        save_profile(&pool, &profile).await.unwrap();

        let loaded = get_profile(&pool, "jane_acme").await.unwrap().unwrap();
        assert_eq!(loaded.role, "Staff Engineer");

        let stats = database_stats(&pool, Path::new("/nonexistent")).await.unwrap();
        assert_eq!(stats.total_profiles, 1);
    }

    #[tokio::test]
    async fn test_search_matches_name_company_role() {
        let pool = test_pool().await;
        save_profile(&pool, &sample_profile("a", "Jane Doe", "Technology"))
            .await
            .unwrap();
        save_profile(&pool, &sample_profile("b", "Bob Smith", "Finance"))
            .await
            .unwrap();

        let by_name = search_profiles(&pool, "jane", 10).await.unwrap();
        assert_eq!(by_name.len(), 1);

        let by_company = search_profiles(&pool, "Acme", 10).await.unwrap();
        assert_eq!(by_company.len(), 2);

        let limited = search_profiles(&pool, "Acme", 1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_profiles_by_industry_is_case_insensitive() {
        let pool = test_pool().await;
        save_profile(&pool, &sample_profile("a", "Jane", "Technology"))
            .await
            .unwrap();
        save_profile(&pool, &sample_profile("b", "Bob", "Finance"))
            .await
            .unwrap();

        let tech = profiles_by_industry(&pool, "technology").await.unwrap();
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].name, "Jane");
    }

    #[tokio::test]
    async fn test_similar_profiles_excludes_self() {
        let pool = test_pool().await;
        let jane = sample_profile("a", "Jane", "Technology");
        save_profile(&pool, &jane).await.unwrap();
        save_profile(&pool, &sample_profile("b", "Bob", "Technology"))
            .await
            .unwrap();
        save_profile(&pool, &sample_profile("c", "Carol", "Finance"))
            .await
            .unwrap();

        let similar = similar_profiles(&pool, &jane).await.unwrap();
        // Carol matches on role even though her industry differs.
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|p| p.id != "a"));
    }

    #[tokio::test]
    async fn test_save_messages_and_stats() {
        let pool = test_pool().await;
        let profile = sample_profile("a", "Jane", "Technology");
        save_profile(&pool, &profile).await.unwrap();

        let messages = vec![GeneratedMessage {
            channel: Channel::Email,
            subject: Some("Hello".to_string()),
            content: "Hi Jane".to_string(),
            cta: "Worth a chat?".to_string(),
            tone: CommunicationStyle::SemiFormal,
            estimated_reply_rate: 0.3,
        }];
        save_messages(&pool, "a", &messages).await.unwrap();
        save_interaction(&pool, "a", "outreach_generated", &serde_json::json!({"channels": 1}))
            .await
            .unwrap();

        let stats = database_stats(&pool, Path::new("/nonexistent")).await.unwrap();
        assert_eq!(stats.total_messages, 1);
        assert_eq!(stats.total_interactions, 1);
        assert_eq!(stats.database_size_bytes, 0);
    }

    #[tokio::test]
    async fn test_export_writes_json_file() {
        let pool = test_pool().await;
        save_profile(&pool, &sample_profile("a", "Jane", "Technology"))
            .await
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = export_profiles(&pool, dir.path()).await.unwrap();
        assert!(path.ends_with("profiles_export.json"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Profile> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Jane");
    }
}
