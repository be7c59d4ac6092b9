//! LLM client — the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the inference server
//! directly. All generation goes through `TextGenerator`.
//!
//! The backend is a local inference server speaking the Ollama generate API.
//! This wrapper is deliberately a thin pass-through: load on startup, unload
//! on shutdown, one prompt in, one completion out. No batching, no
//! scheduling, no memory management.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Keep-alive sent with every generate call; the server evicts the model
/// from memory after this much idle time.
const KEEP_ALIVE: &str = "30m";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference server error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("Model is not loaded")]
    NotLoaded,
}

/// Sampling options for a single generate call.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            max_tokens: 200,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// The text-generation seam. `AppState` carries an `Arc<dyn TextGenerator>`
/// so tests can substitute a canned backend for the inference server.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, options: GenerateOptions) -> Result<String, LlmError>;
    fn is_loaded(&self) -> bool;
    fn model_name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct GenerateRequestBody<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
    stream: bool,
    keep_alive: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<ModelOptions>,
}

#[derive(Debug, Serialize)]
struct ModelOptions {
    num_predict: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponseBody {
    response: String,
}

/// Client for a local Ollama-compatible inference server.
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    loaded: AtomicBool,
}

impl LlmClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            loaded: AtomicBool::new(false),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Warms the model into server memory with a promptless generate call.
    /// Returns Err when the server is unreachable; callers may continue
    /// degraded (health reports `is_model_loaded: false`).
    pub async fn load_model(&self) -> Result<(), LlmError> {
        info!("Loading model '{}' via {}", self.model, self.generate_url());

        let body = GenerateRequestBody {
            model: &self.model,
            prompt: None,
            stream: false,
            keep_alive: KEEP_ALIVE,
            options: None,
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        self.loaded.store(true, Ordering::Relaxed);
        info!("Model '{}' loaded", self.model);
        Ok(())
    }

    /// Asks the server to evict the model immediately (keep-alive zero).
    pub async fn unload_model(&self) {
        let body = GenerateRequestBody {
            model: &self.model,
            prompt: None,
            stream: false,
            keep_alive: "0s",
            options: None,
        };

        match self.client.post(self.generate_url()).json(&body).send().await {
            Ok(_) => info!("Model '{}' unloaded", self.model),
            Err(e) => warn!("Model unload request failed: {e}"),
        }
        self.loaded.store(false, Ordering::Relaxed);
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    /// Generates a completion. Retries on transport errors, 429, and 5xx
    /// with exponential backoff (1s, 2s, 4s); other statuses fail fast.
    async fn generate(&self, prompt: &str, options: GenerateOptions) -> Result<String, LlmError> {
        if !self.is_loaded() {
            return Err(LlmError::NotLoaded);
        }

        let body = GenerateRequestBody {
            model: &self.model,
            prompt: Some(prompt),
            stream: false,
            keep_alive: KEEP_ALIVE,
            options: Some(ModelOptions {
                num_predict: options.max_tokens,
                temperature: options.temperature,
                top_p: options.top_p,
            }),
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Generate attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(self.generate_url())
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("Inference server returned {status}: {message}");
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: GenerateResponseBody = response.json().await?;
            let text = parsed.response.trim().to_string();

            if text.is_empty() {
                return Err(LlmError::EmptyContent);
            }

            debug!("Generate succeeded: {} chars", text.len());
            return Ok(text);
        }

        Err(last_error.unwrap_or(LlmError::EmptyContent))
    }

    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Relaxed)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_starts_unloaded() {
        let client = LlmClient::new("http://127.0.0.1:11434".into(), "tinyllama".into());
        assert!(!client.is_loaded());
        assert_eq!(client.model_name(), "tinyllama");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = LlmClient::new("http://127.0.0.1:11434/".into(), "tinyllama".into());
        assert_eq!(client.generate_url(), "http://127.0.0.1:11434/api/generate");
    }

    #[tokio::test]
    async fn test_generate_without_load_is_not_loaded_error() {
        let client = LlmClient::new("http://127.0.0.1:11434".into(), "tinyllama".into());
        let result = client.generate("hello", GenerateOptions::default()).await;
        assert!(matches!(result, Err(LlmError::NotLoaded)));
    }

    #[test]
    fn test_request_body_omits_prompt_when_none() {
        let body = GenerateRequestBody {
            model: "tinyllama",
            prompt: None,
            stream: false,
            keep_alive: "0s",
            options: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("prompt").is_none());
        assert_eq!(json["keep_alive"], "0s");
    }

    #[test]
    fn test_request_body_includes_sampling_options() {
        let body = GenerateRequestBody {
            model: "tinyllama",
            prompt: Some("hi"),
            stream: false,
            keep_alive: KEEP_ALIVE,
            options: Some(ModelOptions {
                num_predict: 200,
                temperature: 0.7,
                top_p: 0.9,
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["options"]["num_predict"], 200);
        assert_eq!(json["prompt"], "hi");
        assert_eq!(json["stream"], false);
    }
}
