//! Utilities for querying the Groq API via its OpenAI-compatible endpoints.
//!
//! For request/response schemas, see the [Groq API reference](https://console.groq.com/docs/api-reference).

use reqwest::blocking::Response;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::ScribeError;

/// A `chat/completions` `messages` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A `chat/completions` request body
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A `chat/completions` response message
#[derive(Deserialize)]
pub struct ChatResponseMessage {
    pub content: Option<String>,
}

/// A `chat/completions` response choice
#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

/// A `chat/completions` response
#[derive(Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// A `models` listing entry
#[derive(Deserialize)]
pub struct ModelEntry {
    pub id: String,
}

/// A `models` listing response
#[derive(Deserialize)]
pub struct ModelList {
    pub data: Vec<ModelEntry>,
}

/// Blocking client bound to one API key and base URL.
pub struct GroqClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Build a client from the config. Fails without touching the network if no key is set.
    pub fn from_config(config: &Config) -> Result<Self, ScribeError> {
        let api_key = config.require_api_key()?.to_string();
        Ok(GroqClient {
            http: reqwest::blocking::Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send one chat completion and return the first choice's content.
    pub fn chat(&self, req_body: &ChatRequest) -> Result<String, ScribeError> {
        log::debug!(
            "POST chat/completions model={} messages={}",
            req_body.model,
            req_body.messages.len()
        );
        let response = self
            .http
            .post(self.url("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(req_body)
            .send()?;
        let body = read_success_body(response)?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ScribeError::EmptyResponse)
    }

    /// List the ids of the models available to this key.
    pub fn list_models(&self) -> Result<Vec<String>, ScribeError> {
        log::debug!("GET models");
        let response = self
            .http
            .get(self.url("models"))
            .bearer_auth(&self.api_key)
            .send()?;
        let body = read_success_body(response)?;
        let parsed: ModelList = serde_json::from_str(&body)?;
        Ok(parsed.data.into_iter().map(|m| m.id).collect())
    }
}

/// Return the body text of a successful response; non-success statuses keep their body for diagnostics.
fn read_success_body(response: Response) -> Result<String, ScribeError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        log::warn!("Groq API returned {}", status);
        return Err(ScribeError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
