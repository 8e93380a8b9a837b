//! Conversational assistant interface.
//!
//! The assistant is a single narrow capability: a prompt string goes in,
//! display text comes out. The contract is total -- transport, auth and
//! HTTP failures are folded into the reply as a string starting with
//! `"Error: "`, so callers render every reply the same way and never see
//! a fault. Replies are plain display text, never structured data.

use serde_json::json;
use std::time::Duration;

use crate::config::AssistantConfig;

/// External text-generation collaborator.
pub trait Assistant {
    /// Send a prompt, get display text back. Always returns text; failures
    /// come back as a reply starting with `"Error: "`.
    fn ask(&self, prompt: &str) -> String;
}

/// Assistant backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiAssistant {
    api_key: String,
    model: String,
    api_base: String,
    timeout_secs: u64,
}

impl OpenAiAssistant {
    pub fn new(api_key: impl Into<String>, cfg: &AssistantConfig) -> Self {
        Self {
            api_key: api_key.into(),
            model: cfg.model.clone(),
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            timeout_secs: cfg.timeout_secs,
        }
    }

    /// Build from the OPENAI_API_KEY environment variable. A missing key is
    /// not fatal: the provider will simply answer with an error reply.
    pub fn from_env(cfg: &AssistantConfig) -> Self {
        Self::new(std::env::var("OPENAI_API_KEY").unwrap_or_default(), cfg)
    }

    async fn request(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        let url = format!("{}/chat/completions", self.api_base);
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let resp = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(format!("assistant API error: HTTP {}", resp.status()).into());
        }

        let reply: serde_json::Value = resp.json().await?;
        Ok(extract_reply(&reply))
    }
}

impl Assistant for OpenAiAssistant {
    fn ask(&self, prompt: &str) -> String {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => return format!("Error: {e}"),
        };
        match rt.block_on(self.request(prompt)) {
            Ok(reply) => reply,
            Err(e) => format!("Error: {e}"),
        }
    }
}

/// Pull the reply text out of a chat-completions response, tolerating the
/// common shapes. Falls back to the raw JSON rather than failing.
fn extract_reply(reply: &serde_json::Value) -> String {
    if let Some(s) = reply
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
    {
        return s.to_string();
    }
    if let Some(s) = reply.pointer("/choices/0/text").and_then(|v| v.as_str()) {
        return s.to_string();
    }
    reply.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_reply_reads_message_content() {
        let reply = json!({
            "choices": [{ "message": { "role": "assistant", "content": "Drink more water." } }]
        });
        assert_eq!(extract_reply(&reply), "Drink more water.");
    }

    #[test]
    fn extract_reply_reads_legacy_text_field() {
        let reply = json!({ "choices": [{ "text": "Walk daily." }] });
        assert_eq!(extract_reply(&reply), "Walk daily.");
    }

    #[test]
    fn extract_reply_falls_back_to_raw_json() {
        let reply = json!({ "unexpected": true });
        assert_eq!(extract_reply(&reply), reply.to_string());
    }

    #[test]
    fn api_base_trailing_slash_is_trimmed() {
        let cfg = AssistantConfig {
            api_base: "http://localhost:9/v1/".to_string(),
            ..AssistantConfig::default()
        };
        let assistant = OpenAiAssistant::new("key", &cfg);
        assert_eq!(assistant.api_base, "http://localhost:9/v1");
    }
}
