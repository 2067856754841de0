use async_trait::async_trait;

use crate::error::{GatewayError, Result};
use crate::providers::CompletionClient;

use super::types::{ChatCompletionResponse, build_chat_request, first_completion_text};

pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAIProvider {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub async fn chat_completions(&self, text: &str) -> Result<ChatCompletionResponse> {
        let request = build_chat_request(text)?;
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // 上游错误体原样带回，便于前端排查（鉴权、额度等）
            return Err(upstream_error(status.as_u16(), response.text().await));
        }

        Ok(response.json::<ChatCompletionResponse>().await?)
    }
}

fn upstream_error(status: u16, body: reqwest::Result<String>) -> GatewayError {
    let body = body.unwrap_or_else(|e| {
        tracing::debug!("Failed to read upstream error body (status {}): {}", status, e);
        format!("<unreadable error body: {}>", e)
    });
    GatewayError::Upstream { status, body }
}

#[async_trait]
impl CompletionClient for OpenAIProvider {
    async fn complete(&self, text: &str) -> Result<String> {
        let response = self.chat_completions(text).await?;
        first_completion_text(&response).ok_or(GatewayError::EmptyCompletion)
    }
}
