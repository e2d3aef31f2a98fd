use crate::domain::ports::{ConfigProvider, GenerationClient};
use crate::utils::error::{Result, RoadmapError};
use reqwest::Client;
use serde::Serialize;

/// HTTP client for the Gemini `generateContent` endpoint. One request per
/// call, no retries; the raw response body is handed back for extraction.
pub struct GeminiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

impl<C: ConfigProvider> GeminiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn request_body(&self, prompt: &str) -> GenerateContentRequest {
        let params = self.config.generation_params();
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                top_k: params.top_k,
                top_p: params.top_p,
                max_output_tokens: params.max_output_tokens,
            },
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> GenerationClient for GeminiClient<C> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        // 金鑰以查詢參數傳遞，與 Gemini API 的慣例一致
        let url = format!("{}?key={}", self.config.api_url(), self.config.api_key());

        tracing::debug!("Making generation request to: {}", self.config.api_url());
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await?;

        tracing::debug!("Generation response status: {}", response.status());

        if !response.status().is_success() {
            return Err(RoadmapError::GenerationFailure {
                message: format!("endpoint returned status {}", response.status()),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(RoadmapError::GenerationFailure {
                message: "endpoint returned an empty body".to_string(),
            });
        }

        Ok(body)
    }
}
