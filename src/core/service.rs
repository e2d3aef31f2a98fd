use crate::core::{extract, fallback, parse, prompt};
use crate::domain::model::{RoadmapRequest, RoadmapResponse};
use crate::domain::ports::GenerationClient;
use crate::utils::error::Result;

/// Orchestrates prompt building, generation, extraction and parsing. The
/// single public operation always returns a usable roadmap; every failure
/// along the way is logged and answered with the template fallback.
pub struct RoadmapService<G: GenerationClient> {
    client: G,
}

impl<G: GenerationClient> RoadmapService<G> {
    pub fn new(client: G) -> Self {
        Self { client }
    }

    pub async fn generate_roadmap(&self, request: &RoadmapRequest) -> RoadmapResponse {
        match self.try_generate(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Roadmap generation failed, using fallback: {}", e);
                fallback::fallback_roadmap(request)
            }
        }
    }

    async fn try_generate(&self, request: &RoadmapRequest) -> Result<RoadmapResponse> {
        let prompt = prompt::build_prompt(request);
        tracing::debug!("Sending generation prompt ({} bytes)", prompt.len());

        let body = self.client.generate(&prompt).await?;
        let text = extract::extract_text(&body)?;

        Ok(parse::parse_generated(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::FALLBACK_DURATION;
    use crate::utils::error::RoadmapError;
    use async_trait::async_trait;

    enum FakeClient {
        Body(String),
        Fail,
    }

    #[async_trait]
    impl GenerationClient for FakeClient {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            match self {
                FakeClient::Body(body) => Ok(body.clone()),
                FakeClient::Fail => Err(RoadmapError::GenerationFailure {
                    message: "endpoint unreachable".to_string(),
                }),
            }
        }
    }

    fn request() -> RoadmapRequest {
        RoadmapRequest::new("Launch beta", "Get the beta in front of users")
    }

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_successful_generation_is_parsed() {
        let client = FakeClient::Body(envelope("1. Plan\n2. Build\nEstimated time: 3 days\n"));
        let service = RoadmapService::new(client);

        let response = service.generate_roadmap(&request()).await;

        assert_eq!(response.steps, vec!["1. Plan", "2. Build"]);
        assert_eq!(response.estimated_duration, "Estimated time: 3 days");
        assert!(!response.roadmap.is_empty());
    }

    #[tokio::test]
    async fn test_client_failure_yields_fallback() {
        let service = RoadmapService::new(FakeClient::Fail);

        let response = service.generate_roadmap(&request()).await;

        assert_eq!(response.steps.len(), 5);
        assert_eq!(response.steps[0], "1. Planning Phase");
        assert_eq!(response.estimated_duration, FALLBACK_DURATION);
        assert!(response.roadmap.contains("Roadmap for: Launch beta"));
    }

    #[tokio::test]
    async fn test_malformed_envelope_yields_fallback() {
        let client = FakeClient::Body(r#"{"candidates": []}"#.to_string());
        let service = RoadmapService::new(client);

        let response = service.generate_roadmap(&request()).await;

        assert_eq!(response.estimated_duration, FALLBACK_DURATION);
    }

    #[tokio::test]
    async fn test_generated_prose_without_structure_still_succeeds() {
        let client = FakeClient::Body(envelope("Start small and iterate.\n"));
        let service = RoadmapService::new(client);

        let response = service.generate_roadmap(&request()).await;

        assert_eq!(response.roadmap, "Start small and iterate.");
        assert!(response.steps.is_empty());
        assert_eq!(response.estimated_duration, "Not specified");
    }
}
