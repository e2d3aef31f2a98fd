use crate::config::GenerationParams;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound port to the external text-generation service. Implementations
/// send one request per call and return the raw response body; no retries.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Read-only process configuration, set once at startup.
pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn generation_params(&self) -> GenerationParams;
}
