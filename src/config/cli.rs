use crate::config::GenerationParams;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "task-roadmap")]
#[command(about = "Generate a structured roadmap for a task")]
pub struct CliConfig {
    /// Task title
    #[arg(long)]
    pub title: String,

    /// Task description
    #[arg(long)]
    pub description: String,

    /// Optional time period for the roadmap (e.g. "3 months")
    #[arg(long)]
    pub time_period: Option<String>,

    /// Load endpoint/key/parameters from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(
        long,
        default_value = "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
    )]
    pub api_url: String,

    #[arg(long, env = "GEMINI_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(long, default_value_t = crate::config::DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    #[arg(long, default_value_t = crate::config::DEFAULT_TOP_K)]
    pub top_k: u32,

    #[arg(long, default_value_t = crate::config::DEFAULT_TOP_P)]
    pub top_p: f64,

    #[arg(long, default_value_t = crate::config::DEFAULT_MAX_OUTPUT_TOKENS)]
    pub max_output_tokens: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        Ok(())
    }
}
