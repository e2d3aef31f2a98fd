pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{GenerationParams, TomlConfig};

pub use adapters::GeminiClient;
pub use core::RoadmapService;
pub use domain::model::{RoadmapRequest, RoadmapResponse};
pub use domain::ports::{ConfigProvider, GenerationClient};
pub use utils::error::{Result, RoadmapError};
