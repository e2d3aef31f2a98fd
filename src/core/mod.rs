pub mod extract;
pub mod fallback;
pub mod parse;
pub mod prompt;
pub mod service;

pub use crate::domain::model::{RoadmapRequest, RoadmapResponse};
pub use crate::domain::ports::{ConfigProvider, GenerationClient};
pub use crate::utils::error::Result;
pub use service::RoadmapService;
