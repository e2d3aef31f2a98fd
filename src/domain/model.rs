use serde::{Deserialize, Serialize};

/// A request to generate a roadmap for a task. Immutable once constructed;
/// the caller is responsible for filling `title` and `description`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<String>,
}

impl RoadmapRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            time_period: None,
        }
    }

    pub fn with_time_period(mut self, time_period: impl Into<String>) -> Self {
        self.time_period = Some(time_period.into());
        self
    }
}

impl crate::utils::validation::Validate for RoadmapRequest {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_non_empty_string("title", &self.title)?;
        crate::utils::validation::validate_non_empty_string("description", &self.description)?;
        Ok(())
    }
}

/// The structured plan handed back to the caller. Constructed once per
/// generation call and not mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    /// Full normalized roadmap text, trailing whitespace trimmed.
    pub roadmap: String,
    /// Numbered lines in the order they appeared; duplicates preserved.
    pub steps: Vec<String>,
    /// Last line mentioning a duration/time/estimate, or "Not specified".
    pub estimated_duration: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_request_with_blank_title_fails_validation() {
        let request = RoadmapRequest::new("   ", "Ship the feature");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_with_blank_description_fails_validation() {
        let request = RoadmapRequest::new("Ship", "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_request_passes_validation() {
        let request =
            RoadmapRequest::new("Ship", "Ship the feature").with_time_period("2 weeks");
        assert!(request.validate().is_ok());
    }
}
