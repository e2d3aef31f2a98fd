use crate::utils::error::{Result, RoadmapError};

/// Pulls the generated text out of the service's response envelope, shaped
/// `{candidates: [{content: {parts: [{text}]}}]}`. Always takes the first
/// candidate and first part; the service is never asked for more than one.
/// Returns the text unmodified, without trimming.
pub fn extract_text(body: &str) -> Result<String> {
    let envelope: serde_json::Value =
        serde_json::from_str(body).map_err(|e| RoadmapError::MalformedResponse {
            message: format!("response body is not valid JSON: {}", e),
        })?;

    envelope
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(|text| text.as_str())
        .map(str::to_string)
        .ok_or_else(|| RoadmapError::MalformedResponse {
            message: "missing candidates[0].content.parts[0].text".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })
        .to_string()
    }

    #[test]
    fn test_extracts_text_from_valid_envelope() {
        let text = extract_text(&envelope("1. Plan\n2. Build")).unwrap();
        assert_eq!(text, "1. Plan\n2. Build");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let text = extract_text(&envelope("  padded  \n")).unwrap();
        assert_eq!(text, "  padded  \n");
    }

    #[test]
    fn test_first_candidate_wins() {
        let body = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        })
        .to_string();
        assert_eq!(extract_text(&body).unwrap(), "first");
    }

    #[test]
    fn test_missing_candidates_is_malformed() {
        let err = extract_text(r#"{"error": "quota exceeded"}"#).unwrap_err();
        assert!(matches!(err, RoadmapError::MalformedResponse { .. }));
    }

    #[test]
    fn test_empty_candidates_array_is_malformed() {
        let err = extract_text(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, RoadmapError::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_parts_is_malformed() {
        let err = extract_text(r#"{"candidates": [{"content": {}}]}"#).unwrap_err();
        assert!(matches!(err, RoadmapError::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_string_text_is_malformed() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": 42}]}}]}"#;
        let err = extract_text(body).unwrap_err();
        assert!(matches!(err, RoadmapError::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = extract_text("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RoadmapError::MalformedResponse { .. }));
    }
}
