use crate::domain::model::RoadmapResponse;
use regex::Regex;

pub const DURATION_NOT_SPECIFIED: &str = "Not specified";

/// Best-effort extraction over unstructured generated text; never fails.
///
/// Line by line: blank lines are dropped, every surviving trimmed line goes
/// into the full roadmap text, lines starting with "N." become steps, and the
/// last line mentioning duration/time/estimate becomes the duration. A
/// numbered line containing "time" intentionally counts as both.
pub fn parse_generated(text: &str) -> RoadmapResponse {
    let step_pattern = Regex::new(r"^\d+\..*").unwrap();

    let mut roadmap = String::new();
    let mut steps = Vec::new();
    let mut estimated_duration = DURATION_NOT_SPECIFIED.to_string();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        roadmap.push_str(line);
        roadmap.push('\n');

        if step_pattern.is_match(line) {
            steps.push(line.to_string());
        }

        let lower = line.to_lowercase();
        if lower.contains("duration") || lower.contains("time") || lower.contains("estimate") {
            estimated_duration = line.to_string();
        }
    }

    RoadmapResponse {
        roadmap: roadmap.trim_end().to_string(),
        steps,
        estimated_duration,
    }
}
