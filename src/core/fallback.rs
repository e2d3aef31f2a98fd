use crate::domain::model::{RoadmapRequest, RoadmapResponse};

pub const FALLBACK_DURATION: &str = "Varies based on task complexity";

const FALLBACK_PHASES: [&str; 5] = [
    "1. Planning Phase",
    "2. Preparation Phase",
    "3. Implementation Phase",
    "4. Review and Optimization",
    "5. Completion and Follow-up",
];

/// Deterministic template roadmap used whenever generation fails. Never
/// fails itself and never touches the network.
pub fn fallback_roadmap(request: &RoadmapRequest) -> RoadmapResponse {
    let roadmap = format!(
        "Roadmap for: {}\n\n\
         1. Planning Phase\n\
         \x20  - Define clear objectives and requirements\n\
         \x20  - Research best practices and approaches\n\
         \x20  - Create a detailed timeline\n\n\
         2. Preparation Phase\n\
         \x20  - Gather necessary resources and tools\n\
         \x20  - Set up the working environment\n\
         \x20  - Identify potential challenges\n\n\
         3. Implementation Phase\n\
         \x20  - Break down the task into smaller components\n\
         \x20  - Execute each component systematically\n\
         \x20  - Monitor progress regularly\n\n\
         4. Review and Optimization\n\
         \x20  - Test and validate the results\n\
         \x20  - Make necessary adjustments\n\
         \x20  - Document lessons learned\n\n\
         5. Completion and Follow-up\n\
         \x20  - Finalize all deliverables\n\
         \x20  - Conduct final review\n\
         \x20  - Plan for maintenance or next steps",
        request.title
    );

    RoadmapResponse {
        roadmap,
        steps: FALLBACK_PHASES.iter().map(|s| s.to_string()).collect(),
        estimated_duration: FALLBACK_DURATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_interpolated() {
        let response = fallback_roadmap(&RoadmapRequest::new("Migrate database", "..."));
        assert!(response.roadmap.starts_with("Roadmap for: Migrate database\n"));
    }

    #[test]
    fn test_steps_are_the_five_phase_headers() {
        let response = fallback_roadmap(&RoadmapRequest::new("T", "D"));
        assert_eq!(
            response.steps,
            vec![
                "1. Planning Phase",
                "2. Preparation Phase",
                "3. Implementation Phase",
                "4. Review and Optimization",
                "5. Completion and Follow-up",
            ]
        );
    }

    #[test]
    fn test_fixed_duration() {
        let response = fallback_roadmap(&RoadmapRequest::new("T", "D"));
        assert_eq!(response.estimated_duration, FALLBACK_DURATION);
    }

    #[test]
    fn test_each_phase_has_three_bullets() {
        let response = fallback_roadmap(&RoadmapRequest::new("T", "D"));
        let bullets = response
            .roadmap
            .lines()
            .filter(|line| line.trim_start().starts_with('-'))
            .count();
        assert_eq!(bullets, 15);
    }

    #[test]
    fn test_deterministic() {
        let request = RoadmapRequest::new("T", "D");
        assert_eq!(fallback_roadmap(&request), fallback_roadmap(&request));
    }
}
