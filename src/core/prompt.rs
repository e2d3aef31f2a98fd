use crate::domain::model::RoadmapRequest;

/// Assembles the instruction sent to the generation service. Pure function;
/// request fields are assumed already validated by the caller.
pub fn build_prompt(request: &RoadmapRequest) -> String {
    let mut prompt = String::new();
    prompt.push_str("Create a detailed roadmap for the following task:\n\n");
    prompt.push_str(&format!("Task Title: {}\n", request.title));
    prompt.push_str(&format!("Description: {}\n", request.description));

    if let Some(time_period) = &request.time_period {
        if !time_period.trim().is_empty() {
            prompt.push_str(&format!("Time Period: {}\n", time_period));
        }
    }

    prompt.push_str("\nPlease provide:\n");
    prompt.push_str("1. A comprehensive roadmap with clear steps\n");
    prompt.push_str("2. Break down the task into manageable subtasks\n");
    prompt.push_str("3. Provide realistic time estimates for each step\n");
    prompt.push_str("4. Include any prerequisites or dependencies\n");
    prompt.push_str("5. Suggest best practices and tips\n\n");
    prompt.push_str("Format the response as a structured roadmap with numbered steps.");

    prompt
}
