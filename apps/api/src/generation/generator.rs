//! Lesson Generation — prompt → LLM → parsed lesson.
//!
//! The generator only produces records; storing them and matching them to
//! modules is the catalog's job.

use tracing::info;

use crate::errors::AppError;
use crate::generation::parser::{parse_lesson, parse_section, SectionContent, SectionField};
use crate::generation::prompts::{
    render, ACTIVITIES_PROMPT_TEMPLATE, DESCRIPTION_PROMPT_TEMPLATE, KEY_CONCEPTS_PROMPT_TEMPLATE,
    LESSON_PROMPT_TEMPLATE, MODULES_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::lesson::Lesson;

/// Rejects blank course titles or topics before any LLM call is made.
pub fn require_title_and_topic(title: &str, topic: &str) -> Result<(), AppError> {
    if title.trim().is_empty() || topic.trim().is_empty() {
        return Err(AppError::Validation(
            "Both title and topic are required".to_string(),
        ));
    }
    Ok(())
}

/// Generates a lesson for `title`/`topic` and parses it. Tags are not derived here.
pub async fn generate_lesson(llm: &LlmClient, title: &str, topic: &str) -> Result<Lesson, AppError> {
    require_title_and_topic(title, topic)?;

    let prompt = format!(
        "{}\n\n{}",
        render(LESSON_PROMPT_TEMPLATE, title, topic),
        PLAIN_TEXT_INSTRUCTION
    );
    info!("Generating lesson for '{title}' / '{topic}' with {}", llm.model());

    let output = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Lesson generation failed: {e}")))?;

    let lesson = parse_lesson(&output, topic);
    info!(
        "Lesson generated: '{}' ({} key concepts, {} activities)",
        lesson.title,
        lesson.key_concepts.len(),
        lesson.activities.len()
    );
    Ok(lesson)
}

/// Generates a readable module breakdown for a course. Returned verbatim.
pub async fn generate_module_outline(
    llm: &LlmClient,
    title: &str,
    topic: &str,
) -> Result<String, AppError> {
    require_title_and_topic(title, topic)?;

    let prompt = render(MODULES_PROMPT_TEMPLATE, title, topic);
    info!("Generating module outline for '{title}' / '{topic}'");

    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Module outline generation failed: {e}")))
}

/// Regenerates one section of a lesson.
pub async fn regenerate_section(
    llm: &LlmClient,
    title: &str,
    topic: &str,
    field: SectionField,
) -> Result<SectionContent, AppError> {
    require_title_and_topic(title, topic)?;

    let template = match field {
        SectionField::Description => DESCRIPTION_PROMPT_TEMPLATE,
        SectionField::KeyConcepts => KEY_CONCEPTS_PROMPT_TEMPLATE,
        SectionField::Activities => ACTIVITIES_PROMPT_TEMPLATE,
    };
    info!("Regenerating {field:?} for '{title}'");

    let output = llm
        .complete(&render(template, title, topic))
        .await
        .map_err(|e| AppError::Llm(format!("Section regeneration failed: {e}")))?;

    Ok(parse_section(field, &output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_or_topic_rejected() {
        assert!(matches!(
            require_title_and_topic(" ", "Roots"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            require_title_and_topic("Botany", ""),
            Err(AppError::Validation(_))
        ));
        assert!(require_title_and_topic("Botany", "Roots").is_ok());
    }
}
