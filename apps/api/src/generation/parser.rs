//! Parses free-form generated text into lesson fields.
//!
//! Headings are matched case-insensitively anywhere in the text. A section runs
//! from its heading to the first blank line, the first line starting with a
//! letter, or the end of the text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::lesson::Lesson;

pub const UNTITLED_LESSON: &str = "Untitled Lesson";

const DESCRIPTION_HEADING: &str = "description";
const KEY_CONCEPTS_HEADING: &str = "key concepts";
const ACTIVITIES_HEADING: &str = "activit(?:y|ies)";
const LEARNING_OUTCOMES_HEADING: &str = "learning outcomes";

static TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)title\s*[:\-]?\s*(.*)").expect("title regex is valid"));

// Leading "1. ", "- ", "•" or "●" at the start of the text or of a line.
static LIST_ITEM_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\n)\s*(?:\d+\.\s+|[-•●])\s*").expect("list marker regex is valid")
});

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\n)[-•*]\s*").expect("bullet regex is valid"));

static ACTIVITY_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\n)(?:Activity \d+:|\d+\.)").expect("activity regex is valid")
});

/// A lesson section that can be regenerated on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionField {
    Description,
    #[serde(alias = "keyConcepts")]
    KeyConcepts,
    Activities,
}

/// Regenerated section content: prose for the description, items otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Text(String),
    Items(Vec<String>),
}

/// Builds a lesson from generated text. `content` keeps the full text.
pub fn parse_lesson(output: &str, topic: &str) -> Lesson {
    Lesson {
        title: extract_title(output),
        topic: topic.to_string(),
        content: output.to_string(),
        description: extract_section(output, DESCRIPTION_HEADING).unwrap_or_default(),
        key_concepts: extract_list(output, KEY_CONCEPTS_HEADING),
        activities: extract_list(output, ACTIVITIES_HEADING),
        learning_outcomes: extract_list(output, LEARNING_OUTCOMES_HEADING),
        tags: Vec::new(),
    }
}

/// Text after the first `Title:` on its line, or `UNTITLED_LESSON`.
pub fn extract_title(text: &str) -> String {
    TITLE_LINE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED_LESSON)
        .to_string()
}

/// Body of the section introduced by `heading` (a regex fragment), trimmed.
pub fn extract_section(text: &str, heading: &str) -> Option<String> {
    let pattern = format!(r"(?i){heading}\s*[:\-]?\s*([\s\S]*?)(?:\n\n|\n[A-Z]|$)");
    let section = Regex::new(&pattern).ok()?;
    section
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Section body split into list items; items of two characters or fewer are dropped.
pub fn extract_list(text: &str, heading: &str) -> Vec<String> {
    extract_section(text, heading)
        .map(|body| {
            LIST_ITEM_MARKER
                .split(&body)
                .map(str::trim)
                .filter(|item| item.chars().count() > 2)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Interprets a regenerated section. Lists that yield no items fall back to the
/// whole text as a single item.
pub fn parse_section(field: SectionField, content: &str) -> SectionContent {
    let splitter = match field {
        SectionField::Description => return SectionContent::Text(content.to_string()),
        SectionField::KeyConcepts => &*BULLET_MARKER,
        SectionField::Activities => &*ACTIVITY_MARKER,
    };

    let items: Vec<String> = splitter
        .split(content)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        SectionContent::Items(vec![content.to_string()])
    } else {
        SectionContent::Items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = "Title: The Secret Life of Roots\n\
        Description: How roots anchor plants and pull water from the soil.\n\
        \n\
        Learning Outcomes:\n\
        1. Name the parts of a root\n\
        2. Explain water uptake\n\
        \n\
        Key Concepts:\n\
        - Root hairs\n\
        - Osmosis\n\
        - ok\n\
        \n\
        Activities:\n\
        - Grow beans in a clear jar and watch the roots\n";

    #[test]
    fn test_parse_lesson_fields() {
        let lesson = parse_lesson(GENERATED, "Botany");
        assert_eq!(lesson.title, "The Secret Life of Roots");
        assert_eq!(lesson.topic, "Botany");
        assert_eq!(lesson.content, GENERATED);
        assert_eq!(
            lesson.description,
            "How roots anchor plants and pull water from the soil."
        );
        assert_eq!(
            lesson.learning_outcomes,
            vec!["Name the parts of a root", "Explain water uptake"]
        );
        // "ok" is too short to be an item
        assert_eq!(lesson.key_concepts, vec!["Root hairs", "Osmosis"]);
        assert_eq!(
            lesson.activities,
            vec!["Grow beans in a clear jar and watch the roots"]
        );
        assert!(lesson.tags.is_empty());
    }

    #[test]
    fn test_missing_title_falls_back() {
        assert_eq!(extract_title("No heading here"), UNTITLED_LESSON);
        assert_eq!(extract_title("Title:   "), UNTITLED_LESSON);
    }

    #[test]
    fn test_section_stops_at_next_heading_line() {
        let text = "Description - First line\nKey Concepts: x";
        assert_eq!(
            extract_section(text, DESCRIPTION_HEADING).as_deref(),
            Some("First line")
        );
    }

    #[test]
    fn test_missing_section_yields_nothing() {
        assert_eq!(extract_section("Title: Roots", DESCRIPTION_HEADING), None);
        assert!(extract_list("Title: Roots", KEY_CONCEPTS_HEADING).is_empty());
    }

    #[test]
    fn test_parse_section_description_is_text() {
        assert_eq!(
            parse_section(SectionField::Description, "Two sentences. Here."),
            SectionContent::Text("Two sentences. Here.".to_string())
        );
    }

    #[test]
    fn test_parse_section_key_concepts_split_on_bullets() {
        let parsed = parse_section(SectionField::KeyConcepts, "- Chlorophyll\n* Light\n• Glucose");
        assert_eq!(
            parsed,
            SectionContent::Items(vec![
                "Chlorophyll".to_string(),
                "Light".to_string(),
                "Glucose".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_section_activities_split_on_markers() {
        let parsed = parse_section(
            SectionField::Activities,
            "Activity 1: Leaf rubbing\nActivity 2: Stomata under a microscope",
        );
        assert_eq!(
            parsed,
            SectionContent::Items(vec![
                "Leaf rubbing".to_string(),
                "Stomata under a microscope".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_section_falls_back_to_whole_text() {
        assert_eq!(
            parse_section(SectionField::Activities, "1."),
            SectionContent::Items(vec!["1.".to_string()])
        );
    }

    #[test]
    fn test_section_field_accepts_camel_case_alias() {
        let field: SectionField = serde_json::from_str(r#""keyConcepts""#).unwrap();
        assert_eq!(field, SectionField::KeyConcepts);
    }
}
