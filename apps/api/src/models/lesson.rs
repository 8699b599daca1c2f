use serde::{Deserialize, Serialize};

use crate::matching::tags::extract_tags;
use crate::matching::vector::tokenize_words;

/// A lesson, either generated or entered by hand.
///
/// Every field defaults to empty when absent from stored or submitted JSON.
/// `tags` is derived from `title`, `topic` and `content`; it is never edited on
/// its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lesson {
    pub title: String,
    pub topic: String,
    /// Free-text body, usually the raw generated lesson.
    pub content: String,
    pub description: String,
    pub key_concepts: Vec<String>,
    pub activities: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub tags: Vec<String>,
}

impl Lesson {
    /// Text the lesson's tags and keywords are derived from.
    pub fn source_text(&self) -> String {
        format!("{} {} {}", self.title, self.topic, self.content)
    }

    /// Recomputes `tags` from the lesson's source text.
    pub fn with_derived_tags(mut self) -> Self {
        self.tags = extract_tags(&self.source_text());
        self
    }

    /// Lowercased word tokens of title, topic and content (any length).
    pub fn keywords(&self) -> Vec<String> {
        tokenize_words(&self.source_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let lesson: Lesson = serde_json::from_str(r#"{"title": "Roots"}"#).unwrap();
        assert_eq!(lesson.title, "Roots");
        assert!(lesson.topic.is_empty());
        assert!(lesson.content.is_empty());
        assert!(lesson.key_concepts.is_empty());
        assert!(lesson.tags.is_empty());
    }

    #[test]
    fn test_derived_tags_replace_submitted_tags() {
        let lesson = Lesson {
            title: "Roots".to_string(),
            topic: "Botany".to_string(),
            content: "Roots anchor plants and absorb water".to_string(),
            tags: vec!["bogus".to_string()],
            ..Lesson::default()
        }
        .with_derived_tags();
        assert_eq!(lesson.tags, vec!["roots", "botany", "anchor", "plants", "absorb"]);
    }

    #[test]
    fn test_keywords_cover_title_topic_and_content() {
        let lesson = Lesson {
            title: "Intro".to_string(),
            topic: "Web".to_string(),
            content: "Use React.".to_string(),
            ..Lesson::default()
        };
        assert_eq!(lesson.keywords(), vec!["intro", "web", "use", "react"]);
    }
}
