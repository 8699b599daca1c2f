use serde::{Deserialize, Serialize};

use crate::matching::tags::extract_tags;
use crate::models::lesson::Lesson;

/// A named grouping of lessons. `title` is unique within the catalog.
///
/// `tags` are derived once from `title` and `overview` when the module is
/// created. Appending lessons does not refresh them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    pub title: String,
    pub overview: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub prerequisites: Vec<String>,
    pub estimated_time: String,
    /// Append-only.
    pub lessons: Vec<Lesson>,
}

impl Module {
    pub fn with_derived_tags(mut self) -> Self {
        self.tags = extract_tags(&format!("{} {}", self.title, self.overview));
        self
    }
}

/// Request body for creating a module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewModule {
    pub title: String,
    pub overview: String,
    pub difficulty: String,
    pub prerequisites: Vec<String>,
    pub estimated_time: String,
    /// Lesson to place in the new module straight away.
    pub lesson: Option<Lesson>,
}

impl NewModule {
    /// Splits the request into an empty, tagged module and the optional first lesson.
    pub fn into_parts(self) -> (Module, Option<Lesson>) {
        let prerequisites = self
            .prerequisites
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        let module = Module {
            title: self.title.trim().to_string(),
            overview: self.overview,
            tags: Vec::new(),
            difficulty: self.difficulty,
            prerequisites,
            estimated_time: self.estimated_time,
            lessons: Vec::new(),
        }
        .with_derived_tags();

        (module, self.lesson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_tags_come_from_title_and_overview() {
        let module = Module {
            title: "Plant".to_string(),
            overview: "Learn about photosynthesis, roots, stems, and leaves.".to_string(),
            ..Module::default()
        }
        .with_derived_tags();
        assert_eq!(
            module.tags,
            vec!["plant", "learn", "about", "photosynthesis", "roots"]
        );
    }

    #[test]
    fn test_new_module_trims_prerequisites() {
        let req = NewModule {
            title: "  Botany ".to_string(),
            overview: "Plants".to_string(),
            prerequisites: vec![" none ".to_string(), "".to_string(), "  ".to_string()],
            ..NewModule::default()
        };
        let (module, lesson) = req.into_parts();
        assert_eq!(module.title, "Botany");
        assert_eq!(module.prerequisites, vec!["none"]);
        assert_eq!(module.tags, vec!["botany", "plants"]);
        assert!(module.lessons.is_empty());
        assert!(lesson.is_none());
    }

    #[test]
    fn test_stored_module_without_tags_deserializes() {
        let module: Module =
            serde_json::from_str(r#"{"title": "Fullstack", "overview": "MERN"}"#).unwrap();
        assert!(module.tags.is_empty());
        assert!(module.lessons.is_empty());
    }
}
