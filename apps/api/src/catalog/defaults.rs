//! Starter modules written to an empty catalog on first read.

use crate::models::module::Module;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Seed modules. Their tags are curated by hand rather than derived.
pub fn default_modules() -> Vec<Module> {
    vec![
        Module {
            title: "Intro to Clothes".to_string(),
            overview: "Learn the basics of Jeans and tops.".to_string(),
            tags: strings(&["clothes", "jeans", "tops", "fashion"]),
            difficulty: "Beginner".to_string(),
            prerequisites: strings(&["none"]),
            estimated_time: "2 hours".to_string(),
            lessons: Vec::new(),
        },
        Module {
            title: "Plant".to_string(),
            overview: "Learn about photosynthesis, roots, stems, and leaves.".to_string(),
            tags: strings(&["plant", "photosynthesis", "leaves", "soil", "botany"]),
            difficulty: "Easy".to_string(),
            prerequisites: strings(&["None"]),
            estimated_time: "2 hours".to_string(),
            lessons: Vec::new(),
        },
        Module {
            title: "Fullstack".to_string(),
            overview: "Learn about MERN stack".to_string(),
            tags: strings(&["react", "mongoDB"]),
            difficulty: "Easy".to_string(),
            prerequisites: strings(&["None"]),
            estimated_time: "2 hours".to_string(),
            lessons: Vec::new(),
        },
    ]
}
