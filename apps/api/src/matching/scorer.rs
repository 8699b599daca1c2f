//! Similarity scoring — pluggable, trait-based scorers measuring how well a lesson
//! fits a module.
//!
//! Two strategies share the `Scorer` capability:
//! - `TagOverlapScorer`: overlap of derived tag sets, 0–100, plus a title bonus.
//! - `CosineScorer`: term-frequency cosine of lesson body vs module overview,
//!   plus a boost for module tags found among the lesson's keywords.
//!
//! Callers pick one explicitly through `MatchStrategy`; the ranker never knows which.

use serde::{Deserialize, Serialize};

use crate::matching::vector::text_cosine;
use crate::models::lesson::Lesson;
use crate::models::module::Module;

/// Flat bonus when the module title contains the lesson title.
pub const TITLE_MATCH_BONUS: f64 = 20.0;

/// Tag-overlap scores must exceed this to count as a suggestion.
pub const SUGGESTION_MIN_SCORE: f64 = 10.0;

/// Engine-level floor for cosine matches.
pub const COSINE_MIN_SCORE: f64 = 0.2;

/// Base boost added once any module tag appears among the lesson keywords.
pub const TAG_BOOST_BASE: f64 = 0.3;

/// Additional boost per matching module tag.
pub const TAG_BOOST_PER_MATCH: f64 = 0.05;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The scorer trait. Implement this to add a strategy without touching the
/// ranker, the catalog service, or the handlers.
pub trait Scorer: Send + Sync {
    /// Short label reported alongside results.
    fn name(&self) -> &'static str;

    /// Scores `lesson` against `module`. Must be pure and never fail.
    fn score(&self, lesson: &Lesson, module: &Module) -> f64;
}

/// Strategy selector exposed to callers and the HTTP API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    TagOverlap,
    #[default]
    Cosine,
}

impl MatchStrategy {
    pub fn scorer(self) -> &'static dyn Scorer {
        match self {
            MatchStrategy::TagOverlap => &TagOverlapScorer,
            MatchStrategy::Cosine => &CosineScorer,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TagOverlapScorer
// ────────────────────────────────────────────────────────────────────────────

/// Scores by shared tags, normalised by the larger tag set.
///
/// Uses the tags already stored on the lesson and the module. Module tags are
/// derived once at creation and are not refreshed as lessons are appended.
pub struct TagOverlapScorer;

impl Scorer for TagOverlapScorer {
    fn name(&self) -> &'static str {
        "tag_overlap"
    }

    fn score(&self, lesson: &Lesson, module: &Module) -> f64 {
        score_by_tag_overlap(&lesson.tags, &module.tags, &lesson.title, &module.title)
    }
}

/// `100 * |item ∩ module| / max(|item|, |module|)`, plus `TITLE_MATCH_BONUS` when
/// `module_title` contains `item_title` (case-insensitive, both non-empty).
///
/// Two empty tag sets score 0 before the bonus. Result lies in `[0, 120]`.
pub fn score_by_tag_overlap(
    item_tags: &[String],
    module_tags: &[String],
    item_title: &str,
    module_title: &str,
) -> f64 {
    let larger = item_tags.len().max(module_tags.len());

    let base = if larger == 0 {
        0.0
    } else {
        let common = item_tags
            .iter()
            .filter(|tag| module_tags.contains(tag))
            .count();
        100.0 * common as f64 / larger as f64
    };

    if title_contains(module_title, item_title) {
        base + TITLE_MATCH_BONUS
    } else {
        base
    }
}

fn title_contains(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty()
        && !needle.is_empty()
        && haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ────────────────────────────────────────────────────────────────────────────
// CosineScorer
// ────────────────────────────────────────────────────────────────────────────

/// Scores lesson body against module overview by term-frequency cosine.
pub struct CosineScorer;

impl Scorer for CosineScorer {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn score(&self, lesson: &Lesson, module: &Module) -> f64 {
        score_by_cosine(
            &lesson.content,
            &module.overview,
            &lesson.keywords(),
            &module.tags,
        )
    }
}

/// Cosine similarity of `item_text` and `module_text`, plus a tag boost of
/// `0.3 + 0.05 * matches` when any `module_tags` entry (case-insensitive)
/// appears in `item_keywords`. The boost is uncapped.
///
/// The cosine term is symmetric in the two texts; the boost only ever looks at
/// module tags against item keywords.
pub fn score_by_cosine(
    item_text: &str,
    module_text: &str,
    item_keywords: &[String],
    module_tags: &[String],
) -> f64 {
    text_cosine(item_text, module_text) + tag_boost(item_keywords, module_tags)
}

fn tag_boost(item_keywords: &[String], module_tags: &[String]) -> f64 {
    let matches = module_tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            item_keywords.iter().any(|k| *k == tag)
        })
        .count();

    if matches == 0 {
        0.0
    } else {
        TAG_BOOST_BASE + TAG_BOOST_PER_MATCH * matches as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
