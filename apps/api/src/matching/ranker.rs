//! Recommendation ranker — applies a scorer across every module, keeps the ones
//! at or above a minimum score, and returns the best few, highest first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scorer::Scorer;
use crate::models::lesson::Lesson;
use crate::models::module::Module;

/// Default number of suggestions returned by a ranking call.
pub const DEFAULT_TOP_N: usize = 5;

/// A module paired with its score for one lesson. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredModule {
    #[serde(flatten)]
    pub module: Module,
    pub similarity_score: f64,
}

/// Scores every module for `lesson`, keeps `score >= min_score`, sorts descending
/// and truncates to `top_n`.
///
/// Exact ties keep their input order. No qualifying module yields an empty vec.
pub fn rank(
    lesson: &Lesson,
    modules: &[Module],
    scorer: &dyn Scorer,
    min_score: f64,
    top_n: usize,
) -> Vec<ScoredModule> {
    let mut scored: Vec<ScoredModule> = modules
        .iter()
        .filter_map(|module| {
            let similarity_score = scorer.score(lesson, module);
            (similarity_score >= min_score).then(|| ScoredModule {
                module: module.clone(),
                similarity_score,
            })
        })
        .collect();

    // Stable sort — equal scores stay in input order
    scored.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);

    debug!(
        "Ranked {} modules with {} scorer (min {}): {} kept",
        modules.len(),
        scorer.name(),
        min_score,
        scored.len()
    );

    scored
}
