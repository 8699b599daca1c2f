//! Catalog service — owns lessons and modules through an injected store and
//! drives the matching engine over them.
//!
//! Flow for every mutation: load collection → apply change → write collection.
//! Matching calls load modules once and hand plain slices to the engine.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

use crate::catalog::defaults::default_modules;
use crate::catalog::store::{KeyValueStore, StoreError};
use crate::errors::AppError;
use crate::matching::ranker::{rank, ScoredModule, DEFAULT_TOP_N};
use crate::matching::scorer::{MatchStrategy, TagOverlapScorer, COSINE_MIN_SCORE, SUGGESTION_MIN_SCORE};
use crate::models::lesson::Lesson;
use crate::models::module::{Module, NewModule};

pub const LESSONS_KEY: &str = "lessons";
pub const MODULES_KEY: &str = "modules";

/// Parameters of a module-matching request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub strategy: MatchStrategy,
    /// Caller threshold applied on top of the strategy's own minimum.
    /// Cosine falls back to the configured similarity threshold when absent.
    pub threshold: Option<f64>,
    pub top_n: Option<usize>,
}

/// Suggested modules first, then every other module in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleOptions {
    pub suggested: Vec<ScoredModule>,
    pub others: Vec<Module>,
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn KeyValueStore>,
    seed_defaults: bool,
    similarity_threshold: f64,
}

impl CatalogService {
    pub fn new(store: Arc<dyn KeyValueStore>, seed_defaults: bool, similarity_threshold: f64) -> Self {
        Self {
            store,
            seed_defaults,
            similarity_threshold,
        }
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, StoreError> {
        match self.store.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(key, raw).await
    }

    // ── Lessons ──────────────────────────────────────────────────────────────

    pub async fn list_lessons(&self) -> Result<Vec<Lesson>, AppError> {
        Ok(self.load(LESSONS_KEY).await?.unwrap_or_default())
    }

    /// Stores a lesson with freshly derived tags and returns it.
    pub async fn add_lesson(&self, lesson: Lesson) -> Result<Lesson, AppError> {
        let lesson = admit_lesson(lesson)?;

        let mut lessons = self.list_lessons().await?;
        lessons.push(lesson.clone());
        self.save(LESSONS_KEY, &lessons).await?;

        info!("Lesson '{}' added (tags: {:?})", lesson.title, lesson.tags);
        Ok(lesson)
    }

    // ── Modules ──────────────────────────────────────────────────────────────

    /// Returns all modules. An absent collection is seeded with the starter
    /// modules when seeding is enabled.
    pub async fn list_modules(&self) -> Result<Vec<Module>, AppError> {
        if let Some(modules) = self.load(MODULES_KEY).await? {
            return Ok(modules);
        }

        if !self.seed_defaults {
            return Ok(Vec::new());
        }

        let modules = default_modules();
        self.save(MODULES_KEY, &modules).await?;
        info!("Seeded {} default modules", modules.len());
        Ok(modules)
    }

    pub async fn get_module(&self, title: &str) -> Result<Module, AppError> {
        self.list_modules()
            .await?
            .into_iter()
            .find(|m| m.title == title)
            .ok_or_else(|| AppError::NotFound(format!("Module '{title}' not found")))
    }

    /// Creates a module with tags derived from its title and overview.
    /// A lesson supplied with the request becomes its first member.
    pub async fn create_module(&self, req: NewModule) -> Result<Module, AppError> {
        let (mut module, first_lesson) = req.into_parts();

        if module.title.is_empty() {
            return Err(AppError::Validation("Module title is required".to_string()));
        }
        if module.overview.trim().is_empty() {
            return Err(AppError::Validation("Module overview is required".to_string()));
        }

        let mut modules = self.list_modules().await?;
        if modules.iter().any(|m| m.title == module.title) {
            return Err(AppError::Conflict(format!(
                "Module '{}' already exists",
                module.title
            )));
        }

        if let Some(lesson) = first_lesson {
            module.lessons.push(admit_lesson(lesson)?);
        }

        modules.push(module.clone());
        self.save(MODULES_KEY, &modules).await?;

        info!(
            "Module '{}' created with {} lesson(s) (tags: {:?})",
            module.title,
            module.lessons.len(),
            module.tags
        );
        Ok(module)
    }

    /// Appends a lesson to a module. The module's tags are left as they were.
    pub async fn add_lesson_to_module(&self, title: &str, lesson: Lesson) -> Result<Module, AppError> {
        let lesson = admit_lesson(lesson)?;

        let mut modules = self.list_modules().await?;
        let module = modules
            .iter_mut()
            .find(|m| m.title == title)
            .ok_or_else(|| AppError::NotFound(format!("Module '{title}' not found")))?;

        module.lessons.push(lesson);
        let updated = module.clone();
        self.save(MODULES_KEY, &modules).await?;

        info!(
            "Lesson added to module '{}' ({} lesson(s))",
            updated.title,
            updated.lessons.len()
        );
        Ok(updated)
    }

    pub async fn delete_module(&self, title: &str) -> Result<(), AppError> {
        let mut modules = self.list_modules().await?;
        let before = modules.len();
        modules.retain(|m| m.title != title);

        if modules.len() == before {
            return Err(AppError::NotFound(format!("Module '{title}' not found")));
        }

        self.save(MODULES_KEY, &modules).await?;
        info!("Module '{title}' deleted");
        Ok(())
    }

    // ── Matching ─────────────────────────────────────────────────────────────

    /// Tag-overlap suggestions: every module scoring above 10, best first.
    pub async fn suggest_modules(&self, lesson: Lesson) -> Result<Vec<ScoredModule>, AppError> {
        let modules = self.list_modules().await?;
        Ok(suggest(&lesson.with_derived_tags(), &modules))
    }

    /// Ranks modules for a lesson under the requested strategy.
    pub async fn match_modules(
        &self,
        lesson: Lesson,
        options: &MatchOptions,
    ) -> Result<Vec<ScoredModule>, AppError> {
        let modules = self.list_modules().await?;
        let lesson = lesson.with_derived_tags();

        let matches = match options.strategy {
            MatchStrategy::Cosine => top_matching(
                &lesson,
                &modules,
                options.threshold.unwrap_or(self.similarity_threshold),
                options.top_n.unwrap_or(DEFAULT_TOP_N),
            ),
            MatchStrategy::TagOverlap => {
                let mut suggestions = suggest(&lesson, &modules);
                if let Some(threshold) = options.threshold {
                    suggestions.retain(|s| s.similarity_score >= threshold);
                }
                suggestions.truncate(options.top_n.unwrap_or(DEFAULT_TOP_N));
                suggestions
            }
        };

        info!(
            "Matched lesson '{}' against {} modules ({:?}): {} result(s)",
            lesson.title,
            modules.len(),
            options.strategy,
            matches.len()
        );
        Ok(matches)
    }

    /// Options for placing a lesson: suggestions first, then the rest.
    pub async fn organize_options(&self, lesson: Lesson) -> Result<ModuleOptions, AppError> {
        let modules = self.list_modules().await?;
        let suggested = suggest(&lesson.with_derived_tags(), &modules);

        let others = modules
            .into_iter()
            .filter(|m| !suggested.iter().any(|s| s.module.title == m.title))
            .collect();

        Ok(ModuleOptions { suggested, others })
    }
}

/// Validates a lesson and derives its tags.
fn admit_lesson(lesson: Lesson) -> Result<Lesson, AppError> {
    if lesson.title.trim().is_empty() {
        return Err(AppError::Validation("Lesson title is required".to_string()));
    }
    Ok(lesson.with_derived_tags())
}

/// Tag-overlap scores strictly above `SUGGESTION_MIN_SCORE`, best first, no limit.
pub fn suggest(lesson: &Lesson, modules: &[Module]) -> Vec<ScoredModule> {
    let mut scored = rank(
        lesson,
        modules,
        &TagOverlapScorer,
        SUGGESTION_MIN_SCORE,
        modules.len(),
    );
    scored.retain(|s| s.similarity_score > SUGGESTION_MIN_SCORE);
    scored
}

/// Cosine matches: engine minimum and top-N first, then the caller's threshold.
pub fn top_matching(
    lesson: &Lesson,
    modules: &[Module],
    threshold: f64,
    top_n: usize,
) -> Vec<ScoredModule> {
    let mut matches = rank(
        lesson,
        modules,
        MatchStrategy::Cosine.scorer(),
        COSINE_MIN_SCORE,
        top_n,
    );
    matches.retain(|m| m.similarity_score >= threshold);
    matches
}
