use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::service::{MatchOptions, ModuleOptions};
use crate::errors::AppError;
use crate::matching::ranker::ScoredModule;
use crate::matching::tags::extract_tags_opt;
use crate::models::lesson::Lesson;
use crate::models::module::{Module, NewModule};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MatchRequest {
    pub lesson: Lesson,
    #[serde(flatten)]
    pub options: MatchOptions,
}

#[derive(Deserialize)]
pub struct TagsRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

/// GET /api/v1/lessons
pub async fn handle_list_lessons(
    State(state): State<AppState>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    Ok(Json(state.catalog.list_lessons().await?))
}

/// POST /api/v1/lessons
pub async fn handle_add_lesson(
    State(state): State<AppState>,
    Json(lesson): Json<Lesson>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let lesson = state.catalog.add_lesson(lesson).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// GET /api/v1/modules
pub async fn handle_list_modules(
    State(state): State<AppState>,
) -> Result<Json<Vec<Module>>, AppError> {
    Ok(Json(state.catalog.list_modules().await?))
}

/// POST /api/v1/modules
pub async fn handle_create_module(
    State(state): State<AppState>,
    Json(req): Json<NewModule>,
) -> Result<(StatusCode, Json<Module>), AppError> {
    let module = state.catalog.create_module(req).await?;
    Ok((StatusCode::CREATED, Json(module)))
}

/// GET /api/v1/modules/:title
pub async fn handle_get_module(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Module>, AppError> {
    Ok(Json(state.catalog.get_module(&title).await?))
}

/// DELETE /api/v1/modules/:title
pub async fn handle_delete_module(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete_module(&title).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/modules/:title/lessons
pub async fn handle_add_lesson_to_module(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(lesson): Json<Lesson>,
) -> Result<Json<Module>, AppError> {
    Ok(Json(state.catalog.add_lesson_to_module(&title, lesson).await?))
}

/// POST /api/v1/match/suggestions
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(lesson): Json<Lesson>,
) -> Result<Json<Vec<ScoredModule>>, AppError> {
    Ok(Json(state.catalog.suggest_modules(lesson).await?))
}

/// POST /api/v1/match/modules
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<Vec<ScoredModule>>, AppError> {
    if req.options.threshold.is_some_and(|t| !t.is_finite()) {
        return Err(AppError::Validation("threshold must be a finite number".to_string()));
    }
    Ok(Json(state.catalog.match_modules(req.lesson, &req.options).await?))
}

/// POST /api/v1/match/options
pub async fn handle_organize_options(
    State(state): State<AppState>,
    Json(lesson): Json<Lesson>,
) -> Result<Json<ModuleOptions>, AppError> {
    Ok(Json(state.catalog.organize_options(lesson).await?))
}

/// POST /api/v1/tags
pub async fn handle_extract_tags(Json(req): Json<TagsRequest>) -> Json<TagsResponse> {
    Json(TagsResponse {
        tags: extract_tags_opt(req.text.as_deref()),
    })
}
