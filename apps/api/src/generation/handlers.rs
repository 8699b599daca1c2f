use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::{generate_lesson, generate_module_outline, regenerate_section};
use crate::generation::parser::{SectionContent, SectionField};
use crate::llm_client::LlmClient;
use crate::models::lesson::Lesson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateLessonRequest {
    pub title: String,
    pub topic: String,
    /// Store the generated lesson in the catalog. Defaults to true.
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_save() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct GenerateOutlineRequest {
    pub title: String,
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutlineResponse {
    pub outline: String,
}

#[derive(Debug, Deserialize)]
pub struct RegenerateSectionRequest {
    pub title: String,
    pub topic: String,
    pub field: SectionField,
}

#[derive(Debug, Serialize)]
pub struct RegenerateSectionResponse {
    pub field: SectionField,
    pub content: SectionContent,
}

fn require_llm(state: &AppState) -> Result<&LlmClient, AppError> {
    state.llm.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable(
            "Lesson generation is not configured (OPENROUTER_API_KEY is unset)".to_string(),
        )
    })
}

/// POST /api/v1/generate/lesson
pub async fn handle_generate_lesson(
    State(state): State<AppState>,
    Json(req): Json<GenerateLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let llm = require_llm(&state)?;
    let lesson = generate_lesson(llm, &req.title, &req.topic).await?;

    if req.save {
        let stored = state.catalog.add_lesson(lesson).await?;
        return Ok((StatusCode::CREATED, Json(stored)));
    }
    Ok((StatusCode::OK, Json(lesson.with_derived_tags())))
}

/// POST /api/v1/generate/modules
pub async fn handle_generate_outline(
    State(state): State<AppState>,
    Json(req): Json<GenerateOutlineRequest>,
) -> Result<Json<GenerateOutlineResponse>, AppError> {
    let llm = require_llm(&state)?;
    let outline = generate_module_outline(llm, &req.title, &req.topic).await?;
    Ok(Json(GenerateOutlineResponse { outline }))
}

/// POST /api/v1/generate/section
pub async fn handle_regenerate_section(
    State(state): State<AppState>,
    Json(req): Json<RegenerateSectionRequest>,
) -> Result<Json<RegenerateSectionResponse>, AppError> {
    let llm = require_llm(&state)?;
    let content = regenerate_section(llm, &req.title, &req.topic, req.field).await?;
    Ok(Json(RegenerateSectionResponse {
        field: req.field,
        content,
    }))
}
