pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route(
            "/api/v1/lessons",
            get(catalog::handle_list_lessons).post(catalog::handle_add_lesson),
        )
        .route(
            "/api/v1/modules",
            get(catalog::handle_list_modules).post(catalog::handle_create_module),
        )
        .route(
            "/api/v1/modules/:title",
            get(catalog::handle_get_module).delete(catalog::handle_delete_module),
        )
        .route(
            "/api/v1/modules/:title/lessons",
            post(catalog::handle_add_lesson_to_module),
        )
        // Matching
        .route("/api/v1/match/suggestions", post(catalog::handle_suggest))
        .route("/api/v1/match/modules", post(catalog::handle_match))
        .route("/api/v1/match/options", post(catalog::handle_organize_options))
        .route("/api/v1/tags", post(catalog::handle_extract_tags))
        // Generation
        .route(
            "/api/v1/generate/lesson",
            post(generation::handle_generate_lesson),
        )
        .route(
            "/api/v1/generate/modules",
            post(generation::handle_generate_outline),
        )
        .route(
            "/api/v1/generate/section",
            post(generation::handle_regenerate_section),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::service::CatalogService;
    use crate::catalog::store::MemoryStore;
    use crate::config::{Config, DEFAULT_SIMILARITY_THRESHOLD};

    fn test_state() -> AppState {
        let config = Config {
            redis_url: None,
            redis_prefix: "test".to_string(),
            openrouter_api_key: None,
            llm_api_url: String::new(),
            llm_model: String::new(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            seed_default_modules: true,
            port: 0,
            rust_log: "info".to_string(),
        };
        AppState {
            catalog: CatalogService::new(
                Arc::new(MemoryStore::new()),
                config.seed_default_modules,
                config.similarity_threshold,
            ),
            llm: None,
            config,
        }
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(b) => request.body(Body::from(b.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "memory");
        assert_eq!(body["generation"], false);
    }

    #[tokio::test]
    async fn test_module_lifecycle() {
        let app = build_router(test_state());

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/v1/modules",
            Some(json!({
                "title": "Soil Science",
                "overview": "Study soil composition and soil health",
                "difficulty": "Beginner",
                "prerequisites": ["none"],
                "estimated_time": "1 hour"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["tags"][0], "soil");

        let (status, updated) = send(
            &app,
            Method::POST,
            "/api/v1/modules/Soil%20Science/lessons",
            Some(json!({"title": "Clay", "topic": "Soil"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["lessons"].as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, "/api/v1/modules/Soil%20Science", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, "/api/v1/modules/Soil%20Science", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_add_lesson_without_title_is_bad_request() {
        let app = build_router(test_state());
        let (status, body) =
            send(&app, Method::POST, "/api/v1/lessons", Some(json!({"topic": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_modules_endpoint() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/match/modules",
            Some(json!({
                "lesson": {
                    "title": "Leaves",
                    "topic": "Plant",
                    "content": "Photosynthesis happens in leaves; roots and stems carry water."
                },
                "strategy": "cosine",
                "threshold": 0.35
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let matches = body.as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["title"], "Plant");
        assert!(matches[0]["similarity_score"].as_f64().unwrap() >= 0.35);
    }

    #[tokio::test]
    async fn test_suggestions_endpoint() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/match/suggestions",
            Some(json!({"title": "Intro to Clothes"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["title"], "Intro to Clothes");
    }

    #[tokio::test]
    async fn test_tags_endpoint() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/tags",
            Some(json!({"text": "Soil soil roots and leaves"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tags"], json!(["soil", "roots", "leaves"]));

        let (_, empty) = send(&app, Method::POST, "/api/v1/tags", Some(json!({}))).await;
        assert_eq!(empty["tags"], json!([]));
    }

    #[tokio::test]
    async fn test_generation_without_api_key_is_unavailable() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/generate/lesson",
            Some(json!({"title": "Botany", "topic": "Roots"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }
}
