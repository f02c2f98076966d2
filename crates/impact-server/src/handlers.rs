//! HTTP request handlers for the scoring service.
//!
//! Implements the score query, root status and health check endpoints using axum.

use crate::response::{ErrorResponse, HealthCheckResponse, RootResponse, ScoreResponse};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router as AxumRouter,
};
use chrono::Utc;
use impact_engine::{validate_entity, EntityBounds, ScoringEngine, ScoringError};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Scoring engine shared by all requests
    pub engine: Arc<ScoringEngine>,
    /// Accepted entity name lengths
    pub bounds: EntityBounds,
}

impl AppState {
    /// Create application state
    pub fn new(engine: ScoringEngine, bounds: EntityBounds) -> Self {
        Self {
            engine: Arc::new(engine),
            bounds,
        }
    }
}

/// Query string of `GET /score`
#[derive(Debug, Deserialize)]
pub struct ScoreQuery {
    /// Entity to score
    pub entity: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// A required query parameter was not supplied
    MissingParameter(&'static str),
    /// The query string could not be decoded
    InvalidQuery(String),
    /// Scoring rejected the request
    Scoring(ScoringError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                format!("Missing query parameter: {}", name),
            ),
            AppError::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Scoring(e @ ScoringError::InvalidInput(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl From<ScoringError> for AppError {
    fn from(e: ScoringError) -> Self {
        AppError::Scoring(e)
    }
}

/// GET /score?entity=<name> - Score an entity
async fn get_score(
    State(state): State<AppState>,
    query: Result<Query<ScoreQuery>, QueryRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Query(query) = query?;
    let entity = query.entity.ok_or(AppError::MissingParameter("entity"))?;
    validate_entity(&entity, &state.bounds)?;

    let score = state.engine.score(&entity)?;
    info!(
        entity = %entity,
        total = score.total(),
        decision = %score.decision(),
        fallback = score.is_fallback(),
        "scored entity"
    );

    Ok(Json(ScoreResponse::from(&score)))
}

/// GET / - Static status message
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        msg: "Impact Score API up".to_string(),
        time: Utc::now(),
    })
}

/// GET /health - Health check with the active scoring mode
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        mode: state.engine.mode().to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(root))
        .route("/score", get(get_score))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Add the CORS policy: any origin, method and header when `permissive`
pub fn with_cors(router: AxumRouter, permissive: bool) -> AxumRouter {
    if permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState::new(ScoringEngine::offline(), EntityBounds::default())
    }

    #[tokio::test]
    async fn test_root() {
        let app = create_router(create_test_state());

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_score() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/score?entity=abc")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_score_missing_entity() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/score")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_score_duplicate_entity() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/score?entity=abc&entity=def")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_score_too_short() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/score?entity=ab")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
