//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::pipeline::ParseError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/parse-url", post(parse_url))
        .route("/suggest-stations", post(suggest_stations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a shared map link into rides dated today.
///
/// A link that cannot be read, or that has no subway route, is a normal
/// answer with `success: false`.
async fn parse_url(
    State(state): State<AppState>,
    Json(req): Json<ParseUrlRequest>,
) -> Result<Json<ParseUrlResponse>, AppError> {
    let url = req.url.trim();
    if url.is_empty() {
        return Err(AppError::BadRequest {
            message: "url must not be empty".to_string(),
        });
    }

    let today = Local::now().date_naive();

    match state.parser.parse(url).await {
        Ok(rides) => Ok(Json(ParseUrlResponse::from_rides(rides, today))),
        Err(ParseError::UnresolvableUrl { url, reason }) => {
            info!(%url, %reason, "link not understood");
            Ok(Json(ParseUrlResponse::from_rides(Vec::new(), today)))
        }
        Err(e @ ParseError::Transport { .. }) => Err(AppError::Unavailable {
            message: e.to_string(),
        }),
        Err(e @ ParseError::Provider { .. }) => Err(AppError::BadGateway {
            message: e.to_string(),
        }),
    }
}

/// Suggest registry stations for a free-text name.
async fn suggest_stations(
    State(state): State<AppState>,
    Json(req): Json<SuggestStationsRequest>,
) -> Json<SuggestStationsResponse> {
    let suggestions = state.stations.suggest(&req.extracted_name);

    Json(SuggestStationsResponse {
        extracted_name: req.extracted_name,
        suggestions,
        user_feedback: req.user_feedback,
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Unavailable { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
