//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::planner::{PlanError, PlanRequest, Planner};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/route/plan", post(plan_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the planning form.
async fn index_page() -> IndexTemplate {
    IndexTemplate
}

/// List all imported stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .stations
        .all()
        .await
        .iter()
        .map(StationDto::from_station)
        .collect();

    Json(StationsResponse { stations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a route with fuel stops.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(body = %String::from_utf8_lossy(&body), "invalid plan request: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = PlanRequest::new(req.start, req.end);

    let planner = Planner::new(
        state.ors.as_ref(),
        state.ors.as_ref(),
        &state.stations,
        &state.config,
    );
    let result = planner.plan(&request).await.map_err(AppError::from)?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = PlanResultsTemplate::from_result(&result);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanRouteResponse::from_result(&result)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed request input
    BadRequest { message: String },

    /// A geocoding or directions provider call failed
    Upstream { detail: String, message: String },

    /// The provider returned a degenerate route
    EmptyRoute,

    /// Anything else
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::EmptyRoute => AppError::EmptyRoute,
            geocode @ PlanError::Geocode { .. } => AppError::Upstream {
                detail: "geocoding error".to_string(),
                message: geocode.to_string(),
            },
            directions @ PlanError::Directions { .. } => AppError::Upstream {
                detail: "directions error".to_string(),
                message: directions.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail, error) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::Upstream { detail, message } => {
                (StatusCode::BAD_GATEWAY, detail, Some(message))
            }
            AppError::EmptyRoute => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "zero-distance route".to_string(),
                None,
            ),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        tracing::error!(%status, %detail, ?error, "request failed");

        let body = Json(ErrorResponse { detail, error });
        (status, body).into_response()
    }
}
