//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::info;

use crate::directions::DirectionsError;
use crate::domain::Station;
use crate::finder::StationFinder;
use crate::polyline;

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
        .route("/search", get(search_page))
        .route("/api/stations", get(search_stations))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search form.
async fn index_page() -> impl IntoResponse {
    render_template(IndexTemplate { warning: None })
}

/// How a search failed, shaped for presentation.
enum SearchFailure {
    /// One or both inputs were blank.
    BlankInput,
    /// The routing API found no route between the places.
    NoRoute(String),
    /// A collaborator call or the geometry decode failed outright.
    Upstream(String),
}

/// Run the full search pipeline: resolve, decode, find.
async fn run_search(
    state: &AppState,
    origin: &str,
    destination: &str,
) -> Result<Vec<Station>, SearchFailure> {
    if origin.trim().is_empty() || destination.trim().is_empty() {
        return Err(SearchFailure::BlankInput);
    }

    let geometry = state
        .directions
        .resolve(origin, destination)
        .await
        .map_err(|e| match e {
            DirectionsError::NoRoute { status, message } => {
                SearchFailure::NoRoute(message.unwrap_or(status))
            }
            other => SearchFailure::Upstream(other.to_string()),
        })?;

    let points = polyline::decode(geometry.as_str())
        .map_err(|e| SearchFailure::Upstream(format!("route geometry could not be decoded: {e}")))?;

    let finder = StationFinder::new(state.places.as_ref(), state.config.as_ref());
    let outcome = finder.find_along(&points).await;

    info!(
        origin,
        destination,
        stations = outcome.stations.len(),
        points_queried = outcome.points_queried,
        points_failed = outcome.points_failed,
        "station search complete"
    );

    Ok(outcome.stations)
}

/// HTML search results page.
async fn search_page(
    State(state): State<AppState>,
    Query(request): Query<StationSearchRequest>,
) -> Response {
    match run_search(&state, &request.origin, &request.destination).await {
        Ok(stations) => render_template(ResultsTemplate {
            origin: request.origin,
            destination: request.destination,
            stations: StationView::from_stations(&stations),
        }),
        Err(SearchFailure::BlankInput) => render_template(IndexTemplate {
            warning: Some("Please enter both origin and destination.".to_string()),
        }),
        Err(SearchFailure::NoRoute(cause)) => render_template(ErrorTemplate {
            message: format!("Failed to fetch route: {cause}"),
        }),
        Err(SearchFailure::Upstream(cause)) => render_template(ErrorTemplate {
            message: cause,
        }),
    }
}

/// JSON search endpoint mirroring the HTML page.
async fn search_stations(
    State(state): State<AppState>,
    Query(request): Query<StationSearchRequest>,
) -> Response {
    match run_search(&state, &request.origin, &request.destination).await {
        Ok(stations) => Json(StationSearchResponse {
            origin: request.origin,
            destination: request.destination,
            count: stations.len(),
            stations: StationResult::from_stations(&stations),
        })
        .into_response(),
        Err(SearchFailure::BlankInput) => error_json(
            StatusCode::BAD_REQUEST,
            "both origin and destination are required",
        ),
        Err(SearchFailure::NoRoute(cause)) => error_json(
            StatusCode::NOT_FOUND,
            &format!("no route found: {cause}"),
        ),
        Err(SearchFailure::Upstream(cause)) => error_json(StatusCode::BAD_GATEWAY, &cause),
    }
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn render_template<T: Template>(template: T) -> Response {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
    .into_response()
}
