//! HTTP handlers over the wayfinding core

use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    error_handling::HandleErrorLayer,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wayfinder_core::prelude::*;

use crate::config::ServerSection;
use crate::error::{ApiError, handle_middleware_error};

pub struct AppState {
    pub model: AirportModel,
}

pub fn build_router(state: Arc<AppState>, settings: &ServerSection) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .concurrency_limit(settings.concurrency_limit);

    Router::new()
        .route("/health", get(health))
        .route("/pois", get(list_pois))
        .route("/recommendations", post(recommendations))
        .route("/timeline", post(timeline))
        .route("/route", post(route))
        .route("/plan", post(plan))
        .layer(middleware)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "pois": state.model.poi_count(),
        "zones": state.model.zone_count(),
    }))
}

#[derive(Debug, Deserialize)]
struct PoiFilter {
    category: Option<PoiCategory>,
    terminal: Option<String>,
}

async fn list_pois(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PoiFilter>,
) -> Response {
    let pois: Vec<&Poi> = state
        .model
        .pois
        .iter()
        .filter(|poi| filter.category.is_none_or(|c| poi.category == c))
        .filter(|poi| {
            filter
                .terminal
                .as_deref()
                .is_none_or(|t| poi.terminal.eq_ignore_ascii_case(t))
        })
        .collect();
    Json(pois).into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationRequest {
    /// Explicit position; otherwise the arrivals zone of `terminal`
    location: Option<Location>,
    terminal: Option<String>,
    #[serde(default)]
    preferences: UserPreferences,
    now: Option<NaiveDateTime>,
    available_minutes: Option<f64>,
}

async fn recommendations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Response, ApiError> {
    let location = match (request.location, request.terminal.as_deref()) {
        (Some(location), _) => location,
        (None, Some(terminal)) => state.model.arrival_location(terminal),
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Either location or terminal is required".to_string(),
            ));
        }
    };

    let recommendations = recommend_pois(
        &state.model,
        &location,
        &request.preferences,
        request.now.unwrap_or_else(local_now),
        request.available_minutes,
    );
    Ok(Json(recommendations).into_response())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineRequest {
    trip: TripDetails,
    #[serde(default)]
    preferences: UserPreferences,
    /// Catalog ids, visited in this order
    #[serde(default)]
    selected_pois: Vec<String>,
}

async fn timeline(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TimelineRequest>,
) -> Result<Json<Vec<TimelineStep>>, ApiError> {
    let selected = request
        .selected_pois
        .iter()
        .map(|id| {
            state
                .model
                .poi(id)
                .ok_or_else(|| ApiError::UnknownPoi(id.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(build_timeline(
        &state.model,
        &request.trip,
        &request.preferences,
        &selected,
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteRequest {
    arrival_gate: String,
    departure_gate: String,
    #[serde(default)]
    preferences: String,
}

#[derive(Debug, Default, Deserialize)]
struct RouteFormat {
    format: Option<String>,
}

async fn route(
    State(state): State<Arc<AppState>>,
    Query(format): Query<RouteFormat>,
    Json(request): Json<RouteRequest>,
) -> Result<Response, ApiError> {
    for gate in [&request.arrival_gate, &request.departure_gate] {
        if state.model.graph.poi_node(gate).is_none() {
            return Err(ApiError::UnknownGate(gate.clone()));
        }
    }

    let result = compute_route(
        &state.model,
        &request.arrival_gate,
        &request.departure_gate,
        &request.preferences,
    );
    if result.is_empty() {
        return Err(ApiError::NoRoute {
            from: request.arrival_gate,
            to: request.departure_gate,
        });
    }

    match format.format.as_deref() {
        None | Some("json") => Ok(Json(result).into_response()),
        Some("geojson") => Ok(Json(result.to_geojson()?).into_response()),
        Some(other) => Err(ApiError::BadRequest(format!(
            "Unsupported format: {other}, expected json or geojson"
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct PlanBody {
    #[serde(flatten)]
    request: PlanRequest,
    now: Option<NaiveDateTime>,
}

async fn plan(State(state): State<Arc<AppState>>, Json(body): Json<PlanBody>) -> Response {
    let now = body.now.unwrap_or_else(local_now);
    let plan = plan_trip(&state.model, &body.request, now);
    tracing::debug!(
        selected = plan.selected.len(),
        steps = plan.timeline.len(),
        "trip planned"
    );
    Json(plan).into_response()
}
