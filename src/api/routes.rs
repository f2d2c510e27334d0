use super::infra::AppState;
use crate::error::AppError;
use crate::portal::render::{result_html, suggestion_list_html};
use crate::portal::service::LISTBOX_ID;
use crate::portal::{Committee, LookupStatus, LookupView, PortalService, Suggestion};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Form, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestionQuery {
    #[serde(default)]
    pub(crate) q: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupRequest {
    #[serde(default)]
    pub(crate) query: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SuggestionsResponse {
    pub(crate) query: String,
    pub(crate) suggestions: Vec<Suggestion>,
}

type SharedPortal = Arc<PortalService>;

/// Portal endpoints: JSON API plus the HTML fragments used by the page.
pub fn portal_router(service: SharedPortal) -> Router {
    Router::new()
        .route("/api/v1/portal/suggestions", get(suggestions_endpoint))
        .route("/api/v1/portal/lookup", post(lookup_endpoint))
        .route("/portal/suggestions", get(suggestions_fragment))
        .route("/portal/lookup", post(lookup_fragment))
        .route("/api/v1/committees", get(committees_endpoint))
        .route("/api/v1/committees/:code", get(committee_endpoint))
        .with_state(service)
}

pub fn with_portal_routes(service: SharedPortal) -> Router {
    portal_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn suggestions_endpoint(
    State(service): State<SharedPortal>,
    Query(params): Query<SuggestionQuery>,
) -> Json<SuggestionsResponse> {
    let suggestions = service.suggestions(&params.q);
    Json(SuggestionsResponse {
        query: params.q,
        suggestions,
    })
}

pub(crate) async fn lookup_endpoint(
    State(service): State<SharedPortal>,
    Json(request): Json<LookupRequest>,
) -> (StatusCode, Json<LookupView>) {
    let view = service.lookup(&request.query);
    let status = match view.status {
        LookupStatus::Found => StatusCode::OK,
        LookupStatus::NotFound => StatusCode::NOT_FOUND,
    };
    (status, Json(view))
}

pub(crate) async fn suggestions_fragment(
    State(service): State<SharedPortal>,
    Query(params): Query<SuggestionQuery>,
) -> Html<String> {
    let suggestions = service.suggestions(&params.q);
    Html(suggestion_list_html(LISTBOX_ID, &suggestions, None))
}

pub(crate) async fn lookup_fragment(
    State(service): State<SharedPortal>,
    Form(request): Form<LookupRequest>,
) -> Html<String> {
    Html(result_html(&service.lookup(&request.query)))
}

pub(crate) async fn committees_endpoint(
    State(service): State<SharedPortal>,
) -> Json<Vec<Committee>> {
    Json(service.committees().to_vec())
}

pub(crate) async fn committee_endpoint(
    State(service): State<SharedPortal>,
    Path(code): Path<String>,
) -> Result<Json<Committee>, AppError> {
    service
        .committee(&code)
        .cloned()
        .map(Json)
        .ok_or(AppError::UnknownCommittee(code))
}
