//! HTTP handlers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::market::MarketSnapshot;
use crate::models::Listing;
use crate::search::{
    search_listings, search_suggestions, sort_listings, SortOption, DEFAULT_SUGGESTION_LIMIT,
};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/sheets - the CSV proxy endpoint.
///
/// Always answers 200 with CSV; the x-sheet-source header names the tier
/// that produced the body (cache, api, export, backup, fallback).
pub async fn get_sheet_csv(State(state): State<AppState>) -> Response {
    let (csv, source) = state.proxy.resolve().await;

    (
        StatusCode::OK,
        [
            ("content-type", "text/csv; charset=utf-8"),
            ("x-sheet-source", source),
        ],
        csv,
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct ListingsParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub sort: SortOption,
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub count: usize,
    pub listings: Vec<Listing>,
}

/// GET /api/listings?q=&sort= - search and order the current snapshot.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(params): Query<ListingsParams>,
) -> Json<ListingsResponse> {
    let snapshot = state.listings.read().await.clone();

    let filtered = search_listings(&snapshot, &params.q);
    let listings = sort_listings(&filtered, params.sort);

    if !params.q.trim().is_empty() {
        state.history.save(&params.q);
    }

    Json(ListingsResponse { count: listings.len(), listings })
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_suggestion_limit")]
    pub limit: usize,
}

/// GET /api/listings/suggest?q=&limit=
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<String>> {
    let snapshot = state.listings.read().await;
    Json(search_suggestions(&snapshot, &params.q, params.limit))
}

/// GET /api/history
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.history.get_all())
}

/// POST /api/history/clear
pub async fn clear_history(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.history.clear();
    Json(json!({ "cleared": true }))
}

/// GET /api/market
pub async fn get_market(State(state): State<AppState>) -> Json<MarketSnapshot> {
    Json(state.market.read().await.clone())
}
