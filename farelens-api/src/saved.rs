//! Saved (favorited) flight offers.
//!
//! A save keeps a verbatim snapshot of the offer as it was scored at
//! save time; scores are set-relative, so the snapshot is display data,
//! never re-scored.

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farelens_core::model::FlightOffer;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFlight {
    /// The upstream offer id.
    pub id: String,
    pub offer: FlightOffer,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SaveFlightRequest {
    pub offer: FlightOffer,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/saved", get(list_saved).post(save_offer).delete(clear_saved))
        .route("/api/saved/{id}", delete(remove_saved))
}

/// GET /api/saved, newest first.
pub async fn list_saved(State(state): State<AppState>) -> Json<Vec<SavedFlight>> {
    Json(state.saved.read().await.clone())
}

/// POST /api/saved, idempotent on offer id; the first save wins.
pub async fn save_offer(
    State(state): State<AppState>,
    Json(req): Json<SaveFlightRequest>,
) -> Json<SavedFlight> {
    let mut saved = state.saved.write().await;
    if let Some(existing) = saved.iter().find(|s| s.id == req.offer.id) {
        return Json(existing.clone());
    }

    let entry = SavedFlight {
        id: req.offer.id.clone(),
        offer: req.offer,
        saved_at: Utc::now(),
    };
    saved.insert(0, entry.clone());
    Json(entry)
}

/// DELETE /api/saved/{id}
pub async fn remove_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut saved = state.saved.write().await;
    let before = saved.len();
    saved.retain(|s| s.id != id);
    if saved.len() == before {
        return Err(AppError::NotFoundError(format!("no saved flight {id}")));
    }
    Ok(Json(serde_json::json!({ "removed": id })))
}

/// DELETE /api/saved
pub async fn clear_saved(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.saved.write().await.clear();
    Json(serde_json::json!({ "cleared": true }))
}
