//! Recent search history: newest first, deduplicated on route+date,
//! capped at a fixed depth.

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use crate::supplier::OfferSearchParams;

const MAX_HISTORY: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    pub id: Uuid,
    pub origin: String,
    pub destination: Option<String>,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub adults: u32,
    pub searched_at: DateTime<Utc>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/history", get(list_history).delete(clear_history))
        .route("/api/history/{id}", delete(remove_entry))
}

/// Append a completed search, replacing any earlier entry for the same
/// origin+destination+departure date and trimming to the cap.
pub async fn record_search(state: &AppState, params: &OfferSearchParams) {
    let mut history = state.history.write().await;
    history.retain(|h| {
        !(h.origin == params.origin
            && h.destination == params.destination
            && h.departure_date == params.departure_date)
    });
    history.insert(
        0,
        SearchHistoryEntry {
            id: Uuid::new_v4(),
            origin: params.origin.clone(),
            destination: params.destination.clone(),
            departure_date: params.departure_date.clone(),
            return_date: params.return_date.clone(),
            adults: params.passengers,
            searched_at: Utc::now(),
        },
    );
    history.truncate(MAX_HISTORY);
}

/// GET /api/history
pub async fn list_history(State(state): State<AppState>) -> Json<Vec<SearchHistoryEntry>> {
    Json(state.history.read().await.clone())
}

/// DELETE /api/history/{id}
pub async fn remove_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut history = state.history.write().await;
    let before = history.len();
    history.retain(|h| h.id != id);
    if history.len() == before {
        return Err(AppError::NotFoundError(format!("no history entry {id}")));
    }
    Ok(Json(serde_json::json!({ "removed": id })))
}

/// DELETE /api/history
pub async fn clear_history(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.history.write().await.clear();
    Json(serde_json::json!({ "cleared": true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supplier::{MockSupplier, SupplierClient};
    use farelens_core::airports::AirportDirectory;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let directory = Arc::new(AirportDirectory::bundled());
        let supplier: Arc<dyn SupplierClient> =
            Arc::new(MockSupplier::new(directory.clone(), 4, "EUR".to_string()));
        AppState::new(directory, supplier)
    }

    fn params(origin: &str, destination: &str, date: &str) -> OfferSearchParams {
        OfferSearchParams {
            origin: origin.to_string(),
            destination: Some(destination.to_string()),
            departure_date: date.to_string(),
            return_date: None,
            passengers: 1,
        }
    }

    #[tokio::test]
    async fn test_duplicate_search_replaces_entry() {
        let state = test_state();
        record_search(&state, &params("MAD", "BCN", "2025-08-01")).await;
        record_search(&state, &params("MAD", "LHR", "2025-08-01")).await;
        record_search(&state, &params("MAD", "BCN", "2025-08-01")).await;

        let history = state.history.read().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].destination.as_deref(), Some("BCN"));
    }

    #[tokio::test]
    async fn test_history_is_capped() {
        let state = test_state();
        for day in 1..=12 {
            record_search(&state, &params("MAD", "BCN", &format!("2025-08-{day:02}"))).await;
        }
        let history = state.history.read().await;
        assert_eq!(history.len(), MAX_HISTORY);
        // Newest first.
        assert_eq!(history[0].departure_date, "2025-08-12");
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let state = test_state();
        record_search(&state, &params("MAD", "BCN", "2025-08-01")).await;
        let id = state.history.read().await[0].id;

        remove_entry(State(state.clone()), Path(id)).await.expect("should remove");
        assert!(state.history.read().await.is_empty());

        let missing = remove_entry(State(state.clone()), Path(Uuid::new_v4())).await;
        assert!(matches!(missing, Err(AppError::NotFoundError(_))));

        record_search(&state, &params("MAD", "BCN", "2025-08-01")).await;
        clear_history(State(state.clone())).await;
        assert!(state.history.read().await.is_empty());
    }
}
