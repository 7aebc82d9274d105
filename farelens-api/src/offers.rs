use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use farelens_core::format::{format_minutes, format_stops};
use farelens_core::model::FlightOffer;
use farelens_offer::{compute_price_stats, DuffelMapper, PriceStats};

use crate::error::AppError;
use crate::history;
use crate::state::AppState;
use crate::supplier::{OfferSearchParams, SupplierError};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOffersRequest {
    pub origin: String,
    pub destination: Option<String>,
    pub departure_date: String,
    pub return_date: Option<String>,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
}

fn default_passengers() -> u32 {
    1
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOffersResponse {
    pub offers: Vec<OfferView>,
    pub stats: PriceStats,
    /// Raw offers the pipeline had to drop.
    pub dropped: usize,
}

/// A scored offer plus the display strings the result list renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferView {
    #[serde(flatten)]
    pub offer: FlightOffer,
    /// Total duration, e.g. "2h 35m".
    pub duration_display: String,
    /// Outbound stops, e.g. "Direct" or "1 stop".
    pub stops_display: String,
    /// Flight numbers across both directions, outbound first.
    pub flight_numbers: Vec<String>,
}

impl OfferView {
    fn from_offer(offer: FlightOffer) -> Self {
        let duration_display = format_minutes(offer.total_duration_min);
        let stops_display = format_stops(offer.stops);
        let flight_numbers = offer
            .all_segments()
            .map(|s| s.flight_number.clone())
            .collect();
        Self {
            duration_display,
            stops_display,
            flight_numbers,
            offer,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/offers", post(search_offers))
}

/// POST /api/offers
/// Fetch raw offers from the supplier, normalize and score them as one
/// result set, and return the set with its price statistics. An empty
/// set is a 200; presenting "no results" is the client's concern.
pub async fn search_offers(
    State(state): State<AppState>,
    Json(req): Json<SearchOffersRequest>,
) -> Result<Json<SearchOffersResponse>, AppError> {
    if req.origin.trim().is_empty() || req.departure_date.trim().is_empty() {
        return Err(AppError::ValidationError(
            "origin and departureDate are required".to_string(),
        ));
    }

    let params = OfferSearchParams {
        origin: req.origin.trim().to_uppercase(),
        destination: req
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_uppercase),
        departure_date: req.departure_date.clone(),
        return_date: req.return_date.clone(),
        passengers: req.passengers.max(1),
    };

    let raw_offers = state.supplier.fetch_offers(&params).await.map_err(|e| match e {
        SupplierError::Rejected(msg) => AppError::UpstreamRejected(msg),
        SupplierError::NotConfigured(msg) | SupplierError::Upstream(msg) => {
            AppError::SupplierUnavailable(msg)
        }
    })?;

    let mapper = DuffelMapper::new(&state.directory);
    let outcome = farelens_offer::process(&mapper, &raw_offers);
    let stats = compute_price_stats(&outcome.offers);

    tracing::info!(
        origin = %params.origin,
        offers = outcome.offers.len(),
        dropped = outcome.failures.len(),
        "search completed"
    );

    history::record_search(&state, &params).await;

    let dropped = outcome.failures.len();
    let offers = outcome
        .into_offers()
        .into_iter()
        .map(OfferView::from_offer)
        .collect();

    Ok(Json(SearchOffersResponse {
        stats,
        dropped,
        offers,
    }))
}
