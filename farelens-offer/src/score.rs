//! Deal scoring and price statistics, relative to one result set.
//!
//! A deal score only means something inside the set it was computed
//! against: the same offer scores differently in a different search and
//! is never carried across sets.

use farelens_core::model::FlightOffer;
use serde::{Deserialize, Serialize};

/// Weight of the price component (cheaper = better).
pub const PRICE_WEIGHT: f64 = 60.0;
/// Weight of the duration component (shorter = better).
pub const DURATION_WEIGHT: f64 = 30.0;
/// Weight of the stops component (direct = best).
pub const STOPS_WEIGHT: f64 = 10.0;

/// Neutral score for degenerate sets (max price 0).
const NEUTRAL_SCORE: u8 = 50;

/// Cross-offer maxima the score is normalized against.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext {
    pub max_price: f64,
    pub max_duration_min: u32,
}

impl ScoreContext {
    /// Maxima across a mapped result set.
    pub fn from_offers(offers: &[FlightOffer]) -> Self {
        Self {
            max_price: offers.iter().map(|o| o.price).fold(0.0, f64::max),
            max_duration_min: offers.iter().map(|o| o.total_duration_min).max().unwrap_or(0),
        }
    }
}

/// Compute the 0-100 deal score for one offer against its set's maxima.
pub fn compute_deal_score(offer: &FlightOffer, context: &ScoreContext) -> u8 {
    if context.max_price == 0.0 {
        return NEUTRAL_SCORE;
    }

    // Each component normalized to [0, 1]: 1 is cheapest / shortest / direct.
    let price_score = 1.0 - offer.price / context.max_price;

    let duration_score = if context.max_duration_min > 0 {
        1.0 - offer.total_duration_min as f64 / context.max_duration_min as f64
    } else {
        0.0
    };

    let stops_score = match offer.stops {
        0 => 1.0,
        1 => 0.5,
        _ => 0.0,
    };

    let raw = price_score * PRICE_WEIGHT + duration_score * DURATION_WEIGHT + stops_score * STOPS_WEIGHT;
    raw.clamp(0.0, 100.0).round() as u8
}

/// Price statistics across a result set, in the offers' currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    pub min: f64,
    pub median: f64,
    pub max: f64,
    /// Rounded to the nearest whole unit.
    pub mean: f64,
}

impl PriceStats {
    pub const ZERO: PriceStats = PriceStats {
        min: 0.0,
        median: 0.0,
        max: 0.0,
        mean: 0.0,
    };
}

/// min/median/max/mean over per-passenger prices; all zeros when empty.
pub fn compute_price_stats(offers: &[FlightOffer]) -> PriceStats {
    if offers.is_empty() {
        return PriceStats::ZERO;
    }

    let mut prices: Vec<f64> = offers.iter().map(|o| o.price).collect();
    prices.sort_by(f64::total_cmp);

    let min = prices[0];
    let max = prices[prices.len() - 1];
    let mean = (prices.iter().sum::<f64>() / prices.len() as f64).round();

    let mid = prices.len() / 2;
    let median = if prices.len() % 2 == 0 {
        (prices[mid - 1] + prices[mid]) / 2.0
    } else {
        prices[mid]
    };

    PriceStats { min, median, max, mean }
}
