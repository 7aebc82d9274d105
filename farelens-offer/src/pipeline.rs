//! Two-phase result-set pipeline: normalize every raw offer, then score
//! the whole set against its own maxima.
//!
//! Scoring is relative to the set, so it cannot happen inside the
//! per-offer mapping pass; maxima are computed only once every offer is
//! mapped. Scores must be recomputed for every new search.

use farelens_core::model::FlightOffer;

use crate::mapper::{MappingError, OfferMapper};
use crate::score::{compute_deal_score, ScoreContext};

/// Mapped offers plus the per-offer failures that were dropped along
/// the way. One malformed raw offer never aborts the batch.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub offers: Vec<FlightOffer>,
    pub failures: Vec<MappingError>,
}

impl PipelineOutcome {
    pub fn into_offers(self) -> Vec<FlightOffer> {
        self.offers
    }
}

/// Map every raw offer through `mapper`, drop failures, then replace
/// each survivor's placeholder score with its set-relative deal score.
pub fn process<M: OfferMapper>(mapper: &M, raw_offers: &[M::Raw]) -> PipelineOutcome {
    let mut offers = Vec::with_capacity(raw_offers.len());
    let mut failures = Vec::new();

    for raw in raw_offers {
        match mapper.map_offer(raw) {
            Ok(offer) => offers.push(offer),
            Err(err) => {
                tracing::warn!(offer_id = err.offer_id(), error = %err, "dropping unmappable offer");
                failures.push(err);
            }
        }
    }

    if offers.is_empty() {
        return PipelineOutcome { offers, failures };
    }

    let context = ScoreContext::from_offers(&offers);
    let offers = offers
        .into_iter()
        .map(|offer| {
            let deal_score = compute_deal_score(&offer, &context);
            FlightOffer { deal_score, ..offer }
        })
        .collect();

    PipelineOutcome { offers, failures }
}
