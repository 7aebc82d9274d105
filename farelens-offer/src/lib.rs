pub mod amadeus;
pub mod duffel;
pub mod mapper;
pub mod pipeline;
pub mod raw;
pub mod score;

pub use amadeus::AmadeusMapper;
pub use duffel::DuffelMapper;
pub use mapper::{MappingError, OfferMapper};
pub use pipeline::{process, PipelineOutcome};
pub use score::{compute_deal_score, compute_price_stats, PriceStats, ScoreContext};
