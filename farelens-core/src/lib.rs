pub mod airports;
pub mod emissions;
pub mod format;
pub mod geo;
pub mod model;

pub use airports::AirportDirectory;
pub use emissions::EmissionEstimator;
pub use model::{Airport, Coordinates, FlightOffer, Segment, SegmentEndpoint, Slice};
