use serde::{Deserialize, Serialize};

/// A lat/lng pair in decimal degrees.
///
/// Kept as a separate struct so an airport the directory does not know
/// carries `None` instead of a magic zero coordinate, since (0, 0) is a
/// real point in the Gulf of Guinea, not a miss marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Static airport reference data, keyed by IATA code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub coordinates: Option<Coordinates>,
}

/// Departure or arrival side of a segment.
///
/// `at` is the upstream ISO-8601 timestamp verbatim. Duffel emits
/// zone-less local times, so this stays an opaque string rather than a
/// DateTime that would have to invent an offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentEndpoint {
    pub iata_code: String,
    pub terminal: Option<String>,
    pub at: String,
}

/// One non-stop flown leg within a slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: String,
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
    pub carrier_code: String,
    pub carrier_name: String,
    pub carrier_logo_url: Option<String>,
    pub operating_carrier: String,
    /// Marketing carrier code + flight number, e.g. "IB3167".
    pub flight_number: String,
    pub aircraft_code: String,
    pub duration: String,
    /// Technical stops within the leg, not itinerary stops.
    pub stops: u32,
}

/// One direction of travel: the outbound or inbound itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    pub duration: String,
    pub duration_min: u32,
    /// segments.len() - 1; a one-segment slice is direct.
    pub stops: u32,
    pub segments: Vec<Segment>,
}

/// The canonical flight offer every downstream consumer operates on.
///
/// Built once per raw upstream offer with `deal_score` 0; the scoring
/// pass replaces that field exactly once. `deal_score` is only
/// meaningful relative to the result set it was scored in and must
/// never be reused across searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: String,
    pub origin: Airport,
    pub destination: Airport,
    /// Per-passenger total, in `currency`.
    pub price: f64,
    /// Per-passenger base fare; equals `price` when the upstream gave no base.
    pub price_base: f64,
    pub currency: String,
    pub outbound: Slice,
    pub inbound: Option<Slice>,
    pub total_duration_min: u32,
    /// Outbound stops, the primary sort/filter key.
    pub stops: u32,
    /// Distinct marketing-carrier codes, first-seen order.
    pub airlines: Vec<String>,
    /// Index-aligned with `airlines`.
    pub airline_names: Vec<String>,
    /// Index-aligned with `airlines`.
    pub airline_logo_urls: Vec<Option<String>>,
    pub is_round_trip: bool,
    pub deal_score: u8,
    /// Per-passenger CO2 estimate in kg, rounded.
    pub co2_kg: u32,
}

impl FlightOffer {
    /// All segments across both directions, outbound first.
    pub fn all_segments(&self) -> impl Iterator<Item = &Segment> {
        self.outbound
            .segments
            .iter()
            .chain(self.inbound.iter().flat_map(|s| s.segments.iter()))
    }
}
