//! Typed models of the two upstream offer payloads.
//!
//! Field naming follows each supplier's wire format verbatim: Duffel is
//! snake_case with string money amounts, Amadeus is camelCase. Anything
//! the mappers can tolerate missing is optional here so that one partial
//! offer deserializes instead of failing the whole response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Duffel (POST /air/offer_requests)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuffelOffer {
    pub id: String,
    /// Total for all passengers, decimal string (e.g. "231.90").
    pub total_amount: String,
    pub base_amount: Option<String>,
    pub total_currency: String,
    /// Total kg CO2 for all passengers, decimal string. Sometimes absent.
    pub total_emissions_kg: Option<String>,
    #[serde(default)]
    pub passengers: Vec<DuffelPassenger>,
    #[serde(default)]
    pub slices: Vec<DuffelSlice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuffelPassenger {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub passenger_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuffelSlice {
    pub duration: Option<String>,
    pub origin: Option<DuffelPlace>,
    pub destination: Option<DuffelPlace>,
    #[serde(default)]
    pub segments: Vec<DuffelSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuffelPlace {
    pub iata_code: Option<String>,
    pub name: Option<String>,
    pub city_name: Option<String>,
    pub iata_country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuffelSegment {
    pub id: Option<String>,
    pub origin: DuffelPlace,
    pub destination: DuffelPlace,
    pub origin_terminal: Option<String>,
    pub destination_terminal: Option<String>,
    pub departing_at: String,
    pub arriving_at: String,
    pub marketing_carrier: DuffelCarrier,
    pub marketing_carrier_flight_number: String,
    pub operating_carrier: Option<DuffelCarrier>,
    pub aircraft: Option<DuffelAircraft>,
    /// Technical stops within the segment.
    #[serde(default)]
    pub stops: Vec<serde_json::Value>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuffelCarrier {
    pub iata_code: Option<String>,
    pub name: Option<String>,
    pub logo_symbol_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuffelAircraft {
    pub iata_code: Option<String>,
}

// ============================================================================
// Amadeus (GET /v2/shopping/flight-offers)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmadeusOffer {
    pub id: String,
    pub price: AmadeusPrice,
    #[serde(default)]
    pub itineraries: Vec<AmadeusItinerary>,
    pub number_of_bookable_seats: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmadeusPrice {
    /// Total for all passengers, decimal string.
    pub total: String,
    pub base: Option<String>,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmadeusItinerary {
    pub duration: Option<String>,
    #[serde(default)]
    pub segments: Vec<AmadeusSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmadeusSegment {
    pub id: Option<String>,
    pub departure: AmadeusEndpoint,
    pub arrival: AmadeusEndpoint,
    pub carrier_code: String,
    /// Flight number without the carrier prefix, e.g. "3167".
    pub number: String,
    pub operating: Option<AmadeusOperating>,
    pub aircraft: Option<AmadeusAircraft>,
    pub duration: Option<String>,
    pub number_of_stops: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmadeusEndpoint {
    pub iata_code: String,
    pub terminal: Option<String>,
    pub at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmadeusOperating {
    pub carrier_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmadeusAircraft {
    pub code: Option<String>,
}

/// The `dictionaries` block Amadeus returns beside `data`, carrying
/// carrier-code to display-name lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmadeusDictionaries {
    #[serde(default)]
    pub carriers: HashMap<String, String>,
}
