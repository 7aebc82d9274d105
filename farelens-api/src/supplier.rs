//! Upstream flight-offer suppliers.
//!
//! The BFF talks to whichever supplier backs the deployment through the
//! `SupplierClient` trait; responses are Duffel-shaped raw offers that
//! the offer pipeline normalizes. `MockSupplier` produces a
//! deterministic result set so the service runs end to end without
//! upstream credentials.

use async_trait::async_trait;
use farelens_core::airports::AirportDirectory;
use farelens_core::geo::haversine_distance_km;
use farelens_offer::raw::{
    DuffelAircraft, DuffelCarrier, DuffelOffer, DuffelPassenger, DuffelPlace, DuffelSegment,
    DuffelSlice,
};
use serde::Deserialize;
use std::sync::Arc;

/// Validated search parameters handed to the supplier.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferSearchParams {
    pub origin: String,
    pub destination: Option<String>,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub passengers: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("supplier is not configured: {0}")]
    NotConfigured(String),

    #[error("supplier rejected the search: {0}")]
    Rejected(String),

    #[error("supplier request failed: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait SupplierClient: Send + Sync {
    /// Fetch raw offers for a search. The shape is Duffel's; the caller
    /// runs them through the Duffel mapper.
    async fn fetch_offers(&self, params: &OfferSearchParams)
        -> Result<Vec<DuffelOffer>, SupplierError>;
}

// ============================================================================
// Mock supplier
// ============================================================================

const MOCK_CARRIERS: &[(&str, &str)] = &[
    ("IB", "Iberia"),
    ("VY", "Vueling"),
    ("BA", "British Airways"),
    ("AF", "Air France"),
    ("LH", "Lufthansa"),
    ("FR", "Ryanair"),
];

pub struct MockSupplier {
    directory: Arc<AirportDirectory>,
    max_offers: usize,
    currency: String,
}

impl MockSupplier {
    pub fn new(directory: Arc<AirportDirectory>, max_offers: usize, currency: String) -> Self {
        Self {
            directory,
            max_offers,
            currency,
        }
    }

    fn route_distance_km(&self, origin: &str, destination: &str) -> Option<f64> {
        let from = self.directory.lookup(origin)?.coordinates?;
        let to = self.directory.lookup(destination)?.coordinates?;
        Some(haversine_distance_km(from.lat, from.lng, to.lat, to.lng))
    }

    fn place(&self, iata: &str) -> DuffelPlace {
        match self.directory.lookup(iata) {
            Some(airport) => DuffelPlace {
                iata_code: Some(airport.iata.clone()),
                name: Some(airport.name.clone()),
                city_name: Some(airport.city.clone()),
                iata_country_code: None,
                latitude: airport.coordinates.map(|c| c.lat),
                longitude: airport.coordinates.map(|c| c.lng),
            },
            None => DuffelPlace {
                iata_code: Some(iata.to_string()),
                name: None,
                city_name: None,
                iata_country_code: None,
                latitude: None,
                longitude: None,
            },
        }
    }

    fn segment(
        &self,
        id: &str,
        from: &str,
        to: &str,
        date: &str,
        depart_hour: u32,
        duration_min: u32,
        carrier: (&str, &str),
        flight_number: u32,
    ) -> DuffelSegment {
        let depart_hour = depart_hour % 24;
        let arrive_total = depart_hour * 60 + duration_min;
        DuffelSegment {
            id: Some(id.to_string()),
            origin: self.place(from),
            destination: self.place(to),
            origin_terminal: None,
            destination_terminal: None,
            departing_at: format!("{date}T{depart_hour:02}:00:00"),
            arriving_at: format!("{date}T{:02}:{:02}:00", (arrive_total / 60) % 24, arrive_total % 60),
            marketing_carrier: DuffelCarrier {
                iata_code: Some(carrier.0.to_string()),
                name: Some(carrier.1.to_string()),
                logo_symbol_url: None,
            },
            marketing_carrier_flight_number: flight_number.to_string(),
            operating_carrier: Some(DuffelCarrier {
                iata_code: Some(carrier.0.to_string()),
                name: Some(carrier.1.to_string()),
                logo_symbol_url: None,
            }),
            aircraft: Some(mock_aircraft(duration_min)),
            stops: Vec::new(),
            duration: Some(iso_duration(duration_min)),
        }
    }

    fn slice(
        &self,
        offer_idx: usize,
        direction: &str,
        from: &str,
        to: &str,
        date: &str,
        one_stop: bool,
        carrier: (&str, &str),
        direct_min: u32,
    ) -> DuffelSlice {
        let depart_hour = 6 + (offer_idx as u32 % 14);
        let segments = if one_stop {
            // Route through a hub, splitting the flying time and adding
            // a 90 minute connection.
            let hub = if from == "CDG" || to == "CDG" { "FRA" } else { "CDG" };
            let first_min = direct_min / 2 + 30;
            let second_min = direct_min / 2 + 45;
            let second_depart = depart_hour + (first_min + 90) / 60;
            vec![
                self.segment(
                    &format!("seg_{direction}_{offer_idx}_1"),
                    from,
                    hub,
                    date,
                    depart_hour,
                    first_min,
                    carrier,
                    1000 + offer_idx as u32,
                ),
                self.segment(
                    &format!("seg_{direction}_{offer_idx}_2"),
                    hub,
                    to,
                    date,
                    second_depart,
                    second_min,
                    carrier,
                    2000 + offer_idx as u32,
                ),
            ]
        } else {
            vec![self.segment(
                &format!("seg_{direction}_{offer_idx}_1"),
                from,
                to,
                date,
                depart_hour,
                direct_min,
                carrier,
                3000 + offer_idx as u32,
            )]
        };

        let total_min = if one_stop { direct_min + 165 } else { direct_min };
        DuffelSlice {
            duration: Some(iso_duration(total_min)),
            origin: Some(self.place(from)),
            destination: Some(self.place(to)),
            segments,
        }
    }
}

#[async_trait]
impl SupplierClient for MockSupplier {
    async fn fetch_offers(
        &self,
        params: &OfferSearchParams,
    ) -> Result<Vec<DuffelOffer>, SupplierError> {
        let destination = params
            .destination
            .as_deref()
            .ok_or_else(|| SupplierError::Rejected("destination is required".to_string()))?;

        let seed = route_seed(&params.origin, destination);
        let distance_km = self
            .route_distance_km(&params.origin, destination)
            .unwrap_or(1200.0);
        // Rough flying time at 800 km/h plus taxi/climb margin.
        let direct_min = ((distance_km / 800.0) * 60.0) as u32 + 40;
        let round_trip = params.return_date.is_some();
        let passengers = params.passengers.max(1);

        let mut offers = Vec::with_capacity(self.max_offers);
        for i in 0..self.max_offers {
            let carrier = MOCK_CARRIERS[(seed as usize).wrapping_add(i) % MOCK_CARRIERS.len()];
            let one_stop = i % 3 == 2;

            // Base fare grows with distance; spread the set across
            // cheaper and dearer variants, with connections discounted.
            let base = 45.0 + distance_km * 0.11;
            let spread = 0.85 + 0.08 * ((seed.wrapping_add(i as u64 * 7) % 7) as f64);
            let discount = if one_stop { 0.82 } else { 1.0 };
            let price_per_pax = base * spread * discount;
            let total = price_per_pax * passengers as f64;

            let outbound = self.slice(
                i,
                "out",
                &params.origin,
                destination,
                &params.departure_date,
                one_stop,
                carrier,
                direct_min + (i as u32 % 4) * 10,
            );
            let mut slices = vec![outbound];
            if round_trip {
                let return_date = params.return_date.as_deref().unwrap_or(&params.departure_date);
                slices.push(self.slice(
                    i,
                    "in",
                    destination,
                    &params.origin,
                    return_date,
                    one_stop,
                    carrier,
                    direct_min + (i as u32 % 3) * 10,
                ));
            }

            // Supply an upstream emissions figure on alternating offers
            // so both the passthrough and the estimator paths stay live.
            let total_emissions_kg = if i % 2 == 0 {
                let legs = if round_trip { 2.0 } else { 1.0 };
                Some(format!("{:.1}", distance_km * legs * 0.18 * passengers as f64))
            } else {
                None
            };

            offers.push(DuffelOffer {
                id: format!("off_mock_{seed:08x}_{i:04}"),
                total_amount: format!("{total:.2}"),
                base_amount: Some(format!("{:.2}", total * 0.82)),
                total_currency: self.currency.clone(),
                total_emissions_kg,
                passengers: (0..passengers)
                    .map(|p| DuffelPassenger {
                        id: Some(format!("pas_{p}")),
                        passenger_type: Some("adult".to_string()),
                    })
                    .collect(),
                slices,
            });
        }

        Ok(offers)
    }
}

/// Stable per-route seed so repeated searches return identical sets.
fn route_seed(origin: &str, destination: &str) -> u64 {
    let mut seed: u64 = 0xcbf2_9ce4_8422_2325;
    for b in origin.bytes().chain(destination.bytes()) {
        seed ^= b as u64;
        seed = seed.wrapping_mul(0x0000_0100_0000_01b3);
    }
    seed
}

fn iso_duration(total_min: u32) -> String {
    let h = total_min / 60;
    let m = total_min % 60;
    if h == 0 {
        format!("PT{m}M")
    } else if m == 0 {
        format!("PT{h}H")
    } else {
        format!("PT{h}H{m}M")
    }
}

fn mock_aircraft(duration_min: u32) -> DuffelAircraft {
    // Narrow-body on short sectors, wide-body past ~4h.
    let code = if duration_min < 240 { "320" } else { "789" };
    DuffelAircraft {
        iata_code: Some(code.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(origin: &str, destination: &str, return_date: Option<&str>) -> OfferSearchParams {
        OfferSearchParams {
            origin: origin.to_string(),
            destination: Some(destination.to_string()),
            departure_date: "2025-08-01".to_string(),
            return_date: return_date.map(|d| d.to_string()),
            passengers: 2,
        }
    }

    fn supplier() -> MockSupplier {
        MockSupplier::new(Arc::new(AirportDirectory::bundled()), 8, "EUR".to_string())
    }

    #[tokio::test]
    async fn test_mock_is_deterministic_per_route() {
        let supplier = supplier();
        let first = supplier.fetch_offers(&params("MAD", "BCN", None)).await.unwrap();
        let second = supplier.fetch_offers(&params("MAD", "BCN", None)).await.unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].total_amount, second[0].total_amount);
    }

    #[tokio::test]
    async fn test_mock_round_trip_has_two_slices() {
        let supplier = supplier();
        let offers = supplier
            .fetch_offers(&params("MAD", "LHR", Some("2025-08-10")))
            .await
            .unwrap();
        assert!(offers.iter().all(|o| o.slices.len() == 2));
        assert_eq!(offers[0].passengers.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_mixes_direct_and_one_stop() {
        let supplier = supplier();
        let offers = supplier.fetch_offers(&params("MAD", "JFK", None)).await.unwrap();
        assert!(offers.iter().any(|o| o.slices[0].segments.len() == 1));
        assert!(offers.iter().any(|o| o.slices[0].segments.len() == 2));
    }

    #[tokio::test]
    async fn test_mock_rejects_missing_destination() {
        let supplier = supplier();
        let mut p = params("MAD", "BCN", None);
        p.destination = None;
        assert!(matches!(
            supplier.fetch_offers(&p).await,
            Err(SupplierError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_unknown_route_still_quotes() {
        let supplier = supplier();
        let offers = supplier.fetch_offers(&params("XXA", "XXB", None)).await.unwrap();
        assert_eq!(offers.len(), 8);
        // Falls back to the default distance, so prices stay sane.
        let total: f64 = offers[0].total_amount.parse().unwrap();
        assert!(total > 0.0);
    }
}
