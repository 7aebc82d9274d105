//! Per-passenger CO2 estimation for an itinerary.
//!
//! Simplified ICAO-method approximation: great-circle distance, a haul-
//! length emission factor, a Radiative Forcing Index for high-altitude
//! non-CO2 warming, and an infrastructure overhead. The contract is a
//! plausible relative comparison between offers, not metrological
//! accuracy.

use crate::airports::AirportDirectory;
use crate::geo::haversine_distance_km;
use crate::model::Segment;

/// kg CO2 per km per passenger, economy, under 1500 km.
pub const SHORT_HAUL_FACTOR: f64 = 0.255;
/// kg CO2 per km per passenger, economy, 1500 km and above.
pub const LONG_HAUL_FACTOR: f64 = 0.195;
/// Radiative Forcing Index.
pub const RFI: f64 = 1.9;
/// Airport/infrastructure overhead.
pub const OVERHEAD: f64 = 1.11;

/// Distance cutoff between the short- and long-haul factors, in km.
const HAUL_CUTOFF_KM: f64 = 1500.0;
/// Assumed average cruise speed for the duration fallback, in km/h.
const CRUISE_SPEED_KMH: f64 = 800.0;

pub struct EmissionEstimator<'a> {
    directory: &'a AirportDirectory,
}

impl<'a> EmissionEstimator<'a> {
    pub fn new(directory: &'a AirportDirectory) -> Self {
        Self { directory }
    }

    /// Estimate kg CO2 per passenger for one direction of travel.
    ///
    /// Multi-segment itineraries sum each leg's great-circle distance to
    /// approximate the routed distance; a single segment uses the direct
    /// origin-destination distance. When no leg's airports resolve to
    /// coordinates, distance falls back to `fallback_duration_min` at an
    /// assumed 800 km/h cruise. Returns 0 rather than failing.
    pub fn estimate(
        &self,
        origin_iata: &str,
        dest_iata: &str,
        segments: &[Segment],
        fallback_duration_min: u32,
    ) -> u32 {
        let mut total_km = 0.0;

        if segments.len() > 1 {
            for segment in segments {
                if let Some(km) =
                    self.leg_distance_km(&segment.departure.iata_code, &segment.arrival.iata_code)
                {
                    total_km += km;
                }
            }
        } else if let Some(km) = self.leg_distance_km(origin_iata, dest_iata) {
            total_km = km;
        }

        if total_km == 0.0 {
            total_km = (fallback_duration_min as f64 / 60.0) * CRUISE_SPEED_KMH;
            tracing::debug!(
                origin = origin_iata,
                dest = dest_iata,
                fallback_duration_min,
                "no resolvable coordinates, estimating distance from duration"
            );
        }

        let factor = if total_km < HAUL_CUTOFF_KM {
            SHORT_HAUL_FACTOR
        } else {
            LONG_HAUL_FACTOR
        };
        let co2 = total_km * factor * RFI * OVERHEAD;

        if co2.is_finite() && co2 > 0.0 {
            co2.round() as u32
        } else {
            0
        }
    }

    /// Distance of one leg, or None when either end lacks coordinates.
    fn leg_distance_km(&self, from_iata: &str, to_iata: &str) -> Option<f64> {
        let from = self.directory.lookup(from_iata)?.coordinates?;
        let to = self.directory.lookup(to_iata)?.coordinates?;
        Some(haversine_distance_km(from.lat, from.lng, to.lat, to.lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentEndpoint;

    fn segment(from: &str, to: &str) -> Segment {
        Segment {
            id: format!("{from}-{to}"),
            departure: SegmentEndpoint {
                iata_code: from.to_string(),
                terminal: None,
                at: "2025-08-01T09:55:00".to_string(),
            },
            arrival: SegmentEndpoint {
                iata_code: to.to_string(),
                terminal: None,
                at: "2025-08-01T12:10:00".to_string(),
            },
            carrier_code: "IB".to_string(),
            carrier_name: "Iberia".to_string(),
            carrier_logo_url: None,
            operating_carrier: "IB".to_string(),
            flight_number: "IB3167".to_string(),
            aircraft_code: "320".to_string(),
            duration: "PT2H15M".to_string(),
            stops: 0,
        }
    }

    #[test]
    fn test_single_segment_uses_direct_distance() {
        let directory = AirportDirectory::bundled();
        let estimator = EmissionEstimator::new(&directory);

        // MAD-BCN is ~483 km: short-haul factor applies.
        // 483 * 0.255 * 1.9 * 1.11 ≈ 260 kg
        let kg = estimator.estimate("MAD", "BCN", &[segment("MAD", "BCN")], 75);
        assert!(kg > 230 && kg < 290, "got {kg}");
    }

    #[test]
    fn test_multi_segment_sums_legs() {
        let directory = AirportDirectory::bundled();
        let estimator = EmissionEstimator::new(&directory);

        let direct = estimator.estimate("MAD", "JFK", &[segment("MAD", "JFK")], 0);
        let routed = estimator.estimate(
            "MAD",
            "JFK",
            &[segment("MAD", "LHR"), segment("LHR", "JFK")],
            0,
        );
        // Routing through London is longer than the great circle.
        assert!(routed > direct, "routed {routed} direct {direct}");
    }

    #[test]
    fn test_unknown_airports_fall_back_to_duration() {
        let directory = AirportDirectory::bundled();
        let estimator = EmissionEstimator::new(&directory);

        // 3h at 800 km/h = 2400 km, long-haul:
        // 2400 * 0.195 * 1.9 * 1.11 ≈ 987 kg
        let kg = estimator.estimate("ZZZ", "QQQ", &[segment("ZZZ", "QQQ")], 180);
        assert_eq!(kg, 987);
    }

    #[test]
    fn test_no_data_at_all_returns_zero() {
        let directory = AirportDirectory::bundled();
        let estimator = EmissionEstimator::new(&directory);
        assert_eq!(estimator.estimate("ZZZ", "QQQ", &[], 0), 0);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let directory = AirportDirectory::bundled();
        let estimator = EmissionEstimator::new(&directory);
        let first = estimator.estimate("LHR", "SIN", &[segment("LHR", "SIN")], 0);
        let second = estimator.estimate("LHR", "SIN", &[segment("LHR", "SIN")], 0);
        assert_eq!(first, second);
        assert!(first > 0);
    }
}
