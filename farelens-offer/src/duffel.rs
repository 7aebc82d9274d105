//! Duffel-shaped offer -> canonical `FlightOffer`.

use farelens_core::airports::AirportDirectory;
use farelens_core::emissions::EmissionEstimator;
use farelens_core::geo::parse_iso_duration_minutes;
use farelens_core::model::{FlightOffer, Segment, SegmentEndpoint, Slice};

use crate::mapper::{
    collect_airlines, parse_amount, resolve_airport, AirportFallback, MappingError, OfferMapper,
};
use crate::raw::{DuffelOffer, DuffelPlace, DuffelSegment, DuffelSlice};

/// Duffel embeds carrier names and passenger lists inline, so unlike the
/// Amadeus variant this mapper needs no auxiliary dictionaries.
pub struct DuffelMapper<'a> {
    directory: &'a AirportDirectory,
}

impl<'a> DuffelMapper<'a> {
    pub fn new(directory: &'a AirportDirectory) -> Self {
        Self { directory }
    }

    fn map_slice(&self, raw: &DuffelSlice) -> Slice {
        let segments: Vec<Segment> = raw.segments.iter().map(map_segment).collect();
        let duration = raw.duration.clone().unwrap_or_default();
        let duration_min = parse_iso_duration_minutes(&duration);
        let stops = segments.len().saturating_sub(1) as u32;
        Slice {
            duration,
            duration_min,
            stops,
            segments,
        }
    }
}

impl OfferMapper for DuffelMapper<'_> {
    type Raw = DuffelOffer;

    fn map_offer(&self, raw: &DuffelOffer) -> Result<FlightOffer, MappingError> {
        let outbound_raw = raw.slices.first().ok_or_else(|| MappingError::MissingOutbound {
            offer_id: raw.id.clone(),
        })?;
        let inbound_raw = raw.slices.get(1);

        let outbound = self.map_slice(outbound_raw);
        if outbound.segments.is_empty() {
            return Err(MappingError::EmptySegments {
                offer_id: raw.id.clone(),
            });
        }
        let inbound = inbound_raw.map(|s| self.map_slice(s));

        let origin_iata = outbound.segments[0].departure.iata_code.clone();
        let dest_iata = outbound
            .segments
            .last()
            .map(|s| s.arrival.iata_code.clone())
            .unwrap_or_default();

        let carriers = collect_airlines(
            outbound
                .segments
                .iter()
                .chain(inbound.iter().flat_map(|s| s.segments.iter())),
        );

        let passenger_count = raw.passengers.len().max(1) as f64;
        let total_price = parse_amount(&raw.id, &raw.total_amount)?;
        let base_price = raw
            .base_amount
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(total_price);

        // Prefer the supplier's own emissions figure when it parses;
        // otherwise estimate from the outbound routing.
        let co2_kg = raw
            .total_emissions_kg
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .map(|total| (total / passenger_count).round() as u32)
            .unwrap_or_else(|| {
                EmissionEstimator::new(self.directory).estimate(
                    &origin_iata,
                    &dest_iata,
                    &outbound.segments,
                    outbound.duration_min,
                )
            });

        let total_duration_min =
            outbound.duration_min + inbound.as_ref().map_or(0, |s| s.duration_min);
        let stops = outbound.stops;
        let is_round_trip = inbound.is_some();

        Ok(FlightOffer {
            id: raw.id.clone(),
            origin: resolve_airport(
                self.directory,
                &origin_iata,
                place_fallback(outbound_raw.origin.as_ref()),
            ),
            destination: resolve_airport(
                self.directory,
                &dest_iata,
                place_fallback(outbound_raw.destination.as_ref()),
            ),
            price: total_price / passenger_count,
            price_base: base_price / passenger_count,
            currency: raw.total_currency.clone(),
            outbound,
            inbound,
            total_duration_min,
            stops,
            airlines: carriers.airlines,
            airline_names: carriers.airline_names,
            airline_logo_urls: carriers.airline_logo_urls,
            is_round_trip,
            deal_score: 0,
            co2_kg,
        })
    }
}

fn place_fallback(place: Option<&DuffelPlace>) -> AirportFallback {
    match place {
        Some(p) => AirportFallback {
            name: p.name.clone(),
            city: p.city_name.clone(),
            country: p.iata_country_code.clone(),
            lat: p.latitude,
            lng: p.longitude,
        },
        None => AirportFallback::default(),
    }
}

fn map_segment(seg: &DuffelSegment) -> Segment {
    let carrier = &seg.marketing_carrier;
    let carrier_code = carrier.iata_code.clone().unwrap_or_default();
    Segment {
        id: seg.id.clone().unwrap_or_default(),
        departure: SegmentEndpoint {
            iata_code: seg.origin.iata_code.clone().unwrap_or_default(),
            terminal: seg.origin_terminal.clone(),
            at: seg.departing_at.clone(),
        },
        arrival: SegmentEndpoint {
            iata_code: seg.destination.iata_code.clone().unwrap_or_default(),
            terminal: seg.destination_terminal.clone(),
            at: seg.arriving_at.clone(),
        },
        flight_number: format!("{carrier_code}{}", seg.marketing_carrier_flight_number),
        carrier_name: carrier.name.clone().unwrap_or_else(|| carrier_code.clone()),
        carrier_logo_url: carrier.logo_symbol_url.clone(),
        operating_carrier: seg
            .operating_carrier
            .as_ref()
            .and_then(|c| c.iata_code.clone())
            .unwrap_or_else(|| carrier_code.clone()),
        carrier_code,
        aircraft_code: seg
            .aircraft
            .as_ref()
            .and_then(|a| a.iata_code.clone())
            .unwrap_or_default(),
        duration: seg.duration.clone().unwrap_or_default(),
        stops: seg.stops.len() as u32,
    }
}
