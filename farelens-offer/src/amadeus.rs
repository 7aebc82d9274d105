//! Amadeus-shaped offer -> canonical `FlightOffer`.

use std::collections::HashMap;

use farelens_core::airports::AirportDirectory;
use farelens_core::emissions::EmissionEstimator;
use farelens_core::geo::parse_iso_duration_minutes;
use farelens_core::model::{FlightOffer, Segment, SegmentEndpoint, Slice};

use crate::mapper::{
    collect_airlines, parse_amount, resolve_airport, AirportFallback, MappingError, OfferMapper,
};
use crate::raw::{AmadeusDictionaries, AmadeusItinerary, AmadeusOffer, AmadeusSegment};

/// Amadeus offers reference carriers by code only; display names come
/// from the response's `dictionaries.carriers` block. The passenger
/// count is not in the offer either; it is implied by the search
/// request, so the caller supplies it.
pub struct AmadeusMapper<'a> {
    directory: &'a AirportDirectory,
    carriers: &'a HashMap<String, String>,
    passenger_count: u32,
}

impl<'a> AmadeusMapper<'a> {
    pub fn new(
        directory: &'a AirportDirectory,
        dictionaries: &'a AmadeusDictionaries,
        passenger_count: u32,
    ) -> Self {
        Self {
            directory,
            carriers: &dictionaries.carriers,
            passenger_count: passenger_count.max(1),
        }
    }

    fn carrier_name(&self, code: &str) -> String {
        self.carriers.get(code).cloned().unwrap_or_else(|| code.to_string())
    }

    fn map_segment(&self, seg: &AmadeusSegment) -> Segment {
        Segment {
            id: seg.id.clone().unwrap_or_default(),
            departure: SegmentEndpoint {
                iata_code: seg.departure.iata_code.clone(),
                terminal: seg.departure.terminal.clone(),
                at: seg.departure.at.clone(),
            },
            arrival: SegmentEndpoint {
                iata_code: seg.arrival.iata_code.clone(),
                terminal: seg.arrival.terminal.clone(),
                at: seg.arrival.at.clone(),
            },
            carrier_code: seg.carrier_code.clone(),
            carrier_name: self.carrier_name(&seg.carrier_code),
            // Amadeus has no hosted carrier assets.
            carrier_logo_url: None,
            operating_carrier: seg
                .operating
                .as_ref()
                .and_then(|o| o.carrier_code.clone())
                .unwrap_or_else(|| seg.carrier_code.clone()),
            flight_number: format!("{}{}", seg.carrier_code, seg.number),
            aircraft_code: seg
                .aircraft
                .as_ref()
                .and_then(|a| a.code.clone())
                .unwrap_or_default(),
            duration: seg.duration.clone().unwrap_or_default(),
            stops: seg.number_of_stops.unwrap_or(0),
        }
    }

    fn map_itinerary(&self, raw: &AmadeusItinerary) -> Slice {
        let segments: Vec<Segment> = raw.segments.iter().map(|s| self.map_segment(s)).collect();
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

impl OfferMapper for AmadeusMapper<'_> {
    type Raw = AmadeusOffer;

    fn map_offer(&self, raw: &AmadeusOffer) -> Result<FlightOffer, MappingError> {
        let outbound_raw =
            raw.itineraries.first().ok_or_else(|| MappingError::MissingOutbound {
                offer_id: raw.id.clone(),
            })?;
        let inbound_raw = raw.itineraries.get(1);

        let outbound = self.map_itinerary(outbound_raw);
        if outbound.segments.is_empty() {
            return Err(MappingError::EmptySegments {
                offer_id: raw.id.clone(),
            });
        }
        let inbound = inbound_raw.map(|i| self.map_itinerary(i));

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

        let passengers = self.passenger_count as f64;
        let total_price = parse_amount(&raw.id, &raw.price.total)?;
        let base_price = raw
            .price
            .base
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(total_price);

        // Amadeus carries no emissions figure; always estimate.
        let co2_kg = EmissionEstimator::new(self.directory).estimate(
            &origin_iata,
            &dest_iata,
            &outbound.segments,
            outbound.duration_min,
        );

        let total_duration_min =
            outbound.duration_min + inbound.as_ref().map_or(0, |s| s.duration_min);
        let stops = outbound.stops;
        let is_round_trip = inbound.is_some();

        Ok(FlightOffer {
            id: raw.id.clone(),
            origin: resolve_airport(self.directory, &origin_iata, AirportFallback::default()),
            destination: resolve_airport(self.directory, &dest_iata, AirportFallback::default()),
            price: total_price / passengers,
            price_base: base_price / passengers,
            currency: raw.price.currency.clone(),
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
