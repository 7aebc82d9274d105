//! The `OfferMapper` seam and the shared normalization helpers both
//! concrete mappers use.

use farelens_core::airports::AirportDirectory;
use farelens_core::model::{Airport, Coordinates, FlightOffer, Segment};

/// Why one raw offer could not be mapped. The batch keeps going; these
/// are recorded, never surfaced as a blocking error.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("offer {offer_id}: no outbound itinerary")]
    MissingOutbound { offer_id: String },

    #[error("offer {offer_id}: outbound itinerary has no segments")]
    EmptySegments { offer_id: String },

    #[error("offer {offer_id}: unparseable amount {value:?}")]
    BadAmount { offer_id: String, value: String },
}

impl MappingError {
    pub fn offer_id(&self) -> &str {
        match self {
            MappingError::MissingOutbound { offer_id }
            | MappingError::EmptySegments { offer_id }
            | MappingError::BadAmount { offer_id, .. } => offer_id,
        }
    }
}

/// Maps one raw upstream offer into the canonical domain record.
///
/// There is one implementation per upstream shape; the caller picks the
/// variant for the supplier it queried. Shape is never sniffed from the
/// payload at runtime.
pub trait OfferMapper {
    type Raw;

    fn map_offer(&self, raw: &Self::Raw) -> Result<FlightOffer, MappingError>;
}

/// Distinct marketing carriers across an itinerary, first-seen order,
/// index-aligned code/name/logo vectors.
#[derive(Debug, Default)]
pub struct CarrierSet {
    pub airlines: Vec<String>,
    pub airline_names: Vec<String>,
    pub airline_logo_urls: Vec<Option<String>>,
}

pub(crate) fn collect_airlines<'a, I>(segments: I) -> CarrierSet
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mut set = CarrierSet::default();
    for segment in segments {
        if set.airlines.contains(&segment.carrier_code) {
            continue;
        }
        set.airlines.push(segment.carrier_code.clone());
        set.airline_names.push(segment.carrier_name.clone());
        set.airline_logo_urls.push(segment.carrier_logo_url.clone());
    }
    set
}

/// Fields a raw payload may carry about a location, used to synthesize
/// an `Airport` when the directory does not know the code.
#[derive(Debug, Default)]
pub struct AirportFallback {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Directory lookup with payload-derived fallback. A synthesized record
/// keeps `coordinates: None` unless the payload itself carried both
/// halves of the pair; downstream math degrades instead of erroring.
pub(crate) fn resolve_airport(
    directory: &AirportDirectory,
    iata_code: &str,
    fallback: AirportFallback,
) -> Airport {
    if let Some(airport) = directory.lookup(iata_code) {
        return airport.clone();
    }

    let coordinates = match (fallback.lat, fallback.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => None,
    };

    Airport {
        iata: iata_code.to_string(),
        name: fallback.name.unwrap_or_else(|| iata_code.to_string()),
        city: fallback.city.unwrap_or_else(|| iata_code.to_string()),
        country: fallback.country.unwrap_or_default(),
        coordinates,
    }
}

/// Parse a decimal money string the way the upstreams emit it.
pub(crate) fn parse_amount(offer_id: &str, value: &str) -> Result<f64, MappingError> {
    value.trim().parse::<f64>().map_err(|_| MappingError::BadAmount {
        offer_id: offer_id.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use farelens_core::model::SegmentEndpoint;

    fn segment(code: &str, name: &str) -> Segment {
        Segment {
            id: "seg".to_string(),
            departure: SegmentEndpoint {
                iata_code: "MAD".to_string(),
                terminal: None,
                at: String::new(),
            },
            arrival: SegmentEndpoint {
                iata_code: "BCN".to_string(),
                terminal: None,
                at: String::new(),
            },
            carrier_code: code.to_string(),
            carrier_name: name.to_string(),
            carrier_logo_url: None,
            operating_carrier: code.to_string(),
            flight_number: format!("{code}1"),
            aircraft_code: String::new(),
            duration: String::new(),
            stops: 0,
        }
    }

    #[test]
    fn test_collect_airlines_dedupes_first_seen() {
        let segments = vec![
            segment("IB", "Iberia"),
            segment("BA", "British Airways"),
            segment("IB", "Iberia"),
        ];
        let set = collect_airlines(&segments);
        assert_eq!(set.airlines, vec!["IB", "BA"]);
        assert_eq!(set.airline_names, vec!["Iberia", "British Airways"]);
        assert_eq!(set.airline_logo_urls.len(), 2);
    }

    #[test]
    fn test_resolve_airport_prefers_directory() {
        let directory = AirportDirectory::bundled();
        let airport = resolve_airport(&directory, "MAD", AirportFallback::default());
        assert_eq!(airport.city, "Madrid");
        assert!(airport.coordinates.is_some());
    }

    #[test]
    fn test_resolve_airport_synthesizes_on_miss() {
        let directory = AirportDirectory::bundled();
        let airport = resolve_airport(
            &directory,
            "XNA",
            AirportFallback {
                name: Some("Northwest Arkansas National".to_string()),
                city: Some("Fayetteville".to_string()),
                country: Some("US".to_string()),
                lat: None,
                lng: None,
            },
        );
        assert_eq!(airport.iata, "XNA");
        assert_eq!(airport.city, "Fayetteville");
        assert!(airport.coordinates.is_none());
    }

    #[test]
    fn test_resolve_airport_bare_miss_uses_code() {
        let directory = AirportDirectory::bundled();
        let airport = resolve_airport(&directory, "ZZZ", AirportFallback::default());
        assert_eq!(airport.name, "ZZZ");
        assert_eq!(airport.city, "ZZZ");
        assert_eq!(airport.country, "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("o1", "231.90").unwrap(), 231.90);
        assert!(parse_amount("o1", "abc").is_err());
    }
}
