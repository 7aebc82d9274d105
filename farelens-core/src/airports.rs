use std::collections::HashMap;

use crate::model::{Airport, Coordinates};

/// One row of the bundled reference table.
struct AirportRecord {
    iata: &'static str,
    name: &'static str,
    city: &'static str,
    country: &'static str,
    lat: f64,
    lng: f64,
}

/// Static IATA-code -> airport lookup. Loaded once, read-only after.
///
/// A miss is a normal outcome (the bundled table covers major airports
/// only); callers synthesize a fallback record from whatever the
/// upstream payload carried.
pub struct AirportDirectory {
    by_iata: HashMap<&'static str, Airport>,
}

impl AirportDirectory {
    /// Build the directory from the bundled table.
    pub fn bundled() -> Self {
        let mut by_iata = HashMap::with_capacity(BUNDLED_AIRPORTS.len());
        for record in BUNDLED_AIRPORTS {
            by_iata.insert(
                record.iata,
                Airport {
                    iata: record.iata.to_string(),
                    name: record.name.to_string(),
                    city: record.city.to_string(),
                    country: record.country.to_string(),
                    coordinates: Some(Coordinates {
                        lat: record.lat,
                        lng: record.lng,
                    }),
                },
            );
        }
        Self { by_iata }
    }

    pub fn lookup(&self, iata_code: &str) -> Option<&Airport> {
        self.by_iata.get(iata_code)
    }

    pub fn len(&self) -> usize {
        self.by_iata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_iata.is_empty()
    }
}

const BUNDLED_AIRPORTS: &[AirportRecord] = &[
    AirportRecord { iata: "MAD", name: "Adolfo Suárez Madrid–Barajas", city: "Madrid", country: "Spain", lat: 40.4983, lng: -3.5676 },
    AirportRecord { iata: "BCN", name: "Josep Tarradellas Barcelona–El Prat", city: "Barcelona", country: "Spain", lat: 41.2974, lng: 2.0833 },
    AirportRecord { iata: "PMI", name: "Palma de Mallorca", city: "Palma", country: "Spain", lat: 39.5517, lng: 2.7388 },
    AirportRecord { iata: "AGP", name: "Málaga–Costa del Sol", city: "Málaga", country: "Spain", lat: 36.6749, lng: -4.4991 },
    AirportRecord { iata: "VLC", name: "Valencia", city: "Valencia", country: "Spain", lat: 39.4893, lng: -0.4816 },
    AirportRecord { iata: "SVQ", name: "Seville", city: "Seville", country: "Spain", lat: 37.4180, lng: -5.8931 },
    AirportRecord { iata: "LHR", name: "London Heathrow", city: "London", country: "United Kingdom", lat: 51.4700, lng: -0.4543 },
    AirportRecord { iata: "LGW", name: "London Gatwick", city: "London", country: "United Kingdom", lat: 51.1537, lng: -0.1821 },
    AirportRecord { iata: "MAN", name: "Manchester", city: "Manchester", country: "United Kingdom", lat: 53.3537, lng: -2.2750 },
    AirportRecord { iata: "EDI", name: "Edinburgh", city: "Edinburgh", country: "United Kingdom", lat: 55.9500, lng: -3.3725 },
    AirportRecord { iata: "CDG", name: "Paris Charles de Gaulle", city: "Paris", country: "France", lat: 49.0097, lng: 2.5479 },
    AirportRecord { iata: "ORY", name: "Paris Orly", city: "Paris", country: "France", lat: 48.7262, lng: 2.3652 },
    AirportRecord { iata: "NCE", name: "Nice Côte d'Azur", city: "Nice", country: "France", lat: 43.6584, lng: 7.2159 },
    AirportRecord { iata: "AMS", name: "Amsterdam Schiphol", city: "Amsterdam", country: "Netherlands", lat: 52.3105, lng: 4.7683 },
    AirportRecord { iata: "FRA", name: "Frankfurt", city: "Frankfurt", country: "Germany", lat: 50.0379, lng: 8.5622 },
    AirportRecord { iata: "MUC", name: "Munich", city: "Munich", country: "Germany", lat: 48.3538, lng: 11.7861 },
    AirportRecord { iata: "BER", name: "Berlin Brandenburg", city: "Berlin", country: "Germany", lat: 52.3667, lng: 13.5033 },
    AirportRecord { iata: "DUS", name: "Düsseldorf", city: "Düsseldorf", country: "Germany", lat: 51.2895, lng: 6.7668 },
    AirportRecord { iata: "HAM", name: "Hamburg", city: "Hamburg", country: "Germany", lat: 53.6304, lng: 9.9882 },
    AirportRecord { iata: "ZRH", name: "Zurich", city: "Zurich", country: "Switzerland", lat: 47.4647, lng: 8.5492 },
    AirportRecord { iata: "GVA", name: "Geneva", city: "Geneva", country: "Switzerland", lat: 46.2381, lng: 6.1089 },
    AirportRecord { iata: "VIE", name: "Vienna", city: "Vienna", country: "Austria", lat: 48.1103, lng: 16.5697 },
    AirportRecord { iata: "FCO", name: "Rome Fiumicino", city: "Rome", country: "Italy", lat: 41.8003, lng: 12.2389 },
    AirportRecord { iata: "MXP", name: "Milan Malpensa", city: "Milan", country: "Italy", lat: 45.6306, lng: 8.7281 },
    AirportRecord { iata: "LIS", name: "Humberto Delgado Lisbon", city: "Lisbon", country: "Portugal", lat: 38.7813, lng: -9.1359 },
    AirportRecord { iata: "OPO", name: "Francisco Sá Carneiro", city: "Porto", country: "Portugal", lat: 41.2481, lng: -8.6814 },
    AirportRecord { iata: "ATH", name: "Athens Eleftherios Venizelos", city: "Athens", country: "Greece", lat: 37.9364, lng: 23.9445 },
    AirportRecord { iata: "IST", name: "Istanbul", city: "Istanbul", country: "Türkiye", lat: 41.2753, lng: 28.7519 },
    AirportRecord { iata: "DUB", name: "Dublin", city: "Dublin", country: "Ireland", lat: 53.4264, lng: -6.2499 },
    AirportRecord { iata: "BRU", name: "Brussels", city: "Brussels", country: "Belgium", lat: 50.9014, lng: 4.4844 },
    AirportRecord { iata: "CPH", name: "Copenhagen Kastrup", city: "Copenhagen", country: "Denmark", lat: 55.6181, lng: 12.6561 },
    AirportRecord { iata: "OSL", name: "Oslo Gardermoen", city: "Oslo", country: "Norway", lat: 60.1976, lng: 11.1004 },
    AirportRecord { iata: "ARN", name: "Stockholm Arlanda", city: "Stockholm", country: "Sweden", lat: 59.6498, lng: 17.9239 },
    AirportRecord { iata: "HEL", name: "Helsinki-Vantaa", city: "Helsinki", country: "Finland", lat: 60.3183, lng: 24.9497 },
    AirportRecord { iata: "WAW", name: "Warsaw Chopin", city: "Warsaw", country: "Poland", lat: 52.1672, lng: 20.9679 },
    AirportRecord { iata: "PRG", name: "Václav Havel Prague", city: "Prague", country: "Czechia", lat: 50.1008, lng: 14.2600 },
    AirportRecord { iata: "JFK", name: "John F. Kennedy International", city: "New York", country: "United States", lat: 40.6413, lng: -73.7781 },
    AirportRecord { iata: "EWR", name: "Newark Liberty International", city: "Newark", country: "United States", lat: 40.6895, lng: -74.1745 },
    AirportRecord { iata: "BOS", name: "Boston Logan International", city: "Boston", country: "United States", lat: 42.3656, lng: -71.0096 },
    AirportRecord { iata: "IAD", name: "Washington Dulles International", city: "Washington", country: "United States", lat: 38.9531, lng: -77.4565 },
    AirportRecord { iata: "ATL", name: "Hartsfield–Jackson Atlanta International", city: "Atlanta", country: "United States", lat: 33.6407, lng: -84.4277 },
    AirportRecord { iata: "MIA", name: "Miami International", city: "Miami", country: "United States", lat: 25.7959, lng: -80.2870 },
    AirportRecord { iata: "ORD", name: "Chicago O'Hare International", city: "Chicago", country: "United States", lat: 41.9742, lng: -87.9073 },
    AirportRecord { iata: "DFW", name: "Dallas/Fort Worth International", city: "Dallas", country: "United States", lat: 32.8998, lng: -97.0403 },
    AirportRecord { iata: "LAX", name: "Los Angeles International", city: "Los Angeles", country: "United States", lat: 33.9416, lng: -118.4085 },
    AirportRecord { iata: "SFO", name: "San Francisco International", city: "San Francisco", country: "United States", lat: 37.6213, lng: -122.3790 },
    AirportRecord { iata: "SEA", name: "Seattle–Tacoma International", city: "Seattle", country: "United States", lat: 47.4502, lng: -122.3088 },
    AirportRecord { iata: "YYZ", name: "Toronto Pearson International", city: "Toronto", country: "Canada", lat: 43.6777, lng: -79.6248 },
    AirportRecord { iata: "YVR", name: "Vancouver International", city: "Vancouver", country: "Canada", lat: 49.1967, lng: -123.1815 },
    AirportRecord { iata: "MEX", name: "Mexico City International", city: "Mexico City", country: "Mexico", lat: 19.4363, lng: -99.0721 },
    AirportRecord { iata: "GRU", name: "São Paulo/Guarulhos International", city: "São Paulo", country: "Brazil", lat: -23.4356, lng: -46.4731 },
    AirportRecord { iata: "EZE", name: "Ministro Pistarini International", city: "Buenos Aires", country: "Argentina", lat: -34.8222, lng: -58.5358 },
    AirportRecord { iata: "BOG", name: "El Dorado International", city: "Bogotá", country: "Colombia", lat: 4.7016, lng: -74.1469 },
    AirportRecord { iata: "SCL", name: "Arturo Merino Benítez International", city: "Santiago", country: "Chile", lat: -33.3930, lng: -70.7858 },
    AirportRecord { iata: "LIM", name: "Jorge Chávez International", city: "Lima", country: "Peru", lat: -12.0219, lng: -77.1143 },
    AirportRecord { iata: "DXB", name: "Dubai International", city: "Dubai", country: "United Arab Emirates", lat: 25.2532, lng: 55.3657 },
    AirportRecord { iata: "AUH", name: "Zayed International", city: "Abu Dhabi", country: "United Arab Emirates", lat: 24.4330, lng: 54.6511 },
    AirportRecord { iata: "DOH", name: "Hamad International", city: "Doha", country: "Qatar", lat: 25.2731, lng: 51.6081 },
    AirportRecord { iata: "TLV", name: "Ben Gurion", city: "Tel Aviv", country: "Israel", lat: 32.0055, lng: 34.8854 },
    AirportRecord { iata: "CAI", name: "Cairo International", city: "Cairo", country: "Egypt", lat: 30.1219, lng: 31.4056 },
    AirportRecord { iata: "CMN", name: "Mohammed V International", city: "Casablanca", country: "Morocco", lat: 33.3675, lng: -7.5898 },
    AirportRecord { iata: "JNB", name: "O. R. Tambo International", city: "Johannesburg", country: "South Africa", lat: -26.1367, lng: 28.2411 },
    AirportRecord { iata: "CPT", name: "Cape Town International", city: "Cape Town", country: "South Africa", lat: -33.9715, lng: 18.6021 },
    AirportRecord { iata: "DEL", name: "Indira Gandhi International", city: "Delhi", country: "India", lat: 28.5562, lng: 77.1000 },
    AirportRecord { iata: "BOM", name: "Chhatrapati Shivaji Maharaj International", city: "Mumbai", country: "India", lat: 19.0896, lng: 72.8656 },
    AirportRecord { iata: "SIN", name: "Singapore Changi", city: "Singapore", country: "Singapore", lat: 1.3644, lng: 103.9915 },
    AirportRecord { iata: "BKK", name: "Suvarnabhumi", city: "Bangkok", country: "Thailand", lat: 13.6900, lng: 100.7501 },
    AirportRecord { iata: "KUL", name: "Kuala Lumpur International", city: "Kuala Lumpur", country: "Malaysia", lat: 2.7456, lng: 101.7072 },
    AirportRecord { iata: "HKG", name: "Hong Kong International", city: "Hong Kong", country: "Hong Kong", lat: 22.3080, lng: 113.9185 },
    AirportRecord { iata: "PEK", name: "Beijing Capital International", city: "Beijing", country: "China", lat: 40.0799, lng: 116.6031 },
    AirportRecord { iata: "PVG", name: "Shanghai Pudong International", city: "Shanghai", country: "China", lat: 31.1443, lng: 121.8083 },
    AirportRecord { iata: "NRT", name: "Narita International", city: "Tokyo", country: "Japan", lat: 35.7720, lng: 140.3929 },
    AirportRecord { iata: "HND", name: "Tokyo Haneda", city: "Tokyo", country: "Japan", lat: 35.5494, lng: 139.7798 },
    AirportRecord { iata: "ICN", name: "Incheon International", city: "Seoul", country: "South Korea", lat: 37.4602, lng: 126.4407 },
    AirportRecord { iata: "SYD", name: "Sydney Kingsford Smith", city: "Sydney", country: "Australia", lat: -33.9399, lng: 151.1753 },
    AirportRecord { iata: "MEL", name: "Melbourne", city: "Melbourne", country: "Australia", lat: -37.6690, lng: 144.8410 },
    AirportRecord { iata: "AKL", name: "Auckland", city: "Auckland", country: "New Zealand", lat: -37.0082, lng: 174.7850 },
];
