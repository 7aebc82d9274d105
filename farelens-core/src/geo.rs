/// Mean earth radius used for great-circle math, in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two lat/lng points, in km (haversine).
pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Parse an ISO-8601 duration of the form `PT{h}H{m}M` (either component
/// optional) into total minutes.
///
/// Unparseable or empty input yields 0; this never fails. Designators
/// beyond minutes (seconds, days) are ignored, matching the upstream
/// payloads which only ever carry hours and minutes.
pub fn parse_iso_duration_minutes(iso: &str) -> u32 {
    let Some(rest) = iso.strip_prefix("PT") else {
        return 0;
    };

    let mut total: u32 = 0;
    let mut value: u32 = 0;
    let mut has_digits = false;

    for ch in rest.chars() {
        match ch {
            '0'..='9' => {
                value = value.saturating_mul(10).saturating_add(ch as u32 - '0' as u32);
                has_digits = true;
            }
            'H' if has_digits => {
                total = total.saturating_add(value.saturating_mul(60));
                value = 0;
                has_digits = false;
            }
            'M' if has_digits => {
                total = total.saturating_add(value);
                value = 0;
                has_digits = false;
            }
            // Unknown designator: keep what already parsed.
            _ => break,
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // Madrid to Barcelona is roughly 480 km.
        let km = haversine_distance_km(40.4983, -3.5676, 41.2974, 2.0833);
        assert!(km > 460.0 && km < 500.0, "got {km}");
    }

    #[test]
    fn test_haversine_symmetry() {
        let ab = haversine_distance_km(51.47, -0.4543, 40.6413, -73.7781);
        let ba = haversine_distance_km(40.6413, -73.7781, 51.47, -0.4543);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        assert_eq!(haversine_distance_km(48.1103, 16.5697, 48.1103, 16.5697), 0.0);
    }

    #[test]
    fn test_haversine_triangle_inequality() {
        // MAD -> LHR -> JFK is never shorter than MAD -> JFK.
        let mad_lhr = haversine_distance_km(40.4983, -3.5676, 51.47, -0.4543);
        let lhr_jfk = haversine_distance_km(51.47, -0.4543, 40.6413, -73.7781);
        let mad_jfk = haversine_distance_km(40.4983, -3.5676, 40.6413, -73.7781);
        assert!(mad_lhr + lhr_jfk >= mad_jfk);
    }

    #[test]
    fn test_parse_duration_hours_and_minutes() {
        assert_eq!(parse_iso_duration_minutes("PT2H35M"), 155);
    }

    #[test]
    fn test_parse_duration_hours_only() {
        assert_eq!(parse_iso_duration_minutes("PT8H"), 480);
    }

    #[test]
    fn test_parse_duration_minutes_only() {
        assert_eq!(parse_iso_duration_minutes("PT45M"), 45);
    }

    #[test]
    fn test_parse_duration_garbage_is_zero() {
        assert_eq!(parse_iso_duration_minutes(""), 0);
        assert_eq!(parse_iso_duration_minutes("2h35m"), 0);
        assert_eq!(parse_iso_duration_minutes("P1D"), 0);
    }

    #[test]
    fn test_parse_duration_trailing_seconds_ignored() {
        assert_eq!(parse_iso_duration_minutes("PT2H35M10S"), 155);
    }
}
