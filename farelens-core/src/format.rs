//! Human-readable display helpers for durations and stop counts.

use crate::geo::parse_iso_duration_minutes;

/// Format total flight minutes, e.g. 155 -> "2h 35m".
pub fn format_minutes(total_minutes: u32) -> String {
    if total_minutes == 0 {
        return "—".to_string();
    }
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    if h == 0 {
        format!("{m}m")
    } else if m == 0 {
        format!("{h}h")
    } else {
        format!("{h}h {m}m")
    }
}

/// Format an ISO-8601 duration string, e.g. "PT2H35M" -> "2h 35m".
pub fn format_duration(iso_duration: &str) -> String {
    format_minutes(parse_iso_duration_minutes(iso_duration))
}

/// Format a stop count, e.g. 0 -> "Direct", 2 -> "2 stops".
pub fn format_stops(stops: u32) -> String {
    match stops {
        0 => "Direct".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(155), "2h 35m");
        assert_eq!(format_minutes(480), "8h");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(0), "—");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration("PT2H35M"), "2h 35m");
        assert_eq!(format_duration("bogus"), "—");
    }

    #[test]
    fn test_format_stops() {
        assert_eq!(format_stops(0), "Direct");
        assert_eq!(format_stops(1), "1 stop");
        assert_eq!(format_stops(3), "3 stops");
    }
}
