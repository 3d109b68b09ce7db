//! Display helpers for progress values.

/// Formats a distance in kilometers: whole meters below 1 km, else one decimal.
///
/// ```
/// use dannav::navigation::format_distance;
///
/// assert_eq!(format_distance(0.4567), "457m");
/// assert_eq!(format_distance(12.34), "12.3km");
/// ```
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km", distance_km)
    }
}

/// Formats a duration in seconds as `"<h>h <m>m"` or `"<m>m"`.
pub fn format_duration(duration_s: f64) -> String {
    let total = duration_s.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance_meters() {
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(0.02), "20m");
        assert_eq!(format_distance(0.9994), "999m");
    }

    #[test]
    fn test_format_distance_kilometers() {
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(5.2304), "5.2km");
        assert_eq!(format_distance(111.19), "111.2km");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0m");
        assert_eq!(format_duration(59.9), "0m");
        assert_eq!(format_duration(600.0), "10m");
        assert_eq!(format_duration(3600.0), "1h 0m");
        assert_eq!(format_duration(3600.0 + 25.0 * 60.0 + 7.0), "1h 25m");
        assert_eq!(format_duration(-5.0), "0m");
    }
}
