/// Formats a playback position for display: MM:SS under an hour, zero-padded
/// HH:MM:SS from one hour up.
pub fn format_seconds(total: u32) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_seconds(0), "00:00");
    }

    #[test]
    fn test_under_a_minute() {
        assert_eq!(format_seconds(59), "00:59");
    }

    #[test]
    fn test_minutes_and_seconds_padded() {
        assert_eq!(format_seconds(61), "01:01");
        assert_eq!(format_seconds(600), "10:00");
    }

    #[test]
    fn test_hour_boundary_switches_format() {
        assert_eq!(format_seconds(3599), "59:59");
        assert_eq!(format_seconds(3600), "01:00:00");
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(format_seconds(3661), "01:01:01");
        assert_eq!(format_seconds(36061), "10:01:01");
    }
}
