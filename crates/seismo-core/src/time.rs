//! Timestamp rendering for console and KML output

use chrono::{Local, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%d/%m/%Y | %H:%M";

/// Timezone used to render event times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Host timezone
    #[default]
    Local,
    Utc,
}

/// Render epoch milliseconds as `DD/MM/YYYY | HH:MM` in the chosen timezone
pub fn format_timestamp(time_ms: i64, format: TimeFormat) -> String {
    match format {
        TimeFormat::Local => format_timestamp_in(time_ms, &Local),
        TimeFormat::Utc => format_timestamp_in(time_ms, &Utc),
    }
}

/// Render epoch milliseconds in an arbitrary timezone.
///
/// Out-of-range values fall back to the raw millisecond count.
pub fn format_timestamp_in<Tz>(time_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(time_ms).single() {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => time_ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_epoch_in_utc() {
        assert_eq!(format_timestamp(0, TimeFormat::Utc), "01/01/1970 | 00:00");
    }

    #[test]
    fn test_zero_padding_and_24h_clock() {
        // 2024-03-05T21:07:59.999Z
        let ms = 1_709_672_879_999;
        assert_eq!(format_timestamp(ms, TimeFormat::Utc), "05/03/2024 | 21:07");
    }

    #[test]
    fn test_fixed_offset_shifts_wall_clock() {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(format_timestamp_in(0, &brt), "31/12/1969 | 21:00");
    }

    #[test]
    fn test_out_of_range_falls_back_to_raw() {
        assert_eq!(format_timestamp(i64::MAX, TimeFormat::Utc), i64::MAX.to_string());
    }

    #[test]
    fn test_local_has_display_shape() {
        let rendered = format_timestamp(1_709_672_879_999, TimeFormat::Local);
        assert_eq!(rendered.len(), "05/03/2024 | 21:07".len());
        assert_eq!(&rendered[10..13], " | ");
    }
}
