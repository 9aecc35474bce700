//! Human-readable duration phrases.
//!
//! Two deliberately different algorithms live here. [`format_duration`]
//! renders the fixed-constant decomposition from [`decompose`] honoring
//! a unit mask, while [`format_age`] reads true calendar fields off the
//! epoch. They drift apart over long spans (leap years, month lengths)
//! and must stay separate functions.

use crate::duration::decompose;
use crate::item::DisplayUnits;
use jiff::{Timestamp, tz::TimeZone};

fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Formats `ms` using only the units in `units`, largest first, e.g.
/// `"1 day, 2 hours, and 5 seconds"`.
///
/// Negative durations clamp to zero. When nothing survives the mask
/// the literal `"0 seconds"` comes back, even if the seconds unit
/// itself is masked off.
pub fn format_duration(ms: i64, units: DisplayUnits) -> String {
    let parts: Vec<String> = decompose(ms.max(0) as u64, units)
        .into_iter()
        .map(|(unit, count)| pluralize(count, unit.singular()))
        .collect();
    match parts.as_slice() {
        [] => "0 seconds".to_owned(),
        [single] => single.clone(),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Formats an elapsed duration as calendar-true years, months, days,
/// hours and minutes. All five parts are always present and there is
/// no "and": `"24 years, 5 months, 15 days, 0 hours, 3 minutes"`.
///
/// The duration is read as the instant `epoch + ms` and the UTC
/// calendar fields become the component counts, so leap years and
/// real month lengths are accounted for.
pub fn format_age(ms: i64) -> String {
    let at = Timestamp::from_millisecond(ms.max(0)).unwrap_or(Timestamp::MAX);
    let fields = at.to_zoned(TimeZone::UTC);
    [
        pluralize((fields.year() - 1970) as u64, "year"),
        pluralize(fields.month() as u64 - 1, "month"),
        pluralize(fields.day() as u64 - 1, "day"),
        pluralize(fields.hour() as u64, "hour"),
        pluralize(fields.minute() as u64, "minute"),
    ]
    .join(", ")
}

/// Percentage text at a fixed number of decimal places, e.g. `"42.5%"`.
/// Display-only; the underlying progress value is never rounded.
pub fn format_percent(percent: f64, decimal_places: u8) -> String {
    format!("{percent:.places$}%", places = decimal_places as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::DisplayUnits;

    #[test]
    fn zero_duration_is_zero_seconds() {
        assert_eq!(format_duration(0, DisplayUnits::all()), "0 seconds");
        assert_eq!(format_duration(-5_000, DisplayUnits::all()), "0 seconds");
    }

    #[test]
    fn oxford_join_and_pluralization() {
        assert_eq!(
            format_duration(90_061_000, DisplayUnits::all()),
            "1 day, 1 hour, 1 minute, and 1 second"
        );
        assert_eq!(format_duration(1_000, DisplayUnits::all()), "1 second");
        assert_eq!(
            format_duration(62_000, DisplayUnits::all()),
            "1 minute, and 2 seconds"
        );
        assert_eq!(format_duration(2_000, DisplayUnits::all()), "2 seconds");
    }

    // Masking seconds off while less than a minute remains leaves zero
    // parts, and the fallback text is emitted anyway. Intentional,
    // user-visible behavior; do not "fix".
    #[test]
    fn masked_seconds_still_falls_back_to_zero_seconds() {
        let units = DisplayUnits::all() - DisplayUnits::SECONDS;
        assert_eq!(format_duration(5_000, units), "0 seconds");
        assert_eq!(format_duration(0, DisplayUnits::empty()), "0 seconds");
    }

    #[test]
    fn age_always_emits_five_parts() {
        assert_eq!(
            format_age(0),
            "0 years, 0 months, 0 days, 0 hours, 0 minutes"
        );
        assert_eq!(
            format_age(-1),
            "0 years, 0 months, 0 days, 0 hours, 0 minutes"
        );
    }

    #[test]
    fn age_reads_calendar_fields() {
        let at: Timestamp = "1971-03-03T05:07:00Z".parse().unwrap();
        assert_eq!(
            format_age(at.as_millisecond()),
            "1 year, 2 months, 2 days, 5 hours, 7 minutes"
        );
    }

    #[test]
    fn age_diverges_from_fixed_constant_duration() {
        // four calendar years from the epoch include a leap day, so
        // the calendar algorithm reports exactly 4 years while the
        // fixed-constant one would not
        let at: Timestamp = "1974-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(
            format_age(at.as_millisecond()),
            "4 years, 0 months, 0 days, 0 hours, 0 minutes"
        );
    }

    #[test]
    fn percent_text_precision() {
        assert_eq!(format_percent(50.0, 0), "50%");
        assert_eq!(format_percent(42.5, 1), "42.5%");
        assert_eq!(format_percent(33.333333, 3), "33.333%");
    }
}
