//! Linear progress interpolation and fixed-constant duration
//! decomposition.

use crate::item::{DisplayUnits, TimeUnit};

const SECONDS_IN_MINUTE: u64 = 60;
const SECONDS_IN_HOUR: u64 = 3_600;
const SECONDS_IN_DAY: u64 = 86_400;
const SECONDS_IN_WEEK: u64 = 7 * SECONDS_IN_DAY;
/// Average Gregorian month, 30.436875 days. Exact in seconds.
const SECONDS_IN_MONTH: u64 = 2_629_746;
/// Average Gregorian year, 365.2425 days. Exact in seconds.
const SECONDS_IN_YEAR: u64 = 31_556_952;

const fn unit_seconds(unit: TimeUnit) -> u64 {
    match unit {
        TimeUnit::Years => SECONDS_IN_YEAR,
        TimeUnit::Months => SECONDS_IN_MONTH,
        TimeUnit::Weeks => SECONDS_IN_WEEK,
        TimeUnit::Days => SECONDS_IN_DAY,
        TimeUnit::Hours => SECONDS_IN_HOUR,
        TimeUnit::Minutes => SECONDS_IN_MINUTE,
        TimeUnit::Seconds => 1,
    }
}

/// Linear progress between `start` and `end` at `now`, in percent.
/// All arguments are epoch milliseconds.
///
/// The branch order is load-bearing: instants before the window return
/// 0 and instants past the window return 100 before the interpolation
/// is ever evaluated, keeping a zero-length window away from the
/// division.
pub fn progress_percent(start: i64, end: i64, now: i64) -> f64 {
    if now < start {
        return 0.0;
    }
    if now > end {
        return 100.0;
    }
    let total = (end - start) as f64;
    let elapsed = (now - start) as f64;
    elapsed / total * 100.0
}

/// Breaks `duration_ms` into whole units, largest first.
///
/// Only units present in `units` are considered; whatever a skipped
/// unit would have consumed flows into the next enabled unit's
/// remainder. Units that come out to zero are omitted, except seconds,
/// which is kept whenever it is the only part that would remain.
pub fn decompose(duration_ms: u64, units: DisplayUnits) -> Vec<(TimeUnit, u64)> {
    let mut remaining = duration_ms / 1000;
    let mut parts = Vec::new();
    for unit in TimeUnit::ALL {
        if !units.allows(unit) {
            continue;
        }
        if unit == TimeUnit::Seconds {
            if remaining > 0 || parts.is_empty() {
                parts.push((TimeUnit::Seconds, remaining));
            }
            break;
        }
        let count = remaining / unit_seconds(unit);
        if count > 0 {
            parts.push((unit, count));
            remaining -= count * unit_seconds(unit);
        }
    }
    parts
}
