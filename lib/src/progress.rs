//! Per-tick derivation of status, progress percentage and time details.

use crate::duration::progress_percent;
use crate::format::format_duration;
use crate::item::{Item, TimeBasedItem};
use jiff::{Timestamp, civil, tz::TimeZone};
use std::fmt::{Display, Formatter};

/// Phase of an item relative to the evaluation instant.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ItemStatus {
    Upcoming,
    InProgress,
    Completed,
}

impl Display for ItemStatus {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Upcoming => "Upcoming",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        })
    }
}

/// Millisecond distances from `now` to the item bounds, each clamped
/// to zero.
///
/// For age items the end bound defaults to `now` itself, so
/// `remaining` and `elapsed_since_end` are always zero there and
/// carry no meaning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TimeDetails {
    pub remaining: i64,
    pub elapsed: i64,
    pub until_start: i64,
    pub elapsed_since_end: i64,
}

/// Result of evaluating one item at one instant.
#[derive(Clone, PartialEq, Debug)]
pub struct TimeProgress {
    pub status: ItemStatus,
    /// 0 to 100. The interpolation itself answers 100 for anything
    /// past the end, so `stop_when_completed` only guards consumers
    /// that interpolate on their own.
    pub percent: f64,
    pub details: TimeDetails,
}

/// Derives status, progress and time details for `item` at `now`.
///
/// Pure and total: the same `(item, now)` always produces the same
/// snapshot, and no input reaches an error path. Malformed instants
/// are rejected at the ingestion boundary, never here.
pub fn evaluate(item: &Item, now: Timestamp) -> TimeProgress {
    let now_ms = now.as_millisecond();
    let start_ms = item.start_time().as_millisecond();
    match item {
        Item::TimeBased(item) => {
            let end_ms = item.end_time.as_millisecond();
            let status = if now_ms < start_ms {
                ItemStatus::Upcoming
            } else if now_ms >= end_ms {
                ItemStatus::Completed
            } else {
                ItemStatus::InProgress
            };
            let raw = progress_percent(start_ms, end_ms, now_ms);
            let percent = if item.stop_when_completed {
                raw.min(100.0)
            } else {
                raw
            };
            TimeProgress {
                status,
                percent,
                details: details(start_ms, end_ms, now_ms),
            }
        }
        Item::Age(_) => {
            let status = if now_ms < start_ms {
                ItemStatus::Upcoming
            } else {
                ItemStatus::InProgress
            };
            TimeProgress {
                status,
                percent: year_fraction_percent(now),
                details: details(start_ms, now_ms, now_ms),
            }
        }
    }
}

fn details(start: i64, end: i64, now: i64) -> TimeDetails {
    TimeDetails {
        remaining: (end - now).max(0),
        elapsed: (now - start).max(0),
        until_start: (start - now).max(0),
        elapsed_since_end: (now - end).max(0),
    }
}

/// Fraction of the current calendar year elapsed, as a percentage.
///
/// Decorative progress for age items, unrelated to their start time:
/// the window is Jan 1 00:00:00 through Dec 31 23:59:59 of now's
/// year. Computed against UTC so the result depends only on `now`.
fn year_fraction_percent(now: Timestamp) -> f64 {
    let year = now.to_zoned(TimeZone::UTC).year();
    let bounds = civil::date(year, 1, 1)
        .at(0, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .and_then(|start| {
            let end = civil::date(year, 12, 31)
                .at(23, 59, 59, 0)
                .to_zoned(TimeZone::UTC)?;
            Ok((start, end))
        });
    // UTC has no gaps, so the bounds always resolve.
    match bounds {
        Ok((start, end)) => progress_percent(
            start.timestamp().as_millisecond(),
            end.timestamp().as_millisecond(),
            now.as_millisecond(),
        ),
        Err(_) => 0.0,
    }
}

/// Phase label plus formatted duration for a time-based item,
/// mirroring what the item card renders under the bar.
pub fn status_message(item: &TimeBasedItem, progress: &TimeProgress) -> String {
    let messages = &item.countdown_messages;
    match progress.status {
        ItemStatus::Upcoming => format!(
            "{} {}",
            messages.pre_start,
            format_duration(progress.details.until_start, item.display_units)
        ),
        ItemStatus::InProgress => format!(
            "{} {}",
            messages.countdown,
            format_duration(progress.details.remaining, item.display_units)
        ),
        ItemStatus::Completed
            if !item.stop_when_completed && progress.details.elapsed_since_end > 0 =>
        {
            format!(
                "{} {}",
                messages.post_end,
                format_duration(progress.details.elapsed_since_end, item.display_units)
            )
        }
        ItemStatus::Completed => messages.completion.clone(),
    }
}
