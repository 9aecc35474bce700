//! Item snapshots: the two tracked item variants and the display
//! configuration payloads that parameterize evaluation and formatting.

use crate::error::ItemError;
use bitflags::bitflags;
use jiff::{Timestamp, tz::TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound for [`TimeBasedItem::decimal_places`].
pub const MAX_DECIMAL_PLACES: u8 = 10;

/// Units eligible to appear in a formatted duration, largest first.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Decomposition order: years down to seconds.
    pub const ALL: [Self; 7] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Unit noun without the plural "s".
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Years => "year",
            Self::Months => "month",
            Self::Weeks => "week",
            Self::Days => "day",
            Self::Hours => "hour",
            Self::Minutes => "minute",
            Self::Seconds => "second",
        }
    }

    const fn flag(self) -> DisplayUnits {
        match self {
            Self::Years => DisplayUnits::YEARS,
            Self::Months => DisplayUnits::MONTHS,
            Self::Weeks => DisplayUnits::WEEKS,
            Self::Days => DisplayUnits::DAYS,
            Self::Hours => DisplayUnits::HOURS,
            Self::Minutes => DisplayUnits::MINUTES,
            Self::Seconds => DisplayUnits::SECONDS,
        }
    }
}

bitflags! {
    /// Set of units allowed to appear in a formatted duration.
    ///
    /// The empty set is legal; formatting then collapses to the
    /// literal "0 seconds".
    #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
    pub struct DisplayUnits: u8 {
        const YEARS   = 1 << 0;
        const MONTHS  = 1 << 1;
        const WEEKS   = 1 << 2;
        const DAYS    = 1 << 3;
        const HOURS   = 1 << 4;
        const MINUTES = 1 << 5;
        const SECONDS = 1 << 6;
    }
}

impl DisplayUnits {
    /// Whether the mask lets `unit` appear in output.
    pub fn allows(self, unit: TimeUnit) -> bool {
        self.contains(unit.flag())
    }
}

impl Default for DisplayUnits {
    /// New items start with every unit enabled.
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<TimeUnit> for DisplayUnits {
    fn from_iter<I: IntoIterator<Item = TimeUnit>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |units, unit| units | unit.flag())
    }
}

// The snapshot wire shape is a unit-name list, not the raw bits.
impl Serialize for DisplayUnits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let units: Vec<TimeUnit> = TimeUnit::ALL
            .into_iter()
            .filter(|unit| self.allows(*unit))
            .collect();
        units.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DisplayUnits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<TimeUnit>::deserialize(deserializer)?
            .into_iter()
            .collect())
    }
}

/// Which auxiliary elements a consumer should render for an item.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    pub progress_bar: bool,
    pub start_time: bool,
    pub end_time: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            progress_bar: true,
            start_time: true,
            end_time: true,
        }
    }
}

/// Labels shown for each phase of a time-based item.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownMessages {
    pub pre_start: String,
    pub starting: String,
    pub countdown: String,
    pub completion: String,
    pub post_end: String,
}

impl Default for CountdownMessages {
    fn default() -> Self {
        Self {
            pre_start: "Time until start:".into(),
            starting: "Started".into(),
            countdown: "Time remaining:".into(),
            completion: "Completed".into(),
            post_end: "Time since completion:".into(),
        }
    }
}

/// An item that progresses from `start_time` toward `end_time`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBasedItem {
    pub id: String,
    pub title: String,
    /// Absolute instant. The display time zone never participates in
    /// duration or progress arithmetic.
    pub start_time: Timestamp,
    /// Absolute instant. No ordering against `start_time` is enforced;
    /// an end before the start yields degenerate but defined progress.
    pub end_time: Timestamp,
    /// IANA zone name, used only to render `start_time`/`end_time`.
    pub time_zone: String,
    #[serde(default)]
    pub display_options: DisplayOptions,
    #[serde(default)]
    pub display_units: DisplayUnits,
    #[serde(default)]
    pub countdown_messages: CountdownMessages,
    /// Freeze progress at completion instead of counting past it.
    #[serde(default)]
    pub stop_when_completed: bool,
    /// Precision of the percentage text, 0..=10. Display only.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u8,
}

fn default_decimal_places() -> u8 {
    1
}

impl TimeBasedItem {
    /// Resolves the display zone. Cannot fail for a validated item.
    pub fn display_zone(&self) -> Result<TimeZone, ItemError> {
        TimeZone::get(&self.time_zone)
            .map_err(|_| ItemError::UnknownTimeZone(self.time_zone.clone()))
    }
}

/// An item tracking open-ended elapsed time since `start_time`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeItem {
    pub id: String,
    pub title: String,
    pub start_time: Timestamp,
}

/// A tracked item, handed to the engine as an immutable snapshot.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Item {
    TimeBased(TimeBasedItem),
    Age(AgeItem),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Self::TimeBased(item) => &item.id,
            Self::Age(item) => &item.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::TimeBased(item) => &item.title,
            Self::Age(item) => &item.title,
        }
    }

    pub fn start_time(&self) -> Timestamp {
        match self {
            Self::TimeBased(item) => item.start_time,
            Self::Age(item) => item.start_time,
        }
    }

    /// Checks the bounds the engine assumes were enforced upstream.
    pub fn validate(&self) -> Result<(), ItemError> {
        if let Self::TimeBased(item) = self {
            if item.decimal_places > MAX_DECIMAL_PLACES {
                return Err(ItemError::DecimalPlaces(item.decimal_places));
            }
            item.display_zone()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(time_zone: &str, decimal_places: u8) -> Item {
        Item::TimeBased(TimeBasedItem {
            id: "timer-1".into(),
            title: "Launch".into(),
            start_time: "2024-06-14T00:00:00Z".parse().unwrap(),
            end_time: "2024-06-16T00:00:00Z".parse().unwrap(),
            time_zone: time_zone.into(),
            display_options: DisplayOptions::default(),
            display_units: DisplayUnits::default(),
            countdown_messages: CountdownMessages::default(),
            stop_when_completed: false,
            decimal_places,
        })
    }

    #[test]
    fn display_units_wire_shape_is_a_name_list() {
        let units = DisplayUnits::DAYS | DisplayUnits::SECONDS;
        assert_eq!(
            serde_json::to_string(&units).unwrap(),
            r#"["days","seconds"]"#
        );
        let parsed: DisplayUnits = serde_json::from_str(r#"["seconds","days"]"#).unwrap();
        assert_eq!(parsed, units);

        let empty: DisplayUnits = serde_json::from_str("[]").unwrap();
        assert_eq!(empty, DisplayUnits::empty());
    }

    #[test]
    fn item_tag_round_trip() {
        let item = timer("Asia/Tokyo", 2);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"time-based""#));
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);

        let age: Item = serde_json::from_str(
            r#"{"type":"age","id":"a","title":"Me","startTime":"2000-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(matches!(age, Item::Age(_)));
    }

    #[test]
    fn defaults_fill_missing_configuration() {
        let item: Item = serde_json::from_str(
            r#"{
                "type": "time-based",
                "id": "timer-1",
                "title": "Launch",
                "startTime": "2024-06-14T00:00:00Z",
                "endTime": "2024-06-16T00:00:00Z",
                "timeZone": "UTC"
            }"#,
        )
        .unwrap();
        let Item::TimeBased(item) = item else {
            panic!("expected a time-based item");
        };
        assert_eq!(item.display_units, DisplayUnits::all());
        assert!(item.display_options.progress_bar);
        assert_eq!(item.countdown_messages.countdown, "Time remaining:");
        assert!(!item.stop_when_completed);
        assert_eq!(item.decimal_places, 1);
    }

    #[test]
    fn validate_bounds() {
        assert_eq!(timer("UTC", 10).validate(), Ok(()));
        assert_eq!(
            timer("UTC", 11).validate(),
            Err(ItemError::DecimalPlaces(11))
        );
        assert_eq!(
            timer("Mars/Olympus", 1).validate(),
            Err(ItemError::UnknownTimeZone("Mars/Olympus".into()))
        );
    }
}
