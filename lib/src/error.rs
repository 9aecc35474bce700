use crate::item::MAX_DECIMAL_PLACES;
use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Item snapshot rejected at the ingestion boundary.
///
/// The engine itself is total; anything that could make it misbehave
/// must be caught here, before an item is ever evaluated.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ItemError {
    /// `decimal_places` outside the supported range.
    DecimalPlaces(u8),
    /// `time_zone` is not a known IANA zone name.
    UnknownTimeZone(String),
}

impl Display for ItemError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecimalPlaces(n) => write!(
                f,
                "{n} decimal places exceeds the maximum of {MAX_DECIMAL_PLACES}"
            ),
            Self::UnknownTimeZone(name) => write!(f, "unknown time zone {name:?}"),
        }
    }
}

impl Error for ItemError {}
