use jiff::Timestamp;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub(crate) enum TimestampArgError {
    #[error("failed to parse seconds since unix epoch")]
    Epoch,
    #[error(transparent)]
    Temporal(#[from] jiff::Error),
}

/// An absolute instant argument: RFC 3339 (`2024-03-20T12:34:56Z`,
/// offsets allowed) or `@<seconds>` since the unix epoch.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct TimestampArg(pub(crate) Timestamp);

impl FromStr for TimestampArg {
    type Err = TimestampArgError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(seconds) = s.strip_prefix('@') {
            let seconds = i64::from_str(seconds).map_err(|_| TimestampArgError::Epoch)?;
            let at = Timestamp::from_second(seconds).map_err(|_| TimestampArgError::Epoch)?;
            Ok(Self(at))
        } else {
            Ok(Self(Timestamp::from_str(s)?))
        }
    }
}
