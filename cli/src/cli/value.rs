mod log_level;
mod timestamp;

pub(crate) use log_level::LogLevel;
pub(crate) use timestamp::TimestampArg;
