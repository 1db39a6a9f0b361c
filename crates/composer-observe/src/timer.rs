use std::{fmt, str::FromStr, sync::OnceLock};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::LoggerError;

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Timezone of log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// Offset captured by [`init_local_offset`].
    Local,
}

impl LoggerTimeZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        }
    }

    fn offset(&self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => local_offset(),
        }
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl TryFrom<String> for LoggerTimeZone {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LoggerTimeZone> for String {
    fn from(tz: LoggerTimeZone) -> Self {
        tz.as_str().to_string()
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capture the local UTC offset.
///
/// Must run in `main()` before the tokio runtime starts: offset detection
/// fails once the process has more than one thread on most Unix platforms.
/// Falls back to UTC when detection fails.
pub fn init_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let _ = LOCAL_OFFSET.set(offset);
}

/// Offset captured by [`init_local_offset`], or UTC if it never ran.
pub fn local_offset() -> UtcOffset {
    LOCAL_OFFSET.get().copied().unwrap_or(UtcOffset::UTC)
}

/// RFC3339 timestamps in the configured timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3339Timer {
    tz: LoggerTimeZone,
}

impl Rfc3339Timer {
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self { tz }
    }

    pub fn timestamp(&self, at: OffsetDateTime) -> String {
        at.to_offset(self.tz.offset())
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for Rfc3339Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", self.timestamp(OffsetDateTime::now_utc()))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("UTC".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Utc);
        assert_eq!("Local".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Local);
        assert!("pst".parse::<LoggerTimeZone>().is_err());
    }

    #[test]
    fn utc_timer_formats_rfc3339() {
        let timer = Rfc3339Timer::new(LoggerTimeZone::Utc);
        let ts = timer.timestamp(datetime!(2024-03-01 12:30:05 UTC));
        assert_eq!(ts, "2024-03-01T12:30:05Z");
    }

    #[test]
    fn local_offset_is_bounded_after_init() {
        init_local_offset();
        assert!(local_offset().whole_hours().abs() <= 14);
    }
}
