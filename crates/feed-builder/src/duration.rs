//! Episode running time

use crate::error::{FeedError, FeedResult};
use std::fmt;
use std::str::FromStr;

/// Running time in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(u64);

impl Duration {
    /// Creates a duration from seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the duration in seconds
    pub fn as_seconds(&self) -> u64 {
        self.0
    }

    /// Formats as H:MM:SS (hours always shown, not zero-padded)
    pub fn as_hms(&self) -> String {
        let total_seconds = self.as_seconds();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    }

    /// Parses `H:MM:SS`, `M:SS` or a plain number of seconds
    pub fn parse(text: &str) -> FeedResult<Self> {
        let invalid = || FeedError::InvalidDuration(text.to_string());
        let parts: Vec<&str> = text.trim().split(':').collect();

        let numbers = parts
            .iter()
            .map(|part| part.parse::<u64>().map_err(|_| invalid()))
            .collect::<FeedResult<Vec<u64>>>()?;

        let seconds = match numbers.as_slice() {
            [seconds] => *seconds,
            [minutes, seconds] if *seconds < 60 => {
                minutes.saturating_mul(60).saturating_add(*seconds)
            }
            [hours, minutes, seconds] if *minutes < 60 && *seconds < 60 => {
                hours.saturating_mul(3600).saturating_add(minutes * 60 + seconds)
            }
            _ => return Err(invalid()),
        };

        Ok(Self::from_seconds(seconds))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hms())
    }
}

impl FromStr for Duration {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Sub-second parts are dropped
impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Self(d.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_seconds() {
        assert_eq!(Duration::from_seconds(3665).as_seconds(), 3665);
        assert_eq!(Duration::default().as_seconds(), 0);
    }

    #[test]
    fn test_duration_as_hms_with_hours() {
        assert_eq!(Duration::from_seconds(3665).as_hms(), "1:01:05");
    }

    #[test]
    fn test_duration_as_hms_without_hours() {
        assert_eq!(Duration::from_seconds(125).as_hms(), "0:02:05");
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(Duration::from_seconds(3665).to_string(), "1:01:05");
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(Duration::parse("1:01:05").unwrap().as_seconds(), 3665);
        assert_eq!(Duration::parse("02:05").unwrap().as_seconds(), 125);
        assert_eq!(Duration::parse("90").unwrap().as_seconds(), 90);
        assert_eq!(" 0:00:07 ".parse::<Duration>().unwrap().as_seconds(), 7);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "abc", "1:2:3:4", "1:60", "1:00:60", "-5", "1::2"] {
            assert!(
                matches!(Duration::parse(text), Err(FeedError::InvalidDuration(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_display_roundtrip() {
        let d = Duration::from_seconds(7322);
        assert_eq!(Duration::parse(&d.to_string()).unwrap(), d);
    }

    #[test]
    fn test_duration_from_std_duration() {
        let d: Duration = std::time::Duration::from_secs(42).into();
        assert_eq!(d.as_seconds(), 42);
    }

    #[test]
    fn test_std_duration_drops_fraction() {
        let d: Duration = std::time::Duration::from_millis(59_999).into();
        assert_eq!(d.as_hms(), "0:00:59");
    }

    #[test]
    fn test_std_duration_keeps_full_range() {
        let d: Duration = std::time::Duration::from_secs(u64::MAX).into();
        assert_eq!(d.as_seconds(), u64::MAX);
    }
}
