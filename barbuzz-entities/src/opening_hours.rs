use std::{fmt, str::FromStr};

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;
use thiserror::Error;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive)]
pub enum Weekday {
    Sunday    = 0,
    Monday    = 1,
    Tuesday   = 2,
    Wednesday = 3,
    Thursday  = 4,
    Friday    = 5,
    Saturday  = 6,
}

impl Weekday {
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_u8(index)
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Time of day with minute precision, written as `HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourMinute {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HourMinuteParseError {
    #[error("Expected four digits 'HHMM' but got '{0}'")]
    Format(String),
    #[error("Time out of range: '{0}'")]
    Range(String),
}

impl HourMinute {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

impl FromStr for HourMinute {
    type Err = HourMinuteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HourMinuteParseError::Format(s.to_owned()));
        }
        let hour = s[..2]
            .parse()
            .map_err(|_| HourMinuteParseError::Format(s.to_owned()))?;
        let minute = s[2..]
            .parse()
            .map_err(|_| HourMinuteParseError::Format(s.to_owned()))?;
        Self::new(hour, minute).ok_or_else(|| HourMinuteParseError::Range(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTime {
    pub day: Weekday,
    pub time: HourMinute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningPeriod {
    pub open: DayTime,
    /// Absent for places that are always open
    pub close: Option<DayTime>,
}

/// Weekly opening periods in the order they were reported.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OpeningHours(Vec<OpeningPeriod>);

impl OpeningHours {
    pub fn periods(&self) -> &[OpeningPeriod] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_periods(self) -> Vec<OpeningPeriod> {
        self.0
    }
}

impl From<Vec<OpeningPeriod>> for OpeningHours {
    fn from(from: Vec<OpeningPeriod>) -> Self {
        Self(from)
    }
}

impl FromIterator<OpeningPeriod> for OpeningHours {
    fn from_iter<T: IntoIterator<Item = OpeningPeriod>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_from_index() {
        assert_eq!(Some(Weekday::Sunday), Weekday::from_index(0));
        assert_eq!(Some(Weekday::Saturday), Weekday::from_index(6));
        assert_eq!(None, Weekday::from_index(7));
        assert_eq!(5, Weekday::Friday.index());
    }

    #[test]
    fn parse_hour_minute() {
        let t: HourMinute = "0130".parse().unwrap();
        assert_eq!((1, 30), (t.hour(), t.minute()));
        assert_eq!("0130", t.to_string());
        assert_eq!(
            Err(HourMinuteParseError::Range("2460".into())),
            "2460".parse::<HourMinute>()
        );
        assert_eq!(
            Err(HourMinuteParseError::Format("9:30".into())),
            "9:30".parse::<HourMinute>()
        );
        assert!("+130".parse::<HourMinute>().is_err());
    }
}
