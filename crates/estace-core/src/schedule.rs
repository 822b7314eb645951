//! Opening-schedule vocabulary for facilities.
//!
//! The persistence API stores schedules as display strings
//! (`"Lunes a Viernes"`, `"08:00 - 20:00"`). [`DayRange`] and [`HourRange`]
//! own the formatting and the inverse split so a record loaded for editing
//! re-serialises to exactly the same text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("unknown day \"{0}\"")]
    UnknownDay(String),

    #[error("invalid hour \"{0}\": expected HH:00 between 00:00 and 23:00")]
    InvalidHour(String),

    #[error("malformed range \"{0}\"")]
    MalformedRange(String),
}

/// Days of the week in display order, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Lunes,
        Weekday::Martes,
        Weekday::Miercoles,
        Weekday::Jueves,
        Weekday::Viernes,
        Weekday::Sabado,
        Weekday::Domingo,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Lunes => "Lunes",
            Weekday::Martes => "Martes",
            Weekday::Miercoles => "Miércoles",
            Weekday::Jueves => "Jueves",
            Weekday::Viernes => "Viernes",
            Weekday::Sabado => "Sábado",
            Weekday::Domingo => "Domingo",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.label() == s)
            .ok_or_else(|| ScheduleError::UnknownDay(s.to_string()))
    }
}

/// A whole hour of the day, rendered as `"HH:00"`.
///
/// Ordering matches the lexicographic order of the rendered strings because
/// the hour is always zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidHour`] when `hour > 23`.
    pub fn new(hour: u8) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::InvalidHour(hour.to_string()));
        }
        Ok(Self(hour))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The 24 selectable values, `00:00` through `23:00`.
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..24).map(Hour)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for Hour {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidHour(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm != "00" || !hh.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour = hh.parse::<u8>().map_err(|_| invalid())?;
        Hour::new(hour).map_err(|_| invalid())
    }
}

/// Span of attended weekdays, e.g. `Lunes a Viernes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: Weekday,
    pub end: Weekday,
}

impl Default for DayRange {
    fn default() -> Self {
        Self {
            start: Weekday::Lunes,
            end: Weekday::Viernes,
        }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} a {}", self.start, self.end)
    }
}

impl FromStr for DayRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(" a ")
            .ok_or_else(|| ScheduleError::MalformedRange(s.to_string()))?;
        Ok(Self {
            start: start.trim().parse()?,
            end: end.trim().parse()?,
        })
    }
}

/// Opening and closing hour, e.g. `08:00 - 20:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub open: Hour,
    pub close: Hour,
}

impl HourRange {
    /// `08:00 - 20:00`, the default weekday schedule.
    pub const WEEKDAY_DEFAULT: HourRange = HourRange {
        open: Hour(8),
        close: Hour(20),
    };

    /// `09:00 - 13:00`, the default weekend schedule.
    pub const WEEKEND_DEFAULT: HourRange = HourRange {
        open: Hour(9),
        close: Hour(13),
    };

    #[must_use]
    pub fn new(open: Hour, close: Hour) -> Self {
        Self { open, close }
    }

    /// `true` when the facility opens strictly before it closes.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.open < self.close
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}

impl FromStr for HourRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (open, close) = s
            .split_once(" - ")
            .ok_or_else(|| ScheduleError::MalformedRange(s.to_string()))?;
        Ok(Self {
            open: open.trim().parse()?,
            close: close.trim().parse()?,
        })
    }
}
