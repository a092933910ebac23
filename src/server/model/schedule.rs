//! Time-of-day arithmetic and shop opening rules.
//!
//! Times are kept as minutes since midnight so interval comparisons are plain integer
//! comparisons. They are rendered as zero-padded `HH:MM` strings at the API boundary.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// Number of minutes in a day; the exclusive upper bound for a booked interval's end.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when a string is not a valid `HH:MM` time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Time must use the HH:MM format (00:00 to 23:59)")]
pub struct ParseTimeError;

/// A time of day with minute precision.
///
/// Holds minutes since midnight in `0..=1440`. The value `1440` is only produced as the
/// end of an interval finishing exactly at midnight; parsing never yields it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time from minutes since midnight, `None` past the end of the day.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Builds a time from an hour and minute, `None` if either is out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self(hour * 60 + minute))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Adds `minutes`, returning `None` if the result passes midnight.
    pub fn checked_add(self, minutes: u16) -> Option<Self> {
        self.0.checked_add(minutes).and_then(Self::from_minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Parses a strict `HH:MM` string with exactly two digits on each side.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.split_once(':').ok_or(ParseTimeError)?;

        let two_digits = |part: &str| -> Result<u16, ParseTimeError> {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseTimeError);
            }
            part.parse().map_err(|_| ParseTimeError)
        };

        Self::from_hm(two_digits(hour)?, two_digits(minute)?).ok_or(ParseTimeError)
    }
}

/// Half-open interval `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Builds an interval, `None` unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Interval of `duration` minutes beginning at `start`.
    ///
    /// Returns `None` for a zero duration or when the interval would cross midnight.
    pub fn starting_at(start: TimeOfDay, duration: u16) -> Option<Self> {
        Self::new(start, start.checked_add(duration)?)
    }

    /// Rebuilds an interval from stored minute columns.
    pub fn from_stored(start_minute: i32, end_minute: i32) -> Option<Self> {
        let start = u16::try_from(start_minute).ok().and_then(TimeOfDay::from_minutes)?;
        let end = u16::try_from(end_minute).ok().and_then(TimeOfDay::from_minutes)?;
        Self::new(start, end)
    }

    /// Whether two intervals share at least one minute.
    ///
    /// Intervals that merely touch (one ends when the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        other.start < self.end && other.end > self.start
    }
}

/// Reason a calendar date cannot take bookings.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejection {
    #[error("Cannot book appointments on past dates")]
    Past,

    #[error("The barbershop is closed on {}", weekday_name(.0))]
    ClosedWeekday(Weekday),
}

fn weekday_name(day: &Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mondays",
        Weekday::Tue => "Tuesdays",
        Weekday::Wed => "Wednesdays",
        Weekday::Thu => "Thursdays",
        Weekday::Fri => "Fridays",
        Weekday::Sat => "Saturdays",
        Weekday::Sun => "Sundays",
    }
}

/// Opening hours and slot granularity for the shop.
///
/// The same window applies to every open day; `closed_weekday` takes no bookings at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePolicy {
    /// First bookable start time.
    pub open: TimeOfDay,
    /// Closing time; candidate starts are strictly before it.
    pub close: TimeOfDay,
    /// Distance in minutes between consecutive candidate starts.
    pub slot_minutes: u16,
    pub closed_weekday: Weekday,
}

impl Default for SchedulePolicy {
    /// 09:00 to 18:00 in 30 minute steps, closed on Sundays.
    fn default() -> Self {
        Self {
            open: TimeOfDay(9 * 60),
            close: TimeOfDay(18 * 60),
            slot_minutes: 30,
            closed_weekday: Weekday::Sun,
        }
    }
}

impl SchedulePolicy {
    /// Candidate start times from `open` (inclusive) to `close` (exclusive).
    pub fn candidate_starts(&self) -> impl Iterator<Item = TimeOfDay> + '_ {
        let step = usize::from(self.slot_minutes.max(1));

        (self.open.minutes()..self.close.minutes())
            .step_by(step)
            .map(TimeOfDay)
    }

    /// Whether `time` is one of [`Self::candidate_starts`].
    pub fn is_slot_start(&self, time: TimeOfDay) -> bool {
        let step = self.slot_minutes.max(1);

        time >= self.open
            && time < self.close
            && (time.minutes() - self.open.minutes()) % step == 0
    }

    /// Checks that `date` can take bookings when the current day is `today`.
    ///
    /// Today itself is bookable; only strictly earlier dates are rejected.
    pub fn check_date(&self, date: NaiveDate, today: NaiveDate) -> Result<(), DateRejection> {
        if date < today {
            return Err(DateRejection::Past);
        }

        if date.weekday() == self.closed_weekday {
            return Err(DateRejection::ClosedWeekday(self.closed_weekday));
        }

        Ok(())
    }
}
