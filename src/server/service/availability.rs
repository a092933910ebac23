//! Slot and conflict calculation for a single barber on a single day.
//!
//! Everything here is pure: callers load the barber's non-cancelled bookings for the day and
//! pass them in as [`TimeRange`]s.

use crate::server::model::schedule::{SchedulePolicy, TimeOfDay, TimeRange};

/// A candidate start time and whether a booking of the requested length fits there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub time: TimeOfDay,
    pub available: bool,
}

/// Returns the first booked interval that overlaps `candidate`, if any.
pub fn find_conflict<'a>(candidate: &TimeRange, booked: &'a [TimeRange]) -> Option<&'a TimeRange> {
    booked.iter().find(|existing| existing.overlaps(candidate))
}

/// Lists every candidate start of `policy` with its availability for a `duration` minute booking.
///
/// A start is available unless `[start, start + duration)` overlaps one of `booked`, or the
/// booking would run past midnight. Slots are returned in ascending order.
pub fn slots(policy: &SchedulePolicy, duration: u16, booked: &[TimeRange]) -> Vec<Slot> {
    policy
        .candidate_starts()
        .map(|time| {
            let available = TimeRange::starting_at(time, duration)
                .is_some_and(|candidate| find_conflict(&candidate, booked).is_none());

            Slot { time, available }
        })
        .collect()
}

/// Candidate starts of `policy`, all marked unavailable.
///
/// Used for dates that cannot take bookings at all.
pub fn closed_slots(policy: &SchedulePolicy) -> Vec<Slot> {
    policy
        .candidate_starts()
        .map(|time| Slot {
            time,
            available: false,
        })
        .collect()
}
