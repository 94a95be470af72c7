// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! How often a time of day occurs inside an instant period.
//!
//! An instant period may run for several days, so a wall-clock time such as
//! `07:00` can fall inside it on no day, on exactly one day, or on several.
//! A time period (`09:00–10:00`) occurs on a day when the whole of it fits
//! inside the instant period on that day.
//!
//! The count is computed in constant time from the projected boundaries:
//! every day strictly between the first and the last calendar day is fully
//! covered, so only the two edge days need to be checked.

use crate::period::Within;
use crate::{Bounded, Instant, Period};
use chrono::{Datelike, NaiveTime};

/// Number of calendar days on which a time of day occurs in a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recurrence {
    /// Never inside the period.
    Absent,
    /// Inside the period on exactly one day.
    Once,
    /// Inside the period on two or more days.
    Repeating,
}

impl Recurrence {
    fn from_count(days: i64) -> Self {
        match days {
            i64::MIN..=0 => Recurrence::Absent,
            1 => Recurrence::Once,
            _ => Recurrence::Repeating,
        }
    }

    /// `true` unless [`Recurrence::Absent`].
    #[inline]
    pub const fn occurs(self) -> bool {
        !matches!(self, Recurrence::Absent)
    }

    /// `true` only for [`Recurrence::Repeating`].
    #[inline]
    pub const fn repeats(self) -> bool {
        matches!(self, Recurrence::Repeating)
    }
}

impl Period<Instant> {
    /// Classifies how often `time` occurs within this period.
    ///
    /// `time` is a bare time of day or a time period; boundaries are
    /// inclusive and read on each instant's local wall clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use chronospan::{Instant, InstantPeriod, Recurrence};
    ///
    /// let at = |d, h| Instant::from_parts(
    ///     NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
    ///     NaiveTime::from_hms_opt(h, 0, 0).unwrap(),
    /// );
    /// let period = InstantPeriod::new(at(1, 8), at(3, 11)).unwrap();
    ///
    /// let seven = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
    /// assert_eq!(period.recurrence(&seven), Recurrence::Repeating);
    /// ```
    pub fn recurrence<B: Bounded<NaiveTime>>(&self, time: &B) -> Recurrence {
        let (from, to) = (time.lower(), time.upper());
        if from > to {
            return Recurrence::Absent;
        }

        let (start, end) = (self.start().local(), self.end().local());
        let first_day = start.date().num_days_from_ce() + i32::from(from < start.time());
        let last_day = end.date().num_days_from_ce() - i32::from(to > end.time());

        Recurrence::from_count(i64::from(last_day) - i64::from(first_day) + 1)
    }

    /// `true` when `time` occurs on more than one calendar day of this period.
    #[inline]
    pub fn time_repeats<B: Bounded<NaiveTime>>(&self, time: &B) -> bool {
        self.recurrence(time).repeats()
    }
}

impl Within<Period<Instant>> for NaiveTime {
    fn is_within(&self, period: &Period<Instant>) -> bool {
        period.recurrence(self).occurs()
    }
}

impl Within<Period<Instant>> for Period<NaiveTime> {
    fn is_within(&self, period: &Period<Instant>) -> bool {
        period.recurrence(self).occurs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InstantPeriod, TimePeriod};
    use chrono::NaiveDate;

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn at(day: u32, h: u32) -> Instant {
        Instant::from_parts(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), time(h))
    }

    fn tp(a: u32, b: u32) -> TimePeriod {
        TimePeriod::new(time(a), time(b)).unwrap()
    }

    /// 2024-01-01 08:00 to 2024-01-02 12:00.
    fn overnight() -> InstantPeriod {
        InstantPeriod::new(at(1, 8), at(2, 12)).unwrap()
    }

    /// 2024-01-01 08:00 to 2024-01-03 11:00.
    fn two_days() -> InstantPeriod {
        InstantPeriod::new(at(1, 8), at(3, 11)).unwrap()
    }

    #[test]
    fn test_nonrepeating_time() {
        let period = overnight();
        assert_eq!(period.recurrence(&time(7)), Recurrence::Once);
        assert_eq!(period.recurrence(&time(13)), Recurrence::Once);
        assert!(!period.time_repeats(&tp(7, 10)));
        assert!(!period.time_repeats(&tp(9, 13)));

        let period = two_days();
        assert!(!period.time_repeats(&tp(7, 12)));
    }

    #[test]
    fn test_repeating_time() {
        let period = overnight();
        assert!(period.time_repeats(&time(10)));
        assert!(period.time_repeats(&tp(9, 11)));

        let period = two_days();
        assert!(period.time_repeats(&time(7)));
        assert!(period.time_repeats(&tp(9, 10)));
        // Fits on the 2nd and on the 3rd.
        assert!(period.time_repeats(&tp(7, 10)));
    }

    #[test]
    fn test_absent_time_within_single_day() {
        let period = InstantPeriod::new(at(1, 8), at(1, 12)).unwrap();
        assert_eq!(period.recurrence(&time(7)), Recurrence::Absent);
        assert_eq!(period.recurrence(&time(12)), Recurrence::Once);
        assert_eq!(period.recurrence(&tp(11, 13)), Recurrence::Absent);
    }

    #[test]
    fn test_period_spanning_midnight_only() {
        let period = InstantPeriod::new(at(1, 22), at(2, 6)).unwrap();
        assert_eq!(period.recurrence(&time(23)), Recurrence::Once);
        assert_eq!(period.recurrence(&time(3)), Recurrence::Once);
        assert_eq!(period.recurrence(&time(12)), Recurrence::Absent);
        // A time period cannot wrap past midnight.
        assert_eq!(period.recurrence(&tp(21, 23)), Recurrence::Absent);
    }

    #[test]
    fn test_projected_instant_period_as_candidate() {
        let period = two_days();
        let candidate = InstantPeriod::new(at(20, 9), at(20, 10)).unwrap();
        assert_eq!(period.recurrence(&candidate), Recurrence::Repeating);

        let inverted = InstantPeriod::new(at(20, 22), at(21, 6)).unwrap();
        assert_eq!(period.recurrence(&inverted), Recurrence::Absent);
    }

    #[test]
    fn test_containment_uses_occurrence() {
        let period = overnight();
        assert!(period.contains(&time(7)));
        assert!(period.contains(&time(13)));
        assert!(period.contains(&tp(7, 11)));
        assert!(period.contains(&tp(9, 13)));

        let short = InstantPeriod::new(at(1, 8), at(1, 12)).unwrap();
        assert!(short.contains(&time(10)));
        assert!(short.contains(&tp(9, 11)));
        assert!(!short.contains(&time(13)));
    }
}
