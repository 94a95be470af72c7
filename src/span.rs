// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Decomposition of an elapsed amount into calendar-like buckets.
//!
//! A [`Span`] breaks a whole number of seconds into years, months, weeks,
//! days, hours, minutes and seconds by cascading floor division with fixed
//! moduli:
//!
//! | Unit | Modulus |
//! |------|---------|
//! | second → minute | 60 |
//! | minute → hour | 60 |
//! | hour → day | 24 |
//! | day → week | 7 |
//! | week → month | 4 |
//! | month → year | 12 |
//!
//! These moduli are approximations.  A "month" is always four weeks and a
//! "year" is always 48 weeks.  Leap years, variable month lengths and
//! daylight-saving transitions are ignored.

use crate::{PeriodError, Temporal};
use qtty::{Day, Days, Seconds};
use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::Serialize;

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;
const DAYS_PER_WEEK: u64 = 7;
const WEEKS_PER_MONTH: u64 = 4;
const MONTHS_PER_YEAR: u64 = 12;

/// Bucketed breakdown of an elapsed amount.
///
/// Every bucket except `years` is strictly below the modulus of the next
/// larger unit.  The sub-second remainder is kept apart from the buckets and
/// never rendered.
///
/// # Examples
///
/// ```
/// use chronospan::Span;
///
/// let span = Span::from_seconds(90 * 60);
/// assert_eq!(span.hours(), 1);
/// assert_eq!(span.minutes(), 30);
/// assert_eq!(span.render(true), "PT1H30M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    years: u64,
    months: u64,
    weeks: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    subsec_nanos: u32,
}

impl Span {
    /// Decomposes `total_seconds` into buckets.
    pub const fn from_seconds(total_seconds: u64) -> Self {
        let mut minutes = total_seconds / SECONDS_PER_MINUTE;
        let seconds = total_seconds - minutes * SECONDS_PER_MINUTE;
        let mut hours = minutes / MINUTES_PER_HOUR;
        minutes -= hours * MINUTES_PER_HOUR;
        let mut days = hours / HOURS_PER_DAY;
        hours -= days * HOURS_PER_DAY;
        let mut weeks = days / DAYS_PER_WEEK;
        days -= weeks * DAYS_PER_WEEK;
        let mut months = weeks / WEEKS_PER_MONTH;
        weeks -= months * WEEKS_PER_MONTH;
        let years = months / MONTHS_PER_YEAR;
        months -= years * MONTHS_PER_YEAR;

        Self {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
            subsec_nanos: 0,
        }
    }

    /// Span of the elapsed amount between two values of the same kind.
    ///
    /// Fails with [`PeriodError::InvertedRange`] when `start > end`.
    pub fn between<K: Temporal>(start: K, end: K) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::inverted(&start, &end));
        }
        Ok(Self::of_ordered(start, end))
    }

    /// Caller guarantees `start <= end`.
    pub(crate) fn of_ordered<K: Temporal>(start: K, end: K) -> Self {
        let elapsed = end.elapsed_since(&start);
        Self {
            subsec_nanos: elapsed.subsec_nanos().unsigned_abs(),
            ..Self::from_seconds(u64::try_from(elapsed.num_seconds()).unwrap_or(0))
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Whole 48-week years; unbounded.
    #[inline]
    pub const fn years(&self) -> u64 {
        self.years
    }

    /// Four-week months, below 12.
    #[inline]
    pub const fn months(&self) -> u64 {
        self.months
    }

    /// Weeks, below 4.
    #[inline]
    pub const fn weeks(&self) -> u64 {
        self.weeks
    }

    /// Days, below 7.
    #[inline]
    pub const fn days(&self) -> u64 {
        self.days
    }

    /// Hours, below 24.
    #[inline]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    /// Minutes, below 60.
    #[inline]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Whole seconds, below 60.
    #[inline]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Remainder below one second, in nanoseconds.
    #[inline]
    pub const fn subsec_nanos(&self) -> u32 {
        self.subsec_nanos
    }

    /// Re-sums the buckets under the fixed moduli.
    pub const fn total_seconds(&self) -> u64 {
        let months = self.years * MONTHS_PER_YEAR + self.months;
        let weeks = months * WEEKS_PER_MONTH + self.weeks;
        let days = weeks * DAYS_PER_WEEK + self.days;
        let hours = days * HOURS_PER_DAY + self.hours;
        let minutes = hours * MINUTES_PER_HOUR + self.minutes;
        minutes * SECONDS_PER_MINUTE + self.seconds
    }

    /// Total length as a [`Seconds`] quantity.
    pub fn as_seconds(&self) -> Seconds {
        Seconds::new(self.total_seconds() as f64)
    }

    /// Total length as a [`Days`] quantity.
    pub fn as_days(&self) -> Days {
        self.as_seconds().to::<Day>()
    }

    /// `true` when every bucket is zero, ignoring the sub-second remainder.
    pub const fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    // ── rendering ─────────────────────────────────────────────────────

    /// Compact `P{Y}Y{M}M{W}W{D}DT{h}H{m}M{s}S` rendering.
    ///
    /// With `fold` set, zero buckets are omitted and the `T` separator only
    /// appears when a time bucket follows it; a zero span folds to `PT0S`.
    /// Without `fold`, every bucket is printed.
    pub fn render(&self, fold: bool) -> String {
        Rendered { span: self, fold }.to_string()
    }

    fn write_to<W: Write>(&self, out: &mut W, fold: bool) -> fmt::Result {
        let keep = |value: u64| !fold || value != 0;

        out.write_char('P')?;
        for (value, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if keep(value) {
                write!(out, "{value}{unit}")?;
            }
        }

        let time = [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')];
        if time.iter().any(|&(value, _)| keep(value)) {
            out.write_char('T')?;
            for (value, unit) in time {
                if keep(value) {
                    write!(out, "{value}{unit}")?;
                }
            }
        } else if self.is_zero() {
            out.write_str("T0S")?;
        }
        Ok(())
    }
}

/// A [`Span`] paired with its fold mode, for formatting.
struct Rendered<'a> {
    span: &'a Span,
    fold: bool,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.span.write_to(f, self.fold)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn span_resums_to_total(total in 0u64..=4_000_000_000) {
            prop_assert_eq!(Span::from_seconds(total).total_seconds(), total);
        }

        #[test]
        fn span_buckets_stay_below_moduli(total in 0u64..=4_000_000_000) {
            let span = Span::from_seconds(total);
            prop_assert!(span.seconds() < SECONDS_PER_MINUTE);
            prop_assert!(span.minutes() < MINUTES_PER_HOUR);
            prop_assert!(span.hours() < HOURS_PER_DAY);
            prop_assert!(span.days() < DAYS_PER_WEEK);
            prop_assert!(span.weeks() < WEEKS_PER_MONTH);
            prop_assert!(span.months() < MONTHS_PER_YEAR);
        }
    }
}
