// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Period implementation.
//!
//! This module provides:
//! - [`Period<K>`]: a validated `start <= end` interval over any [`Temporal`] kind
//! - [`Within`]: what may be tested for containment in a given period
//!
//! # Overlap vocabulary
//!
//! Of two partially overlapping periods, the one that begins earlier is the
//! *main* period.  The later one *overlaps with* the main period, and the
//! main period is *overlapped by* the later one:
//!
//! ```text
//!   main:   |===============|
//!   later:           |===============|
//!
//!   later.overlaps_with(main)  == true
//!   main.overlapped_by(later)  == true
//! ```
//!
//! Full containment is neither; use [`Period::contains`] for that case.

use crate::span::Span;
use crate::{Bounded, Instant, Linear, PeriodError, Temporal, TemporalKind};
use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use qtty::{Day, Days, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// An interval between two values of the same temporal kind.
///
/// Construction enforces `start <= end`; zero-length periods are allowed.
/// The [`Span`] of the period is computed once at construction.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronospan::DatePeriod;
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let first = DatePeriod::new(date(1), date(10)).unwrap();
/// let second = DatePeriod::new(date(9), date(30)).unwrap();
///
/// assert!(first.overlapped_by(&second));
/// assert!(second.overlaps_with(&first));
/// assert_eq!(
///     first.get_disconnect(&second),
///     Some(DatePeriod::new(date(1), date(9)).unwrap())
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Period<K: Temporal> {
    start: K,
    end: K,
    span: Span,
}

/// Values and periods that can be tested for containment in a `P`.
pub trait Within<P> {
    /// `true` when `self` lies inside `period`, boundaries included.
    fn is_within(&self, period: &P) -> bool;
}

/// `true` when `inner`'s bounds lie inside `outer`'s, boundaries included.
#[inline]
pub(crate) fn encloses<K: Temporal>(outer: &impl Bounded<K>, inner: &impl Bounded<K>) -> bool {
    outer.lower() <= inner.lower() && inner.upper() <= outer.upper()
}

impl<K: Temporal> Period<K> {
    /// Creates a new period between two values of the same kind.
    ///
    /// Fails with [`PeriodError::InvertedRange`] when `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveTime;
    /// use chronospan::{PeriodError, TimePeriod};
    ///
    /// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    /// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
    ///
    /// let workday = TimePeriod::new(eight, five).unwrap();
    /// assert_eq!(workday.span().hours(), 9);
    ///
    /// assert!(matches!(
    ///     TimePeriod::new(five, eight),
    ///     Err(PeriodError::InvertedRange { .. })
    /// ));
    /// ```
    pub fn new(start: K, end: K) -> Result<Self, PeriodError> {
        if start > end {
            debug!(
                "rejected inverted {}: {} > {}",
                K::KIND.period_name(),
                start,
                end
            );
            return Err(PeriodError::inverted(&start, &end));
        }
        trace!("new {} {}/{}", K::KIND.period_name(), start, end);
        Ok(Self::from_ordered(start, end))
    }

    /// Builds a period from bounds already known to be ordered.
    pub(crate) fn from_ordered(start: K, end: K) -> Self {
        debug_assert!(start <= end, "unordered bounds {start} > {end}");
        Self {
            start,
            end,
            span: Span::of_ordered(start, end),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Lower bound, included in the period.
    #[inline]
    pub fn start(&self) -> K {
        self.start
    }

    /// Upper bound, included in the period.
    #[inline]
    pub fn end(&self) -> K {
        self.end
    }

    /// Bucketed breakdown of the period's length.
    #[inline]
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Kind of both boundaries.
    #[inline]
    pub fn kind(&self) -> TemporalKind {
        K::KIND
    }

    /// Returns the duration of the period as the difference between end and start.
    pub fn duration(&self) -> TimeDelta {
        self.end.elapsed_since(&self.start)
    }

    /// Returns the duration in days, including any sub-second remainder.
    pub fn duration_days(&self) -> Days {
        let duration = self.duration();
        let seconds = match duration.num_nanoseconds() {
            Some(ns) => ns as f64 / 1e9,
            None => duration.num_seconds() as f64,
        };
        Seconds::new(seconds).to::<Day>()
    }

    // ── containment ───────────────────────────────────────────────────

    /// Tests whether `item` lies inside this period, boundaries included.
    ///
    /// `item` may be a bare value or a period, of this kind or of a kind
    /// that projects onto it.
    #[inline]
    pub fn contains<W: Within<Self>>(&self, item: &W) -> bool {
        item.is_within(self)
    }

    // ── ordering ──────────────────────────────────────────────────────

    /// `true` when this period ends strictly before `other` begins.
    #[inline]
    pub fn is_before<B: Bounded<K>>(&self, other: &B) -> bool {
        self.end < other.lower()
    }

    /// `true` when this period begins strictly after `other` ends.
    #[inline]
    pub fn is_after<B: Bounded<K>>(&self, other: &B) -> bool {
        self.start > other.upper()
    }

    // ── overlap ───────────────────────────────────────────────────────

    /// `true` when `other` is the main period and this one overlaps its tail:
    /// `other` begins strictly before this period and ends inside it, short
    /// of this period's end.
    ///
    /// Touching boundaries count as overlapping.
    pub fn overlaps_with<O: Temporal>(&self, other: &Period<O>) -> bool
    where
        Period<O>: Bounded<K>,
    {
        self.overlaps_bounds(other)
    }

    /// `true` when this is the main period and `other` overlaps its tail:
    /// `other` begins inside this period and ends strictly after it.
    ///
    /// Touching boundaries count as overlapping.
    pub fn overlapped_by<O: Temporal>(&self, other: &Period<O>) -> bool
    where
        Period<O>: Bounded<K>,
    {
        self.overlapped_by_bounds(other)
    }

    /// The intersection of two partially overlapping periods, or `None` when
    /// neither [`overlaps_with`](Self::overlaps_with) nor
    /// [`overlapped_by`](Self::overlapped_by) holds.
    ///
    /// The result is the same whichever period is the receiver.
    pub fn get_overlap<O: Temporal>(&self, other: &Period<O>) -> Option<Self>
    where
        Period<O>: Bounded<K>,
    {
        self.overlap_with_bounds(other)
    }

    /// The part of this period not covered by a partially overlapping
    /// `other`, or `None` when the periods are disjoint or one contains the
    /// other.
    ///
    /// The gap is relative to the receiver, so swapping the operands gives a
    /// different interval in general.
    pub fn get_disconnect<O: Temporal>(&self, other: &Period<O>) -> Option<Self>
    where
        Period<O>: Bounded<K>,
    {
        self.disconnect_from_bounds(other)
    }

    pub(crate) fn overlaps_bounds(&self, other: &impl Bounded<K>) -> bool {
        let (lower, upper) = (other.lower(), other.upper());
        lower < self.start && self.start <= upper && upper < self.end
    }

    pub(crate) fn overlapped_by_bounds(&self, other: &impl Bounded<K>) -> bool {
        let (lower, upper) = (other.lower(), other.upper());
        self.start < lower && lower <= self.end && self.end < upper
    }

    pub(crate) fn overlap_with_bounds(&self, other: &impl Bounded<K>) -> Option<Self> {
        if self.overlaps_bounds(other) {
            Some(Self::from_ordered(self.start, other.upper()))
        } else if self.overlapped_by_bounds(other) {
            Some(Self::from_ordered(other.lower(), self.end))
        } else {
            None
        }
    }

    pub(crate) fn disconnect_from_bounds(&self, other: &impl Bounded<K>) -> Option<Self> {
        if self.overlapped_by_bounds(other) {
            Some(Self::from_ordered(self.start, other.lower()))
        } else if self.overlaps_bounds(other) {
            Some(Self::from_ordered(other.upper(), self.end))
        } else {
            None
        }
    }
}

impl<K: Linear> Period<K> {
    /// The gap between this period and a reference lying wholly before or
    /// after it.
    ///
    /// - reference before `self`: `(reference end, self.start)`
    /// - reference after `self`: `(self.end, reference start)`
    ///
    /// Returns `None` when the reference touches or overlaps this period.
    /// Unlike [`get_disconnect`](Self::get_disconnect), which measures inside
    /// a partial overlap, this measures the space between unrelated spans.
    pub fn get_interim<B: Bounded<K>>(&self, reference: &B) -> Option<Self> {
        if self.is_after(reference) {
            Some(Self::from_ordered(reference.upper(), self.start))
        } else if self.is_before(reference) {
            Some(Self::from_ordered(self.end, reference.lower()))
        } else {
            None
        }
    }
}

impl Period<NaiveDate> {
    /// Joins this date range with a time of day, or with a time period, into
    /// an instant period.
    ///
    /// A single time is applied to both boundaries; a time period contributes
    /// its start to the combined start and its end to the combined end.
    /// Fails when the result would be inverted, which can only happen for a
    /// projected multi-day instant period on a single-day date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use chronospan::{DatePeriod, Instant, InstantPeriod};
    ///
    /// let d10 = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let d20 = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    /// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    ///
    /// let combined = DatePeriod::new(d10, d20).unwrap().combine(&eight).unwrap();
    /// let expected = InstantPeriod::new(
    ///     Instant::from_parts(d10, eight),
    ///     Instant::from_parts(d20, eight),
    /// )
    /// .unwrap();
    /// assert_eq!(combined, expected);
    /// ```
    pub fn combine<B: Bounded<NaiveTime>>(&self, time: &B) -> Result<Period<Instant>, PeriodError> {
        Period::new(
            Instant::from_parts(self.start, time.lower()),
            Instant::from_parts(self.end, time.upper()),
        )
    }

    /// Like [`combine`](Self::combine), pinning both boundaries to `offset`.
    pub fn combine_with_offset<B: Bounded<NaiveTime>>(
        &self,
        time: &B,
        offset: FixedOffset,
    ) -> Result<Period<Instant>, PeriodError> {
        Period::new(
            Instant::with_offset(self.start.and_time(time.lower()), offset),
            Instant::with_offset(self.end.and_time(time.upper()), offset),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Containment
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! impl_within_by_bounds {
    ($kind:ty: $($item:ty),+ $(,)?) => {
        $(
            impl Within<Period<$kind>> for $item {
                #[inline]
                fn is_within(&self, period: &Period<$kind>) -> bool {
                    encloses::<$kind>(period, self)
                }
            }
        )+
    };
}

impl_within_by_bounds!(NaiveTime: NaiveTime, Instant, Period<NaiveTime>, Period<Instant>);
impl_within_by_bounds!(NaiveDate: NaiveDate, Instant, Period<NaiveDate>, Period<Instant>);
impl_within_by_bounds!(Instant: Instant, Period<Instant>);

// An instant period covers a date when the date falls between its projected
// start and end dates.
impl Within<Period<Instant>> for NaiveDate {
    fn is_within(&self, period: &Period<Instant>) -> bool {
        encloses::<NaiveDate>(period, self)
    }
}

impl Within<Period<Instant>> for Period<NaiveDate> {
    fn is_within(&self, period: &Period<Instant>) -> bool {
        encloses::<NaiveDate>(period, self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Equality
// ═══════════════════════════════════════════════════════════════════════════

impl<K: Temporal> PartialEq for Period<K> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<K: Temporal> Eq for Period<K> {}

// Time and date periods compare against the matching projection of an
// instant period, in both directions.
macro_rules! impl_projected_eq {
    ($($kind:ty),+) => {
        $(
            impl PartialEq<Period<Instant>> for Period<$kind> {
                fn eq(&self, other: &Period<Instant>) -> bool {
                    self.start == Bounded::<$kind>::lower(other)
                        && self.end == Bounded::<$kind>::upper(other)
                }
            }

            impl PartialEq<Period<$kind>> for Period<Instant> {
                fn eq(&self, other: &Period<$kind>) -> bool {
                    other == self
                }
            }
        )+
    };
}

impl_projected_eq!(NaiveTime, NaiveDate);

// ═══════════════════════════════════════════════════════════════════════════
// Formatting
// ═══════════════════════════════════════════════════════════════════════════

impl<K: Temporal> fmt::Display for Period<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl<K: Temporal> fmt::Debug for Period<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::KIND.period_name())
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
impl<K: Temporal + Serialize> Serialize for Period<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

// Deserialisation re-validates the ordering of the bounds.
#[cfg(feature = "serde")]
impl<'de, K: Temporal + Deserialize<'de>> Deserialize<'de> for Period<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        struct Raw<K> {
            start: K,
            end: K,
        }

        let raw = Raw::<K>::deserialize(deserializer)?;
        Period::new(raw.start, raw.end).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatePeriod, InstantPeriod, TimePeriod};

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn instant(m: u32, d: u32, h: u32) -> Instant {
        Instant::from_parts(date(m, d), time(h, 0))
    }

    fn tp(a: (u32, u32), b: (u32, u32)) -> TimePeriod {
        TimePeriod::new(time(a.0, a.1), time(b.0, b.1)).unwrap()
    }

    fn dp(a: u32, b: u32) -> DatePeriod {
        DatePeriod::new(date(1, a), date(1, b)).unwrap()
    }

    fn ip(a: (u32, u32), b: (u32, u32)) -> InstantPeriod {
        InstantPeriod::new(instant(1, a.0, a.1), instant(1, b.0, b.1)).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────

    #[test]
    fn test_period_creation() {
        let period = dp(1, 1);
        assert_eq!(period.start(), date(1, 1));
        assert_eq!(period.end(), date(1, 1));
        assert!(period.span().is_zero());
        assert_eq!(period.kind(), TemporalKind::Date);
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let err = TimePeriod::new(time(14, 0), time(13, 0)).unwrap_err();
        assert_eq!(
            err,
            PeriodError::InvertedRange {
                start: "14:00:00".into(),
                end: "13:00:00".into(),
            }
        );
        assert!(DatePeriod::new(date(1, 2), date(1, 1)).is_err());
        assert!(InstantPeriod::new(instant(1, 1, 9), instant(1, 1, 8)).is_err());
    }

    #[test]
    fn test_same_moment_at_different_offsets_bounds_a_zero_length_period() {
        let london = Instant::with_offset(
            date(1, 1).and_time(time(8, 0)),
            FixedOffset::east_opt(0).unwrap(),
        );
        let paris = Instant::with_offset(
            date(1, 1).and_time(time(9, 0)),
            FixedOffset::east_opt(3600).unwrap(),
        );

        for (start, end) in [(london, paris), (paris, london)] {
            let period = InstantPeriod::new(start, end).unwrap();
            assert!(period.span().is_zero());
            assert_eq!(period.span().render(true), "PT0S");
        }

        let point = InstantPeriod::new(london, london).unwrap();
        assert!(!point.is_before(&paris));
        assert!(!point.is_after(&paris));
        assert!(point.contains(&paris));
    }

    #[test]
    fn test_span_is_derived_at_construction() {
        let period = tp((8, 0), (9, 30));
        assert_eq!(period.span().render(true), "PT1H30M");

        let period = ip((1, 8), (3, 11));
        assert_eq!((period.span().days(), period.span().hours()), (2, 3));
    }

    #[test]
    fn test_duration() {
        let period = ip((1, 0), (2, 12));
        assert_eq!(period.duration(), TimeDelta::hours(36));
        assert!((period.duration_days() - Days::new(1.5)).value().abs() < 1e-12);
    }

    // ── equality ──────────────────────────────────────────────────────

    #[test]
    fn test_same_kind_equality() {
        assert_eq!(dp(1, 30), dp(1, 30));
        assert_ne!(dp(1, 30), dp(1, 10));
        assert_eq!(tp((8, 0), (12, 0)), tp((8, 0), (12, 0)));
    }

    #[test]
    fn test_time_period_equals_projected_instant_period() {
        let instants = ip((1, 8), (1, 12));
        assert_eq!(tp((8, 0), (12, 0)), instants);
        assert_eq!(instants, tp((8, 0), (12, 0)));
        assert_ne!(tp((8, 0), (13, 0)), instants);
    }

    #[test]
    fn test_date_period_equals_projected_instant_period() {
        let instants = InstantPeriod::new(instant(1, 1, 8), instant(1, 30, 10)).unwrap();
        assert_eq!(dp(1, 30), instants);
        assert_eq!(instants, dp(1, 30));
        assert_ne!(dp(1, 10), instants);
    }

    // ── containment ───────────────────────────────────────────────────

    #[test]
    fn test_time_period_containment() {
        let workday = tp((8, 0), (17, 0));
        assert!(workday.contains(&tp((12, 0), (13, 0))));
        assert!(workday.contains(&workday));
        assert!(workday.contains(&time(8, 0)));
        assert!(workday.contains(&time(17, 0)));
        assert!(!workday.contains(&time(7, 59)));
        assert!(workday.contains(&instant(3, 4, 9)));
        assert!(workday.contains(&ip((2, 9), (2, 10))));
        assert!(!workday.contains(&tp((16, 0), (18, 0))));
    }

    #[test]
    fn test_date_period_containment() {
        let january = dp(1, 30);
        assert!(january.contains(&date(1, 15)));
        assert!(january.contains(&dp(5, 10)));
        assert!(january.contains(&dp(1, 30)));
        assert!(january.contains(&instant(1, 1, 10)));
        assert!(january.contains(&ip((1, 8), (2, 9))));
        assert!(!january.contains(&date(2, 1)));
    }

    #[test]
    fn test_instant_period_containment_of_instants_and_dates() {
        let period = ip((1, 8), (2, 12));
        assert!(period.contains(&instant(1, 2, 12)));
        assert!(!period.contains(&instant(1, 2, 13)));
        assert!(period.contains(&ip((1, 9), (1, 11))));
        assert!(period.contains(&date(1, 2)));
        assert!(period.contains(&dp(1, 2)));
        assert!(!period.contains(&dp(1, 3)));
    }

    // ── ordering ──────────────────────────────────────────────────────

    #[test]
    fn test_before_and_after_are_strict() {
        let first = dp(1, 10);
        let later = dp(15, 30);
        let touching = dp(10, 12);

        assert!(first.is_before(&later));
        assert!(later.is_after(&first));
        assert!(!first.is_before(&touching));
        assert!(!touching.is_after(&first));
        assert!(first.is_before(&date(1, 11)));
        assert!(!first.is_before(&date(1, 10)));
        assert!(later.is_after(&instant(1, 14, 23)));
    }

    // ── overlap ───────────────────────────────────────────────────────

    #[test]
    fn test_overlap_predicates_are_asymmetric() {
        let first = dp(1, 10);
        let second = dp(9, 30);

        assert!(first.overlapped_by(&second));
        assert!(second.overlaps_with(&first));
        assert!(!first.overlaps_with(&second));
        assert!(!second.overlapped_by(&first));
    }

    #[test]
    fn test_overlap_predicates_exclude_containment_and_disjoint() {
        let outer = dp(1, 30);
        let inner = dp(5, 10);
        assert!(!outer.overlaps_with(&inner));
        assert!(!outer.overlapped_by(&inner));
        assert!(!inner.overlaps_with(&outer));
        assert!(!inner.overlapped_by(&outer));

        let disjoint = dp(15, 30);
        assert!(!dp(1, 10).overlapped_by(&disjoint));
        assert!(!disjoint.overlaps_with(&dp(1, 10)));
    }

    #[test]
    fn test_get_overlap_is_observer_independent() {
        let first = tp((8, 0), (12, 0));
        let second = tp((10, 0), (13, 0));
        let expected = tp((10, 0), (12, 0));

        assert_eq!(first.get_overlap(&second), Some(expected));
        assert_eq!(second.get_overlap(&first), Some(expected));
        assert_eq!(first.get_overlap(&tp((13, 0), (14, 0))), None);
    }

    #[test]
    fn test_touching_periods_overlap_on_a_single_point() {
        let first = dp(1, 10);
        let second = dp(10, 20);
        assert!(first.overlapped_by(&second));
        assert_eq!(first.get_overlap(&second), Some(dp(10, 10)));
    }

    #[test]
    fn test_time_period_overlap_with_instant_period() {
        let morning = tp((8, 0), (12, 0));
        let meeting = ip((3, 10), (3, 13));
        assert!(morning.overlapped_by(&meeting));
        assert_eq!(morning.get_overlap(&meeting), Some(tp((10, 0), (12, 0))));
    }

    // ── gaps ──────────────────────────────────────────────────────────

    #[test]
    fn test_get_disconnect_is_relative_to_receiver() {
        let first = dp(1, 10);
        let second = dp(9, 30);
        assert_eq!(first.get_disconnect(&second), Some(dp(1, 9)));
        assert_eq!(second.get_disconnect(&first), Some(dp(10, 30)));

        let first = tp((8, 0), (12, 0));
        let second = tp((10, 0), (13, 0));
        assert_eq!(first.get_disconnect(&second), Some(tp((8, 0), (10, 0))));
        assert_eq!(second.get_disconnect(&first), Some(tp((12, 0), (13, 0))));
    }

    #[test]
    fn test_get_disconnect_of_disjoint_or_nested_is_none() {
        let first = dp(1, 10);
        let other = dp(15, 30);
        assert_eq!(first.get_disconnect(&other), None);
        assert_eq!(other.get_disconnect(&first), None);

        assert_eq!(dp(1, 30).get_disconnect(&dp(5, 6)), None);
    }

    #[test]
    fn test_get_interim() {
        let period = dp(10, 20);
        assert_eq!(period.get_interim(&dp(1, 5)), Some(dp(5, 10)));
        assert_eq!(period.get_interim(&dp(25, 30)), Some(dp(20, 25)));
        assert_eq!(period.get_interim(&date(1, 28)), Some(dp(20, 28)));
        assert_eq!(period.get_interim(&dp(15, 30)), None);
        assert_eq!(period.get_interim(&date(1, 20)), None);

        let period = ip((2, 8), (2, 12));
        assert_eq!(
            period.get_interim(&instant(1, 4, 0)),
            Some(ip((2, 12), (4, 0)))
        );
    }

    // ── combination ───────────────────────────────────────────────────

    #[test]
    fn test_combine_with_single_time() {
        let combined = dp(10, 20).combine(&time(8, 0)).unwrap();
        assert_eq!(combined, ip((10, 8), (20, 8)));
    }

    #[test]
    fn test_combine_with_time_period() {
        let combined = dp(10, 20).combine(&tp((8, 0), (17, 0))).unwrap();
        assert_eq!(combined, ip((10, 8), (20, 17)));
    }

    #[test]
    fn test_combine_with_offset() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let combined = dp(10, 10)
            .combine_with_offset(&tp((8, 0), (9, 0)), offset)
            .unwrap();
        assert_eq!(combined.start().offset(), Some(offset));
        assert_eq!(
            combined.to_string(),
            "2024-01-10T08:00:00+01:00/2024-01-10T09:00:00+01:00"
        );
    }

    #[test]
    fn test_combine_rejects_inverted_projection() {
        let overnight = ip((1, 22), (2, 6));
        assert!(dp(5, 5).combine(&overnight).is_err());
    }

    // ── formatting ────────────────────────────────────────────────────

    #[test]
    fn test_period_display() {
        assert_eq!(dp(1, 10).to_string(), "2024-01-01/2024-01-10");
        assert_eq!(tp((8, 0), (9, 0)).to_string(), "08:00:00/09:00:00");
    }

    #[test]
    fn test_period_debug_names_variant() {
        assert_eq!(
            format!("{:?}", dp(1, 10)),
            "DatePeriod { start: 2024-01-01, end: 2024-01-10 }"
        );
        assert!(format!("{:?}", ip((1, 8), (1, 9))).starts_with("InstantPeriod {"));
    }
}
