// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Periods whose kind is only known at runtime.
//!
//! [`AnyPeriod`] wraps the three concrete period types and dispatches every
//! operator on the variant tag.  Operands that have no projection onto the
//! receiver's kind are handled per operator family:
//!
//! - equality, containment and ordering evaluate to `false`;
//! - overlap, gap, interim, combination and repeat detection fail with
//!   [`PeriodError::KindMismatch`] or [`PeriodError::UnsupportedOperation`].

use crate::{
    Bounded, DatePeriod, Instant, InstantPeriod, Period, PeriodError, Span, Temporal,
    TemporalKind, TemporalValue, TimePeriod,
};
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A period of any temporal kind.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum AnyPeriod {
    /// Bounded by times of day.
    Time(TimePeriod),
    /// Bounded by calendar dates.
    Date(DatePeriod),
    /// Bounded by instants.
    Instant(InstantPeriod),
}

/// Right-hand side of a runtime-typed period operator.
#[derive(Debug, Clone, Copy)]
pub enum Operand {
    /// A bare value, acting as its own lower and upper bound.
    Value(TemporalValue),
    /// A period of any kind.
    Period(AnyPeriod),
}

/// Bounds of an operand after projection onto the receiver's kind.
#[derive(Debug, Clone, Copy)]
struct Projected<K> {
    lower: K,
    upper: K,
}

impl<K: Temporal> Bounded<K> for Projected<K> {
    #[inline]
    fn lower(&self) -> K {
        self.lower
    }

    #[inline]
    fn upper(&self) -> K {
        self.upper
    }
}

impl Operand {
    /// Kind of the value or of the period's boundaries.
    pub const fn kind(&self) -> TemporalKind {
        match self {
            Operand::Value(value) => value.kind(),
            Operand::Period(period) => period.kind(),
        }
    }

    /// The operand's bounds projected onto `K`, or `None` when `K` is not
    /// reachable from the operand's kind.
    fn bounds_in<K: Temporal>(&self) -> Option<Projected<K>> {
        let (lower, upper) = match self {
            Operand::Value(value) => (*value, *value),
            Operand::Period(period) => (period.start(), period.end()),
        };
        Some(Projected {
            lower: K::project(&lower)?,
            upper: K::project(&upper)?,
        })
    }
}

impl AnyPeriod {
    /// Builds the period variant matching the kind of both values.
    ///
    /// Fails with [`PeriodError::KindMismatch`] when the values differ in
    /// kind, and with [`PeriodError::InvertedRange`] when `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use chronospan::{AnyPeriod, PeriodError, TemporalKind};
    ///
    /// let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// let period = AnyPeriod::from_values(d1.into(), d2.into()).unwrap();
    /// assert_eq!(period.kind(), TemporalKind::Date);
    ///
    /// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    /// assert!(matches!(
    ///     AnyPeriod::from_values(d1.into(), noon.into()),
    ///     Err(PeriodError::KindMismatch { .. })
    /// ));
    /// ```
    pub fn from_values(start: TemporalValue, end: TemporalValue) -> Result<Self, PeriodError> {
        match (start, end) {
            (TemporalValue::Time(s), TemporalValue::Time(e)) => Period::new(s, e).map(Self::Time),
            (TemporalValue::Date(s), TemporalValue::Date(e)) => Period::new(s, e).map(Self::Date),
            (TemporalValue::Instant(s), TemporalValue::Instant(e)) => {
                Period::new(s, e).map(Self::Instant)
            }
            (s, e) => {
                debug!("rejected mixed-kind period {}/{}", s, e);
                Err(PeriodError::KindMismatch {
                    expected: s.kind(),
                    found: e.kind(),
                })
            }
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Kind of the wrapped period.
    pub const fn kind(&self) -> TemporalKind {
        match self {
            AnyPeriod::Time(_) => TemporalKind::Time,
            AnyPeriod::Date(_) => TemporalKind::Date,
            AnyPeriod::Instant(_) => TemporalKind::Instant,
        }
    }

    /// Lower bound, tagged with its kind.
    pub fn start(&self) -> TemporalValue {
        match self {
            AnyPeriod::Time(p) => p.start().into_value(),
            AnyPeriod::Date(p) => p.start().into_value(),
            AnyPeriod::Instant(p) => p.start().into_value(),
        }
    }

    /// Upper bound, tagged with its kind.
    pub fn end(&self) -> TemporalValue {
        match self {
            AnyPeriod::Time(p) => p.end().into_value(),
            AnyPeriod::Date(p) => p.end().into_value(),
            AnyPeriod::Instant(p) => p.end().into_value(),
        }
    }

    /// Span of the wrapped period.
    pub fn span(&self) -> &Span {
        match self {
            AnyPeriod::Time(p) => p.span(),
            AnyPeriod::Date(p) => p.span(),
            AnyPeriod::Instant(p) => p.span(),
        }
    }

    /// The concrete period, when this is of kind `K`.
    pub fn downcast<K: Temporal>(&self) -> Option<Period<K>> {
        let start = K::from_value(self.start())?;
        let end = K::from_value(self.end())?;
        Some(Period::from_ordered(start, end))
    }

    // ── never-failing predicates ──────────────────────────────────────

    /// Projection-aware equality; bare values and unrelated kinds are never
    /// equal to a period.
    pub fn equals(&self, other: &Operand) -> bool {
        match other {
            Operand::Period(period) => self == period,
            Operand::Value(_) => false,
        }
    }

    /// Boundary-inclusive containment of a value or period.
    pub fn contains(&self, item: &Operand) -> bool {
        match self {
            AnyPeriod::Time(p) => item
                .bounds_in::<NaiveTime>()
                .is_some_and(|b| p.encloses_bounds(&b)),
            AnyPeriod::Date(p) => item
                .bounds_in::<NaiveDate>()
                .is_some_and(|b| p.encloses_bounds(&b)),
            AnyPeriod::Instant(p) => match item.kind() {
                TemporalKind::Instant => item
                    .bounds_in::<Instant>()
                    .is_some_and(|b| p.encloses_bounds(&b)),
                TemporalKind::Date => item
                    .bounds_in::<NaiveDate>()
                    .is_some_and(|b| crate::period::encloses::<NaiveDate>(p, &b)),
                TemporalKind::Time => item
                    .bounds_in::<NaiveTime>()
                    .is_some_and(|b| p.recurrence(&b).occurs()),
            },
        }
    }

    /// See [`Period::is_before`]; `false` for operands of unrelated kinds.
    pub fn is_before(&self, other: &Operand) -> bool {
        match self {
            AnyPeriod::Time(p) => other
                .bounds_in::<NaiveTime>()
                .is_some_and(|b| p.is_before(&b)),
            AnyPeriod::Date(p) => other
                .bounds_in::<NaiveDate>()
                .is_some_and(|b| p.is_before(&b)),
            AnyPeriod::Instant(p) => other
                .bounds_in::<Instant>()
                .is_some_and(|b| p.is_before(&b)),
        }
    }

    /// See [`Period::is_after`]; `false` for operands of unrelated kinds.
    pub fn is_after(&self, other: &Operand) -> bool {
        match self {
            AnyPeriod::Time(p) => other
                .bounds_in::<NaiveTime>()
                .is_some_and(|b| p.is_after(&b)),
            AnyPeriod::Date(p) => other
                .bounds_in::<NaiveDate>()
                .is_some_and(|b| p.is_after(&b)),
            AnyPeriod::Instant(p) => other
                .bounds_in::<Instant>()
                .is_some_and(|b| p.is_after(&b)),
        }
    }

    // ── kind-checked operators ────────────────────────────────────────

    fn projected<K: Temporal>(&self, other: &AnyPeriod) -> Result<Projected<K>, PeriodError> {
        Operand::Period(*other)
            .bounds_in()
            .ok_or(PeriodError::KindMismatch {
                expected: self.kind(),
                found: other.kind(),
            })
    }

    /// See [`Period::overlaps_with`].
    pub fn overlaps_with(&self, other: &AnyPeriod) -> Result<bool, PeriodError> {
        Ok(match self {
            AnyPeriod::Time(p) => p.overlaps_bounds(&self.projected::<NaiveTime>(other)?),
            AnyPeriod::Date(p) => p.overlaps_bounds(&self.projected::<NaiveDate>(other)?),
            AnyPeriod::Instant(p) => p.overlaps_bounds(&self.projected::<Instant>(other)?),
        })
    }

    /// See [`Period::overlapped_by`].
    pub fn overlapped_by(&self, other: &AnyPeriod) -> Result<bool, PeriodError> {
        Ok(match self {
            AnyPeriod::Time(p) => {
                p.overlapped_by_bounds(&self.projected::<NaiveTime>(other)?)
            }
            AnyPeriod::Date(p) => {
                p.overlapped_by_bounds(&self.projected::<NaiveDate>(other)?)
            }
            AnyPeriod::Instant(p) => {
                p.overlapped_by_bounds(&self.projected::<Instant>(other)?)
            }
        })
    }

    /// See [`Period::get_overlap`].
    pub fn get_overlap(&self, other: &AnyPeriod) -> Result<Option<AnyPeriod>, PeriodError> {
        Ok(match self {
            AnyPeriod::Time(p) => p
                .overlap_with_bounds(&self.projected::<NaiveTime>(other)?)
                .map(Self::Time),
            AnyPeriod::Date(p) => p
                .overlap_with_bounds(&self.projected::<NaiveDate>(other)?)
                .map(Self::Date),
            AnyPeriod::Instant(p) => p
                .overlap_with_bounds(&self.projected::<Instant>(other)?)
                .map(Self::Instant),
        })
    }

    /// See [`Period::get_disconnect`].
    pub fn get_disconnect(&self, other: &AnyPeriod) -> Result<Option<AnyPeriod>, PeriodError> {
        Ok(match self {
            AnyPeriod::Time(p) => p
                .disconnect_from_bounds(&self.projected::<NaiveTime>(other)?)
                .map(Self::Time),
            AnyPeriod::Date(p) => p
                .disconnect_from_bounds(&self.projected::<NaiveDate>(other)?)
                .map(Self::Date),
            AnyPeriod::Instant(p) => p
                .disconnect_from_bounds(&self.projected::<Instant>(other)?)
                .map(Self::Instant),
        })
    }

    /// See [`Period::get_interim`]; time periods have no interim because
    /// times of day wrap at midnight.
    pub fn get_interim(&self, reference: &Operand) -> Result<Option<AnyPeriod>, PeriodError> {
        let mismatch = PeriodError::KindMismatch {
            expected: self.kind(),
            found: reference.kind(),
        };
        match self {
            AnyPeriod::Time(_) => Err(PeriodError::UnsupportedOperation {
                operation: "get_interim",
                kind: TemporalKind::Time,
            }),
            AnyPeriod::Date(p) => {
                let bounds = reference.bounds_in::<NaiveDate>().ok_or(mismatch)?;
                Ok(p.get_interim(&bounds).map(Self::Date))
            }
            AnyPeriod::Instant(p) => {
                let bounds = reference.bounds_in::<Instant>().ok_or(mismatch)?;
                Ok(p.get_interim(&bounds).map(Self::Instant))
            }
        }
    }

    /// See [`Period::combine`]; only date periods combine.
    pub fn combine(&self, time: &Operand) -> Result<AnyPeriod, PeriodError> {
        let AnyPeriod::Date(p) = self else {
            return Err(PeriodError::UnsupportedOperation {
                operation: "combine",
                kind: self.kind(),
            });
        };
        let bounds = time
            .bounds_in::<NaiveTime>()
            .ok_or(PeriodError::KindMismatch {
                expected: TemporalKind::Time,
                found: time.kind(),
            })?;
        p.combine(&bounds).map(Self::Instant)
    }

    /// See [`Period::time_repeats`]; only instant periods can repeat a time.
    pub fn time_repeats(&self, time: &Operand) -> Result<bool, PeriodError> {
        let AnyPeriod::Instant(p) = self else {
            return Err(PeriodError::UnsupportedOperation {
                operation: "time_repeats",
                kind: self.kind(),
            });
        };
        match time.kind() {
            TemporalKind::Time => Ok(time
                .bounds_in::<NaiveTime>()
                .is_some_and(|b| p.time_repeats(&b))),
            found => Err(PeriodError::KindMismatch {
                expected: TemporalKind::Time,
                found,
            }),
        }
    }
}

impl<K: Temporal> Period<K> {
    #[inline]
    fn encloses_bounds(&self, inner: &impl Bounded<K>) -> bool {
        crate::period::encloses(self, inner)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Equality
// ═══════════════════════════════════════════════════════════════════════════

/// Follows the projection rules of the concrete types: time and date periods
/// equal an instant period with matching projected bounds, and time never
/// equals date.  The relation is symmetric but not transitive, so `AnyPeriod`
/// is not `Eq`.
impl PartialEq for AnyPeriod {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Instant(a), Self::Instant(b)) => a == b,
            (Self::Time(a), Self::Instant(b)) | (Self::Instant(b), Self::Time(a)) => a == b,
            (Self::Date(a), Self::Instant(b)) | (Self::Instant(b), Self::Date(a)) => a == b,
            (Self::Time(_), Self::Date(_)) | (Self::Date(_), Self::Time(_)) => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions and formatting
// ═══════════════════════════════════════════════════════════════════════════

impl From<TimePeriod> for AnyPeriod {
    fn from(period: TimePeriod) -> Self {
        AnyPeriod::Time(period)
    }
}

impl From<DatePeriod> for AnyPeriod {
    fn from(period: DatePeriod) -> Self {
        AnyPeriod::Date(period)
    }
}

impl From<InstantPeriod> for AnyPeriod {
    fn from(period: InstantPeriod) -> Self {
        AnyPeriod::Instant(period)
    }
}

impl fmt::Display for AnyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPeriod::Time(p) => fmt::Display::fmt(p, f),
            AnyPeriod::Date(p) => fmt::Display::fmt(p, f),
            AnyPeriod::Instant(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl<K: Temporal> From<Period<K>> for Operand
where
    AnyPeriod: From<Period<K>>,
{
    fn from(period: Period<K>) -> Self {
        Operand::Period(period.into())
    }
}

impl From<AnyPeriod> for Operand {
    fn from(period: AnyPeriod) -> Self {
        Operand::Period(period)
    }
}

impl From<TemporalValue> for Operand {
    fn from(value: TemporalValue) -> Self {
        Operand::Value(value)
    }
}

impl From<NaiveTime> for Operand {
    fn from(value: NaiveTime) -> Self {
        Operand::Value(value.into())
    }
}

impl From<NaiveDate> for Operand {
    fn from(value: NaiveDate) -> Self {
        Operand::Value(value.into())
    }
}

impl From<Instant> for Operand {
    fn from(value: Instant) -> Self {
        Operand::Value(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn at(d: u32, h: u32) -> Instant {
        Instant::from_parts(date(d), time(h))
    }

    fn any(start: impl Into<TemporalValue>, end: impl Into<TemporalValue>) -> AnyPeriod {
        AnyPeriod::from_values(start.into(), end.into()).unwrap()
    }

    #[test]
    fn test_from_values_picks_variant() {
        assert_eq!(any(time(8), time(9)).kind(), TemporalKind::Time);
        assert_eq!(any(date(1), date(2)).kind(), TemporalKind::Date);
        assert_eq!(any(at(1, 8), at(1, 9)).kind(), TemporalKind::Instant);
    }

    #[test]
    fn test_from_values_rejects_mixed_kinds() {
        let err = AnyPeriod::from_values(date(1).into(), at(2, 8).into()).unwrap_err();
        assert_eq!(
            err,
            PeriodError::KindMismatch {
                expected: TemporalKind::Date,
                found: TemporalKind::Instant,
            }
        );
    }

    #[test]
    fn test_from_values_rejects_inverted() {
        let err = AnyPeriod::from_values(time(9).into(), time(8).into()).unwrap_err();
        assert!(matches!(err, PeriodError::InvertedRange { .. }));
    }

    #[test]
    fn test_equality_never_raises() {
        let dates = any(date(1), date(30));
        let instants = any(at(1, 8), at(30, 10));
        let times = any(time(8), time(10));

        assert!(dates.equals(&instants.into()));
        assert!(instants.equals(&dates.into()));
        assert!(!dates.equals(&times.into()));
        assert!(!times.equals(&dates.into()));
        assert!(!dates.equals(&date(1).into()));
        assert!(any(at(1, 8), at(1, 10)).equals(&times.into()));
    }

    #[test]
    fn test_containment_across_kinds() {
        let instants = any(at(1, 8), at(2, 12));
        assert!(instants.contains(&time(7).into()));
        assert!(instants.contains(&date(2).into()));
        assert!(instants.contains(&at(2, 12).into()));
        assert!(instants.contains(&any(time(9), time(11)).into()));
        assert!(!instants.contains(&date(3).into()));

        let dates = any(date(1), date(30));
        assert!(dates.contains(&at(15, 9).into()));
        assert!(!dates.contains(&time(9).into()));

        let times = any(time(8), time(17));
        assert!(times.contains(&at(20, 9).into()));
        assert!(!times.contains(&date(1).into()));
    }

    #[test]
    fn test_ordering_across_kinds() {
        let dates = any(date(1), date(10));
        assert!(dates.is_before(&date(11).into()));
        assert!(dates.is_before(&any(at(12, 0), at(13, 0)).into()));
        assert!(!dates.is_before(&time(23).into()));

        let instants = any(at(5, 8), at(5, 9));
        assert!(instants.is_after(&at(5, 7).into()));
        assert!(!instants.is_after(&date(4).into()));
    }

    #[test]
    fn test_overlap_checks_kind() {
        let first = any(date(1), date(10));
        let second = any(date(9), date(30));
        assert_eq!(first.overlapped_by(&second), Ok(true));
        assert_eq!(second.overlaps_with(&first), Ok(true));
        assert_eq!(
            first.get_overlap(&second),
            Ok(Some(any(date(9), date(10))))
        );

        let times = any(time(8), time(9));
        assert_eq!(
            first.get_overlap(&times),
            Err(PeriodError::KindMismatch {
                expected: TemporalKind::Date,
                found: TemporalKind::Time,
            })
        );
        assert!(any(at(1, 8), at(1, 9)).overlaps_with(&times).is_err());
    }

    #[test]
    fn test_disconnect_matches_typed_api() {
        let first = any(date(1), date(10));
        let second = any(date(9), date(30));
        assert_eq!(first.get_disconnect(&second), Ok(Some(any(date(1), date(9)))));
        assert_eq!(second.get_disconnect(&first), Ok(Some(any(date(10), date(30)))));

        let disjoint = any(date(15), date(30));
        assert_eq!(first.get_disconnect(&disjoint), Ok(None));
    }

    #[test]
    fn test_interim() {
        let dates = any(date(10), date(20));
        assert_eq!(
            dates.get_interim(&date(25).into()),
            Ok(Some(any(date(20), date(25))))
        );
        assert!(matches!(
            any(time(8), time(9)).get_interim(&time(10).into()),
            Err(PeriodError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            dates.get_interim(&time(10).into()),
            Err(PeriodError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_combine_and_repeats() {
        let dates = any(date(10), date(20));
        let combined = dates.combine(&time(8).into()).unwrap();
        assert_eq!(combined.downcast::<Instant>(), any(at(10, 8), at(20, 8)).downcast());

        assert!(matches!(
            combined.combine(&time(8).into()),
            Err(PeriodError::UnsupportedOperation { .. })
        ));
        assert_eq!(combined.time_repeats(&time(9).into()), Ok(true));
        assert!(combined.time_repeats(&date(1).into()).is_err());
    }

    #[test]
    fn test_downcast() {
        let period = any(date(1), date(2));
        assert!(period.downcast::<NaiveDate>().is_some());
        assert!(period.downcast::<NaiveTime>().is_none());
        assert_eq!(period.to_string(), "2024-01-01/2024-01-02");
    }
}
