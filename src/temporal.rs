// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Temporal kinds and the projection rules between them.
//!
//! Three kinds of value can bound a period:
//!
//! | Kind | Rust type | Projects onto |
//! |------|-----------|---------------|
//! | [`TemporalKind::Time`] | [`chrono::NaiveTime`] | none |
//! | [`TemporalKind::Date`] | [`chrono::NaiveDate`] | none |
//! | [`TemporalKind::Instant`] | [`Instant`] | time, date |
//!
//! The [`Temporal`] trait ties a Rust type to its kind; [`Bounded`] exposes a
//! lower/upper pair in some kind `K`, which is how bare values, periods, and
//! projected instants all feed the same period operators.

use crate::{Instant, Period};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of temporal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemporalKind {
    /// Wall-clock time with no date.
    Time,
    /// Calendar date with no time.
    Date,
    /// Date and time, optionally with an offset.
    Instant,
}

impl TemporalKind {
    /// Name of the period variant bounded by this kind.
    pub const fn period_name(self) -> &'static str {
        match self {
            TemporalKind::Time => "TimePeriod",
            TemporalKind::Date => "DatePeriod",
            TemporalKind::Instant => "InstantPeriod",
        }
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemporalKind::Time => "time",
            TemporalKind::Date => "date",
            TemporalKind::Instant => "instant",
        })
    }
}

/// A temporal value whose kind is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemporalValue {
    /// A time of day.
    Time(NaiveTime),
    /// A calendar date.
    Date(NaiveDate),
    /// An absolute instant.
    Instant(Instant),
}

impl TemporalValue {
    pub const fn kind(&self) -> TemporalKind {
        match self {
            TemporalValue::Time(_) => TemporalKind::Time,
            TemporalValue::Date(_) => TemporalKind::Date,
            TemporalValue::Instant(_) => TemporalKind::Instant,
        }
    }

    /// Time-of-day view, available for times and instants.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            TemporalValue::Time(t) => Some(*t),
            TemporalValue::Instant(i) => Some(i.time()),
            TemporalValue::Date(_) => None,
        }
    }

    /// Calendar-date view, available for dates and instants.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TemporalValue::Date(d) => Some(*d),
            TemporalValue::Instant(i) => Some(i.date()),
            TemporalValue::Time(_) => None,
        }
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalValue::Time(t) => fmt::Display::fmt(t, f),
            TemporalValue::Date(d) => fmt::Display::fmt(d, f),
            TemporalValue::Instant(i) => fmt::Display::fmt(i, f),
        }
    }
}

impl From<NaiveTime> for TemporalValue {
    fn from(value: NaiveTime) -> Self {
        TemporalValue::Time(value)
    }
}

impl From<NaiveDate> for TemporalValue {
    fn from(value: NaiveDate) -> Self {
        TemporalValue::Date(value)
    }
}

impl From<Instant> for TemporalValue {
    fn from(value: Instant) -> Self {
        TemporalValue::Instant(value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Temporal trait
// ═══════════════════════════════════════════════════════════════════════════

/// Types usable as the boundaries of a [`Period`].
///
/// Implemented for [`NaiveTime`], [`NaiveDate`] and [`Instant`].
pub trait Temporal: Copy + Ord + fmt::Debug + fmt::Display + Sized + 'static {
    /// Kind tag of this type.
    const KIND: TemporalKind;

    /// Signed elapsed time from `earlier` to `self`.
    ///
    /// Times of day are measured as offsets from midnight.
    fn elapsed_since(&self, earlier: &Self) -> TimeDelta;

    /// Wraps `self` into the runtime-tagged form.
    fn into_value(self) -> TemporalValue;

    /// Unwraps a runtime-tagged value of this exact kind.
    fn from_value(value: TemporalValue) -> Option<Self>;

    /// Views a runtime-tagged value as this kind, projecting instants when
    /// this kind is a time of day or a date.
    fn project(value: &TemporalValue) -> Option<Self>;
}

/// Kinds whose values lie on a single non-repeating line.
///
/// Times of day wrap at midnight, so only dates and instants qualify.
pub trait Linear: Temporal {}

impl Linear for NaiveDate {}
impl Linear for Instant {}

impl Temporal for NaiveTime {
    const KIND: TemporalKind = TemporalKind::Time;

    #[inline]
    fn elapsed_since(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }

    #[inline]
    fn into_value(self) -> TemporalValue {
        TemporalValue::Time(self)
    }

    fn from_value(value: TemporalValue) -> Option<Self> {
        match value {
            TemporalValue::Time(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    fn project(value: &TemporalValue) -> Option<Self> {
        value.as_time()
    }
}

impl Temporal for NaiveDate {
    const KIND: TemporalKind = TemporalKind::Date;

    #[inline]
    fn elapsed_since(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }

    #[inline]
    fn into_value(self) -> TemporalValue {
        TemporalValue::Date(self)
    }

    fn from_value(value: TemporalValue) -> Option<Self> {
        match value {
            TemporalValue::Date(d) => Some(d),
            _ => None,
        }
    }

    #[inline]
    fn project(value: &TemporalValue) -> Option<Self> {
        value.as_date()
    }
}

impl Temporal for Instant {
    const KIND: TemporalKind = TemporalKind::Instant;

    #[inline]
    fn elapsed_since(&self, earlier: &Self) -> TimeDelta {
        *self - *earlier
    }

    #[inline]
    fn into_value(self) -> TemporalValue {
        TemporalValue::Instant(self)
    }

    fn from_value(value: TemporalValue) -> Option<Self> {
        match value {
            TemporalValue::Instant(i) => Some(i),
            _ => None,
        }
    }

    #[inline]
    fn project(value: &TemporalValue) -> Option<Self> {
        Self::from_value(*value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Bounded trait
// ═══════════════════════════════════════════════════════════════════════════

/// Something with a lower and an upper bound expressed in kind `K`.
///
/// A bare value is its own lower and upper bound.  Instants, and periods of
/// instants, are bounded in every kind they project onto.  Note that the
/// time-of-day projection of a multi-day instant period may have
/// `lower > upper`.
pub trait Bounded<K: Temporal> {
    fn lower(&self) -> K;
    fn upper(&self) -> K;
}

macro_rules! impl_bounded_value {
    ($ty:ty => $kind:ty, |$v:ident| $project:expr) => {
        impl Bounded<$kind> for $ty {
            #[inline]
            fn lower(&self) -> $kind {
                let $v = self;
                $project
            }

            #[inline]
            fn upper(&self) -> $kind {
                let $v = self;
                $project
            }
        }
    };
}

impl_bounded_value!(NaiveTime => NaiveTime, |v| *v);
impl_bounded_value!(NaiveDate => NaiveDate, |v| *v);
impl_bounded_value!(Instant => Instant, |v| *v);
impl_bounded_value!(Instant => NaiveTime, |v| v.time());
impl_bounded_value!(Instant => NaiveDate, |v| v.date());

impl<K: Temporal> Bounded<K> for Period<K> {
    #[inline]
    fn lower(&self) -> K {
        self.start()
    }

    #[inline]
    fn upper(&self) -> K {
        self.end()
    }
}

impl Bounded<NaiveTime> for Period<Instant> {
    #[inline]
    fn lower(&self) -> NaiveTime {
        self.start().time()
    }

    #[inline]
    fn upper(&self) -> NaiveTime {
        self.end().time()
    }
}

impl Bounded<NaiveDate> for Period<Instant> {
    #[inline]
    fn lower(&self) -> NaiveDate {
        self.start().date()
    }

    #[inline]
    fn upper(&self) -> NaiveDate {
        self.end().date()
    }
}
