// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Absolute instant: a calendar date plus a time of day, optionally pinned
//! to a UTC offset.
//!
//! [`Instant`] is the only temporal kind that carries both a date and a time,
//! which is what lets it be *projected* onto the other two kinds
//! ([`Instant::date`], [`Instant::time`]).  Equality, ordering, hashing and
//! subtraction operate on the UTC-normalised moment, as for chrono's
//! `DateTime<FixedOffset>`; an instant without an offset is read as UTC.
//! Two readings of the same moment at different offsets are therefore equal.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time made of a local date, a local time and an optional offset.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    datetime: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl Instant {
    // ── constructors ──────────────────────────────────────────────────

    /// Instant with no offset information.
    #[inline]
    pub const fn new(datetime: NaiveDateTime) -> Self {
        Self {
            datetime,
            offset: None,
        }
    }

    /// Instant whose local wall-clock reading is `datetime` at `offset`.
    #[inline]
    pub const fn with_offset(datetime: NaiveDateTime, offset: FixedOffset) -> Self {
        Self {
            datetime,
            offset: Some(offset),
        }
    }

    /// Joins a date and a time of day into an offset-less instant.
    #[inline]
    pub fn from_parts(date: NaiveDate, time: NaiveTime) -> Self {
        Self::new(date.and_time(time))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Local wall-clock date and time.
    #[inline]
    pub const fn local(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Local calendar date.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// Local time of day.
    #[inline]
    pub fn time(&self) -> NaiveTime {
        self.datetime.time()
    }

    /// The UTC offset, if one was supplied.
    #[inline]
    pub const fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// The same moment expressed in UTC.
    ///
    /// Saturates at chrono's representable range.
    pub fn utc(&self) -> NaiveDateTime {
        let Some(offset) = self.offset else {
            return self.datetime;
        };
        let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        match self.datetime.checked_sub_signed(shift) {
            Some(utc) => utc,
            None if shift > TimeDelta::zero() => NaiveDateTime::MIN,
            None => NaiveDateTime::MAX,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Comparison
// ═══════════════════════════════════════════════════════════════════════════

impl PartialEq for Instant {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.utc() == other.utc()
    }
}

impl Eq for Instant {}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.utc().hash(state);
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.utc().cmp(&other.utc())
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Sub for Instant {
    type Output = TimeDelta;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.utc() - rhs.utc()
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<NaiveDateTime> for Instant {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::with_offset(datetime.naive_local(), *datetime.offset())
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::with_offset(datetime.naive_utc(), Utc.fix())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawInstant {
    datetime: NaiveDateTime,
    offset_seconds: Option<i32>,
}

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawInstant {
            datetime: self.datetime,
            offset_seconds: self.offset.map(|o| o.local_minus_utc()),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = RawInstant::deserialize(deserializer)?;
        match raw.offset_seconds {
            None => Ok(Self::new(raw.datetime)),
            Some(secs) => FixedOffset::east_opt(secs)
                .map(|offset| Self::with_offset(raw.datetime, offset))
                .ok_or_else(|| D::Error::custom(format!("offset out of range: {secs}s"))),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
