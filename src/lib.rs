// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Periods Module
//!
//! This crate models contiguous periods bounded by two temporal values of the
//! same kind, and the algebra over them: equality, containment, ordering,
//! overlap and gap extraction, cross-kind combination, and decomposition of
//! a period's length into calendar-like buckets.
//!
//! # Core types
//!
//! - [`Period<K>`]: a validated interval parameterised by a [`Temporal`] kind.
//! - [`TimePeriod`], [`DatePeriod`], [`InstantPeriod`]: the three concrete periods.
//! - [`Instant`]: date plus time of day, with an optional UTC offset.
//! - [`Span`]: years…seconds breakdown of an elapsed amount.
//! - [`AnyPeriod`] / [`Operand`]: runtime-typed periods and operator arguments.
//! - [`Recurrence`]: how often a time of day occurs inside an instant period.
//!
//! # Kinds and projection
//!
//! | Kind | Boundary type | Compared against |
//! |------|---------------|------------------|
//! | time | [`chrono::NaiveTime`] | times, instants (time projection) |
//! | date | [`chrono::NaiveDate`] | dates, instants (date projection) |
//! | instant | [`Instant`] | instants |
//!
//! Instant periods additionally contain times of day (when the time occurs on
//! at least one day of the period) and dates (by date projection).
//!
//! # Approximate spans
//!
//! [`Span`] uses fixed moduli: four weeks to a month and twelve months to a
//! year.  It does not follow the calendar.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for values and periods.
//! - `logging`: emit `log` records on period construction.

#[macro_use]
mod logging;

mod any;
mod error;
mod instant;
mod period;
mod recurrence;
mod span;
mod temporal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use any::{AnyPeriod, Operand};
pub use error::PeriodError;
pub use instant::Instant;
pub use period::{Period, Within};
pub use recurrence::Recurrence;
pub use span::Span;
pub use temporal::{Bounded, Linear, Temporal, TemporalKind, TemporalValue};

// ── Period aliases ────────────────────────────────────────────────────────

/// A span of wall-clock time within a single day.
pub type TimePeriod = Period<chrono::NaiveTime>;

/// A range of calendar dates.
pub type DatePeriod = Period<chrono::NaiveDate>;

/// A range between two absolute instants, possibly spanning several days.
pub type InstantPeriod = Period<Instant>;
