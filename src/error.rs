// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised by period construction and the runtime-typed operators.

use crate::TemporalKind;
use thiserror::Error;

/// Failure of a period operation.
///
/// Every variant describes a caller-supplied invariant violation; nothing in
/// this crate fails for transient reasons.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// A period was requested whose start lies after its end.
    #[error("inverted range: start {start} is after end {end}")]
    InvertedRange {
        /// Rendered start boundary.
        start: String,
        /// Rendered end boundary.
        end: String,
    },

    /// Two temporal kinds were combined that have no projection between them.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// Kind required by the receiving period.
        expected: TemporalKind,
        /// Kind actually supplied.
        found: TemporalKind,
    },

    /// The operation is not defined for periods of this kind.
    #[error("{operation} is not defined for {kind} periods")]
    UnsupportedOperation {
        /// Operation name.
        operation: &'static str,
        /// Kind of the receiving period.
        kind: TemporalKind,
    },
}

impl PeriodError {
    pub(crate) fn inverted(start: &impl std::fmt::Display, end: &impl std::fmt::Display) -> Self {
        Self::InvertedRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}
