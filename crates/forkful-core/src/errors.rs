// ABOUTME: Validation errors raised at the data-provider boundary
// ABOUTME: CoreError variants for out-of-range check-in values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Validation errors for core model construction.
//!
//! The analytics engine itself never fails on degenerate input; these
//! errors exist for the provider boundary where check-in data enters
//! the system.

use thiserror::Error;

/// Core model validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Mood score outside the valid 1-10 range
    #[error("mood score {value} outside valid range 1-10")]
    MoodScoreOutOfRange {
        /// The rejected score
        value: u8,
    },

    /// Mood sub-score (energy/focus) outside the valid 1-10 range
    #[error("{field} sub-score {value} outside valid range 1-10")]
    SubScoreOutOfRange {
        /// Which sub-score was rejected
        field: &'static str,
        /// The rejected value
        value: u8,
    },
}
