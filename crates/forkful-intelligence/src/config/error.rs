// ABOUTME: Configuration error types for analytics threshold validation
// ABOUTME: Defines error variants for invalid ranges and ordering violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Configuration error types for analytics threshold validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., ratio not between 0-1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Two thresholds that must be ordered relative to each other are not
    #[error("Invalid threshold ordering: {0}")]
    InvalidOrdering(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
