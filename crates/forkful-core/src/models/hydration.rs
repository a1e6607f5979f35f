// ABOUTME: Daily hydration check-in model
// ABOUTME: HydrationLog definition counting glasses of water per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily hydration check-in
///
/// One entry per calendar day. Days without an entry are treated as
/// zero glasses by the analytics engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HydrationLog {
    /// Calendar day of the check-in
    pub date: NaiveDate,
    /// Glasses of water logged
    pub glasses: u32,
}

impl HydrationLog {
    /// Create a hydration entry
    #[must_use]
    pub const fn new(date: NaiveDate, glasses: u32) -> Self {
        Self { date, glasses }
    }
}
