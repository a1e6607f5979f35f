// ABOUTME: Daily mood check-in model with validated score range
// ABOUTME: MoodEntry definition with optional energy and focus sub-scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Valid mood score range (inclusive)
pub const MOOD_SCORE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// A daily mood check-in
///
/// One entry per calendar day; the check-in flow replaces rather than
/// appends when the user edits the same day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodEntry {
    /// Calendar day of the check-in
    pub date: NaiveDate,
    /// Overall mood score (1-10)
    pub score: u8,
    /// Optional energy sub-score (1-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<u8>,
    /// Optional focus sub-score (1-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<u8>,
}

impl MoodEntry {
    /// Create a mood entry, validating the score range
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MoodScoreOutOfRange` when the score falls
    /// outside 1-10.
    pub fn new(date: NaiveDate, score: u8) -> Result<Self, CoreError> {
        if !MOOD_SCORE_RANGE.contains(&score) {
            return Err(CoreError::MoodScoreOutOfRange { value: score });
        }
        Ok(Self {
            date,
            score,
            energy: None,
            focus: None,
        })
    }

    /// Attach an energy sub-score
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubScoreOutOfRange` when the value falls
    /// outside 1-10.
    pub fn with_energy(mut self, energy: u8) -> Result<Self, CoreError> {
        if !MOOD_SCORE_RANGE.contains(&energy) {
            return Err(CoreError::SubScoreOutOfRange {
                field: "energy",
                value: energy,
            });
        }
        self.energy = Some(energy);
        Ok(self)
    }

    /// Attach a focus sub-score
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubScoreOutOfRange` when the value falls
    /// outside 1-10.
    pub fn with_focus(mut self, focus: u8) -> Result<Self, CoreError> {
        if !MOOD_SCORE_RANGE.contains(&focus) {
            return Err(CoreError::SubScoreOutOfRange {
                field: "focus",
                value: focus,
            });
        }
        self.focus = Some(focus);
        Ok(self)
    }

    /// Mood score as a float, for averaging
    #[must_use]
    pub fn score_f64(&self) -> f64 {
        f64::from(self.score)
    }
}
