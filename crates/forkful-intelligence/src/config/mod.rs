// ABOUTME: Threshold configuration for the Forkful analytics engine
// ABOUTME: Nested config structs with defaults wired to named constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Analytics Configuration
//!
//! Typed threshold configuration for the meal-timing analyzer, the
//! mood-food correlator, and insight generation. Defaults mirror the
//! values in [`crate::constants`]; callers that tune thresholds should
//! run [`IntelligenceConfig::validate`] before handing the config to an
//! analyzer.

use serde::{Deserialize, Serialize};

use crate::constants::{adherence, food_ranking, hydration, insight_rules, macro_split, timing};

mod error;

pub use error::ConfigError;

/// Top-level analytics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Meal-timing analysis settings
    pub timing: TimingConfig,
    /// Mood-food correlation settings
    pub correlation: CorrelationConfig,
    /// Insight rule thresholds
    pub insights: InsightRules,
}

impl IntelligenceConfig {
    /// Validate the full configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in any section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        self.correlation.validate()?;
        self.insights.validate()
    }
}

/// Configuration for meal-timing analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// First hour of day included in the hourly distribution
    pub display_hour_start: u32,
    /// Last hour of day included in the hourly distribution
    pub display_hour_end: u32,
    /// Standard deviation (minutes) mapped to a 50/100 consistency score
    pub half_score_deviation_min: f64,
    /// Minimum occurrences of a meal type before it counts toward consistency
    pub min_occurrences_for_consistency: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            display_hour_start: timing::DISPLAY_HOUR_START,
            display_hour_end: timing::DISPLAY_HOUR_END,
            half_score_deviation_min: timing::HALF_SCORE_DEVIATION_MIN,
            min_occurrences_for_consistency: timing::MIN_OCCURRENCES_FOR_CONSISTENCY,
        }
    }
}

impl TimingConfig {
    /// Validate timing thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when hours fall outside 0-23, the display
    /// range is inverted, or the deviation scale is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_hour_end > 23 {
            return Err(ConfigError::ValueOutOfRange(
                "display_hour_end must be at most 23",
            ));
        }
        if self.display_hour_start > self.display_hour_end {
            return Err(ConfigError::InvalidOrdering(
                "display_hour_start must not exceed display_hour_end",
            ));
        }
        if self.half_score_deviation_min <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "half_score_deviation_min must be positive",
            ));
        }
        if self.min_occurrences_for_consistency < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_occurrences_for_consistency must be at least 2",
            ));
        }
        Ok(())
    }
}

/// Configuration for mood-food correlation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Protein calorie share that marks a high-protein day
    pub high_protein_ratio: f64,
    /// Carbohydrate calorie share that marks a high-carb day
    pub high_carb_ratio: f64,
    /// Glasses per day that count as hydrated
    pub hydration_goal_glasses: u32,
    /// Relative band around the calorie target that counts as on-target
    pub target_band_ratio: f64,
    /// Minimum days a food must appear before it is ranked
    pub min_food_occurrences: usize,
    /// Number of foods returned per ranking
    pub food_rank_limit: usize,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            high_protein_ratio: macro_split::HIGH_PROTEIN_CALORIE_RATIO,
            high_carb_ratio: macro_split::HIGH_CARB_CALORIE_RATIO,
            hydration_goal_glasses: hydration::DAILY_GLASSES_GOAL,
            target_band_ratio: adherence::TARGET_BAND_RATIO,
            min_food_occurrences: food_ranking::MIN_OCCURRENCES,
            food_rank_limit: food_ranking::DEFAULT_LIMIT,
        }
    }
}

impl CorrelationConfig {
    /// Validate correlation thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when ratios fall outside (0, 1) or counts
    /// are zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (value, label) in [
            (self.high_protein_ratio, "high_protein_ratio must be in (0, 1)"),
            (self.high_carb_ratio, "high_carb_ratio must be in (0, 1)"),
            (self.target_band_ratio, "target_band_ratio must be in (0, 1)"),
        ] {
            if value <= 0.0 || value >= 1.0 {
                return Err(ConfigError::InvalidRange(label));
            }
        }
        if self.min_food_occurrences == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_food_occurrences must be at least 1",
            ));
        }
        if self.food_rank_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "food_rank_limit must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Thresholds for rule-based insight generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRules {
    /// Average breakfast time (minutes after midnight) considered late
    pub late_breakfast_minutes: f64,
    /// Average eating window (hours) considered wide
    pub wide_window_hours: f64,
    /// Average eating window (hours) considered compressed
    pub compressed_window_hours: f64,
    /// Consistency score at or above which the schedule reads as consistent
    pub consistent_score: u8,
    /// Consistency score at or below which the schedule reads as irregular
    pub irregular_score: u8,
    /// Hour of day from which eating counts as late-night
    pub late_night_hour: u32,
    /// Share of calories after the late-night hour that triggers the rule
    pub late_night_calorie_share: f64,
    /// Minimum mood delta between buckets before a lift insight fires
    pub mood_lift_min_delta: f64,
    /// Average mood at or above which a ranked food reads as a booster
    pub booster_min_avg_mood: f64,
    /// Average mood at or below which a ranked food reads as a drainer
    pub drainer_max_avg_mood: f64,
    /// Weekly mood average at or below which the low-trend rule fires
    pub low_trend_score: f64,
}

impl Default for InsightRules {
    fn default() -> Self {
        Self {
            late_breakfast_minutes: insight_rules::LATE_BREAKFAST_MINUTES,
            wide_window_hours: insight_rules::WIDE_WINDOW_HOURS,
            compressed_window_hours: insight_rules::COMPRESSED_WINDOW_HOURS,
            consistent_score: insight_rules::CONSISTENT_SCORE,
            irregular_score: insight_rules::IRREGULAR_SCORE,
            late_night_hour: insight_rules::LATE_NIGHT_HOUR,
            late_night_calorie_share: insight_rules::LATE_NIGHT_CALORIE_SHARE,
            mood_lift_min_delta: insight_rules::MOOD_LIFT_MIN_DELTA,
            booster_min_avg_mood: insight_rules::BOOSTER_MIN_AVG_MOOD,
            drainer_max_avg_mood: insight_rules::DRAINER_MAX_AVG_MOOD,
            low_trend_score: insight_rules::LOW_TREND_SCORE,
        }
    }
}

impl InsightRules {
    /// Validate insight thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when scores leave the 0-100 range or the
    /// window thresholds are not ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.consistent_score > 100 || self.irregular_score > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "consistency thresholds must be at most 100",
            ));
        }
        if self.irregular_score >= self.consistent_score {
            return Err(ConfigError::InvalidOrdering(
                "irregular_score must be below consistent_score",
            ));
        }
        if self.compressed_window_hours >= self.wide_window_hours {
            return Err(ConfigError::InvalidOrdering(
                "compressed_window_hours must be below wide_window_hours",
            ));
        }
        if self.late_night_hour > 23 {
            return Err(ConfigError::ValueOutOfRange(
                "late_night_hour must be at most 23",
            ));
        }
        if self.late_night_calorie_share <= 0.0 || self.late_night_calorie_share >= 1.0 {
            return Err(ConfigError::InvalidRange(
                "late_night_calorie_share must be in (0, 1)",
            ));
        }
        Ok(())
    }
}
