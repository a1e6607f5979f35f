// ABOUTME: Named analysis thresholds for the Forkful analytics engine
// ABOUTME: Macro split ratios, hydration goals, timing windows, and insight rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Analysis constants organized by domain.
//!
//! These are the default values behind [`crate::config::IntelligenceConfig`];
//! product experiments tune them through the config layer rather than here.

/// Energy content per gram of macronutrient
pub mod calories_per_gram {
    /// Calories per gram of protein
    pub const PROTEIN: f64 = 4.0;
    /// Calories per gram of carbohydrate
    pub const CARBOHYDRATE: f64 = 4.0;
    /// Calories per gram of fat
    pub const FAT: f64 = 9.0;
}

/// Macro-split day classification thresholds
pub mod macro_split {
    /// Share of daily calories from protein that marks a high-protein day
    pub const HIGH_PROTEIN_CALORIE_RATIO: f64 = 0.30;
    /// Share of daily calories from carbohydrates that marks a high-carb day
    pub const HIGH_CARB_CALORIE_RATIO: f64 = 0.50;
}

/// Hydration classification thresholds
pub mod hydration {
    /// Glasses of water per day that count as meeting the hydration goal
    pub const DAILY_GLASSES_GOAL: u32 = 8;
}

/// Calorie-target adherence thresholds
pub mod adherence {
    /// Relative band around the daily target that still counts as on-target
    pub const TARGET_BAND_RATIO: f64 = 0.10;
}

/// Food mood-ranking thresholds
pub mod food_ranking {
    /// Minimum days a food must appear before it is ranked
    pub const MIN_OCCURRENCES: usize = 2;
    /// Default number of foods returned per ranking
    pub const DEFAULT_LIMIT: usize = 5;
}

/// Meal-timing analysis thresholds
pub mod timing {
    /// First hour of day shown in the hourly calorie distribution
    pub const DISPLAY_HOUR_START: u32 = 5;
    /// Last hour of day shown in the hourly calorie distribution
    pub const DISPLAY_HOUR_END: u32 = 23;
    /// Standard deviation (minutes) at which a meal type scores 50/100
    pub const HALF_SCORE_DEVIATION_MIN: f64 = 45.0;
    /// Minimum occurrences of a meal type before it counts toward consistency
    pub const MIN_OCCURRENCES_FOR_CONSISTENCY: usize = 2;
}

/// Insight rule thresholds
pub mod insight_rules {
    /// Average breakfast time (minutes after midnight) considered late (10:00am)
    pub const LATE_BREAKFAST_MINUTES: f64 = 600.0;
    /// Average eating window (hours) considered wide
    pub const WIDE_WINDOW_HOURS: f64 = 14.0;
    /// Average eating window (hours) considered compressed
    pub const COMPRESSED_WINDOW_HOURS: f64 = 8.0;
    /// Consistency score at or above which the schedule reads as consistent
    pub const CONSISTENT_SCORE: u8 = 75;
    /// Consistency score at or below which the schedule reads as irregular
    pub const IRREGULAR_SCORE: u8 = 40;
    /// Hour of day from which eating counts as late-night
    pub const LATE_NIGHT_HOUR: u32 = 21;
    /// Share of daily calories after the late-night hour that triggers the rule
    pub const LATE_NIGHT_CALORIE_SHARE: f64 = 0.25;
    /// Minimum mood-score delta between buckets before a lift insight fires
    pub const MOOD_LIFT_MIN_DELTA: f64 = 1.0;
    /// Average mood at or above which a ranked food reads as a booster
    pub const BOOSTER_MIN_AVG_MOOD: f64 = 7.0;
    /// Average mood at or below which a ranked food reads as a drainer
    pub const DRAINER_MAX_AVG_MOOD: f64 = 4.0;
    /// Weekly mood average at or below which the low-trend rule fires
    pub const LOW_TREND_SCORE: f64 = 4.0;
}
