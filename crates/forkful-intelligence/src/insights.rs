// ABOUTME: Rule-based insight generation for timing and mood analytics
// ABOUTME: Tagged-variant insight enums with deterministic fixed-order rule evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Rule-based insight generation.
//!
//! Insights are tagged variants carrying the parameters that triggered
//! them; the UI layer owns all wording and localization. Rules are
//! evaluated in a fixed order and every matching rule fires, so the
//! output order is deterministic for identical input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::meal_timing::MealTimingAnalyzer;
use crate::mood_correlation::MoodFoodCorrelator;
use crate::stats;

/// Meal-timing insight variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimingInsight {
    /// Average breakfast lands at or after the late-breakfast threshold
    LateBreakfast {
        /// Average breakfast time as minutes after midnight
        average_minutes: f64,
    },
    /// Average eating window is at or above the wide threshold
    WideEatingWindow {
        /// Average window over multi-meal days, in hours
        average_hours: f64,
    },
    /// Average eating window is positive but at or below the compressed threshold
    CompressedEatingWindow {
        /// Average window over multi-meal days, in hours
        average_hours: f64,
    },
    /// Consistency score reached the consistent threshold
    ConsistentSchedule {
        /// The consistency score
        score: u8,
    },
    /// Consistency score fell to or below the irregular threshold
    IrregularSchedule {
        /// The consistency score
        score: u8,
    },
    /// A meaningful share of calories lands after the late-night hour
    LateNightEating {
        /// Share of all logged calories at or after the late-night hour
        calorie_share: f64,
    },
}

/// Mood-food insight variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoodInsight {
    /// High-protein days average meaningfully higher mood than balanced days
    ProteinMoodLift {
        /// Mood delta between high-protein and balanced days
        delta: f64,
    },
    /// Hydrated days average meaningfully higher mood than dehydrated days
    HydrationMoodLift {
        /// Mood delta between hydrated and dehydrated days
        delta: f64,
    },
    /// A frequently logged food coincides with high-mood days
    BoosterFood {
        /// The food name
        name: String,
        /// Mean mood of days the food was logged
        avg_mood: f64,
        /// Distinct days the food was logged
        frequency: usize,
    },
    /// A frequently logged food coincides with low-mood days
    DrainerFood {
        /// The food name
        name: String,
        /// Mean mood of days the food was logged
        avg_mood: f64,
        /// Distinct days the food was logged
        frequency: usize,
    },
    /// This week's mood average sits at or below the low-trend threshold
    LowMoodTrend {
        /// This week's mood average
        average: f64,
    },
}

/// Evaluate the timing rules in fixed order
///
/// Empty diaries produce no insights rather than firing the irregular
/// rule on a zero score.
#[must_use]
pub fn generate_timing_insights(analyzer: &MealTimingAnalyzer<'_>) -> Vec<TimingInsight> {
    let rules = &analyzer.config().insights;
    let mut out = Vec::new();

    if analyzer.entries().is_empty() {
        return out;
    }

    let averages = analyzer.average_meal_times();
    if let Some(breakfast) = &averages.breakfast {
        if breakfast.mean_minutes >= rules.late_breakfast_minutes {
            out.push(TimingInsight::LateBreakfast {
                average_minutes: breakfast.mean_minutes,
            });
        }
    }

    let windows: Vec<f64> = analyzer
        .eating_windows()
        .iter()
        .filter(|w| w.meal_count >= 2)
        .map(|w| w.window_hours)
        .collect();
    if let Some(average_hours) = stats::mean(&windows) {
        if average_hours >= rules.wide_window_hours {
            out.push(TimingInsight::WideEatingWindow { average_hours });
        } else if average_hours > 0.0 && average_hours <= rules.compressed_window_hours {
            out.push(TimingInsight::CompressedEatingWindow { average_hours });
        }
    }

    if analyzer.consistency_sample_types() > 0 {
        let score = analyzer.consistency_score();
        if score >= rules.consistent_score {
            out.push(TimingInsight::ConsistentSchedule { score });
        } else if score <= rules.irregular_score {
            out.push(TimingInsight::IrregularSchedule { score });
        }
    }

    if let Some(calorie_share) = analyzer.calorie_share_from_hour(rules.late_night_hour) {
        if calorie_share >= rules.late_night_calorie_share {
            out.push(TimingInsight::LateNightEating { calorie_share });
        }
    }

    out
}

/// Evaluate the mood rules in fixed order
#[must_use]
pub fn generate_mood_insights(
    correlator: &MoodFoodCorrelator,
    as_of: NaiveDate,
) -> Vec<MoodInsight> {
    let rules = &correlator.config().insights;
    let mut out = Vec::new();

    if correlator.joined_day_count() == 0 {
        return out;
    }

    let split = correlator.mood_by_macro_split();
    if let (Some(protein_avg), Some(balanced_avg)) = (split.high_protein.avg, split.balanced.avg) {
        let delta = protein_avg - balanced_avg;
        if delta >= rules.mood_lift_min_delta {
            out.push(MoodInsight::ProteinMoodLift { delta });
        }
    }

    let hydration = correlator.mood_by_hydration();
    if let (Some(hydrated_avg), Some(dehydrated_avg)) =
        (hydration.hydrated.avg, hydration.dehydrated.avg)
    {
        let delta = hydrated_avg - dehydrated_avg;
        if delta >= rules.mood_lift_min_delta {
            out.push(MoodInsight::HydrationMoodLift { delta });
        }
    }

    if let Some(best) = correlator.best_foods_for_mood(1).into_iter().next() {
        if best.avg_mood >= rules.booster_min_avg_mood {
            out.push(MoodInsight::BoosterFood {
                name: best.name,
                avg_mood: best.avg_mood,
                frequency: best.frequency,
            });
        }
    }

    if let Some(worst) = correlator.worst_foods_for_mood(1).into_iter().next() {
        if worst.avg_mood <= rules.drainer_max_avg_mood {
            out.push(MoodInsight::DrainerFood {
                name: worst.name,
                avg_mood: worst.avg_mood,
                frequency: worst.frequency,
            });
        }
    }

    let weekly = correlator.weekly_mood_average(as_of);
    if let Some(average) = weekly.this_week {
        if average <= rules.low_trend_score {
            out.push(MoodInsight::LowMoodTrend { average });
        }
    }

    out
}
