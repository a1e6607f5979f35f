// ABOUTME: Diet analytics engine for the Forkful platform
// ABOUTME: Meal-timing analysis, mood-food correlation, and insight generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

#![deny(unsafe_code)]

//! # Forkful Intelligence
//!
//! Analytics engine for the Forkful diet tracking app. Consumes immutable
//! snapshots of diary, mood, and hydration logs through the
//! [`providers::DailyLogProvider`] seam and produces derived statistics
//! for the app's dashboard views.
//!
//! Every computation here is a synchronous pure function over the current
//! snapshot: no persistence, no background state, no clocks. Queries that
//! are relative to "today" take an explicit `as_of` date so identical
//! input always yields identical output.

/// Threshold configuration with validation
pub mod config;

/// Named analysis thresholds organized by domain
pub mod constants;

/// Rule-based insight generation as tagged variants
pub mod insights;

/// Meal-timing analysis (average times, eating windows, consistency)
pub mod meal_timing;

/// Mood-food correlation (macro splits, food ranking, trends)
pub mod mood_correlation;

/// Data-provider seam between app state and the analytics engine
pub mod providers;

mod stats;

pub use config::{ConfigError, CorrelationConfig, InsightRules, IntelligenceConfig, TimingConfig};
pub use insights::{MoodInsight, TimingInsight};
pub use meal_timing::{
    AverageMealTimes, DailyEatingWindow, HourlyCalories, MealTimeAverage, MealTimingAnalyzer,
    MealTimingReport,
};
pub use mood_correlation::{
    CalorieAdherenceMoods, FoodMoodRank, HydrationMoods, MacroSplitMoods, MoodBucket,
    MoodFoodCorrelator, MoodReport, MoodTrendPoint, WeeklyMoodAverage,
};
pub use providers::{DailyLogProvider, InMemoryLogStore};
