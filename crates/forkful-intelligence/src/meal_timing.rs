// ABOUTME: Meal-timing analysis over food diary entries
// ABOUTME: Average meal times, eating windows, hourly distribution, and consistency scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Meal-timing analysis.
//!
//! Derives per-meal-type average times, daily eating windows, an hourly
//! calorie distribution, and a 0-100 consistency score from the diary
//! snapshot. All queries are pure: the same entry list always produces
//! the same output.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use forkful_core::clock::format_clock_time;
use forkful_core::models::{MealLogEntry, MealType};

use crate::config::IntelligenceConfig;
use crate::insights::{self, TimingInsight};
use crate::providers::DailyLogProvider;
use crate::stats;

/// Average logged time for one meal type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTimeAverage {
    /// Meal type this average describes
    pub meal_type: MealType,
    /// Mean time as minutes after midnight
    pub mean_minutes: f64,
    /// Mean time on a 12-hour clock, e.g. `"8:05am"`
    pub formatted: String,
    /// Number of diary entries behind the average
    pub count: usize,
}

/// Per-meal-type average times; types with no entries are `None`, never zero
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AverageMealTimes {
    /// Average breakfast time, if any breakfasts were logged
    pub breakfast: Option<MealTimeAverage>,
    /// Average lunch time, if any lunches were logged
    pub lunch: Option<MealTimeAverage>,
    /// Average dinner time, if any dinners were logged
    pub dinner: Option<MealTimeAverage>,
    /// Average snack time, if any snacks were logged
    pub snack: Option<MealTimeAverage>,
}

impl AverageMealTimes {
    /// Look up the average for a meal type
    #[must_use]
    pub const fn get(&self, meal_type: MealType) -> Option<&MealTimeAverage> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => self.snack.as_ref(),
        }
    }
}

/// Eating window for one calendar day
///
/// `window_hours` is `0.0` both for single-meal days and for days where
/// all meals were logged at the same minute; callers distinguish the two
/// through `meal_count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyEatingWindow {
    /// The calendar day
    pub day: NaiveDate,
    /// Hours between the first and last meal, rounded to one decimal
    pub window_hours: f64,
    /// Number of meals logged that day
    pub meal_count: usize,
}

/// Average calories for one hour-of-day bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HourlyCalories {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Mean calories of entries logged in this hour across history
    pub avg_calories: f64,
    /// Number of entries behind the average
    pub meal_count: usize,
}

/// Full meal-timing report for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTimingReport {
    /// Per-meal-type average times
    pub average_times: AverageMealTimes,
    /// Eating window per logged day, ascending by day
    pub eating_windows: Vec<DailyEatingWindow>,
    /// Populated hourly calorie buckets within the display range
    pub hourly_distribution: Vec<HourlyCalories>,
    /// Meal-timing consistency score (0-100)
    pub consistency_score: u8,
    /// Rule-based timing insights, in fixed rule order
    pub insights: Vec<TimingInsight>,
}

/// Meal-timing analyzer over a diary snapshot
pub struct MealTimingAnalyzer<'a> {
    entries: &'a [MealLogEntry],
    config: IntelligenceConfig,
}

impl<'a> MealTimingAnalyzer<'a> {
    /// Create an analyzer with the default configuration
    #[must_use]
    pub fn new(entries: &'a [MealLogEntry]) -> Self {
        Self::with_config(entries, IntelligenceConfig::default())
    }

    /// Create an analyzer with a custom configuration
    #[must_use]
    pub const fn with_config(entries: &'a [MealLogEntry], config: IntelligenceConfig) -> Self {
        Self { entries, config }
    }

    /// Create an analyzer over a provider's current diary snapshot
    #[must_use]
    pub fn from_provider<P: DailyLogProvider>(provider: &'a P) -> Self {
        Self::new(provider.meal_logs())
    }

    /// The diary snapshot under analysis
    #[must_use]
    pub const fn entries(&self) -> &[MealLogEntry] {
        self.entries
    }

    /// The configuration in effect
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Average logged time per meal type
    ///
    /// Meal times cluster within the waking day and do not wrap midnight,
    /// so an ordinary arithmetic mean over minutes-after-midnight is used.
    /// Types with no entries are `None`.
    #[must_use]
    pub fn average_meal_times(&self) -> AverageMealTimes {
        let grouped = self.grouped_times();
        AverageMealTimes {
            breakfast: Self::summarize_times(MealType::Breakfast, grouped.get(&MealType::Breakfast)),
            lunch: Self::summarize_times(MealType::Lunch, grouped.get(&MealType::Lunch)),
            dinner: Self::summarize_times(MealType::Dinner, grouped.get(&MealType::Dinner)),
            snack: Self::summarize_times(MealType::Snack, grouped.get(&MealType::Snack)),
        }
    }

    fn summarize_times(meal_type: MealType, times: Option<&Vec<f64>>) -> Option<MealTimeAverage> {
        let times = times?;
        let mean_minutes = stats::mean(times)?;
        Some(MealTimeAverage {
            meal_type,
            mean_minutes,
            formatted: format_clock_time(mean_minutes),
            count: times.len(),
        })
    }

    /// Eating window per distinct logged day, ascending by day
    #[must_use]
    pub fn eating_windows(&self) -> Vec<DailyEatingWindow> {
        let mut per_day: HashMap<NaiveDate, (f64, f64, usize)> = HashMap::new();
        for entry in self.entries {
            let minutes = entry.minutes_since_midnight();
            per_day
                .entry(entry.day())
                .and_modify(|(first, last, count)| {
                    *first = first.min(minutes);
                    *last = last.max(minutes);
                    *count += 1;
                })
                .or_insert((minutes, minutes, 1));
        }

        let mut windows: Vec<DailyEatingWindow> = per_day
            .into_iter()
            .map(|(day, (first, last, meal_count))| {
                let window_hours = if meal_count >= 2 {
                    stats::round_1dp((last - first) / 60.0)
                } else {
                    0.0
                };
                DailyEatingWindow {
                    day,
                    window_hours,
                    meal_count,
                }
            })
            .collect();
        windows.sort_by_key(|w| w.day);
        windows
    }

    /// Mean calories per populated hour-of-day bucket
    ///
    /// Only hours inside the configured display range with at least one
    /// entry are returned, ascending by hour.
    #[must_use]
    pub fn hourly_distribution(&self) -> Vec<HourlyCalories> {
        let mut buckets: HashMap<u32, (f64, usize)> = HashMap::new();
        for entry in self.entries {
            let bucket = buckets.entry(entry.hour()).or_insert((0.0, 0));
            bucket.0 += entry.calories;
            bucket.1 += 1;
        }

        let range = self.config.timing.display_hour_start..=self.config.timing.display_hour_end;
        let mut distribution: Vec<HourlyCalories> = buckets
            .into_iter()
            .filter(|(hour, _)| range.contains(hour))
            .map(|(hour, (total, meal_count))| {
                #[allow(clippy::cast_precision_loss)]
                let avg_calories = total / meal_count as f64;
                HourlyCalories {
                    hour,
                    avg_calories,
                    meal_count,
                }
            })
            .collect();
        distribution.sort_by_key(|bucket| bucket.hour);
        distribution
    }

    /// Meal-timing consistency score (0-100)
    ///
    /// Per meal type with enough occurrences, the population standard
    /// deviation of time-of-day (minutes) is mapped through
    /// `100 / (1 + sd / half_score_deviation_min)` and the qualifying
    /// types are averaged without weighting. Identical times every day
    /// score 100; no qualifying data scores 0.
    #[must_use]
    pub fn consistency_score(&self) -> u8 {
        let scores: Vec<f64> = self
            .grouped_times()
            .values()
            .filter(|times| times.len() >= self.config.timing.min_occurrences_for_consistency)
            .filter_map(|times| stats::population_std_dev(times))
            .map(|sd| 100.0 / (1.0 + sd / self.config.timing.half_score_deviation_min))
            .collect();

        stats::mean(&scores).map_or(0, Self::to_score)
    }

    /// Clamp and round a raw score into the 0-100 integer range
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_score(raw: f64) -> u8 {
        raw.round().clamp(0.0, 100.0) as u8
    }

    /// Number of meal types with enough occurrences to score consistency
    #[must_use]
    pub fn consistency_sample_types(&self) -> usize {
        self.grouped_times()
            .values()
            .filter(|times| times.len() >= self.config.timing.min_occurrences_for_consistency)
            .count()
    }

    fn grouped_times(&self) -> HashMap<MealType, Vec<f64>> {
        let mut grouped: HashMap<MealType, Vec<f64>> = HashMap::new();
        for entry in self.entries {
            grouped
                .entry(entry.meal_type)
                .or_default()
                .push(entry.minutes_since_midnight());
        }
        grouped
    }

    /// Share of all logged calories at or after the given hour
    ///
    /// `None` when no calories are logged at all.
    #[must_use]
    pub fn calorie_share_from_hour(&self, hour: u32) -> Option<f64> {
        let total: f64 = self.entries.iter().map(|e| e.calories).sum();
        if total <= 0.0 {
            return None;
        }
        let late: f64 = self
            .entries
            .iter()
            .filter(|e| e.hour() >= hour)
            .map(|e| e.calories)
            .sum();
        Some(late / total)
    }

    /// Rule-based timing insights, in fixed rule order
    #[must_use]
    pub fn insights(&self) -> Vec<TimingInsight> {
        insights::generate_timing_insights(self)
    }

    /// Assemble the full meal-timing report
    #[must_use]
    pub fn report(&self) -> MealTimingReport {
        tracing::debug!(entries = self.entries.len(), "building meal-timing report");
        MealTimingReport {
            average_times: self.average_meal_times(),
            eating_windows: self.eating_windows(),
            hourly_distribution: self.hourly_distribution(),
            consistency_score: self.consistency_score(),
            insights: self.insights(),
        }
    }
}
