// ABOUTME: Mood-food correlation over joined diary and mood check-in days
// ABOUTME: Macro-split, hydration, and adherence buckets plus food ranking and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Mood-food correlation.
//!
//! Joins diary entries with daily mood check-ins by calendar day and
//! derives per-bucket mood averages, ranked food lists, and weekly
//! trends. A "joined day" has at least one meal and a mood check-in;
//! every classification partitions the joined days exactly, so bucket
//! counts always sum to the joined-day count.

use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use forkful_core::models::{HydrationLog, MealLogEntry, MoodEntry, NutritionTargets};

use crate::config::IntelligenceConfig;
use crate::constants::calories_per_gram;
use crate::insights::{self, MoodInsight};
use crate::providers::DailyLogProvider;
use crate::stats;

/// Average mood for one classification bucket
///
/// `avg` is `None` when the bucket is empty; it is never `0.0` or NaN,
/// so "--" placeholders render correctly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MoodBucket {
    /// Mean mood score of the days in this bucket
    pub avg: Option<f64>,
    /// Number of days classified into this bucket
    pub count: usize,
}

impl MoodBucket {
    fn from_scores(scores: &[f64]) -> Self {
        Self {
            avg: stats::mean(scores),
            count: scores.len(),
        }
    }
}

/// Mood averages by macro-split day classification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroSplitMoods {
    /// Days where protein supplied at least the high-protein calorie share
    pub high_protein: MoodBucket,
    /// Days where carbohydrates supplied at least the high-carb calorie share
    pub high_carb: MoodBucket,
    /// Everything else
    pub balanced: MoodBucket,
}

/// Mood averages by hydration-goal classification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct HydrationMoods {
    /// Days at or above the hydration goal
    pub hydrated: MoodBucket,
    /// Days below the hydration goal (including days with no check-in)
    pub dehydrated: MoodBucket,
}

/// Mood averages by calorie-target adherence
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CalorieAdherenceMoods {
    /// Days below the target band
    pub under: MoodBucket,
    /// Days inside the target band (all days when no target is configured)
    pub on_target: MoodBucket,
    /// Days above the target band
    pub over: MoodBucket,
}

/// A food ranked by the average mood of days it was logged
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodMoodRank {
    /// Food name, first-seen casing
    pub name: String,
    /// Emoji tag from the keyword categorizer
    pub emoji: String,
    /// Number of distinct days the food was logged
    pub frequency: usize,
    /// Mean mood score of those days
    pub avg_mood: f64,
}

/// One point of the 7-day mood trend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodTrendPoint {
    /// The calendar day
    pub day: NaiveDate,
    /// Mood score that day, `None` when no check-in exists
    pub value: Option<f64>,
    /// Short weekday label, e.g. `"Mon"`
    pub label: String,
    /// Mood emoji for the score, `None` when no check-in exists
    pub emoji: Option<String>,
}

/// Week-over-week mood comparison
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeeklyMoodAverage {
    /// Mean mood over the 7 days ending at `as_of`
    pub this_week: Option<f64>,
    /// Mean mood over the 7 days before that
    pub last_week: Option<f64>,
    /// Rounded percentage change, `None` when either week has no data
    pub change_percent: Option<i32>,
}

/// Full mood-food report for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodReport {
    /// Mood by macro-split classification
    pub macro_split: MacroSplitMoods,
    /// Mood by hydration classification
    pub hydration: HydrationMoods,
    /// Mood by calorie-target adherence
    pub calorie_adherence: CalorieAdherenceMoods,
    /// Top mood-booster foods
    pub best_foods: Vec<FoodMoodRank>,
    /// Top mood-drainer foods
    pub worst_foods: Vec<FoodMoodRank>,
    /// 7-day mood trend ending at the report's `as_of` day
    pub trend: Vec<MoodTrendPoint>,
    /// Week-over-week mood comparison
    pub weekly: WeeklyMoodAverage,
    /// Rule-based mood insights, in fixed rule order
    pub insights: Vec<MoodInsight>,
}

/// One joined day: aggregated diary totals plus that day's mood
#[derive(Debug, Clone)]
struct JoinedDay {
    calories: f64,
    protein_g: f64,
    carbohydrates_g: f64,
    foods: Vec<String>,
    mood: f64,
    glasses: u32,
}

/// Mood-food correlator over joined diary and mood snapshots
pub struct MoodFoodCorrelator {
    days: Vec<JoinedDay>,
    mood_by_day: HashMap<NaiveDate, f64>,
    targets: Option<NutritionTargets>,
    config: IntelligenceConfig,
}

impl MoodFoodCorrelator {
    /// Build a correlator with the default configuration
    #[must_use]
    pub fn new(
        meals: &[MealLogEntry],
        moods: &[MoodEntry],
        hydration: &[HydrationLog],
        targets: Option<NutritionTargets>,
    ) -> Self {
        Self::with_config(meals, moods, hydration, targets, IntelligenceConfig::default())
    }

    /// Build a correlator with a custom configuration
    #[must_use]
    pub fn with_config(
        meals: &[MealLogEntry],
        moods: &[MoodEntry],
        hydration: &[HydrationLog],
        targets: Option<NutritionTargets>,
        config: IntelligenceConfig,
    ) -> Self {
        let mood_by_day: HashMap<NaiveDate, f64> =
            moods.iter().map(|m| (m.date, m.score_f64())).collect();
        let glasses_by_day: HashMap<NaiveDate, u32> =
            hydration.iter().map(|h| (h.date, h.glasses)).collect();

        let mut totals: HashMap<NaiveDate, JoinedDay> = HashMap::new();
        for entry in meals {
            let day = entry.day();
            let Some(&mood) = mood_by_day.get(&day) else {
                continue;
            };
            let joined = totals.entry(day).or_insert_with(|| JoinedDay {
                calories: 0.0,
                protein_g: 0.0,
                carbohydrates_g: 0.0,
                foods: Vec::new(),
                mood,
                glasses: glasses_by_day.get(&day).copied().unwrap_or(0),
            });
            joined.calories += entry.calories;
            joined.protein_g += entry.protein_g;
            joined.carbohydrates_g += entry.carbohydrates_g;
            joined.foods.push(entry.name.clone());
        }

        let mut keyed: Vec<(NaiveDate, JoinedDay)> = totals.into_iter().collect();
        keyed.sort_by_key(|(day, _)| *day);
        let days = keyed.into_iter().map(|(_, joined)| joined).collect();

        Self {
            days,
            mood_by_day,
            targets,
            config,
        }
    }

    /// Build a correlator over a provider's current snapshot
    #[must_use]
    pub fn from_provider<P: DailyLogProvider>(provider: &P) -> Self {
        Self::new(
            provider.meal_logs(),
            provider.mood_entries(),
            provider.hydration_logs(),
            provider.nutrition_targets(),
        )
    }

    /// Number of days with both diary and mood data
    #[must_use]
    pub fn joined_day_count(&self) -> usize {
        self.days.len()
    }

    /// The configuration in effect
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Mood averages by macro-split classification
    ///
    /// Each joined day lands in exactly one bucket: high-protein when
    /// protein supplies at least the configured calorie share, else
    /// high-carb when carbohydrates do, else balanced. Days with zero
    /// logged calories classify as balanced.
    #[must_use]
    pub fn mood_by_macro_split(&self) -> MacroSplitMoods {
        let cfg = &self.config.correlation;
        let mut high_protein = Vec::new();
        let mut high_carb = Vec::new();
        let mut balanced = Vec::new();

        for day in &self.days {
            if day.calories > 0.0 {
                let protein_share = day.protein_g * calories_per_gram::PROTEIN / day.calories;
                let carb_share = day.carbohydrates_g * calories_per_gram::CARBOHYDRATE / day.calories;
                if protein_share >= cfg.high_protein_ratio {
                    high_protein.push(day.mood);
                    continue;
                }
                if carb_share >= cfg.high_carb_ratio {
                    high_carb.push(day.mood);
                    continue;
                }
            }
            balanced.push(day.mood);
        }

        MacroSplitMoods {
            high_protein: MoodBucket::from_scores(&high_protein),
            high_carb: MoodBucket::from_scores(&high_carb),
            balanced: MoodBucket::from_scores(&balanced),
        }
    }

    /// Mood averages by hydration-goal classification
    ///
    /// Days without a hydration check-in count as zero glasses so no
    /// joined day is dropped from the partition.
    #[must_use]
    pub fn mood_by_hydration(&self) -> HydrationMoods {
        let goal = self.config.correlation.hydration_goal_glasses;
        let mut hydrated = Vec::new();
        let mut dehydrated = Vec::new();

        for day in &self.days {
            if day.glasses >= goal {
                hydrated.push(day.mood);
            } else {
                dehydrated.push(day.mood);
            }
        }

        HydrationMoods {
            hydrated: MoodBucket::from_scores(&hydrated),
            dehydrated: MoodBucket::from_scores(&dehydrated),
        }
    }

    /// Mood averages by calorie-target adherence
    ///
    /// With no configured target every joined day classifies as
    /// on-target rather than being dropped.
    #[must_use]
    pub fn mood_by_calorie_adherence(&self) -> CalorieAdherenceMoods {
        let band = self.config.correlation.target_band_ratio;
        let mut under = Vec::new();
        let mut on_target = Vec::new();
        let mut over = Vec::new();

        for day in &self.days {
            match self.targets {
                Some(targets) => {
                    let low = targets.daily_calories * (1.0 - band);
                    let high = targets.daily_calories * (1.0 + band);
                    if day.calories < low {
                        under.push(day.mood);
                    } else if day.calories > high {
                        over.push(day.mood);
                    } else {
                        on_target.push(day.mood);
                    }
                }
                None => on_target.push(day.mood),
            }
        }

        CalorieAdherenceMoods {
            under: MoodBucket::from_scores(&under),
            on_target: MoodBucket::from_scores(&on_target),
            over: MoodBucket::from_scores(&over),
        }
    }

    /// Foods ranked by descending average mood of the days they were logged
    ///
    /// A food must appear on at least the configured number of distinct
    /// days to be ranked; one-off entries are too noisy. Ties break by
    /// name so output is deterministic.
    #[must_use]
    pub fn best_foods_for_mood(&self, limit: usize) -> Vec<FoodMoodRank> {
        let mut ranked = self.ranked_foods();
        ranked.sort_by(|a, b| {
            b.avg_mood
                .partial_cmp(&a.avg_mood)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Foods ranked by ascending average mood of the days they were logged
    #[must_use]
    pub fn worst_foods_for_mood(&self, limit: usize) -> Vec<FoodMoodRank> {
        let mut ranked = self.ranked_foods();
        ranked.sort_by(|a, b| {
            a.avg_mood
                .partial_cmp(&b.avg_mood)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked.truncate(limit);
        ranked
    }

    #[allow(clippy::cast_precision_loss)]
    fn ranked_foods(&self) -> Vec<FoodMoodRank> {
        // Keyed by lowercased name; a food logged twice on one day
        // contributes that day's mood once.
        let mut by_food: HashMap<String, (String, f64, usize)> = HashMap::new();
        for day in &self.days {
            let distinct: BTreeSet<&String> = day.foods.iter().collect();
            for food in distinct {
                let key = food.to_lowercase();
                let slot = by_food.entry(key).or_insert_with(|| (food.clone(), 0.0, 0));
                slot.1 += day.mood;
                slot.2 += 1;
            }
        }

        by_food
            .into_values()
            .filter(|(_, _, count)| *count >= self.config.correlation.min_food_occurrences)
            .map(|(name, mood_sum, count)| {
                let emoji = food_emoji(&name).to_owned();
                FoodMoodRank {
                    name,
                    emoji,
                    frequency: count,
                    avg_mood: mood_sum / count as f64,
                }
            })
            .collect()
    }

    /// 7-day mood trend ending at `as_of`, one point per calendar day
    ///
    /// Days without a check-in carry `value: None` and no emoji; callers
    /// render them distinctly from a zero score.
    #[must_use]
    pub fn mood_trend(&self, as_of: NaiveDate) -> Vec<MoodTrendPoint> {
        (0..7)
            .rev()
            .map(|offset| {
                let day = as_of - Duration::days(offset);
                let value = self.mood_by_day.get(&day).copied();
                MoodTrendPoint {
                    day,
                    value,
                    label: day.format("%a").to_string(),
                    emoji: value.map(|score| mood_emoji(score).to_owned()),
                }
            })
            .collect()
    }

    /// Week-over-week mood comparison for the 14 days ending at `as_of`
    #[must_use]
    pub fn weekly_mood_average(&self, as_of: NaiveDate) -> WeeklyMoodAverage {
        let this_week = self.mean_mood_between(as_of - Duration::days(6), as_of);
        let last_week = self.mean_mood_between(as_of - Duration::days(13), as_of - Duration::days(7));

        let change_percent = match (this_week, last_week) {
            (Some(this), Some(last)) => {
                #[allow(clippy::cast_possible_truncation)]
                let rounded = (((this - last) / last) * 100.0).round() as i32;
                Some(rounded)
            }
            _ => None,
        };

        WeeklyMoodAverage {
            this_week,
            last_week,
            change_percent,
        }
    }

    fn mean_mood_between(&self, start: NaiveDate, end: NaiveDate) -> Option<f64> {
        let scores: Vec<f64> = self
            .mood_by_day
            .iter()
            .filter(|(day, _)| **day >= start && **day <= end)
            .map(|(_, score)| *score)
            .collect();
        stats::mean(&scores)
    }

    /// Rule-based mood insights, in fixed rule order
    #[must_use]
    pub fn insights(&self, as_of: NaiveDate) -> Vec<MoodInsight> {
        insights::generate_mood_insights(self, as_of)
    }

    /// Assemble the full mood-food report
    #[must_use]
    pub fn report(&self, as_of: NaiveDate) -> MoodReport {
        tracing::debug!(
            joined_days = self.days.len(),
            %as_of,
            "building mood-food report"
        );
        let limit = self.config.correlation.food_rank_limit;
        MoodReport {
            macro_split: self.mood_by_macro_split(),
            hydration: self.mood_by_hydration(),
            calorie_adherence: self.mood_by_calorie_adherence(),
            best_foods: self.best_foods_for_mood(limit),
            worst_foods: self.worst_foods_for_mood(limit),
            trend: self.mood_trend(as_of),
            weekly: self.weekly_mood_average(as_of),
            insights: self.insights(as_of),
        }
    }
}

/// Emoji tag for a mood score band
#[must_use]
pub fn mood_emoji(score: f64) -> &'static str {
    if score >= 8.0 {
        "😄"
    } else if score >= 6.0 {
        "🙂"
    } else if score >= 4.0 {
        "😐"
    } else {
        "😞"
    }
}

/// Emoji tag for a food name via keyword matching
#[must_use]
pub fn food_emoji(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    const TAGS: [(&str, &str); 14] = [
        ("salmon", "🐟"),
        ("fish", "🐟"),
        ("chicken", "🍗"),
        ("salad", "🥗"),
        ("egg", "🥚"),
        ("oat", "🥣"),
        ("yogurt", "🥣"),
        ("berr", "🫐"),
        ("banana", "🍌"),
        ("rice", "🍚"),
        ("pasta", "🍝"),
        ("pizza", "🍕"),
        ("burger", "🍔"),
        ("chocolate", "🍫"),
    ];
    for (keyword, emoji) in TAGS {
        if lower.contains(keyword) {
            return emoji;
        }
    }
    "🍽️"
}
