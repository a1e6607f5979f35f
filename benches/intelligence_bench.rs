// ABOUTME: Criterion benchmarks for the Forkful analytics engine
// ABOUTME: Measures meal-timing analysis and mood-food correlation over growing histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Criterion benchmarks for the analytics engine.
//!
//! Measures the meal-timing analyzer and the mood-food correlator over
//! synthetic histories of increasing length, which is the axis the
//! dashboard cares about: report latency as the diary grows.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use forkful_analytics::intelligence::{MealTimingAnalyzer, MoodFoodCorrelator};
use forkful_analytics::models::{
    HydrationLog, MealLogBuilder, MealLogEntry, MealType, MoodEntry, NutritionTargets,
};

/// History lengths (days) benchmarked
const HISTORY_DAYS: [usize; 3] = [30, 90, 365];

const FOODS: [&str; 4] = ["Oatmeal", "Chicken salad", "Grilled salmon", "Veggie pizza"];

/// Deterministic synthetic diary: index arithmetic instead of RNG so
/// every run measures identical input
fn generate_history(days: usize) -> (Vec<MealLogEntry>, Vec<MoodEntry>, Vec<HydrationLog>) {
    let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let mut meals = Vec::new();
    let mut moods = Vec::new();
    let mut hydration = Vec::new();

    for index in 0..days {
        let day = end - Duration::days(i64::try_from(index).unwrap());
        for (slot, (meal_type, base_minute)) in [
            (MealType::Breakfast, 7 * 60 + 30),
            (MealType::Lunch, 12 * 60 + 30),
            (MealType::Dinner, 19 * 60),
        ]
        .into_iter()
        .enumerate()
        {
            let minute = base_minute + ((index * 13 + slot * 7) % 45) as i64 - 22;
            let naive = day
                .and_hms_opt((minute / 60) as u32, (minute % 60) as u32, 0)
                .unwrap();
            let calories = 300.0 + ((index * 31 + slot * 97) % 400) as f64;
            meals.push(
                MealLogBuilder::new(
                    FOODS[(index + slot) % FOODS.len()],
                    meal_type,
                    Utc.from_utc_datetime(&naive),
                    calories,
                )
                .protein_g(20.0 + ((index * 7) % 30) as f64)
                .carbohydrates_g(40.0 + ((index * 11) % 60) as f64)
                .fat_g(10.0 + ((index * 5) % 20) as f64)
                .build(),
            );
        }

        let score = 1 + u8::try_from((index * 3) % 10).unwrap();
        moods.push(MoodEntry::new(day, score).unwrap());
        hydration.push(HydrationLog::new(day, 4 + u32::try_from(index % 7).unwrap()));
    }

    (meals, moods, hydration)
}

fn bench_meal_timing(c: &mut Criterion) {
    let mut group = c.benchmark_group("meal_timing");
    for days in HISTORY_DAYS {
        let (meals, _, _) = generate_history(days);
        group.throughput(Throughput::Elements(meals.len() as u64));

        group.bench_with_input(BenchmarkId::new("consistency_score", days), &meals, |b, meals| {
            b.iter(|| MealTimingAnalyzer::new(black_box(meals)).consistency_score());
        });
        group.bench_with_input(BenchmarkId::new("full_report", days), &meals, |b, meals| {
            b.iter(|| MealTimingAnalyzer::new(black_box(meals)).report());
        });
    }
    group.finish();
}

fn bench_mood_correlation(c: &mut Criterion) {
    let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let targets = Some(NutritionTargets::new(2200.0));

    let mut group = c.benchmark_group("mood_correlation");
    for days in HISTORY_DAYS {
        let (meals, moods, hydration) = generate_history(days);
        group.throughput(Throughput::Elements(meals.len() as u64));

        group.bench_with_input(BenchmarkId::new("full_report", days), &days, |b, _| {
            b.iter(|| {
                MoodFoodCorrelator::new(
                    black_box(&meals),
                    black_box(&moods),
                    black_box(&hydration),
                    targets,
                )
                .report(as_of)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_meal_timing, bench_mood_correlation);
criterion_main!(benches);
