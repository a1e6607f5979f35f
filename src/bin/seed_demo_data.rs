// ABOUTME: Demo data seeder for Forkful dashboard testing
// ABOUTME: Generates a deterministic synthetic diary and prints the full analytics report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Demo data seeder for the Forkful analytics engine.
//!
//! Generates a deterministic synthetic diary (meals, moods, hydration)
//! and prints the meal-timing and mood-food reports as JSON, for
//! dashboard prototyping and manual inspection of the engine output.
//!
//! Usage:
//! ```bash
//! # Seed 30 days with the default seed
//! cargo run --bin seed-demo-data
//!
//! # Longer history, different seed
//! cargo run --bin seed-demo-data -- --days 90 --seed 7
//!
//! # Verbose logging
//! cargo run --bin seed-demo-data -- -v
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use forkful_analytics::intelligence::{
    DailyLogProvider, InMemoryLogStore, MealTimingAnalyzer, MealTimingReport, MoodFoodCorrelator,
    MoodReport,
};
use forkful_analytics::models::{HydrationLog, MealLogBuilder, MealType, MoodEntry, NutritionTargets};

/// Daily calorie goal assigned to the demo user
const DEMO_CALORIE_TARGET: f64 = 2200.0;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Forkful demo data seeder",
    long_about = "Generate a deterministic synthetic diary and print the analytics reports"
)]
struct SeedArgs {
    /// Number of days of historical data to generate
    #[arg(long, default_value = "30")]
    days: u32,

    /// RNG seed; identical seeds produce identical reports
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// A demo food with its per-serving nutrition
struct DemoFood {
    name: &'static str,
    calories: f64,
    protein_g: f64,
    carbohydrates_g: f64,
    fat_g: f64,
}

const BREAKFASTS: [DemoFood; 3] = [
    DemoFood { name: "Oatmeal with berries", calories: 340.0, protein_g: 12.0, carbohydrates_g: 58.0, fat_g: 7.0 },
    DemoFood { name: "Scrambled eggs", calories: 280.0, protein_g: 19.0, carbohydrates_g: 3.0, fat_g: 21.0 },
    DemoFood { name: "Greek yogurt", calories: 220.0, protein_g: 17.0, carbohydrates_g: 24.0, fat_g: 6.0 },
];

const LUNCHES: [DemoFood; 3] = [
    DemoFood { name: "Chicken salad", calories: 430.0, protein_g: 38.0, carbohydrates_g: 18.0, fat_g: 22.0 },
    DemoFood { name: "Pasta bowl", calories: 620.0, protein_g: 21.0, carbohydrates_g: 92.0, fat_g: 16.0 },
    DemoFood { name: "Rice and beans", calories: 520.0, protein_g: 18.0, carbohydrates_g: 88.0, fat_g: 9.0 },
];

const DINNERS: [DemoFood; 3] = [
    DemoFood { name: "Grilled salmon", calories: 540.0, protein_g: 42.0, carbohydrates_g: 28.0, fat_g: 26.0 },
    DemoFood { name: "Veggie pizza", calories: 740.0, protein_g: 26.0, carbohydrates_g: 98.0, fat_g: 27.0 },
    DemoFood { name: "Beef burger", calories: 680.0, protein_g: 34.0, carbohydrates_g: 52.0, fat_g: 36.0 },
];

const SNACKS: [DemoFood; 3] = [
    DemoFood { name: "Banana", calories: 100.0, protein_g: 1.0, carbohydrates_g: 26.0, fat_g: 0.0 },
    DemoFood { name: "Dark chocolate", calories: 170.0, protein_g: 2.0, carbohydrates_g: 13.0, fat_g: 12.0 },
    DemoFood { name: "Mixed nuts", calories: 200.0, protein_g: 6.0, carbohydrates_g: 7.0, fat_g: 17.0 },
];

/// Combined report printed as JSON
#[derive(Serialize)]
struct DemoReport {
    meal_timing: MealTimingReport,
    mood: MoodReport,
}

fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let end_day = Utc::now().date_naive();
    let store = seed_store(args.days, args.seed, end_day)?;
    info!(
        days = args.days,
        seed = args.seed,
        meals = store.meal_logs().len(),
        "generated demo diary"
    );

    let analyzer = MealTimingAnalyzer::from_provider(&store);
    let correlator = MoodFoodCorrelator::from_provider(&store);
    let report = DemoReport {
        meal_timing: analyzer.report(),
        mood: correlator.report(end_day),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Generate `days` days of synthetic logs ending at `end_day`
fn seed_store(days: u32, seed: u64, end_day: NaiveDate) -> Result<InMemoryLogStore> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = InMemoryLogStore::new();
    store.set_targets(NutritionTargets::new(DEMO_CALORIE_TARGET));

    for offset in 0..days {
        let day = end_day - Duration::days(i64::from(offset));

        let breakfast = &BREAKFASTS[rng.gen_range(0..BREAKFASTS.len())];
        let lunch = &LUNCHES[rng.gen_range(0..LUNCHES.len())];
        let dinner = &DINNERS[rng.gen_range(0..DINNERS.len())];

        log_meal(&mut store, day, 7 * 60 + 30, &mut rng, MealType::Breakfast, breakfast)?;
        log_meal(&mut store, day, 12 * 60 + 30, &mut rng, MealType::Lunch, lunch)?;
        log_meal(&mut store, day, 19 * 60, &mut rng, MealType::Dinner, dinner)?;

        let mut protein_g = breakfast.protein_g + lunch.protein_g + dinner.protein_g;
        let mut calories = breakfast.calories + lunch.calories + dinner.calories;
        if rng.gen_bool(0.5) {
            let snack = &SNACKS[rng.gen_range(0..SNACKS.len())];
            log_meal(&mut store, day, 15 * 60 + 30, &mut rng, MealType::Snack, snack)?;
            protein_g += snack.protein_g;
            calories += snack.calories;
        }

        let glasses = rng.gen_range(4..=10);
        store.log_hydration(HydrationLog::new(day, glasses));

        // Mood loosely tracks protein share and hydration so the
        // correlation views have signal to surface.
        let mut mood = 5 + rng.gen_range(0..=2);
        if protein_g * 4.0 / calories >= 0.30 {
            mood += 2;
        }
        if glasses >= 8 {
            mood += 1;
        }
        let score = u8::try_from(mood.clamp(1, 10))?;
        store.log_mood(MoodEntry::new(day, score)?);
    }

    Ok(store)
}

/// Log one meal at a jittered minute-of-day
fn log_meal(
    store: &mut InMemoryLogStore,
    day: NaiveDate,
    base_minute: i64,
    rng: &mut StdRng,
    meal_type: MealType,
    food: &DemoFood,
) -> Result<()> {
    let minute = (base_minute + rng.gen_range(-25..=25)).clamp(0, 23 * 60 + 59);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (hour, min) = ((minute / 60) as u32, (minute % 60) as u32);
    let naive = day
        .and_hms_opt(hour, min, 0)
        .context("minute-of-day out of range")?;
    let logged_at = Utc.from_utc_datetime(&naive);

    store.log_meal(
        MealLogBuilder::new(food.name, meal_type, logged_at, food.calories)
            .protein_g(food.protein_g)
            .carbohydrates_g(food.carbohydrates_g)
            .fat_g(food.fat_g)
            .build(),
    );
    Ok(())
}
