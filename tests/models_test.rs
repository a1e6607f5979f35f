// ABOUTME: Unit tests for core domain models and clock helpers
// ABOUTME: Covers meal type parsing, mood validation, builders, and 12-hour formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use forkful_analytics::clock::{format_clock_time, minutes_since_midnight};
use forkful_analytics::errors::CoreError;
use forkful_analytics::models::{MealLogBuilder, MealType, MoodEntry};

#[test]
fn test_meal_type_parsing_roundtrip() {
    for meal_type in MealType::ALL {
        assert_eq!(MealType::from_str_lossy(meal_type.as_str()), meal_type);
    }
    assert_eq!(MealType::from_str_lossy("Breakfast"), MealType::Breakfast);
    assert_eq!(MealType::from_str_lossy("second dinner"), MealType::Snack);
}

#[test]
fn test_meal_log_builder_defaults_and_overrides() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let logged_at = Utc.from_utc_datetime(&date.and_hms_opt(8, 5, 0).unwrap());

    let entry = MealLogBuilder::new("Oatmeal", MealType::Breakfast, logged_at, 340.0)
        .protein_g(12.0)
        .build();

    assert_eq!(entry.name, "Oatmeal");
    assert!((entry.calories - 340.0).abs() < f64::EPSILON);
    assert!((entry.protein_g - 12.0).abs() < f64::EPSILON);
    assert!((entry.carbohydrates_g - 0.0).abs() < f64::EPSILON);
    assert!((entry.fat_g - 0.0).abs() < f64::EPSILON);
    assert_eq!(entry.day(), date);
    assert!((entry.minutes_since_midnight() - 485.0).abs() < f64::EPSILON);
    assert_eq!(entry.hour(), 8);
}

#[test]
fn test_meal_log_builder_distinct_ids() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let logged_at = Utc.from_utc_datetime(&date.and_hms_opt(8, 5, 0).unwrap());

    let first = MealLogBuilder::new("Oatmeal", MealType::Breakfast, logged_at, 340.0).build();
    let second = MealLogBuilder::new("Oatmeal", MealType::Breakfast, logged_at, 340.0).build();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_mood_entry_validates_score_range() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    assert!(MoodEntry::new(date, 1).is_ok());
    assert!(MoodEntry::new(date, 10).is_ok());
    assert_eq!(
        MoodEntry::new(date, 0).unwrap_err(),
        CoreError::MoodScoreOutOfRange { value: 0 }
    );
    assert_eq!(
        MoodEntry::new(date, 11).unwrap_err(),
        CoreError::MoodScoreOutOfRange { value: 11 }
    );
}

#[test]
fn test_mood_entry_sub_scores() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let entry = MoodEntry::new(date, 7)
        .unwrap()
        .with_energy(6)
        .unwrap()
        .with_focus(8)
        .unwrap();

    assert_eq!(entry.energy, Some(6));
    assert_eq!(entry.focus, Some(8));
    assert!((entry.score_f64() - 7.0).abs() < f64::EPSILON);

    let rejected = MoodEntry::new(date, 7).unwrap().with_energy(11);
    assert_eq!(
        rejected.unwrap_err(),
        CoreError::SubScoreOutOfRange {
            field: "energy",
            value: 11
        }
    );
}

#[test]
fn test_clock_formatting_edges() {
    assert_eq!(format_clock_time(0.0), "12:00am");
    assert_eq!(format_clock_time(485.0), "8:05am");
    assert_eq!(format_clock_time(720.0), "12:00pm");
    assert_eq!(format_clock_time(750.4), "12:30pm");
    assert_eq!(format_clock_time(1439.0), "11:59pm");
}

#[test]
fn test_minutes_since_midnight() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let ts = Utc.from_utc_datetime(&date.and_hms_opt(20, 0, 0).unwrap());
    assert!((minutes_since_midnight(&ts) - 1200.0).abs() < f64::EPSILON);
}
