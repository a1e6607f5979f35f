// ABOUTME: Unit tests for the meal-timing analyzer
// ABOUTME: Covers average times, eating windows, hourly distribution, and consistency scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use forkful_analytics::intelligence::MealTimingAnalyzer;
use forkful_analytics::models::{MealLogBuilder, MealLogEntry, MealType};

fn entry(
    (year, month, day): (i32, u32, u32),
    hour: u32,
    minute: u32,
    meal_type: MealType,
    calories: f64,
) -> MealLogEntry {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let logged_at = Utc.from_utc_datetime(&date.and_hms_opt(hour, minute, 0).unwrap());
    MealLogBuilder::new("Test meal", meal_type, logged_at, calories).build()
}

#[test]
fn test_average_breakfast_time_across_days() {
    // Two breakfasts, 8:00 and 8:10 on different days => "8:05am", count 2
    let entries = vec![
        entry((2025, 3, 10), 8, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 11), 8, 10, MealType::Breakfast, 320.0),
    ];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let averages = analyzer.average_meal_times();

    let breakfast = averages.breakfast.expect("breakfast average present");
    assert_eq!(breakfast.formatted, "8:05am");
    assert_eq!(breakfast.count, 2);
    assert!((breakfast.mean_minutes - 485.0).abs() < f64::EPSILON);
}

#[test]
fn test_average_time_empty_group_is_none_not_zero() {
    let entries = vec![entry((2025, 3, 10), 19, 0, MealType::Dinner, 600.0)];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let averages = analyzer.average_meal_times();

    assert!(averages.breakfast.is_none());
    assert!(averages.lunch.is_none());
    assert!(averages.snack.is_none());
    assert!(averages.dinner.is_some());
    assert!(averages.get(MealType::Dinner).is_some());
}

#[test]
fn test_average_time_twelve_hour_edges() {
    // 00:15 formats as 12:15am, 12:05 as 12:05pm
    let entries = vec![
        entry((2025, 3, 10), 0, 15, MealType::Snack, 120.0),
        entry((2025, 3, 10), 12, 5, MealType::Lunch, 450.0),
    ];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let averages = analyzer.average_meal_times();

    assert_eq!(averages.snack.unwrap().formatted, "12:15am");
    assert_eq!(averages.lunch.unwrap().formatted, "12:05pm");
}

#[test]
fn test_eating_window_twelve_hours() {
    // 08:00 and 20:00 on the same day => 12.0 hours
    let entries = vec![
        entry((2025, 3, 10), 8, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 10), 20, 0, MealType::Dinner, 650.0),
    ];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let windows = analyzer.eating_windows();

    assert_eq!(windows.len(), 1);
    assert!((windows[0].window_hours - 12.0).abs() < f64::EPSILON);
    assert_eq!(windows[0].meal_count, 2);
}

#[test]
fn test_eating_window_single_meal_is_zero_with_count() {
    let entries = vec![entry((2025, 3, 10), 13, 0, MealType::Lunch, 500.0)];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let windows = analyzer.eating_windows();

    assert_eq!(windows.len(), 1);
    assert!((windows[0].window_hours - 0.0).abs() < f64::EPSILON);
    assert_eq!(windows[0].meal_count, 1);
}

#[test]
fn test_eating_windows_sorted_and_rounded() {
    let entries = vec![
        // Second day logged first: 9:00 -> 18:20 is 9.33.. hours => 9.3
        entry((2025, 3, 11), 9, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 11), 18, 20, MealType::Dinner, 640.0),
        entry((2025, 3, 10), 7, 30, MealType::Breakfast, 310.0),
        entry((2025, 3, 10), 19, 30, MealType::Dinner, 620.0),
    ];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let windows = analyzer.eating_windows();

    assert_eq!(windows.len(), 2);
    assert!(windows[0].day < windows[1].day);
    assert!((windows[0].window_hours - 12.0).abs() < f64::EPSILON);
    assert!((windows[1].window_hours - 9.3).abs() < f64::EPSILON);
    for window in &windows {
        assert!(window.window_hours >= 0.0);
    }
}

#[test]
fn test_hourly_distribution_averages_per_bucket() {
    let entries = vec![
        entry((2025, 3, 10), 8, 5, MealType::Breakfast, 300.0),
        entry((2025, 3, 11), 8, 40, MealType::Breakfast, 400.0),
        entry((2025, 3, 10), 23, 10, MealType::Snack, 180.0),
    ];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let distribution = analyzer.hourly_distribution();

    assert_eq!(distribution.len(), 2);
    assert_eq!(distribution[0].hour, 8);
    assert!((distribution[0].avg_calories - 350.0).abs() < f64::EPSILON);
    assert_eq!(distribution[0].meal_count, 2);
    assert_eq!(distribution[1].hour, 23);
    assert_eq!(distribution[1].meal_count, 1);
}

#[test]
fn test_hourly_distribution_respects_display_range() {
    // 02:00 falls outside the 5-23 display range and must not appear
    let entries = vec![
        entry((2025, 3, 10), 2, 0, MealType::Snack, 200.0),
        entry((2025, 3, 10), 5, 0, MealType::Breakfast, 280.0),
    ];
    let analyzer = MealTimingAnalyzer::new(&entries);
    let distribution = analyzer.hourly_distribution();

    assert_eq!(distribution.len(), 1);
    assert_eq!(distribution[0].hour, 5);
}

#[test]
fn test_hourly_distribution_empty_diary() {
    let analyzer = MealTimingAnalyzer::new(&[]);
    assert!(analyzer.hourly_distribution().is_empty());
}

#[test]
fn test_consistency_score_empty_diary_is_zero() {
    let analyzer = MealTimingAnalyzer::new(&[]);
    assert_eq!(analyzer.consistency_score(), 0);
}

#[test]
fn test_consistency_score_identical_times_is_hundred() {
    let mut entries = Vec::new();
    for day in 10..13 {
        entries.push(entry((2025, 3, day), 8, 0, MealType::Breakfast, 300.0));
        entries.push(entry((2025, 3, day), 13, 0, MealType::Lunch, 500.0));
        entries.push(entry((2025, 3, day), 19, 30, MealType::Dinner, 650.0));
    }
    let analyzer = MealTimingAnalyzer::new(&entries);
    assert_eq!(analyzer.consistency_score(), 100);
}

#[test]
fn test_consistency_score_decreases_with_variance() {
    // Tight schedule: breakfast within ten minutes day to day
    let tight = vec![
        entry((2025, 3, 10), 8, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 11), 8, 10, MealType::Breakfast, 300.0),
        entry((2025, 3, 12), 8, 5, MealType::Breakfast, 300.0),
    ];
    // Erratic schedule: breakfast swings by hours
    let erratic = vec![
        entry((2025, 3, 10), 6, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 11), 11, 30, MealType::Breakfast, 300.0),
        entry((2025, 3, 12), 9, 15, MealType::Breakfast, 300.0),
    ];

    let tight_score = MealTimingAnalyzer::new(&tight).consistency_score();
    let erratic_score = MealTimingAnalyzer::new(&erratic).consistency_score();

    assert!(tight_score <= 100);
    assert!(tight_score > erratic_score);
}

#[test]
fn test_consistency_score_ignores_single_occurrence_types() {
    // One lone snack must not drag down an otherwise perfect schedule
    let entries = vec![
        entry((2025, 3, 10), 8, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 11), 8, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 10), 16, 45, MealType::Snack, 150.0),
    ];
    let analyzer = MealTimingAnalyzer::new(&entries);
    assert_eq!(analyzer.consistency_score(), 100);

    // Only single occurrences => nothing qualifies => 0
    let singles = vec![
        entry((2025, 3, 10), 8, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 10), 13, 0, MealType::Lunch, 500.0),
    ];
    assert_eq!(MealTimingAnalyzer::new(&singles).consistency_score(), 0);
}

#[test]
fn test_report_is_deterministic() {
    let entries = vec![
        entry((2025, 3, 10), 8, 0, MealType::Breakfast, 300.0),
        entry((2025, 3, 10), 12, 30, MealType::Lunch, 520.0),
        entry((2025, 3, 11), 8, 20, MealType::Breakfast, 310.0),
        entry((2025, 3, 11), 19, 0, MealType::Dinner, 640.0),
    ];
    let first = MealTimingAnalyzer::new(&entries).report();
    let second = MealTimingAnalyzer::new(&entries).report();
    assert_eq!(first, second);
}
