// ABOUTME: Food diary models for meal logging and analysis
// ABOUTME: MealType, MealLogEntry, and MealLogBuilder definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal types in diary order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Parse meal type from string
    ///
    /// Unrecognized values are treated as snacks, matching how the diary
    /// flow buckets free-form entries.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            other => {
                tracing::warn!(meal_type = other, "unknown meal type, treating as snack");
                Self::Snack
            }
        }
    }

    /// Lowercase wire name for this meal type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// A single logged food entry in the diary
///
/// Immutable once logged; created by the diary flow and read-only to the
/// analytics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLogEntry {
    /// Unique identifier for this diary entry
    pub id: Uuid,
    /// Food name as entered or imported
    pub name: String,
    /// Meal category
    pub meal_type: MealType,
    /// Timestamp when the meal was eaten
    pub logged_at: DateTime<Utc>,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbohydrates_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl MealLogEntry {
    /// Calendar day this entry belongs to
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }

    /// Minutes after midnight at which the meal was logged
    #[must_use]
    pub fn minutes_since_midnight(&self) -> f64 {
        clock::minutes_since_midnight(&self.logged_at)
    }

    /// Hour of day (0-23) at which the meal was logged
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.logged_at.hour()
    }
}

/// Builder for `MealLogEntry`
///
/// Macro fields default to zero, matching diary entries where only
/// calories were captured.
#[derive(Debug, Clone)]
pub struct MealLogBuilder {
    id: Uuid,
    name: String,
    meal_type: MealType,
    logged_at: DateTime<Utc>,
    calories: f64,
    protein_g: f64,
    carbohydrates_g: f64,
    fat_g: f64,
}

impl MealLogBuilder {
    /// Start a builder with the required diary fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        meal_type: MealType,
        logged_at: DateTime<Utc>,
        calories: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            meal_type,
            logged_at,
            calories,
            protein_g: 0.0,
            carbohydrates_g: 0.0,
            fat_g: 0.0,
        }
    }

    /// Override the generated entry id
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set protein in grams
    #[must_use]
    pub const fn protein_g(mut self, grams: f64) -> Self {
        self.protein_g = grams;
        self
    }

    /// Set carbohydrates in grams
    #[must_use]
    pub const fn carbohydrates_g(mut self, grams: f64) -> Self {
        self.carbohydrates_g = grams;
        self
    }

    /// Set fat in grams
    #[must_use]
    pub const fn fat_g(mut self, grams: f64) -> Self {
        self.fat_g = grams;
        self
    }

    /// Build the diary entry
    #[must_use]
    pub fn build(self) -> MealLogEntry {
        MealLogEntry {
            id: self.id,
            name: self.name,
            meal_type: self.meal_type,
            logged_at: self.logged_at,
            calories: self.calories,
            protein_g: self.protein_g,
            carbohydrates_g: self.carbohydrates_g,
            fat_g: self.fat_g,
        }
    }
}
