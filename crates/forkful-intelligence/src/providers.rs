// ABOUTME: Data-provider seam between app state and the analytics engine
// ABOUTME: DailyLogProvider trait and the InMemoryLogStore reference implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Data-provider seam for the analytics engine.
//!
//! The app's state layer (diary, mood, and hydration stores) implements
//! [`DailyLogProvider`]; analyzers read immutable snapshots through it.
//! [`InMemoryLogStore`] is the reference implementation used by tests
//! and the demo seeder.

use forkful_core::models::{HydrationLog, MealLogEntry, MoodEntry, NutritionTargets};

/// Snapshot access to the user's logged data
///
/// Implementations return the current snapshot; the engine never caches
/// across calls, so each query reflects whatever the provider holds at
/// that moment.
pub trait DailyLogProvider {
    /// All diary entries, in no particular order
    fn meal_logs(&self) -> &[MealLogEntry];

    /// All mood check-ins, at most one per calendar day
    fn mood_entries(&self) -> &[MoodEntry];

    /// All hydration check-ins, at most one per calendar day
    fn hydration_logs(&self) -> &[HydrationLog];

    /// The user's configured nutrition goal, if any
    fn nutrition_targets(&self) -> Option<NutritionTargets>;
}

/// In-memory log store for tests, benches, and the demo seeder
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogStore {
    meals: Vec<MealLogEntry>,
    moods: Vec<MoodEntry>,
    hydration: Vec<HydrationLog>,
    targets: Option<NutritionTargets>,
}

impl InMemoryLogStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diary entry
    pub fn log_meal(&mut self, entry: MealLogEntry) {
        self.meals.push(entry);
    }

    /// Append a mood check-in
    pub fn log_mood(&mut self, entry: MoodEntry) {
        self.moods.push(entry);
    }

    /// Append a hydration check-in
    pub fn log_hydration(&mut self, entry: HydrationLog) {
        self.hydration.push(entry);
    }

    /// Set the nutrition goal
    pub fn set_targets(&mut self, targets: NutritionTargets) {
        self.targets = Some(targets);
    }
}

impl DailyLogProvider for InMemoryLogStore {
    fn meal_logs(&self) -> &[MealLogEntry] {
        &self.meals
    }

    fn mood_entries(&self) -> &[MoodEntry] {
        &self.moods
    }

    fn hydration_logs(&self) -> &[HydrationLog] {
        &self.hydration
    }

    fn nutrition_targets(&self) -> Option<NutritionTargets> {
        self.targets
    }
}
