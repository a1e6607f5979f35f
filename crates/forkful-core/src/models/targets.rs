// ABOUTME: User nutrition goal model consumed by adherence bucketing
// ABOUTME: NutritionTargets definition with the configured daily calorie goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

use serde::{Deserialize, Serialize};

/// The user's configured nutrition goal
///
/// Set during onboarding or in settings; absent for users who skipped
/// goal setup. Adherence bucketing degrades gracefully when no target
/// is configured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Daily calorie goal (kcal)
    pub daily_calories: f64,
}

impl NutritionTargets {
    /// Create a nutrition target
    #[must_use]
    pub const fn new(daily_calories: f64) -> Self {
        Self { daily_calories }
    }
}
