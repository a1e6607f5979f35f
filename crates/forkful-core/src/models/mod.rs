// ABOUTME: Core data model module for the Forkful analytics platform
// ABOUTME: Meal diary, mood check-in, hydration, and nutrition target models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

//! Domain models shared across the Forkful analytics crates.
//!
//! Entries are produced and normalized by the app's data providers
//! (diary, mood check-in, and hydration flows); the analytics crates
//! treat them as immutable snapshots.

/// Hydration check-in model
pub mod hydration;
/// Food diary models (`MealType`, `MealLogEntry`)
pub mod meal;
/// Daily mood check-in model
pub mod mood;
/// User nutrition goal model
pub mod targets;

pub use hydration::HydrationLog;
pub use meal::{MealLogBuilder, MealLogEntry, MealType};
pub use mood::MoodEntry;
pub use targets::NutritionTargets;
