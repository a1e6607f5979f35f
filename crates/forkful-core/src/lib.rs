// ABOUTME: Core types for the Forkful nutrition analytics platform
// ABOUTME: Foundation crate with domain models, error types, and clock helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

#![deny(unsafe_code)]

//! # Forkful Core
//!
//! Foundation crate providing shared domain types for the Forkful diet
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Food diary and check-in models (`MealLogEntry`, `MoodEntry`, `HydrationLog`)
//! - **errors**: Validation errors raised at the data-provider boundary
//! - **clock**: Time-of-day helpers shared by the analytics crates

/// Time-of-day helpers (minutes since midnight, 12-hour clock formatting)
pub mod clock;

/// Validation errors raised at the data-provider boundary
pub mod errors;

/// Core data models (`MealLogEntry`, `MoodEntry`, `HydrationLog`, `NutritionTargets`)
pub mod models;
