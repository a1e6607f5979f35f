// ABOUTME: Small statistical helpers shared by the analytics modules
// ABOUTME: Guarded mean and population standard deviation over f64 slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

/// Arithmetic mean, `None` for an empty slice
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation, `None` for an empty slice
#[allow(clippy::cast_precision_loss)]
pub(crate) fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Round to one decimal place
pub(crate) fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
