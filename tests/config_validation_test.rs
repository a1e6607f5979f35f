// ABOUTME: Unit tests for analytics threshold configuration validation
// ABOUTME: Covers default validity and rejection of out-of-range or inverted thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use forkful_analytics::intelligence::{ConfigError, IntelligenceConfig};

#[test]
fn test_default_config_is_valid() {
    assert!(IntelligenceConfig::default().validate().is_ok());
}

#[test]
fn test_rejects_ratio_outside_unit_interval() {
    let mut config = IntelligenceConfig::default();
    config.correlation.high_protein_ratio = 1.4;

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidRange(_)
    ));
}

#[test]
fn test_rejects_inverted_display_range() {
    let mut config = IntelligenceConfig::default();
    config.timing.display_hour_start = 20;
    config.timing.display_hour_end = 6;

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidOrdering(_)
    ));
}

#[test]
fn test_rejects_hour_past_midnight() {
    let mut config = IntelligenceConfig::default();
    config.timing.display_hour_end = 24;

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));
}

#[test]
fn test_rejects_non_positive_deviation_scale() {
    let mut config = IntelligenceConfig::default();
    config.timing.half_score_deviation_min = 0.0;

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidRange(_)
    ));
}

#[test]
fn test_rejects_inverted_consistency_thresholds() {
    let mut config = IntelligenceConfig::default();
    config.insights.irregular_score = 90;

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidOrdering(_)
    ));
}

#[test]
fn test_rejects_zero_food_rank_limit() {
    let mut config = IntelligenceConfig::default();
    config.correlation.food_rank_limit = 0;

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));
}
