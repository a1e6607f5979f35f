// ABOUTME: Facade crate for the Forkful analytics engine
// ABOUTME: Re-exports the core and intelligence workspace crates under stable paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

#![deny(unsafe_code)]

//! # Forkful Analytics
//!
//! Embeddable analytics engine for the Forkful diet tracking app. The
//! app's view layer supplies diary, mood, and hydration snapshots
//! through the [`intelligence::DailyLogProvider`] seam and reads back
//! plain data structures: averages, buckets, scores, and tagged
//! insights. No persistence, no network, no background state.
//!
//! ## Modules
//!
//! - [`models`] / [`errors`] / [`clock`] re-export `forkful-core`
//! - [`intelligence`] re-exports `forkful-intelligence`

/// Time-of-day helpers re-exported from `forkful-core`
pub mod clock {
    pub use forkful_core::clock::*;
}

/// Validation errors re-exported from `forkful-core`
pub mod errors {
    pub use forkful_core::errors::*;
}

/// Domain models re-exported from `forkful-core`
pub mod models {
    pub use forkful_core::models::*;
}

/// Analytics engine re-exported from `forkful-intelligence`
pub mod intelligence {
    pub use forkful_intelligence::*;
}
