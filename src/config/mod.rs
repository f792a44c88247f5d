// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for window construction
//!
//! The configuration is an explicit value handed to a
//! [`WindowFactory`](crate::WindowFactory); there is no process-wide default
//! zone.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use datetime_window::WindowConfig;
//!
//! // UTC, earliest-candidate disambiguation, one clock read per omitted endpoint
//! let config = WindowConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use chrono::FixedOffset;
//! use datetime_window::{Disambiguation, NowSampling, WindowConfigBuilder};
//!
//! let config = WindowConfigBuilder::in_zone(FixedOffset::east_opt(3600).unwrap())
//!     .disambiguation(Disambiguation::Reject)
//!     .now_sampling(NowSampling::Shared)
//!     .build();
//! ```

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::zone::Disambiguation;

pub mod constants;

/// How [`create_explicit`](crate::WindowFactory::create_explicit) reads the
/// clock when both endpoints are omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NowSampling {
    /// One read per omitted endpoint. A clock stepped backwards between the
    /// two reads makes the call fail with `InvalidRange`.
    #[default]
    Independent,
    /// One read per call, reused for every omitted endpoint
    Shared,
}

/// Configuration for window construction
///
/// Use [`WindowConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct WindowConfig<Tz: TimeZone = Utc> {
    /// Zone attached to naive inputs and used for "now" samples
    /// Default: UTC
    pub default_zone: Tz,

    /// Resolution of ambiguous local times
    /// Default: earliest candidate
    pub disambiguation: Disambiguation,

    /// Clock reads for omitted endpoints
    /// Default: independent reads
    pub now_sampling: NowSampling,
}

impl Default for WindowConfig<Utc> {
    fn default() -> Self {
        Self::utc()
    }
}

impl WindowConfig<Utc> {
    /// UTC configuration with default policies
    pub fn utc() -> Self {
        Self::in_zone(Utc)
    }
}

impl<Tz: TimeZone> WindowConfig<Tz> {
    /// Configuration for `zone` with default policies
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::FixedOffset;
    /// use datetime_window::{NowSampling, WindowConfig};
    ///
    /// let config = WindowConfig::in_zone(FixedOffset::west_opt(5 * 3600).unwrap());
    /// assert_eq!(config.now_sampling, NowSampling::Independent);
    /// ```
    pub fn in_zone(zone: Tz) -> Self {
        Self {
            default_zone: zone,
            disambiguation: Disambiguation::default(),
            now_sampling: NowSampling::default(),
        }
    }
}

/// Builder for [`WindowConfig`]
///
/// # Example
///
/// ```rust
/// use datetime_window::{NowSampling, WindowConfigBuilder};
///
/// let config = WindowConfigBuilder::new()
///     .now_sampling(NowSampling::Shared)
///     .build();
/// assert_eq!(config.now_sampling, NowSampling::Shared);
/// ```
#[derive(Debug, Clone)]
pub struct WindowConfigBuilder<Tz: TimeZone = Utc> {
    config: WindowConfig<Tz>,
}

impl Default for WindowConfigBuilder<Utc> {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowConfigBuilder<Utc> {
    /// Create a new builder for UTC
    pub fn new() -> Self {
        Self {
            config: WindowConfig::utc(),
        }
    }
}

impl<Tz: TimeZone> WindowConfigBuilder<Tz> {
    /// Create a new builder for `zone`
    pub fn in_zone(zone: Tz) -> Self {
        Self {
            config: WindowConfig::in_zone(zone),
        }
    }

    /// Set how ambiguous local times resolve
    pub fn disambiguation(mut self, disambiguation: Disambiguation) -> Self {
        self.config.disambiguation = disambiguation;
        self
    }

    /// Set how omitted endpoints sample the clock
    pub fn now_sampling(mut self, now_sampling: NowSampling) -> Self {
        self.config.now_sampling = now_sampling;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> WindowConfig<Tz> {
        self.config
    }
}
