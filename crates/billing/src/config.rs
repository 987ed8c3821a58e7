//! Pricing and statement configuration.
//!
//! All rates are explicit values handed to the engine and renderer. `Default`
//! gives the standard house rates and US dollar formatting. Every section
//! deserializes with per-field defaults, so a config file only needs to name
//! what it overrides.

use core::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyFormat;

/// Tragedy pricing: flat base, plus a per-person surcharge above the threshold.
///
/// Amounts are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TragedyRates {
    pub base_amount: u64,
    pub audience_threshold: u64,
    pub over_threshold_per_person: u64,
}

impl TragedyRates {
    pub const DEFAULT_BASE_AMOUNT: u64 = 40_000;
    pub const DEFAULT_AUDIENCE_THRESHOLD: u64 = 30;
    pub const DEFAULT_OVER_THRESHOLD_PER_PERSON: u64 = 1_000;
}

impl Default for TragedyRates {
    fn default() -> Self {
        Self {
            base_amount: Self::DEFAULT_BASE_AMOUNT,
            audience_threshold: Self::DEFAULT_AUDIENCE_THRESHOLD,
            over_threshold_per_person: Self::DEFAULT_OVER_THRESHOLD_PER_PERSON,
        }
    }
}

/// Comedy pricing: flat base, a fixed surcharge plus per-person rate above the
/// threshold, and a per-seat rate that always applies.
///
/// Amounts are in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComedyRates {
    pub base_amount: u64,
    pub audience_threshold: u64,
    pub over_threshold_base: u64,
    pub over_threshold_per_person: u64,
    pub per_audience: u64,
}

impl ComedyRates {
    pub const DEFAULT_BASE_AMOUNT: u64 = 30_000;
    pub const DEFAULT_AUDIENCE_THRESHOLD: u64 = 20;
    pub const DEFAULT_OVER_THRESHOLD_BASE: u64 = 10_000;
    pub const DEFAULT_OVER_THRESHOLD_PER_PERSON: u64 = 500;
    pub const DEFAULT_PER_AUDIENCE: u64 = 300;
}

impl Default for ComedyRates {
    fn default() -> Self {
        Self {
            base_amount: Self::DEFAULT_BASE_AMOUNT,
            audience_threshold: Self::DEFAULT_AUDIENCE_THRESHOLD,
            over_threshold_base: Self::DEFAULT_OVER_THRESHOLD_BASE,
            over_threshold_per_person: Self::DEFAULT_OVER_THRESHOLD_PER_PERSON,
            per_audience: Self::DEFAULT_PER_AUDIENCE,
        }
    }
}

/// Volume credit rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditRates {
    /// Seats above this count earn one credit each.
    pub base_threshold: u64,
    /// Comedies earn an extra `audience / comedy_extra_divisor` credits.
    pub comedy_extra_divisor: NonZeroU64,
}

impl CreditRates {
    pub const DEFAULT_BASE_THRESHOLD: u64 = 30;
    pub const DEFAULT_COMEDY_EXTRA_DIVISOR: NonZeroU64 = match NonZeroU64::new(5) {
        Some(divisor) => divisor,
        None => unreachable!(),
    };
}

impl Default for CreditRates {
    fn default() -> Self {
        Self {
            base_threshold: Self::DEFAULT_BASE_THRESHOLD,
            comedy_extra_divisor: Self::DEFAULT_COMEDY_EXTRA_DIVISOR,
        }
    }
}

/// Complete rate card for the pricing engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub tragedy: TragedyRates,
    pub comedy: ComedyRates,
    pub credits: CreditRates,
}

/// Everything a statement run needs besides its data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    pub pricing: PricingConfig,
    pub currency: CurrencyFormat,
}
