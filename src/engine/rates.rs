//! Pricing and scoring constants.
//!
//! Every number the estimator uses lives here so a rate card can be swapped
//! without touching the derivation code. Keys missing from a rates file keep
//! their default values.

use crate::error::SettingsError;
use crate::model::{Addon, Complexity, ProjectType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rates {
    pub base_rates: BaseRates,
    pub complexity_factors: ComplexityFactors,
    /// Timeline multipliers in percent, so rounding up stays exact.
    pub timeline_percent: TimelinePercent,
    pub per_feature: f64,
    pub per_team_member: f64,
    pub addons: AddonPrices,
    pub risk: RiskWeights,
    pub breakdown: BreakdownShares,
    pub insights: InsightRules,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            base_rates: BaseRates::default(),
            complexity_factors: ComplexityFactors::default(),
            timeline_percent: TimelinePercent::default(),
            per_feature: 3500.0,
            per_team_member: 9000.0,
            addons: AddonPrices::default(),
            risk: RiskWeights::default(),
            breakdown: BreakdownShares::default(),
            insights: InsightRules::default(),
        }
    }
}

impl Rates {
    /// Loads a rate card from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref).map_err(|source| SettingsError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let rates = serde_json::from_str(&content).map_err(|source| SettingsError::Invalid {
            path: path_ref.to_path_buf(),
            source,
        })?;
        debug!(path = %path_ref.display(), "loaded rate card");
        Ok(rates)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRates {
    pub web: f64,
    pub mobile: f64,
    pub ai: f64,
    pub ecommerce: f64,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            web: 25_000.0,
            mobile: 40_000.0,
            ai: 75_000.0,
            ecommerce: 60_000.0,
        }
    }
}

impl BaseRates {
    #[must_use]
    pub fn rate(&self, project_type: ProjectType) -> f64 {
        match project_type {
            ProjectType::Web => self.web,
            ProjectType::Mobile => self.mobile,
            ProjectType::Ai => self.ai,
            ProjectType::Ecommerce => self.ecommerce,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityFactors {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for ComplexityFactors {
    fn default() -> Self {
        Self {
            low: 1.0,
            medium: 1.5,
            high: 2.3,
        }
    }
}

impl ComplexityFactors {
    #[must_use]
    pub fn factor(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePercent {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl Default for TimelinePercent {
    fn default() -> Self {
        Self {
            low: 100,
            medium: 120,
            high: 145,
        }
    }
}

impl TimelinePercent {
    #[must_use]
    pub fn percent(&self, complexity: Complexity) -> u32 {
        match complexity {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonPrices {
    pub cloud: f64,
    pub security: f64,
    pub analytics: f64,
}

impl Default for AddonPrices {
    fn default() -> Self {
        Self {
            cloud: 18_000.0,
            security: 23_000.0,
            analytics: 15_000.0,
        }
    }
}

impl AddonPrices {
    #[must_use]
    pub fn price(&self, addon: Addon) -> f64 {
        match addon {
            Addon::Cloud => self.cloud,
            Addon::Security => self.security,
            Addon::Analytics => self.analytics,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskWeights {
    pub high_complexity: u32,
    pub large_team: u32,
    pub many_features: u32,
    /// A team strictly larger than this counts as large.
    pub team_threshold: u32,
    /// More features than this counts as many.
    pub feature_threshold: usize,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            high_complexity: 40,
            large_team: 25,
            many_features: 30,
            team_threshold: 8,
            feature_threshold: 8,
        }
    }
}

/// Percent of the total assigned to each category. Contingency takes
/// whatever the other four leave after rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakdownShares {
    pub development: u32,
    pub design: u32,
    pub testing: u32,
    pub project_management: u32,
}

impl Default for BreakdownShares {
    fn default() -> Self {
        Self {
            development: 55,
            design: 15,
            testing: 12,
            project_management: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsightRules {
    pub productivity_per_member: f64,
    /// Scores strictly above this trigger the phased-delivery warning.
    pub high_risk_threshold: u8,
    pub fluctuation_low: f64,
    pub fluctuation_high: f64,
}

impl Default for InsightRules {
    fn default() -> Self {
        Self {
            productivity_per_member: 1.4,
            high_risk_threshold: 60,
            fluctuation_low: 0.9,
            fluctuation_high: 1.25,
        }
    }
}
