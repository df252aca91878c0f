//! Derivation of an [`EstimateResult`] from validated input.
//!
//! All functions here are pure. Constants come from a [`Rates`] card held by
//! the [`Estimator`]; the free functions use the default card.

mod cost;
mod heuristics;
pub mod rates;

pub use rates::Rates;

use crate::model::{CompleteInput, Complexity, EstimateResult, ProjectType};
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT: LazyLock<Estimator> = LazyLock::new(Estimator::default);

/// Runs the derivation functions against one rate card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimator {
    rates: Rates,
}

impl Estimator {
    #[must_use]
    pub fn new(rates: Rates) -> Self {
        Self { rates }
    }

    #[must_use]
    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    /// Derives the full estimate.
    ///
    /// # Example
    ///
    /// ```
    /// use estimator::engine::Estimator;
    /// use estimator::model::{Complexity, EstimateInput, ProjectType};
    ///
    /// let mut input = EstimateInput::new();
    /// input.project_type = Some(ProjectType::Web);
    /// input.complexity = Some(Complexity::Low);
    /// input.set_duration(4);
    /// input.set_team_size(2);
    ///
    /// let result = Estimator::default().estimate(&input.validate()?);
    /// assert_eq!(result.total_cost, 25_000 + 2 * 9_000);
    /// assert_eq!(result.timeline, 4);
    /// # Ok::<(), estimator::error::EstimateError>(())
    /// ```
    #[must_use]
    pub fn estimate(&self, input: &CompleteInput) -> EstimateResult {
        let total_cost = self.cost(input);
        let risk_score = self.risk_score(
            input.complexity(),
            input.team_size(),
            input.features().len(),
        );
        let result = EstimateResult {
            total_cost,
            timeline: self.timeline(input.duration(), input.complexity()),
            risk_score,
            team_structure: self.team_structure(input.project_type(), input.complexity()),
            breakdown: self.breakdown(total_cost),
            ai_insights: self.insights(total_cost, input.team_size(), risk_score),
        };
        debug!(
            project_type = %input.project_type(),
            complexity = %input.complexity(),
            total_cost,
            risk_score,
            timeline = result.timeline,
            "estimate derived"
        );
        result
    }
}

#[must_use]
pub fn calculate_risk_score(complexity: Complexity, team_size: u32, feature_count: usize) -> u8 {
    DEFAULT.risk_score(complexity, team_size, feature_count)
}

#[must_use]
pub fn predict_team_structure(project_type: ProjectType, complexity: Complexity) -> Vec<String> {
    DEFAULT.team_structure(project_type, complexity)
}

#[must_use]
pub fn calculate_timeline(duration: u32, complexity: Complexity) -> u32 {
    DEFAULT.timeline(duration, complexity)
}

#[must_use]
pub fn generate_cost_estimate(input: &CompleteInput) -> u64 {
    DEFAULT.cost(input)
}

#[must_use]
pub fn generate_insights(total_cost: u64, team_size: u32, risk_score: u8) -> Vec<String> {
    DEFAULT.insights(total_cost, team_size, risk_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EstimateInput, Feature};
    use pretty_assertions::assert_eq;

    #[test]
    fn estimate_is_deterministic() {
        let mut input = EstimateInput::new();
        input.project_type = Some(ProjectType::Ecommerce);
        input.complexity = Some(Complexity::High);
        input.set_duration(12);
        input.set_team_size(10);
        for feature in Feature::ALL {
            input.toggle_feature(feature);
        }
        let complete = input.validate().unwrap();

        let first = Estimator::default().estimate(&complete);
        let second = Estimator::default().estimate(&complete);
        assert_eq!(first, second);
        assert_eq!(first.risk_score, 95);
        assert_eq!(first.timeline, 18);
        assert_eq!(first.breakdown.total(), first.total_cost);
        assert_eq!(first.team_structure.last().map(String::as_str), Some("Solution Architect"));
    }

    #[test]
    fn free_functions_use_default_rates() {
        assert_eq!(calculate_risk_score(Complexity::High, 9, 9), 95);
        assert_eq!(calculate_timeline(10, Complexity::High), 15);
        assert_eq!(
            predict_team_structure(ProjectType::Web, Complexity::Low),
            vec!["Frontend Developer", "Backend Developer", "QA Engineer"]
        );
        assert_eq!(generate_insights(10_000, 2, 0)[0], "Estimated team productivity: 3 units/week");
    }

    #[test]
    fn custom_rates_change_the_estimate() {
        let mut input = EstimateInput::new();
        input.project_type = Some(ProjectType::Web);
        input.complexity = Some(Complexity::Low);
        input.set_duration(4);
        input.set_team_size(1);
        let complete = input.validate().unwrap();

        let mut rates = Rates::default();
        rates.per_team_member = 10_000.0;
        let custom = Estimator::new(rates).estimate(&complete);

        assert_eq!(generate_cost_estimate(&complete), 34_000);
        assert_eq!(custom.total_cost, 35_000);
    }
}
