use super::Estimator;
use crate::model::{Complexity, ProjectType};

impl Estimator {
    /// Additive risk score capped at 100.
    #[must_use]
    pub fn risk_score(&self, complexity: Complexity, team_size: u32, feature_count: usize) -> u8 {
        let weights = &self.rates.risk;
        let mut score = 0u32;
        if complexity == Complexity::High {
            score += weights.high_complexity;
        }
        if team_size > weights.team_threshold {
            score += weights.large_team;
        }
        if feature_count > weights.feature_threshold {
            score += weights.many_features;
        }
        score.min(100) as u8
    }

    /// Suggested roster: the base roster for the project type, then a
    /// Solution Architect for high complexity, then an AI Researcher for AI
    /// projects.
    #[must_use]
    pub fn team_structure(&self, project_type: ProjectType, complexity: Complexity) -> Vec<String> {
        let mut team: Vec<String> = project_type
            .base_roster()
            .iter()
            .map(ToString::to_string)
            .collect();
        if complexity == Complexity::High {
            team.push("Solution Architect".to_string());
        }
        if project_type == ProjectType::Ai {
            team.push("AI Researcher".to_string());
        }
        team
    }

    /// Delivery timeline in whole weeks, rounded up.
    #[must_use]
    pub fn timeline(&self, duration: u32, complexity: Complexity) -> u32 {
        let percent = u64::from(self.rates.timeline_percent.percent(complexity));
        let scaled = (u64::from(duration) * percent).div_ceil(100);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    /// Low and high bounds of the expected market swing around `total_cost`.
    #[must_use]
    pub fn fluctuation_range(&self, total_cost: u64) -> (u64, u64) {
        let rules = &self.rates.insights;
        let low = (total_cost as f64 * rules.fluctuation_low).round() as u64;
        let high = (total_cost as f64 * rules.fluctuation_high).round() as u64;
        (low, high)
    }

    /// Human-readable notes shown under the estimate.
    #[must_use]
    pub fn insights(&self, total_cost: u64, team_size: u32, risk_score: u8) -> Vec<String> {
        let rules = &self.rates.insights;
        let productivity = (f64::from(team_size) * rules.productivity_per_member).round() as u64;
        let (low, high) = self.fluctuation_range(total_cost);

        let risk_note = if risk_score > rules.high_risk_threshold {
            "High risk detected — consider phased delivery"
        } else {
            "Risk level acceptable for standard delivery"
        };

        vec![
            format!("Estimated team productivity: {productivity} units/week"),
            risk_note.to_string(),
            format!("Market fluctuation range: ₹{low} - ₹{high}"),
        ]
    }
}
