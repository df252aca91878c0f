use serde::{Deserialize, Serialize};

/// Cost split across the fixed delivery categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub development: u64,
    pub design: u64,
    pub testing: u64,
    pub project_management: u64,
    pub contingency: u64,
}

impl Breakdown {
    /// Display rows in category order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, u64); 5] {
        [
            ("Development", self.development),
            ("Design", self.design),
            ("Testing", self.testing),
            ("Project Management", self.project_management),
            ("Contingency", self.contingency),
        ]
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows().iter().map(|(_, amount)| amount).sum()
    }
}

/// Derived estimate shown on the results step and written by the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub total_cost: u64,
    /// Weeks, never shorter than the requested duration.
    pub timeline: u32,
    pub risk_score: u8,
    pub team_structure: Vec<String>,
    pub breakdown: Breakdown,
    pub ai_insights: Vec<String>,
}

impl EstimateResult {
    /// Confidence shown next to the total, the complement of the risk score.
    #[must_use]
    pub fn confidence(&self) -> u8 {
        100u8.saturating_sub(self.risk_score)
    }
}

/// Formats an amount with thousands separators, e.g. `98,500`.
#[must_use]
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> EstimateResult {
        EstimateResult {
            total_cost: 98_500,
            timeline: 10,
            risk_score: 0,
            team_structure: vec!["Frontend Developer".into(), "QA Engineer".into()],
            breakdown: Breakdown {
                development: 54_175,
                design: 14_775,
                testing: 11_820,
                project_management: 9_850,
                contingency: 7_880,
            },
            ai_insights: vec!["Risk level acceptable for standard delivery".into()],
        }
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["totalCost", "timeline", "riskScore", "teamStructure", "breakdown", "aiInsights"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert!(value["breakdown"]["projectManagement"].is_u64());
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let result = sample();
        let text = serde_json::to_string_pretty(&result).unwrap();
        let back: EstimateResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn confidence_complements_risk() {
        let mut result = sample();
        result.risk_score = 95;
        assert_eq!(result.confidence(), 5);
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(98_500), "98,500");
        assert_eq!(format_amount(1_234_567), "1,234,567");
    }
}
