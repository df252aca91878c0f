use super::Estimator;
use crate::model::{Breakdown, CompleteInput};

impl Estimator {
    /// Total project cost, rounded to the nearest whole unit.
    ///
    /// `base_rate × complexity_factor + features × per_feature + add-ons +
    /// team_size × per_team_member`
    #[must_use]
    pub fn cost(&self, input: &CompleteInput) -> u64 {
        let rates = &self.rates;
        let base = rates.base_rates.rate(input.project_type())
            * rates.complexity_factors.factor(input.complexity());
        let features = input.features().len() as f64 * rates.per_feature;
        let addons: f64 = input
            .addons()
            .enabled()
            .map(|addon| rates.addons.price(addon))
            .sum();
        let team = f64::from(input.team_size()) * rates.per_team_member;

        (base + features + addons + team).round().max(0.0) as u64
    }

    /// Splits `total` across categories. The parts always sum to `total`.
    #[must_use]
    pub fn breakdown(&self, total: u64) -> Breakdown {
        let shares = &self.rates.breakdown;
        let part = |percent: u32| (total as f64 * f64::from(percent) / 100.0).round() as u64;

        let development = part(shares.development);
        let design = part(shares.design);
        let testing = part(shares.testing);
        let project_management = part(shares.project_management);
        let allocated = development + design + testing + project_management;

        // Over-allocated rate card: no contingency, development gives up the excess.
        if allocated <= total {
            Breakdown {
                development,
                design,
                testing,
                project_management,
                contingency: total - allocated,
            }
        } else {
            let others = design + testing + project_management;
            Breakdown {
                development: total.saturating_sub(others),
                design,
                testing,
                project_management,
                contingency: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rates;
    use crate::model::{Complexity, EstimateInput, Feature, ProjectType};
    use pretty_assertions::assert_eq;

    fn web_medium(team_size: u32) -> EstimateInput {
        let mut input = EstimateInput::new();
        input.project_type = Some(ProjectType::Web);
        input.complexity = Some(Complexity::Medium);
        input.set_duration(8);
        input.set_team_size(team_size);
        input
    }

    #[test]
    fn web_medium_with_cloud() {
        let mut input = web_medium(4);
        input.toggle_feature(Feature::Authentication);
        input.toggle_feature(Feature::Analytics);
        input.addons.cloud = true;

        let cost = Estimator::default().cost(&input.validate().unwrap());
        assert_eq!(cost, 98_500);
    }

    #[test]
    fn cost_is_linear_in_team_size() {
        let estimator = Estimator::default();
        for project_type in ProjectType::ALL {
            for complexity in Complexity::ALL {
                for team_size in [1, 5, 12] {
                    let mut small = web_medium(team_size);
                    small.project_type = Some(project_type);
                    small.complexity = Some(complexity);
                    let mut large = small.clone();
                    large.set_team_size(team_size + 1);

                    let a = estimator.cost(&small.validate().unwrap());
                    let b = estimator.cost(&large.validate().unwrap());
                    assert_eq!(b - a, 9000, "{project_type}/{complexity}/{team_size}");
                }
            }
        }
    }

    #[test]
    fn all_addons_add_flat_fees() {
        let estimator = Estimator::default();
        let plain = web_medium(1);
        let mut loaded = plain.clone();
        loaded.addons.cloud = true;
        loaded.addons.security = true;
        loaded.addons.analytics = true;

        let diff = estimator.cost(&loaded.validate().unwrap())
            - estimator.cost(&plain.validate().unwrap());
        assert_eq!(diff, 18_000 + 23_000 + 15_000);
    }

    #[test]
    fn high_complexity_rounds_to_whole_units() {
        let mut input = web_medium(1);
        input.complexity = Some(Complexity::High);
        // 25000 * 2.3 is not exact in binary floating point
        let cost = Estimator::default().cost(&input.validate().unwrap());
        assert_eq!(cost, 57_500 + 9_000);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let estimator = Estimator::default();
        for total in [0, 1, 99, 98_500, 123_457, 1_000_001] {
            let breakdown = estimator.breakdown(total);
            assert_eq!(breakdown.total(), total, "total {total}");
        }
    }

    #[test]
    fn breakdown_uses_fixed_splits() {
        let breakdown = Estimator::default().breakdown(100_000);
        assert_eq!(
            breakdown,
            Breakdown {
                development: 55_000,
                design: 15_000,
                testing: 12_000,
                project_management: 10_000,
                contingency: 8_000,
            }
        );
    }

    #[test]
    fn over_allocated_shares_still_sum_to_total() {
        let mut rates = Rates::default();
        rates.breakdown.development = 90;
        let breakdown = Estimator::new(rates).breakdown(10_000);
        assert_eq!(breakdown.contingency, 0);
        assert_eq!(breakdown.total(), 10_000);
    }
}
