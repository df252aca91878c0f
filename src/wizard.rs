//! Multi-step estimate wizard.
//!
//! The [`Wizard`] owns the draft input, the current step and the last
//! generated result. Going back never clears entered values.

use crate::engine::Estimator;
use crate::error::{Field, WizardError};
use crate::model::{EstimateInput, EstimateResult};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ProjectType,
    Details,
    TechAndRequirements,
    Results,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::ProjectType,
        Step::Details,
        Step::TechAndRequirements,
        Step::Results,
    ];

    /// 1-based position shown to the user.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Step::ProjectType => 1,
            Step::Details => 2,
            Step::TechAndRequirements => 3,
            Step::Results => 4,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Step::ProjectType => "Project Classification",
            Step::Details => "Project Details",
            Step::TechAndRequirements => "Tech Stack & Requirements",
            Step::Results => "AI Estimate",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    input: EstimateInput,
    step: Step,
    result: Option<EstimateResult>,
    estimator: Estimator,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Estimator::default())
    }
}

impl Wizard {
    #[must_use]
    pub fn new(estimator: Estimator) -> Self {
        Self {
            input: EstimateInput::new(),
            step: Step::ProjectType,
            result: None,
            estimator,
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn input(&self) -> &EstimateInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut EstimateInput {
        &mut self.input
    }

    #[must_use]
    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    #[must_use]
    pub fn result(&self) -> Option<&EstimateResult> {
        self.result.as_ref()
    }

    /// Fields that block leaving the current step.
    #[must_use]
    pub fn blocking_fields(&self) -> Vec<Field> {
        let missing = self.input.missing_fields();
        match self.step {
            Step::ProjectType => missing
                .into_iter()
                .filter(|f| *f == Field::ProjectType)
                .collect(),
            Step::Details => missing
                .into_iter()
                .filter(|f| matches!(f, Field::Complexity | Field::TeamSize | Field::Duration))
                .collect(),
            Step::TechAndRequirements => missing,
            Step::Results => Vec::new(),
        }
    }

    /// Whether [`Wizard::next`] would succeed.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        matches!(self.step, Step::ProjectType | Step::Details) && self.blocking_fields().is_empty()
    }

    /// Moves forward from step 1 or 2. Step 3 only leaves through
    /// [`Wizard::generate`].
    pub fn next(&mut self) -> Result<Step, WizardError> {
        let target = match self.step {
            Step::ProjectType => Step::Details,
            Step::Details => Step::TechAndRequirements,
            Step::TechAndRequirements | Step::Results => {
                return Err(WizardError::NotAvailable {
                    action: "next",
                    step: self.step.number(),
                })
            }
        };

        let missing = self.blocking_fields();
        if !missing.is_empty() {
            debug!(step = self.step.number(), ?missing, "advance blocked");
            return Err(WizardError::Blocked {
                step: self.step.number(),
                missing,
            });
        }

        self.step = target;
        debug!(step = target.number(), "advanced");
        Ok(target)
    }

    /// Moves one step back, keeping every entered value.
    pub fn back(&mut self) -> Result<Step, WizardError> {
        let target = match self.step {
            Step::ProjectType => return Err(WizardError::AtFirstStep),
            Step::Details => Step::ProjectType,
            Step::TechAndRequirements => Step::Details,
            Step::Results => Step::TechAndRequirements,
        };
        self.step = target;
        debug!(step = target.number(), "went back");
        Ok(target)
    }

    /// Derives the estimate from the current input and shows the results
    /// step. A previous result is replaced only on success.
    pub fn generate(&mut self) -> Result<&EstimateResult, WizardError> {
        if self.step != Step::TechAndRequirements {
            return Err(WizardError::NotAvailable {
                action: "generate",
                step: self.step.number(),
            });
        }

        let complete = self.input.validate()?;
        let result = self.estimator.estimate(&complete);
        info!(
            total_cost = result.total_cost,
            timeline = result.timeline,
            risk_score = result.risk_score,
            "estimate generated"
        );

        self.step = Step::Results;
        Ok(self.result.insert(result))
    }

    /// Drops all input and any result, returning to step 1.
    pub fn restart(&mut self) {
        self.input = EstimateInput::new();
        self.result = None;
        self.step = Step::ProjectType;
        debug!("wizard restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;
    use crate::model::{Complexity, Feature, ProjectType};
    use pretty_assertions::assert_eq;

    fn fill_details(wizard: &mut Wizard) {
        let input = wizard.input_mut();
        input.complexity = Some(Complexity::Medium);
        input.set_team_size(4);
        input.set_duration(8);
    }

    #[test]
    fn step_one_requires_project_type() {
        let mut wizard = Wizard::default();
        assert!(!wizard.can_advance());
        assert_eq!(
            wizard.next(),
            Err(WizardError::Blocked {
                step: 1,
                missing: vec![Field::ProjectType]
            })
        );

        wizard.input_mut().project_type = Some(ProjectType::Web);
        assert!(wizard.can_advance());
        assert_eq!(wizard.next(), Ok(Step::Details));
    }

    #[test]
    fn step_two_requires_details() {
        let mut wizard = Wizard::default();
        wizard.input_mut().project_type = Some(ProjectType::Web);
        wizard.next().unwrap();
        wizard.input_mut().complexity = Some(Complexity::Low);

        assert_eq!(
            wizard.next(),
            Err(WizardError::Blocked {
                step: 2,
                missing: vec![Field::TeamSize, Field::Duration]
            })
        );

        fill_details(&mut wizard);
        assert_eq!(wizard.next(), Ok(Step::TechAndRequirements));
        assert!(!wizard.can_advance());
        assert!(matches!(wizard.next(), Err(WizardError::NotAvailable { step: 3, .. })));
    }

    #[test]
    fn back_keeps_values() {
        let mut wizard = Wizard::default();
        wizard.input_mut().project_type = Some(ProjectType::Ai);
        wizard.next().unwrap();
        fill_details(&mut wizard);
        wizard.input_mut().toggle_feature(Feature::AiAutomation);
        wizard.next().unwrap();

        assert_eq!(wizard.back(), Ok(Step::Details));
        assert_eq!(wizard.back(), Ok(Step::ProjectType));
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));

        assert_eq!(wizard.input().project_type, Some(ProjectType::Ai));
        assert_eq!(wizard.input().team_size, Some(4));
        assert!(wizard.input().features.contains(&Feature::AiAutomation));
    }

    #[test]
    fn generate_only_from_step_three() {
        let mut wizard = Wizard::default();
        assert!(matches!(
            wizard.generate(),
            Err(WizardError::NotAvailable { step: 1, .. })
        ));
    }

    #[test]
    fn generate_stores_result_and_shows_it() {
        let mut wizard = Wizard::default();
        wizard.input_mut().project_type = Some(ProjectType::Web);
        wizard.next().unwrap();
        fill_details(&mut wizard);
        wizard.input_mut().toggle_feature(Feature::Authentication);
        wizard.input_mut().toggle_feature(Feature::Analytics);
        wizard.input_mut().addons.cloud = true;
        wizard.next().unwrap();

        let cost = wizard.generate().unwrap().total_cost;
        assert_eq!(cost, 98_500);
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.result().map(|r| r.timeline), Some(10));
    }

    #[test]
    fn regenerate_replaces_result() {
        let mut wizard = Wizard::default();
        wizard.input_mut().project_type = Some(ProjectType::Web);
        wizard.next().unwrap();
        fill_details(&mut wizard);
        wizard.next().unwrap();
        let first = wizard.generate().unwrap().clone();

        wizard.back().unwrap();
        assert_eq!(wizard.result(), Some(&first));
        wizard.input_mut().set_team_size(5);
        let second = wizard.generate().unwrap().clone();

        assert_eq!(second.total_cost, first.total_cost + 9_000);
        assert_eq!(wizard.result(), Some(&second));
    }

    #[test]
    fn failed_generate_keeps_previous_result() {
        let mut wizard = Wizard::default();
        wizard.input_mut().project_type = Some(ProjectType::Mobile);
        wizard.next().unwrap();
        fill_details(&mut wizard);
        wizard.next().unwrap();
        wizard.generate().unwrap();
        wizard.back().unwrap();

        wizard.input_mut().duration = None;
        let err = wizard.generate().unwrap_err();
        assert_eq!(
            err,
            WizardError::Estimate(EstimateError::Incomplete {
                missing: vec![Field::Duration]
            })
        );
        assert!(wizard.result().is_some());
        assert_eq!(wizard.step(), Step::TechAndRequirements);
    }

    #[test]
    fn restart_discards_everything() {
        let mut wizard = Wizard::default();
        wizard.input_mut().project_type = Some(ProjectType::Web);
        wizard.next().unwrap();
        wizard.restart();

        assert_eq!(wizard.step(), Step::ProjectType);
        assert_eq!(wizard.input(), &EstimateInput::new());
        assert!(wizard.result().is_none());
    }
}
