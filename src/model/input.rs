use super::catalog::{Addon, Complexity, Feature, ProjectType, TechStack};
use crate::error::{EstimateError, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Add-on flags. Each enabled flag adds a flat fee to the cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addons {
    pub cloud: bool,
    pub security: bool,
    pub analytics: bool,
}

impl Addons {
    #[must_use]
    pub fn is_enabled(&self, addon: Addon) -> bool {
        match addon {
            Addon::Cloud => self.cloud,
            Addon::Security => self.security,
            Addon::Analytics => self.analytics,
        }
    }

    pub fn toggle(&mut self, addon: Addon) {
        let flag = match addon {
            Addon::Cloud => &mut self.cloud,
            Addon::Security => &mut self.security,
            Addon::Analytics => &mut self.analytics,
        };
        *flag = !*flag;
    }

    pub fn enabled(&self) -> impl Iterator<Item = Addon> + '_ {
        Addon::ALL.into_iter().filter(|a| self.is_enabled(*a))
    }
}

/// Draft input collected by the wizard, filled in field by field.
///
/// Zero is treated the same as unset for `duration` and `team_size`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateInput {
    pub project_type: Option<ProjectType>,
    pub complexity: Option<Complexity>,
    pub duration: Option<u32>,
    pub team_size: Option<u32>,
    pub features: BTreeSet<Feature>,
    pub addons: Addons,
    pub tech_stack: Option<TechStack>,
    pub requirements: String,
    pub location: String,
    pub documents: Vec<PathBuf>,
}

impl EstimateInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_duration(&mut self, weeks: u32) {
        self.duration = (weeks > 0).then_some(weeks);
    }

    pub fn set_team_size(&mut self, members: u32) {
        self.team_size = (members > 0).then_some(members);
    }

    /// Adds the feature if absent, removes it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle_feature(&mut self, feature: Feature) -> bool {
        if self.features.remove(&feature) {
            false
        } else {
            self.features.insert(feature);
            true
        }
    }

    /// Selects a feature by its catalog label.
    pub fn add_feature_by_label(&mut self, label: &str) -> Result<(), EstimateError> {
        let feature = Feature::from_label(label).ok_or_else(|| EstimateError::UnknownFeature {
            name: label.to_string(),
        })?;
        self.features.insert(feature);
        Ok(())
    }

    pub fn add_document(&mut self, path: PathBuf) {
        self.documents.push(path);
    }

    pub fn remove_document(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.documents.len()).then(|| self.documents.remove(index))
    }

    /// Required fields that are still unset, in wizard order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.project_type.is_none() {
            missing.push(Field::ProjectType);
        }
        if self.complexity.is_none() {
            missing.push(Field::Complexity);
        }
        if !self.team_size.is_some_and(|n| n > 0) {
            missing.push(Field::TeamSize);
        }
        if !self.duration.is_some_and(|n| n > 0) {
            missing.push(Field::Duration);
        }
        missing
    }

    /// Freezes the draft into a [`CompleteInput`] once every required field
    /// is present.
    pub fn validate(&self) -> Result<CompleteInput, EstimateError> {
        match (self.project_type, self.complexity, self.duration, self.team_size) {
            (Some(project_type), Some(complexity), Some(duration), Some(team_size))
                if duration > 0 && team_size > 0 =>
            {
                Ok(CompleteInput {
                    project_type,
                    complexity,
                    duration,
                    team_size,
                    features: self.features.clone(),
                    addons: self.addons,
                    tech_stack: self.tech_stack.clone(),
                    requirements: self.requirements.clone(),
                })
            }
            _ => Err(EstimateError::Incomplete {
                missing: self.missing_fields(),
            }),
        }
    }

    /// Live summary card shown next to the tech stack step.
    #[must_use]
    pub fn summary(&self) -> InputSummary {
        const UNSET: &str = "—";
        InputSummary {
            project_type: self
                .project_type
                .map_or_else(|| UNSET.to_string(), |t| t.id().to_string()),
            complexity: self
                .complexity
                .map_or_else(|| UNSET.to_string(), |c| c.id().to_string()),
            duration: self
                .duration
                .map_or_else(|| UNSET.to_string(), |d| format!("{d} weeks")),
            team_size: self
                .team_size
                .map_or_else(|| UNSET.to_string(), |n| n.to_string()),
            features: if self.features.is_empty() {
                "None selected".to_string()
            } else {
                self.features
                    .iter()
                    .map(|f| f.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSummary {
    pub project_type: String,
    pub complexity: String,
    pub duration: String,
    pub team_size: String,
    pub features: String,
}

/// Validated input. Only [`EstimateInput::validate`] constructs it, so the
/// derivation code never sees a missing required field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteInput {
    project_type: ProjectType,
    complexity: Complexity,
    duration: u32,
    team_size: u32,
    features: BTreeSet<Feature>,
    addons: Addons,
    tech_stack: Option<TechStack>,
    requirements: String,
}

impl CompleteInput {
    #[must_use]
    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    #[must_use]
    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    #[must_use]
    pub fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }

    #[must_use]
    pub fn addons(&self) -> Addons {
        self.addons
    }

    #[must_use]
    pub fn tech_stack(&self) -> Option<&TechStack> {
        self.tech_stack.as_ref()
    }

    #[must_use]
    pub fn requirements(&self) -> &str {
        &self.requirements
    }
}
