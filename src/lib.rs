//! # Estimator
//!
//! A terminal-based project cost estimator with a multi-step wizard.
//!
//! ## Features
//!
//! - Four-step wizard from project classification to a generated estimate
//! - Cost, timeline, risk, team structure and insight derivation
//! - Configurable rate card
//! - Export to JSON and CSV
//! - Site content search and proposal requests
//!
//! ## Example
//!
//! ```
//! use estimator::engine::Estimator;
//! use estimator::model::{Complexity, EstimateInput, Feature, ProjectType};
//!
//! let mut input = EstimateInput::new();
//! input.project_type = Some(ProjectType::Web);
//! input.complexity = Some(Complexity::Medium);
//! input.set_team_size(4);
//! input.set_duration(8);
//! input.toggle_feature(Feature::Authentication);
//! input.toggle_feature(Feature::Analytics);
//! input.addons.cloud = true;
//!
//! let result = Estimator::default().estimate(&input.validate()?);
//! println!("Total: {}", result.total_cost);
//! println!("Timeline: {} weeks", result.timeline);
//! # Ok::<(), estimator::error::EstimateError>(())
//! ```

pub mod contact;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod search;
pub mod settings;
pub mod ui;
pub mod wizard;
