pub mod catalog;
pub mod input;
pub mod result;

pub use catalog::{Addon, Complexity, Feature, ProjectType, TechStack};
pub use input::{Addons, CompleteInput, EstimateInput, InputSummary};
pub use result::{format_amount, Breakdown, EstimateResult};
