//! Error types for the estimator.

use std::path::PathBuf;
use thiserror::Error;

/// A required wizard field that has not been filled in yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectType,
    Complexity,
    TeamSize,
    Duration,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::ProjectType => "project type",
            Field::Complexity => "complexity",
            Field::TeamSize => "team size",
            Field::Duration => "duration",
        };
        f.write_str(name)
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while validating estimate input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// One or more required fields are unset.
    #[error("estimate input is incomplete, missing: {}", join_fields(.missing))]
    Incomplete { missing: Vec<Field> },

    /// A feature name outside the fixed catalog.
    #[error("unknown feature '{name}'")]
    UnknownFeature { name: String },
}

/// Errors raised by wizard navigation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    /// Advancing is blocked until the listed fields are set.
    #[error("cannot leave step {step}, missing: {}", join_fields(.missing))]
    Blocked { step: u8, missing: Vec<Field> },

    /// Already on the first step.
    #[error("already at the first step")]
    AtFirstStep,

    /// The action is not available on the current step.
    #[error("'{action}' is not available on step {step}")]
    NotAvailable { action: &'static str, step: u8 },

    /// Generation failed validation.
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Errors that can occur when exporting or loading estimates.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read an exported file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors that can occur when loading or saving settings and rate tables.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No platform configuration directory could be resolved.
    #[error("could not find a configuration directory")]
    NoConfigDir,

    /// Filesystem error on the settings file.
    #[error("settings I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not valid JSON.
    #[error("invalid settings file '{path}': {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Validation errors of the contact and meeting forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("unknown service '{0}'")]
    UnknownService(String),

    #[error("unknown time slot '{0}'")]
    UnknownSlot(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
