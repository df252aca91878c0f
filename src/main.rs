use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing::warn;

use estimator::engine::{Estimator, Rates};
use estimator::error::EstimateError;
use estimator::export::{export_csv, export_json, export_to_dir};
use estimator::logging;
use estimator::model::{Complexity, EstimateInput, ProjectType};
use estimator::search::{search, KindFilter, SortBy};
use estimator::settings::{SettingsStore, Theme};
use estimator::ui::App;
use estimator::wizard::Wizard;

#[derive(Parser, Debug)]
#[command(name = "estimator")]
#[command(about = "Estimator - generate project cost estimates from the terminal")]
#[command(version)]
struct Args {
    /// Project type (web, mobile, ai, ecommerce)
    #[arg(long, value_name = "TYPE")]
    project_type: Option<ProjectType>,

    /// Complexity (low, medium, high)
    #[arg(long)]
    complexity: Option<Complexity>,

    /// Number of developers
    #[arg(long, value_name = "N")]
    team_size: Option<u32>,

    /// Expected duration in weeks
    #[arg(long, value_name = "WEEKS")]
    duration: Option<u32>,

    /// Feature label, repeatable (e.g. "Authentication", "Payment Gateway")
    #[arg(long = "feature", value_name = "LABEL")]
    features: Vec<String>,

    /// Include the Cloud Setup add-on
    #[arg(long)]
    cloud: bool,

    /// Include the Security Hardening add-on
    #[arg(long)]
    security: bool,

    /// Include the Analytics Dashboard add-on
    #[arg(long)]
    analytics: bool,

    /// Preset name or a custom stack description
    #[arg(long, value_name = "STACK")]
    tech_stack: Option<String>,

    /// Free-form requirements text
    #[arg(long)]
    requirements: Option<String>,

    /// Export the estimate to this JSON file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Export the cost breakdown to this CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Directory for exports (default: current directory in the UI, stdout headless)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Search site content and print the hits
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Sort search hits (relevance, date, title)
    #[arg(long, default_value = "relevance")]
    sort: SortBy,

    /// Restrict search hits to one kind (all, page, blog, case-study)
    #[arg(long, default_value = "all")]
    kind: KindFilter,

    /// Rate card JSON file
    #[arg(long, value_name = "FILE", env = "ESTIMATOR_RATES")]
    rates: Option<PathBuf>,

    /// Set and remember the color theme (light, dark)
    #[arg(long)]
    theme: Option<Theme>,
}

/// How a run is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Search,
    Estimate,
    Interactive,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.search.is_some() {
            Mode::Search
        } else if self.has_estimate_flags() {
            Mode::Estimate
        } else {
            Mode::Interactive
        }
    }

    fn has_estimate_flags(&self) -> bool {
        self.project_type.is_some()
            || self.complexity.is_some()
            || self.team_size.is_some()
            || self.duration.is_some()
            || !self.features.is_empty()
            || self.cloud
            || self.security
            || self.analytics
            || self.tech_stack.is_some()
            || self.requirements.is_some()
            || self.json.is_some()
            || self.csv.is_some()
    }

    fn input(&self) -> Result<EstimateInput, EstimateError> {
        let mut input = EstimateInput::new();
        input.project_type = self.project_type;
        input.complexity = self.complexity;
        input.set_team_size(self.team_size.unwrap_or(0));
        input.set_duration(self.duration.unwrap_or(0));
        for label in &self.features {
            input.add_feature_by_label(label)?;
        }
        input.addons.cloud = self.cloud;
        input.addons.security = self.security;
        input.addons.analytics = self.analytics;
        input.tech_stack = self.tech_stack.clone().map(Into::into);
        input.requirements = self.requirements.clone().unwrap_or_default();
        Ok(input)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let rates = match &args.rates {
        Some(path) => Rates::load(path)?,
        None => Rates::default(),
    };
    let estimator = Estimator::new(rates);

    match args.mode() {
        Mode::Search => {
            logging::init_stderr();
            let query = args.search.as_deref().unwrap_or_default();
            for line in search_lines(query, args.kind, args.sort) {
                println!("{line}");
            }
            return Ok(());
        }
        Mode::Estimate => {
            logging::init_stderr();
            let written = run_estimate(&args, &estimator)?;
            for path in written {
                println!("Exported: {}", path.display());
            }
            return Ok(());
        }
        Mode::Interactive => {}
    }

    let _log_guard = match logging::default_log_dir().map(|dir| logging::init_file(&dir)) {
        Some(Ok(guard)) => Some(guard),
        Some(Err(e)) => {
            eprintln!("Logging disabled: {e}");
            None
        }
        None => None,
    };

    let mut settings = SettingsStore::load(SettingsStore::default_path()?)?;
    if let Some(theme) = args.theme {
        if let Err(e) = settings.set_theme(theme) {
            warn!(error = %e, "could not save theme");
        }
    }

    let out_dir = args.out_dir.unwrap_or_else(|| PathBuf::from("."));
    let terminal = ratatui::init();
    let result = App::new(Wizard::new(estimator), settings, out_dir).run(terminal);
    ratatui::restore();
    result
}

/// Derives the estimate and writes every requested export. With no export
/// requested the JSON goes to stdout. Returns the written files.
fn run_estimate(args: &Args, estimator: &Estimator) -> Result<Vec<PathBuf>> {
    let input = args.input()?.validate()?;
    let result = estimator.estimate(&input);
    let mut written = Vec::new();

    if let Some(csv_path) = &args.csv {
        export_csv(&result, csv_path)?;
        written.push(csv_path.clone());
    }

    if let Some(json_path) = &args.json {
        export_json(&result, json_path)?;
        written.push(json_path.clone());
    }

    if let Some(dir) = &args.out_dir {
        written.push(export_to_dir(&result, dir)?);
    }

    if written.is_empty() {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(written)
}

fn search_lines(query: &str, kind: KindFilter, sort: SortBy) -> Vec<String> {
    let results = search(query);
    if let Some(message) = results.empty_message() {
        return vec![message];
    }

    let hits = results.view(kind, sort);
    let mut lines = vec![format!("{} result(s) for \"{}\"", hits.len(), results.query())];
    lines.extend(hits.into_iter().map(|hit| {
        let read = hit
            .entry
            .read_time_label()
            .map(|label| format!(" ({label})"))
            .unwrap_or_default();
        format!(
            "{:>3}  {:<12} {}{}  {}",
            hit.score,
            hit.entry.kind.label(),
            hit.entry.title,
            read,
            hit.entry.path
        )
    }));
    lines
}
