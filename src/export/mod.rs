pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::{default_file_name, export_json, export_to_dir, load_json};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Estimator;
    use crate::model::{Complexity, EstimateInput, EstimateResult, Feature, ProjectType};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample() -> EstimateResult {
        let mut input = EstimateInput::new();
        input.project_type = Some(ProjectType::Web);
        input.complexity = Some(Complexity::Medium);
        input.set_duration(8);
        input.set_team_size(4);
        input.toggle_feature(Feature::Authentication);
        input.toggle_feature(Feature::Analytics);
        input.addons.cloud = true;
        Estimator::default().estimate(&input.validate().unwrap())
    }

    #[test]
    fn file_name_carries_millisecond_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(default_file_name(now), "AI-Estimate-1700000000123.json");
    }

    #[test]
    fn json_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let result = sample();

        let path = export_to_dir(&result, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("AI-Estimate-") && name.ends_with(".json"));

        assert_eq!(load_json(&path).unwrap(), result);
    }

    #[test]
    fn json_export_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_json(&sample(), dir.path().join("missing").join("out.json")).unwrap_err();
        assert!(matches!(err, ExportError::FileCreate { .. }));
    }

    #[test]
    fn csv_lists_breakdown_and_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breakdown.csv");
        export_csv(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Category,Amount,Share");
        assert_eq!(lines[1], "Development,54175,55.0%");
        assert_eq!(lines.last().copied(), Some("Total,98500,100.0%"));
        assert_eq!(lines.len(), 7);
    }
}
