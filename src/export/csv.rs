use crate::error::ExportError;
use crate::model::EstimateResult;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Writes the cost breakdown, one row per category followed by a total row.
pub fn export_csv<P: AsRef<Path>>(result: &EstimateResult, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Category", "Amount", "Share"])?;

    for (category, amount) in result.breakdown.rows() {
        let share = if result.total_cost == 0 {
            0.0
        } else {
            amount as f64 * 100.0 / result.total_cost as f64
        };
        let amount = amount.to_string();
        let share = format!("{share:.1}%");
        writer.write_record([category, amount.as_str(), share.as_str()])?;
    }
    let total = result.total_cost.to_string();
    writer.write_record(["Total", total.as_str(), "100.0%"])?;

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    info!(path = %path_ref.display(), "exported CSV");
    Ok(())
}
