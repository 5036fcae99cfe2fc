// Export pipeline
//
// Stages, in order:
// 1. Plan: normalise the region/country codes (SelectionPlan::build)
// 2. Load: read the local users.json dump
// 3. Select: classify every user against the plan
// 4. Touch up: fold text fields to device-safe ASCII
// 5. Export: write the requested file format
//
// Planning is separate so the caller can report the criteria before the
// database is loaded.

use std::path::PathBuf;

use crate::error::Result;
use crate::export::{export_path, export_users, ExportFormat, ExportSummary};
use crate::registry::{self, DmrUser};
use crate::selection::{select, SelectionPlan, SelectionStats};
use crate::touchup::touch_up_all;

/// Where to read the database and where to write the export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub database: PathBuf,
    pub output_dir: PathBuf,
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            database: registry::default_database_path(),
            output_dir: PathBuf::from("."),
            format: ExportFormat::Anytone,
        }
    }
}

/// Select users matching `plan` and touch them up for display
pub fn select_for_export(
    users: &[DmrUser],
    plan: &SelectionPlan,
) -> (Vec<DmrUser>, SelectionStats) {
    let (selected, stats) = select(users, plan);
    (touch_up_all(&selected), stats)
}

/// Load the database, select, touch up and export
pub fn run_export(config: &ExportConfig, plan: &SelectionPlan) -> Result<ExportSummary> {
    let users = registry::load_database(&config.database)?;
    registry::warn_if_stale(&config.database);

    let (export, _) = select_for_export(&users, plan);

    let path = export_path(&config.database, &config.output_dir, config.format);
    export_users(&export, config.format, &path)
}
