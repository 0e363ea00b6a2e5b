//! CLI command for exporting a selection
//!
//! Writes the same rows `show` would print, in xlsx, csv or json.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{HoldingsError, HoldingsResult};
use crate::export::{export_file_name, export_table, ExportFormat};

use super::holdings::SelectionArgs;
use super::AppContext;

/// Arguments for `export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Export format: xlsx, csv or json (default: from the output extension, else xlsx)
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file or directory (default: the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export`
pub fn handle_export_command(ctx: &AppContext, args: ExportArgs) -> HoldingsResult<()> {
    let table = ctx.table()?;
    let query = args.selection.to_query(&table)?;
    let filtered = query.apply(&table, &ctx.settings.area_classification);

    let format = args
        .format
        .or_else(|| {
            args.output
                .as_deref()
                .filter(|p| !p.is_dir())
                .and_then(ExportFormat::from_path)
        })
        .unwrap_or_default();

    let output = match args.output {
        Some(path) if path.is_dir() => {
            path.join(export_file_name(&query.area, &query.search, format))
        }
        Some(path) => path,
        None => {
            ctx.paths.ensure_directories()?;
            ctx.paths
                .export_dir()
                .join(export_file_name(&query.area, &query.search, format))
        }
    };

    // Render fully before touching the target so a failed export leaves no file
    let mut payload = Vec::new();
    export_table(&filtered, format, &mut payload)?;

    fs::write(&output, &payload).map_err(|e| {
        HoldingsError::Io(format!("Failed to write file {}: {}", output.display(), e))
    })?;

    println!(
        "Exported {} holdings to: {}",
        filtered.len(),
        output.display()
    );
    Ok(())
}
