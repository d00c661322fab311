use crate::cli::ExportArgs;
use crate::context::CliContext;
use crate::output;
use quicklist_export::{ExportMode, ExportOutcome, SnapshotExporter};
use quicklist_tui::render_offscreen;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct ExportSummary {
    path: PathBuf,
    pages: usize,
    mode: &'static str,
}

pub async fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    let out_dir = ctx.config.effective_export_dir(args.output_dir.as_deref());
    let list = ctx.store.list();

    let outcome = match args.mode {
        ExportMode::Raster => {
            let width = args
                .width
                .unwrap_or_else(|| ctx.config.effective_export_width());
            // A zero-width view never gets mounted.
            let view = (width > 0).then(|| render_offscreen(list, width));
            SnapshotExporter::export_snapshot(view.as_ref(), &out_dir).await?
        }
        ExportMode::Text => SnapshotExporter::export_text(list, &out_dir).await?,
    };

    match outcome {
        ExportOutcome::Written { path, page_count } => output::output_success(ExportSummary {
            path,
            pages: page_count,
            mode: match args.mode {
                ExportMode::Raster => "raster",
                ExportMode::Text => "text",
            },
        }),
        ExportOutcome::NoTarget => {
            output::output_error("List view is not mounted; nothing was exported")
        }
    }
    Ok(())
}
