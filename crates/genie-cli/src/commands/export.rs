use std::path::PathBuf;

use anyhow::Context;
use genie_core::responses::ExportResponse;
use genie_export::{ExportFormat, write_export};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::session::require_stored_analysis;
use crate::context::AppContext;
use crate::output::output;

/// Handle `specgenie export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = require_stored_analysis(ctx)?;
    let response = export(args, ctx, &stored.record.stories)?;
    output(&response, flags.format)
}

fn export(
    args: &ExportArgs,
    ctx: &AppContext,
    stories: &[genie_core::UserStory],
) -> anyhow::Result<ExportResponse> {
    let kind = args.kind.as_deref().unwrap_or(&ctx.config.export.format);
    let format = kind
        .parse::<ExportFormat>()
        .map_err(|error| anyhow::anyhow!("invalid export kind '{kind}': {error}"))?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&ctx.config.export.file_name, format));

    let bytes = write_export(&path, stories, format)
        .with_context(|| format!("failed to export stories to {}", path.display()))?;

    Ok(ExportResponse {
        path: path.display().to_string(),
        format: format.to_string(),
        stories: u32::try_from(stories.len()).unwrap_or(u32::MAX),
        bytes,
    })
}

/// Configured file name, with the extension swapped for text exports.
fn default_output_path(file_name: &str, format: ExportFormat) -> PathBuf {
    let path = PathBuf::from(file_name);
    match format {
        ExportFormat::Pdf => path,
        ExportFormat::Text => path.with_extension(format.extension()),
    }
}
