use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use genie_core::responses::AnalyzeResponse;
use genie_core::{AnalysisRecord, StoredAnalysis};

use crate::cli::root_commands::{AnalyzeArgs, Section};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{analysis::render_sections, output, table_options};

/// Handle `specgenie analyze`.
pub fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let description = read_description(args.text.as_deref(), args.file.as_deref())?;
    run(&description, ctx.persist(args.no_save), ctx, flags)
}

/// Analyze `description`, store it when `save` is set, and print the result.
pub fn run(
    description: &str,
    save: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = analyze(description, save, ctx)?;
    if flags.format == OutputFormat::Table {
        println!(
            "{}",
            render_sections(&response.analysis, Section::All, table_options())
        );
        return Ok(());
    }
    output(&response, flags.format)
}

fn analyze(description: &str, save: bool, ctx: &AppContext) -> anyhow::Result<AnalyzeResponse> {
    let description = description.trim();
    if description.is_empty() {
        anyhow::bail!("project description is empty; pass TEXT, --file PATH, or pipe it on stdin");
    }

    let stored = StoredAnalysis::new(AnalysisRecord::analyze(description), Utc::now());
    tracing::debug!(
        stories = stored.record.stories.len(),
        entities = stored.record.entities.len(),
        risks = stored.record.risks.len(),
        "description analyzed"
    );

    if save {
        ctx.session.save(&stored)?;
    }

    Ok(AnalyzeResponse {
        analysis: stored.record,
        saved: save,
        analyzed_at: stored.analyzed_at,
    })
}

fn read_description(text: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text.filter(|text| *text != "-") {
        return Ok(text.to_string());
    }
    if let Some(path) = file.filter(|path| *path != Path::new("-")) {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read description from {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read description from stdin")?;
    Ok(buffer)
}
