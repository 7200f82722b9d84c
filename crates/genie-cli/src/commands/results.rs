use crate::cli::root_commands::{ResultsArgs, Section};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::session::require_stored_analysis;
use crate::context::AppContext;
use crate::output::{analysis::render_sections, output, table_options};

/// Handle `specgenie results`.
pub fn handle(args: &ResultsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = require_stored_analysis(ctx)?;

    if flags.format == OutputFormat::Table {
        println!(
            "{}",
            render_sections(&stored.record, args.section, table_options())
        );
        return Ok(());
    }

    match args.section {
        Section::All => output(&stored, flags.format),
        Section::Stories => output(&stored.record.stories, flags.format),
        Section::Entities => output(&stored.record.entities, flags.format),
        Section::Risks => output(&stored.record.risks, flags.format),
    }
}
