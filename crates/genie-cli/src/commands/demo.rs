use genie_core::demo::SAMPLE_DESCRIPTION;
use serde_json::json;

use crate::cli::root_commands::DemoArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::analyze;
use crate::context::AppContext;
use crate::output::output;

/// Handle `specgenie demo`.
pub fn handle(args: &DemoArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.analyze {
        return analyze::run(SAMPLE_DESCRIPTION, ctx.persist(args.no_save), ctx, flags);
    }

    if flags.format == OutputFormat::Table {
        println!("{SAMPLE_DESCRIPTION}");
        return Ok(());
    }
    output(&json!({ "description": SAMPLE_DESCRIPTION }), flags.format)
}
