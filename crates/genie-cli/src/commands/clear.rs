use genie_core::responses::ClearResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `specgenie clear`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cleared = ctx.session.clear()?;
    if cleared {
        tracing::info!(path = %ctx.session.path().display(), "stored analysis removed");
    }
    output(&ClearResponse { cleared }, flags.format)
}
