use genie_core::StoredAnalysis;

use crate::context::AppContext;

/// Load the project's stored analysis or explain how to create one.
pub fn require_stored_analysis(ctx: &AppContext) -> anyhow::Result<StoredAnalysis> {
    ctx.session.load()?.ok_or_else(|| {
        anyhow::anyhow!(
            "No analysis stored for {}. Run 'specgenie analyze' first.",
            ctx.project_root.display()
        )
    })
}
