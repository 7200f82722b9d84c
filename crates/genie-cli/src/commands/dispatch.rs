use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags),
        Commands::Results(args) => commands::results::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Demo(args) => commands::demo::handle(&args, ctx, flags),
        Commands::Serve(args) => commands::serve::handle(&args, ctx, flags).await,
        Commands::Clear => commands::clear::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
