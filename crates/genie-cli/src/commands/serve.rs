use anyhow::Context;
use genie_web::WebServer;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `specgenie serve`.
///
/// The `tiny_http` accept loop blocks, so it runs on the blocking pool until
/// the process is interrupted.
pub async fn handle(args: &ServeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut config = ctx.config.server.clone();
    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let server = WebServer::bind(&config).context("failed to start the web front end")?;
    let url = server.url();
    if !flags.quiet {
        eprintln!("SpecGenie is running at {url} (press Ctrl+C to stop)");
    }

    if (args.open || config.open_browser)
        && let Err(error) = open::that(&url)
    {
        tracing::warn!(%error, %url, "failed to open browser");
        eprintln!("Open {url} in your browser.");
    }

    tokio::task::spawn_blocking(move || server.run())
        .await
        .context("web server thread failed")?
        .context("web server stopped")
}
