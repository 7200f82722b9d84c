use std::path::PathBuf;

use genie_config::GenieConfig;

use super::SessionFile;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: GenieConfig,
    pub project_root: PathBuf,
    pub session: SessionFile,
}

impl AppContext {
    /// Bind the session file under `project_root`.
    #[must_use]
    pub fn init(project_root: PathBuf, config: GenieConfig) -> Self {
        let session = SessionFile::for_project(&project_root);
        tracing::debug!(
            root = %project_root.display(),
            session = %session.path().display(),
            "application context ready"
        );
        Self {
            config,
            project_root,
            session,
        }
    }

    /// Whether `analyze` should store its record.
    #[must_use]
    pub const fn persist(&self, no_save: bool) -> bool {
        !no_save && self.config.general.persist_session
    }
}
