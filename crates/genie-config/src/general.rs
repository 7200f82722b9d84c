//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default session persistence.
const fn default_persist_session() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether `analyze` replaces the stored session record.
    #[serde(default = "default_persist_session")]
    pub persist_session: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            persist_session: default_persist_session(),
        }
    }
}
