mod app_context;
mod config_warnings;
mod project_root;
mod session_file;

pub use app_context::AppContext;
pub use config_warnings::warn_misnamed_env;
pub use project_root::find_project_root;
pub use session_file::SessionFile;
