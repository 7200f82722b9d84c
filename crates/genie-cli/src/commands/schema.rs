use genie_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `specgenie schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags.format);
    };

    let schema = registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{name}'. Available: {}",
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
