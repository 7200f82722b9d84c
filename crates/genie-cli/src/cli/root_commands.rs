use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze a project description into stories, entities, and risks.
    Analyze(AnalyzeArgs),
    /// Show the stored analysis for this project.
    Results(ResultsArgs),
    /// Export the stored user stories as PDF or text.
    Export(ExportArgs),
    /// Print the sample description, or analyze it.
    Demo(DemoArgs),
    /// Run the local web front end.
    Serve(ServeArgs),
    /// Delete the stored analysis.
    Clear,
    /// Print a registered JSON Schema, or list schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Project description (`-` or omitted reads stdin)
    pub text: Option<String>,

    /// Read the description from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Print the analysis without storing it
    #[arg(long)]
    pub no_save: bool,
}

/// Part of a stored analysis to print.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Section {
    #[default]
    All,
    Stories,
    Entities,
    Risks,
}

#[derive(Clone, Debug, Args)]
pub struct ResultsArgs {
    /// Section to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Output path (defaults to `export.file_name` in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Artifact kind: pdf or text (defaults to `export.format`)
    #[arg(long)]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DemoArgs {
    /// Analyze the sample instead of printing it
    #[arg(long)]
    pub analyze: bool,

    /// With --analyze, do not store the result
    #[arg(long, requires = "analyze")]
    pub no_save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`; 0 picks a free port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Open the form in the default browser
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `stored_analysis`); omit to list all names
    pub name: Option<String>,
}
