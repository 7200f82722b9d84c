use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `specgenie` binary.
#[derive(Debug, Parser)]
#[command(
    name = "specgenie",
    version,
    about = "SpecGenie - turn a project description into user stories, entities, and risks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Color table output: auto, always, never
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the nearest directory with .specgenie)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::root_commands::Section;
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "specgenie",
            "--format",
            "table",
            "--color",
            "never",
            "--verbose",
            "results",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Results(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["specgenie", "clear", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Clear));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["specgenie", "--format", "xml", "results"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_accepts_text_or_file_but_not_both() {
        let cli = Cli::try_parse_from(["specgenie", "analyze", "Users can log in."])
            .expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.text.as_deref(), Some("Users can log in."));
        assert!(!args.no_save);

        let cli = Cli::try_parse_from(["specgenie", "analyze", "--file", "brief.txt", "--no-save"])
            .expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.file.as_deref(), Some(Path::new("brief.txt")));
        assert!(args.no_save);

        let both = Cli::try_parse_from(["specgenie", "analyze", "text", "--file", "brief.txt"]);
        assert!(both.is_err());
    }

    #[test]
    fn results_section_defaults_to_all() {
        let cli = Cli::try_parse_from(["specgenie", "results"]).expect("cli should parse");
        let Commands::Results(args) = cli.command else {
            panic!("expected results");
        };
        assert_eq!(args.section, Section::All);

        let cli = Cli::try_parse_from(["specgenie", "results", "--section", "risks"])
            .expect("cli should parse");
        let Commands::Results(args) = cli.command else {
            panic!("expected results");
        };
        assert_eq!(args.section, Section::Risks);
    }

    #[test]
    fn export_kind_does_not_clash_with_output_format() {
        let cli = Cli::try_parse_from([
            "specgenie",
            "export",
            "--kind",
            "text",
            "-o",
            "out/stories.txt",
            "--format",
            "raw",
        ])
        .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.kind.as_deref(), Some("text"));
        assert_eq!(args.output.as_deref(), Some(Path::new("out/stories.txt")));
    }

    #[test]
    fn demo_no_save_requires_analyze() {
        assert!(Cli::try_parse_from(["specgenie", "demo", "--no-save"]).is_err());
        assert!(Cli::try_parse_from(["specgenie", "demo", "--analyze", "--no-save"]).is_ok());
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from(["specgenie", "serve", "--port", "0", "--open"])
            .expect("cli should parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, Some(0));
        assert!(args.open);
        assert!(args.host.is_none());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["specgenie", "--project", "/tmp/demo", "clear"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
        assert_eq!(flags.color, ColorMode::Auto);
    }
}
