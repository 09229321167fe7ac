use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat, RenderOptions};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sharpq` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sharpq",
    version,
    about = "sharpq - declarative queries over C# sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to output.format from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::root_commands::TypeKindArg;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "sharpq", "--format", "table", "--limit", "10", "--verbose", "files",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Files(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sharpq", "enums", "--deep", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Enums(ref args) if args.deep));
    }

    #[test]
    fn format_is_unset_without_flag() {
        let cli = Cli::try_parse_from(["sharpq", "files"]).expect("cli should parse");
        assert_eq!(cli.format, None);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sharpq", "--format", "xml", "files"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn files_defaults_to_whole_project() {
        let cli = Cli::try_parse_from(["sharpq", "files"]).expect("cli should parse");
        let Commands::Files(args) = cli.command else {
            panic!("expected files command");
        };
        assert_eq!(args.path, ".");
        assert!(!args.direct);
    }

    #[test]
    fn types_filters_parse() {
        let cli = Cli::try_parse_from([
            "sharpq",
            "types",
            "--path",
            "./Social",
            "--kind",
            "interface",
            "--name-suffix",
            "Client",
            "--attribute",
            "MyAttribute",
            "--public",
        ])
        .expect("cli should parse");
        let Commands::Types(args) = cli.command else {
            panic!("expected types command");
        };

        assert_eq!(args.path, "./Social");
        assert_eq!(args.kind, Some(TypeKindArg::Interface));
        assert_eq!(args.name_suffix.as_deref(), Some("Client"));
        assert_eq!(args.attribute.as_deref(), Some("MyAttribute"));
        assert!(args.public);
        assert!(!args.deep);
    }

    #[test]
    fn project_flag_is_copied_into_global_flags() {
        let cli = Cli::try_parse_from(["sharpq", "--project", "/tmp/demo", "methods"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().project.as_deref(), Some("/tmp/demo"));
    }
}
