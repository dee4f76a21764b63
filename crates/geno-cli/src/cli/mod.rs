use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `genofhir` binary.
#[derive(Debug, Parser)]
#[command(
    name = "genofhir",
    version,
    about = "Convert FoundationOne genomic reports into FHIR bundles"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file used in place of `.genofhir/config.toml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use geno_core::enums::FindingKind;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn inspect_kind_accepts_name_or_tag() {
        let by_name = Cli::try_parse_from(["genofhir", "inspect", "a.xml", "--kind", "therapy"])
            .expect("cli should parse");
        assert!(matches!(
            by_name.command,
            Commands::Inspect(ref args) if args.kind == Some(FindingKind::Therapy)
        ));

        let by_tag = Cli::try_parse_from(["genofhir", "inspect", "a.xml", "--kind", "gene-alt"])
            .expect("cli should parse");
        assert!(matches!(
            by_tag.command,
            Commands::Inspect(ref args) if args.kind == Some(FindingKind::GeneAlteration)
        ));

        assert!(Cli::try_parse_from(["genofhir", "inspect", "a.xml", "--kind", "gene"]).is_err());
    }

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["genofhir", "--format", "raw", "--verbose", "inspect", "a.xml"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Inspect(ref args) if args.file == PathBuf::from("a.xml")));
    }

    #[test]
    fn convert_flags_parse_after_paths() {
        let cli = Cli::try_parse_from([
            "genofhir",
            "convert",
            "reports",
            "one.xml",
            "--out",
            "bundles",
            "--recursive",
            "--pretty",
            "--fail-fast",
            "--quiet",
        ])
        .expect("cli should parse");

        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.paths, vec![PathBuf::from("reports"), PathBuf::from("one.xml")]);
        assert_eq!(args.out, Some(PathBuf::from("bundles")));
        assert!(args.recursive && args.pretty && args.fail_fast);
        assert!(cli.quiet);
    }

    #[test]
    fn convert_requires_a_path() {
        assert!(Cli::try_parse_from(["genofhir", "convert"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["genofhir", "-q", "-v", "inspect", "a.xml"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["genofhir", "--format", "table", "inspect", "a.xml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["genofhir", "--config", "/tmp/genofhir.toml", "inspect", "a.xml"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config, Some(PathBuf::from("/tmp/genofhir.toml")));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
