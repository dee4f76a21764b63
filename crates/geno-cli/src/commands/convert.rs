use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use geno_config::{ConvertConfig, GenoConfig};
use geno_fhir::{build_bundle, to_json};
use geno_graph::from_report;
use geno_report::FoundationReport;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConvertArgs;
use crate::discovery::discover_reports;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Converted {
    input: String,
    output: String,
    report_id: String,
    findings: usize,
    variants: usize,
    entries: usize,
}

#[derive(Debug, Serialize)]
struct Failed {
    input: String,
    error: String,
}

#[derive(Debug, Default, Serialize)]
struct ConvertSummary {
    converted: Vec<Converted>,
    failed: Vec<Failed>,
}

/// Conversion settings after command-line flags are laid over the config.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    output_dir: Option<PathBuf>,
    pretty: bool,
    recursive: bool,
    fail_fast: bool,
}

impl Settings {
    fn resolve(args: &ConvertArgs, config: &ConvertConfig) -> Self {
        Self {
            output_dir: args.out.clone().or_else(|| config.output_dir.clone()),
            pretty: args.pretty || config.pretty,
            recursive: args.recursive || config.recursive,
            fail_fast: args.fail_fast || config.fail_fast,
        }
    }
}

/// Handle `genofhir convert`.
pub fn handle(args: &ConvertArgs, config: &GenoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = Settings::resolve(args, &config.convert);
    let reports = discover_reports(&args.paths, settings.recursive, &config.convert)?;
    if reports.is_empty() {
        bail!("convert: no report files found");
    }

    if let Some(dir) = &settings.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let mut summary = ConvertSummary::default();
    for report in &reports {
        match convert_one(report, &settings) {
            Ok(converted) => {
                tracing::info!(input = %report.display(), output = %converted.output, "converted report");
                summary.converted.push(converted);
            }
            Err(error) if settings.fail_fast => {
                return Err(error.context(format!("failed to convert {}", report.display())));
            }
            Err(error) => {
                tracing::error!(input = %report.display(), error = %format!("{error:#}"), "report failed");
                summary.failed.push(Failed {
                    input: report.display().to_string(),
                    error: format!("{error:#}"),
                });
            }
        }
    }

    output(&summary, flags.format)?;

    if !summary.failed.is_empty() {
        bail!(
            "{} of {} reports failed to convert",
            summary.failed.len(),
            reports.len()
        );
    }
    Ok(())
}

/// Parse, build, and write one report. Nothing is written on failure.
fn convert_one(input: &Path, settings: &Settings) -> anyhow::Result<Converted> {
    let report = FoundationReport::from_path(input)?;
    let graph = from_report(&report)?;
    let bundle = build_bundle(&report, &graph)?;
    let json = to_json(&bundle, settings.pretty)?;

    let destination = bundle_path(input, settings.output_dir.as_deref())?;
    fs::write(&destination, json)
        .with_context(|| format!("failed to write {}", destination.display()))?;

    Ok(Converted {
        input: input.display().to_string(),
        output: destination.display().to_string(),
        report_id: graph.report_id().to_string(),
        findings: graph.len(),
        variants: graph.variants().len(),
        entries: bundle.entry.len(),
    })
}

/// `<stem>.json` in `output_dir`, or next to the input.
fn bundle_path(input: &Path, output_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("report path {} has no file name", input.display()))?;
    let file_name = Path::new(stem).with_extension("json");
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    Ok(dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::OutputFormat;

    const REPORT_XML: &str =
        include_str!("../../../geno-report/tests/fixtures/foundation_report.xml");

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            config: None,
        }
    }

    fn args(paths: Vec<PathBuf>) -> ConvertArgs {
        ConvertArgs {
            paths,
            out: None,
            recursive: false,
            pretty: false,
            fail_fast: false,
        }
    }

    #[test]
    fn flags_are_laid_over_config() {
        let config = ConvertConfig {
            output_dir: Some("from-config".into()),
            recursive: true,
            ..ConvertConfig::default()
        };
        let mut cli = args(Vec::new());
        cli.out = Some("from-cli".into());
        cli.pretty = true;

        assert_eq!(
            Settings::resolve(&cli, &config),
            Settings {
                output_dir: Some("from-cli".into()),
                pretty: true,
                recursive: true,
                fail_fast: false,
            }
        );
    }

    #[test]
    fn bundle_lands_next_to_report_by_default() {
        assert_eq!(
            bundle_path(Path::new("in/TRF091836.xml"), None).unwrap(),
            PathBuf::from("in/TRF091836.json")
        );
        assert_eq!(
            bundle_path(Path::new("in/TRF091836.xml"), Some(Path::new("out"))).unwrap(),
            PathBuf::from("out/TRF091836.json")
        );
    }

    #[test]
    fn converts_report_into_output_dir() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("TRF091836.xml");
        fs::write(&input, REPORT_XML).unwrap();
        let out = dir.path().join("bundles");

        let mut cli = args(vec![input]);
        cli.out = Some(out.clone());
        handle(&cli, &GenoConfig::default(), &flags()).unwrap();

        let written = fs::read_to_string(out.join("TRF091836.json")).unwrap();
        let bundle: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(bundle["id"], "FoundationMedicine-TRF091836v1");
    }

    #[test]
    fn one_bad_report_does_not_stop_the_others() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a_broken.xml"), "<ResultsReport>").unwrap();
        fs::write(dir.path().join("b_good.xml"), REPORT_XML).unwrap();

        let err = handle(
            &args(vec![dir.path().to_path_buf()]),
            &GenoConfig::default(),
            &flags(),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "1 of 2 reports failed to convert");
        assert!(dir.path().join("b_good.json").exists());
        assert!(!dir.path().join("a_broken.json").exists());
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a_broken.xml"), "<ResultsReport>").unwrap();
        fs::write(dir.path().join("b_good.xml"), REPORT_XML).unwrap();

        let mut cli = args(vec![dir.path().to_path_buf()]);
        cli.fail_fast = true;
        let err = handle(&cli, &GenoConfig::default(), &flags()).unwrap_err();

        assert!(err.to_string().starts_with("failed to convert"));
        assert!(!dir.path().join("b_good.json").exists());
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = handle(
            &args(vec![dir.path().to_path_buf()]),
            &GenoConfig::default(),
            &flags(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no report files"));
    }
}
