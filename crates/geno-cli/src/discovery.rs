//! Report discovery.
//!
//! Explicit file arguments are taken as-is. Directories are walked with the
//! `ignore` crate, so `.gitignore` rules and hidden entries are respected, and
//! only files with the configured extension are kept.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use geno_config::ConvertConfig;
use ignore::WalkBuilder;

/// Resolve command-line paths to the report files to convert.
///
/// Files from one directory are sorted; argument order is kept across
/// arguments and a file named twice is converted once.
pub fn discover_reports(
    paths: &[PathBuf],
    recursive: bool,
    convert: &ConvertConfig,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut reports: Vec<PathBuf> = Vec::new();

    for path in paths {
        let found = if path.is_file() {
            vec![path.clone()]
        } else if path.is_dir() {
            walk_directory(path, recursive, convert)?
        } else {
            bail!("report path '{}' does not exist", path.display());
        };

        for report in found {
            if !reports.contains(&report) {
                reports.push(report);
            }
        }
    }

    tracing::debug!(count = reports.len(), "discovered reports");
    Ok(reports)
}

fn walk_directory(
    root: &Path,
    recursive: bool,
    convert: &ConvertConfig,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    if !recursive {
        builder.max_depth(Some(1));
    }

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) && convert.matches_extension(entry.path()) {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}
