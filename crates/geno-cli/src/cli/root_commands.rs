use std::path::PathBuf;

use clap::{Args, Subcommand};
use geno_core::enums::FindingKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Convert report files into FHIR bundles.
    Convert(ConvertArgs),
    /// Print the finding graph of one report.
    Inspect(InspectArgs),
}

/// Arguments for `genofhir convert`.
#[derive(Clone, Debug, Args)]
pub struct ConvertArgs {
    /// Report files or directories holding them.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Write bundles into this directory instead of next to each report.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Descend into subdirectories.
    #[arg(short, long)]
    pub recursive: bool,
    /// Pretty-print bundle JSON.
    #[arg(long)]
    pub pretty: bool,
    /// Stop at the first report that fails.
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for `genofhir inspect`.
#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Report file.
    pub file: PathBuf,
    /// Only list findings of this kind (`therapy`, `clinical_trial`, `gene-alt`, ...).
    #[arg(long)]
    pub kind: Option<FindingKind>,
}
