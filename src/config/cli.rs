use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Render and check a single-page portfolio site")]
pub struct CliConfig {
    /// Path to the portfolio TOML file
    #[arg(short, long, global = true, default_value = "portfolio.toml")]
    pub config: PathBuf,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the page and write it to the output directory
    Build(BuildArgs),
    /// Probe every local artifact referenced by projects
    Check(CheckArgs),
    /// Run the download flow for one project artifact
    Fetch(FetchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    #[arg(short, long, default_value = "./site")]
    pub output: PathBuf,

    /// HTML shell with {{ mount:<name> }} markers (built-in shell when omitted)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory the local artifact paths are relative to; copied into the output
    #[arg(long)]
    pub site_root: Option<PathBuf>,

    /// Also bundle the output into site.zip
    #[arg(long)]
    pub archive: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    #[arg(long, conflicts_with = "base_url")]
    pub site_root: Option<PathBuf>,

    /// Probe over HTTP instead of the filesystem (overrides [http].base_url)
    #[arg(long)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    #[arg(long)]
    pub project: usize,

    /// Index into the project's additional files; the primary artifact when omitted
    #[arg(long)]
    pub file: Option<usize>,

    #[arg(long, default_value = ".")]
    pub site_root: PathBuf,

    #[arg(long, default_value = "./downloads")]
    pub downloads: PathBuf,
}
