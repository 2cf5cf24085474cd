use clap::Parser;
use folio::core::check::probe_artifacts;
use folio::domain::ports::ArtifactProbe;
use folio::utils::logger;
use folio::{FsProbe, HttpProbe, SiteConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artifact-check")]
#[command(about = "Check that every project artifact in a portfolio config is reachable")]
struct Args {
    /// Path to the portfolio TOML file
    #[arg(short, long, default_value = "portfolio.toml")]
    config: PathBuf,

    /// Probe files under this directory
    #[arg(long, conflicts_with = "base_url")]
    site_root: Option<PathBuf>,

    /// Probe with HEAD requests against this URL
    #[arg(long)]
    base_url: Option<String>,

    /// Emit the report (and logs) as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = SiteConfig::from_file(&args.config)?;
    let portfolio = config.to_portfolio()?;

    let base_url = args.base_url.as_deref().or(config.base_url());
    let probe: Box<dyn ArtifactProbe> = match (&args.site_root, base_url) {
        (Some(root), _) => Box::new(FsProbe::new(root)),
        (None, Some(url)) => Box::new(HttpProbe::new(url, config.probe_timeout())?),
        (None, None) => Box::new(FsProbe::new(".")),
    };

    let statuses = probe_artifacts(&portfolio, probe.as_ref()).await;
    let missing = statuses.iter().filter(|s| s.is_missing()).count();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
    } else {
        for status in &statuses {
            let state = match (&status.probe, status.external) {
                (_, true) => "external".to_string(),
                (Some(outcome), _) => format!("{:?}", outcome),
                (None, false) => "skipped".to_string(),
            };
            println!("{:<30} {:<40} {}", status.name, status.link, state);
        }
        println!();
        println!("{} artifact(s), {} missing", statuses.len(), missing);
    }

    if missing > 0 {
        std::process::exit(2);
    }
    Ok(())
}
