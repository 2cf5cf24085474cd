use clap::Parser;
use folio::config::{BuildArgs, CheckArgs, CliConfig, Command, FetchArgs};
use folio::core::check::probe_artifacts;
use folio::core::interaction::{ButtonId, DownloadButtons};
use folio::domain::ports::ArtifactProbe;
use folio::utils::error::SiteError;
use folio::utils::logger;
use folio::{
    DispatchOutcome, DownloadDispatcher, FsProbe, HttpProbe, LocalHost, LocalStorage,
    NotificationCenter, Portfolio, SiteBuilder, SiteConfig,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting folio");
    tracing::info!("📁 Loading configuration from: {}", cli.config.display());

    let config = match SiteConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                cli.config.display(),
                e
            );
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置（所有問題一次列出）
    let portfolio = match config.to_portfolio() {
        Ok(portfolio) => portfolio,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::info!("✅ Configuration loaded and validated successfully");

    let result = match cli.command {
        Command::Build(args) => run_build(&portfolio, args).await,
        Command::Check(args) => run_check(&portfolio, &config, args).await,
        Command::Fetch(args) => run_fetch(&portfolio, args).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ folio failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run_build(portfolio: &Portfolio, args: BuildArgs) -> Result<(), SiteError> {
    let mut builder = SiteBuilder::new(LocalStorage::new(&args.output)).with_archive(args.archive);

    if let Some(template) = &args.template {
        builder = builder.with_template(std::fs::read_to_string(template)?);
    }
    if let Some(root) = &args.site_root {
        builder = builder.with_site_root(root);
    }

    let report = builder.build(portfolio).await?;

    println!("✅ Site built into {}", args.output.display());
    for file in &report.files {
        println!("  📄 {}", file);
    }
    if let Some(archive) = &report.archive {
        println!("  📦 {}", archive);
    }
    for missing in &report.missing_artifacts {
        println!("  ⚠️ missing artifact: {}", missing);
    }
    Ok(())
}

async fn run_check(
    portfolio: &Portfolio,
    config: &SiteConfig,
    args: CheckArgs,
) -> Result<(), SiteError> {
    let base_url = args.base_url.as_deref().or(config.base_url());
    let probe: Box<dyn ArtifactProbe> = match (&args.site_root, base_url) {
        (Some(root), _) => Box::new(FsProbe::new(root)),
        (None, Some(base_url)) => Box::new(HttpProbe::new(base_url, config.probe_timeout())?),
        (None, None) => Box::new(FsProbe::new(".")),
    };

    let statuses = probe_artifacts(portfolio, probe.as_ref()).await;

    println!("📋 Artifact check:");
    for status in &statuses {
        let mark = if status.external {
            "🔗"
        } else if status.is_missing() {
            "❌"
        } else {
            "✅"
        };
        println!("  {} [{}] {} -> {}", mark, status.project, status.name, status.link);
    }

    let missing = statuses.iter().filter(|s| s.is_missing()).count();
    if missing > 0 {
        eprintln!("❌ {} artifact(s) missing", missing);
        std::process::exit(2);
    }
    println!("✅ All local artifacts present");
    Ok(())
}

async fn run_fetch(portfolio: &Portfolio, args: FetchArgs) -> Result<(), SiteError> {
    let mut buttons = DownloadButtons::new(&portfolio.projects);
    let button = match args.file {
        Some(file) => ButtonId::Secondary {
            project: args.project,
            file,
        },
        None => ButtonId::Main {
            project: args.project,
        },
    };
    let request = buttons.on_click(button, Duration::ZERO)?;

    let notifications = Arc::new(NotificationCenter::new());
    let dispatcher = DownloadDispatcher::new(
        FsProbe::new(&args.site_root),
        LocalHost::new(&args.site_root, &args.downloads),
        notifications.clone(),
    );

    let outcome = dispatcher.dispatch(&request).await;
    for (_, notification, _) in notifications.visible() {
        println!(
            "{} {}: {}",
            notification.icon, notification.headline, notification.message
        );
        if let Some(hint) = &notification.hint {
            println!("   {}", hint);
        }
    }

    match outcome {
        DispatchOutcome::NotFound { .. } | DispatchOutcome::AccessError => std::process::exit(2),
        DispatchOutcome::DownloadStarted { .. } | DispatchOutcome::OpenedExternal => Ok(()),
    }
}
