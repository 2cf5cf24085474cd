use httpmock::prelude::*;
use httpmock::Method::HEAD;
use folio::core::check::probe_artifacts;
use folio::core::interaction::{ButtonId, DownloadButtons};
use folio::core::notification::NotificationKind;
use folio::domain::ports::{BrowserAction, ProbeOutcome};
use folio::{
    DispatchOutcome, DownloadDispatcher, FsProbe, HttpProbe, LocalHost, NotificationCenter,
    RecordingHost, SiteConfig,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const PORTFOLIO: &str = r#"
[profile]
name = "Jane Doe"
title = "Security Engineer"
email = "jane@example.com"

[[projects]]
title = "Unitrack"
link = "documents/Unitrack.pdf"

[[projects.additional]]
name = "Slides"
link = "documents/slides.pdf"

[[projects.additional]]
name = "Dataset"
link = "https://drive.google.com/file/d/abc/view"

[[projects]]
title = "Lost Report"
link = "documents/lost.pdf"
"#;

#[tokio::test]
async fn test_http_dispatch_downloads_existing_file() {
    let server = MockServer::start();
    let head_mock = server.mock(|when, then| {
        when.method(HEAD).path("/site/documents/Unitrack.pdf");
        then.status(200).header("Content-Length", "8");
    });

    let portfolio = SiteConfig::from_toml_str(PORTFOLIO)
        .unwrap()
        .to_portfolio()
        .unwrap();
    let mut buttons = DownloadButtons::new(&portfolio.projects);
    let request = buttons
        .on_click(ButtonId::Main { project: 0 }, Duration::ZERO)
        .unwrap();

    let notifications = Arc::new(NotificationCenter::new());
    let dispatcher = DownloadDispatcher::new(
        HttpProbe::new(&server.url("/site"), Duration::from_secs(5)).unwrap(),
        RecordingHost::new(),
        notifications.clone(),
    );

    let outcome = dispatcher.dispatch(&request).await;

    head_mock.assert();
    assert_eq!(
        outcome,
        DispatchOutcome::DownloadStarted {
            filename: "Unitrack.pdf".to_string()
        }
    );
    assert_eq!(
        dispatcher.host().actions(),
        vec![BrowserAction::Download {
            href: "documents/Unitrack.pdf".to_string(),
            filename: "Unitrack.pdf".to_string(),
        }]
    );

    let shown = notifications.visible();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].1.kind, NotificationKind::DownloadStarted);
    assert!(shown[0].1.message.contains("Unitrack"));
}

#[tokio::test]
async fn test_http_dispatch_reports_missing_file() {
    let server = MockServer::start();
    let head_mock = server.mock(|when, then| {
        when.method(HEAD).path("/documents/lost.pdf");
        then.status(404);
    });

    let portfolio = SiteConfig::from_toml_str(PORTFOLIO)
        .unwrap()
        .to_portfolio()
        .unwrap();
    let mut buttons = DownloadButtons::new(&portfolio.projects);
    let request = buttons
        .on_click(ButtonId::Card { project: 1 }, Duration::ZERO)
        .unwrap();

    let notifications = Arc::new(NotificationCenter::new());
    let dispatcher = DownloadDispatcher::new(
        HttpProbe::new(&server.base_url(), Duration::from_secs(5)).unwrap(),
        RecordingHost::new(),
        notifications.clone(),
    );

    let outcome = dispatcher.dispatch(&request).await;

    head_mock.assert();
    assert_eq!(
        outcome,
        DispatchOutcome::NotFound {
            filename: "lost.pdf".to_string()
        }
    );
    assert!(dispatcher.host().actions().is_empty());

    let shown = notifications.visible();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].1.kind, NotificationKind::Error);
    assert!(shown[0].1.message.contains("lost.pdf"));
}

#[tokio::test]
async fn test_external_secondary_file_is_opened_without_probe() {
    let server = MockServer::start();
    let any_head = server.mock(|when, then| {
        when.method(HEAD);
        then.status(200);
    });

    let portfolio = SiteConfig::from_toml_str(PORTFOLIO)
        .unwrap()
        .to_portfolio()
        .unwrap();
    let mut buttons = DownloadButtons::new(&portfolio.projects);
    let request = buttons
        .on_click(
            ButtonId::Secondary {
                project: 0,
                file: 1,
            },
            Duration::ZERO,
        )
        .unwrap();

    let notifications = Arc::new(NotificationCenter::new());
    let dispatcher = DownloadDispatcher::new(
        HttpProbe::new(&server.base_url(), Duration::from_secs(5)).unwrap(),
        RecordingHost::new(),
        notifications.clone(),
    );

    assert_eq!(
        dispatcher.dispatch(&request).await,
        DispatchOutcome::OpenedExternal
    );
    any_head.assert_hits(0);
    assert_eq!(
        dispatcher.host().actions(),
        vec![BrowserAction::OpenDetached {
            url: "https://drive.google.com/file/d/abc/view".to_string()
        }]
    );
    assert_eq!(
        notifications.visible()[0].1.kind,
        NotificationKind::ExternalOpened
    );
}

#[tokio::test]
async fn test_unknown_additional_file_is_rejected() {
    let portfolio = SiteConfig::from_toml_str(PORTFOLIO)
        .unwrap()
        .to_portfolio()
        .unwrap();
    let mut buttons = DownloadButtons::new(&portfolio.projects);

    assert!(buttons
        .on_click(ButtonId::Secondary { project: 1, file: 0 }, Duration::ZERO)
        .is_err());
    assert!(buttons
        .on_click(ButtonId::Main { project: 9 }, Duration::ZERO)
        .is_err());
}

#[tokio::test]
async fn test_check_lists_missing_local_artifacts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/documents/Unitrack.pdf");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(HEAD).path("/documents/slides.pdf");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(HEAD).path("/documents/lost.pdf");
        then.status(404);
    });

    let portfolio = SiteConfig::from_toml_str(PORTFOLIO)
        .unwrap()
        .to_portfolio()
        .unwrap();
    let probe = HttpProbe::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let statuses = probe_artifacts(&portfolio, &probe).await;

    assert_eq!(statuses.len(), 4);
    assert!(statuses[2].external);
    assert!(statuses[2].probe.is_none());

    let missing: Vec<&str> = statuses
        .iter()
        .filter(|s| s.is_missing())
        .map(|s| s.link.as_str())
        .collect();
    assert_eq!(missing, vec!["documents/lost.pdf"]);
    assert_eq!(
        statuses[3].probe,
        Some(ProbeOutcome::NotFound { status: Some(404) })
    );

    let json = serde_json::to_value(&statuses).unwrap();
    assert_eq!(json[3]["probe"]["outcome"], "not_found");
}

#[test]
fn test_fetch_copies_file_into_downloads() {
    let root = TempDir::new().unwrap();
    let downloads = TempDir::new().unwrap();
    std::fs::create_dir_all(root.path().join("documents")).unwrap();
    std::fs::write(root.path().join("documents/slides.pdf"), b"slides").unwrap();

    let portfolio = SiteConfig::from_toml_str(PORTFOLIO)
        .unwrap()
        .to_portfolio()
        .unwrap();
    let mut buttons = DownloadButtons::new(&portfolio.projects);
    let request = buttons
        .on_click(
            ButtonId::Secondary {
                project: 0,
                file: 0,
            },
            Duration::ZERO,
        )
        .unwrap();

    let dispatcher = DownloadDispatcher::new(
        FsProbe::new(root.path()),
        LocalHost::new(root.path(), downloads.path()),
        Arc::new(NotificationCenter::new()),
    );

    let outcome = tokio_test::block_on(dispatcher.dispatch(&request));

    assert_eq!(
        outcome,
        DispatchOutcome::DownloadStarted {
            filename: "slides.pdf".to_string()
        }
    );
    assert_eq!(
        std::fs::read(downloads.path().join("slides.pdf")).unwrap(),
        b"slides"
    );
}
