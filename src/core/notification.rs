use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

pub const SUCCESS_DURATION: Duration = Duration::from_millis(3000);
pub const EXTERNAL_DURATION: Duration = Duration::from_millis(4000);
pub const ERROR_DURATION: Duration = Duration::from_millis(4000);
/// Slide-out animation before the element is removed.
pub const LEAVE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    DownloadStarted,
    ExternalOpened,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub icon: &'static str,
    pub headline: String,
    pub message: String,
    pub hint: Option<String>,
}

impl Notification {
    pub fn download_started(name: &str, file_type: &str) -> Self {
        Self {
            kind: NotificationKind::DownloadStarted,
            icon: "✅",
            headline: "Download started".to_string(),
            message: format!("{} ({})", name, file_type),
            hint: None,
        }
    }

    pub fn external_opened(name: &str, file_type: &str) -> Self {
        Self {
            kind: NotificationKind::ExternalOpened,
            icon: "🔗",
            headline: "Opening external link".to_string(),
            message: format!("{} ({})", name, file_type),
            hint: Some("Will open in new tab".to_string()),
        }
    }

    pub fn file_not_found(filename: &str) -> Self {
        Self::error(format!("File not found: {}", filename))
    }

    pub fn access_error() -> Self {
        Self::error("Error accessing file. Please try again.".to_string())
    }

    fn error(message: String) -> Self {
        Self {
            kind: NotificationKind::Error,
            icon: "⚠️",
            headline: "Download Error".to_string(),
            message,
            hint: None,
        }
    }

    pub fn display_duration(&self) -> Duration {
        match self.kind {
            NotificationKind::DownloadStarted => SUCCESS_DURATION,
            NotificationKind::ExternalOpened => EXTERNAL_DURATION,
            NotificationKind::Error => ERROR_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Shown,
    Leaving,
}

#[derive(Debug, Clone)]
struct Entry {
    id: u64,
    notification: Notification,
    shown_at: Instant,
}

impl Entry {
    fn phase(&self, now: Instant) -> Option<Phase> {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let shown_for = self.notification.display_duration();
        if elapsed < shown_for {
            Some(Phase::Shown)
        } else if elapsed < shown_for + LEAVE_DURATION {
            Some(Phase::Leaving)
        } else {
            None
        }
    }
}

/// Transient toasts. Fire-and-forget: no dedup, no queueing.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    entries: Mutex<Vec<Entry>>,
    next_id: AtomicU64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("🔔 {}: {}", notification.headline, notification.message);

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push(Entry {
            id,
            notification,
            shown_at: Instant::now(),
        });
        id
    }

    /// Drops expired notifications and returns the rest, oldest first.
    pub fn visible(&self) -> Vec<(u64, Notification, Phase)> {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|entry| entry.phase(now).is_some());
        entries
            .iter()
            .filter_map(|entry| {
                entry
                    .phase(now)
                    .map(|phase| (entry.id, entry.notification.clone(), phase))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.visible().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn success_lives_three_seconds_then_slides_out() {
        let center = NotificationCenter::new();
        center.push(Notification::download_started("Report", "PDF Document"));

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert_eq!(center.visible()[0].2, Phase::Shown);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(center.visible()[0].2, Phase::Leaving);

        tokio::time::advance(LEAVE_DURATION).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn notifications_coexist_and_expire_independently() {
        let center = NotificationCenter::new();
        center.push(Notification::download_started("A", "PDF Document"));
        center.push(Notification::download_started("A", "PDF Document"));
        center.push(Notification::file_not_found("x.pdf"));
        assert_eq!(center.len(), 3);

        tokio::time::advance(Duration::from_millis(3500)).await;
        let remaining = center.visible();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].1.message, "File not found: x.pdf");
    }

    #[test]
    fn external_notification_carries_hint() {
        let n = Notification::external_opened("Report", "File");
        assert_eq!(n.headline, "Opening external link");
        assert_eq!(n.hint.as_deref(), Some("Will open in new tab"));
        assert_eq!(n.display_duration(), EXTERNAL_DURATION);
    }
}
