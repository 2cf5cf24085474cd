//! Handlers behind the page's click/scroll interactions. Each binding keeps
//! its own state and returns the side effects it wants as [`BrowserAction`]s
//! instead of touching a document directly.
//!
//! Times are offsets since page load (`Duration`), so timed behaviour can be
//! driven deterministically.
//!
//! [`BrowserAction`]: crate::domain::ports::BrowserAction

pub mod back_to_top;
pub mod contact;
pub mod counter;
pub mod downloads;
pub mod navigation;
pub mod reveal;
pub mod skills_filter;

pub use back_to_top::BackToTop;
pub use contact::{ContactShortcuts, ContactTarget};
pub use counter::CounterAnimation;
pub use downloads::{ButtonId, DownloadButtons};
pub use navigation::{NavigationState, ScrollMetrics, SectionBounds};
pub use reveal::{ElementKind, RevealEvent, RevealObserver};
pub use skills_filter::{SkillFilter, SkillsBoard};

/// Vertical extent of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalRect {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}
