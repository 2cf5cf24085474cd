use super::VerticalRect;
use crate::domain::ports::{BrowserAction, ScrollTarget};

/// Scroll position past which scrolling down hides the header.
pub const HIDE_THRESHOLD: f64 = 100.0;
/// Reference line for picking the active nav entry.
pub const ACTIVE_LINE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub rect: VerticalRect,
}

/// Fixed header, scroll progress bar and nav highlighting.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    last_offset: f64,
    header_hidden: bool,
    progress_percent: f64,
    active_section: Option<String>,
    menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// `sections` are the nav targets in nav order, with rects relative to
    /// the viewport top.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, sections: &[SectionBounds]) {
        let offset = metrics.offset;
        self.header_hidden = offset > self.last_offset && offset > HIDE_THRESHOLD;
        self.last_offset = offset;

        let scrollable = metrics.document_height - metrics.viewport_height;
        self.progress_percent = if scrollable > 0.0 {
            (offset / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        // 最後一個跨過參考線的 section 勝出
        if let Some(section) = sections
            .iter()
            .filter(|s| s.rect.top <= ACTIVE_LINE && s.rect.bottom >= ACTIVE_LINE)
            .last()
        {
            self.active_section = Some(section.id.clone());
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn on_nav_click(&mut self, section_id: &str) -> BrowserAction {
        self.menu_open = false;
        BrowserAction::SmoothScrollTo {
            target: ScrollTarget::Section(section_id.to_string()),
        }
    }
}
