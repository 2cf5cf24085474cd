use crate::domain::ports::{BrowserAction, ScrollTarget};

pub const SHOW_AFTER: f64 = 300.0;

#[derive(Debug, Clone, Default)]
pub struct BackToTop {
    visible: bool,
}

impl BackToTop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.visible = offset > SHOW_AFTER;
    }

    pub fn on_click(&self) -> BrowserAction {
        BrowserAction::SmoothScrollTo {
            target: ScrollTarget::Top,
        }
    }
}
