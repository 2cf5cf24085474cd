use super::counter::CounterAnimation;
use super::VerticalRect;
use std::collections::{HashMap, HashSet};

/// Share of an element that must be inside the trigger region.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The trigger region ends this far above the viewport bottom.
pub const BOTTOM_MARGIN: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    TimelineItem,
    SkillCard,
    ProjectCard,
    CertificationCard,
    StatNumber { target: u64 },
}

#[derive(Debug)]
pub struct RevealEvent {
    pub id: String,
    pub counter: Option<CounterAnimation>,
}

/// One-shot "visible" marker for observed elements.
#[derive(Debug, Default)]
pub struct RevealObserver {
    observed: HashMap<String, ElementKind>,
    revealed: HashSet<String>,
}

impl RevealObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: impl Into<String>, kind: ElementKind) {
        self.observed.insert(id.into(), kind);
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Checks element positions after a scroll. Each element is reported
    /// at most once over the observer's lifetime.
    pub fn on_scroll(
        &mut self,
        viewport_height: f64,
        positions: &[(String, VerticalRect)],
    ) -> Vec<RevealEvent> {
        let mut events = Vec::new();

        for (id, rect) in positions {
            let Some(kind) = self.observed.get(id).copied() else {
                continue;
            };
            if self.revealed.contains(id) || !intersects(*rect, viewport_height) {
                continue;
            }

            self.revealed.insert(id.clone());
            let counter = match kind {
                ElementKind::StatNumber { target } => Some(CounterAnimation::new(target)),
                _ => None,
            };
            events.push(RevealEvent {
                id: id.clone(),
                counter,
            });
        }

        if !events.is_empty() {
            tracing::debug!("Revealed {} element(s)", events.len());
        }
        events
    }
}

fn intersects(rect: VerticalRect, viewport_height: f64) -> bool {
    let region_bottom = viewport_height - BOTTOM_MARGIN;
    let overlap = rect.bottom.min(region_bottom) - rect.top.max(0.0);
    let height = rect.height();

    if height <= 0.0 {
        return rect.top >= 0.0 && rect.top <= region_bottom;
    }
    overlap > 0.0 && overlap / height >= REVEAL_THRESHOLD
}
