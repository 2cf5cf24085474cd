use crate::domain::model::{SkillCategory, SkillEntry, SkillLevel};
use std::str::FromStr;
use std::time::Duration;

/// Delay before bars animate after a filter click (lets layout settle).
pub const FILTER_REFLOW_DELAY: Duration = Duration::from_millis(100);
/// Delay before all bars animate on first load.
pub const INITIAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Category(SkillCategory),
}

impl SkillFilter {
    pub fn matches(&self, category: SkillCategory) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Category(c) => *c == category,
        }
    }
}

impl FromStr for SkillFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(SkillFilter::All)
        } else {
            s.parse().map(SkillFilter::Category)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub hidden: bool,
    /// Rendered bar width; `None` until the first animation applies.
    pub bar_width: Option<u8>,
    pending_at: Option<Duration>,
}

/// Skill grid state: active filter, card visibility and level bars.
#[derive(Debug, Clone)]
pub struct SkillsBoard {
    active: SkillFilter,
    cards: Vec<SkillCard>,
}

impl SkillsBoard {
    /// Schedules every bar to fill after [`INITIAL_DELAY`].
    pub fn new(skills: &[SkillEntry], now: Duration) -> Self {
        let cards = skills
            .iter()
            .map(|skill| SkillCard {
                name: skill.name.clone(),
                category: skill.category,
                level: skill.level,
                hidden: false,
                bar_width: None,
                pending_at: Some(now + INITIAL_DELAY),
            })
            .collect();

        Self {
            active: SkillFilter::All,
            cards,
        }
    }

    pub fn active(&self) -> SkillFilter {
        self.active
    }

    pub fn cards(&self) -> &[SkillCard] {
        &self.cards
    }

    pub fn visible(&self) -> impl Iterator<Item = &SkillCard> {
        self.cards.iter().filter(|c| !c.hidden)
    }

    pub fn click_filter(&mut self, filter: SkillFilter, now: Duration) {
        self.active = filter;
        for card in &mut self.cards {
            if filter.matches(card.category) {
                card.hidden = false;
                card.pending_at = Some(now + FILTER_REFLOW_DELAY);
            } else {
                card.hidden = true;
            }
        }
        tracing::debug!(
            "Skill filter {:?}: {} visible",
            filter,
            self.cards.iter().filter(|c| !c.hidden).count()
        );
    }

    /// Applies bar updates that are due at `now`. Returns how many changed.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut applied = 0;
        for card in &mut self.cards {
            if let Some(due) = card.pending_at {
                if due <= now {
                    card.pending_at = None;
                    card.bar_width = Some(card.level.percent());
                    applied += 1;
                }
            }
        }
        applied
    }
}
