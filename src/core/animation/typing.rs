use super::{Animation, Step};
use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const FULL_PAUSE: Duration = Duration::from_millis(2000);
pub const EMPTY_PAUSE: Duration = Duration::from_millis(500);

/// Types each string out, pauses, deletes it, then moves to the next one,
/// wrapping around forever.
#[derive(Debug, Clone)]
pub struct TypingCycler {
    texts: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl TypingCycler {
    /// `None` when there is nothing non-empty to type.
    pub fn new<S: AsRef<str>>(texts: &[S]) -> Option<Self> {
        let texts: Vec<Vec<char>> = texts
            .iter()
            .map(|t| t.as_ref().chars().collect::<Vec<_>>())
            .filter(|chars| !chars.is_empty())
            .collect();

        if texts.is_empty() {
            return None;
        }

        Some(Self {
            texts,
            index: 0,
            shown: 0,
            deleting: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Applies one character change and returns the visible text with the
    /// delay before the next change.
    pub fn step(&mut self) -> (String, Duration) {
        let current = &self.texts[self.index];

        if self.deleting {
            self.shown -= 1;
        } else {
            self.shown += 1;
        }
        let visible: String = current[..self.shown].iter().collect();

        let delay = if !self.deleting && self.shown == current.len() {
            self.deleting = true;
            FULL_PAUSE
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.texts.len();
            EMPTY_PAUSE
        } else if self.deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        };

        (visible, delay)
    }
}

impl Animation for TypingCycler {
    type Frame = String;

    fn tick(&mut self) -> Option<Step<String>> {
        let (text, delay) = self.step();
        Some(Step::new(text, delay))
    }
}
