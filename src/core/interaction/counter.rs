use crate::core::animation::{Animation, Step};
use std::time::Duration;

pub const COUNTER_TICK: Duration = Duration::from_millis(30);
const COUNTER_STEPS: f64 = 50.0;

/// Counts a stat number up to its target in ~50 ticks, ending exactly on it.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / COUNTER_STEPS,
            done: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

impl Animation for CounterAnimation {
    type Frame = u64;

    fn tick(&mut self) -> Option<Step<u64>> {
        self.next().map(|value| Step::new(value, COUNTER_TICK))
    }
}
