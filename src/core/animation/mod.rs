//! Ambient animation loops. Each loop owns its state and runs as its own
//! tokio task; nothing outside the loop reads or writes that state.

pub mod cursor;
pub mod floating_words;
pub mod particles;
pub mod typing;

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Display-refresh pacing for frame-driven loops (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// One produced frame and the delay before the next tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<F> {
    pub frame: F,
    pub next_in: Duration,
}

impl<F> Step<F> {
    pub fn new(frame: F, next_in: Duration) -> Self {
        Self { frame, next_in }
    }
}

pub trait Animation: Send + 'static {
    type Frame: Send + 'static;

    /// Advances one tick. `None` ends the loop.
    fn tick(&mut self) -> Option<Step<Self::Frame>>;
}

/// Running loop. Dropping the handle also stops the loop.
pub struct AnimationHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl AnimationHandle {
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        if let Err(e) = self.task.await {
            tracing::warn!("Animation task ended abnormally: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// 啟動動畫迴圈，每個 frame 交給 sink
pub fn spawn_animation<A, S>(animation: A, mut sink: S) -> AnimationHandle
where
    A: Animation,
    S: FnMut(A::Frame) + Send + 'static,
{
    let (stop, mut stopped) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut animation = animation;
        while let Some(step) = animation.tick() {
            sink(step.frame);
            tokio::select! {
                _ = tokio::time::sleep(step.next_in) => {}
                _ = stopped.changed() => break,
            }
        }
        tracing::debug!("Animation loop finished");
    });

    AnimationHandle { stop, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Countdown(u32);

    impl Animation for Countdown {
        type Frame = u32;

        fn tick(&mut self) -> Option<Step<u32>> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(Step::new(self.0, Duration::from_millis(10)))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn finite_animation_runs_to_completion() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        let handle = spawn_animation(Countdown(3), move |f| sink.lock().unwrap().push(f));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
        assert_eq!(*frames.lock().unwrap(), vec![2, 1, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_tears_down_running_loop() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        let handle = spawn_animation(Countdown(u32::MAX), move |f| sink.lock().unwrap().push(f));

        tokio::time::sleep(Duration::from_millis(35)).await;
        handle.stop().await;
        let seen = frames.lock().unwrap().len();
        assert!((3..=5).contains(&seen), "saw {} frames", seen);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(frames.lock().unwrap().len(), seen);
    }
}
