use super::{Animation, Step, FRAME_INTERVAL};
use tokio::sync::watch;

pub const EASING: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub leader: Point,
    pub follower: Point,
}

/// Pointer-move events feeding a [`CursorFollower`].
#[derive(Debug, Clone)]
pub struct PointerInput(watch::Sender<Point>);

impl PointerInput {
    pub fn move_to(&self, x: f64, y: f64) {
        // send_replace never fails, even after the follower is gone
        self.0.send_replace(Point::new(x, y));
    }
}

/// Leader tracks the pointer instantly; follower eases toward it each frame.
pub struct CursorFollower {
    pointer: watch::Receiver<Point>,
    follower: Point,
}

impl CursorFollower {
    pub fn new() -> (Self, PointerInput) {
        let (tx, rx) = watch::channel(Point::default());
        (
            Self {
                pointer: rx,
                follower: Point::default(),
            },
            PointerInput(tx),
        )
    }

    pub fn step(&mut self) -> CursorFrame {
        let leader = *self.pointer.borrow();
        self.follower = ease(self.follower, leader);
        CursorFrame {
            leader,
            follower: self.follower,
        }
    }
}

pub fn ease(current: Point, target: Point) -> Point {
    Point {
        x: current.x + (target.x - current.x) * EASING,
        y: current.y + (target.y - current.y) * EASING,
    }
}

impl Animation for CursorFollower {
    type Frame = CursorFrame;

    fn tick(&mut self) -> Option<Step<CursorFrame>> {
        Some(Step::new(self.step(), FRAME_INTERVAL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leader_jumps_follower_eases() {
        let (mut cursor, input) = CursorFollower::new();
        input.move_to(100.0, 50.0);

        let frame = cursor.step();
        assert_eq!(frame.leader, Point::new(100.0, 50.0));
        assert!((frame.follower.x - 10.0).abs() < 1e-9);
        assert!((frame.follower.y - 5.0).abs() < 1e-9);

        let frame = cursor.step();
        assert!((frame.follower.x - 19.0).abs() < 1e-9);
    }

    #[test]
    fn converges_without_overshoot() {
        let (mut cursor, input) = CursorFollower::new();
        input.move_to(300.0, -200.0);

        let mut last = Point::default();
        for _ in 0..400 {
            let f = cursor.step().follower;
            assert!(f.x >= last.x && f.x <= 300.0);
            assert!(f.y <= last.y && f.y >= -200.0);
            last = f;
        }
        assert!((last.x - 300.0).abs() < 1e-6);
        assert!((last.y + 200.0).abs() < 1e-6);
    }
}
