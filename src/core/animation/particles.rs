use super::{Animation, Step, FRAME_INTERVAL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;

pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_COLOR: &str = "rgba(16, 185, 129, 0.5)";
const MAX_SPEED: f64 = 0.25;
const MAX_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            vx: (rng.gen::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            vy: (rng.gen::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            radius: rng.gen::<f64>() * MAX_RADIUS,
        }
    }

    /// Moves by one velocity step, then flips any component whose axis
    /// left the viewport.
    pub fn update(&mut self, viewport: Viewport) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > viewport.width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > viewport.height {
            self.vy = -self.vy;
        }
    }
}

/// Filled circle to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: &'static str,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    resizes: Option<watch::Receiver<Viewport>>,
}

impl ParticleField {
    pub fn new(viewport: Viewport) -> Self {
        Self::seeded(viewport, PARTICLE_COUNT, &mut StdRng::from_entropy())
    }

    pub fn seeded<R: Rng + ?Sized>(viewport: Viewport, count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng, viewport)).collect();
        Self {
            particles,
            viewport,
            resizes: None,
        }
    }

    /// Follow viewport changes published on `rx` while running.
    pub fn with_resizes(mut self, rx: watch::Receiver<Viewport>) -> Self {
        self.resizes = Some(rx);
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// 只調整畫布大小；粒子不重新產生也不縮放
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn update(&mut self) {
        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.update(viewport);
        }
    }

    pub fn circles(&self) -> Vec<Circle> {
        self.particles
            .iter()
            .map(|p| Circle {
                x: p.x,
                y: p.y,
                radius: p.radius,
                color: PARTICLE_COLOR,
            })
            .collect()
    }
}

impl Animation for ParticleField {
    type Frame = Vec<Circle>;

    fn tick(&mut self) -> Option<Step<Vec<Circle>>> {
        let resized = match self.resizes.as_mut() {
            Some(rx) if rx.has_changed().unwrap_or(false) => Some(*rx.borrow_and_update()),
            _ => None,
        };
        if let Some(viewport) = resized {
            tracing::debug!("Particle canvas resized to {}x{}", viewport.width, viewport.height);
            self.resize(viewport);
        }

        self.update();
        Some(Step::new(self.circles(), FRAME_INTERVAL))
    }
}
