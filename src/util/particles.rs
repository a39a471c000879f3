//! Particle field simulation for the dashboard background.
//!
//! The field is pure data: the canvas component seeds it with
//! `Math.random`, calls [`ParticleField::step`] once per animation frame and
//! draws the particles and [`ParticleField::links`] it gets back.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

pub const PARTICLE_COUNT: usize = 30;
/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE_PX: f64 = 150.0;
const LINK_MAX_ALPHA: f64 = 0.15;
const MAX_SPEED: f64 = 0.5;

const CYAN: &str = "rgba(0,212,255,0.4)";
const ORANGE: &str = "rgba(255,107,53,0.4)";

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: &'static str,
}

/// Line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

impl Link {
    #[must_use]
    pub fn stroke_style(&self) -> String {
        format!("rgba(0,212,255,{:.3})", self.alpha)
    }
}

/// Line opacity for two particles `distance` apart, or `None` when too far.
#[must_use]
pub fn link_alpha(distance: f64) -> Option<f64> {
    (distance < LINK_DISTANCE_PX).then(|| LINK_MAX_ALPHA * (1.0 - distance / LINK_DISTANCE_PX))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// `random` must yield values in `0.0..1.0`.
    pub fn seeded(count: usize, width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: random() * width,
                y: random() * height,
                vx: (random() - 0.5) * MAX_SPEED,
                vy: (random() - 0.5) * MAX_SPEED,
                radius: random() * 2.0 + 1.0,
                color: if random() > 0.5 { CYAN } else { ORANGE },
            })
            .collect();
        Self { width, height, particles }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame; particles leaving an edge re-enter on the opposite one.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 {
                p.x = self.width;
            } else if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            } else if p.y > self.height {
                p.y = 0.0;
            }
        }
    }

    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if let Some(alpha) = link_alpha(distance) {
                    links.push(Link { from: (a.x, a.y), to: (b.x, b.y), alpha });
                }
            }
        }
        links
    }
}
