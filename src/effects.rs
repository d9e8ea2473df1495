//! Short-lived water particles.
//!
//! Particles are purely visual: they never feed back into the simulation.
//! Each one rises, falls under gravity, and is reaped once its life runs out.

use crate::core::constants::{
    PARTICLE_GRAVITY, PARTICLE_JITTER_X, PARTICLE_LIFE_DECAY, PARTICLE_LIFT_MIN,
    PARTICLE_LIFT_RANGE, PARTICLE_MAX_SIZE, PARTICLE_MIN_SIZE,
};
use rand::Rng;

/// What produced a particle. Only affects how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Bobber hitting the water.
    Splash,
    /// Spray from the oars.
    Wake,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Starts at 1.0; the particle is removed once this reaches zero.
    pub life: f64,
    pub size: f64,
    pub kind: ParticleKind,
}

impl Particle {
    fn spawn(x: f64, y: f64, kind: ParticleKind, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            vx: (rng.gen::<f64>() - 0.5) * PARTICLE_JITTER_X,
            vy: -rng.gen::<f64>() * PARTICLE_LIFT_RANGE - PARTICLE_LIFT_MIN,
            life: 1.0,
            size: PARTICLE_MIN_SIZE + rng.gen::<f64>() * (PARTICLE_MAX_SIZE - PARTICLE_MIN_SIZE),
            kind,
        }
    }

    /// Advances one tick. Returns false once the particle has expired.
    pub fn update(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.life -= PARTICLE_LIFE_DECAY;
        self.life > 0.0
    }
}

/// All live particles.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `count` particles at a point.
    pub fn emit(&mut self, x: f64, y: f64, count: usize, kind: ParticleKind, rng: &mut impl Rng) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(x, y, kind, rng));
        }
    }

    /// Advances every particle and drops expired ones.
    pub fn update(&mut self) {
        self.particles.retain_mut(|p| p.update());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
