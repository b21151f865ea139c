use rand::Rng;
use std::f32::consts::TAU;

// Click burst simulation. Units are CSS pixels and animation frames.

pub const PRIMARY_COUNT: usize = 50;
pub const SECONDARY_COUNT: usize = 20;

pub const PRIMARY_SPEED: (f32, f32) = (2.0, 6.0);
pub const PRIMARY_DECAY: (f32, f32) = (0.01, 0.03);
pub const PRIMARY_RADIUS: (f32, f32) = (2.0, 5.0);
pub const PRIMARY_GLOW: (f32, f32) = (10.0, 30.0);

pub const SECONDARY_SPEED: (f32, f32) = (1.0, 3.0);
pub const SECONDARY_DECAY: (f32, f32) = (0.02, 0.05);
pub const SECONDARY_RADIUS: (f32, f32) = (1.0, 3.0);
pub const SECONDARY_GLOW: (f32, f32) = (5.0, 15.0);

pub const GRAVITY: f32 = 0.1;

pub const SHOCKWAVE_GROWTH: f32 = 5.0;
pub const SHOCKWAVE_DECAY: f32 = 0.05;
pub const SHOCKWAVE_MAX_RADIUS: (f32, f32) = (100.0, 150.0);

/// 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    /// CSS `rgba()` string with the given alpha.
    pub fn css(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }
}

pub const GALACTIC_BLUE: Rgb = Rgb(0x0E, 0xA5, 0xFF);

pub const BURST_PALETTE: [Rgb; 6] = [
    GALACTIC_BLUE,
    Rgb(0x8B, 0x5C, 0xF6), // nebula violet
    Rgb(0x6B, 0x2E, 0xFF), // deep violet
    Rgb(0x7C, 0xFE, 0x82), // energy lime
    Rgb(0xFF, 0xD7, 0x00), // gold
    Rgb::WHITE,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    Spark {
        vx: f32,
        vy: f32,
        radius: f32,
        glow: f32,
    },
    Shockwave {
        radius: f32,
        max_radius: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Remaining life in (0, 1]; the particle is dropped once it reaches 0.
    pub life: f32,
    pub decay: f32,
    pub color: Rgb,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn is_shockwave(&self) -> bool {
        matches!(self.kind, ParticleKind::Shockwave { .. })
    }

    /// Advance one frame. Returns `false` when the particle should be removed.
    pub fn step(&mut self) -> bool {
        self.life -= self.decay;
        match &mut self.kind {
            ParticleKind::Spark { vx, vy, .. } => {
                self.x += *vx;
                self.y += *vy;
                *vy += GRAVITY;
                self.life > 0.0
            }
            ParticleKind::Shockwave { radius, max_radius } => {
                *radius += SHOCKWAVE_GROWTH;
                self.life > 0.0 && *radius < *max_radius
            }
        }
    }
}

#[inline]
fn in_band<R: Rng + ?Sized>(rng: &mut R, band: (f32, f32)) -> f32 {
    rng.gen_range(band.0..band.1)
}

fn spark<R: Rng + ?Sized>(
    rng: &mut R,
    x: f32,
    y: f32,
    angle: f32,
    speed: (f32, f32),
    decay: (f32, f32),
    radius: (f32, f32),
    glow: (f32, f32),
    color: Rgb,
) -> Particle {
    let v = in_band(rng, speed);
    Particle {
        x,
        y,
        life: 1.0,
        decay: in_band(rng, decay),
        color,
        kind: ParticleKind::Spark {
            vx: angle.cos() * v,
            vy: angle.sin() * v,
            radius: in_band(rng, radius),
            glow: in_band(rng, glow),
        },
    }
}

/// Active set of click particles. Removal order is irrelevant, so dead
/// entries are swap-removed.
#[derive(Default, Debug)]
pub struct BurstField {
    particles: Vec<Particle>,
}

impl BurstField {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(PRIMARY_COUNT + SECONDARY_COUNT + 1),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn a full explosion (fan, scatter and shockwave) at `(x, y)`.
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) {
        self.particles.reserve(PRIMARY_COUNT + SECONDARY_COUNT + 1);
        for i in 0..PRIMARY_COUNT {
            let angle = TAU * i as f32 / PRIMARY_COUNT as f32;
            let color = BURST_PALETTE[rng.gen_range(0..BURST_PALETTE.len())];
            self.particles.push(spark(
                rng,
                x,
                y,
                angle,
                PRIMARY_SPEED,
                PRIMARY_DECAY,
                PRIMARY_RADIUS,
                PRIMARY_GLOW,
                color,
            ));
        }
        for _ in 0..SECONDARY_COUNT {
            let angle = rng.gen_range(0.0..TAU);
            self.particles.push(spark(
                rng,
                x,
                y,
                angle,
                SECONDARY_SPEED,
                SECONDARY_DECAY,
                SECONDARY_RADIUS,
                SECONDARY_GLOW,
                Rgb::WHITE,
            ));
        }
        self.particles.push(Particle {
            x,
            y,
            life: 1.0,
            decay: SHOCKWAVE_DECAY,
            color: GALACTIC_BLUE,
            kind: ParticleKind::Shockwave {
                radius: 0.0,
                max_radius: in_band(rng, SHOCKWAVE_MAX_RADIUS),
            },
        });
    }

    /// Advance every particle one frame and drop the expired ones.
    /// Returns the number removed.
    pub fn step(&mut self) -> usize {
        let mut removed = 0;
        let mut i = 0;
        while i < self.particles.len() {
            if self.particles[i].step() {
                i += 1;
            } else {
                self.particles.swap_remove(i);
                removed += 1;
            }
        }
        removed
    }
}
