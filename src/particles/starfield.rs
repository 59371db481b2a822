use crate::math::Vec2;
use rand::Rng;

/// Stars cover a square slightly larger than the unit view so they reach
/// the corners of a wide viewport.
pub const STAR_EXTENT: f32 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub brightness: f32,
    pub twinkle_speed: f32,
}

impl Star {
    /// Apparent brightness at `global` phase. Computed, never stored.
    pub fn twinkle(&self, global: f32) -> f32 {
        let t = 0.5 + 0.5 * (global * self.twinkle_speed + self.position.x * 10.0).sin();
        self.brightness * t
    }

    /// Slower, shallower flicker used for the sky seen from the ground.
    pub fn sky_twinkle(&self, global: f32) -> f32 {
        let t = 0.6 + 0.4 * (global * self.twinkle_speed * 1.5 + self.position.x * 15.0).sin();
        self.brightness * t
    }
}

pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let mut stars = Vec::with_capacity(count);
        for _ in 0..count {
            stars.push(Star {
                position: Vec2::new(
                    rng.gen_range(-STAR_EXTENT..STAR_EXTENT),
                    rng.gen_range(-STAR_EXTENT..STAR_EXTENT),
                ),
                brightness: rng.gen_range(0.3..1.0),
                twinkle_speed: rng.gen_range(0.5..2.0),
            });
        }
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
