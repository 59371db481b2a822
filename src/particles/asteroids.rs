use crate::math::Vec2;
use rand::Rng;
use std::f32::consts::PI;

pub const BELT_INNER: f32 = 0.58;
pub const BELT_OUTER: f32 = 0.68;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    /// Radians at phase zero.
    pub angle: f32,
    pub distance: f32,
    pub size: f32,
    /// Radians per unit of global phase.
    pub speed: f32,
}

impl Asteroid {
    pub fn position(&self, global: f32) -> Vec2 {
        Vec2::polar(self.distance, self.angle + global * self.speed)
    }
}

pub struct AsteroidBelt {
    asteroids: Vec<Asteroid>,
}

impl AsteroidBelt {
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let asteroids = (0..count)
            .map(|_| Asteroid {
                angle: rng.gen_range(0.0..PI * 2.0),
                distance: rng.gen_range(BELT_INNER..BELT_OUTER),
                size: rng.gen_range(0.002..0.005),
                speed: rng.gen_range(0.001..0.0015),
            })
            .collect();
        Self { asteroids }
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }
}
