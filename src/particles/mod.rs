//! Generative background subsystems. Stars and asteroids are drawn once and
//! evaluated from the global phase; dust, the comet and the meteor slot are
//! integrated each unpaused tick.

mod asteroids;
mod comet;
mod dust;
mod meteor;
mod starfield;

pub use asteroids::{Asteroid, AsteroidBelt, BELT_INNER, BELT_OUTER};
pub use comet::Comet;
pub use dust::{DustParticle, SpaceDust, DUST_BOUNDS, DUST_SPAWN};
pub use meteor::{shower_streak, Meteor, MeteorSpawner, ShowerStreak, SHOWER_STREAKS};
pub use starfield::{Star, Starfield, STAR_EXTENT};

use rand::Rng;

/// Meteors are retired once they leave this square.
pub const METEOR_BOUNDS: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleCounts {
    pub stars: usize,
    pub asteroids: usize,
    pub dust: usize,
}

impl Default for ParticleCounts {
    fn default() -> Self {
        Self {
            stars: 300,
            asteroids: 150,
            dust: 100,
        }
    }
}

pub struct ParticleSystems {
    pub starfield: Starfield,
    pub asteroids: AsteroidBelt,
    pub dust: SpaceDust,
    pub meteor: MeteorSpawner,
    pub comet: Comet,
}

impl ParticleSystems {
    pub fn generate<R: Rng>(rng: &mut R, counts: ParticleCounts) -> Self {
        Self {
            starfield: Starfield::generate(rng, counts.stars),
            asteroids: AsteroidBelt::generate(rng, counts.asteroids),
            dust: SpaceDust::generate(rng, counts.dust),
            meteor: MeteorSpawner::new(METEOR_BOUNDS),
            comet: Comet::default(),
        }
    }

    /// Integrates the moving subsystems by `scale` ticks.
    pub fn advance(&mut self, scale: f32) {
        self.dust.advance(scale);
        self.comet.advance(scale);
        self.meteor.advance(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn default_counts_match_the_scene() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = ParticleSystems::generate(&mut rng, ParticleCounts::default());
        assert_eq!(p.starfield.stars().len(), 300);
        assert_eq!(p.asteroids.asteroids().len(), 150);
        assert_eq!(p.dust.particles().len(), 100);
        assert!(p.meteor.active().is_none());
    }

    #[test]
    fn same_seed_same_particles() {
        let counts = ParticleCounts::default();
        let a = ParticleSystems::generate(&mut StdRng::seed_from_u64(42), counts);
        let b = ParticleSystems::generate(&mut StdRng::seed_from_u64(42), counts);
        assert_eq!(a.starfield.stars(), b.starfield.stars());
        assert_eq!(a.asteroids.asteroids(), b.asteroids.asteroids());
        assert_eq!(a.dust.particles(), b.dust.particles());
    }
}
