use crate::math::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A particle leaving this box is respawned.
pub const DUST_BOUNDS: f32 = 1.2;
/// Respawned particles land inside this box.
pub const DUST_SPAWN: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub alpha: f32,
}

pub struct SpaceDust {
    particles: Vec<DustParticle>,
    respawn_rng: StdRng,
}

fn spawn_point<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen_range(-DUST_SPAWN..DUST_SPAWN),
        rng.gen_range(-DUST_SPAWN..DUST_SPAWN),
    )
}

fn drift_component<R: Rng>(rng: &mut R) -> f32 {
    if rng.gen_bool(0.5) {
        -0.001
    } else {
        0.0
    }
}

impl SpaceDust {
    /// Draws every particle from `rng` and forks a private stream from it
    /// for respawn positions, so a run is fully determined by the seed.
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| DustParticle {
                position: spawn_point(rng),
                velocity: Vec2::new(drift_component(rng), drift_component(rng)),
                size: if rng.gen_bool(0.5) { 1.0 } else { 1.1 },
                alpha: 0.2 + rng.gen_range(0..5) as f32 / 10.0,
            })
            .collect();
        let respawn_rng = StdRng::seed_from_u64(rng.gen());
        Self { particles, respawn_rng }
    }

    pub fn particles(&self) -> &[DustParticle] {
        &self.particles
    }

    /// Moves every particle by `velocity * scale`. Returns how many wrapped.
    pub fn advance(&mut self, scale: f32) -> usize {
        let mut respawned = 0;
        for d in &mut self.particles {
            d.position = d.position.add(d.velocity.scale(scale));
            if !d.position.within(DUST_BOUNDS) {
                d.position = spawn_point(&mut self.respawn_rng);
                respawned += 1;
            }
        }
        if respawned > 0 {
            log::trace!("respawned {respawned} dust particles");
        }
        respawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dust(seed: u64, n: usize) -> SpaceDust {
        let mut rng = StdRng::seed_from_u64(seed);
        SpaceDust::generate(&mut rng, n)
    }

    #[test]
    fn initial_particles_start_inside_spawn_box() {
        let d = dust(3, 100);
        assert_eq!(d.particles().len(), 100);
        for p in d.particles() {
            assert!(p.position.within(DUST_SPAWN));
            assert!(p.velocity.x == 0.0 || p.velocity.x == -0.001);
            assert!((0.2..=0.6 + 1e-6).contains(&p.alpha));
        }
    }

    #[test]
    fn count_is_conserved_and_bounds_hold() {
        let mut d = dust(11, 100);
        for _ in 0..5_000 {
            d.advance(2.0);
            assert_eq!(d.particles().len(), 100);
            assert!(d.particles().iter().all(|p| p.position.within(DUST_BOUNDS)));
        }
    }

    #[test]
    fn exiting_particle_reappears_in_spawn_box_with_same_velocity() {
        let mut d = dust(5, 1);
        d.particles[0].position = Vec2::new(-1.1995, 0.0);
        d.particles[0].velocity = Vec2::new(-0.001, 0.0);
        let respawned = d.advance(1.0);
        assert_eq!(respawned, 1);
        let p = d.particles()[0];
        assert!(p.position.within(DUST_SPAWN));
        assert_eq!(p.velocity, Vec2::new(-0.001, 0.0));
    }

    #[test]
    fn zero_scale_does_not_move() {
        let mut d = dust(8, 20);
        let before = d.particles().to_vec();
        d.advance(0.0);
        assert_eq!(d.particles(), &before[..]);
    }
}
