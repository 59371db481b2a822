use crate::math::Vec2;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Meteor {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Ticks lived so far, scaled by speed.
    pub age: f32,
    pub lifetime: f32,
    pub active: bool,
}

impl Meteor {
    const IDLE: Meteor = Meteor {
        position: Vec2::ZERO,
        velocity: Vec2::ZERO,
        age: 0.0,
        lifetime: 0.0,
        active: false,
    };

    /// Remaining life in `[0, 1]`; renderers fade the streak with it.
    pub fn life_fraction(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }
}

/// A single reusable meteor slot. Spawning is always requested from
/// outside; the spawner only integrates and retires.
pub struct MeteorSpawner {
    slot: Meteor,
    bounds: f32,
}

impl MeteorSpawner {
    pub fn new(bounds: f32) -> Self {
        Self {
            slot: Meteor::IDLE,
            bounds,
        }
    }

    pub fn active(&self) -> Option<&Meteor> {
        self.slot.active.then_some(&self.slot)
    }

    /// Activates the slot, replacing any meteor still in flight.
    pub fn spawn(&mut self, position: Vec2, velocity: Vec2, lifetime: f32) {
        self.slot = Meteor {
            position,
            velocity,
            age: 0.0,
            lifetime,
            active: true,
        };
        log::debug!("meteor spawned at ({:.2}, {:.2})", position.x, position.y);
    }

    pub fn advance(&mut self, scale: f32) {
        if !self.slot.active {
            return;
        }
        let m = &mut self.slot;
        m.position = m.position.add(m.velocity.scale(scale));
        m.age += scale;
        if m.age >= m.lifetime || !m.position.within(self.bounds) {
            log::debug!("meteor retired after {:.1} ticks", m.age);
            self.slot = Meteor::IDLE;
        }
    }
}

pub const SHOWER_STREAKS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowerStreak {
    pub position: Vec2,
    pub alpha: f32,
}

/// Streak `index` of the background meteor shower at `global` phase, or
/// `None` during the part of its cycle where it is not visible.
pub fn shower_streak(index: usize, global: f32) -> Option<ShowerStreak> {
    let m = index as f32;
    let phase = (global * 0.02 + m * 1.5).rem_euclid(2.0);
    if phase >= 1.0 {
        return None;
    }
    Some(ShowerStreak {
        position: Vec2::new(0.5 - m * 0.25 + phase * 0.3, 0.9 - phase * 0.4),
        alpha: (phase * PI).sin(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_spawned() {
        let mut s = MeteorSpawner::new(1.5);
        assert!(s.active().is_none());
        s.advance(1.0);
        assert!(s.active().is_none());
    }

    #[test]
    fn integrates_then_expires_on_lifetime() {
        let mut s = MeteorSpawner::new(1.5);
        s.spawn(Vec2::new(-1.0, 0.8), Vec2::new(0.01, -0.005), 10.0);
        for _ in 0..9 {
            s.advance(1.0);
        }
        let m = *s.active().expect("still flying");
        assert!((m.position.x - -0.91).abs() < 1e-5);
        assert!(m.life_fraction() > 0.0);
        s.advance(1.0);
        assert!(s.active().is_none());
    }

    #[test]
    fn expires_when_leaving_bounds() {
        let mut s = MeteorSpawner::new(1.0);
        s.spawn(Vec2::new(0.95, 0.0), Vec2::new(0.1, 0.0), 1_000.0);
        s.advance(1.0);
        assert!(s.active().is_none());
    }

    #[test]
    fn respawn_reuses_the_slot() {
        let mut s = MeteorSpawner::new(1.5);
        s.spawn(Vec2::ZERO, Vec2::new(0.01, 0.0), 50.0);
        s.advance(5.0);
        s.spawn(Vec2::new(0.2, 0.2), Vec2::ZERO, 50.0);
        let m = s.active().expect("active");
        assert_eq!(m.age, 0.0);
        assert_eq!(m.position, Vec2::new(0.2, 0.2));
    }

    #[test]
    fn shower_streak_visible_half_the_cycle() {
        let visible = (0..1000)
            .filter(|k| shower_streak(0, *k as f32).is_some())
            .count();
        assert!((450..=550).contains(&visible), "visible {visible}");
        let s = shower_streak(0, 25.0).expect("phase 0.5 is visible");
        assert!((s.alpha - 1.0).abs() < 1e-4);
    }
}
