use crate::error::{SimError, SimResult};

pub const PLANET_COUNT: usize = 8;

/// Index of a planet in the fixed Mercury..Neptune order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u8);

impl BodyId {
    pub const MERCURY: BodyId = BodyId(0);
    pub const VENUS: BodyId = BodyId(1);
    pub const EARTH: BodyId = BodyId(2);
    pub const MARS: BodyId = BodyId(3);
    pub const JUPITER: BodyId = BodyId(4);
    pub const SATURN: BodyId = BodyId(5);
    pub const URANUS: BodyId = BodyId(6);
    pub const NEPTUNE: BodyId = BodyId(7);

    pub fn new(index: usize) -> SimResult<BodyId> {
        if index < PLANET_COUNT {
            Ok(BodyId(index as u8))
        } else {
            Err(SimError::InvalidBody(index))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn body(self) -> &'static CelestialBody {
        &PLANETS[self.index()]
    }

    pub fn all() -> impl Iterator<Item = BodyId> {
        (0..PLANET_COUNT as u8).map(BodyId)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CelestialBody {
    pub name: &'static str,
    pub fact: &'static str,
    pub distance: f32,
    /// Degrees of orbit per unit of global phase.
    pub angular_speed: f32,
    pub size: f32,
    /// Degrees of spin per tick.
    pub rotation_speed: f32,
    pub moon_count: usize,
    pub ringed: bool,
}

pub static PLANETS: [CelestialBody; PLANET_COUNT] = [
    CelestialBody {
        name: "Mercury",
        fact: "Smallest planet, closest to Sun",
        distance: 0.22,
        angular_speed: 2.0,
        size: 0.012,
        rotation_speed: 0.5,
        moon_count: 0,
        ringed: false,
    },
    CelestialBody {
        name: "Venus",
        fact: "Hottest planet, rotates backwards",
        distance: 0.32,
        angular_speed: 1.6,
        size: 0.022,
        rotation_speed: 0.3,
        moon_count: 0,
        ringed: false,
    },
    CelestialBody {
        name: "Earth",
        fact: "Our home, has liquid water",
        distance: 0.42,
        angular_speed: 1.2,
        size: 0.028,
        rotation_speed: 1.0,
        moon_count: 1,
        ringed: false,
    },
    CelestialBody {
        name: "Mars",
        fact: "The Red Planet, has largest volcano",
        distance: 0.54,
        angular_speed: 0.9,
        size: 0.018,
        rotation_speed: 0.9,
        moon_count: 2,
        ringed: false,
    },
    CelestialBody {
        name: "Jupiter",
        fact: "Largest planet, Great Red Spot",
        distance: 0.70,
        angular_speed: 0.5,
        size: 0.055,
        rotation_speed: 2.5,
        moon_count: 4,
        ringed: false,
    },
    CelestialBody {
        name: "Saturn",
        fact: "Famous for its rings",
        distance: 0.82,
        angular_speed: 0.4,
        size: 0.048,
        rotation_speed: 2.2,
        moon_count: 3,
        ringed: true,
    },
    CelestialBody {
        name: "Uranus",
        fact: "Rotates on its side",
        distance: 0.92,
        angular_speed: 0.3,
        size: 0.035,
        rotation_speed: 1.5,
        moon_count: 2,
        ringed: true,
    },
    CelestialBody {
        name: "Neptune",
        fact: "Strongest winds in solar system",
        distance: 1.02,
        angular_speed: 0.2,
        size: 0.033,
        rotation_speed: 1.6,
        moon_count: 1,
        ringed: false,
    },
];

// Dwarf bodies
pub const PLUTO_DISTANCE: f32 = 1.15;
pub const PLUTO_SPEED: f32 = 0.1;
pub const PLUTO_SIZE: f32 = 0.008;
pub const CHARON_ORBIT: f32 = PLUTO_SIZE * 2.5;
pub const CHARON_SIZE: f32 = PLUTO_SIZE * 0.5;
pub const CERES_DISTANCE: f32 = 0.62;
pub const CERES_SIZE: f32 = 0.006;

/// Degrees per tick every ring advances, independent of the body's spin.
pub const RING_SPEED: f32 = 0.2;

/// Spin and ring state for one planet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyRuntime {
    pub self_rotation: f32,
    pub ring_angle: f32,
}

impl BodyRuntime {
    /// Advance by `scale` ticks' worth of motion. A paused body does not move.
    pub fn advance(&mut self, body: &CelestialBody, scale: f32, paused: bool) {
        if paused {
            return;
        }
        self.self_rotation += body.rotation_speed * scale;
        if body.ringed {
            self.ring_angle += RING_SPEED * scale;
        }
    }
}
