//! Pure position functions. Nothing here holds state: every position is
//! recomputed from a phase accumulator, so bodies cannot drift away from
//! the clock and any past phase can be queried again.

use crate::bodies::{
    BodyId, CERES_DISTANCE, CHARON_ORBIT, PLUTO_DISTANCE,
};
use crate::math::{angle_between_deg, bearing_deg, deg, Vec2};
use std::f32::consts::PI;

pub fn position_of(body: BodyId, global: f32) -> Vec2 {
    let b = body.body();
    Vec2::polar(b.distance, deg(global * b.angular_speed))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonPlacement {
    pub position: Vec2,
    pub orbit_radius: f32,
    pub size: f32,
}

/// Moon `index` of `body`, placed around the parent position `parent`.
/// The parent is passed in so detail views can draw a planet away from its
/// orbital position.
pub fn moon_position(body: BodyId, index: usize, parent: Vec2, global: f32) -> MoonPlacement {
    let size = body.body().size;
    let i = index as f32;
    let orbit_radius = size * (2.0 + i * 0.8);
    let angle = global * (2.0 - i * 0.3) + i * 60.0;
    MoonPlacement {
        position: parent.add(Vec2::polar(orbit_radius, deg(angle))),
        orbit_radius,
        size: size * (0.15 + i * 0.05),
    }
}

pub fn moons(body: BodyId, parent: Vec2, global: f32) -> impl Iterator<Item = MoonPlacement> {
    (0..body.body().moon_count).map(move |i| moon_position(body, i, parent, global))
}

pub fn pluto_position(dwarf_planet: f32) -> Vec2 {
    Vec2::polar(PLUTO_DISTANCE, deg(dwarf_planet))
}

pub fn charon_position(dwarf_planet: f32) -> Vec2 {
    pluto_position(dwarf_planet).add(Vec2::polar(CHARON_ORBIT, deg(dwarf_planet * 3.0)))
}

/// `ceres` is already in radians.
pub fn ceres_position(ceres: f32) -> Vec2 {
    Vec2::polar(CERES_DISTANCE, ceres)
}

/// Bearing in degrees from a body toward its light source; the lit
/// hemisphere faces this way.
pub fn terminator_angle(body_pos: Vec2, light_pos: Vec2) -> f32 {
    bearing_deg(body_pos, light_pos)
}

pub fn sun_radius(sun_pulse: f32) -> f32 {
    0.12 + 0.008 * sun_pulse.sin()
}

pub fn sun_emission(sun_pulse: f32) -> f32 {
    0.1 + 0.05 * (sun_pulse * 2.0).sin()
}

// -------------------- Earth-Moon close-up --------------------

pub const CLOSEUP_EARTH: Vec2 = Vec2::new(0.0, -0.1);
pub const CLOSEUP_EARTH_RADIUS: f32 = 0.28;
pub const CLOSEUP_MOON_ORBIT: f32 = 0.5;
pub const CLOSEUP_MOON_RADIUS: f32 = 0.08;
pub const CLOSEUP_SUN: Vec2 = Vec2::new(-0.75, 0.65);
pub const SATELLITE_COUNT: usize = 3;

/// Half-width of the cone behind Earth in which the Moon counts as eclipsed.
const ECLIPSE_CONE_DEG: f32 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EarthMoonSystem {
    pub earth: Vec2,
    pub moon: Vec2,
    pub sun: Vec2,
    pub earth_terminator: f32,
    pub moon_terminator: f32,
}

pub fn earth_moon_system(moon_phase: f32) -> EarthMoonSystem {
    let moon = CLOSEUP_EARTH.add(Vec2::polar(CLOSEUP_MOON_ORBIT, deg(moon_phase)));
    EarthMoonSystem {
        earth: CLOSEUP_EARTH,
        moon,
        sun: CLOSEUP_SUN,
        earth_terminator: terminator_angle(CLOSEUP_EARTH, CLOSEUP_SUN),
        moon_terminator: terminator_angle(moon, CLOSEUP_SUN),
    }
}

pub fn iss_position(global: f32) -> Vec2 {
    CLOSEUP_EARTH.add(Vec2::polar(CLOSEUP_EARTH_RADIUS * 1.15, deg(global * 0.05)))
}

pub fn satellite_position(index: usize, global: f32) -> Vec2 {
    let s = index as f32;
    let orbit = CLOSEUP_EARTH_RADIUS * (1.25 + s * 0.08);
    let angle = global * (0.03 + s * 0.01) + s * PI * 2.0 / SATELLITE_COUNT as f32;
    CLOSEUP_EARTH.add(Vec2::polar(orbit, angle))
}

/// True when eclipse mode is on and the Moon sits in Earth's shadow cone.
pub fn lunar_eclipse(system: &EarthMoonSystem, eclipse_mode: bool) -> bool {
    if !eclipse_mode {
        return false;
    }
    let anti_sun = bearing_deg(system.sun, system.earth);
    let moon_dir = bearing_deg(system.earth, system.moon);
    angle_between_deg(anti_sun, moon_dir) <= ECLIPSE_CONE_DEG
}
