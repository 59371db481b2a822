use crate::bodies::PLUTO_SPEED;

pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 2.0;
pub const SPEED_STEP: f32 = 0.25;

const GLOBAL_RATE: f32 = 0.5;
const MOON_RATE: f32 = 2.0;
const SUN_PULSE_RATE: f32 = 0.12;
const CORONA_RATE: f32 = 0.02;
const HEATWAVE_RATE: f32 = 0.08;
const CLOUD_RATE: f32 = 0.3;
const DWARF_PLANET_RATE: f32 = GLOBAL_RATE * PLUTO_SPEED;
const CERES_RATE: f32 = 0.004;

/// Unbounded animation accumulators. Consumers reduce them with `mod 360`
/// or trig functions; they are never wrapped here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Phases {
    pub global: f32,
    pub moon: f32,
    pub sun_pulse: f32,
    pub corona: f32,
    pub heatwave: f32,
    pub cloud: f32,
    pub dwarf_planet: f32,
    /// Radians, unlike the others.
    pub ceres: f32,
}

#[derive(Clone, Debug)]
pub struct SimulationClock {
    phases: Phases,
    paused: bool,
    speed_multiplier: f32,
    ticks: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            phases: Phases::default(),
            paused: false,
            speed_multiplier: 1.0,
            ticks: 0,
        }
    }

    pub fn phases(&self) -> Phases {
        self.phases
    }
    pub fn paused(&self) -> bool {
        self.paused
    }
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }
    /// Number of unpaused `advance` calls, whatever `dt_ticks` each used.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How far integrating subsystems should move for `dt_ticks`, or `None`
    /// while paused.
    pub fn step_scale(&self, dt_ticks: f32) -> Option<f32> {
        if self.paused {
            None
        } else {
            Some(self.speed_multiplier * dt_ticks)
        }
    }

    pub fn advance(&mut self, dt_ticks: f32) {
        let Some(k) = self.step_scale(dt_ticks) else {
            return;
        };
        let p = &mut self.phases;
        p.global += GLOBAL_RATE * k;
        p.moon += MOON_RATE * k;
        p.sun_pulse += SUN_PULSE_RATE * k;
        p.corona += CORONA_RATE * k;
        p.heatwave += HEATWAVE_RATE * k;
        p.cloud += CLOUD_RATE * k;
        p.dwarf_planet += DWARF_PLANET_RATE * k;
        p.ceres += CERES_RATE * k;
        self.ticks += 1;
    }

    /// Steps are snapped to the 0.25 grid, so only whole steps register.
    fn set_speed(&mut self, delta: f32) {
        let next = (self.speed_multiplier + delta).clamp(MIN_SPEED, MAX_SPEED);
        // keep the multiplier on the 0.25 grid so repeated steps never drift
        self.speed_multiplier = (next / SPEED_STEP).round() * SPEED_STEP;
    }
    pub fn speed_up(&mut self) {
        self.set_speed(SPEED_STEP);
    }
    pub fn speed_down(&mut self) {
        self.set_speed(-SPEED_STEP);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}
