use crate::bodies::{BodyId, BodyRuntime, PLANETS, PLANET_COUNT};
use crate::clock::{Phases, SimulationClock};
use crate::config::Settings;
use crate::math::Vec2;
use crate::orbit;
use crate::particles::{Asteroid, DustParticle, Meteor, ParticleSystems, Star};
use crate::view::{Frame, ViewState, ViewStateMachine};
use rand::{rngs::StdRng, SeedableRng};

/// Logical input commands, independent of any key layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectFrame(Frame),
    TogglePause,
    ToggleHelp,
    SpeedUp,
    SpeedDown,
    ToggleEclipse,
    ToggleBodyPause(BodyId),
    SelectZoomTarget(BodyId),
    ClearZoom,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Engine {
    clock: SimulationClock,
    view: ViewStateMachine,
    bodies: [BodyRuntime; PLANET_COUNT],
    particles: ParticleSystems,
}

impl Engine {
    pub fn new(settings: &Settings) -> Self {
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let particles = ParticleSystems::generate(&mut rng, settings.particle_counts());
        log::info!(
            "engine seeded with {:#x}: {} stars, {} asteroids, {} dust",
            settings.seed,
            particles.starfield.stars().len(),
            particles.asteroids.asteroids().len(),
            particles.dust.particles().len()
        );
        Self {
            clock: SimulationClock::new(),
            view: ViewStateMachine::new(),
            bodies: [BodyRuntime::default(); PLANET_COUNT],
            particles,
        }
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }
    pub fn view(&self) -> &ViewStateMachine {
        &self.view
    }

    pub fn dispatch(&mut self, cmd: Command) -> Flow {
        log::debug!("command {cmd:?}");
        match cmd {
            Command::SelectFrame(f) => self.view.select_frame(f),
            Command::TogglePause => self.clock.toggle_pause(),
            Command::ToggleHelp => self.view.toggle_help(),
            Command::SpeedUp => self.clock.speed_up(),
            Command::SpeedDown => self.clock.speed_down(),
            Command::ToggleEclipse => self.view.toggle_eclipse(),
            Command::ToggleBodyPause(id) => self.view.toggle_body_pause(id),
            Command::SelectZoomTarget(id) => {
                if !self.view.select_zoom_target(id) {
                    log::debug!("zoom on {} ignored in {:?}", id.body().name, self.view.frame());
                }
            }
            Command::ClearZoom => self.view.clear_zoom(),
            Command::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// One fixed-interval step. Everything that moves is gated by the clock.
    pub fn tick(&mut self) {
        let Some(scale) = self.clock.step_scale(1.0) else {
            return;
        };
        self.clock.advance(1.0);
        let paused = self.view.per_body_paused();
        for (i, rt) in self.bodies.iter_mut().enumerate() {
            rt.advance(&PLANETS[i], scale, paused[i]);
        }
        self.particles.advance(scale);
    }

    /// External trigger; the engine never launches meteors on its own.
    pub fn spawn_meteor(&mut self, position: Vec2, velocity: Vec2, lifetime: f32) {
        self.particles.meteor.spawn(position, velocity, lifetime);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            view: ViewState {
                frame: self.view.frame(),
                zoom_target: self.view.zoom_target(),
                paused: self.clock.paused(),
                speed_multiplier: self.clock.speed_multiplier(),
                eclipse_mode: self.view.eclipse_mode(),
                help_visible: self.view.help_visible(),
                per_body_paused: self.view.per_body_paused(),
            },
            phases: self.clock.phases(),
            bodies: self.bodies,
            particles: &self.particles,
        }
    }
}

/// Read-only view of the engine between ticks. Holding one borrows the
/// engine, so no tick or command can land while it is being read.
pub struct Snapshot<'a> {
    pub view: ViewState,
    pub phases: Phases,
    pub bodies: [BodyRuntime; PLANET_COUNT],
    particles: &'a ParticleSystems,
}

impl<'a> Snapshot<'a> {
    pub fn position_of(&self, id: BodyId) -> Vec2 {
        orbit::position_of(id, self.phases.global)
    }
    pub fn moons(&self, id: BodyId, parent: Vec2) -> impl Iterator<Item = orbit::MoonPlacement> {
        orbit::moons(id, parent, self.phases.global)
    }
    pub fn runtime(&self, id: BodyId) -> BodyRuntime {
        self.bodies[id.index()]
    }
    pub fn pluto(&self) -> Vec2 {
        orbit::pluto_position(self.phases.dwarf_planet)
    }
    pub fn charon(&self) -> Vec2 {
        orbit::charon_position(self.phases.dwarf_planet)
    }
    pub fn ceres(&self) -> Vec2 {
        orbit::ceres_position(self.phases.ceres)
    }
    pub fn sun_radius(&self) -> f32 {
        orbit::sun_radius(self.phases.sun_pulse)
    }
    pub fn earth_moon(&self) -> orbit::EarthMoonSystem {
        orbit::earth_moon_system(self.phases.moon)
    }
    pub fn lunar_eclipse(&self) -> bool {
        orbit::lunar_eclipse(&self.earth_moon(), self.view.eclipse_mode)
    }

    pub fn stars(&self) -> &'a [Star] {
        self.particles.starfield.stars()
    }
    pub fn asteroids(&self) -> &'a [Asteroid] {
        self.particles.asteroids.asteroids()
    }
    pub fn dust(&self) -> &'a [DustParticle] {
        self.particles.dust.particles()
    }
    pub fn meteor(&self) -> Option<&'a Meteor> {
        self.particles.meteor.active()
    }
    pub fn comet(&self) -> Vec2 {
        self.particles.comet.position()
    }
}
