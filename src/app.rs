use crate::config::Settings;
use crate::engine::{Engine, Flow};
use crate::input::{collect_input_nonblocking, map_key};
use crate::math::Vec2;
use crate::render::{Renderer, TerminalRenderer};
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Decides when a meteor flies. Lives outside the engine so the engine
/// stays a pure function of its seed and the commands it receives.
pub struct MeteorLauncher {
    rng: StdRng,
    rate: f64,
}

impl MeteorLauncher {
    pub fn new(seed: u64, rate: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed ^ 0x3E7E_0125),
            rate,
        }
    }

    /// Rolls once per simulation tick. Returns whether a meteor was launched.
    pub fn roll(&mut self, engine: &mut Engine) -> bool {
        if engine.clock().paused() || engine.snapshot().meteor().is_some() {
            return false;
        }
        if !self.rng.gen_bool(self.rate) {
            return false;
        }
        let start = Vec2::new(-1.0, self.rng.gen_range(0.3..1.0));
        let velocity = Vec2::new(
            self.rng.gen_range(0.015..0.03),
            -self.rng.gen_range(0.005f32..0.015),
        );
        let lifetime = self.rng.gen_range(90.0..150.0);
        engine.spawn_meteor(start, velocity, lifetime);
        true
    }
}

pub(crate) struct App {
    settings: Settings,
    engine: Engine,
    launcher: MeteorLauncher,
    term: TerminalRenderer,
}

impl App {
    fn init(settings: Settings) -> anyhow::Result<Self> {
        let engine = Engine::new(&settings);
        let launcher = MeteorLauncher::new(settings.seed, settings.meteor_rate);
        let term = TerminalRenderer::begin().context("setting up the terminal")?;
        Ok(Self {
            settings,
            engine,
            launcher,
            term,
        })
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let frame_dt = Duration::from_secs_f32(1.0 / self.settings.fps_cap as f32);
        let sim_step = Duration::from_millis(self.settings.tick_ms);

        let mut last_frame = Instant::now();
        let mut sim_accum = Duration::ZERO;

        loop {
            let frame_start = Instant::now();

            for ev in collect_input_nonblocking(frame_dt)? {
                if let Some(cmd) = map_key(ev) {
                    if self.engine.dispatch(cmd) == Flow::Exit {
                        log::info!("exit after {} ticks", self.engine.clock().ticks());
                        return Ok(());
                    }
                }
            }

            // sim fixed-step
            let now = Instant::now();
            sim_accum = sim_accum.saturating_add(now.saturating_duration_since(last_frame));
            last_frame = now;

            // a long stall (suspended terminal, debugger) should not replay minutes of ticks
            if sim_accum > sim_step * 30 {
                log::warn!("dropping {:?} of backlog", sim_accum - sim_step * 30);
                sim_accum = sim_step * 30;
            }
            while sim_accum >= sim_step {
                self.launcher.roll(&mut self.engine);
                self.engine.tick();
                sim_accum -= sim_step;
            }

            self.term.draw(&self.engine.snapshot())?;

            spin_sleep(frame_dt, frame_start);
        }
    }
}

pub fn run(settings: Settings) -> anyhow::Result<()> {
    let mut app = App::init(settings)?;
    let result = app.run();
    // restore the terminal even when the loop failed
    let restored = app.term.end();
    result.and(restored)
}

fn spin_sleep(target: Duration, start: Instant) {
    let end = start + target;
    loop {
        let t = Instant::now();
        if t >= end {
            break;
        }
        let left = end - t;
        if left > Duration::from_millis(2) {
            std::thread::sleep(Duration::from_millis(1));
        } else {
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Command;

    #[test]
    fn zero_rate_never_launches() {
        let mut e = Engine::new(&Settings::default());
        let mut l = MeteorLauncher::new(1, 0.0);
        for _ in 0..500 {
            assert!(!l.roll(&mut e));
            e.tick();
        }
    }

    #[test]
    fn certain_rate_launches_one_at_a_time() {
        let mut e = Engine::new(&Settings::default());
        let mut l = MeteorLauncher::new(1, 1.0);
        assert!(l.roll(&mut e));
        assert!(e.snapshot().meteor().is_some());
        assert!(!l.roll(&mut e));
    }

    #[test]
    fn paused_clock_holds_launches() {
        let mut e = Engine::new(&Settings::default());
        e.dispatch(Command::TogglePause);
        let mut l = MeteorLauncher::new(1, 1.0);
        assert!(!l.roll(&mut e));
    }
}
