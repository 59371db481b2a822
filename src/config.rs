use crate::error::{SimError, SimResult};
use crate::particles::ParticleCounts;
use clap::Parser;
use serde::Deserialize;
use std::{
    fs,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

const PARTICLE_LIMIT: RangeInclusive<usize> = 1..=10_000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub seed: u64,
    pub tick_ms: u64,
    pub fps_cap: u32,
    pub star_count: usize,
    pub asteroid_count: usize,
    pub dust_count: usize,
    /// Chance per tick that the app launches a meteor when none is flying.
    pub meteor_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        let counts = ParticleCounts::default();
        Self {
            seed: 0x50_1A12_5EED,
            tick_ms: 16,
            fps_cap: 60,
            star_count: counts.stars,
            asteroid_count: counts.asteroids,
            dust_count: counts.dust,
            meteor_rate: 0.004,
        }
    }
}

impl Settings {
    pub fn particle_counts(&self) -> ParticleCounts {
        ParticleCounts {
            stars: self.star_count,
            asteroids: self.asteroid_count,
            dust: self.dust_count,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms", self.tick_ms, "at least 1"));
        }
        if self.fps_cap == 0 || self.fps_cap > 240 {
            return Err(invalid("fps_cap", self.fps_cap, "1-240"));
        }
        for (name, count) in [
            ("star_count", self.star_count),
            ("asteroid_count", self.asteroid_count),
            ("dust_count", self.dust_count),
        ] {
            if !PARTICLE_LIMIT.contains(&count) {
                return Err(invalid(name, count, "1-10000"));
            }
        }
        if !(0.0..=1.0).contains(&self.meteor_rate) {
            return Err(invalid("meteor_rate", self.meteor_rate, "a probability in [0, 1]"));
        }
        Ok(())
    }

    /// Reads a TOML file; keys it leaves out keep their defaults.
    pub fn load(path: &Path) -> SimResult<Settings> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| SimError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Settings, toml::de::Error> {
        toml::from_str(text)
    }
}

fn invalid(name: &'static str, value: impl ToString, expected: &'static str) -> SimError {
    SimError::InvalidSetting {
        name,
        value: value.to_string(),
        expected,
    }
}

/// Procedural solar system in the terminal.
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// TOML settings file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// seed for stars, asteroids and dust
    #[arg(long)]
    pub seed: Option<u64>,

    /// ms per simulation tick
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// frame rate cap
    #[arg(long)]
    pub fps: Option<u32>,

    /// chance per tick of launching a meteor
    #[arg(long)]
    pub meteor_rate: Option<f64>,

    /// write logs here instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn settings(&self) -> SimResult<Settings> {
        let mut s = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(seed) = self.seed {
            s.seed = seed;
        }
        if let Some(ms) = self.tick_ms {
            s.tick_ms = ms;
        }
        if let Some(fps) = self.fps {
            s.fps_cap = fps;
        }
        if let Some(rate) = self.meteor_rate {
            s.meteor_rate = rate;
        }
        s.validate()?;
        Ok(s)
    }
}
