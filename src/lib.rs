//! Solar-system simulation and view-state engine with a terminal front end.
//!
//! [`engine::Engine`] owns the clock, the view state and every particle
//! system. Input arrives as [`engine::Command`]s; rendering reads an
//! [`engine::Snapshot`] between ticks.

pub mod app;
pub mod bodies;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod orbit;
pub mod particles;
pub mod render;
pub mod view;

pub use engine::{Command, Engine, Flow, Snapshot};
pub use error::{SimError, SimResult};
