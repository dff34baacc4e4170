//! STARBRIDGE: three tiny arcade games on one engine-less core
//!
//! - `star-catcher`: slide a paddle, catch falling stars
//! - `sky-bridge`: endless stone-bridge platformer with a stamina sprint
//! - `sky-quest`: the bridge run with patrolling enemies, sword waves and hearts
//!
//! The simulation (`game`) is plain data updated at a fixed 60 Hz tick and
//! knows nothing about the window; everything that touches macroquad lives
//! in `render` and `input`, and each binary owns its own frame loop.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod game;
pub mod geom;
pub mod input;
pub mod render;
