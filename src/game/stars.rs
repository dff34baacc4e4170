//! Falling stars
//!
//! Stars drop straight down from a random x just above the visible area.
//! The spawner runs on wall-clock time (fed per-frame dt), unlike the
//! enemy spawner which counts ticks.

use rand::Rng;

use crate::config::{CatchTuning, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geom::Rect;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    /// Center position
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Star {
    /// Spawn just above the top edge at a random horizontal position
    pub fn spawn(tuning: &CatchTuning, rng: &mut impl Rng) -> Self {
        let r = tuning.star_radius;
        Self {
            x: rng.gen_range(r..(SCREEN_WIDTH - r)),
            y: -r,
            radius: r,
        }
    }

    /// Fall one tick
    pub fn update(&mut self, tuning: &CatchTuning) {
        self.y += tuning.star_speed;
    }

    /// Fully below the bottom edge
    pub fn is_off_screen(&self) -> bool {
        self.y - self.radius > SCREEN_HEIGHT
    }

    /// Bounding box for collision
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Wall-clock interval spawner
#[derive(Debug, Clone, Copy)]
pub struct StarSpawner {
    elapsed: f32,
    interval: f32,
}

impl StarSpawner {
    pub fn new(interval: f32) -> Self {
        Self { elapsed: 0.0, interval }
    }

    /// Accumulate frame time; true once per elapsed interval
    pub fn should_spawn(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }
}
