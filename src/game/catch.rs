//! Star-catcher session
//!
//! Slide the paddle, catch what falls. There is no death: the session runs
//! until the window closes, and the score only ever goes up.

use rand::Rng;

use crate::config::{Tuning, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::stars::{Star, StarSpawner};
use crate::geom::Rect;
use crate::input::InputSnapshot;

pub struct CatchGame {
    pub paddle: Rect,
    pub stars: Vec<Star>,
    pub score: u32,
    spawner: StarSpawner,
    pub tuning: Tuning,
}

impl CatchGame {
    pub fn new(tuning: Tuning) -> Self {
        let paddle = Rect::new(
            (SCREEN_WIDTH - tuning.catch.paddle_width) / 2.0,
            SCREEN_HEIGHT - tuning.catch.paddle_height - 10.0,
            tuning.catch.paddle_width,
            tuning.catch.paddle_height,
        );
        Self {
            paddle,
            stars: Vec::new(),
            score: 0,
            spawner: StarSpawner::new(tuning.catch.spawn_interval),
            tuning,
        }
    }

    /// One tick: move the paddle, spawn, fall, then resolve catches and
    /// misses. `dt` is the real frame time feeding the wall-clock spawner.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32, rng: &mut impl Rng) {
        let catch = &self.tuning.catch;

        if input.left {
            self.paddle.x -= catch.paddle_speed;
        }
        if input.right {
            self.paddle.x += catch.paddle_speed;
        }
        self.paddle.clamp_x(0.0, SCREEN_WIDTH);

        if self.spawner.should_spawn(dt) {
            self.stars.push(Star::spawn(catch, rng));
        }

        for star in &mut self.stars {
            star.update(catch);
        }

        // One pass per star: caught, missed, or kept
        let paddle = self.paddle;
        let mut caught = 0;
        self.stars.retain(|star| {
            if star.bounds().overlaps(&paddle) {
                caught += 1;
                false
            } else {
                !star.is_off_screen()
            }
        });
        self.score += caught;
    }
}
