//! Sky, clouds and far islands
//!
//! The backdrop is rolled once per program run (not per reset) and drawn
//! with two parallax factors keyed off the distance score, so the far
//! scenery drifts slower than the bridge.

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const SKY_TOP: Color = Color::new(0.27, 0.51, 0.78, 1.0);
const SKY_BOTTOM: Color = Color::new(0.78, 0.88, 1.0, 1.0);
const CLOUD_WHITE: Color = Color::new(0.94, 0.96, 1.0, 1.0);
const CLOUD_SHADOW: Color = Color::new(0.82, 0.86, 0.92, 1.0);
const ROCK: Color = Color::new(0.55, 0.59, 0.63, 1.0);
const ISLAND_TOP: Color = Color::new(0.59, 0.63, 0.55, 1.0);
const CASTLE: Color = Color::new(0.47, 0.49, 0.53, 1.0);

/// Cloud drift relative to the foreground scroll
const CLOUD_PARALLAX: f32 = 0.15;
/// Island drift relative to the foreground scroll
const ISLAND_PARALLAX: f32 = 0.05;

/// (base_x, y, width) for one cloud puff or island
type Prop = (f32, f32, f32);

pub struct Backdrop {
    clouds: Vec<Prop>,
    islands: Vec<Prop>,
}

impl Backdrop {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let clouds = (0..8)
            .map(|_| {
                (
                    rng.gen_range(0.0..SCREEN_WIDTH + 300.0),
                    rng.gen_range(30.0..200.0),
                    rng.gen_range(80.0..160.0),
                )
            })
            .collect();
        let islands = (0..4)
            .map(|_| {
                (
                    rng.gen_range(0.0..SCREEN_WIDTH + 600.0),
                    rng.gen_range(60.0..180.0),
                    rng.gen_range(50.0..90.0),
                )
            })
            .collect();
        Self { clouds, islands }
    }

    /// Draw the whole backdrop; `scroll` is the accumulated distance score
    pub fn draw(&self, scroll: f32) {
        draw_sky();

        let cloud_scroll = scroll * CLOUD_PARALLAX;
        for &(base_x, y, w) in &self.clouds {
            let x = (base_x - cloud_scroll).rem_euclid(SCREEN_WIDTH + 300.0) - 150.0;
            draw_cloud(x, y, w);
        }

        let island_scroll = scroll * ISLAND_PARALLAX;
        for &(base_x, y, w) in &self.islands {
            let x = (base_x - island_scroll).rem_euclid(SCREEN_WIDTH + 600.0) - 200.0;
            draw_island(x, y, w);
        }
    }
}

/// Vertical gradient, one scanline at a time
fn draw_sky() {
    let h = SCREEN_HEIGHT as i32;
    for line in 0..h {
        let t = line as f32 / SCREEN_HEIGHT;
        let color = Color::new(
            SKY_TOP.r + (SKY_BOTTOM.r - SKY_TOP.r) * t,
            SKY_TOP.g + (SKY_BOTTOM.g - SKY_TOP.g) * t,
            SKY_TOP.b + (SKY_BOTTOM.b - SKY_TOP.b) * t,
            1.0,
        );
        let y = line as f32;
        draw_line(0.0, y, SCREEN_WIDTH, y, 1.0, color);
    }
}

/// A pill-shaped puff: body rectangle with round ends, plus a smaller cap
fn draw_pill(x: f32, y: f32, w: f32, h: f32, color: Color) {
    let r = h / 2.0;
    draw_rectangle(x + r, y, (w - h).max(0.0), h, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
}

fn draw_cloud(x: f32, y: f32, w: f32) {
    let h = w / 3.0;
    draw_pill(x - 2.0, y + 6.0, w, h, CLOUD_SHADOW);
    draw_pill(x, y, w, h, CLOUD_WHITE);
    draw_pill(x + w / 4.0, y - w / 8.0, w / 2.0, h, CLOUD_WHITE);
}

fn draw_island(x: f32, y: f32, w: f32) {
    // Hanging rock, tapering to a point
    draw_triangle(
        Vec2::new(x, y + 10.0),
        Vec2::new(x + w, y + 10.0),
        Vec2::new(x + w / 2.0 + 10.0, y + 40.0),
        ROCK,
    );
    // Grassy top
    draw_pill(x - 5.0, y, w + 10.0, 22.0, ISLAND_TOP);
    // Castle silhouette
    let castle_x = x + w / 2.0 - 8.0;
    draw_rectangle(castle_x, y - 14.0, 16.0, 16.0, CASTLE);
    draw_triangle(
        Vec2::new(castle_x - 2.0, y - 14.0),
        Vec2::new(castle_x + 8.0, y - 22.0),
        Vec2::new(castle_x + 18.0, y - 14.0),
        CASTLE,
    );
}
