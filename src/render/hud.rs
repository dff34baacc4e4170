//! HUD: score, stamina bar, hearts, game-over overlay

use macroquad::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::combat::Health;

const BAR_BG: Color = Color::new(0.16, 0.16, 0.16, 0.71);
const BAR_GREEN: Color = Color::new(0.20, 0.78, 0.31, 1.0);
const BAR_YELLOW: Color = Color::new(0.86, 0.78, 0.16, 1.0);
const BAR_RED: Color = Color::new(0.78, 0.20, 0.20, 1.0);
const BAR_BORDER: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const HEART: Color = Color::new(0.86, 0.16, 0.24, 1.0);
const HEART_EMPTY: Color = Color::new(0.24, 0.20, 0.22, 1.0);
const VEIL: Color = Color::new(0.0, 0.0, 0.0, 0.47);

/// Score line with a drop shadow in the top-left corner
pub fn draw_score(label: &str, value: i64) {
    let text = format!("{}: {}", label, value);
    draw_text(&text, 17.0, 32.0, 36.0, BLACK);
    draw_text(&text, 15.0, 30.0, 36.0, WHITE);
}

/// Stamina bar under the score, colored by how much is left
pub fn draw_stamina_bar(stamina: f32, max: f32) {
    let (bar_x, bar_y) = (15.0, 48.0);
    let (bar_w, bar_h) = (160.0, 12.0);

    draw_rectangle(bar_x - 2.0, bar_y - 2.0, bar_w + 4.0, bar_h + 4.0, BAR_BG);

    let ratio = (stamina / max).clamp(0.0, 1.0);
    let color = if ratio > 0.5 {
        BAR_GREEN
    } else if ratio > 0.25 {
        BAR_YELLOW
    } else {
        BAR_RED
    };
    let fill_w = bar_w * ratio;
    if fill_w > 0.0 {
        draw_rectangle(bar_x, bar_y, fill_w, bar_h, color);
    }

    draw_rectangle_lines(bar_x - 1.0, bar_y - 1.0, bar_w + 2.0, bar_h + 2.0, 1.0, BAR_BORDER);
    draw_text("STAMINA", bar_x + bar_w + 8.0, bar_y + bar_h - 1.0, 20.0, WHITE);
}

/// Heart pips below the stamina bar (sky-quest)
pub fn draw_hearts(health: &Health) {
    for i in 0..health.max {
        let color = if i < health.current { HEART } else { HEART_EMPTY };
        let x = 15.0 + i as f32 * 22.0 + 8.0;
        let y = 76.0;
        draw_circle(x - 3.5, y, 4.5, color);
        draw_circle(x + 3.5, y, 4.5, color);
        draw_triangle(
            Vec2::new(x - 7.5, y + 1.5),
            Vec2::new(x + 7.5, y + 1.5),
            Vec2::new(x, y + 10.0),
            color,
        );
    }
}

/// Centered text helper
fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (SCREEN_WIDTH - dims.width) / 2.0, y, size, color);
}

/// Dim the screen and announce the end of the run
pub fn draw_game_over(score: i64) {
    draw_rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, VEIL);
    draw_centered("GAME OVER", SCREEN_HEIGHT / 2.0 - 30.0, 72.0, WHITE);
    let hint = format!("Score: {}  -  Press any key to restart", score);
    draw_centered(&hint, SCREEN_HEIGHT / 2.0 + 30.0, 36.0, WHITE);
}
