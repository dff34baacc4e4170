//! Star-catcher drawing: black field, blue paddle, yellow stars

use macroquad::prelude::*;

use crate::game::catch::CatchGame;
use crate::render::hud;

const PADDLE_BLUE: Color = Color::new(0.12, 0.56, 1.0, 1.0);
const STAR_YELLOW: Color = Color::new(1.0, 0.84, 0.0, 1.0);

pub fn draw_catch(game: &CatchGame) {
    clear_background(BLACK);

    let p = game.paddle;
    draw_rectangle(p.x, p.y, p.w, p.h, PADDLE_BLUE);

    for star in &game.stars {
        draw_circle(star.x, star.y, star.radius, STAR_YELLOW);
        // Little glint
        draw_circle(star.x - star.radius * 0.3, star.y - star.radius * 0.3, star.radius * 0.25, WHITE);
    }

    hud::draw_score("Score", game.score as i64);
}
