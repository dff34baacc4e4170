//! Stone-bridge platform drawing

use macroquad::prelude::*;

use crate::game::platform::Platform;

const STONE_TOP: Color = Color::new(0.63, 0.61, 0.57, 1.0);
const STONE_MID: Color = Color::new(0.51, 0.49, 0.45, 1.0);
const STONE_DARK: Color = Color::new(0.37, 0.35, 0.31, 1.0);
const STONE_LINE: Color = Color::new(0.43, 0.41, 0.37, 1.0);
const MOSS_GREEN: Color = Color::new(0.31, 0.47, 0.24, 1.0);

pub fn draw_platform(platform: &Platform) {
    let r = platform.rect;

    // Bridge body, top highlight, bottom shadow
    draw_rectangle(r.x, r.y, r.w, r.h, STONE_MID);
    draw_rectangle(r.x, r.y, r.w, 6.0, STONE_TOP);
    draw_rectangle(r.x, r.bottom() - 5.0, r.w, 5.0, STONE_DARK);

    // Brick seams from the precomputed pattern
    for &(bx, bw) in &platform.bricks {
        let px = r.x + bx;
        let pw = bw.min(r.w - bx).max(0.0);
        draw_line(px, r.y + 10.0, px + pw, r.y + 10.0, 1.0, STONE_LINE);
        draw_line(px, r.y + 20.0, px + pw, r.y + 20.0, 1.0, STONE_LINE);
        draw_line(px + bw + 1.0, r.y + 6.0, px + bw + 1.0, r.bottom() - 5.0, 1.0, STONE_LINE);
    }

    // Moss tufts on the walking surface
    for &(mx, my) in &platform.moss {
        draw_circle(r.x + mx, r.y + my + 2.0, 3.0, MOSS_GREEN);
    }

    // Bridgehead pillars on both ends
    let pillar_w = 6.0;
    draw_rectangle(r.x, r.y - 4.0, pillar_w, r.h + 4.0, STONE_DARK);
    draw_rectangle(r.right() - pillar_w, r.y - 4.0, pillar_w, r.h + 4.0, STONE_DARK);
    draw_rectangle(r.x, r.y - 4.0, pillar_w, 3.0, STONE_TOP);
    draw_rectangle(r.right() - pillar_w, r.y - 4.0, pillar_w, 3.0, STONE_TOP);
}
