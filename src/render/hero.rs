//! Procedural hero sprite
//!
//! The hero is assembled from primitives every frame: cape, limbs, tunic,
//! head and sword, with a sine run cycle driven by the simulation's
//! animation timer. Sprint adds a lean, a ghost afterimage and dust puffs.

use macroquad::prelude::*;

use crate::game::hero::{swing, Hero};

const HERO_SKIN: Color = Color::new(0.94, 0.78, 0.63, 1.0);
const HERO_HAIR: Color = Color::new(0.39, 0.24, 0.12, 1.0);
const HERO_TUNIC: Color = Color::new(0.12, 0.39, 0.71, 1.0);
const HERO_BELT: Color = Color::new(0.59, 0.43, 0.20, 1.0);
const HERO_BUCKLE: Color = Color::new(0.86, 0.75, 0.31, 1.0);
const HERO_BOOTS: Color = Color::new(0.35, 0.22, 0.12, 1.0);
const HERO_CAPE: Color = Color::new(0.71, 0.16, 0.16, 1.0);
const HERO_SWORD: Color = Color::new(0.78, 0.82, 0.86, 1.0);
const HERO_SWORD_HILT: Color = Color::new(0.63, 0.51, 0.20, 1.0);
const EYE: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const GHOST_CAPE: Color = Color::new(0.71, 0.16, 0.16, 0.24);
const GHOST_TUNIC: Color = Color::new(0.12, 0.39, 0.71, 0.16);
const DUST: Color = Color::new(0.71, 0.67, 0.59, 0.35);

/// Four-cornered cape as two triangles
fn draw_quad(p: [Vec2; 4], color: Color) {
    draw_triangle(p[0], p[1], p[2], color);
    draw_triangle(p[0], p[2], p[3], color);
}

pub fn draw_hero(hero: &Hero) {
    let r = hero.rect;
    let cx = r.center_x();
    let flip: f32 = if hero.facing_right { 1.0 } else { -1.0 };
    let sprint_moving = hero.sprinting && hero.is_moving;

    let s = swing(hero);
    let leg_spread = s * 6.0;
    let arm_swing = s * 5.0;
    let body_bob = s.abs() * 2.0;

    // Sprint lean tips the whole body forward
    let lean = if sprint_moving { 3.0 * flip } else { 0.0 };

    // Ghost afterimage trailing the sprint
    if sprint_moving {
        let gx = cx - 8.0 * flip - 15.0;
        draw_rectangle(gx + 6.0, r.y + 9.0, 18.0, 21.0, GHOST_CAPE);
        draw_rectangle(gx + 8.0, r.y + 11.0, 14.0, 18.0, GHOST_TUNIC);
    }

    let by = r.y - body_bob;

    // Cape, waving on its own slower sine
    let cape_x = cx - 6.0 * flip + lean;
    let cape_length = if sprint_moving { 42.0 } else { 36.0 };
    let cape_wave = (hero.anim_timer * 0.5).sin() * 3.0;
    draw_quad(
        [
            Vec2::new(cape_x, by + 14.0),
            Vec2::new(cape_x - (10.0 + cape_wave) * flip, by + cape_length),
            Vec2::new(cape_x - (4.0 + cape_wave) * flip, by + cape_length + 4.0),
            Vec2::new(cape_x + 4.0 * flip, by + 34.0),
        ],
        HERO_CAPE,
    );

    // Legs with the run swing
    let back_leg_x = cx - 4.0 - leg_spread + lean;
    draw_rectangle(back_leg_x, by + 34.0, 5.0, 8.0, HERO_SKIN);
    draw_rectangle(back_leg_x - 1.0, by + 42.0, 7.0, 6.0, HERO_BOOTS);
    let front_leg_x = cx + leg_spread + lean;
    draw_rectangle(front_leg_x, by + 34.0, 5.0, 8.0, HERO_SKIN);
    draw_rectangle(front_leg_x - 1.0, by + 42.0, 7.0, 6.0, HERO_BOOTS);

    // Tunic, belt, buckle
    draw_rectangle(cx - 9.0 + lean, by + 14.0, 18.0, 21.0, HERO_TUNIC);
    draw_rectangle(cx - 9.0 + lean, by + 28.0, 18.0, 4.0, HERO_BELT);
    draw_rectangle(cx - 2.0 + lean, by + 29.0, 4.0, 2.0, HERO_BUCKLE);

    // Arms, counter-swinging
    draw_rectangle(cx - 12.0 + lean, by + 16.0 - arm_swing, 4.0, 14.0, HERO_SKIN);
    draw_rectangle(cx + 8.0 + lean, by + 16.0 + arm_swing, 4.0, 14.0, HERO_SKIN);

    // Head: hair, face, one eye on the facing side
    let head_y = by + 2.0;
    draw_rectangle(cx - 7.0 + lean, head_y, 14.0, 6.0, HERO_HAIR);
    draw_rectangle(cx - 8.0 + lean, head_y + 2.0, 16.0, 4.0, HERO_HAIR);
    draw_rectangle(cx - 6.0 + lean, head_y + 4.0, 12.0, 10.0, HERO_SKIN);
    draw_rectangle(cx + 3.0 * flip + lean, head_y + 7.0, 2.0, 2.0, EYE);

    // Sword riding the front arm
    let sword_x = cx + 11.0 * flip + lean;
    let sword_bob = if hero.facing_right { -arm_swing } else { arm_swing };
    let sy = by + 10.0 + sword_bob;
    draw_rectangle(sword_x, sy, 2.0, 18.0, HERO_SWORD);
    draw_triangle(
        Vec2::new(sword_x, sy),
        Vec2::new(sword_x + 1.0, sy - 4.0),
        Vec2::new(sword_x + 2.0, sy),
        HERO_SWORD,
    );
    draw_rectangle(sword_x - 2.0, sy + 18.0, 6.0, 3.0, HERO_SWORD_HILT);

    // Dust kicked up behind sprinting boots
    if sprint_moving && hero.on_ground {
        for _ in 0..3 {
            let dx = macroquad::rand::gen_range(-12.0, -2.0) * flip;
            let dy = macroquad::rand::gen_range(-4.0, 2.0);
            let size = macroquad::rand::gen_range(2.0, 4.0);
            draw_rectangle(cx + dx - size / 2.0, r.bottom() + dy - size, size, size, DUST);
        }
    }
}
