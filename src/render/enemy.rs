//! Enemy and sword-wave drawing

use macroquad::prelude::*;

use crate::game::combat::Projectile;
use crate::game::enemy::Enemy;

const SHELL: Color = Color::new(0.29, 0.33, 0.24, 1.0);
const SHELL_DARK: Color = Color::new(0.20, 0.24, 0.16, 1.0);
const EYE_WHITE: Color = Color::new(0.96, 0.96, 0.92, 1.0);
const EYE_PUPIL: Color = Color::new(0.10, 0.10, 0.10, 1.0);
const WAVE: Color = Color::new(0.80, 0.88, 1.0, 0.9);
const WAVE_CORE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

pub fn draw_enemy(enemy: &Enemy) {
    let r = enemy.rect;
    let stomp = (enemy.anim_timer * 0.3).sin().abs() * 2.0;

    // Squat armored body with little stomping feet
    draw_rectangle(r.x, r.y + 6.0, r.w, r.h - 10.0, SHELL);
    draw_rectangle(r.x + 2.0, r.y, r.w - 4.0, 8.0, SHELL_DARK);
    draw_rectangle(r.x + 3.0, r.bottom() - 4.0 - stomp, 8.0, 4.0 + stomp, SHELL_DARK);
    draw_rectangle(r.right() - 11.0, r.bottom() - 4.0 - (2.0 - stomp), 8.0, 4.0, SHELL_DARK);

    // Eye on the travel side
    let eye_x = if enemy.dir > 0.0 { r.right() - 9.0 } else { r.x + 5.0 };
    draw_rectangle(eye_x, r.y + 10.0, 5.0, 5.0, EYE_WHITE);
    let pupil_x = if enemy.dir > 0.0 { eye_x + 2.5 } else { eye_x };
    draw_rectangle(pupil_x, r.y + 11.0, 2.5, 3.0, EYE_PUPIL);
}

pub fn draw_projectile(projectile: &Projectile) {
    let r = projectile.rect;
    // Crescent wave: bright core inside a pale sweep
    draw_rectangle(r.x, r.y, r.w, r.h, WAVE);
    draw_rectangle(r.x + 3.0, r.y + 2.0, r.w - 6.0, r.h - 4.0, WAVE_CORE);
}
