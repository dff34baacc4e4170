//! The platformer player
//!
//! Plain data mutated in a fixed order each tick: input, stamina,
//! animation, gravity, then platform settling. Horizontal motion applies
//! directly to the position; vertical motion is Euler-integrated
//! (velocity accumulates gravity, position accumulates velocity).

use crate::config::{HeroTuning, StaminaTuning, Tuning, SCREEN_HEIGHT};
use crate::game::collision;
use crate::game::platform::Platform;
use crate::geom::Rect;
use crate::input::InputSnapshot;

#[derive(Debug, Clone)]
pub struct Hero {
    pub rect: Rect,
    /// Vertical velocity, px per tick (positive: down)
    pub vel_y: f32,
    pub on_ground: bool,
    pub facing_right: bool,
    pub sprinting: bool,
    pub stamina: f32,
    /// Did this tick's input move the hero horizontally?
    pub is_moving: bool,
    /// Drives the limb swing in the renderer; no gameplay effect
    pub anim_timer: f32,
}

impl Hero {
    /// Spawn standing with feet at `foot_y`
    pub fn new(x: f32, foot_y: f32, tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(x, foot_y - tuning.hero.height, tuning.hero.width, tuning.hero.height),
            vel_y: 0.0,
            on_ground: false,
            facing_right: true,
            sprinting: false,
            stamina: tuning.stamina.max,
            is_moving: false,
            anim_timer: 0.0,
        }
    }

    /// Apply movement, sprint and jump input for this tick
    pub fn handle_input(&mut self, input: &InputSnapshot, tuning: &Tuning) {
        self.is_moving = false;

        // Sprint engages only with enough stamina in the tank
        self.sprinting = input.sprint && self.stamina > tuning.stamina.min_to_sprint;

        let speed = if self.sprinting {
            tuning.hero.sprint_speed
        } else {
            tuning.hero.speed
        };

        if input.left {
            self.rect.x -= speed;
            self.facing_right = false;
            self.is_moving = true;
        }
        if input.right {
            self.rect.x += speed;
            self.facing_right = true;
            self.is_moving = true;
        }
        if input.jump && self.on_ground {
            self.vel_y = tuning.hero.jump_force;
            self.on_ground = false;
        }
    }

    /// Drain while sprint-moving, regen otherwise. Clamped to [0, max].
    pub fn update_stamina(&mut self, tuning: &StaminaTuning) {
        if self.sprinting && self.is_moving {
            self.stamina = (self.stamina - tuning.drain).max(0.0);
            if self.stamina <= 0.0 {
                self.sprinting = false;
            }
        } else {
            self.stamina = (self.stamina + tuning.regen).min(tuning.max);
        }
    }

    /// Advance the run-cycle timer (faster while sprinting, decaying to a
    /// standstill when idle)
    pub fn update_animation(&mut self) {
        if self.is_moving && self.on_ground {
            let speed_mult = if self.sprinting { 1.8 } else { 1.0 };
            self.anim_timer += speed_mult;
        } else if self.on_ground {
            self.anim_timer *= 0.8;
        }
    }

    /// Euler step: accumulate gravity, then move
    pub fn apply_gravity(&mut self, tuning: &HeroTuning) {
        self.vel_y += tuning.gravity;
        self.rect.y += self.vel_y;
    }

    /// Resolve platform landings for this tick. At most one platform
    /// catches the hero; landing snaps the feet to its top and zeroes the
    /// fall speed.
    pub fn settle_on_platforms(&mut self, platforms: &[Platform]) {
        self.on_ground = false;
        for platform in platforms {
            if collision::lands_on(&self.rect, self.vel_y, &platform.rect) {
                self.rect.y = platform.rect.y - self.rect.h;
                self.vel_y = 0.0;
                self.on_ground = true;
                break;
            }
        }
    }

    /// Fell past the bottom edge of the playfield
    pub fn is_dead(&self) -> bool {
        self.rect.y > SCREEN_HEIGHT
    }
}

/// Limb swing amplitude for the renderer: sine of the run timer while
/// moving on the ground, a fixed spread mid-air, nothing at rest.
pub fn swing(hero: &Hero) -> f32 {
    if hero.is_moving && hero.on_ground {
        (hero.anim_timer * 0.4).sin()
    } else if !hero.on_ground {
        0.3
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_unopposed_fall_matches_closed_form() {
        let t = tuning();
        let mut hero = Hero::new(100.0, 200.0, &t);
        let start_y = hero.rect.y;

        let n = 30;
        for _ in 0..n {
            hero.apply_gravity(&t.hero);
        }

        // vel after k ticks is k*g, so displacement is g * n(n+1)/2
        let expected = t.hero.gravity * (n * (n + 1)) as f32 / 2.0;
        assert!((hero.rect.y - start_y - expected).abs() < 0.05);
    }

    #[test]
    fn test_landing_happens_once_and_zeroes_velocity() {
        let t = tuning();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let platform = Platform::new(0, 50.0, 400.0, 200.0, t.platforms.height, &mut rng);
        let mut hero = Hero::new(100.0, 380.0, &t);

        let mut landings = 0;
        for _ in 0..60 {
            hero.apply_gravity(&t.hero);
            let was_grounded = hero.on_ground;
            hero.settle_on_platforms(std::slice::from_ref(&platform));
            if hero.on_ground && !was_grounded {
                landings += 1;
            }
        }

        assert_eq!(landings, 1);
        assert!(hero.on_ground);
        assert_eq!(hero.vel_y, 0.0);
        assert!((hero.rect.bottom() - platform.rect.y).abs() < 1e-3);
    }

    #[test]
    fn test_jump_only_while_grounded() {
        let t = tuning();
        let mut hero = Hero::new(100.0, 200.0, &t);
        let jump = InputSnapshot { jump: true, ..idle() };

        hero.on_ground = false;
        hero.handle_input(&jump, &t);
        assert_eq!(hero.vel_y, 0.0);

        hero.on_ground = true;
        hero.handle_input(&jump, &t);
        assert_eq!(hero.vel_y, t.hero.jump_force);
        assert!(!hero.on_ground);
    }

    #[test]
    fn test_stamina_stays_in_bounds() {
        let t = tuning();
        let mut hero = Hero::new(100.0, 200.0, &t);
        let sprint_right = InputSnapshot { right: true, sprint: true, ..idle() };

        // Drain far past empty; sprint must disengage at the floor
        for _ in 0..500 {
            hero.handle_input(&sprint_right, &t);
            if hero.stamina <= t.stamina.min_to_sprint {
                assert!(!hero.sprinting);
            }
            hero.update_stamina(&t.stamina);
            assert!(hero.stamina >= 0.0 && hero.stamina <= t.stamina.max);
        }

        // Sprint is refused at exactly the floor
        hero.stamina = t.stamina.min_to_sprint;
        hero.handle_input(&sprint_right, &t);
        assert!(!hero.sprinting);

        // Regen far past full
        for _ in 0..500 {
            hero.handle_input(&idle(), &t);
            hero.update_stamina(&t.stamina);
            assert!(hero.stamina >= 0.0 && hero.stamina <= t.stamina.max);
        }
        assert_eq!(hero.stamina, t.stamina.max);
    }

    #[test]
    fn test_sprint_speed_applies_while_engaged() {
        let t = tuning();
        let mut hero = Hero::new(100.0, 200.0, &t);
        let x0 = hero.rect.x;
        hero.handle_input(&InputSnapshot { right: true, sprint: true, ..idle() }, &t);
        assert!((hero.rect.x - x0 - t.hero.sprint_speed).abs() < 1e-3);

        let x1 = hero.rect.x;
        hero.handle_input(&InputSnapshot { right: true, ..idle() }, &t);
        assert!((hero.rect.x - x1 - t.hero.speed).abs() < 1e-3);
    }

    #[test]
    fn test_jump_apex_is_deterministic() {
        let t = tuning();

        let apex = || {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            let platform = Platform::new(0, 0.0, 540.0, 400.0, t.platforms.height, &mut rng);
            let mut hero = Hero::new(100.0, platform.rect.y, &t);
            hero.on_ground = true;

            let jump_held = InputSnapshot { jump: true, ..idle() };
            let mut min_y = hero.rect.y;
            // Hold jump until the hero is back on the ground
            for _ in 0..240 {
                hero.handle_input(&jump_held, &t);
                hero.apply_gravity(&t.hero);
                hero.settle_on_platforms(std::slice::from_ref(&platform));
                min_y = min_y.min(hero.rect.y);
                if hero.on_ground && hero.vel_y == 0.0 && min_y < hero.rect.y {
                    break;
                }
            }
            min_y
        };

        let first = apex();
        let second = apex();
        assert!(first < 540.0 - t.hero.height, "hero never left the ground");
        assert_eq!(first, second);
    }

    #[test]
    fn test_death_below_screen() {
        let t = tuning();
        let mut hero = Hero::new(100.0, 200.0, &t);
        assert!(!hero.is_dead());
        hero.rect.y = SCREEN_HEIGHT + 1.0;
        assert!(hero.is_dead());
    }
}
