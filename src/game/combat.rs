//! Health, i-frames and sword waves

use crate::config::{CombatTuning, SCREEN_WIDTH};
use crate::geom::Rect;

/// Hit points with a post-hit invincibility window
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    /// Remaining invincibility ticks after a hit
    pub invincible_ticks: u32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            invincible_ticks: 0,
        }
    }

    /// Apply damage unless i-frames are active. Returns whether the hit
    /// landed; check `is_dead` afterwards.
    pub fn damage(&mut self, amount: i32) -> bool {
        if self.invincible_ticks > 0 {
            return false;
        }
        self.current = (self.current - amount).max(0);
        true
    }

    pub fn set_invincible(&mut self, ticks: u32) {
        self.invincible_ticks = ticks;
    }

    /// Count the i-frame window down; call once per tick
    pub fn tick(&mut self) {
        self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }
}

/// A sword wave flying in a straight line until it hits, expires or leaves
/// the screen
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub rect: Rect,
    /// Horizontal speed, px per tick (sign is the travel direction)
    pub vx: f32,
    pub ticks_left: u32,
}

impl Projectile {
    /// Launch from the hero's sword height in the facing direction
    pub fn launch(hero: &Rect, facing_right: bool, tuning: &CombatTuning) -> Self {
        let x = if facing_right {
            hero.right()
        } else {
            hero.x - tuning.projectile_width
        };
        let vx = if facing_right {
            tuning.projectile_speed
        } else {
            -tuning.projectile_speed
        };
        Self {
            rect: Rect::new(
                x,
                hero.y + hero.h * 0.35,
                tuning.projectile_width,
                tuning.projectile_height,
            ),
            vx,
            ticks_left: tuning.projectile_lifetime_ticks,
        }
    }

    /// Fly one tick
    pub fn update(&mut self) {
        self.rect.x += self.vx;
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }

    /// Out of lifetime or fully outside the screen
    pub fn expired(&self) -> bool {
        self.ticks_left == 0 || self.rect.right() < 0.0 || self.rect.x > SCREEN_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iframes_block_repeat_damage() {
        let mut health = Health::new(3);

        assert!(health.damage(1));
        health.set_invincible(60);
        assert_eq!(health.current, 2);

        // Same-frame and following-frame hits bounce off
        assert!(!health.damage(1));
        health.tick();
        assert!(!health.damage(1));
        assert_eq!(health.current, 2);

        // After the window expires, damage lands again
        for _ in 0..60 {
            health.tick();
        }
        assert!(!health.is_invincible());
        assert!(health.damage(1));
        assert_eq!(health.current, 1);
    }

    #[test]
    fn test_health_floors_at_zero() {
        let mut health = Health::new(2);
        assert!(health.damage(5));
        assert_eq!(health.current, 0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_projectile_direction_and_expiry() {
        let t = CombatTuning::default();
        let hero = Rect::new(100.0, 400.0, 32.0, 48.0);

        let mut right = Projectile::launch(&hero, true, &t);
        assert!(right.rect.x >= hero.right());
        let x0 = right.rect.x;
        right.update();
        assert!(right.rect.x > x0);

        let mut left = Projectile::launch(&hero, false, &t);
        assert!(left.rect.right() <= hero.x);
        left.update();
        assert!(left.rect.right() < hero.x);

        let mut p = Projectile::launch(&hero, true, &t);
        for _ in 0..t.projectile_lifetime_ticks {
            assert!(!p.expired());
            p.update();
        }
        assert!(p.expired());
    }

    #[test]
    fn test_projectile_expires_off_screen() {
        let t = CombatTuning::default();
        let hero = Rect::new(SCREEN_WIDTH - 40.0, 400.0, 32.0, 48.0);
        let mut p = Projectile::launch(&hero, true, &t);
        p.update();
        p.update();
        assert!(p.rect.x > SCREEN_WIDTH);
        assert!(p.expired());
    }
}
