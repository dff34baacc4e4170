//! Patrolling enemies
//!
//! An enemy lives on exactly one platform: it walks back and forth between
//! the platform's edges and despawns together with it. Spawning runs on a
//! fixed tick interval and picks one random platform per round; rounds
//! where the pick is unsuitable are simply skipped, so enemy density rises
//! gently rather than all at once.

use rand::Rng;

use crate::config::EnemyTuning;
use crate::game::platform::Platform;
use crate::game::terrain::RETIRE_X;
use crate::geom::Rect;

#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub rect: Rect,
    /// Patrol direction: +1 right, -1 left
    pub dir: f32,
    /// Host platform; the enemy dies with it
    pub platform_id: u32,
    /// Walk-cycle phase for the renderer
    pub anim_timer: f32,
}

impl Enemy {
    /// Stand a new enemy in the middle of its host platform
    pub fn new(host: &Platform, tuning: &EnemyTuning, rng: &mut impl Rng) -> Self {
        let x = host.rect.center_x() - tuning.width / 2.0;
        let dir = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            rect: Rect::new(x, host.rect.y - tuning.height, tuning.width, tuning.height),
            dir,
            platform_id: host.id,
            anim_timer: 0.0,
        }
    }

    /// Walk one tick along the host platform, turning at the edges
    pub fn patrol(&mut self, host: &Rect, tuning: &EnemyTuning) {
        self.rect.x += self.dir * tuning.patrol_speed;
        self.anim_timer += 1.0;
        if self.rect.x <= host.x {
            self.rect.x = host.x;
            self.dir = 1.0;
        } else if self.rect.right() >= host.right() {
            self.rect.x = host.right() - self.rect.w;
            self.dir = -1.0;
        }
        // Stay glued to the platform top even if the host wandered
        self.rect.y = host.y - self.rect.h;
    }

    /// Scrolled out on the left
    pub fn is_retired(&self) -> bool {
        self.rect.right() < RETIRE_X
    }
}

/// Fixed tick-interval trigger for spawn rounds
#[derive(Debug, Clone, Copy)]
pub struct EnemySpawner {
    ticks: u32,
    interval: u32,
}

impl EnemySpawner {
    pub fn new(interval: u32) -> Self {
        Self { ticks: 0, interval }
    }

    /// Count one tick; true when a spawn round is due
    pub fn should_spawn(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= self.interval {
            self.ticks = 0;
            true
        } else {
            false
        }
    }
}

/// One spawn round: pick a random platform and spawn on it if it qualifies.
///
/// A platform qualifies when it starts past the spawn threshold (fresh
/// enemies materialize ahead of the hero, never on top of it), is wide
/// enough to patrol, and does not already host a live enemy. An
/// unqualified pick skips the round.
pub fn try_spawn(
    platforms: &[Platform],
    enemies: &[Enemy],
    tuning: &EnemyTuning,
    rng: &mut impl Rng,
) -> Option<Enemy> {
    let eligible: Vec<&Platform> = platforms
        .iter()
        .filter(|p| p.rect.x > tuning.min_spawn_x && p.rect.w >= tuning.min_host_width)
        .collect();
    if eligible.is_empty() {
        return None;
    }

    let host = eligible[rng.gen_range(0..eligible.len())];
    if enemies.iter().any(|e| e.platform_id == host.id) {
        return None;
    }
    Some(Enemy::new(host, tuning, rng))
}
