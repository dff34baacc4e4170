//! Endless procedural terrain
//!
//! Platforms are generated left to right: each new one starts a random gap
//! past the previous right edge, with a random width and a bounded vertical
//! wander so every ledge stays jumpable. Whenever the rightmost edge drops
//! below the visible frontier the terrain refills, and platforms that
//! scrolled far enough off the left edge are retired, so the live set stays
//! small no matter how far the run goes.

use rand::Rng;

use crate::config::{PlatformTuning, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::platform::Platform;

/// Keep generating while the rightmost edge is inside this margin past the
/// right side of the screen
pub const SPAWN_AHEAD: f32 = 300.0;

/// A fresh session pre-fills a little further than the running margin
pub const RESET_AHEAD: f32 = 400.0;

/// Platforms (and enemies standing on them) are dropped once their right
/// edge passes this x
pub const RETIRE_X: f32 = -50.0;

/// The ordered live platforms plus the generator cursor. Platforms are kept
/// sorted left to right; the last one is always the generation anchor.
#[derive(Debug, Clone)]
pub struct Terrain {
    pub platforms: Vec<Platform>,
    tuning: PlatformTuning,
    next_id: u32,
}

impl Terrain {
    /// A fresh bridge: one long starting span at the bottom left, then
    /// enough random platforms to cover the initial frontier.
    pub fn new(tuning: PlatformTuning, rng: &mut impl Rng) -> Self {
        let mut terrain = Self {
            platforms: Vec::new(),
            tuning,
            next_id: 0,
        };
        let start = Platform::new(
            terrain.alloc_id(),
            0.0,
            SCREEN_HEIGHT - 60.0,
            400.0,
            tuning.height,
            rng,
        );
        terrain.platforms.push(start);
        terrain.fill_ahead(SCREEN_WIDTH + RESET_AHEAD, rng);
        terrain
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Roll the next platform to the right of the current last one
    fn generate_next(&mut self, rng: &mut impl Rng) -> Platform {
        let (anchor_right, anchor_y) = match self.platforms.last() {
            Some(last) => (last.rect.right(), last.rect.y),
            None => (0.0, SCREEN_HEIGHT - 60.0),
        };
        let gap = rng.gen_range(self.tuning.gap_min..=self.tuning.gap_max);
        let width = rng.gen_range(self.tuning.min_width..=self.tuning.max_width);
        let x = anchor_right + gap;
        let wander = rng.gen_range(-self.tuning.y_variation..=self.tuning.y_variation);
        let y = (anchor_y + wander).clamp(self.tuning.min_y, self.tuning.max_y);
        Platform::new(self.alloc_id(), x, y, width, self.tuning.height, rng)
    }

    /// Generate until the rightmost trailing edge reaches `frontier`
    pub fn fill_ahead(&mut self, frontier: f32, rng: &mut impl Rng) {
        while self.rightmost_edge() < frontier {
            let platform = self.generate_next(rng);
            self.platforms.push(platform);
        }
    }

    /// Drop platforms that scrolled past the retirement line
    pub fn retire_behind(&mut self) {
        self.platforms.retain(|p| p.rect.right() > RETIRE_X);
    }

    /// Apply a scroll shift: move every platform left by `dx`
    pub fn shift_left(&mut self, dx: f32) {
        for platform in &mut self.platforms {
            platform.rect.x -= dx;
        }
    }

    pub fn rightmost_edge(&self) -> f32 {
        self.platforms.last().map(|p| p.rect.right()).unwrap_or(0.0)
    }

    /// Look a platform up by id (enemy hosting)
    pub fn get(&self, id: u32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tuning() -> PlatformTuning {
        Tuning::default().platforms
    }

    #[test]
    fn test_fresh_terrain_covers_the_frontier() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let terrain = Terrain::new(tuning(), &mut rng);
        assert!(terrain.rightmost_edge() >= SCREEN_WIDTH + RESET_AHEAD);
    }

    #[test]
    fn test_fill_restores_the_frontier_invariant() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut terrain = Terrain::new(tuning(), &mut rng);

        // Simulate a long scroll: shift everything far left, retire, refill
        for _ in 0..50 {
            terrain.shift_left(250.0);
            terrain.retire_behind();
            terrain.fill_ahead(SCREEN_WIDTH + SPAWN_AHEAD, &mut rng);
            assert!(terrain.rightmost_edge() >= SCREEN_WIDTH + SPAWN_AHEAD);
            assert!(!terrain.platforms.is_empty());
        }
    }

    #[test]
    fn test_live_platform_count_stays_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut terrain = Terrain::new(tuning(), &mut rng);

        let mut max_live = 0;
        for _ in 0..200 {
            terrain.shift_left(120.0);
            terrain.retire_behind();
            terrain.fill_ahead(SCREEN_WIDTH + SPAWN_AHEAD, &mut rng);
            max_live = max_live.max(terrain.platforms.len());
        }
        // Worst case: minimum-width platforms and gaps across ~1150 px of
        // track plus the retirement margin
        assert!(max_live < 16, "live platforms grew to {}", max_live);
    }

    #[test]
    fn test_generated_platforms_stay_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut terrain = Terrain::new(tuning(), &mut rng);
        let t = tuning();

        for _ in 0..30 {
            terrain.shift_left(300.0);
            terrain.retire_behind();
            terrain.fill_ahead(SCREEN_WIDTH + SPAWN_AHEAD, &mut rng);
        }

        let mut prev_right: Option<f32> = None;
        for p in &terrain.platforms {
            assert!(p.rect.y >= t.min_y && p.rect.y <= t.max_y);
            assert!(p.rect.w >= t.min_width && p.rect.w <= t.max_width);
            if let Some(right) = prev_right {
                // Small slack: both edges accumulated f32 scroll shifts
                let gap = p.rect.x - right;
                assert!(gap >= t.gap_min - 0.01 && gap <= t.gap_max + 0.01);
            }
            prev_right = Some(p.rect.right());
        }
    }

    #[test]
    fn test_ids_never_repeat_across_retirement() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut terrain = Terrain::new(tuning(), &mut rng);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            terrain.shift_left(200.0);
            terrain.retire_behind();
            let before = terrain.platforms.len();
            terrain.fill_ahead(SCREEN_WIDTH + SPAWN_AHEAD, &mut rng);
            for p in &terrain.platforms[before..] {
                assert!(seen.insert(p.id), "id {} was reused", p.id);
            }
        }
    }
}
