//! The basic bridge-run session
//!
//! One hero, endless terrain, a distance score. The camera never really
//! moves: once the hero crosses the scroll threshold the excess is taken
//! off every world object instead, and the same excess accumulates into
//! the score.

use rand::Rng;

use crate::config::{Tuning, SCROLL_THRESHOLD, SCREEN_WIDTH};
use crate::game::hero::Hero;
use crate::game::terrain::{Terrain, SPAWN_AHEAD};
use crate::game::GameMode;
use crate::input::InputSnapshot;

pub struct BridgeGame {
    pub hero: Hero,
    pub terrain: Terrain,
    /// Distance score; grows with the scroll shift
    pub score: f32,
    pub mode: GameMode,
    pub tuning: Tuning,
}

impl BridgeGame {
    pub fn new(tuning: Tuning, rng: &mut impl Rng) -> Self {
        let terrain = Terrain::new(tuning.platforms, rng);
        let hero = Hero::new(100.0, terrain.platforms[0].rect.y, &tuning);
        Self {
            hero,
            terrain,
            score: 0.0,
            mode: GameMode::Running,
            tuning,
        }
    }

    /// Rebuild the whole world; score returns to zero
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Self::new(self.tuning, rng);
    }

    /// One fixed tick of the session
    pub fn tick(&mut self, input: &InputSnapshot, rng: &mut impl Rng) {
        if self.mode == GameMode::GameOver {
            if input.any_key_pressed {
                self.reset(rng);
            }
            return;
        }

        // Hero kinematics
        self.hero.handle_input(input, &self.tuning);
        self.hero.update_stamina(&self.tuning.stamina);
        self.hero.update_animation();
        self.hero.apply_gravity(&self.tuning.hero);
        self.hero.settle_on_platforms(&self.terrain.platforms);

        // Camera scroll: pin the hero at the threshold, move the world
        if self.hero.rect.x > SCROLL_THRESHOLD {
            let shift = self.hero.rect.x - SCROLL_THRESHOLD;
            self.hero.rect.x = SCROLL_THRESHOLD;
            self.score += shift;
            self.terrain.shift_left(shift);
        }

        // Keep the bridge ahead of the camera, drop what fell behind
        self.terrain.fill_ahead(SCREEN_WIDTH + SPAWN_AHEAD, rng);
        self.terrain.retire_behind();

        // Left wall
        if self.hero.rect.x < 0.0 {
            self.hero.rect.x = 0.0;
        }

        if self.hero.is_dead() {
            self.mode = GameMode::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_HEIGHT;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    #[test]
    fn test_hero_starts_on_the_starting_bridge() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut g = BridgeGame::new(Tuning::default(), &mut rng);

        g.tick(&idle(), &mut rng);
        assert!(g.hero.on_ground);
        assert_eq!(g.mode, GameMode::Running);
    }

    #[test]
    fn test_scroll_pins_hero_and_scores_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut g = BridgeGame::new(Tuning::default(), &mut rng);
        let right = InputSnapshot { right: true, ..idle() };

        // Run right until the threshold bites
        let mut shifted = false;
        let start_edge = g.terrain.platforms[0].rect.right();
        for _ in 0..120 {
            g.tick(&right, &mut rng);
            if g.score > 0.0 {
                shifted = true;
                assert!(g.hero.rect.x <= SCROLL_THRESHOLD);
            }
        }
        assert!(shifted);
        // The starting bridge moved left with the score (or scrolled out)
        match g.terrain.get(0) {
            Some(start) => assert!(start.rect.right() < start_edge),
            None => {}
        }
    }

    #[test]
    fn test_frontier_invariant_holds_every_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut g = BridgeGame::new(Tuning::default(), &mut rng);
        let sprint_right = InputSnapshot { right: true, sprint: true, ..idle() };

        for _ in 0..600 {
            g.tick(&sprint_right, &mut rng);
            if g.mode == GameMode::Running {
                assert!(g.terrain.rightmost_edge() >= SCREEN_WIDTH + SPAWN_AHEAD);
            }
        }
    }

    #[test]
    fn test_fall_to_game_over_and_restart_resets_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let mut g = BridgeGame::new(Tuning::default(), &mut rng);

        // Bank some distance first
        let right = InputSnapshot { right: true, ..idle() };
        for _ in 0..60 {
            g.tick(&right, &mut rng);
        }
        assert!(g.score > 0.0);

        // Shove the hero past the bottom edge: next tick flips the state
        g.hero.rect.y = SCREEN_HEIGHT + 1.0;
        g.tick(&idle(), &mut rng);
        assert_eq!(g.mode, GameMode::GameOver);

        // Ticks without a key press stay on the game-over screen
        g.tick(&idle(), &mut rng);
        assert_eq!(g.mode, GameMode::GameOver);

        // Any key restarts with a zeroed score
        let any = InputSnapshot { any_key_pressed: true, ..idle() };
        g.tick(&any, &mut rng);
        assert_eq!(g.mode, GameMode::Running);
        assert_eq!(g.score, 0.0);
        assert!(!g.hero.is_dead());
    }

    #[test]
    fn test_left_wall_clamps_hero() {
        let mut rng = ChaCha8Rng::seed_from_u64(25);
        let mut g = BridgeGame::new(Tuning::default(), &mut rng);
        let left = InputSnapshot { left: true, ..idle() };
        for _ in 0..100 {
            g.tick(&left, &mut rng);
        }
        assert_eq!(g.hero.rect.x, 0.0);
    }
}
