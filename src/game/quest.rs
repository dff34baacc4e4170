//! The extended bridge-run session
//!
//! Everything the basic run has, plus patrolling enemies, a sword-wave
//! attack, hearts and post-hit invincibility. Dying to damage and dying to
//! the fall are the same transition: GameOver, any key restarts.

use rand::Rng;

use crate::config::{Tuning, SCROLL_THRESHOLD, SCREEN_WIDTH};
use crate::game::combat::{Health, Projectile};
use crate::game::enemy::{self, Enemy, EnemySpawner};
use crate::game::hero::Hero;
use crate::game::terrain::{Terrain, SPAWN_AHEAD};
use crate::game::GameMode;
use crate::input::InputSnapshot;

pub struct QuestGame {
    pub hero: Hero,
    pub health: Health,
    pub terrain: Terrain,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Distance score plus kill bonuses
    pub score: f32,
    pub mode: GameMode,
    pub tuning: Tuning,
    attack_cooldown: u32,
    spawner: EnemySpawner,
}

impl QuestGame {
    pub fn new(tuning: Tuning, rng: &mut impl Rng) -> Self {
        let terrain = Terrain::new(tuning.platforms, rng);
        let hero = Hero::new(100.0, terrain.platforms[0].rect.y, &tuning);
        Self {
            hero,
            health: Health::new(tuning.combat.max_health),
            terrain,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0.0,
            mode: GameMode::Running,
            tuning,
            attack_cooldown: 0,
            spawner: EnemySpawner::new(tuning.enemies.spawn_interval_ticks),
        }
    }

    /// Rebuild the whole world; score and hearts return to full
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

        // Sword wave, gated by the attack cooldown
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
        if input.attack_pressed && self.attack_cooldown == 0 {
            self.projectiles.push(Projectile::launch(
                &self.hero.rect,
                self.hero.facing_right,
                &self.tuning.combat,
            ));
            self.attack_cooldown = self.tuning.combat.attack_cooldown_ticks;
        }

        // Camera scroll: pin the hero, move platforms, enemies and waves
        if self.hero.rect.x > SCROLL_THRESHOLD {
            let shift = self.hero.rect.x - SCROLL_THRESHOLD;
            self.hero.rect.x = SCROLL_THRESHOLD;
            self.score += shift;
            self.terrain.shift_left(shift);
            for enemy in &mut self.enemies {
                enemy.rect.x -= shift;
            }
            for projectile in &mut self.projectiles {
                projectile.rect.x -= shift;
            }
        }

        self.terrain.fill_ahead(SCREEN_WIDTH + SPAWN_AHEAD, rng);
        self.terrain.retire_behind();

        // Enemies patrol their host platform and die with it
        let enemy_tuning = self.tuning.enemies;
        let terrain = &self.terrain;
        self.enemies.retain_mut(|enemy| match terrain.get(enemy.platform_id) {
            Some(host) => {
                enemy.patrol(&host.rect, &enemy_tuning);
                !enemy.is_retired()
            }
            None => false,
        });

        if self.spawner.should_spawn() {
            if let Some(enemy) =
                enemy::try_spawn(&self.terrain.platforms, &self.enemies, &self.tuning.enemies, rng)
            {
                self.enemies.push(enemy);
            }
        }

        // Sword waves fly and expire
        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles.retain(|p| !p.expired());

        // Wave vs enemy: both die, the kill pays out
        let kill_bonus = self.tuning.enemies.kill_bonus;
        let enemies = &mut self.enemies;
        let mut kills = 0;
        self.projectiles.retain(|projectile| {
            if let Some(hit) = enemies.iter().position(|e| e.rect.overlaps(&projectile.rect)) {
                enemies.swap_remove(hit);
                kills += 1;
                false
            } else {
                true
            }
        });
        self.score += kill_bonus * kills as f32;

        // Enemy contact, through the i-frame gate
        self.health.tick();
        let hero_rect = self.hero.rect;
        if self.enemies.iter().any(|e| e.rect.overlaps(&hero_rect)) && self.health.damage(1) {
            self.health.set_invincible(self.tuning.combat.invincibility_ticks);
            if self.health.is_dead() {
                self.mode = GameMode::GameOver;
            }
        }

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
    use crate::game::platform::Platform;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn game(seed: u64) -> (QuestGame, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = QuestGame::new(Tuning::default(), &mut rng);
        (g, rng)
    }

    /// Plant an enemy on a hero-sized platform so its patrol can never
    /// leave the hero's hitbox
    fn plant_enemy_on_hero(g: &mut QuestGame, rng: &mut impl Rng) {
        let host = Platform::new(
            9999,
            g.hero.rect.x - 8.0,
            g.hero.rect.bottom(),
            48.0,
            32.0,
            rng,
        );
        let mut enemy = Enemy::new(&host, &g.tuning.enemies, rng);
        enemy.rect.x = g.hero.rect.x;
        g.terrain.platforms.push(host);
        g.enemies.push(enemy);
    }

    #[test]
    fn test_attack_spawns_wave_on_cooldown() {
        let (mut g, mut rng) = game(31);
        let attack = InputSnapshot { attack_pressed: true, ..idle() };

        g.tick(&attack, &mut rng);
        assert_eq!(g.projectiles.len(), 1);

        // Mashing inside the cooldown window adds nothing
        for _ in 0..5 {
            g.tick(&attack, &mut rng);
        }
        assert_eq!(g.projectiles.len(), 1);

        // After the cooldown a second wave launches
        for _ in 0..g.tuning.combat.attack_cooldown_ticks {
            g.tick(&idle(), &mut rng);
        }
        g.tick(&attack, &mut rng);
        assert_eq!(g.projectiles.len(), 2);
    }

    #[test]
    fn test_wave_kills_enemy_and_pays_bonus() {
        let (mut g, mut rng) = game(32);

        // Enemy ahead of the hero at sword height
        let host = Platform::new(500, 200.0, g.hero.rect.bottom(), 200.0, 32.0, &mut rng);
        let enemy = Enemy::new(&host, &g.tuning.enemies, &mut rng);
        g.terrain.platforms.push(host);
        g.enemies.push(enemy);

        let attack = InputSnapshot { attack_pressed: true, ..idle() };
        g.tick(&attack, &mut rng);
        let mut survived = 60;
        while !g.enemies.is_empty() && survived > 0 {
            g.tick(&idle(), &mut rng);
            survived -= 1;
        }

        assert!(g.enemies.is_empty(), "wave never reached the enemy");
        assert!(g.projectiles.is_empty());
        assert!(g.score >= g.tuning.enemies.kill_bonus);
    }

    #[test]
    fn test_contact_damage_is_iframe_gated() {
        let (mut g, mut rng) = game(33);
        plant_enemy_on_hero(&mut g, &mut rng);

        let start = g.health.current;
        g.tick(&idle(), &mut rng);
        assert_eq!(g.health.current, start - 1);
        assert!(g.health.is_invincible());

        // Standing in the enemy for the whole i-frame window costs nothing
        for _ in 0..(g.tuning.combat.invincibility_ticks - 2) {
            g.tick(&idle(), &mut rng);
        }
        assert_eq!(g.health.current, start - 1);
    }

    #[test]
    fn test_health_exhaustion_ends_the_session() {
        let (mut g, mut rng) = game(34);
        plant_enemy_on_hero(&mut g, &mut rng);

        // Ride out enough i-frame windows to burn all hearts
        let budget = g.tuning.combat.max_health as u32 * (g.tuning.combat.invincibility_ticks + 5);
        let mut ticks = 0;
        while g.mode == GameMode::Running && ticks < budget {
            g.tick(&idle(), &mut rng);
            ticks += 1;
        }

        assert_eq!(g.mode, GameMode::GameOver);
        assert!(g.health.is_dead());
    }

    #[test]
    fn test_restart_refills_hearts_and_zeroes_score() {
        let (mut g, mut rng) = game(35);
        g.hero.rect.y = SCREEN_HEIGHT + 1.0;
        g.tick(&idle(), &mut rng);
        assert_eq!(g.mode, GameMode::GameOver);

        let any = InputSnapshot { any_key_pressed: true, ..idle() };
        g.tick(&any, &mut rng);
        assert_eq!(g.mode, GameMode::Running);
        assert_eq!(g.score, 0.0);
        assert_eq!(g.health.current, g.tuning.combat.max_health);
        assert!(g.enemies.is_empty());
        assert!(g.projectiles.is_empty());
    }

    #[test]
    fn test_enemy_despawns_with_its_platform() {
        let (mut g, mut rng) = game(36);

        // Host platform about to scroll out on the left
        let host = Platform::new(800, -40.0, g.hero.rect.bottom(), 60.0, 32.0, &mut rng);
        let enemy = Enemy::new(&host, &g.tuning.enemies, &mut rng);
        g.terrain.platforms.insert(0, host);
        g.enemies.push(enemy);

        // Walk right so the scroll pushes the host past the retirement line
        let right = InputSnapshot { right: true, ..idle() };
        for _ in 0..120 {
            g.tick(&right, &mut rng);
        }
        assert!(g.enemies.is_empty());
    }
}
