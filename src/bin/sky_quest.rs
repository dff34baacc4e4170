//! Sky Quest: the bridge run with teeth.
//! Everything Sky Bridge has, plus patrolling enemies on the wider spans,
//! a sword wave on J/X, three hearts and a moment of invincibility after
//! each hit. Lose the hearts or the footing and any key restarts.

use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use starbridge::config::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use starbridge::game::{GameMode, QuestGame};
use starbridge::input;
use starbridge::render::{self, Backdrop};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Sky Quest v{}", starbridge::VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let tuning = config::load_or_default();
    let mut rng = StdRng::from_entropy();

    let backdrop = Backdrop::generate(&mut rng);
    let mut game = QuestGame::new(tuning, &mut rng);
    let mut frame: u64 = 0;

    println!("=== SKY QUEST ===");

    loop {
        let frame_start = get_time();
        frame += 1;

        let snapshot = input::poll();
        game.tick(&snapshot, &mut rng);

        backdrop.draw(game.score);
        for platform in &game.terrain.platforms {
            render::platforms::draw_platform(platform);
        }
        for enemy in &game.enemies {
            render::enemy::draw_enemy(enemy);
        }
        for projectile in &game.projectiles {
            render::enemy::draw_projectile(projectile);
        }

        // Blink through the i-frame window instead of drawing solid
        let blinked_out = game.health.is_invincible() && (frame / 4) % 2 == 0;
        if !blinked_out {
            render::hero::draw_hero(&game.hero);
        }

        render::hud::draw_score("Distance", game.score as i64);
        render::hud::draw_stamina_bar(game.hero.stamina, game.tuning.stamina.max);
        render::hud::draw_hearts(&game.health);

        if game.mode == GameMode::GameOver {
            render::hud::draw_game_over(game.score as i64);
        }

        render::end_frame(frame_start).await;
    }
}
