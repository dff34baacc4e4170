//! Sky Bridge: run the endless stone bridge.
//! Arrows/WASD move, Space jumps (only from the ground), Shift sprints
//! while stamina lasts. Fall off the bottom and any key restarts.

use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use starbridge::config::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use starbridge::game::{BridgeGame, GameMode};
use starbridge::input;
use starbridge::render::{self, Backdrop};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Sky Bridge v{}", starbridge::VERSION),
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

    // The backdrop outlives resets: clouds stay where they were
    let backdrop = Backdrop::generate(&mut rng);
    let mut game = BridgeGame::new(tuning, &mut rng);

    println!("=== SKY BRIDGE ===");

    loop {
        let frame_start = get_time();

        let snapshot = input::poll();
        game.tick(&snapshot, &mut rng);

        backdrop.draw(game.score);
        for platform in &game.terrain.platforms {
            render::platforms::draw_platform(platform);
        }
        render::hero::draw_hero(&game.hero);

        render::hud::draw_score("Distance", game.score as i64);
        render::hud::draw_stamina_bar(game.hero.stamina, game.tuning.stamina.max);

        if game.mode == GameMode::GameOver {
            render::hud::draw_game_over(game.score as i64);
        }

        render::end_frame(frame_start).await;
    }
}
