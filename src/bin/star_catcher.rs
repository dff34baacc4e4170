//! Star Catcher: slide the paddle left and right, catch the falling stars.
//! Every catch is a point; misses just vanish. Close the window to quit.

use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use starbridge::config::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use starbridge::game::CatchGame;
use starbridge::input;
use starbridge::render;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Star Catcher v{}", starbridge::VERSION),
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
    let mut game = CatchGame::new(tuning);

    println!("=== STAR CATCHER ===");

    loop {
        let frame_start = get_time();

        let snapshot = input::poll();
        game.tick(&snapshot, get_frame_time(), &mut rng);

        render::catch::draw_catch(&game);

        render::end_frame(frame_start).await;
    }
}
