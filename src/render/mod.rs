//! Presentation layer
//!
//! All macroquad drawing lives here, reading simulation state and never
//! mutating it. Sprites are procedural: rectangles, circles, triangles and
//! lines, in the spirit of the stone-bridge look.

pub mod backdrop;
pub mod catch;
pub mod enemy;
pub mod hero;
pub mod hud;
pub mod platforms;

pub use backdrop::Backdrop;

use macroquad::prelude::{get_time, next_frame};

use crate::config::TICKS_PER_SECOND;

/// Finish the frame: burn the remaining budget so the loop runs at the
/// fixed tick rate, then present. Sleep covers the bulk of the wait and a
/// short spin covers the tail; wasm has no thread to sleep so it only
/// spins.
pub async fn end_frame(frame_start: f64) {
    let target_frame_time = 1.0 / TICKS_PER_SECOND;
    let elapsed = get_time() - frame_start;
    if elapsed < target_frame_time {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002;
            while get_time() - frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
    }
    next_frame().await;
}
