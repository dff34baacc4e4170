//! Game simulation
//!
//! Fixed-tick arcade cores shared by the three binaries. Entities are plain
//! data structs; each game session owns its world collections and exposes a
//! single `tick` that composes input, kinematics, collision, spawning and
//! despawning. Nothing in here draws or touches the window.
//!
//! Key concepts:
//! - `Hero`: the platformer player body (kinematics + stamina)
//! - `Terrain`: the endless procedural stone bridge and its scroll shift
//! - Sessions (`CatchGame`, `BridgeGame`, `QuestGame`): one per binary
//! - `GameMode`: the two-state Running/GameOver machine
//!
//! Randomness is always an explicitly passed generator so sessions can be
//! replayed under test with a seeded rng.

pub mod bridge;
pub mod catch;
pub mod collision;
pub mod combat;
pub mod enemy;
pub mod hero;
pub mod platform;
pub mod quest;
pub mod stars;
pub mod terrain;

pub use bridge::BridgeGame;
pub use catch::CatchGame;
pub use combat::{Health, Projectile};
pub use enemy::Enemy;
pub use hero::Hero;
pub use platform::Platform;
pub use quest::QuestGame;
pub use stars::Star;
pub use terrain::Terrain;

/// Session state machine. There is no pause and no menu: a session is
/// either running or waiting on the game-over screen for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Running,
    GameOver,
}
