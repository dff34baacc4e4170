//! Gameplay tuning
//!
//! All gameplay numbers live in a `Tuning` tree loaded from a RON file,
//! with `Default` impls carrying the shipped values. A tuning file is
//! optional: binaries fall back to the defaults when it is missing or
//! fails validation.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fixed playfield size, shared by all three games
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Simulation rate: one tick per frame at the capped rate
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Camera scroll trigger column: the hero never walks past this x
pub const SCROLL_THRESHOLD: f32 = SCREEN_WIDTH / 3.0;

/// Default tuning file path, relative to the working directory
pub const TUNING_PATH: &str = "assets/tuning.ron";

/// Validation limits to reject nonsense tuning files
pub mod limits {
    /// Maximum speed for any mover (px per tick)
    pub const MAX_SPEED: f32 = 64.0;
    /// Maximum gravity (px per tick squared)
    pub const MAX_GRAVITY: f32 = 8.0;
    /// Maximum entity or platform dimension (px)
    pub const MAX_SIZE: f32 = 512.0;
    /// Maximum tick interval for timers
    pub const MAX_TICKS: u32 = 3600;
}

/// Error type for tuning loading
#[derive(Debug)]
pub enum TuningError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for TuningError {
    fn from(e: ron::error::SpannedError) -> Self {
        TuningError::ParseError(e)
    }
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::IoError(e) => write!(f, "IO error: {}", e),
            TuningError::ParseError(e) => write!(f, "Parse error: {}", e),
            TuningError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Hero movement and kinematics
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HeroTuning {
    pub width: f32,
    pub height: f32,
    /// Walk speed, px per tick
    pub speed: f32,
    /// Sprint speed, px per tick
    pub sprint_speed: f32,
    /// Jump impulse (negative: up)
    pub jump_force: f32,
    /// Gravity, px per tick squared
    pub gravity: f32,
}

impl Default for HeroTuning {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 48.0,
            speed: 5.0,
            sprint_speed: 9.0,
            jump_force: -14.0,
            gravity: 0.7,
        }
    }
}

/// Sprint stamina pool
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct StaminaTuning {
    pub max: f32,
    /// Drain per sprinting tick
    pub drain: f32,
    /// Regen per non-sprinting tick
    pub regen: f32,
    /// Sprint refuses to engage at or below this
    pub min_to_sprint: f32,
}

impl Default for StaminaTuning {
    fn default() -> Self {
        Self {
            max: 100.0,
            drain: 1.2,
            regen: 0.4,
            min_to_sprint: 10.0,
        }
    }
}

/// Procedural bridge generation
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PlatformTuning {
    pub height: f32,
    pub min_width: f32,
    pub max_width: f32,
    /// Horizontal gap between consecutive platforms
    pub gap_min: f32,
    pub gap_max: f32,
    /// Vertical wander per step, applied in both directions
    pub y_variation: f32,
    /// Reachability clamp for platform tops
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for PlatformTuning {
    fn default() -> Self {
        Self {
            height: 32.0,
            min_width: 100.0,
            max_width: 220.0,
            gap_min: 60.0,
            gap_max: 140.0,
            y_variation: 60.0,
            min_y: 200.0,
            max_y: SCREEN_HEIGHT - 80.0,
        }
    }
}

/// Star-catcher paddle and star parameters
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CatchTuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle speed, px per tick
    pub paddle_speed: f32,
    pub star_radius: f32,
    /// Fall speed, px per tick
    pub star_speed: f32,
    /// Seconds between spawns (wall clock)
    pub spawn_interval: f32,
}

impl Default for CatchTuning {
    fn default() -> Self {
        Self {
            paddle_width: 80.0,
            paddle_height: 20.0,
            paddle_speed: 6.0,
            star_radius: 8.0,
            star_speed: 4.0,
            spawn_interval: 1.0,
        }
    }
}

/// Patrolling enemies (sky-quest only)
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub width: f32,
    pub height: f32,
    /// Patrol speed, px per tick
    pub patrol_speed: f32,
    /// Ticks between spawn attempts
    pub spawn_interval_ticks: u32,
    /// A platform must start past this x to host a fresh enemy
    pub min_spawn_x: f32,
    /// A platform must be at least this wide to host an enemy
    pub min_host_width: f32,
    /// Score awarded per kill
    pub kill_bonus: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: 28.0,
            height: 36.0,
            patrol_speed: 1.5,
            spawn_interval_ticks: 180,
            min_spawn_x: 480.0,
            min_host_width: 120.0,
            kill_bonus: 50.0,
        }
    }
}

/// Hearts, i-frames and sword waves (sky-quest only)
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub max_health: i32,
    /// I-frame duration after taking a hit
    pub invincibility_ticks: u32,
    /// Minimum ticks between attacks
    pub attack_cooldown_ticks: u32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Projectile speed, px per tick
    pub projectile_speed: f32,
    /// Projectile expires after this many ticks
    pub projectile_lifetime_ticks: u32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_health: 3,
            invincibility_ticks: 60,
            attack_cooldown_ticks: 24,
            projectile_width: 18.0,
            projectile_height: 8.0,
            projectile_speed: 7.0,
            projectile_lifetime_ticks: 50,
        }
    }
}

/// The full tuning tree
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub hero: HeroTuning,
    pub stamina: StaminaTuning,
    pub platforms: PlatformTuning,
    pub catch: CatchTuning,
    pub enemies: EnemyTuning,
    pub combat: CombatTuning,
}

fn check_speed(value: f32, name: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 || value > limits::MAX_SPEED {
        return Err(format!("{} must be in (0, {}], got {}", name, limits::MAX_SPEED, value));
    }
    Ok(())
}

fn check_size(value: f32, name: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 || value > limits::MAX_SIZE {
        return Err(format!("{} must be in (0, {}], got {}", name, limits::MAX_SIZE, value));
    }
    Ok(())
}

fn check_ticks(value: u32, name: &str) -> Result<(), String> {
    if value == 0 || value > limits::MAX_TICKS {
        return Err(format!("{} must be in [1, {}], got {}", name, limits::MAX_TICKS, value));
    }
    Ok(())
}

/// Validate a tuning tree to reject broken or hostile files
pub fn validate_tuning(t: &Tuning) -> Result<(), TuningError> {
    let checks = || -> Result<(), String> {
        check_size(t.hero.width, "hero.width")?;
        check_size(t.hero.height, "hero.height")?;
        check_speed(t.hero.speed, "hero.speed")?;
        check_speed(t.hero.sprint_speed, "hero.sprint_speed")?;
        if !t.hero.jump_force.is_finite() || t.hero.jump_force >= 0.0 {
            return Err(format!("hero.jump_force must be negative, got {}", t.hero.jump_force));
        }
        if !t.hero.gravity.is_finite() || t.hero.gravity <= 0.0 || t.hero.gravity > limits::MAX_GRAVITY {
            return Err(format!("hero.gravity must be in (0, {}], got {}", limits::MAX_GRAVITY, t.hero.gravity));
        }

        if !t.stamina.max.is_finite() || t.stamina.max <= 0.0 {
            return Err(format!("stamina.max must be positive, got {}", t.stamina.max));
        }
        if !t.stamina.drain.is_finite() || t.stamina.drain < 0.0 {
            return Err(format!("stamina.drain must be non-negative, got {}", t.stamina.drain));
        }
        if !t.stamina.regen.is_finite() || t.stamina.regen < 0.0 {
            return Err(format!("stamina.regen must be non-negative, got {}", t.stamina.regen));
        }
        if !t.stamina.min_to_sprint.is_finite()
            || t.stamina.min_to_sprint < 0.0
            || t.stamina.min_to_sprint >= t.stamina.max
        {
            return Err(format!(
                "stamina.min_to_sprint must be in [0, max), got {}",
                t.stamina.min_to_sprint
            ));
        }

        check_size(t.platforms.height, "platforms.height")?;
        check_size(t.platforms.min_width, "platforms.min_width")?;
        check_size(t.platforms.max_width, "platforms.max_width")?;
        if t.platforms.min_width > t.platforms.max_width {
            return Err("platforms.min_width exceeds max_width".to_string());
        }
        if !t.platforms.gap_min.is_finite() || t.platforms.gap_min < 0.0 {
            return Err(format!("platforms.gap_min must be non-negative, got {}", t.platforms.gap_min));
        }
        if !t.platforms.gap_max.is_finite() || t.platforms.gap_max < t.platforms.gap_min {
            return Err("platforms.gap_max below gap_min".to_string());
        }
        if !t.platforms.y_variation.is_finite() || t.platforms.y_variation < 0.0 {
            return Err(format!(
                "platforms.y_variation must be non-negative, got {}",
                t.platforms.y_variation
            ));
        }
        if t.platforms.min_y >= t.platforms.max_y {
            return Err("platforms.min_y must be below max_y".to_string());
        }

        check_size(t.catch.paddle_width, "catch.paddle_width")?;
        check_size(t.catch.paddle_height, "catch.paddle_height")?;
        check_speed(t.catch.paddle_speed, "catch.paddle_speed")?;
        check_size(t.catch.star_radius, "catch.star_radius")?;
        check_speed(t.catch.star_speed, "catch.star_speed")?;
        if !t.catch.spawn_interval.is_finite() || t.catch.spawn_interval <= 0.0 {
            return Err(format!(
                "catch.spawn_interval must be positive, got {}",
                t.catch.spawn_interval
            ));
        }

        check_size(t.enemies.width, "enemies.width")?;
        check_size(t.enemies.height, "enemies.height")?;
        check_speed(t.enemies.patrol_speed, "enemies.patrol_speed")?;
        check_ticks(t.enemies.spawn_interval_ticks, "enemies.spawn_interval_ticks")?;
        check_size(t.enemies.min_host_width, "enemies.min_host_width")?;

        if t.combat.max_health < 1 {
            return Err(format!("combat.max_health must be at least 1, got {}", t.combat.max_health));
        }
        check_ticks(t.combat.invincibility_ticks, "combat.invincibility_ticks")?;
        check_ticks(t.combat.attack_cooldown_ticks, "combat.attack_cooldown_ticks")?;
        check_size(t.combat.projectile_width, "combat.projectile_width")?;
        check_size(t.combat.projectile_height, "combat.projectile_height")?;
        check_speed(t.combat.projectile_speed, "combat.projectile_speed")?;
        check_ticks(t.combat.projectile_lifetime_ticks, "combat.projectile_lifetime_ticks")?;
        Ok(())
    };
    checks().map_err(TuningError::ValidationError)
}

/// Load tuning from a RON string (for embedded defaults or testing)
pub fn load_tuning_from_str(s: &str) -> Result<Tuning, TuningError> {
    let tuning: Tuning = ron::from_str(s)?;
    validate_tuning(&tuning)?;
    Ok(tuning)
}

/// Load tuning from a RON file
pub fn load_tuning<P: AsRef<Path>>(path: P) -> Result<Tuning, TuningError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let tuning: Tuning = match ron::from_str(&contents) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("RON parse error in {}: {}", path.display(), e);
            let pos = e.position;
            let lines: Vec<&str> = contents.lines().collect();
            let line_idx = pos.line.saturating_sub(1);
            if line_idx < lines.len() {
                eprintln!("  Line {}: {}", pos.line, lines[line_idx]);
            }
            return Err(e.into());
        }
    };

    validate_tuning(&tuning)?;
    Ok(tuning)
}

/// Load tuning from the default path, falling back to `Tuning::default()`
/// when the file is missing or rejected. Used by the binaries at startup.
pub fn load_or_default() -> Tuning {
    match load_tuning(TUNING_PATH) {
        Ok(t) => {
            println!("Loaded tuning from {}", TUNING_PATH);
            t
        }
        Err(e) => {
            eprintln!("Tuning fallback ({}): {}", TUNING_PATH, e);
            Tuning::default()
        }
    }
}
