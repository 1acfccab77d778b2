//! Tank Defense - a 2D tank artillery game
//!
//! Core modules:
//! - `sim`: Simulation core (kinematics, spawning, collisions, session state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Host preferences (frame pacing, input hold window)
//! - `renderer`: Terminal renderer consuming simulation snapshots
//! - `platform`: Clock and keyboard sampling for the native host

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, ConfigResult};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions (screen space, Y grows downward)
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Largest timestep a single tick will integrate (seconds)
    pub const MAX_DT: f32 = 0.05;

    /// Downward acceleration for shells and bombs (units/s²)
    pub const GRAVITY: f32 = 900.0;

    /// Tank hitbox, independent of whatever the host draws
    pub const TANK_WIDTH: f32 = 140.0;
    pub const TANK_HEIGHT: f32 = 40.0;
    /// Distance from the bottom edge to the tank's base line
    pub const TANK_GROUND_OFFSET: f32 = 40.0;
    pub const BARREL_LENGTH: f32 = 150.0;

    /// Turret limits in degrees (90 = straight up)
    pub const TURRET_MIN_DEG: f32 = 10.0;
    pub const TURRET_MAX_DEG: f32 = 170.0;
    pub const TURRET_START_DEG: f32 = 55.0;
    /// Turret slew rate while an aim key is held (degrees/s)
    pub const TURRET_SLEW_DEG: f32 = 60.0;

    /// Shell muzzle speed (units/s)
    pub const MUZZLE_SPEED: f32 = 800.0;
    /// Reload time between shots (seconds)
    pub const FIRE_COOLDOWN: f32 = 0.35;
    /// Shells past the left/right edge by more than this are discarded
    pub const SHELL_MARGIN: f32 = 50.0;

    /// Helicopter pool and body size
    pub const HELICOPTER_COUNT: usize = 3;
    pub const HELICOPTER_WIDTH: f32 = 120.0;
    pub const HELICOPTER_HEIGHT: f32 = 40.0;
    /// Altitude band for respawns (top edge of the body)
    pub const HELICOPTER_ALT_MIN: f32 = 90.0;
    pub const HELICOPTER_ALT_MAX: f32 = 240.0;
    /// Speed band for respawns (units/s)
    pub const HELICOPTER_SPEED_MIN: f32 = 90.0;
    pub const HELICOPTER_SPEED_MAX: f32 = 160.0;
    /// Extra altitude per slot at session start
    pub const HELICOPTER_SPAWN_STAGGER: f32 = 30.0;

    pub const BOMB_RADIUS: f32 = 12.0;
    /// Seconds between drops for a single helicopter
    pub const BOMB_DROP_INTERVAL: f32 = 2.2;
    /// Fraction of the helicopter's speed a bomb inherits horizontally
    pub const BOMB_DRIFT_FACTOR: f32 = 0.2;
    /// Drop window half-width as a fraction of tank width
    pub const BOMB_DROP_TOLERANCE: f32 = 0.35;
    /// Bombs below the bottom edge by more than this are discarded
    pub const BOMB_MARGIN: f32 = 50.0;

    pub const STARTING_LIVES: u32 = 3;
    pub const SCORE_PER_KILL: u64 = 10;
}

/// Unit direction of a turret at `angle_deg` in screen space.
///
/// 90° points straight up; since Y grows downward the vertical component is
/// negated.
#[inline]
pub fn turret_direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Screen-space angle (degrees) of the vector `dir`, inverse of [`turret_direction`]
#[inline]
pub fn direction_angle_deg(dir: Vec2) -> f32 {
    (-dir.y).atan2(dir.x).to_degrees()
}
