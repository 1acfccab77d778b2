//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. Defaults
//! come from [`crate::consts`]; a JSON file may override any subset of fields,
//! missing keys keep their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult, require_non_negative, require_positive};

/// Runtime-tunable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub max_dt: f32,
    pub gravity: f32,

    // === Tank ===
    pub tank_width: f32,
    pub tank_height: f32,
    pub tank_ground_offset: f32,
    pub barrel_length: f32,
    pub turret_min_deg: f32,
    pub turret_max_deg: f32,
    pub turret_start_deg: f32,
    pub turret_slew_deg: f32,
    pub starting_lives: u32,

    // === Shells ===
    pub muzzle_speed: f32,
    pub fire_cooldown: f32,
    pub shell_margin: f32,

    // === Helicopters ===
    pub helicopter_width: f32,
    pub helicopter_height: f32,
    pub helicopter_alt_min: f32,
    pub helicopter_alt_max: f32,
    pub helicopter_speed_min: f32,
    pub helicopter_speed_max: f32,
    pub helicopter_spawn_stagger: f32,
    pub score_per_kill: u64,

    // === Bombs ===
    pub bomb_radius: f32,
    pub bomb_drop_interval: f32,
    pub bomb_drift_factor: f32,
    /// Drop window half-width as a fraction of tank width (0 disables drops)
    pub bomb_drop_tolerance: f32,
    pub bomb_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            max_dt: MAX_DT,
            gravity: GRAVITY,

            tank_width: TANK_WIDTH,
            tank_height: TANK_HEIGHT,
            tank_ground_offset: TANK_GROUND_OFFSET,
            barrel_length: BARREL_LENGTH,
            turret_min_deg: TURRET_MIN_DEG,
            turret_max_deg: TURRET_MAX_DEG,
            turret_start_deg: TURRET_START_DEG,
            turret_slew_deg: TURRET_SLEW_DEG,
            starting_lives: STARTING_LIVES,

            muzzle_speed: MUZZLE_SPEED,
            fire_cooldown: FIRE_COOLDOWN,
            shell_margin: SHELL_MARGIN,

            helicopter_width: HELICOPTER_WIDTH,
            helicopter_height: HELICOPTER_HEIGHT,
            helicopter_alt_min: HELICOPTER_ALT_MIN,
            helicopter_alt_max: HELICOPTER_ALT_MAX,
            helicopter_speed_min: HELICOPTER_SPEED_MIN,
            helicopter_speed_max: HELICOPTER_SPEED_MAX,
            helicopter_spawn_stagger: HELICOPTER_SPAWN_STAGGER,
            score_per_kill: SCORE_PER_KILL,

            bomb_radius: BOMB_RADIUS,
            bomb_drop_interval: BOMB_DROP_INTERVAL,
            bomb_drift_factor: BOMB_DRIFT_FACTOR,
            bomb_drop_tolerance: BOMB_DROP_TOLERANCE,
            bomb_margin: BOMB_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> ConfigResult<()> {
        require_positive("screen_width", self.screen_width)?;
        require_positive("screen_height", self.screen_height)?;
        require_positive("max_dt", self.max_dt)?;
        require_non_negative("gravity", self.gravity)?;

        require_positive("tank_width", self.tank_width)?;
        require_positive("tank_height", self.tank_height)?;
        require_non_negative("tank_ground_offset", self.tank_ground_offset)?;
        require_non_negative("barrel_length", self.barrel_length)?;
        require_non_negative("turret_slew_deg", self.turret_slew_deg)?;
        if !(0.0..=180.0).contains(&self.turret_min_deg) {
            return Err(ConfigError::InvalidValue {
                name: "turret_min_deg",
                value: self.turret_min_deg,
                expected: "[0, 180]",
            });
        }
        if !(self.turret_max_deg <= 180.0 && self.turret_max_deg > self.turret_min_deg) {
            return Err(ConfigError::InvalidValue {
                name: "turret_max_deg",
                value: self.turret_max_deg,
                expected: "(turret_min_deg, 180]",
            });
        }
        if !(self.turret_min_deg..=self.turret_max_deg).contains(&self.turret_start_deg) {
            return Err(ConfigError::InvalidValue {
                name: "turret_start_deg",
                value: self.turret_start_deg,
                expected: "[turret_min_deg, turret_max_deg]",
            });
        }

        require_positive("muzzle_speed", self.muzzle_speed)?;
        require_non_negative("fire_cooldown", self.fire_cooldown)?;
        require_non_negative("shell_margin", self.shell_margin)?;

        require_positive("helicopter_width", self.helicopter_width)?;
        require_positive("helicopter_height", self.helicopter_height)?;
        require_non_negative("helicopter_alt_min", self.helicopter_alt_min)?;
        if !(self.helicopter_alt_max.is_finite()
            && self.helicopter_alt_max >= self.helicopter_alt_min)
        {
            return Err(ConfigError::InvalidValue {
                name: "helicopter_alt_max",
                value: self.helicopter_alt_max,
                expected: "[helicopter_alt_min, ∞)",
            });
        }
        require_positive("helicopter_speed_min", self.helicopter_speed_min)?;
        if !(self.helicopter_speed_max.is_finite()
            && self.helicopter_speed_max >= self.helicopter_speed_min)
        {
            return Err(ConfigError::InvalidValue {
                name: "helicopter_speed_max",
                value: self.helicopter_speed_max,
                expected: "[helicopter_speed_min, ∞)",
            });
        }
        require_non_negative("helicopter_spawn_stagger", self.helicopter_spawn_stagger)?;

        require_non_negative("bomb_radius", self.bomb_radius)?;
        require_non_negative("bomb_drop_interval", self.bomb_drop_interval)?;
        require_non_negative("bomb_drift_factor", self.bomb_drift_factor)?;
        require_non_negative("bomb_drop_tolerance", self.bomb_drop_tolerance)?;
        require_non_negative("bomb_margin", self.bomb_margin)?;
        Ok(())
    }

    /// Center of the tank's base line
    pub fn tank_center(&self) -> Vec2 {
        Vec2::new(
            self.screen_width * 0.5,
            self.screen_height - self.tank_ground_offset,
        )
    }
}
