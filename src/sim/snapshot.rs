//! Read-only view of the world for renderers and hosts

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Heading, World};

/// Values shown in the one-line status overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub lives: u32,
    pub score: u64,
    pub turret_angle_deg: f32,
    pub game_over: bool,
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lives: {}   Score: {}   Angle: {} deg",
            self.lives, self.score, self.turret_angle_deg as i32
        )?;
        if self.game_over {
            write!(f, "   GAME OVER")?;
        }
        Ok(())
    }
}

/// Tank pose: hull box plus turret
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankPose {
    pub center: Vec2,
    pub size: Vec2,
    pub turret_base: Vec2,
    pub turret_tip: Vec2,
    pub turret_angle_deg: f32,
    pub turret_dir: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelicopterView {
    /// Top-left corner of the body
    pub pos: Vec2,
    pub heading: Heading,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub playfield: Vec2,
    pub tank: TankPose,
    pub shells: Vec<Vec2>,
    pub bombs: Vec<Vec2>,
    pub bomb_radius: f32,
    pub helicopters: Vec<HelicopterView>,
    pub helicopter_size: Vec2,
    pub hud: Hud,
}

impl<R> World<R> {
    pub fn hud(&self) -> Hud {
        Hud {
            lives: self.lives,
            score: self.score,
            turret_angle_deg: self.tank.turret_angle_deg,
            game_over: self.is_game_over(),
        }
    }

    /// Owned copy of the drawable state
    pub fn snapshot(&self) -> Snapshot {
        let tuning = &self.tuning;
        Snapshot {
            tick: self.time_ticks,
            playfield: Vec2::new(tuning.screen_width, tuning.screen_height),
            tank: TankPose {
                center: self.tank.center,
                size: Vec2::new(tuning.tank_width, tuning.tank_height),
                turret_base: self.tank.turret_base(tuning),
                turret_tip: self.tank.turret_tip(tuning),
                turret_angle_deg: self.tank.turret_angle_deg,
                turret_dir: self.tank.direction(),
            },
            shells: self.shells.iter().filter(|s| s.active).map(|s| s.pos).collect(),
            bombs: self.bombs.iter().filter(|b| b.active).map(|b| b.pos).collect(),
            bomb_radius: tuning.bomb_radius,
            helicopters: self
                .helicopters
                .iter()
                .map(|h| HelicopterView {
                    pos: h.pos,
                    heading: h.heading,
                })
                .collect(),
            helicopter_size: Vec2::new(tuning.helicopter_width, tuning.helicopter_height),
            hud: self.hud(),
        }
    }
}
