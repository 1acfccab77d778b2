//! Demo controller that plays the tank
//!
//! Used by the headless host to exercise a full session without a keyboard.
//! It only produces [`TickInput`]s, so it plays by the same rules as a human.

use std::cmp::Ordering;

use glam::Vec2;

use super::state::{Helicopter, Tank, World};
use super::tick::TickInput;
use crate::direction_angle_deg;
use crate::tuning::Tuning;

/// Fire once the turret is within this many degrees of the solution
pub const AIM_TOLERANCE_DEG: f32 = 1.5;

/// Lead-iteration passes when predicting the intercept
const LEAD_ITERATIONS: usize = 3;

#[derive(Debug, Clone, Copy)]
struct FiringSolution {
    angle_deg: f32,
    flight_time: f32,
}

/// Turret angle that puts a shell on `heli`, if one exists within the turret
/// limits and the intercept is still over the playfield
fn firing_solution(heli: &Helicopter, tank: &Tank, tuning: &Tuning) -> Option<FiringSolution> {
    let base = tank.turret_base(tuning);
    let target = Vec2::new(
        heli.center_x(tuning),
        heli.pos.y + tuning.helicopter_height * 0.5,
    );
    let heli_vel = Vec2::new(heli.speed * heli.heading.sign(), 0.0);

    let mut offset = target - base;
    let mut flight_time = 0.0;
    for _ in 0..LEAD_ITERATIONS {
        // Shells leave from the muzzle, not the pivot
        flight_time = (offset.length() - tuning.barrel_length).max(0.0) / tuning.muzzle_speed;
        offset = target - base + heli_vel * flight_time;
    }

    let intercept_x = base.x + offset.x;
    if !(0.0..=tuning.screen_width).contains(&intercept_x) {
        return None;
    }

    // Aim above the intercept by the distance the shell falls on the way
    let drop = 0.5 * tuning.gravity * flight_time * flight_time;
    let angle_deg = direction_angle_deg(offset - Vec2::new(0.0, drop));

    (tuning.turret_min_deg..=tuning.turret_max_deg)
        .contains(&angle_deg)
        .then_some(FiringSolution {
            angle_deg,
            flight_time,
        })
}

/// Pick the quickest intercept, slew toward it, fire when lined up
///
/// `previous` is the input returned on the last call; fire is released for a
/// tick after every shot so the press edge registers again.
pub fn autopilot<R>(world: &World<R>, previous: &TickInput) -> TickInput {
    if world.is_game_over() {
        return TickInput::default();
    }

    let best = world
        .helicopters
        .iter()
        .filter_map(|heli| firing_solution(heli, &world.tank, &world.tuning))
        .min_by(|a, b| {
            a.flight_time
                .partial_cmp(&b.flight_time)
                .unwrap_or(Ordering::Equal)
        });

    let Some(solution) = best else {
        return TickInput::default();
    };

    let error = solution.angle_deg - world.tank.turret_angle_deg;
    let on_target = error.abs() <= AIM_TOLERANCE_DEG;

    TickInput {
        aim_left: error > AIM_TOLERANCE_DEG,
        aim_right: error < -AIM_TOLERANCE_DEG,
        fire: on_target && !previous.fire && world.tank.fire_cooldown <= 0.0,
    }
}
