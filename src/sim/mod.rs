//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Time only arrives as `dt` from the host
//! - Randomness only through the world's `RandomSource`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{Rect, bomb_hits_tank};
pub use rng::{RandomSource, seeded};
pub use snapshot::{HelicopterView, Hud, Snapshot, TankPose};
pub use state::{Bomb, GameEvent, GamePhase, Heading, Helicopter, Projectile, Tank, World};
pub use tick::{TickInput, clamp_dt, integrate_ballistic, tick};
