//! World state and entity types
//!
//! Everything one session needs lives in [`World`]; there is no ambient state.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::{RandomSource, seeded};
use crate::consts::HELICOPTER_COUNT;
use crate::tuning::Tuning;
use crate::turret_direction;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Terminal: lives ran out
    GameOver,
}

/// A tank shell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            active: true,
        }
    }
}

/// A bomb dropped by a helicopter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Bomb {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            active: true,
        }
    }
}

/// Horizontal travel direction of a helicopter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Left to right (+x)
    Right,
    /// Right to left (-x)
    Left,
}

impl Heading {
    /// +1 for `Right`, -1 for `Left`
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Right => 1.0,
            Heading::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Heading::Right => Heading::Left,
            Heading::Left => Heading::Right,
        }
    }
}

/// A helicopter slot. Slots are never removed, only reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Helicopter {
    /// Top-left corner of the body
    pub pos: Vec2,
    pub speed: f32,
    pub heading: Heading,
    pub drop_cooldown: f32,
}

impl Helicopter {
    /// Spawn a fresh helicopter just off-screen on the side `heading` enters from
    pub fn spawn<R: RandomSource + ?Sized>(
        heading: Heading,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let mut heli = Self {
            pos: Vec2::ZERO,
            speed: tuning.helicopter_speed_min,
            heading,
            drop_cooldown: 0.0,
        };
        heli.reset(heading, tuning, rng);
        heli
    }

    /// Respawn in place: new speed and altitude, cooldown cleared, positioned
    /// just off the edge it enters from
    pub fn reset<R: RandomSource + ?Sized>(
        &mut self,
        heading: Heading,
        tuning: &Tuning,
        rng: &mut R,
    ) {
        self.heading = heading;
        self.speed = rng.range(tuning.helicopter_speed_min, tuning.helicopter_speed_max);
        self.pos.y = rng.range(tuning.helicopter_alt_min, tuning.helicopter_alt_max);
        self.drop_cooldown = 0.0;
        self.pos.x = match heading {
            Heading::Right => -tuning.helicopter_width,
            Heading::Left => tuning.screen_width + tuning.helicopter_width,
        };
    }

    /// Horizontal center of the body
    pub fn center_x(&self, tuning: &Tuning) -> f32 {
        self.pos.x + tuning.helicopter_width * 0.5
    }

    /// Hitbox
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.pos,
            Vec2::new(tuning.helicopter_width, tuning.helicopter_height),
        )
    }

    /// True once the body is a full width past the edge it is heading toward
    pub fn has_exited(&self, tuning: &Tuning) -> bool {
        match self.heading {
            Heading::Right => self.pos.x > tuning.screen_width + tuning.helicopter_width,
            Heading::Left => self.pos.x + tuning.helicopter_width < -tuning.helicopter_width,
        }
    }
}

/// The player's tank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    /// Middle of the hull's base line
    pub center: Vec2,
    /// Degrees, 90 = straight up
    pub turret_angle_deg: f32,
    pub fire_cooldown: f32,
}

impl Tank {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            center: tuning.tank_center(),
            turret_angle_deg: tuning.turret_start_deg,
            fire_cooldown: 0.0,
        }
    }

    /// Unit vector the barrel points along
    pub fn direction(&self) -> Vec2 {
        turret_direction(self.turret_angle_deg)
    }

    /// Turret pivot on top of the hull
    pub fn turret_base(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.center.x, self.center.y - tuning.tank_height)
    }

    /// Muzzle position where shells spawn
    pub fn turret_tip(&self, tuning: &Tuning) -> Vec2 {
        self.turret_base(tuning) + self.direction() * tuning.barrel_length
    }

    /// Hull hitbox
    pub fn hull(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            Vec2::new(
                self.center.x - tuning.tank_width * 0.5,
                self.center.y - tuning.tank_height,
            ),
            Vec2::new(tuning.tank_width, tuning.tank_height),
        )
    }

    /// Rotate the turret by `delta_deg`, clamped to the tuning limits
    pub fn rotate_turret(&mut self, delta_deg: f32, tuning: &Tuning) {
        self.turret_angle_deg = (self.turret_angle_deg + delta_deg)
            .clamp(tuning.turret_min_deg, tuning.turret_max_deg);
    }
}

/// Something that happened during a tick, for hosts to log or react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShellFired,
    BombDropped { slot: usize },
    /// Flew off the far edge and re-entered from the other side
    HelicopterWrapped { slot: usize },
    /// Shot down and respawned heading the other way
    HelicopterDowned { slot: usize },
    TankHit { lives_left: u32 },
    GameOver { score: u64 },
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct World<R = Pcg32> {
    pub tuning: Tuning,
    pub tank: Tank,
    /// Live shells (order irrelevant)
    pub shells: Vec<Projectile>,
    /// Live bombs (order irrelevant)
    pub bombs: Vec<Bomb>,
    /// Fixed helicopter pool, indexed by slot
    pub helicopters: [Helicopter; HELICOPTER_COUNT],
    pub lives: u32,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Fire key state from the previous tick (edge detection)
    pub(crate) fire_was_down: bool,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: R,
}

impl World {
    /// New session with default tuning and a seeded generator
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        log::info!("Starting session with seed {}", seed);
        Self::with_rng(tuning, seeded(seed))
    }
}

impl<R: RandomSource> World<R> {
    /// New session drawing randomness from `rng`
    ///
    /// Each slot enters from a random side; later slots fly a little lower so
    /// the opening formation does not overlap.
    pub fn with_rng(tuning: Tuning, mut rng: R) -> Self {
        let helicopters = std::array::from_fn(|slot| {
            let heading = if rng.coin_flip() {
                Heading::Right
            } else {
                Heading::Left
            };
            let mut heli = Helicopter::spawn(heading, &tuning, &mut rng);
            heli.pos.y += slot as f32 * tuning.helicopter_spawn_stagger;
            heli
        });

        Self {
            tank: Tank::new(&tuning),
            shells: Vec::new(),
            bombs: Vec::new(),
            helicopters,
            lives: tuning.starting_lives,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            fire_was_down: false,
            events: Vec::new(),
            rng,
            tuning,
        }
    }
}

impl<R> World<R> {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Events recorded during the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Whether fire was held on the previous tick
    pub fn fire_was_down(&self) -> bool {
        self.fire_was_down
    }
}
