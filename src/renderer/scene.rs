//! Draw a simulation snapshot with flat placeholder shapes

use crossterm::style::Color;
use glam::Vec2;

use super::canvas::{Canvas, Cell};
use crate::sim::Snapshot;

const GROUND: Cell = Cell::new('░', Color::Rgb { r: 40, g: 70, b: 50 });
const HULL: Cell = Cell::new('█', Color::Rgb { r: 70, g: 120, b: 60 });
const BARREL: Cell = Cell::new('▪', Color::Rgb { r: 180, g: 220, b: 200 });
const HELI_BODY: Cell = Cell::new('▓', Color::Rgb { r: 180, g: 60, b: 60 });
const HELI_ROTOR: Cell = Cell::new('─', Color::Rgb { r: 180, g: 60, b: 60 });
const SHELL: Cell = Cell::new('o', Color::Rgb { r: 240, g: 240, b: 200 });
const BOMB: Cell = Cell::new('●', Color::Rgb { r: 200, g: 80, b: 30 });

/// Rotor overhang past each side of the body
const ROTOR_OVERHANG: f32 = 15.0;
/// Ground strip starts this far below the hull's vertical middle
const GROUND_DROP: f32 = 20.0;

/// Rasterize one frame
pub fn draw_snapshot(canvas: &mut Canvas, snap: &Snapshot) {
    canvas.clear();

    let tank = &snap.tank;
    let ground_top = tank.center.y - tank.size.y * 0.5 + GROUND_DROP;
    canvas.fill_rect(
        Vec2::new(0.0, ground_top),
        Vec2::new(snap.playfield.x, snap.playfield.y),
        GROUND,
    );

    canvas.line(tank.turret_base, tank.turret_tip, BARREL);
    canvas.fill_rect(
        Vec2::new(tank.center.x - tank.size.x * 0.5, tank.center.y - tank.size.y),
        Vec2::new(tank.center.x + tank.size.x * 0.5, tank.center.y),
        HULL,
    );

    let size = snap.helicopter_size;
    for heli in &snap.helicopters {
        canvas.fill_rect(heli.pos, heli.pos + size, HELI_BODY);
        let rotor_y = heli.pos.y + size.y * 0.5;
        canvas.line(
            Vec2::new(heli.pos.x - ROTOR_OVERHANG, rotor_y),
            Vec2::new(heli.pos.x + size.x + ROTOR_OVERHANG, rotor_y),
            HELI_ROTOR,
        );
    }

    for &shell in &snap.shells {
        canvas.disc(shell, 6.0, SHELL);
    }
    for &bomb in &snap.bombs {
        canvas.disc(bomb, snap.bomb_radius, BOMB);
    }
}
