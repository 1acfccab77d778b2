//! Present a canvas to the terminal
//!
//! All terminal output lives here; nothing in this file knows about the game.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
};

use super::canvas::Canvas;

const BACKGROUND: Color = Color::Rgb { r: 18, g: 26, b: 36 };
const STATUS: Color = Color::White;

/// Write the whole canvas, then the status line (if any) on the row below it
pub fn present<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    status: Option<&str>,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(BACKGROUND))?;

    for row in 0..canvas.rows() {
        out.queue(cursor::MoveTo(0, row))?;
        let mut current = None;
        for cell in canvas.row(row) {
            if current != Some(cell.color) {
                out.queue(style::SetForegroundColor(cell.color))?;
                current = Some(cell.color);
            }
            out.queue(Print(cell.glyph))?;
        }
    }

    if let Some(status) = status {
        let width = canvas.cols() as usize;
        out.queue(cursor::MoveTo(0, canvas.rows()))?;
        out.queue(style::SetForegroundColor(STATUS))?;
        out.queue(Print(format!("{:^width$}", status, width = width)))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()
}
