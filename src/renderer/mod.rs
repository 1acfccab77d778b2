//! Terminal rendering module
//!
//! Draws simulation snapshots as colored character cells. Gameplay never
//! depends on anything here.

pub mod canvas;
pub mod scene;
pub mod terminal;

pub use canvas::{Canvas, Cell};
pub use scene::draw_snapshot;
pub use terminal::present;
