//! # Character canvas
//!
//! Turns an icon's vector markup into a small grid of block characters.
//!
//! ## Pipeline
//!
//! ```text
//!   viewBox + markup
//!         │
//!         ▼
//!   ┌───────────┐   path points   ┌──────────────┐
//!   │  markup   ├────────────────►│ splat + bleed│──┐
//!   │  scanner  │   circles       ├──────────────┤  │   ┌─────────┐
//!   │           ├────────────────►│  disk fill   │──┼──►│ InkGrid │──► " ░▒▓█"
//!   └───────────┘                 └──────────────┘  │   └─────────┘
//!                                                   │     (0..=4)
//! ```

mod grid;
pub mod markup;
pub mod ramp;
mod rasterizer;
mod shapes;

pub use grid::InkGrid;
pub use ramp::{glyph, level_of, MAX_INK, RAMP};
pub use rasterizer::{
    draw, rasterize, rasterize_default, rasterize_grid, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use shapes::{Cell, Point, Primitive, Scale};
