//! Icon-to-characters rasterizer
//!
//! Pipeline: view box -> per-axis scale -> path points splatted with a
//! plus-shaped bleed -> circles filled as hard-edged disks -> ramp render.
//! Every call owns its grid; nothing here can fail.

use super::grid::InkGrid;
use super::markup;
use super::shapes::{Primitive, Scale};
use crate::icon::Icon;

/// Grid width used when the caller has no preference
pub const DEFAULT_WIDTH: usize = 16;
/// Grid height used when the caller has no preference
pub const DEFAULT_HEIGHT: usize = 16;

/// Render an icon as `height` lines of `width` ramp characters
pub fn rasterize(icon: &Icon, width: usize, height: usize) -> String {
    rasterize_grid(icon, width, height).render()
}

/// [`rasterize`] at [`DEFAULT_WIDTH`] × [`DEFAULT_HEIGHT`]
pub fn rasterize_default(icon: &Icon) -> String {
    rasterize(icon, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Rasterize into an ink grid without rendering it
pub fn rasterize_grid(icon: &Icon, width: usize, height: usize) -> InkGrid {
    let view_box = icon.view_box();
    let scale = Scale::new(
        width as f64 / view_box.width,
        height as f64 / view_box.height,
    );
    let mut grid = InkGrid::new(width, height);

    let primitives = markup::scan(&icon.content);
    tracing::debug!(
        "Rasterizing {} ({} primitives) at {}x{}",
        icon.display_name(),
        primitives.len(),
        width,
        height
    );

    // Paths first, then disks. Ink only ever grows and saturates, so the
    // order does not change the result.
    for primitive in primitives.iter().filter(|p| matches!(p, Primitive::Path(_))) {
        draw(&mut grid, scale, primitive);
    }
    for primitive in primitives.iter().filter(|p| matches!(p, Primitive::Circle { .. })) {
        draw(&mut grid, scale, primitive);
    }

    grid
}

/// Draw one primitive onto the grid
pub fn draw(grid: &mut InkGrid, scale: Scale, primitive: &Primitive) {
    match primitive {
        Primitive::Path(points) => {
            for &point in points {
                grid.splat(scale.to_cell(point));
            }
        }
        Primitive::Circle { center, radius } => {
            grid.fill_disk(scale.to_cell(*center), scale.radius(*radius));
        }
    }
}
