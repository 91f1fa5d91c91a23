//! # Icon Preview
//!
//! Renders vector icon records as block-character grids for terminal display.
//! The rasterizer is a pure function: it never fails, never blocks, and owns
//! all of its working state, so it is safe to call from any thread.
//!
//! ```
//! use icon_preview::{rasterize, Icon};
//!
//! let icon = Icon::new("0 0 24 24", r#"<circle cx="12" cy="12" r="6"/>"#);
//! let preview = rasterize(&icon, 8, 8);
//! assert_eq!(preview.lines().count(), 8);
//! ```

pub mod canvas;
pub mod config;
pub mod errors;
pub mod icon;

pub use canvas::{rasterize, rasterize_default, rasterize_grid, InkGrid};
pub use config::PreviewConfig;
pub use errors::{PreviewError, Result};
pub use icon::{load_icons, Icon, SearchResponse, ViewBox};
