//! Embedded expense treemap: squarified layout plus an independent
//! click-to-zoom widget.

mod hierarchy;
mod layout;
mod zoom;

pub use hierarchy::{ExpenseItem, default_expenses};
pub use layout::{CELL_PALETTE, NORM_EXTENT, TreemapLayout, TreemapNode};
pub use zoom::{CellSnapshot, ZOOM_DURATION_S, ZoomTreemap};
