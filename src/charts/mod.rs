pub mod bar;
pub mod line;
pub mod scatter;
pub mod ticks;

pub use bar::{BarRect, cost_bar, funding_bar};
pub use line::{clip_to_rect, polyline_length, prefix_by_fraction, project_series};
pub use scatter::{diagonal_rule, dot_position, padded_extent, symbol_outline};
pub use ticks::{Tick, linear_axis_ticks, linear_ticks, month_axis_ticks};
