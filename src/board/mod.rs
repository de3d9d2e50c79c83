//! Board topology and contents.
//!
//! - `topology`: the fixed 24-point graph and its 16 mill lines
//! - `grid`: `Board`, the ownership of each position
//! - `render`: the 7-line text picture of a board

pub mod grid;
pub mod render;
pub mod topology;

pub use grid::Board;
pub use render::EMPTY_SYMBOL;
pub use topology::{is_adjacent, mills_containing, neighbors, MILLS, MILL_COUNT};
