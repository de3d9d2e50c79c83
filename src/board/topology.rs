//! Static board graph: adjacency and mill lines.
//!
//! Both tables are constants. Nothing here is ever mutated, so one copy
//! serves every match in the process.

use crate::core::Position;

/// Number of three-in-a-row lines on the board.
pub const MILL_COUNT: usize = 16;

const fn p(index: u8) -> Position {
    Position::at(index)
}

/// Positions reachable in one step from each position.
#[rustfmt::skip]
const ADJACENCY: [&[Position]; 24] = [
    &[p(1), p(9)],                // 0
    &[p(0), p(2), p(4)],          // 1
    &[p(1), p(14)],               // 2
    &[p(4), p(10)],               // 3
    &[p(1), p(3), p(5), p(7)],    // 4
    &[p(4), p(13)],               // 5
    &[p(7), p(11)],               // 6
    &[p(4), p(6), p(8)],          // 7
    &[p(7), p(12)],               // 8
    &[p(0), p(10), p(21)],        // 9
    &[p(3), p(9), p(11), p(18)],  // 10
    &[p(6), p(10), p(15)],        // 11
    &[p(8), p(13), p(17)],        // 12
    &[p(5), p(12), p(14), p(20)], // 13
    &[p(2), p(13), p(23)],        // 14
    &[p(11), p(16)],              // 15
    &[p(15), p(17), p(19)],       // 16
    &[p(12), p(16)],              // 17
    &[p(10), p(19)],              // 18
    &[p(16), p(18), p(20), p(22)],// 19
    &[p(13), p(19)],              // 20
    &[p(9), p(22)],               // 21
    &[p(19), p(21), p(23)],       // 22
    &[p(14), p(22)],              // 23
];

/// The 16 mill lines: 8 horizontal, then 8 vertical.
#[rustfmt::skip]
pub const MILLS: [[Position; 3]; MILL_COUNT] = [
    [p(0), p(1), p(2)],
    [p(3), p(4), p(5)],
    [p(6), p(7), p(8)],
    [p(9), p(10), p(11)],
    [p(12), p(13), p(14)],
    [p(15), p(16), p(17)],
    [p(18), p(19), p(20)],
    [p(21), p(22), p(23)],
    [p(0), p(9), p(21)],
    [p(3), p(10), p(18)],
    [p(6), p(11), p(15)],
    [p(1), p(4), p(7)],
    [p(16), p(19), p(22)],
    [p(8), p(12), p(17)],
    [p(5), p(13), p(20)],
    [p(2), p(14), p(23)],
];

/// Indices into `MILLS` of the two lines through each position.
#[rustfmt::skip]
const MILLS_THROUGH: [[usize; 2]; 24] = [
    [0, 8],  [0, 11], [0, 15],
    [1, 9],  [1, 11], [1, 14],
    [2, 10], [2, 11], [2, 13],
    [3, 8],  [3, 9],  [3, 10], [4, 13], [4, 14], [4, 15],
    [5, 10], [5, 12], [5, 13],
    [6, 9],  [6, 12], [6, 14],
    [7, 8],  [7, 12], [7, 15],
];

/// Positions adjacent to `position`.
#[must_use]
pub fn neighbors(position: Position) -> &'static [Position] {
    ADJACENCY[position.index()]
}

/// Whether a piece can step directly from `from` to `to`.
#[must_use]
pub fn is_adjacent(from: Position, to: Position) -> bool {
    neighbors(from).contains(&to)
}

/// The mill lines that pass through `position`.
///
/// Every position lies on exactly one horizontal and one vertical line.
pub fn mills_containing(position: Position) -> impl Iterator<Item = &'static [Position; 3]> {
    MILLS_THROUGH[position.index()]
        .iter()
        .map(|&line| &MILLS[line])
}
