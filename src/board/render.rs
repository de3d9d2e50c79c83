//! Text rendering of the board.
//!
//! A pure read of the board contents: `•` marks an empty intersection, `X`
//! and `O` mark players A and B.

use std::fmt;

use super::grid::Board;
use crate::core::Position;

/// Symbol drawn for an empty intersection.
pub const EMPTY_SYMBOL: char = '•';

impl Board {
    fn symbol(&self, index: u8) -> char {
        Position::new(index)
            .and_then(|p| self.get(p))
            .map_or(EMPTY_SYMBOL, |player| player.symbol())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<char> = (0..24).map(|i| self.symbol(i)).collect();
        writeln!(f, "{}-----{}-----{}", s[0], s[1], s[2])?;
        writeln!(f, "| {}---{}---{} |", s[3], s[4], s[5])?;
        writeln!(f, "| | {}-{}-{} | |", s[6], s[7], s[8])?;
        writeln!(f, "{}-{}-{}   {}-{}-{}", s[9], s[10], s[11], s[12], s[13], s[14])?;
        writeln!(f, "| | {}-{}-{} | |", s[15], s[16], s[17])?;
        writeln!(f, "| {}---{}---{} |", s[18], s[19], s[20])?;
        write!(f, "{}-----{}-----{}", s[21], s[22], s[23])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let rendered = Board::new().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "•-----•-----•");
        assert_eq!(lines[3], "•-•-•   •-•-•");
        assert_eq!(rendered.matches(EMPTY_SYMBOL).count(), 24);
    }

    #[test]
    fn test_render_pieces() {
        let p = |i| Position::new(i).unwrap();
        let board = Board::with_pieces(&[p(0), p(13)], &[p(23)]);
        let rendered = board.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "X-----•-----•");
        assert_eq!(lines[3], "•-•-•   •-X-•");
        assert_eq!(lines[6], "•-----•-----O");
    }
}
