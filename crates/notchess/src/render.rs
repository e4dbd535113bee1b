//! Plain-text board diagram.

use notchess_core::Square;
use notchess_engine::Position;

const BORDER: &str = "  +-----------------+";

/// Draws `position` with rank 8 at the top, followed by a status line.
pub fn board(position: &Position) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    for rank in (0..8u8).rev() {
        out.push_str(&format!("{} |", rank + 1));
        for file in 0..8u8 {
            let symbol = Square::new(file, rank)
                .and_then(|square| position.piece_at(square))
                .map_or('.', |piece| piece.symbol());
            out.push(' ');
            out.push(symbol);
        }
        out.push_str(" |\n");
    }
    out.push_str(BORDER);
    out.push_str("\n    A B C D E F G H\n");
    out.push_str(&format!(
        "{} to move, {} rounds left",
        position.side_to_move(),
        position.moves_remaining()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board() {
        let text = board(&Position::startpos(50));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[1], "8 | r n b q k b n r |");
        assert_eq!(lines[2], "7 | p p p p p p p p |");
        assert_eq!(lines[4], "5 | . . . . . . . . |");
        assert_eq!(lines[8], "1 | R N B Q K B N R |");
        assert_eq!(lines[10], "    A B C D E F G H");
        assert_eq!(lines[11], "White to move, 50 rounds left");
    }
}
