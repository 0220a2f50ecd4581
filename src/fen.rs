use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    iter::{once, repeat},
    str::FromStr,
};

use crate::{
    board::Board,
    piece::{InvalidFenPiece, Piece},
};

/// Textual form of a [`Board`]. Only the piece placement field carries
/// meaning; the remaining FEN fields are emitted as fixed placeholders and
/// ignored on parse, since the engine tracks no turn or castling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fen(pub Board);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseFenError {
    NotEnoughSquaresOnRow,
    ExceedingSquaresOnRow,
    UnexpectedChar(char),
    UnexpectedEol,
}
impl Display for ParseFenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseFenError::NotEnoughSquaresOnRow => {
                write!(f, "row describes fewer than 8 squares")?;
            }
            ParseFenError::ExceedingSquaresOnRow => {
                write!(f, "row describes more than 8 squares")?;
            }
            ParseFenError::UnexpectedChar(c) => write!(f, "unexpected `{c}`")?,
            ParseFenError::UnexpectedEol => write!(f, "unexpected end of input")?,
        }
        Ok(())
    }
}
impl Error for ParseFenError {}
impl From<InvalidFenPiece> for ParseFenError {
    fn from(value: InvalidFenPiece) -> Self {
        ParseFenError::UnexpectedChar(value.0)
    }
}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placement = s.split(' ').next().unwrap_or_default();
        let mut characters = placement.chars();
        let mut squares = [[None; 8]; 8];

        let mut x: u8 = 0;
        let mut y: u8 = 0;
        while x < 8 || y < 7 {
            let Some(c) = characters.next() else {
                return Err(ParseFenError::UnexpectedEol);
            };
            if c == '/' {
                if x == 8 {
                    x = 0;
                    y += 1;
                } else {
                    return Err(ParseFenError::NotEnoughSquaresOnRow);
                }
            } else if matches!(c, '1'..='8') {
                x += c as u8 - b'0';
                if x > 8 {
                    return Err(ParseFenError::ExceedingSquaresOnRow);
                }
            } else {
                if x >= 8 {
                    return Err(ParseFenError::ExceedingSquaresOnRow);
                }
                squares[y as usize][x as usize] = Some(Piece::from_fen(c)?);
                x += 1;
            }
        }
        if let Some(c) = characters.next() {
            return Err(ParseFenError::UnexpectedChar(c));
        }
        Ok(Fen(Board::new(squares)))
    }
}
impl Display for Fen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, first) in self.0.rows().zip(once(true).chain(repeat(false))) {
            if !first {
                write!(f, "/")?;
            }
            let mut pieces = row.into_iter().peekable();
            while let Some(piece) = pieces.next() {
                if let Some(piece) = piece {
                    write!(f, "{}", piece.fen())?;
                } else {
                    let mut count = 1;
                    while pieces.peek().is_some_and(Option::is_none) {
                        pieces.next();
                        count += 1;
                    }
                    write!(f, "{count}")?;
                }
            }
        }
        // placeholder fields; the engine does not track turn order,
        // castling, en passant, or move clocks
        write!(f, " w HAha - 0 1")?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use crate::{
        board::Board,
        color::Color,
        coord::Coord,
        fen::{Fen, ParseFenError},
        piece::{Piece, PieceKind},
    };

    #[test]
    fn loads_an_empty_board() {
        let board: Fen = "8/8/8/8/8/8/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(board.to_string(), "8/8/8/8/8/8/8/8 w HAha - 0 1");
    }
    #[test]
    fn loads_every_piece_letter() {
        for letter in ['P', 'B', 'N', 'R', 'Q', 'K', 'p', 'b', 'n', 'r', 'q', 'k'] {
            let fen = format!("{letter}7/8/8/8/8/8/8/8 w - - 0 1");
            let board: Fen = fen.parse().unwrap();
            assert_eq!(
                board.to_string(),
                format!("{letter}7/8/8/8/8/8/8/8 w HAha - 0 1")
            );
        }
    }
    #[test]
    fn parsed_pieces_are_unmoved() {
        let board: Fen = "K6k/8/8/8/8/8/8/8 w - - 0 1".parse().unwrap();
        let king = board.0["a8".parse::<Coord>().unwrap()].unwrap();
        assert!(!king.has_moved());
        assert_eq!(king.color(), Color::White);
        assert_eq!(king.kind(), PieceKind::King);
    }
    #[test]
    fn ignores_everything_after_the_placement() {
        let board: Fen = "K7/8/8/8/8/8/8/8 b KQkq e3 42 7".parse().unwrap();
        assert_eq!(board.to_string(), "K7/8/8/8/8/8/8/8 w HAha - 0 1");
        let bare: Fen = "K7/8/8/8/8/8/8/8".parse().unwrap();
        assert_eq!(bare.0, board.0);
    }
    #[test]
    fn rejects_malformed_placements() {
        assert_eq!(
            "8/8/8".parse::<Fen>(),
            Err(ParseFenError::UnexpectedEol),
            "too few rows"
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8/8 w - - 0 1".parse::<Fen>(),
            Err(ParseFenError::UnexpectedChar('/')),
            "too many rows"
        );
        assert_eq!(
            "K6/8/8/8/8/8/8/8 w - - 0 1".parse::<Fen>(),
            Err(ParseFenError::NotEnoughSquaresOnRow),
            "short row"
        );
        assert_eq!(
            "K8/8/8/8/8/8/8/8 w - - 0 1".parse::<Fen>(),
            Err(ParseFenError::ExceedingSquaresOnRow),
            "long row"
        );
        assert_eq!(
            "9/8/8/8/8/8/8/8 w - - 0 1".parse::<Fen>(),
            Err(ParseFenError::UnexpectedChar('9')),
            "overlong blank run"
        );
        assert_eq!(
            "x7/8/8/8/8/8/8/8 w - - 0 1".parse::<Fen>(),
            Err(ParseFenError::UnexpectedChar('x')),
            "unknown letter"
        );
        assert_eq!("".parse::<Fen>(), Err(ParseFenError::UnexpectedEol));
    }
    #[test]
    fn round_trips_random_boards() {
        let mut rng = SmallRng::seed_from_u64(4096);
        for _ in 0..200 {
            let mut squares = [[None; 8]; 8];
            for row in &mut squares {
                for cell in row {
                    if rng.random_ratio(1, 3) {
                        let kind = PieceKind::try_from(rng.random_range(1..=6)).unwrap();
                        let color = Color::try_from(rng.random_range(0..=1)).unwrap();
                        *cell = Some(Piece::new(color, kind));
                    }
                }
            }
            let board = Board::new(squares);
            let fen = Fen(board).to_string();
            let reparsed: Fen = fen.parse().unwrap();
            assert_eq!(reparsed.0, board);
            assert_eq!(reparsed.to_string(), fen);
        }
    }
}
