use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    num::NonZero,
};

use crate::{color::Color, error::InvalidByte};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    // other types relies on `PieceKind` being non-zero
    Pawn = 1,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
    pub fn lowercase(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
    pub fn from_fen(c: char) -> Result<Self, InvalidFenPiece> {
        let piece = match c {
            'p' | 'P' => PieceKind::Pawn,
            'n' | 'N' => PieceKind::Knight,
            'b' | 'B' => PieceKind::Bishop,
            'r' | 'R' => PieceKind::Rook,
            'q' | 'Q' => PieceKind::Queen,
            'k' | 'K' => PieceKind::King,
            c => return Err(InvalidFenPiece(c)),
        };
        Ok(piece)
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
impl TryFrom<u8> for PieceKind {
    type Error = InvalidByte;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let piece = match value {
            0 | 7.. => return Err(InvalidByte),
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
        };
        Ok(piece)
    }
}
impl From<PieceKind> for u8 {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }
}

// Bit structure: 000MCPPP
// M - Moved flag
// C - Color
// P - Piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(NonZero<u8>);
impl Piece {
    const MOVED_BIT: u8 = 0b1_0000;

    pub fn new(color: Color, kind: PieceKind) -> Self {
        let color: u8 = color.into();
        let kind: u8 = kind.into();
        let data = (color << 3) | kind;
        Piece(NonZero::new(data).unwrap())
    }
    pub fn color(self) -> Color {
        ((self.0.get() >> 3) & 0b_1).try_into().unwrap()
    }
    pub fn kind(self) -> PieceKind {
        (self.0.get() & 0b_111).try_into().unwrap()
    }
    pub fn has_moved(self) -> bool {
        self.0.get() & Piece::MOVED_BIT != 0
    }
    /// The same piece with its one-shot flag spent; only the instigator of a
    /// move ever receives this.
    pub fn as_moved(self) -> Self {
        Piece(NonZero::new(self.0.get() | Piece::MOVED_BIT).unwrap())
    }
    pub fn fen(self) -> char {
        match self.color() {
            Color::White => self.kind().uppercase(),
            Color::Black => self.kind().lowercase(),
        }
    }
    pub fn from_fen(c: char) -> Result<Self, InvalidFenPiece> {
        let kind = PieceKind::from_fen(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(color, kind))
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color(), self.kind())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidFenPiece(pub char);
impl Display for InvalidFenPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found `{}`, expected one of `p`, `n`, `b`, `r`, `k`, `q`, or uppercase forms of these letters",
            self.0
        )?;
        Ok(())
    }
}
impl Error for InvalidFenPiece {}

#[cfg(test)]
mod test {
    use crate::{
        color::Color,
        piece::{Piece, PieceKind},
    };

    #[test]
    fn packing_preserves_color_and_kind() {
        for color in [Color::White, Color::Black] {
            for kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ] {
                let piece = Piece::new(color, kind);
                assert_eq!(piece.color(), color);
                assert_eq!(piece.kind(), kind);
                assert!(!piece.has_moved());

                let moved = piece.as_moved();
                assert_eq!(moved.color(), color);
                assert_eq!(moved.kind(), kind);
                assert!(moved.has_moved());
            }
        }
    }
    #[test]
    fn fen_letters_round_trip() {
        for c in ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'] {
            assert_eq!(Piece::from_fen(c).unwrap().fen(), c);
        }
        assert!(Piece::from_fen('x').is_err());
    }
    #[test]
    fn moved_flag_does_not_leak_into_fen() {
        let piece = Piece::new(Color::White, PieceKind::Queen);
        assert_eq!(piece.as_moved().fen(), piece.fen());
    }
}
