use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{
    coord::{Coord, ParseCoordError},
    piece::PieceKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidByte;

impl Display for InvalidByte {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid byte")?;
        Ok(())
    }
}
impl Error for InvalidByte {}

/// Reasons a move request or check query is rejected. Rejection is total:
/// no board is produced and the board the request ran against is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// The origin or destination text does not name a square on the board.
    /// With squares spelled `a1` through `h8`, this is exactly the
    /// out-of-board case.
    OutOfBounds(ParseCoordError),
    NoPieceAtSource(Coord),
    /// The displacement does not match the mover's pattern, is obstructed,
    /// is a zero-distance move, or the push chain would run off the board.
    IllegalMove,
    /// The piece has no movement rules; kept distinct from
    /// [`MoveError::IllegalMove`] so callers can tell "not allowed" from
    /// "not supported".
    Unimplemented(PieceKind),
}
impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(err) => write!(f, "square is not on the board: {err}")?,
            MoveError::NoPieceAtSource(position) => write!(f, "no piece on {position}")?,
            MoveError::IllegalMove => write!(f, "illegal move")?,
            MoveError::Unimplemented(kind) => write!(f, "{kind} moves are not implemented")?,
        }
        Ok(())
    }
}
impl Error for MoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoveError::OutOfBounds(err) => Some(err),
            _ => None,
        }
    }
}
impl From<ParseCoordError> for MoveError {
    fn from(value: ParseCoordError) -> Self {
        MoveError::OutOfBounds(value)
    }
}
