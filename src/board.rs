use std::ops::Index;

use crate::{
    color::Color,
    coord::{Coord, Vector},
    error::MoveError,
    piece::{Piece, PieceKind},
};

/// An 8x8 grid of squares, row 0 being rank 8. `Board` is a plain value:
/// resolving a move builds a fresh board and leaves the receiver as it was,
/// so any number of callers may keep reading a board that others have
/// already moved on from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    pub fn new(squares: [[Option<Piece>; 8]; 8]) -> Self {
        Board(squares)
    }
    pub fn empty() -> Self {
        Board([[None; 8]; 8])
    }
    /// Every square in row-major order: rank 8 through rank 1, the a-file
    /// through the h-file within each rank.
    pub fn positions() -> impl Iterator<Item = Coord> {
        (0..8).flat_map(|y| (0..8).map(move |x| Coord::new(x, y)))
    }
    pub fn rows(&self) -> impl Iterator<Item = [Option<Piece>; 8]> {
        self.0.into_iter()
    }
    /// Whether a piece of the given kind may travel from `origin` to
    /// `destination`. Occupancy of the destination is irrelevant here; a
    /// slider only needs the squares strictly between the two to be empty.
    pub fn is_legal(
        &self,
        origin: Coord,
        destination: Coord,
        kind: PieceKind,
    ) -> Result<bool, MoveError> {
        let movement = destination - origin;
        let legal = match kind {
            PieceKind::Pawn => return Err(MoveError::Unimplemented(PieceKind::Pawn)),
            PieceKind::Knight => movement.is_knight_move(),
            PieceKind::King => movement.is_king_move(),
            PieceKind::Bishop => self.is_legal_slide(origin, destination, Vector::is_diagonal),
            PieceKind::Rook => self.is_legal_slide(origin, destination, Vector::is_straight),
            PieceKind::Queen => {
                self.is_legal_slide(origin, destination, Vector::is_diagonal)
                    || self.is_legal_slide(origin, destination, Vector::is_straight)
            }
        };
        Ok(legal)
    }
    fn is_legal_slide(
        &self,
        origin: Coord,
        destination: Coord,
        pattern: fn(Vector) -> bool,
    ) -> bool {
        let movement = destination - origin;
        movement != Vector::ZERO
            && pattern(movement)
            && origin
                .between(destination)
                .all(|position| self[position].is_none())
    }
    /// Resolves a move named by two algebraic squares into a new board.
    ///
    /// Knights trade places with whatever occupies their destination. Every
    /// other piece shoves: an occupied destination displaces its occupant
    /// one further square along the move's direction, recursively, and the
    /// whole move fails if the chain would step off the board. Only the
    /// piece this call names ends up marked as having moved; pieces that
    /// were merely displaced keep their flag.
    pub fn apply_move(&self, origin: &str, destination: &str) -> Result<Self, MoveError> {
        let origin: Coord = origin.parse()?;
        let destination: Coord = destination.parse()?;
        let piece = self[origin].ok_or(MoveError::NoPieceAtSource(origin))?;
        if !self.is_legal(origin, destination, piece.kind())? {
            return Err(MoveError::IllegalMove);
        }
        if piece.kind() == PieceKind::Knight {
            Ok(self.swap(origin, destination, true))
        } else {
            self.push(origin, destination, true)
        }
    }
    fn swap(&self, origin: Coord, destination: Coord, is_instigator: bool) -> Self {
        let landing = self[origin].map(|piece| {
            if is_instigator {
                piece.as_moved()
            } else {
                piece
            }
        });
        let mut squares = self.0;
        squares[usize::from(origin.y())][usize::from(origin.x())] = self[destination];
        squares[usize::from(destination.y())][usize::from(destination.x())] = landing;
        Board(squares)
    }
    fn push(&self, origin: Coord, destination: Coord, is_instigator: bool) -> Result<Self, MoveError> {
        if self[destination].is_none() {
            Ok(self.swap(origin, destination, is_instigator))
        } else {
            let direction = (destination - origin).as_unit();
            // the occupant must have somewhere to go; otherwise the whole
            // chain fails and no intermediate board escapes
            let next = destination.move_by(direction).ok_or(MoveError::IllegalMove)?;
            Ok(self
                .push(destination, next, false)?
                .swap(origin, destination, is_instigator))
        }
    }
    /// White pieces that may still instigate a move, in row-major order.
    pub fn moveable_pieces(self) -> impl Iterator<Item = Coord> {
        Board::positions().filter(move |position| {
            self[*position].is_some_and(|piece| piece.color() == Color::White && !piece.has_moved())
        })
    }
    /// Squares of Black pieces whose own movement rules reach the White
    /// king, obstruction included. A board without a White king has no
    /// square in check, so the list is empty.
    pub fn checkers(&self) -> Result<Vec<Coord>, MoveError> {
        let king = Board::positions().find(|position| {
            self[*position]
                .is_some_and(|piece| piece.color() == Color::White && piece.kind() == PieceKind::King)
        });
        let Some(king) = king else {
            return Ok(Vec::new());
        };
        let mut checkers = Vec::new();
        for position in Board::positions() {
            if let Some(piece) = self[position] {
                if piece.color() == Color::Black && self.is_legal(position, king, piece.kind())? {
                    checkers.push(position);
                }
            }
        }
        Ok(checkers)
    }
}
impl Index<Coord> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.0[usize::from(index.y())][usize::from(index.x())]
    }
}
