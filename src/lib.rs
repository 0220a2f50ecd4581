//! Rules engine for Push Chess, a chess variant where pieces never capture:
//! moving onto an occupied square shoves the occupant one square further
//! along the move's line, chaining until an empty square or the board edge,
//! and a knight simply trades places with its destination. Each piece may
//! instigate at most one move for its side.
//!
//! The engine is a pure library: [`Fen`] converts boards to and from text,
//! [`Board::apply_move`] resolves a move into a new board, and
//! [`Board::moveable_pieces`] and [`Board::checkers`] answer the queries a
//! user interface needs. Boards are plain values, so nothing here blocks,
//! shares state, or mutates in place.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod color;
pub mod coord;
pub mod error;
pub mod fen;
pub mod piece;

pub use crate::{
    board::Board,
    color::Color,
    coord::{Coord, ParseCoordError, Vector},
    error::{InvalidByte, MoveError},
    fen::{Fen, ParseFenError},
    piece::{InvalidFenPiece, Piece, PieceKind},
};
