use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    num::NonZero,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    InvalidX(char),
    InvalidY(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::InvalidX(x) => write!(
                f,
                "found `{x}`, characters from `a` to `h` were expected instead"
            )?,
            ParseCoordError::InvalidY(y) => write!(
                f,
                "found `{y}`, characters from `1` to `8` were expected instead"
            )?,
            ParseCoordError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParseCoordError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseCoordError {}

// Bit structure: 10XXXYYY
// first two bits is always `10` for `NonZero` size optimizations
//
// `x` is the file index with 0 being the a-file; `y` is the row index with
// 0 being rank 8. Out-of-board coordinates are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(NonZero<u8>);

impl Coord {
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < 8);
        debug_assert!(y < 8);
        let byte = 0b1000_0000 | (x << 3) | y;
        Coord(NonZero::new(byte).unwrap())
    }
    pub fn new_checked(x: u8, y: u8) -> Option<Self> {
        if x >= 8 || y >= 8 {
            None
        } else {
            Some(Self::new(x, y))
        }
    }
    pub fn from_chars(x: char, y: char) -> Result<Self, ParseCoordError> {
        let x = match x {
            'a'..='h' => x as u8 - b'a',
            _ => return Err(ParseCoordError::InvalidX(x)),
        };
        let y = match y {
            '1'..='8' => 7 - (y as u8 - b'1'),
            _ => return Err(ParseCoordError::InvalidY(y)),
        };
        Ok(Coord::new(x, y))
    }
    pub fn x(self) -> u8 {
        (self.0.get() >> 3) & 0b_111
    }
    pub fn y(self) -> u8 {
        self.0.get() & 0b_111
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new_checked(
            self.x().checked_add_signed(movement.x)?,
            self.y().checked_add_signed(movement.y)?,
        )
    }
    pub fn line(self, direction: Vector, start: i8) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        debug_assert_eq!(direction, direction.as_unit());
        (start..).map_while(move |difference| self.move_by(direction * difference))
    }
    /// Squares strictly between `self` and `end` along the line connecting
    /// them. Both endpoints must share a rank, file, or diagonal.
    pub fn between(self, end: Self) -> impl Iterator<Item = Self> {
        let direction = (end - self).as_unit();
        self.line(direction, 1)
            .take_while(move |position| *position != end)
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = (self.x() + b'a') as char;
        let y = 8 - self.y();
        write!(f, "{x}{y}")?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(x) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(0));
        };
        let Some(y) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        Coord::from_chars(x, y)
    }
}
impl Sub<Self> for Coord {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            x: <i8>::try_from(self.x()).unwrap() - <i8>::try_from(rhs.x()).unwrap(),
            y: <i8>::try_from(self.y()).unwrap() - <i8>::try_from(rhs.y()).unwrap(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { x: 0, y: 0 };

    pub fn is_king_move(self) -> bool {
        (-1..=1).contains(&self.x) && (-1..=1).contains(&self.y) && !(self.x == 0 && self.y == 0)
    }
    pub fn is_knight_move(self) -> bool {
        let x = self.x.unsigned_abs();
        let y = self.y.unsigned_abs();
        (x == 1 && y == 2) || (x == 2 && y == 1)
    }
    pub fn is_diagonal(self) -> bool {
        self.x.unsigned_abs() == self.y.unsigned_abs()
    }
    pub fn is_straight(self) -> bool {
        self.x == 0 || self.y == 0
    }
    pub fn as_unit(self) -> Self {
        Vector {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }
}
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Add<Self> for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Vector {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::coord::{Coord, Vector};

    #[test]
    fn parses_and_prints_squares() {
        let coord: Coord = "a8".parse().unwrap();
        assert_eq!((coord.x(), coord.y()), (0, 0));
        let coord: Coord = "h1".parse().unwrap();
        assert_eq!((coord.x(), coord.y()), (7, 7));
        for name in ["a8", "e4", "h1", "c7"] {
            let coord: Coord = name.parse().unwrap();
            assert_eq!(coord.to_string(), name);
        }
    }
    #[test]
    fn rejects_names_off_the_board() {
        assert!("a9".parse::<Coord>().is_err());
        assert!("a0".parse::<Coord>().is_err());
        assert!("i5".parse::<Coord>().is_err());
        assert!("e".parse::<Coord>().is_err());
        assert!("e44".parse::<Coord>().is_err());
        assert!("".parse::<Coord>().is_err());
    }
    #[test]
    fn adjacent_squares_have_nothing_between() {
        let from: Coord = "e4".parse().unwrap();
        let to: Coord = "e5".parse().unwrap();
        assert_eq!(from.between(to).next(), None);
    }
    #[test]
    fn between_walks_the_inner_diagonal() {
        let from: Coord = "a8".parse().unwrap();
        let to: Coord = "d5".parse().unwrap();
        let inner: Vec<String> = from.between(to).map(|coord| coord.to_string()).collect();
        assert_eq!(inner, ["b7", "c6"]);
    }
    #[test]
    fn move_patterns() {
        assert!(Vector { x: 1, y: 2 }.is_knight_move());
        assert!(Vector { x: -2, y: 1 }.is_knight_move());
        assert!(!Vector { x: 2, y: 2 }.is_knight_move());
        assert!(Vector { x: -1, y: 1 }.is_king_move());
        assert!(!Vector { x: 0, y: 0 }.is_king_move());
        assert!(!Vector { x: 0, y: 2 }.is_king_move());
        assert!(Vector { x: -3, y: 3 }.is_diagonal());
        assert!(!Vector { x: -3, y: 2 }.is_diagonal());
        assert!(Vector { x: 0, y: 5 }.is_straight());
        assert!(!Vector { x: 1, y: 5 }.is_straight());
    }
}
