use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The number of distinct pieces, one per combination of attribute values.
pub const NUM_PIECES: usize = 16;

/// A game piece with four independent two-valued attributes.
///
/// Pieces are plain values: two pieces with the same attributes are the same
/// piece, and [`Piece::id()`] is derived from the attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub shape: Shape,
    pub height: Height,
    pub cavity: Cavity,
}

/// The color of a [piece](Piece).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Dark,
    Light,
}

/// The shape of a [piece](Piece).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    Round,
}

/// The height of a [piece](Piece).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Height {
    Short,
    Tall,
}

/// Whether a [piece](Piece) has a hole in its top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cavity {
    Solid,
    Hollow,
}

/// Names one of the four attributes of a piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Color,
    Shape,
    Height,
    Cavity,
}

impl Attribute {
    /// All attributes, in the order in which lines are checked for a match.
    pub const ALL: [Attribute; 4] = [
        Attribute::Color,
        Attribute::Shape,
        Attribute::Height,
        Attribute::Cavity,
    ];

    /// The human-readable name of a value of this attribute, e.g. `"round"`.
    pub fn value_name(self, value: AttributeValue) -> &'static str {
        match (self, value) {
            (Attribute::Color, AttributeValue::A) => "dark",
            (Attribute::Color, AttributeValue::B) => "light",
            (Attribute::Shape, AttributeValue::A) => "square",
            (Attribute::Shape, AttributeValue::B) => "round",
            (Attribute::Height, AttributeValue::A) => "short",
            (Attribute::Height, AttributeValue::B) => "tall",
            (Attribute::Cavity, AttributeValue::A) => "solid",
            (Attribute::Cavity, AttributeValue::B) => "hollow",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Attribute::Color => "color",
            Attribute::Shape => "shape",
            Attribute::Height => "height",
            Attribute::Cavity => "cavity",
        };
        write!(f, "{}", name)
    }
}

/// An attribute value with the attribute's name erased.
///
/// `A` is the first variant of each attribute enum (e.g. [`Color::Dark`]),
/// `B` the second.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    A,
    B,
}

/// Identifies one of the [`NUM_PIECES`] pieces for the lifetime of a game.
///
/// The id is the attribute bit pattern: bit 0 is the color, bit 1 the shape,
/// bit 2 the height and bit 3 the cavity, with a set bit meaning value `B`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PieceId(u8);

impl PieceId {
    /// Returns `None` for values outside of `0..16`.
    pub fn new(id: u8) -> Option<Self> {
        ((id as usize) < NUM_PIECES).then_some(Self(id))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// The error type for the [`TryFrom<u8>`] instance of [`PieceId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceIdOutOfRange(pub u8);

impl std::error::Error for PieceIdOutOfRange {}

impl std::fmt::Display for PieceIdOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Piece id {} is out of range, ids go from 0 to {}",
            self.0,
            NUM_PIECES - 1
        )
    }
}

impl TryFrom<u8> for PieceId {
    type Error = PieceIdOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PieceId::new(value).ok_or(PieceIdOutOfRange(value))
    }
}

impl From<PieceId> for u8 {
    fn from(id: PieceId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Forward to u8 so that width and alignment flags work
        std::fmt::Display::fmt(&self.0, f)
    }
}

fn value_from_bit(bits: u8, bit: u8) -> AttributeValue {
    if bits & (1 << bit) == 0 {
        AttributeValue::A
    } else {
        AttributeValue::B
    }
}

impl Piece {
    pub fn from_id(id: PieceId) -> Self {
        let bits = id.0;
        Piece {
            color: match value_from_bit(bits, 0) {
                AttributeValue::A => Color::Dark,
                AttributeValue::B => Color::Light,
            },
            shape: match value_from_bit(bits, 1) {
                AttributeValue::A => Shape::Square,
                AttributeValue::B => Shape::Round,
            },
            height: match value_from_bit(bits, 2) {
                AttributeValue::A => Height::Short,
                AttributeValue::B => Height::Tall,
            },
            cavity: match value_from_bit(bits, 3) {
                AttributeValue::A => Cavity::Solid,
                AttributeValue::B => Cavity::Hollow,
            },
        }
    }

    pub fn id(self) -> PieceId {
        let mut bits = 0;
        for (bit, attribute) in Attribute::ALL.into_iter().enumerate() {
            if self.value_of(attribute) == AttributeValue::B {
                bits |= 1 << bit;
            }
        }
        PieceId(bits)
    }

    pub fn value_of(self, attribute: Attribute) -> AttributeValue {
        let is_b = match attribute {
            Attribute::Color => self.color == Color::Light,
            Attribute::Shape => self.shape == Shape::Round,
            Attribute::Height => self.height == Height::Tall,
            Attribute::Cavity => self.cavity == Cavity::Hollow,
        };
        if is_b {
            AttributeValue::B
        } else {
            AttributeValue::A
        }
    }

    /// The four-character code of this piece, see the [`FromStr`] instance.
    pub fn code(self) -> String {
        let color = match self.color {
            Color::Dark => 'd',
            Color::Light => 'l',
        };
        let shape = match self.shape {
            Shape::Square => 's',
            Shape::Round => 'r',
        };
        let height = match self.height {
            Height::Short => 's',
            Height::Tall => 't',
        };
        let cavity = match self.cavity {
            Cavity::Solid => 'n',
            Cavity::Hollow => 'h',
        };
        String::from_iter([color, shape, height, cavity])
    }
}

/// Iterates over all pieces, ordered by id.
pub fn all_pieces() -> impl Iterator<Item = Piece> {
    (0..NUM_PIECES as u8).map(|id| Piece::from_id(PieceId(id)))
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The error type for the [`FromStr`] instance of [`Piece`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceFromStrErr {
    WrongLength,
    InvalidColor,
    InvalidShape,
    InvalidHeight,
    InvalidCavity,
}

impl std::error::Error for PieceFromStrErr {}

impl std::fmt::Display for PieceFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceFromStrErr::WrongLength => write!(f, "A piece code has exactly four characters"),
            PieceFromStrErr::InvalidColor => write!(f, "The color must be 'd' (dark) or 'l' (light)"),
            PieceFromStrErr::InvalidShape => write!(f, "The shape must be 's' (square) or 'r' (round)"),
            PieceFromStrErr::InvalidHeight => write!(f, "The height must be 's' (short) or 't' (tall)"),
            PieceFromStrErr::InvalidCavity => write!(f, "The cavity must be 'n' (solid) or 'h' (hollow)"),
        }
    }
}

/// Parses codes like `dsth`: color, shape, height and cavity, one character
/// each, case-insensitive.
impl FromStr for Piece {
    type Err = PieceFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().map(|c| c.to_ascii_lowercase()).collect();
        let &[color_char, shape_char, height_char, cavity_char] = chars.as_slice() else {
            return Err(PieceFromStrErr::WrongLength);
        };
        let color = match color_char {
            'd' => Color::Dark,
            'l' => Color::Light,
            _ => return Err(PieceFromStrErr::InvalidColor),
        };
        let shape = match shape_char {
            's' => Shape::Square,
            'r' => Shape::Round,
            _ => return Err(PieceFromStrErr::InvalidShape),
        };
        let height = match height_char {
            's' => Height::Short,
            't' => Height::Tall,
            _ => return Err(PieceFromStrErr::InvalidHeight),
        };
        let cavity = match cavity_char {
            'n' => Cavity::Solid,
            'h' => Cavity::Hollow,
            _ => return Err(PieceFromStrErr::InvalidCavity),
        };
        Ok(Piece {
            color,
            shape,
            height,
            cavity,
        })
    }
}

/// Shorthand for creating pieces from a four-character code.
///
/// This macro is just calling the [`FromStr`] instance of [`Piece`].
/// ```
/// # use quarto::{piece, Cavity, Color, Height, Piece, Shape};
/// assert_eq!(
///     piece!("lrth"),
///     Piece { color: Color::Light, shape: Shape::Round, height: Height::Tall, cavity: Cavity::Hollow }
/// );
/// ```
#[macro_export]
macro_rules! piece {
    ($code:literal) => {
        <$crate::Piece as std::str::FromStr>::from_str($code)
            .expect("Invalid piece code given to piece! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use piece;
