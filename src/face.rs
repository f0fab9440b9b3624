//! Face labels and single-face readings.
//!
//! A face holds nine stickers in row-major order as seen from outside the
//! cube:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Position 4 is the center and never moves when the face is rotated.

use std::fmt;

use crate::color::Color;
use crate::error::InputError;
use crate::geometry::TURN_TABLE;

/// Number of faces on a cube.
pub const NUM_FACES: usize = 6;

/// Number of stickers on one face.
pub const FACE_STICKERS: usize = 9;

/// Position of the center sticker within a face.
pub const CENTER: usize = 4;

/// Canonical face labels, in the U, R, F, D, L, B order used by state strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FaceLabel {
    Up = 0,
    Right = 1,
    Front = 2,
    Down = 3,
    Left = 4,
    Back = 5,
}

impl FaceLabel {
    pub const ALL: [FaceLabel; NUM_FACES] = [
        FaceLabel::Up,
        FaceLabel::Right,
        FaceLabel::Front,
        FaceLabel::Down,
        FaceLabel::Left,
        FaceLabel::Back,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter name (`U R F D L B`).
    pub const fn letter(self) -> char {
        match self {
            FaceLabel::Up => 'U',
            FaceLabel::Right => 'R',
            FaceLabel::Front => 'F',
            FaceLabel::Down => 'D',
            FaceLabel::Left => 'L',
            FaceLabel::Back => 'B',
        }
    }

    /// Parses a face letter, ignoring case.
    pub fn from_char(ch: char) -> Option<FaceLabel> {
        match ch.to_ascii_uppercase() {
            'U' => Some(FaceLabel::Up),
            'R' => Some(FaceLabel::Right),
            'F' => Some(FaceLabel::Front),
            'D' => Some(FaceLabel::Down),
            'L' => Some(FaceLabel::Left),
            'B' => Some(FaceLabel::Back),
            _ => None,
        }
    }

    /// The color every correctly oriented reading has at this face's center.
    pub const fn center_color(self) -> Color {
        Color::ALL[self.index()]
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Nine sticker colors of one face.
///
/// Faces are small `Copy` values; rotating one returns a new face and leaves
/// the original untouched, so search candidates never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    stickers: [Color; FACE_STICKERS],
}

impl Face {
    pub const fn new(stickers: [Color; FACE_STICKERS]) -> Self {
        Self { stickers }
    }

    /// A face with every sticker the same color.
    pub const fn solid(color: Color) -> Self {
        Self {
            stickers: [color; FACE_STICKERS],
        }
    }

    /// Parses nine color characters read for the face in slot `label`.
    pub fn parse(label: FaceLabel, text: &str) -> Result<Self, InputError> {
        let len = text.chars().count();
        if len != FACE_STICKERS {
            return Err(InputError::WrongLength { face: label, len });
        }

        let mut stickers = [Color::White; FACE_STICKERS];
        for (position, ch) in text.chars().enumerate() {
            stickers[position] = Color::from_char(ch).ok_or(InputError::UnknownColor {
                face: label,
                position,
                found: ch,
            })?;
        }
        Ok(Self { stickers })
    }

    #[inline(always)]
    pub fn stickers(&self) -> &[Color; FACE_STICKERS] {
        &self.stickers
    }

    #[inline(always)]
    pub fn sticker(&self, position: usize) -> Color {
        self.stickers[position]
    }

    #[inline(always)]
    pub fn center(&self) -> Color {
        self.stickers[CENTER]
    }

    /// Returns this face turned clockwise by `quarter_turns` (taken mod 4).
    #[inline]
    pub fn rotated(&self, quarter_turns: u8) -> Face {
        rotate_face(*self, quarter_turns)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.stickers {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

/// Turns a face clockwise by `quarter_turns` quarter turns, modulo 4.
///
/// Zero turns (or any multiple of four) returns the face unchanged.
#[inline]
pub fn rotate_face(face: Face, quarter_turns: u8) -> Face {
    let mapping = &TURN_TABLE[(quarter_turns % 4) as usize];
    Face {
        stickers: std::array::from_fn(|position| face.stickers[mapping[position]]),
    }
}
