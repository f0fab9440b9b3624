//! Sticker colors and the opposite-color relation.
//!
//! Colors are numbered by their home face in U, R, F, D, L, B order, so the
//! opposite of color `i` is always color `(i + 3) % 6`. Each color has two
//! single-character spellings:
//! - a color letter (`w r g y o b`), used by state strings;
//! - a facelet letter (`U R F D L B`), the alphabet two-phase solvers read.
//!
//! The two alphabets never disagree on a character (`R` is red and `B` is
//! blue in both), so parsing accepts either one.

use std::fmt;

use crate::face::FaceLabel;

/// Number of distinct sticker colors.
pub const NUM_COLORS: usize = 6;

/// One of the six sticker colors of a standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Orange = 4,
    Blue = 5,
}

impl Color {
    /// All colors in home-face order (U, R, F, D, L, B).
    pub const ALL: [Color; NUM_COLORS] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// Returns the color with the given index, or `None` outside `0..6`.
    pub const fn from_index(index: usize) -> Option<Color> {
        if index < NUM_COLORS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Index of this color, equal to the index of its home face.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color on the opposite side of a solved cube.
    #[inline(always)]
    pub const fn opposite(self) -> Color {
        Self::ALL[(self.index() + NUM_COLORS / 2) % NUM_COLORS]
    }

    /// The face whose center carries this color.
    pub const fn home_face(self) -> FaceLabel {
        FaceLabel::ALL[self.index()]
    }

    /// Lowercase color letter used in state strings.
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Blue => 'b',
        }
    }

    /// Uppercase facelet letter naming the home face of this color.
    pub const fn facelet_letter(self) -> char {
        self.home_face().letter()
    }

    /// Parses a color letter or a facelet letter, ignoring case.
    pub fn from_char(ch: char) -> Option<Color> {
        match ch.to_ascii_lowercase() {
            'w' | 'u' => Some(Color::White),
            'r' => Some(Color::Red),
            'g' | 'f' => Some(Color::Green),
            'y' | 'd' => Some(Color::Yellow),
            'o' | 'l' => Some(Color::Orange),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An unordered set of colors, stored as a 6-bit mask.
///
/// Bit `i` is set when `Color::ALL[i]` is in the set. A piece's identity is
/// the color set of its stickers, independent of how it is twisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a slice of colors. Repeated colors collapse.
    pub const fn from_colors(colors: &[Color]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < colors.len() {
            set = set.with(colors[i]);
            i += 1;
        }
        set
    }

    /// Returns a copy of this set with `color` added.
    #[inline(always)]
    pub const fn with(self, color: Color) -> Self {
        Self(self.0 | (1 << color.index()))
    }

    #[inline(always)]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    /// Number of colors in the set.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw mask, always below 64.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Rebuilds a set from a raw mask, dropping bits above the sixth.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & ((1 << NUM_COLORS) - 1))
    }

    /// True if the set holds some color together with its opposite.
    pub const fn has_opposite_pair(self) -> bool {
        let mut i = 0;
        while i < NUM_COLORS / 2 {
            let color = Color::ALL[i];
            if self.contains(color) && self.contains(color.opposite()) {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Iterates the colors of the set in index order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&color| self.contains(color))
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.iter() {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}
