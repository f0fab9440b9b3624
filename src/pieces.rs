//! The piece inventory of a 3x3x3 cube.
//!
//! Every real cube carries exactly eight corner pieces and twelve edge
//! pieces, each exactly once. A corner takes one color from each of the three
//! opposite-color axes; an edge takes one color from each of two different
//! axes. Both inventories are built at compile time and checked by `const`
//! assertions, so no other inventory can exist at run time.

use std::fmt;

use crate::color::{Color, ColorSet, NUM_COLORS};

/// Maximum number of stickers on one piece.
pub const MAX_STICKERS: usize = 3;

/// Number of corner pieces on a cube.
pub const NUM_CORNERS: usize = 8;

/// Number of edge pieces on a cube.
pub const NUM_EDGES: usize = 12;

/// The three opposite-color axes.
const AXES: [(Color, Color); 3] = [
    (Color::White, Color::Yellow),
    (Color::Red, Color::Orange),
    (Color::Green, Color::Blue),
];

/// Stickers read from one corner or edge location.
///
/// Uses a fixed-size array so extracting pieces never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub stickers: [Color; MAX_STICKERS],
    pub sticker_count: u8,
}

impl Piece {
    pub const fn edge(first: Color, second: Color) -> Self {
        Self {
            stickers: [first, second, first],
            sticker_count: 2,
        }
    }

    pub const fn corner(first: Color, second: Color, third: Color) -> Self {
        Self {
            stickers: [first, second, third],
            sticker_count: 3,
        }
    }

    /// The sticker colors, in location order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.stickers[..self.sticker_count as usize]
    }

    /// The piece's identity, ignoring twist.
    #[inline]
    pub fn color_set(&self) -> ColorSet {
        ColorSet::from_colors(self.colors())
    }

    /// See [`is_piece_valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        is_piece_valid(self.colors())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors() {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

/// True iff `colors` names 2 or 3 pairwise distinct colors, none of which is
/// the opposite of another.
pub const fn is_piece_valid(colors: &[Color]) -> bool {
    if colors.len() < 2 || colors.len() > MAX_STICKERS {
        return false;
    }
    let mut i = 0;
    while i < colors.len() {
        let mut j = i + 1;
        while j < colors.len() {
            let a = colors[i];
            let b = colors[j];
            // opposite is an involution, so one direction covers both
            if a as u8 == b as u8 || a.opposite() as u8 == b as u8 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// A set of pieces, stored as a bitmap over the 64 possible color sets.
///
/// Bit `s` is set when the piece with `ColorSet` bits `s` is present. Corner
/// sets have three bits and edge sets two, so corners and edges never share
/// an index. Adding the same piece twice leaves a single bit, which is how a
/// duplicated piece shows up as a missing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PieceSet(u64);

impl PieceSet {
    pub const EMPTY: Self = Self(0);

    pub const fn from_color_sets(sets: &[ColorSet]) -> Self {
        let mut pieces = Self::EMPTY;
        let mut i = 0;
        while i < sets.len() {
            pieces = pieces.with(sets[i]);
            i += 1;
        }
        pieces
    }

    #[inline(always)]
    pub const fn with(self, piece: ColorSet) -> Self {
        Self(self.0 | (1 << piece.bits()))
    }

    #[inline(always)]
    pub const fn contains(self, piece: ColorSet) -> bool {
        self.0 & (1 << piece.bits()) != 0
    }

    /// Pieces in `self` but not in `other`.
    #[inline(always)]
    pub const fn difference(self, other: PieceSet) -> PieceSet {
        Self(self.0 & !other.0)
    }

    #[inline(always)]
    pub const fn union(self, other: PieceSet) -> PieceSet {
        Self(self.0 | other.0)
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the pieces as color sets, in ascending mask order.
    pub fn iter(self) -> impl Iterator<Item = ColorSet> {
        (0..64u8)
            .filter(move |&bits| self.0 & (1 << bits) != 0)
            .map(ColorSet::from_bits)
    }
}

impl fmt::Display for PieceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, piece) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", piece)?;
        }
        write!(f, "}}")
    }
}

/// Builds the eight corners: one color from each axis.
const fn build_canonical_corners() -> [ColorSet; NUM_CORNERS] {
    let mut corners = [ColorSet::EMPTY; NUM_CORNERS];
    let mut index = 0;
    while index < NUM_CORNERS {
        // bit k of the index picks the first or second color of axis k
        let mut set = ColorSet::EMPTY;
        let mut axis = 0;
        while axis < AXES.len() {
            let (first, second) = AXES[axis];
            set = set.with(if index & (1 << axis) == 0 { first } else { second });
            axis += 1;
        }
        corners[index] = set;
        index += 1;
    }
    corners
}

/// Builds the twelve edges: one color from each of two different axes.
const fn build_canonical_edges() -> [ColorSet; NUM_EDGES] {
    let mut edges = [ColorSet::EMPTY; NUM_EDGES];
    let mut count = 0;
    let mut axis_a = 0;
    while axis_a < AXES.len() {
        let mut axis_b = axis_a + 1;
        while axis_b < AXES.len() {
            let colors_a = [AXES[axis_a].0, AXES[axis_a].1];
            let colors_b = [AXES[axis_b].0, AXES[axis_b].1];
            let mut i = 0;
            while i < 2 {
                let mut j = 0;
                while j < 2 {
                    edges[count] = ColorSet::EMPTY.with(colors_a[i]).with(colors_b[j]);
                    count += 1;
                    j += 1;
                }
                i += 1;
            }
            axis_b += 1;
        }
        axis_a += 1;
    }
    edges
}

/// The eight corner pieces of a real cube.
pub const CANONICAL_CORNERS: [ColorSet; NUM_CORNERS] = build_canonical_corners();

/// The twelve edge pieces of a real cube.
pub const CANONICAL_EDGES: [ColorSet; NUM_EDGES] = build_canonical_edges();

const CORNER_SET: PieceSet = PieceSet::from_color_sets(&CANONICAL_CORNERS);
const EDGE_SET: PieceSet = PieceSet::from_color_sets(&CANONICAL_EDGES);

/// Every corner piece that exists exactly once on a real cube.
#[inline(always)]
pub const fn canonical_corners() -> PieceSet {
    CORNER_SET
}

/// Every edge piece that exists exactly once on a real cube.
#[inline(always)]
pub const fn canonical_edges() -> PieceSet {
    EDGE_SET
}

/// How many pieces in `sets` carry `color`.
const fn incidence(sets: &[ColorSet], color: Color) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < sets.len() {
        if sets[i].contains(color) {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Compile-time self-check of the inventory.
const _: () = {
    assert!(CORNER_SET.len() == NUM_CORNERS, "corners must be distinct");
    assert!(EDGE_SET.len() == NUM_EDGES, "edges must be distinct");

    let mut i = 0;
    while i < NUM_CORNERS {
        let corner = CANONICAL_CORNERS[i];
        assert!(corner.len() == 3 && !corner.has_opposite_pair(), "impossible corner");
        i += 1;
    }
    let mut i = 0;
    while i < NUM_EDGES {
        let edge = CANONICAL_EDGES[i];
        assert!(edge.len() == 2 && !edge.has_opposite_pair(), "impossible edge");
        i += 1;
    }

    // 8 corners * 3 stickers and 12 edges * 2 stickers, spread over 6 colors
    let mut c = 0;
    while c < NUM_COLORS {
        let color = Color::ALL[c];
        assert!(incidence(&CANONICAL_CORNERS, color) == 4, "corner incidence");
        assert!(incidence(&CANONICAL_EDGES, color) == 4, "edge incidence");
        c += 1;
    }
};
