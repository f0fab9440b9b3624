//! Fixed cube geometry.
//!
//! Nothing here depends on sticker colors: the face-turn permutation and the
//! sticker positions of the 8 corner and 12 edge locations are the same for
//! every reading.
//!
//! Locations use the standard facelet numbering, where sticker `i` of face
//! `X` is written `Xi` and faces are read as in [`crate::face`]:
//!
//! ```text
//!              U0 U1 U2
//!              U3 U4 U5
//!              U6 U7 U8
//! L0 L1 L2     F0 F1 F2     R0 R1 R2     B0 B1 B2
//! L3 L4 L5     F3 F4 F5     R3 R4 R5     B3 B4 B5
//! L6 L7 L8     F6 F7 F8     R6 R7 R8     B6 B7 B8
//!              D0 D1 D2
//!              D3 D4 D5
//!              D6 D7 D8
//! ```

use std::fmt;

use crate::face::{FaceLabel, FACE_STICKERS};

/// A single sticker position: a face and an index into its nine stickers.
pub type Sticker = (FaceLabel, usize);

/// One clockwise quarter turn of a face: `turned[i] = original[QUARTER_TURN[i]]`.
///
/// Corners cycle 0 -> 2 -> 8 -> 6, edges cycle 1 -> 5 -> 7 -> 3, and the
/// center stays put.
pub const QUARTER_TURN: [usize; FACE_STICKERS] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Sticker mappings for 0, 1, 2 and 3 clockwise quarter turns.
pub const TURN_TABLE: [[usize; FACE_STICKERS]; 4] = build_turn_table();

/// Composes `QUARTER_TURN` with itself at compile time.
const fn build_turn_table() -> [[usize; FACE_STICKERS]; 4] {
    let mut table = [[0usize; FACE_STICKERS]; 4];

    let mut position = 0;
    while position < FACE_STICKERS {
        table[0][position] = position;
        position += 1;
    }

    let mut turns = 1;
    while turns < 4 {
        let mut position = 0;
        while position < FACE_STICKERS {
            table[turns][position] = table[turns - 1][QUARTER_TURN[position]];
            position += 1;
        }
        turns += 1;
    }
    table
}

/// The eight corner locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Corner {
    Urf,
    Ufl,
    Ulb,
    Ubr,
    Dfr,
    Dlf,
    Dbl,
    Drb,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::Urf,
        Corner::Ufl,
        Corner::Ulb,
        Corner::Ubr,
        Corner::Dfr,
        Corner::Dlf,
        Corner::Dbl,
        Corner::Drb,
    ];

    /// The three stickers of this corner, U or D sticker first, then
    /// clockwise around the corner.
    pub const fn stickers(self) -> [Sticker; 3] {
        CORNER_STICKERS[self as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Corner::Urf => "URF",
            Corner::Ufl => "UFL",
            Corner::Ulb => "ULB",
            Corner::Ubr => "UBR",
            Corner::Dfr => "DFR",
            Corner::Dlf => "DLF",
            Corner::Dbl => "DBL",
            Corner::Drb => "DRB",
        }
    }
}

/// The twelve edge locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edge {
    Ur,
    Uf,
    Ul,
    Ub,
    Dr,
    Df,
    Dl,
    Db,
    Fr,
    Fl,
    Bl,
    Br,
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::Ur,
        Edge::Uf,
        Edge::Ul,
        Edge::Ub,
        Edge::Dr,
        Edge::Df,
        Edge::Dl,
        Edge::Db,
        Edge::Fr,
        Edge::Fl,
        Edge::Bl,
        Edge::Br,
    ];

    pub const fn stickers(self) -> [Sticker; 2] {
        EDGE_STICKERS[self as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Edge::Ur => "UR",
            Edge::Uf => "UF",
            Edge::Ul => "UL",
            Edge::Ub => "UB",
            Edge::Dr => "DR",
            Edge::Df => "DF",
            Edge::Dl => "DL",
            Edge::Db => "DB",
            Edge::Fr => "FR",
            Edge::Fl => "FL",
            Edge::Bl => "BL",
            Edge::Br => "BR",
        }
    }
}

use FaceLabel::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// Sticker positions of each corner, indexed by `Corner as usize`.
const CORNER_STICKERS: [[Sticker; 3]; 8] = [
    [(U, 8), (R, 0), (F, 2)], // URF
    [(U, 6), (F, 0), (L, 2)], // UFL
    [(U, 0), (L, 0), (B, 2)], // ULB
    [(U, 2), (B, 0), (R, 2)], // UBR
    [(D, 2), (F, 8), (R, 6)], // DFR
    [(D, 0), (L, 8), (F, 6)], // DLF
    [(D, 6), (B, 8), (L, 6)], // DBL
    [(D, 8), (R, 8), (B, 6)], // DRB
];

/// Sticker positions of each edge, indexed by `Edge as usize`.
const EDGE_STICKERS: [[Sticker; 2]; 12] = [
    [(U, 5), (R, 1)], // UR
    [(U, 7), (F, 1)], // UF
    [(U, 3), (L, 1)], // UL
    [(U, 1), (B, 1)], // UB
    [(D, 5), (R, 7)], // DR
    [(D, 1), (F, 7)], // DF
    [(D, 3), (L, 7)], // DL
    [(D, 7), (B, 7)], // DB
    [(F, 5), (R, 3)], // FR
    [(F, 3), (L, 5)], // FL
    [(B, 5), (L, 3)], // BL
    [(B, 3), (R, 5)], // BR
];

/// A corner or edge location, used to point at the piece a check rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceLocation {
    Corner(Corner),
    Edge(Edge),
}

impl fmt::Display for PieceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceLocation::Corner(corner) => write!(f, "{} corner", corner.name()),
            PieceLocation::Edge(edge) => write!(f, "{} edge", edge.name()),
        }
    }
}
