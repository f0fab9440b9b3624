//! Face turns in standard notation.
//!
//! Turning layers of a solved cube is the only way to reach a physically
//! realizable sticker state, so these moves are how tests, benchmarks and the
//! `scramble` command build readings the resolver must accept. This module
//! applies moves; it does not search for them.

use std::fmt;

use crate::color::Color;
use crate::cube::CubeReading;
use crate::error::MoveError;
use crate::face::{Face, FaceLabel, FACE_STICKERS, NUM_FACES};
use crate::geometry::Sticker;

/// How far a face is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    Half,
    CounterClockwise,
}

impl Turn {
    /// Number of clockwise quarter turns this turn amounts to.
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Half => Turn::Half,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Half => "2",
            Turn::CounterClockwise => "'",
        }
    }
}

/// A single outer-layer face turn, e.g. `R`, `U'` or `F2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: FaceLabel,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: FaceLabel, turn: Turn) -> Self {
        Self { face, turn }
    }

    pub const fn inverse(self) -> Move {
        Self {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }

    /// Parses one token of standard notation.
    ///
    /// The face letter must be uppercase; lowercase letters denote wide turns
    /// in common notation, which are not supported.
    pub fn parse(token: &str) -> Result<Move, MoveError> {
        let mut chars = token.chars();
        let first = chars.next().ok_or(MoveError::UnknownFace(' '))?;
        if !first.is_ascii_uppercase() {
            return Err(MoveError::UnknownFace(first));
        }
        let face = FaceLabel::from_char(first).ok_or(MoveError::UnknownFace(first))?;

        let suffix = chars.as_str();
        let turn = match suffix {
            "" | "1" => Turn::Clockwise,
            "2" | "2'" => Turn::Half,
            "'" | "3" => Turn::CounterClockwise,
            _ => {
                return Err(MoveError::UnknownSuffix {
                    token: token.to_string(),
                    suffix: suffix.to_string(),
                })
            }
        };
        Ok(Move { face, turn })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

/// Parses a whitespace-separated move sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, MoveError> {
    text.split_whitespace().map(Move::parse).collect()
}

/// Formats a move sequence in standard notation.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The four sticker strips that travel around a face during a clockwise
/// quarter turn, indexed by `FaceLabel as usize`. Stickers on strip `k` move
/// to the same slot of strip `k + 1`, and strip 3 moves to strip 0.
const STRIPS: [[(FaceLabel, [usize; 3]); 4]; NUM_FACES] = {
    use FaceLabel::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
    [
        // U
        [(F, [0, 1, 2]), (L, [0, 1, 2]), (B, [0, 1, 2]), (R, [0, 1, 2])],
        // R
        [(F, [2, 5, 8]), (U, [2, 5, 8]), (B, [6, 3, 0]), (D, [2, 5, 8])],
        // F
        [(U, [6, 7, 8]), (R, [0, 3, 6]), (D, [2, 1, 0]), (L, [8, 5, 2])],
        // D
        [(F, [6, 7, 8]), (R, [6, 7, 8]), (B, [6, 7, 8]), (L, [6, 7, 8])],
        // L
        [(U, [0, 3, 6]), (F, [0, 3, 6]), (D, [0, 3, 6]), (B, [8, 5, 2])],
        // B
        [(U, [2, 1, 0]), (L, [0, 3, 6]), (D, [6, 7, 8]), (R, [8, 5, 2])],
    ]
};

/// Applies one clockwise quarter turn of `face` to a 54-sticker state.
fn quarter_turn(reading: &CubeReading, face: FaceLabel) -> CubeReading {
    let mut stickers: [[Color; FACE_STICKERS]; NUM_FACES] =
        reading.faces().map(|side| *side.stickers());
    stickers[face.index()] = *reading.face(face).rotated(1).stickers();

    // strips never include the turning face, so reading from the old state is safe
    let strips = &STRIPS[face.index()];
    for (k, &(from_face, from_positions)) in strips.iter().enumerate() {
        let (to_face, to_positions) = strips[(k + 1) % 4];
        for slot in 0..3 {
            let source: Sticker = (from_face, from_positions[slot]);
            stickers[to_face.index()][to_positions[slot]] = reading.sticker(source);
        }
    }

    CubeReading::new(stickers.map(Face::new))
}

impl CubeReading {
    /// Returns this state after turning one face layer.
    pub fn apply_move(&self, mv: Move) -> CubeReading {
        let mut state = *self;
        for _ in 0..mv.turn.quarter_turns() {
            state = quarter_turn(&state, mv.face);
        }
        state
    }

    /// Returns this state after a whole move sequence, left to right.
    pub fn apply_moves(&self, moves: &[Move]) -> CubeReading {
        moves.iter().fold(*self, |state, &mv| state.apply_move(mv))
    }
}

/// Builds a pseudo-random sequence of `length` moves from `seed`.
///
/// The same face is never turned twice in a row. The same seed always gives
/// the same sequence.
pub fn scramble(length: usize, seed: u64) -> Vec<Move> {
    const TURNS: [Turn; 3] = [Turn::Clockwise, Turn::Half, Turn::CounterClockwise];

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut moves = Vec::with_capacity(length);
    let mut previous = None;
    while moves.len() < length {
        let face = FaceLabel::ALL[rng.usize(..NUM_FACES)];
        if previous == Some(face) {
            continue;
        }
        moves.push(Move::new(face, TURNS[rng.usize(..TURNS.len())]));
        previous = Some(face);
    }
    moves
}
