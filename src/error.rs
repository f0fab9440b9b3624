//! Error types for reading, validating and resolving cubes.
//!
//! Per-candidate failures inside the search are plain values
//! ([`crate::solver::CandidateOutcome`]); only the top-level outcome of a
//! resolution is reported as a [`ResolutionError`].

use thiserror::Error;

use crate::color::Color;
use crate::face::FaceLabel;
use crate::geometry::PieceLocation;
use crate::pieces::{Piece, PieceSet};
use crate::solver::{OrientationCandidate, SearchStats};

/// Malformed input: the reading does not have the shape of a cube.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("face {face} has {len} stickers (expected 9)")]
    WrongLength { face: FaceLabel, len: usize },

    #[error("face {face} sticker {position} has unknown color {found:?}")]
    UnknownColor {
        face: FaceLabel,
        position: usize,
        found: char,
    },

    #[error("cube state has {len} stickers (expected 54)")]
    WrongStateLength { len: usize },
}

/// How often one color occurs in a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: Color,
    pub actual: usize,
}

/// Aggregate sticker counts are wrong: some color does not occur 9 times.
///
/// Lists every offending color, in color order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wrong sticker counts: {} (expected 9 each)", describe_counts(.mismatches))]
pub struct CountError {
    pub mismatches: Vec<ColorCount>,
}

fn describe_counts(mismatches: &[ColorCount]) -> String {
    mismatches
        .iter()
        .map(|mismatch| format!("'{}' appears {} times", mismatch.color, mismatch.actual))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A location whose stickers cannot belong to one physical piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("{location} has impossible colors '{piece}'")]
    DuplicateOrImpossible {
        location: PieceLocation,
        piece: Piece,
    },
}

/// Why a fully rotated reading is not a valid cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrientationError {
    #[error("center of {label} is '{found}', expected '{expected}'")]
    CenterMismatch {
        label: FaceLabel,
        found: Color,
        expected: Color,
    },

    #[error(transparent)]
    InvalidPiece(#[from] PieceError),

    #[error("pieces do not match the cube inventory: missing {missing}, extra {extra}")]
    PieceSetMismatch { missing: PieceSet, extra: PieceSet },
}

/// Failure of a whole resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    InvalidCounts(#[from] CountError),

    #[error("no valid orientation among {} candidates ({})", .0.candidates_evaluated, .0)]
    NoValidOrientation(SearchStats),

    #[error(
        "{distinct_states} different cube states are valid ({matching_candidates} matching candidates, first is {first})"
    )]
    Ambiguous {
        distinct_states: usize,
        matching_candidates: usize,
        first: OrientationCandidate,
    },
}

/// A move token that is not in standard face-turn notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("unknown face {0:?} in move")]
    UnknownFace(char),

    #[error("unknown turn suffix {suffix:?} in move {token:?}")]
    UnknownSuffix { token: String, suffix: String },
}
