//! Exhaustive orientation search.
//!
//! Each of the six faces may have been read turned by 0, 90, 180 or 270
//! degrees, giving 4^6 = 4096 candidates. The resolver tries them in a fixed
//! order and accepts a candidate when:
//! - every center matches its slot's color;
//! - the 8 corners and 12 edges read from the rotated faces are exactly the
//!   piece inventory of a real cube.
//!
//! Key points:
//! - Color counts are checked once up front; rotations never change them.
//! - Candidates are plain `Copy` values, rebuilt from the input faces each
//!   time, so no candidate can observe another's rotation.
//! - Candidate failures are [`CandidateOutcome`] values, not errors.
//! - The parallel strategy uses rayon's `find_first`, which returns the
//!   lowest-index match, so both strategies agree on every input.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::cube::{extract_pieces, validate_color_counts, CubeReading};
use crate::error::{CountError, OrientationError, ResolutionError};
use crate::face::{Face, FaceLabel, CENTER, NUM_FACES};
use crate::pieces::{canonical_corners, canonical_edges};

/// Number of rotation combinations: four per face.
pub const NUM_CANDIDATES: usize = 1 << (2 * NUM_FACES);

/// Quarter-turn counts for each face, in U, R, F, D, L, B order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OrientationCandidate {
    pub rotations: [u8; NUM_FACES],
}

impl OrientationCandidate {
    /// Decodes a candidate index. The index counts in base 4 with U as the
    /// most significant digit, so index order is lexicographic order over
    /// (U, R, F, D, L, B).
    pub const fn from_index(index: usize) -> Self {
        let mut rotations = [0u8; NUM_FACES];
        let mut face = 0;
        while face < NUM_FACES {
            let shift = 2 * (NUM_FACES - 1 - face);
            rotations[face] = ((index >> shift) & 3) as u8;
            face += 1;
        }
        Self { rotations }
    }

    /// Position of this candidate in search order.
    pub const fn index(&self) -> usize {
        let mut index = 0;
        let mut face = 0;
        while face < NUM_FACES {
            index = (index << 2) | (self.rotations[face] & 3) as usize;
            face += 1;
        }
        index
    }

    /// All candidates in search order.
    pub fn all() -> impl Iterator<Item = OrientationCandidate> {
        (0..NUM_CANDIDATES).map(Self::from_index)
    }

    /// Rotates each input face by this candidate's amount.
    #[inline]
    pub fn apply(&self, faces: &[Face; NUM_FACES]) -> [Face; NUM_FACES] {
        std::array::from_fn(|face| faces[face].rotated(self.rotations[face]))
    }
}

impl fmt::Display for OrientationCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in FaceLabel::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", label, self.rotations[i])?;
        }
        Ok(())
    }
}

/// How a single candidate fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateOutcome {
    CenterMismatch,
    InvalidPiece,
    PieceSetMismatch,
    Valid,
}

impl From<&Result<(), OrientationError>> for CandidateOutcome {
    fn from(result: &Result<(), OrientationError>) -> Self {
        match result {
            Ok(()) => CandidateOutcome::Valid,
            Err(OrientationError::CenterMismatch { .. }) => CandidateOutcome::CenterMismatch,
            Err(OrientationError::InvalidPiece(_)) => CandidateOutcome::InvalidPiece,
            Err(OrientationError::PieceSetMismatch { .. }) => CandidateOutcome::PieceSetMismatch,
        }
    }
}

/// Checks whether fully rotated faces form a valid cube.
///
/// Centers are checked first since they are cheaper than extracting pieces.
pub fn is_orientation_valid(faces: &[Face; NUM_FACES]) -> Result<(), OrientationError> {
    for label in FaceLabel::ALL {
        let found = faces[label.index()].sticker(CENTER);
        let expected = label.center_color();
        if found != expected {
            return Err(OrientationError::CenterMismatch {
                label,
                found,
                expected,
            });
        }
    }

    let pieces = extract_pieces(faces)?;
    let expected = canonical_corners().union(canonical_edges());
    let found = pieces.corners.union(pieces.edges);
    if pieces.corners != canonical_corners() || pieces.edges != canonical_edges() {
        return Err(OrientationError::PieceSetMismatch {
            missing: expected.difference(found),
            extra: found.difference(expected),
        });
    }
    Ok(())
}

/// Rotates the input faces by `candidate` and classifies the result.
#[inline]
pub fn evaluate_candidate(
    faces: &[Face; NUM_FACES],
    candidate: OrientationCandidate,
) -> CandidateOutcome {
    CandidateOutcome::from(&is_orientation_valid(&candidate.apply(faces)))
}

/// Tallies of candidate outcomes during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub candidates_evaluated: usize,
    pub center_mismatches: usize,
    pub invalid_pieces: usize,
    pub piece_set_mismatches: usize,
    pub matches: usize,
}

impl SearchStats {
    pub fn record(&mut self, outcome: CandidateOutcome) {
        self.candidates_evaluated += 1;
        match outcome {
            CandidateOutcome::CenterMismatch => self.center_mismatches += 1,
            CandidateOutcome::InvalidPiece => self.invalid_pieces += 1,
            CandidateOutcome::PieceSetMismatch => self.piece_set_mismatches += 1,
            CandidateOutcome::Valid => self.matches += 1,
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} center mismatches, {} impossible pieces, {} piece set mismatches",
            self.center_mismatches, self.invalid_pieces, self.piece_set_mismatches
        )
    }
}

/// Outcome counters shared between rayon workers.
#[derive(Default)]
struct AtomicStats {
    candidates_evaluated: AtomicUsize,
    center_mismatches: AtomicUsize,
    invalid_pieces: AtomicUsize,
    piece_set_mismatches: AtomicUsize,
    matches: AtomicUsize,
}

impl AtomicStats {
    fn record(&self, outcome: CandidateOutcome) {
        self.candidates_evaluated.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome {
            CandidateOutcome::CenterMismatch => &self.center_mismatches,
            CandidateOutcome::InvalidPiece => &self.invalid_pieces,
            CandidateOutcome::PieceSetMismatch => &self.piece_set_mismatches,
            CandidateOutcome::Valid => &self.matches,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn add_to(&self, stats: &mut SearchStats) {
        stats.candidates_evaluated += self.candidates_evaluated.load(Ordering::Relaxed);
        stats.center_mismatches += self.center_mismatches.load(Ordering::Relaxed);
        stats.invalid_pieces += self.invalid_pieces.load(Ordering::Relaxed);
        stats.piece_set_mismatches += self.piece_set_mismatches.load(Ordering::Relaxed);
        stats.matches += self.matches.load(Ordering::Relaxed);
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrientation {
    candidate: OrientationCandidate,
    faces: CubeReading,
    state: String,
}

impl ResolvedOrientation {
    fn new(candidate: OrientationCandidate, faces: [Face; NUM_FACES]) -> Self {
        let faces = CubeReading::new(faces);
        Self {
            candidate,
            state: faces.state_string(),
            faces,
        }
    }

    /// Quarter turns applied to each input face, in U, R, F, D, L, B order.
    pub fn rotations(&self) -> [u8; NUM_FACES] {
        self.candidate.rotations
    }

    pub fn candidate(&self) -> OrientationCandidate {
        self.candidate
    }

    /// Position of the accepted candidate in search order.
    pub fn candidate_index(&self) -> usize {
        self.candidate.index()
    }

    /// The correctly oriented faces.
    pub fn faces(&self) -> &CubeReading {
        &self.faces
    }

    /// 54 color letters in U, R, F, D, L, B order.
    pub fn state_string(&self) -> &str {
        &self.state
    }

    /// 54 facelet letters, ready for a two-phase solver.
    pub fn facelet_string(&self) -> String {
        self.faces.facelet_string()
    }
}

/// Order in which candidates are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// One candidate at a time, in index order.
    #[default]
    Sequential,
    /// Candidates spread over rayon's thread pool; the lowest valid index
    /// still wins.
    Parallel,
}

/// What to do when more than one candidate validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Multiplicity {
    /// Return the lowest-index valid candidate and stop searching.
    #[default]
    FirstMatch,
    /// Evaluate every candidate and fail if the valid ones produce more than
    /// one distinct cube state. Candidates that only differ by turning a
    /// rotation-symmetric face give the same state and do not count.
    RequireUnique,
}

/// Runtime knobs for [`Resolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverConfig {
    pub strategy: SearchStrategy,
    pub multiplicity: Multiplicity,
}

/// Finds the face rotations that turn a reading into a valid cube.
///
/// Holds no state besides its configuration; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Resolves a reading. See [`Resolver::resolve_with_stats`].
    pub fn resolve(&self, reading: &CubeReading) -> Result<ResolvedOrientation, ResolutionError> {
        let mut stats = SearchStats::default();
        self.resolve_with_stats(reading, &mut stats)
    }

    /// Resolves a reading, adding every evaluated candidate to `stats`.
    ///
    /// Fails without evaluating any candidate if the color counts are wrong.
    /// With [`SearchStrategy::Parallel`] and [`Multiplicity::FirstMatch`],
    /// workers may evaluate a few candidates past the winner before they
    /// stop, so `stats` can exceed the sequential count.
    pub fn resolve_with_stats(
        &self,
        reading: &CubeReading,
        stats: &mut SearchStats,
    ) -> Result<ResolvedOrientation, ResolutionError> {
        debug!("resolving reading {}", reading.state_string());
        validate_color_counts(reading.faces())?;

        match self.config.multiplicity {
            Multiplicity::FirstMatch => {
                let found = match self.config.strategy {
                    SearchStrategy::Sequential => first_match_sequential(reading.faces(), stats),
                    SearchStrategy::Parallel => first_match_parallel(reading.faces(), stats),
                };
                match found {
                    Some(candidate) => {
                        debug!(
                            "candidate {} ({}) is valid after {} evaluations",
                            candidate.index(),
                            candidate,
                            stats.candidates_evaluated
                        );
                        Ok(ResolvedOrientation::new(
                            candidate,
                            candidate.apply(reading.faces()),
                        ))
                    }
                    None => {
                        debug!("no valid candidate: {}", stats);
                        Err(ResolutionError::NoValidOrientation(*stats))
                    }
                }
            }
            Multiplicity::RequireUnique => {
                let matches = self.scan_all(reading.faces(), stats);
                let Some(&first) = matches.first() else {
                    debug!("no valid candidate: {}", stats);
                    return Err(ResolutionError::NoValidOrientation(*stats));
                };

                let distinct_states: FxHashSet<[Face; NUM_FACES]> = matches
                    .iter()
                    .map(|candidate| candidate.apply(reading.faces()))
                    .collect();
                if distinct_states.len() > 1 {
                    debug!(
                        "{} valid candidates give {} distinct states",
                        matches.len(),
                        distinct_states.len()
                    );
                    return Err(ResolutionError::Ambiguous {
                        distinct_states: distinct_states.len(),
                        matching_candidates: matches.len(),
                        first,
                    });
                }
                Ok(ResolvedOrientation::new(first, first.apply(reading.faces())))
            }
        }
    }

    /// Every valid candidate, in search order.
    ///
    /// Always evaluates all 4096 candidates. A solved cube yields all of
    /// them, since monochrome faces look the same at every rotation.
    pub fn find_all(&self, reading: &CubeReading) -> Result<Vec<ResolvedOrientation>, CountError> {
        validate_color_counts(reading.faces())?;
        let mut stats = SearchStats::default();
        Ok(self
            .scan_all(reading.faces(), &mut stats)
            .into_iter()
            .map(|candidate| ResolvedOrientation::new(candidate, candidate.apply(reading.faces())))
            .collect())
    }

    /// Evaluates every candidate and returns the valid ones in index order.
    fn scan_all(
        &self,
        faces: &[Face; NUM_FACES],
        stats: &mut SearchStats,
    ) -> Vec<OrientationCandidate> {
        match self.config.strategy {
            SearchStrategy::Sequential => OrientationCandidate::all()
                .filter(|&candidate| {
                    let outcome = evaluate_candidate(faces, candidate);
                    trace!("candidate {}: {:?}", candidate.index(), outcome);
                    stats.record(outcome);
                    outcome == CandidateOutcome::Valid
                })
                .collect(),
            SearchStrategy::Parallel => {
                let counters = AtomicStats::default();
                let matches = (0..NUM_CANDIDATES)
                    .into_par_iter()
                    .map(OrientationCandidate::from_index)
                    .filter(|&candidate| {
                        let outcome = evaluate_candidate(faces, candidate);
                        counters.record(outcome);
                        outcome == CandidateOutcome::Valid
                    })
                    .collect();
                counters.add_to(stats);
                matches
            }
        }
    }
}

fn first_match_sequential(
    faces: &[Face; NUM_FACES],
    stats: &mut SearchStats,
) -> Option<OrientationCandidate> {
    OrientationCandidate::all().find(|&candidate| {
        let outcome = evaluate_candidate(faces, candidate);
        trace!("candidate {}: {:?}", candidate.index(), outcome);
        stats.record(outcome);
        outcome == CandidateOutcome::Valid
    })
}

fn first_match_parallel(
    faces: &[Face; NUM_FACES],
    stats: &mut SearchStats,
) -> Option<OrientationCandidate> {
    let counters = AtomicStats::default();
    let found = (0..NUM_CANDIDATES)
        .into_par_iter()
        .map(OrientationCandidate::from_index)
        .find_first(|&candidate| {
            let outcome = evaluate_candidate(faces, candidate);
            counters.record(outcome);
            outcome == CandidateOutcome::Valid
        });
    counters.add_to(stats);
    found
}

/// Resolves a reading with the default configuration.
pub fn resolve(reading: &CubeReading) -> Result<ResolvedOrientation, ResolutionError> {
    Resolver::default().resolve(reading)
}

/// Parses six face readings (U, R, F, D, L, B) and resolves them.
pub fn resolve_faces(faces: [&str; NUM_FACES]) -> Result<ResolvedOrientation, ResolutionError> {
    resolve(&CubeReading::parse(faces)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::{ColorCount, InputError};
    use crate::moves::{parse_sequence, scramble};

    /// A real cube after "R U2 F' L D B2 R' F U' L2 D' B R2 U F2 D L' B'".
    const SCRAMBLED: &str = "goorwgbgwboyrrybggyyrbgwrwogowoywyryobrrowoywgbwbbgryb";

    /// `SCRAMBLED` with its faces read turned by (1, 2, 3, 0, 3, 1).
    const MISROTATED: [&str; NUM_FACES] = [
        "brggwowgo",
        "ggbyrryob",
        "rwoygwybr",
        "gowoywyry",
        "rwwboyoro",
        "rbgybbbgw",
    ];

    fn parallel() -> Resolver {
        Resolver::new(ResolverConfig {
            strategy: SearchStrategy::Parallel,
            ..ResolverConfig::default()
        })
    }

    fn require_unique(strategy: SearchStrategy) -> Resolver {
        Resolver::new(ResolverConfig {
            strategy,
            multiplicity: Multiplicity::RequireUnique,
        })
    }

    #[test]
    fn test_candidate_index_round_trip() {
        for index in 0..NUM_CANDIDATES {
            assert_eq!(OrientationCandidate::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_candidate_order_is_lexicographic_with_up_first() {
        assert_eq!(OrientationCandidate::from_index(0).rotations, [0; 6]);
        assert_eq!(OrientationCandidate::from_index(1).rotations, [0, 0, 0, 0, 0, 1]);
        assert_eq!(OrientationCandidate::from_index(4).rotations, [0, 0, 0, 0, 1, 0]);
        assert_eq!(OrientationCandidate::from_index(1024).rotations, [1, 0, 0, 0, 0, 0]);
        assert_eq!(OrientationCandidate::from_index(4095).rotations, [3; 6]);
        let all: Vec<_> = OrientationCandidate::all().collect();
        assert_eq!(all.len(), 4096);
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_solved_cube_resolves_to_zero_rotations() {
        let resolved = resolve(&CubeReading::solved()).unwrap();
        assert_eq!(resolved.rotations(), [0; 6]);
        assert_eq!(resolved.candidate_index(), 0);
        assert_eq!(
            resolved.state_string(),
            "wwwwwwwwwrrrrrrrrrgggggggggyyyyyyyyyooooooooobbbbbbbbb"
        );
    }

    #[test]
    fn test_monochrome_faces_validate_at_every_rotation() {
        // every candidate is valid for a solved cube; the zero candidate is
        // only returned because it comes first
        let all = Resolver::default().find_all(&CubeReading::solved()).unwrap();
        assert_eq!(all.len(), NUM_CANDIDATES);
        assert!(all
            .iter()
            .all(|resolved| resolved.faces() == &CubeReading::solved()));
    }

    #[test]
    fn test_solved_cube_is_not_ambiguous() {
        let resolved = require_unique(SearchStrategy::Sequential)
            .resolve(&CubeReading::solved())
            .unwrap();
        assert_eq!(resolved.rotations(), [0; 6]);
    }

    #[test]
    fn test_misrotated_reading_recovers_the_scrambled_cube() {
        let resolved = resolve_faces(MISROTATED).unwrap();
        assert_eq!(resolved.rotations(), [3, 2, 1, 0, 1, 3]);
        assert_eq!(resolved.candidate_index(), 3655);
        assert_eq!(resolved.state_string(), SCRAMBLED);
        assert_eq!(
            resolved.facelet_string(),
            "FLLRUFBFUBLDRRDBFFDDRBFURULFLULDUDRDLBRRLULDUFBUBBFRDB"
        );
    }

    #[test]
    fn test_scrambled_cube_has_exactly_one_valid_candidate() {
        let reading = CubeReading::parse(MISROTATED).unwrap();
        let all = Resolver::default().find_all(&reading).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rotations(), [3, 2, 1, 0, 1, 3]);

        let mut stats = SearchStats::default();
        require_unique(SearchStrategy::Sequential)
            .resolve_with_stats(&reading, &mut stats)
            .unwrap();
        assert_eq!(
            stats,
            SearchStats {
                candidates_evaluated: 4096,
                center_mismatches: 0,
                invalid_pieces: 4095,
                piece_set_mismatches: 0,
                matches: 1,
            }
        );
    }

    #[test]
    fn test_sequential_stops_at_the_first_match() {
        let reading = CubeReading::parse(MISROTATED).unwrap();
        let mut stats = SearchStats::default();
        Resolver::default()
            .resolve_with_stats(&reading, &mut stats)
            .unwrap();
        assert_eq!(stats.candidates_evaluated, 3656);
        assert_eq!(stats.matches, 1);
    }

    #[test]
    fn test_parallel_agrees_with_sequential() {
        for seed in 0..8 {
            let scrambled = CubeReading::solved().apply_moves(&scramble(30, seed));
            let reading = scrambled.rotated([seed as u8 % 4, 1, 2, 3, 0, (seed as u8 + 1) % 4]);
            let sequential = resolve(&reading).unwrap();
            let threaded = parallel().resolve(&reading).unwrap();
            assert_eq!(sequential, threaded, "seed {seed}");
        }
    }

    #[test]
    fn test_random_scrambles_resolve_to_their_cube() {
        for seed in 100..120u64 {
            let scrambled = CubeReading::solved().apply_moves(&scramble(30, seed));
            let misrotation = OrientationCandidate::from_index((seed as usize * 811) % NUM_CANDIDATES);
            let reading = scrambled.rotated(misrotation.rotations);

            let resolved = resolve(&reading).unwrap();
            assert!(is_orientation_valid(resolved.faces().faces()).is_ok());
            let all = Resolver::default().find_all(&reading).unwrap();
            assert!(
                all.iter().any(|candidate| candidate.faces() == &scrambled),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_single_turn_cube_is_ambiguous() {
        // after one U turn the U and D faces are still monochrome, and two
        // different states pass every check
        let reading = CubeReading::solved().apply_moves(&parse_sequence("U").unwrap());

        let first = resolve(&reading).unwrap();
        assert_eq!(first.rotations(), [0; 6]);
        assert_eq!(first.faces(), &reading);

        let all = Resolver::default().find_all(&reading).unwrap();
        assert_eq!(all.len(), 32);

        for strategy in [SearchStrategy::Sequential, SearchStrategy::Parallel] {
            let error = require_unique(strategy).resolve(&reading).unwrap_err();
            assert_eq!(
                error,
                ResolutionError::Ambiguous {
                    distinct_states: 2,
                    matching_candidates: 32,
                    first: OrientationCandidate::default(),
                },
                "{strategy:?}"
            );
        }
    }

    #[test]
    fn test_count_mismatch_evaluates_no_candidates() {
        let reading = CubeReading::parse([
            "wwwwwwwww",
            "rrrrrrrrr",
            "gggggggggw",
            "yyyyyyyyy",
            "ooooooooo",
            "bbbbbbbbb",
        ]);
        assert!(matches!(reading, Err(InputError::WrongLength { .. })));

        let reading = CubeReading::parse([
            "wwwwwwwww",
            "rrrrrrrrr",
            "ggggggggw",
            "yyyyyyyyy",
            "ooooooooo",
            "bbbbbbbbb",
        ])
        .unwrap();
        for resolver in [Resolver::default(), parallel()] {
            let mut stats = SearchStats::default();
            let error = resolver.resolve_with_stats(&reading, &mut stats).unwrap_err();
            assert_eq!(
                error,
                ResolutionError::InvalidCounts(CountError {
                    mismatches: vec![
                        ColorCount {
                            color: Color::White,
                            actual: 10
                        },
                        ColorCount {
                            color: Color::Green,
                            actual: 8
                        },
                    ]
                })
            );
            assert_eq!(stats.candidates_evaluated, 0);
        }
    }

    #[test]
    fn test_malformed_input_is_reported_before_counting() {
        let error = resolve_faces([
            "wwwwwwwww",
            "rrrrrrrrr",
            "ggggggggg",
            "yyyy?yyyy",
            "ooooooooo",
            "bbbbbbbbb",
        ])
        .unwrap_err();
        assert_eq!(
            error,
            ResolutionError::Input(InputError::UnknownColor {
                face: FaceLabel::Down,
                position: 4,
                found: '?'
            })
        );
    }

    #[test]
    fn test_forced_impossible_corners_find_nothing() {
        // every U corner is blue and meets green or another blue at every
        // rotation; the four B corners take the missing whites
        let reading = CubeReading::parse([
            "bwbwwwbwb",
            "rrrrrrrrr",
            "ggggggggg",
            "yyyyyyyyy",
            "ooooooooo",
            "wbwbbbwbw",
        ])
        .unwrap();
        assert_eq!(validate_color_counts(reading.faces()), Ok(()));

        for resolver in [Resolver::default(), parallel()] {
            let error = resolver.resolve(&reading).unwrap_err();
            assert_eq!(
                error,
                ResolutionError::NoValidOrientation(SearchStats {
                    candidates_evaluated: 4096,
                    center_mismatches: 0,
                    invalid_pieces: 4096,
                    piece_set_mismatches: 0,
                    matches: 0,
                })
            );
        }
    }

    #[test]
    fn test_wrong_centers_never_match() {
        // U and D readings swapped into each other's slots
        let reading = CubeReading::parse([
            "yyyyyyyyy",
            "rrrrrrrrr",
            "ggggggggg",
            "wwwwwwwww",
            "ooooooooo",
            "bbbbbbbbb",
        ])
        .unwrap();
        let error = resolve(&reading).unwrap_err();
        insta::assert_snapshot!(
            error.to_string(),
            @"no valid orientation among 4096 candidates (4096 center mismatches, 0 impossible pieces, 0 piece set mismatches)"
        );
    }

    #[test]
    fn test_is_orientation_valid_reports_center_first() {
        let reading = CubeReading::from_state_str(SCRAMBLED).unwrap();
        let mut faces = *reading.faces();
        faces.swap(0, 3);
        assert_eq!(
            is_orientation_valid(&faces),
            Err(OrientationError::CenterMismatch {
                label: FaceLabel::Up,
                found: Color::Yellow,
                expected: Color::White,
            })
        );
    }

    #[test]
    fn test_is_orientation_valid_reports_duplicated_pieces() {
        // recoloring the front sticker of UF gives a second white-red edge;
        // every piece is still locally valid but white-green is gone
        let mut stickers = CubeReading::solved().stickers();
        stickers[19] = Color::Red;
        let reading = CubeReading::from_stickers(stickers);
        let error = is_orientation_valid(reading.faces()).unwrap_err();
        match error {
            OrientationError::PieceSetMismatch { missing, extra } => {
                assert_eq!(missing.to_string(), "{wg}");
                assert_eq!(extra.to_string(), "{}");
            }
            other => panic!("expected a piece set mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_candidate_matches_is_orientation_valid() {
        let reading = CubeReading::parse(MISROTATED).unwrap();
        let winner = OrientationCandidate {
            rotations: [3, 2, 1, 0, 1, 3],
        };
        assert_eq!(
            evaluate_candidate(reading.faces(), winner),
            CandidateOutcome::Valid
        );
        assert_eq!(
            evaluate_candidate(reading.faces(), OrientationCandidate::default()),
            CandidateOutcome::InvalidPiece
        );
    }

    #[test]
    fn test_candidate_display() {
        let candidate = OrientationCandidate {
            rotations: [3, 2, 1, 0, 1, 3],
        };
        assert_eq!(candidate.to_string(), "U=3 R=2 F=1 D=0 L=1 B=3");
    }
}
