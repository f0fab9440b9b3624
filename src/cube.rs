//! Whole-cube readings: six faces in canonical slot order.
//!
//! A [`CubeReading`] is what the color-detection side hands over: one face
//! per slot (U, R, F, D, L, B), each possibly turned by an unknown multiple
//! of 90 degrees. This module counts colors, extracts the 20 pieces for a
//! given set of faces, and serializes faces into 54-character state strings.

use crate::color::{Color, NUM_COLORS};
use crate::error::{ColorCount, CountError, InputError, PieceError};
use crate::face::{Face, FaceLabel, FACE_STICKERS, NUM_FACES};
use crate::geometry::{Corner, Edge, PieceLocation, Sticker};
use crate::pieces::{Piece, PieceSet};

/// Total stickers on a cube.
pub const NUM_STICKERS: usize = NUM_FACES * FACE_STICKERS;

/// How many stickers of each color a valid cube has.
pub const STICKERS_PER_COLOR: usize = FACE_STICKERS;

/// Six faces, indexed by `FaceLabel as usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeReading {
    faces: [Face; NUM_FACES],
}

impl CubeReading {
    pub const fn new(faces: [Face; NUM_FACES]) -> Self {
        Self { faces }
    }

    /// The solved cube: every face a single color matching its slot.
    pub fn solved() -> Self {
        Self {
            faces: FaceLabel::ALL.map(|label| Face::solid(label.center_color())),
        }
    }

    /// Parses six 9-character face readings given in U, R, F, D, L, B order.
    pub fn parse(faces: [&str; NUM_FACES]) -> Result<Self, InputError> {
        let mut parsed = [Face::solid(Color::White); NUM_FACES];
        for (label, text) in FaceLabel::ALL.into_iter().zip(faces) {
            parsed[label.index()] = Face::parse(label, text)?;
        }
        Ok(Self { faces: parsed })
    }

    /// Parses a 54-character state string: nine stickers per face, faces in
    /// U, R, F, D, L, B order. Either color alphabet is accepted.
    pub fn from_state_str(state: &str) -> Result<Self, InputError> {
        let chars: Vec<char> = state.chars().collect();
        if chars.len() != NUM_STICKERS {
            return Err(InputError::WrongStateLength { len: chars.len() });
        }

        let mut faces = [Face::solid(Color::White); NUM_FACES];
        for label in FaceLabel::ALL {
            let start = label.index() * FACE_STICKERS;
            let text: String = chars[start..start + FACE_STICKERS].iter().collect();
            faces[label.index()] = Face::parse(label, &text)?;
        }
        Ok(Self { faces })
    }

    /// Builds a reading from all 54 stickers in state-string order.
    pub fn from_stickers(stickers: [Color; NUM_STICKERS]) -> Self {
        Self {
            faces: std::array::from_fn(|face| {
                let start = face * FACE_STICKERS;
                Face::new(std::array::from_fn(|position| stickers[start + position]))
            }),
        }
    }

    #[inline(always)]
    pub fn faces(&self) -> &[Face; NUM_FACES] {
        &self.faces
    }

    #[inline(always)]
    pub fn face(&self, label: FaceLabel) -> &Face {
        &self.faces[label.index()]
    }

    #[inline(always)]
    pub fn sticker(&self, (label, position): Sticker) -> Color {
        self.faces[label.index()].sticker(position)
    }

    /// All 54 stickers in state-string order.
    pub fn stickers(&self) -> [Color; NUM_STICKERS] {
        std::array::from_fn(|index| {
            self.faces[index / FACE_STICKERS].sticker(index % FACE_STICKERS)
        })
    }

    /// Turns each face clockwise by its entry in `rotations` (U, R, F, D, L, B).
    pub fn rotated(&self, rotations: [u8; NUM_FACES]) -> Self {
        Self {
            faces: std::array::from_fn(|face| self.faces[face].rotated(rotations[face])),
        }
    }

    /// Occurrences of each color, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; NUM_COLORS] {
        color_counts(&self.faces)
    }

    /// 54 color letters, faces in U, R, F, D, L, B order.
    pub fn state_string(&self) -> String {
        self.faces.iter().map(|face| face.to_string()).collect()
    }

    /// 54 facelet letters (`U R F D L B`), the input format of two-phase solvers.
    pub fn facelet_string(&self) -> String {
        self.faces
            .iter()
            .flat_map(|face| face.stickers().iter().map(|color| color.facelet_letter()))
            .collect()
    }

    /// Renders the reading as an unfolded net with U above and D below F.
    pub fn format_net(&self) -> String {
        format_net(&self.faces)
    }
}

/// Counts how many stickers of each color the faces carry.
pub fn color_counts(faces: &[Face; NUM_FACES]) -> [usize; NUM_COLORS] {
    let mut counts = [0; NUM_COLORS];
    for face in faces {
        for color in face.stickers() {
            counts[color.index()] += 1;
        }
    }
    counts
}

/// Succeeds iff each of the six colors occurs exactly 9 times.
///
/// Rotating a face only permutes its own stickers, so the result is the same
/// for every rotation of the faces.
pub fn validate_color_counts(faces: &[Face; NUM_FACES]) -> Result<(), CountError> {
    let mismatches: Vec<ColorCount> = color_counts(faces)
        .into_iter()
        .zip(Color::ALL)
        .filter(|&(actual, _)| actual != STICKERS_PER_COLOR)
        .map(|(actual, color)| ColorCount { color, actual })
        .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(CountError { mismatches })
    }
}

/// The pieces found at the 8 corner and 12 edge locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedPieces {
    pub corners: PieceSet,
    pub edges: PieceSet,
}

/// Reads the piece at every corner and edge location.
///
/// Fails at the first location whose stickers cannot form one physical piece
/// (a repeated color, or a color next to its opposite). Locations are checked
/// corners first, in [`Corner::ALL`] then [`Edge::ALL`] order.
pub fn extract_pieces(faces: &[Face; NUM_FACES]) -> Result<ExtractedPieces, PieceError> {
    let sticker = |(label, position): Sticker| faces[label.index()].sticker(position);

    let mut corners = PieceSet::EMPTY;
    for corner in Corner::ALL {
        let [a, b, c] = corner.stickers();
        let piece = Piece::corner(sticker(a), sticker(b), sticker(c));
        if !piece.is_valid() {
            return Err(PieceError::DuplicateOrImpossible {
                location: PieceLocation::Corner(corner),
                piece,
            });
        }
        corners = corners.with(piece.color_set());
    }

    let mut edges = PieceSet::EMPTY;
    for edge in Edge::ALL {
        let [a, b] = edge.stickers();
        let piece = Piece::edge(sticker(a), sticker(b));
        if !piece.is_valid() {
            return Err(PieceError::DuplicateOrImpossible {
                location: PieceLocation::Edge(edge),
                piece,
            });
        }
        edges = edges.with(piece.color_set());
    }

    Ok(ExtractedPieces { corners, edges })
}

/// Formats six faces as a net:
///
/// ```text
///     U
///   L F R B
///     D
/// ```
///
/// Each face is three rows of three color letters; faces on the middle band
/// are separated by one space.
pub fn format_net(faces: &[Face; NUM_FACES]) -> String {
    let row = |label: FaceLabel, line: usize| -> String {
        faces[label.index()].stickers()[line * 3..line * 3 + 3]
            .iter()
            .map(|color| color.letter())
            .collect()
    };

    let mut output = String::new();
    for r in 0..3 {
        output.push_str("    ");
        output.push_str(&row(FaceLabel::Up, r));
        output.push('\n');
    }
    for r in 0..3 {
        let band: Vec<String> = [
            FaceLabel::Left,
            FaceLabel::Front,
            FaceLabel::Right,
            FaceLabel::Back,
        ]
        .into_iter()
        .map(|label| row(label, r))
        .collect();
        output.push_str(&band.join(" "));
        output.push('\n');
    }
    for r in 0..3 {
        output.push_str("    ");
        output.push_str(&row(FaceLabel::Down, r));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{canonical_corners, canonical_edges};

    /// A real cube after "R U2 F' L D B2 R' F U' L2 D' B R2 U F2 D L' B'".
    const SCRAMBLED: &str = "goorwgbgwboyrrybggyyrbgwrwogowoywyryobrrowoywgbwbbgryb";

    #[test]
    fn test_solved_state_string() {
        assert_eq!(
            CubeReading::solved().state_string(),
            "wwwwwwwwwrrrrrrrrrgggggggggyyyyyyyyyooooooooobbbbbbbbb"
        );
        assert_eq!(
            CubeReading::solved().facelet_string(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn test_state_string_round_trip() {
        let reading = CubeReading::from_state_str(SCRAMBLED).unwrap();
        assert_eq!(reading.state_string(), SCRAMBLED);
        assert_eq!(
            reading.facelet_string(),
            "FLLRUFBFUBLDRRDBFFDDRBFURULFLULDUDRDLBRRLULDUFBUBBFRDB"
        );
        let from_facelets = CubeReading::from_state_str(&reading.facelet_string()).unwrap();
        assert_eq!(from_facelets, reading);
        assert_eq!(CubeReading::from_stickers(reading.stickers()), reading);
    }

    #[test]
    fn test_parse_matches_state_string_slices() {
        let reading = CubeReading::parse([
            "goorwgbgw",
            "boyrrybgg",
            "yyrbgwrwo",
            "gowoywyry",
            "obrrowoyw",
            "gbwbbgryb",
        ])
        .unwrap();
        assert_eq!(reading.state_string(), SCRAMBLED);
        assert_eq!(reading.face(FaceLabel::Front).to_string(), "yyrbgwrwo");
    }

    #[test]
    fn test_state_length_is_checked() {
        assert_eq!(
            CubeReading::from_state_str("wwww"),
            Err(InputError::WrongStateLength { len: 4 })
        );
    }

    #[test]
    fn test_parse_reports_first_bad_face() {
        let result = CubeReading::parse([
            "wwwwwwwww",
            "rrrrrrrrr",
            "gggggggg",
            "yyyyyyyyy",
            "ooooooooo",
            "bbbbbbbbb",
        ]);
        assert_eq!(
            result,
            Err(InputError::WrongLength {
                face: FaceLabel::Front,
                len: 8
            })
        );
    }

    #[test]
    fn test_solved_counts_are_valid() {
        let reading = CubeReading::solved();
        assert_eq!(reading.color_counts(), [9; 6]);
        assert_eq!(validate_color_counts(reading.faces()), Ok(()));
    }

    #[test]
    fn test_count_error_lists_every_offending_color() {
        let reading = CubeReading::parse([
            "wwwwwwwww",
            "rrrrrrrrr",
            "gggggggww",
            "yyyyyyyyy",
            "ooooooooo",
            "bbbbbbbbb",
        ])
        .unwrap();
        let error = validate_color_counts(reading.faces()).unwrap_err();
        assert_eq!(
            error.mismatches,
            vec![
                ColorCount {
                    color: Color::White,
                    actual: 11
                },
                ColorCount {
                    color: Color::Green,
                    actual: 7
                },
            ]
        );
        insta::assert_snapshot!(
            error.to_string(),
            @"wrong sticker counts: 'w' appears 11 times, 'g' appears 7 times (expected 9 each)"
        );
    }

    #[test]
    fn test_counts_are_rotation_invariant() {
        let reading = CubeReading::from_state_str(SCRAMBLED).unwrap();
        for rotations in [[0; 6], [1, 2, 3, 0, 1, 2], [3, 3, 3, 3, 3, 3]] {
            let rotated = reading.rotated(rotations);
            assert_eq!(rotated.color_counts(), reading.color_counts());
            assert_eq!(
                validate_color_counts(rotated.faces()),
                validate_color_counts(reading.faces())
            );
        }
    }

    #[test]
    fn test_extract_pieces_of_solved_cube_is_the_inventory() {
        let pieces = extract_pieces(CubeReading::solved().faces()).unwrap();
        assert_eq!(pieces.corners, canonical_corners());
        assert_eq!(pieces.edges, canonical_edges());
    }

    #[test]
    fn test_extract_pieces_of_scrambled_cube_is_the_inventory() {
        let reading = CubeReading::from_state_str(SCRAMBLED).unwrap();
        let pieces = extract_pieces(reading.faces()).unwrap();
        assert_eq!(pieces.corners, canonical_corners());
        assert_eq!(pieces.edges, canonical_edges());
    }

    #[test]
    fn test_extract_pieces_reports_opposite_colors() {
        // the URF corner gets a blue sticker next to its green one
        let mut stickers = CubeReading::solved().stickers();
        stickers.swap(8, 46);
        let reading = CubeReading::from_stickers(stickers);
        assert_eq!(
            extract_pieces(reading.faces()),
            Err(PieceError::DuplicateOrImpossible {
                location: PieceLocation::Corner(Corner::Urf),
                piece: Piece::corner(Color::Blue, Color::Red, Color::Green),
            })
        );
    }

    #[test]
    fn test_extract_pieces_reports_duplicate_colors() {
        // give the UF edge a second green sticker
        let mut stickers = CubeReading::solved().stickers();
        stickers.swap(7, 21);
        let reading = CubeReading::from_stickers(stickers);
        let error = extract_pieces(reading.faces()).unwrap_err();
        assert_eq!(error.to_string(), "UF edge has impossible colors 'gg'");
    }

    #[test]
    fn test_format_net() {
        let reading = CubeReading::from_state_str(SCRAMBLED).unwrap();
        let expected = concat!(
            "    goo\n",
            "    rwg\n",
            "    bgw\n",
            "obr yyr boy gbw\n",
            "row bgw rry bbg\n",
            "oyw rwo bgg ryb\n",
            "    gow\n",
            "    oyw\n",
            "    yry\n",
        );
        assert_eq!(reading.format_net(), expected);
    }
}
