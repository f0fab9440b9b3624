//! Cube Orientation Resolver Library
//!
//! Takes six 3x3 face readings of a Rubik's cube whose slot assignment
//! (U, R, F, D, L, B) is known but whose in-plane rotation is not, and finds
//! the per-face quarter turns that make the stickers a valid cube.
//!
//! ```
//! use cube_orient::resolve_faces;
//!
//! let resolved = resolve_faces([
//!     "brggwowgo",
//!     "ggbyrryob",
//!     "rwoygwybr",
//!     "gowoywyry",
//!     "rwwboyoro",
//!     "rbgybbbgw",
//! ])
//! .unwrap();
//! assert_eq!(resolved.rotations(), [3, 2, 1, 0, 1, 3]);
//! ```

pub mod color;
pub mod cube;
pub mod error;
pub mod face;
pub mod geometry;
pub mod moves;
pub mod pieces;
pub mod solver;

pub use color::Color;
pub use cube::CubeReading;
pub use error::{CountError, InputError, OrientationError, ResolutionError};
pub use face::{rotate_face, Face, FaceLabel};
pub use pieces::is_piece_valid;
pub use solver::{
    is_orientation_valid, resolve, resolve_faces, Multiplicity, OrientationCandidate,
    ResolvedOrientation, Resolver, ResolverConfig, SearchStats, SearchStrategy,
};
