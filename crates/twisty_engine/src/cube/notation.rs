//! Face-turn notation
//!
//! Translates standard single-letter face names into rotation parameters.
//! The sign table in [`resolve`] is the single source of truth for the
//! mapping between "clockwise looking at the face" and the right-hand-rule
//! rotation sign about the axis; nothing else in the engine re-derives it.

use crate::foundation::math::{Unit, Vec3};

/// World axis of a layer rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis (left/right layers)
    X,
    /// Y axis (bottom/top layers)
    Y,
    /// Z axis (back/front layers)
    Z,
}

impl Axis {
    /// Component index: 0 = X, 1 = Y, 2 = Z
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Unit<Vec3> {
        match self {
            Axis::X => Vec3::x_axis(),
            Axis::Y => Vec3::y_axis(),
            Axis::Z => Vec3::z_axis(),
        }
    }
}

/// One of the six faces of the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Right face (+X)
    R,
    /// Left face (-X)
    L,
    /// Up face (+Y)
    U,
    /// Down face (-Y)
    D,
    /// Front face (+Z)
    F,
    /// Back face (-Z)
    B,
}

impl Face {
    /// All six faces
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// Parse a single face letter, case-insensitive
    ///
    /// Anything other than one of the six face letters yields `None`; an
    /// unknown face is a no-op move request, never a panic.
    pub fn parse(token: &str) -> Option<Face> {
        let mut chars = token.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match letter.to_ascii_uppercase() {
            'R' => Some(Face::R),
            'L' => Some(Face::L),
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Parse a face token with an optional prime suffix (`"U"`, `"U'"`)
    ///
    /// Returns the face and whether the move is inverted.
    pub fn parse_token(token: &str) -> Option<(Face, bool)> {
        if let Some(stripped) = token.strip_suffix('\'') {
            Face::parse(stripped).map(|face| (face, true))
        } else {
            Face::parse(token).map(|face| (face, false))
        }
    }

    /// The face letter in standard notation
    pub fn letter(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }
}

/// Resolved parameters for one layer rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSpec {
    /// Rotation axis
    pub axis: Axis,
    /// Layer index along the axis, in {-1, 0, 1}
    pub layer: i8,
    /// Rotation sign: +1 or -1 quarter turn about the axis
    pub direction: f32,
}

/// Resolve a face and inversion flag into rotation parameters
///
/// Base directions encode that a clockwise turn viewed from outside a
/// positive face is a negative rotation under the right-hand rule, and the
/// mirror of that for negative faces. `invert` produces the prime move.
pub fn resolve(face: Face, invert: bool) -> MoveSpec {
    let (axis, layer, base_direction) = match face {
        Face::R => (Axis::X, 1, -1.0),
        Face::L => (Axis::X, -1, 1.0),
        Face::U => (Axis::Y, 1, -1.0),
        Face::D => (Axis::Y, -1, 1.0),
        Face::F => (Axis::Z, 1, -1.0),
        Face::B => (Axis::Z, -1, 1.0),
    };

    MoveSpec {
        axis,
        layer,
        direction: if invert { -base_direction } else { base_direction },
    }
}
