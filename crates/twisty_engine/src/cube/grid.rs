//! Cube grid: the 27 cubie entities and their world transforms

use crate::config::CubeConfig;
use crate::foundation::math::{utils, Transform, Vec3};
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable key identifying one cubie for the lifetime of the grid
    pub struct CubieKey;
}

/// One of the 27 unit sub-cubes composing the puzzle
///
/// The world transform is owned exclusively by the cubie and mutated only by
/// the rotation animator. Logical layer membership is never stored; it is
/// derived from the world position each time a layer is selected.
#[derive(Debug, Clone)]
pub struct Cubie {
    /// Lattice coordinate this cubie occupied in the solved state
    pub home: (i8, i8, i8),

    /// Current world-space pose
    pub transform: Transform,
}

/// Aggregate owner of the 27 cubies
///
/// Created once at initialization and mutated in place for the session's
/// lifetime. After any completed move, every cubie position lies within
/// epsilon of one of the 27 canonical grid points and every orientation is a
/// multiple of 90 degrees about each axis; [`CubeGrid::snap_all`] is the
/// mechanism that restores this after each move.
pub struct CubeGrid {
    spacing: f32,
    selection_epsilon: f32,
    cubies: SlotMap<CubieKey, Cubie>,
}

impl CubeGrid {
    /// Build the solved grid from the configured geometry
    pub fn new(config: &CubeConfig) -> Self {
        let spacing = config.spacing();
        let mut cubies = SlotMap::with_capacity_and_key(27);

        for x in -1i8..=1 {
            for y in -1i8..=1 {
                for z in -1i8..=1 {
                    let position = Vec3::new(
                        f32::from(x) * spacing,
                        f32::from(y) * spacing,
                        f32::from(z) * spacing,
                    );
                    cubies.insert(Cubie {
                        home: (x, y, z),
                        transform: Transform::from_position(position),
                    });
                }
            }
        }

        Self {
            spacing,
            selection_epsilon: config.selection_epsilon(),
            cubies,
        }
    }

    /// Grid unit: distance between adjacent layer centers
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Half-width of the layer classification band
    pub fn selection_epsilon(&self) -> f32 {
        self.selection_epsilon
    }

    /// Number of cubies in the grid
    pub fn len(&self) -> usize {
        self.cubies.len()
    }

    /// Whether the grid is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.cubies.is_empty()
    }

    /// Read-only iteration over all cubies, for rendering and selection
    pub fn cubies(&self) -> impl Iterator<Item = (CubieKey, &Cubie)> {
        self.cubies.iter()
    }

    /// Look up a single cubie
    pub fn cubie(&self, key: CubieKey) -> Option<&Cubie> {
        self.cubies.get(key)
    }

    /// Mutable cubie access, reserved for the rotation animator
    pub(crate) fn cubie_mut(&mut self, key: CubieKey) -> Option<&mut Cubie> {
        self.cubies.get_mut(key)
    }

    /// The 27 ideal grid points for the current spacing
    pub fn canonical_points(&self) -> Vec<Vec3> {
        let mut points = Vec::with_capacity(27);
        for x in -1i8..=1 {
            for y in -1i8..=1 {
                for z in -1i8..=1 {
                    points.push(Vec3::new(
                        f32::from(x) * self.spacing,
                        f32::from(y) * self.spacing,
                        f32::from(z) * self.spacing,
                    ));
                }
            }
        }
        points
    }

    /// Drift correction: snap every cubie back onto the ideal grid
    ///
    /// Positions are rounded to the nearest lattice point and orientations to
    /// the nearest quarter-turn-aligned rotation. Without this, float error
    /// accumulates across moves until layer selection misclassifies cubies.
    pub fn snap_all(&mut self) {
        for cubie in self.cubies.values_mut() {
            cubie.transform.position =
                utils::snap_to_lattice(&cubie.transform.position, self.spacing);
            cubie.transform.rotation = utils::snap_to_quarter_turn(&cubie.transform.rotation);
        }
    }

    /// Check the grid invariant: all cubies on canonical points, 90-degree aligned
    pub fn is_aligned(&self) -> bool {
        // An orientation is a multiple of 90 degrees about each axis iff it
        // maps every axis vector onto an axis vector.
        fn maps_onto_axis(v: &Vec3) -> bool {
            v.amax() > 0.999
        }

        self.cubies.values().all(|cubie| {
            let snapped = utils::snap_to_lattice(&cubie.transform.position, self.spacing);
            let position_ok =
                (cubie.transform.position - snapped).norm() < self.selection_epsilon;

            let rotation = &cubie.transform.rotation;
            let rotation_ok = maps_onto_axis(&(rotation * Vec3::x()))
                && maps_onto_axis(&(rotation * Vec3::y()));
            position_ok && rotation_ok
        })
    }
}
