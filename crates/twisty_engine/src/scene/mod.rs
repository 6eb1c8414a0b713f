//! Scene host binding
//!
//! The rendering collaborator is external to this engine: at construction it
//! receives the cubie and pivot nodes once, and afterwards it only reads
//! finished world transforms through the grid's read-only view each frame.
//! The trait keeps that seam pluggable; headless hosts and tests use
//! [`NullSceneHost`].

use crate::cube::grid::CubieKey;
use crate::foundation::math::Transform;

/// Renderable-scene handle consumed once at session construction
pub trait SceneHost {
    /// A cubie node was created with the given initial world transform
    fn add_cubie(&mut self, key: CubieKey, transform: &Transform);

    /// The transient pivot node was created (always at identity)
    fn add_pivot(&mut self, transform: &Transform);
}

/// Scene host that ignores all registrations
#[derive(Debug, Default)]
pub struct NullSceneHost;

impl SceneHost for NullSceneHost {
    fn add_cubie(&mut self, _key: CubieKey, _transform: &Transform) {}

    fn add_pivot(&mut self, _transform: &Transform) {}
}
