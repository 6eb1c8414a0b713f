//! The layer rotation engine
//!
//! Components, leaf-first: the grid owns the 27 cubies; notation resolves
//! face letters into rotation parameters; the selector classifies cubies into
//! layers by world position; the animator rotates one layer rigidly around a
//! transient pivot; the sequencer serializes moves behind a busy flag and is
//! the engine's only mutating boundary.

pub mod animator;
pub mod grid;
pub mod notation;
pub mod selector;
pub mod sequencer;

pub use animator::{AnimationStatus, PivotRotationAnimator};
pub use grid::{CubeGrid, Cubie, CubieKey};
pub use notation::{resolve, Axis, Face, MoveSpec};
pub use sequencer::{CubeSession, MoveHandle, MoveStatus};

#[cfg(test)]
mod tests;
