//! Layer selection by world position
//!
//! Layer membership is never cached: every selection classifies cubies by
//! their current world position, so correctness depends on the drift
//! correction that runs at the end of every move.

use crate::cube::grid::{CubeGrid, CubieKey};
use crate::cube::notation::Axis;

/// Number of cubies in any face layer of a 3x3x3 cube
pub const LAYER_SIZE: usize = 9;

/// Select the cubies currently occupying a layer
///
/// A cubie belongs to the layer iff its world coordinate along `axis` lies
/// within the selection epsilon of `layer * spacing`. Requires the grid
/// invariant (snapped positions); under it, any layer in {-1, 0, 1} yields
/// exactly [`LAYER_SIZE`] keys, and an out-of-range layer yields none.
pub fn select(grid: &CubeGrid, axis: Axis, layer: i8) -> Vec<CubieKey> {
    let target = f32::from(layer) * grid.spacing();
    let epsilon = grid.selection_epsilon();
    let component = axis.index();

    grid.cubies()
        .filter(|(_, cubie)| (cubie.transform.position[component] - target).abs() < epsilon)
        .map(|(key, _)| key)
        .collect()
}
