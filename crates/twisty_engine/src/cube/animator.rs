//! Pivot rotation animator
//!
//! Rotates a selected layer as a rigid unit: the cubies are regrouped under a
//! transient pivot with world pose preserved, the pivot is driven through an
//! eased quarter turn from the host's per-frame tick, and on completion the
//! cubies are released back to the grid root and snapped onto the ideal
//! lattice. The animator advances only inside [`PivotRotationAnimator::update`]
//! and reports its status instead of rescheduling itself, so the whole state
//! machine is drivable from tests without a frame loop.

use crate::cube::grid::{CubeGrid, CubieKey};
use crate::cube::notation::MoveSpec;
use crate::foundation::math::{constants::HALF_PI, utils, Quat, Transform};

/// Result of advancing the animator by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// No move in flight
    Idle,
    /// A move is animating; call `update` again next frame
    Running,
    /// The move just completed and the grid has been re-snapped
    Finished,
}

/// One in-flight layer rotation
struct ActiveMove {
    spec: MoveSpec,
    duration_secs: f32,
    progress: f32,
    /// Grouped cubies with their compensating pivot-local transforms
    members: Vec<(CubieKey, Transform)>,
}

/// Animates one layer rotation at a time around a reusable pivot
///
/// The pivot has no persistent identity: it is reset to identity before each
/// move begins and after each move completes, and nothing outside this
/// animator ever observes it mid-move.
pub struct PivotRotationAnimator {
    pivot: Transform,
    active: Option<ActiveMove>,
}

impl Default for PivotRotationAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PivotRotationAnimator {
    /// Create an idle animator
    pub fn new() -> Self {
        Self {
            pivot: Transform::identity(),
            active: None,
        }
    }

    /// Whether no move is currently in flight
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Group a layer under the pivot and start the rotation
    ///
    /// Returns `false` without touching any state if a move is already in
    /// flight; moves are never queued, only refused. Each member's local
    /// transform is computed against the freshly reset pivot so the reparent
    /// leaves every world pose bit-identical.
    pub fn begin(
        &mut self,
        grid: &CubeGrid,
        spec: MoveSpec,
        duration_ms: f32,
        members: &[CubieKey],
    ) -> bool {
        if self.active.is_some() {
            return false;
        }

        self.pivot = Transform::identity();
        let members = members
            .iter()
            .filter_map(|&key| {
                grid.cubie(key)
                    .map(|cubie| (key, cubie.transform.local_to(&self.pivot)))
            })
            .collect();

        self.active = Some(ActiveMove {
            spec,
            duration_secs: (duration_ms / 1000.0).max(0.0),
            progress: 0.0,
            members,
        });
        true
    }

    /// Advance the animation by one frame of wall-clock time
    ///
    /// Progress is accumulated from elapsed time, not frame count, so the
    /// configured duration holds under variable frame rates. Each call
    /// re-derives every grouped cubie's world transform from the pivot, so
    /// the grid's read-only view is always current for rendering. When
    /// progress reaches 1 the pivot is set to the exact quarter-turn target
    /// (discarding any eased-curve rounding error), the cubies are released,
    /// and the grid-wide drift correction runs.
    pub fn update(&mut self, grid: &mut CubeGrid, delta_time: f32) -> AnimationStatus {
        let Some(active) = self.active.as_mut() else {
            return AnimationStatus::Idle;
        };

        if active.duration_secs > 0.0 {
            active.progress = (active.progress + delta_time / active.duration_secs).clamp(0.0, 1.0);
        } else {
            active.progress = 1.0;
        }

        let finished = active.progress >= 1.0;
        let eased = if finished {
            1.0
        } else {
            utils::ease_out_cubic(active.progress)
        };

        // Only the move's axis component is ever driven; the other two stay zero.
        let angle = HALF_PI * active.spec.direction * eased;
        self.pivot.rotation = Quat::from_axis_angle(&active.spec.axis.unit(), angle);

        for (key, local) in &active.members {
            if let Some(cubie) = grid.cubie_mut(*key) {
                cubie.transform = self.pivot.combine(local);
            }
        }

        if finished {
            self.active = None;
            self.pivot = Transform::identity();
            grid.snap_all();
            AnimationStatus::Finished
        } else {
            AnimationStatus::Running
        }
    }
}
