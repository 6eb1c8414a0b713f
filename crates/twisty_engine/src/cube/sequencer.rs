//! Move sequencing and the session boundary
//!
//! [`CubeSession`] is the state struct the host owns: it bundles the grid,
//! the animator, and the busy flag, and exposes the engine's only mutating
//! entry points. At most one move is ever in flight; a move requested while
//! another is animating is refused, never queued. Everything happens on the
//! host's logical thread: the busy flag is set synchronously at acceptance
//! and cleared synchronously when ungrouping completes, so no locking exists
//! anywhere in the engine.

use crate::config::CubeConfig;
use crate::cube::animator::{AnimationStatus, PivotRotationAnimator};
use crate::cube::grid::CubeGrid;
use crate::cube::notation::{resolve, Face};
use crate::cube::selector;
use crate::error::CubeError;
use crate::foundation::math::Transform;
use crate::scene::SceneHost;
use std::cell::Cell;
use std::rc::Rc;

/// Completion state of a requested move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// The move was accepted and is still animating
    Pending,
    /// The move finished (`true`) or was refused / invalid (`false`)
    Resolved(bool),
}

/// Pollable completion channel for one move request
///
/// The single-threaded analogue of a future: resolved exactly once, either
/// immediately (refused or invalid moves) or when ungrouping completes.
/// Clones share the same underlying cell.
#[derive(Debug, Clone)]
pub struct MoveHandle {
    status: Rc<Cell<MoveStatus>>,
}

impl MoveHandle {
    fn pending() -> Self {
        Self {
            status: Rc::new(Cell::new(MoveStatus::Pending)),
        }
    }

    fn resolved(success: bool) -> Self {
        Self {
            status: Rc::new(Cell::new(MoveStatus::Resolved(success))),
        }
    }

    fn resolve(&self, success: bool) {
        if self.status.get() == MoveStatus::Pending {
            self.status.set(MoveStatus::Resolved(success));
        }
    }

    /// Current completion state
    pub fn status(&self) -> MoveStatus {
        self.status.get()
    }

    /// Whether the move has finished or been refused
    pub fn is_resolved(&self) -> bool {
        self.status.get() != MoveStatus::Pending
    }

    /// The move's outcome, once resolved
    pub fn succeeded(&self) -> Option<bool> {
        match self.status.get() {
            MoveStatus::Pending => None,
            MoveStatus::Resolved(success) => Some(success),
        }
    }
}

/// Host-owned cube session: grid, animator, and move sequencing
pub struct CubeSession {
    config: CubeConfig,
    grid: CubeGrid,
    animator: PivotRotationAnimator,
    busy: bool,
    in_flight: Option<MoveHandle>,
    observer: Option<Box<dyn FnMut()>>,
}

impl CubeSession {
    /// Create a session with a solved cube
    pub fn new(config: CubeConfig) -> Result<Self, CubeError> {
        config.validate()?;
        let grid = CubeGrid::new(&config);
        log::info!(
            "cube session initialized: {} cubies, spacing {}",
            grid.len(),
            grid.spacing()
        );

        Ok(Self {
            config,
            grid,
            animator: PivotRotationAnimator::new(),
            busy: false,
            in_flight: None,
            observer: None,
        })
    }

    /// Create a session and register its nodes with a renderable scene
    ///
    /// The host's scene receives the 27 cubie nodes and the pivot node once,
    /// here; afterwards it only ever reads finished transforms via
    /// [`CubeSession::grid`].
    pub fn with_scene_host(
        config: CubeConfig,
        host: &mut dyn SceneHost,
    ) -> Result<Self, CubeError> {
        let session = Self::new(config)?;
        for (key, cubie) in session.grid.cubies() {
            host.add_cubie(key, &cubie.transform);
        }
        host.add_pivot(&Transform::identity());
        Ok(session)
    }

    /// The session's configuration
    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    /// Read-only view of the cubies' current world transforms
    pub fn grid(&self) -> &CubeGrid {
        &self.grid
    }

    /// Whether a move is currently animating
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Request a face turn by notation letter
    ///
    /// An unrecognized face token resolves the returned handle with `false`
    /// immediately and mutates nothing; no error crosses this boundary.
    pub fn rotate_face(&mut self, face: &str, invert: bool, duration_ms: f32) -> MoveHandle {
        match Face::parse(face) {
            Some(face) => self.rotate(face, invert, duration_ms),
            None => {
                log::warn!("ignoring unrecognized face token {:?}", face);
                MoveHandle::resolved(false)
            }
        }
    }

    /// Request a face turn
    ///
    /// If another move is in flight the request is refused: the handle
    /// resolves `false` and no state changes. An accepted move's handle
    /// resolves `true` when the rotation completes and the grid has been
    /// re-snapped.
    pub fn rotate(&mut self, face: Face, invert: bool, duration_ms: f32) -> MoveHandle {
        let prime = if invert { "'" } else { "" };

        if self.busy {
            log::debug!("move {}{} refused: busy", face.letter(), prime);
            return MoveHandle::resolved(false);
        }

        let spec = resolve(face, invert);
        let members = selector::select(&self.grid, spec.axis, spec.layer);
        if members.len() != selector::LAYER_SIZE {
            let anomaly = CubeError::SelectionAnomaly {
                expected: selector::LAYER_SIZE,
                found: members.len(),
            };
            log::error!("{}", anomaly);
            debug_assert!(false, "{}", anomaly);
            return MoveHandle::resolved(false);
        }

        if !self.animator.begin(&self.grid, spec, duration_ms, &members) {
            return MoveHandle::resolved(false);
        }

        self.busy = true;
        log::debug!(
            "move {}{} accepted: {:?} layer {} over {}ms",
            face.letter(),
            prime,
            spec.axis,
            spec.layer,
            duration_ms
        );

        let handle = MoveHandle::pending();
        self.in_flight = Some(handle.clone());
        handle
    }

    /// Per-frame tick from the host's frame driver
    ///
    /// Advances the in-flight move, if any. On completion: clears the busy
    /// flag, resolves the move's handle with `true`, and fires the
    /// move-complete observer exactly once. Since moves are serial,
    /// completions trivially fire in acceptance order.
    pub fn update(&mut self, delta_time: f32) {
        if self.animator.update(&mut self.grid, delta_time) == AnimationStatus::Finished {
            self.busy = false;
            if let Some(handle) = self.in_flight.take() {
                handle.resolve(true);
            }
            if let Some(observer) = self.observer.as_mut() {
                observer();
            }
            log::debug!("move complete");
        }
    }

    /// Register the move-complete observer
    ///
    /// Fired once per successful move, with no payload; hosts use it to chain
    /// sequences or update move counters. Replaces any previous observer.
    pub fn set_move_observer(&mut self, observer: impl FnMut() + 'static) {
        self.observer = Some(Box::new(observer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn session() -> CubeSession {
        CubeSession::new(CubeConfig::default()).unwrap()
    }

    fn position_norms(session: &CubeSession) -> Vec<f32> {
        session
            .grid()
            .cubies()
            .map(|(_, c)| c.transform.position.norm())
            .collect()
    }

    #[test]
    fn test_invalid_token_resolves_false_without_mutation() {
        let mut session = session();
        let before = position_norms(&session);

        for token in ["", "Q", "rr", "1"] {
            let handle = session.rotate_face(token, false, 200.0);
            assert_eq!(handle.status(), MoveStatus::Resolved(false));
            assert!(!session.is_busy());
        }

        for (then, now) in before.iter().zip(position_norms(&session)) {
            assert_relative_eq!(*then, now, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_accepted_move_is_pending_until_complete() {
        let mut session = session();
        let handle = session.rotate_face("R", false, 100.0);

        assert_eq!(handle.status(), MoveStatus::Pending);
        assert!(session.is_busy());

        session.update(0.05);
        assert_eq!(handle.status(), MoveStatus::Pending);

        session.update(1.0);
        assert_eq!(handle.status(), MoveStatus::Resolved(true));
        assert!(!session.is_busy());
        assert!(session.grid().is_aligned());
    }

    #[test]
    fn test_busy_rejection_leaves_first_move_intact() {
        let mut session = session();
        let first = session.rotate_face("U", false, 200.0);
        session.update(0.05);

        let mid: Vec<f32> = session
            .grid()
            .cubies()
            .map(|(_, c)| c.transform.position.norm())
            .collect();

        let second = session.rotate_face("F", true, 200.0);
        assert_eq!(second.status(), MoveStatus::Resolved(false));

        // The refusal itself must not have moved anything.
        for (before, (_, cubie)) in mid.iter().zip(session.grid().cubies()) {
            assert_relative_eq!(*before, cubie.transform.position.norm(), epsilon = 1e-6);
        }

        session.update(1.0);
        assert_eq!(first.status(), MoveStatus::Resolved(true));
    }

    #[test]
    fn test_observer_fires_once_per_completed_move() {
        let counter = Rc::new(Cell::new(0u32));
        let mut session = session();
        let observed = Rc::clone(&counter);
        session.set_move_observer(move || observed.set(observed.get() + 1));

        session.rotate_face("L", false, 50.0);
        session.update(1.0);
        session.update(1.0);
        assert_eq!(counter.get(), 1);

        // Refused and invalid moves never fire the observer.
        session.rotate_face("?", false, 50.0);
        assert_eq!(counter.get(), 1);

        session.rotate_face("D", true, 50.0);
        session.update(1.0);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_prime_token_entry_point() {
        let mut session = session();
        let (face, invert) = Face::parse_token("B'").unwrap();
        let handle = session.rotate(face, invert, 50.0);
        session.update(1.0);
        assert_eq!(handle.status(), MoveStatus::Resolved(true));
    }
}
