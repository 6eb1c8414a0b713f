//! # Twisty Engine
//!
//! A 3x3x3 twisty-cube layer rotation engine: 27 independently transformable
//! cubies, face-turn moves with smooth time-eased animation, and drift-free
//! re-snapping so layer classification stays exact after arbitrarily many
//! moves.
//!
//! The engine is single-threaded and cooperative: the host owns a
//! [`cube::CubeSession`] and drives it from its frame loop. Rendering,
//! cameras, and input are external collaborators that read finished cubie
//! transforms and listen for move completion.
//!
//! ## Quick Start
//!
//! ```rust
//! use twisty_engine::prelude::*;
//!
//! fn main() -> Result<(), CubeError> {
//!     let mut session = CubeSession::new(CubeConfig::default())?;
//!
//!     let handle = session.rotate_face("R", false, 250.0);
//!     while !handle.is_resolved() {
//!         session.update(0.016); // host frame tick, seconds
//!     }
//!     assert_eq!(handle.succeeded(), Some(true));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod cube;
pub mod foundation;
pub mod scene;

mod error;

pub use error::CubeError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, CubeConfig},
        cube::{Axis, CubeGrid, CubeSession, Cubie, CubieKey, Face, MoveHandle, MoveStatus},
        foundation::{
            math::{Quat, Transform, Vec3},
            time::Timer,
        },
        scene::{NullSceneHost, SceneHost},
        CubeError,
    };
}
