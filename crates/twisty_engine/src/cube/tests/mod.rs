//! Cross-module law tests for the rotation engine

mod rotation_laws;
