//! Domain model for area checks.
//!
//! # Responsibility
//! - Define submitted point shapes and their validation rules.
//! - Define the hit-test over the composite target area.
//! - Define the immutable result record shared by storage and history.
//!
//! # Invariants
//! - A result record never exists for an unvalidated point.
//! - Hit classification is a pure function of `(x, y, r)`.

pub mod area;
pub mod point;
pub mod result;
