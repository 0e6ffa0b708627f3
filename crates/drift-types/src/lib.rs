//! Type term model for the drift inference engine.
//!
//! - [`ty`]: the `Ty` enum (base types, unification variables, function
//!   arrows) and its `Display` pretty-printer.

pub mod ty;

pub use ty::Ty;
