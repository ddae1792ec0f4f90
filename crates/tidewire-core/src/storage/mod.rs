//! Persistence layer
//!
//! File-backed storage for user-defined AI modes.

pub mod modes;

pub use modes::ModeStore;
