//! Session state machine for Grove.
//!
//! One [`Session`] per player: it holds the shared, immutable
//! [`grove_core::SceneGraph`] behind an `Arc` and one mutable
//! [`SessionState`]. Every operation is synchronous and completes without
//! blocking; a concurrent host gives each session to exactly one caller at
//! a time and needs no further locking.

/// The transition engine driving one session.
pub mod engine;
/// Multi-tier lexical action resolution.
pub mod resolver;
/// Per-session mutable state.
pub mod state;

pub use engine::{ActionOutcome, Session};
pub use resolver::resolve;
pub use state::{SessionState, Transition};
