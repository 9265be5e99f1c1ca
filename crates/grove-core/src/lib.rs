//! Core types for Grove: scenes, choices, effects, and the scene graph.
//!
//! This crate defines the immutable narrative content model. A [`SceneGraph`]
//! is validated once at load time and read-only afterwards — it can be shared
//! freely across player sessions. Session state and action resolution live in
//! `grove-session`; this crate knows nothing about players.

/// The built-in "Whispering Grove" narrative arc.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// The validated scene graph and scene rendering.
pub mod graph;
/// Scene, choice, and effect types.
pub mod scene;

/// Re-export error types.
pub use error::{GraphError, GraphResult};
/// Re-export the graph and its closing prompt.
pub use graph::{CLOSING_PROMPT, SceneGraph};
/// Re-export content model types.
pub use scene::{Choice, ChoiceId, Effect, Scene, SceneId};
