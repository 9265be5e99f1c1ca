//! Error types used throughout the crate.

use crate::scene::{ChoiceId, SceneId};

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while loading a scene graph.
///
/// All of these are configuration errors: they can only occur at load time,
/// and a process must not start with a graph that fails to load. Nothing in
/// the runtime path produces a `GraphError`.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The content definition contains no scenes.
    #[error("content definition has no scenes")]
    Empty,

    /// Two scenes share the same id.
    #[error("duplicate scene id: \"{0}\"")]
    DuplicateScene(SceneId),

    /// Two choices within one scene share the same id.
    #[error("duplicate choice id \"{choice}\" in scene \"{scene}\"")]
    DuplicateChoice {
        /// Owning scene.
        scene: SceneId,
        /// The colliding choice id.
        choice: ChoiceId,
    },

    /// A choice targets a scene id that does not exist in the graph.
    #[error("choice \"{choice}\" in scene \"{scene}\" targets unknown scene \"{target}\"")]
    UnknownTarget {
        /// Owning scene.
        scene: SceneId,
        /// The dangling choice.
        choice: ChoiceId,
        /// The unresolved target id.
        target: SceneId,
    },

    /// The designated entry scene does not exist in the graph.
    #[error("entry scene not found: \"{0}\"")]
    UnknownEntry(SceneId),

    /// The content definition could not be parsed.
    #[error("invalid content definition: {0}")]
    Content(#[from] serde_json::Error),
}
