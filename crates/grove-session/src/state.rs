//! Per-session mutable state.

use chrono::{DateTime, Utc};
use grove_core::{ChoiceId, SceneId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded move between scenes. Append-only; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Scene the player was in.
    pub from: SceneId,
    /// The resolved choice id.
    pub action: ChoiceId,
    /// Scene the choice led to.
    pub to: SceneId,
    /// When the transition was taken.
    pub at: DateTime<Utc>,
}

/// The full mutable record of one player's progress through the graph.
///
/// Created when a player starts or restarts an adventure; mutated only by
/// the transition engine; serializable so a host can persist and restore
/// it across process lifetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Player display name, if given.
    pub player_name: Option<String>,
    /// Current scene pointer. Valid in the owning graph after every
    /// engine-driven mutation.
    pub current_scene: SceneId,
    /// Transition history, oldest first.
    pub history: Vec<Transition>,
    /// Journal lines, in the order effects appended them.
    pub journal: Vec<String>,
    /// Inventory item names. A log, not a set — duplicates are kept.
    pub inventory: Vec<String>,
    /// Every resolved choice id, in order.
    pub choices_made: Vec<ChoiceId>,
    /// Opaque per-session id, regenerated on reset.
    pub session_id: String,
    /// When this session (or its latest reset) began.
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    /// Fresh state at the given entry scene: empty journal, inventory, and
    /// history, new session id and timestamp. Each call yields an
    /// independent state.
    pub fn new(entry: SceneId, player_name: Option<String>) -> Self {
        Self {
            player_name,
            current_scene: entry,
            history: Vec::new(),
            journal: Vec::new(),
            inventory: Vec::new(),
            choices_made: Vec::new(),
            session_id: short_session_id(),
            started_at: Utc::now(),
        }
    }
}

/// First 8 hex chars of a v4 uuid — plenty for a per-process session label.
fn short_session_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
