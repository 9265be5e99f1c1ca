//! The validated scene graph and scene rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::scene::{Scene, SceneId};

/// The fixed prompt every rendered view ends with.
///
/// The hosting layer is voice-first; ending every message with the same
/// question keeps the conversational turn open for the player.
pub const CLOSING_PROMPT: &str = "What do you do?";

/// View returned for a scene id that does not resolve in the graph.
///
/// Degraded output for a stale scene pointer, not a silent success — the
/// graph never fails the caller at runtime.
const VOID_VIEW: &str = "You are in a featureless void. What do you do?";

/// Serialized shape of a content definition.
#[derive(Debug, Serialize, Deserialize)]
struct GraphDef {
    /// Entry scene id.
    entry: SceneId,
    /// Scenes in declared order.
    scenes: Vec<Scene>,
}

/// A validated, immutable graph of scenes connected by choices.
///
/// Loaded once at startup and read-only afterwards; share it across
/// sessions without synchronization. Cycles are expected — "end" choices
/// typically route back to the entry scene rather than halting.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    entry: SceneId,
    scenes: Vec<Scene>,
    index: HashMap<SceneId, usize>,
}

impl SceneGraph {
    /// Validate a content definition and build the graph.
    ///
    /// Fails if the definition is empty, a scene or choice id collides
    /// within its uniqueness scope, a choice targets an unknown scene, or
    /// the entry scene does not exist. A graph that fails here must never
    /// be used; a malformed graph is a fatal configuration error.
    pub fn load(entry: impl Into<SceneId>, scenes: Vec<Scene>) -> GraphResult<Self> {
        if scenes.is_empty() {
            return Err(GraphError::Empty);
        }

        let mut index = HashMap::with_capacity(scenes.len());
        for (i, scene) in scenes.iter().enumerate() {
            if index.insert(scene.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateScene(scene.id.clone()));
            }
        }

        for scene in &scenes {
            for (i, choice) in scene.choices.iter().enumerate() {
                if scene.choices[..i].iter().any(|c| c.id == choice.id) {
                    return Err(GraphError::DuplicateChoice {
                        scene: scene.id.clone(),
                        choice: choice.id.clone(),
                    });
                }
                if !index.contains_key(&choice.target) {
                    return Err(GraphError::UnknownTarget {
                        scene: scene.id.clone(),
                        choice: choice.id.clone(),
                        target: choice.target.clone(),
                    });
                }
            }
        }

        let entry = entry.into();
        if !index.contains_key(&entry) {
            return Err(GraphError::UnknownEntry(entry));
        }

        Ok(Self {
            entry,
            scenes,
            index,
        })
    }

    /// Parse a JSON content definition (`{ "entry": ..., "scenes": [...] }`)
    /// and load it.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let def: GraphDef = serde_json::from_str(json)?;
        Self::load(def.entry, def.scenes)
    }

    /// Serialize the graph back into a pretty-printed content definition.
    pub fn to_json(&self) -> GraphResult<String> {
        let def = GraphDef {
            entry: self.entry.clone(),
            scenes: self.scenes.clone(),
        };
        Ok(serde_json::to_string_pretty(&def)?)
    }

    /// The designated entry scene id.
    pub fn entry(&self) -> &SceneId {
        &self.entry
    }

    /// Look up a scene by id.
    pub fn get(&self, id: &SceneId) -> Option<&Scene> {
        self.index.get(id).map(|&i| &self.scenes[i])
    }

    /// All scenes in declared order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Total number of choices across all scenes.
    pub fn choice_count(&self) -> usize {
        self.scenes.iter().map(|s| s.choices.len()).sum()
    }

    /// Render the presentation text for a scene: the narrative description,
    /// one line per choice in declared order, and the closing prompt.
    ///
    /// An unknown id yields a generic fallback view rather than an error —
    /// a stale scene pointer must never crash the caller.
    pub fn describe(&self, id: &SceneId) -> String {
        let Some(scene) = self.get(id) else {
            return VOID_VIEW.to_string();
        };

        let mut out = format!("{}\n\nChoices:\n", scene.description);
        for choice in &scene.choices {
            out.push_str(&format!("- {} (say: {})\n", choice.description, choice.id));
        }
        out.push_str(&format!("\n{CLOSING_PROMPT}"));
        out
    }
}
