//! Scene, choice, and effect types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a scene, unique within a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Create a scene id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a choice, unique within its owning scene.
///
/// Choice ids double as the "short code" a player can speak or type, so
/// content uses snake_case words (`follow_trail`, `grab_lantern`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(String);

impl ChoiceId {
    /// Create a choice id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChoiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChoiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A state mutation applied when a choice is taken.
///
/// New effect kinds extend this enum; the resolution and transition
/// contracts do not change when variants are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Append a line of text to the session journal.
    #[serde(rename = "add_journal")]
    AppendJournal(String),
    /// Append an item name to the session inventory.
    #[serde(rename = "add_inventory")]
    AppendInventory(String),
}

/// A labeled edge from one scene to another, optionally carrying effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice id, unique within the owning scene.
    pub id: ChoiceId,
    /// Human-readable description shown to the player.
    pub description: String,
    /// Scene the choice leads to.
    pub target: SceneId,
    /// Effects applied, in order, when the choice is taken.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl Choice {
    /// Create a choice with no effects.
    pub fn new(
        id: impl Into<ChoiceId>,
        description: impl Into<String>,
        target: impl Into<SceneId>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            target: target.into(),
            effects: Vec::new(),
        }
    }

    /// Append an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// A node in the narrative graph: descriptive text plus its choices.
///
/// Choice declaration order is part of the contract — it is the tie-break
/// order the action resolver scans in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene id, unique within the graph.
    pub id: SceneId,
    /// Display title.
    pub title: String,
    /// Narrative description read to the player.
    pub description: String,
    /// Choices in declared order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices.
    pub fn new(
        id: impl Into<SceneId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Look up a choice by id, scanning in declared order.
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_builder() {
        let choice = Choice::new("grab_lantern", "Take the lantern and leave.", "intro")
            .with_effect(Effect::AppendInventory("lantern".to_string()));

        assert_eq!(choice.id.as_str(), "grab_lantern");
        assert_eq!(choice.target, SceneId::new("intro"));
        assert_eq!(
            choice.effects,
            vec![Effect::AppendInventory("lantern".to_string())]
        );
    }

    #[test]
    fn scene_choice_lookup_in_order() {
        let scene = Scene::new("intro", "The Grove", "Trees.")
            .with_choice(Choice::new("a", "First.", "intro"))
            .with_choice(Choice::new("b", "Second.", "intro"));

        assert_eq!(scene.choice(&"b".into()).unwrap().description, "Second.");
        assert!(scene.choice(&"c".into()).is_none());
        let ids: Vec<&str> = scene.choices.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn effect_serde_uses_content_tags() {
        let effect = Effect::AppendInventory("lantern".to_string());
        let json = serde_json::to_string(&effect).unwrap();
        assert_eq!(json, r#"{"add_inventory":"lantern"}"#);

        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);

        let journal: Effect = serde_json::from_str(r#"{"add_journal":"A note."}"#).unwrap();
        assert_eq!(journal, Effect::AppendJournal("A note.".to_string()));
    }

    #[test]
    fn choice_serde_defaults_effects() {
        let json = r#"{"id":"x","description":"Do x.","target":"intro"}"#;
        let choice: Choice = serde_json::from_str(json).unwrap();
        assert!(choice.effects.is_empty());
    }
}
