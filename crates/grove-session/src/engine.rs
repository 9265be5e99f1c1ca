//! The transition engine driving one session.
//!
//! Orchestrates one resolution cycle: resolve the input, apply the chosen
//! choice's effects, record the transition, advance the scene pointer, and
//! render the next view. Every returned string is speakable prose ending in
//! the fixed closing prompt, so the hosting voice layer can hand it
//! straight to speech synthesis.

use std::sync::Arc;

use chrono::Utc;
use grove_core::{CLOSING_PROMPT, ChoiceId, Effect, SceneGraph, SceneId};

use crate::resolver::resolve;
use crate::state::{SessionState, Transition};

/// How many trailing transitions the journal report shows.
const RECENT_TRANSITIONS: usize = 6;

/// What a call to [`Session::apply_action`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Input resolved; effects applied and the scene advanced.
    Advanced {
        /// The resolved choice id.
        choice: ChoiceId,
        /// Scene the session was in.
        from: SceneId,
        /// Scene the session is in now.
        to: SceneId,
    },
    /// No tier matched; nothing was mutated.
    Unresolved,
}

/// One player's session: shared read-only content plus private state.
///
/// Nothing here is fatal once the graph has loaded — every runtime
/// condition degrades to a textual response.
pub struct Session {
    graph: Arc<SceneGraph>,
    state: SessionState,
}

impl Session {
    /// Start a fresh session at the graph's entry scene.
    pub fn start(graph: Arc<SceneGraph>, player_name: Option<&str>) -> Self {
        let state = SessionState::new(graph.entry().clone(), player_name.map(str::to_string));
        Self { graph, state }
    }

    /// Rebuild a session from previously persisted state.
    ///
    /// A stale scene pointer is accepted; it degrades to the fallback view
    /// on the next render instead of failing the restore.
    pub fn restore(graph: Arc<SceneGraph>, state: SessionState) -> Self {
        Self { graph, state }
    }

    /// The session's state, read-only. Mutation goes through
    /// [`Session::apply_action`] and [`Session::reset`].
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The shared content graph.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Surrender the state, e.g. for host-side persistence.
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Greeting plus the opening scene view.
    pub fn opening(&self) -> String {
        let name = self.state.player_name.as_deref().unwrap_or("traveler");
        let title = self
            .graph
            .get(self.graph.entry())
            .map(|scene| scene.title.as_str())
            .unwrap_or("the Grove");
        with_prompt(format!(
            "Greetings {name}. Welcome to '{title}'.\n\n{}",
            self.graph.describe(self.graph.entry())
        ))
    }

    /// Render the current scene. Read-only; useful for "remind me where I
    /// am".
    pub fn current_view(&self) -> String {
        self.graph.describe(&self.state.current_scene)
    }

    /// Resolve one player utterance and advance the session.
    ///
    /// Unresolved input returns a clarification echoing the current view
    /// and mutates nothing — no history entry, no scene change. Resolved
    /// input applies effects in declared order, records the transition,
    /// logs the choice, moves the scene pointer, and acknowledges the
    /// action before the new view. The returned text always ends with the
    /// closing prompt.
    pub fn apply_action(&mut self, raw: &str) -> (String, ActionOutcome) {
        // A missing current scene should not happen after load-time
        // validation; it falls through to the unresolved path over zero
        // choices.
        let chosen = self.graph.get(&self.state.current_scene).and_then(|scene| {
            let id = resolve(&scene.choices, raw)?;
            scene.choice(id).cloned()
        });

        let Some(choice) = chosen else {
            let text = with_prompt(format!(
                "I didn't quite catch that action for this situation. Try one of the \
                 listed choices or a simple phrase like 'follow the trail'.\n\n{}",
                self.current_view()
            ));
            return (text, ActionOutcome::Unresolved);
        };

        for effect in &choice.effects {
            match effect {
                Effect::AppendJournal(text) => self.state.journal.push(text.clone()),
                Effect::AppendInventory(item) => self.state.inventory.push(item.clone()),
            }
        }

        let from = std::mem::replace(&mut self.state.current_scene, choice.target.clone());
        self.state.history.push(Transition {
            from: from.clone(),
            action: choice.id.clone(),
            to: choice.target.clone(),
            at: Utc::now(),
        });
        self.state.choices_made.push(choice.id.clone());

        let text = with_prompt(format!(
            "You chose '{}'.\n\n{}",
            choice.id,
            self.current_view()
        ));
        (
            text,
            ActionOutcome::Advanced {
                choice: choice.id,
                from,
                to: choice.target,
            },
        )
    }

    /// Format the session id, start time, player, journal, inventory, and
    /// the most recent transitions. Read-only and deterministic for a given
    /// state.
    pub fn journal_report(&self) -> String {
        let state = &self.state;
        let mut lines = vec![format!(
            "Session: {} | Started at: {}",
            state.session_id,
            state.started_at.to_rfc3339()
        )];
        if let Some(name) = &state.player_name {
            lines.push(format!("Player: {name}"));
        }

        if state.journal.is_empty() {
            lines.push("\nJournal is empty.".to_string());
        } else {
            lines.push("\nJournal entries:".to_string());
            for entry in &state.journal {
                lines.push(format!("- {entry}"));
            }
        }

        if state.inventory.is_empty() {
            lines.push("\nNo items in inventory.".to_string());
        } else {
            lines.push("\nInventory:".to_string());
            for item in &state.inventory {
                lines.push(format!("- {item}"));
            }
        }

        lines.push("\nRecent choices:".to_string());
        let skip = state.history.len().saturating_sub(RECENT_TRANSITIONS);
        for t in &state.history[skip..] {
            lines.push(format!(
                "- {} | from {} -> {} via {}",
                t.at.to_rfc3339(),
                t.from,
                t.to,
                t.action
            ));
        }

        lines.push(format!("\n{CLOSING_PROMPT}"));
        lines.join("\n")
    }

    /// Destructive full reset: fresh state at the entry scene, keeping the
    /// player's name, with a new session id and timestamp.
    pub fn reset(&mut self) -> String {
        self.state = SessionState::new(
            self.graph.entry().clone(),
            self.state.player_name.take(),
        );
        with_prompt(format!(
            "The world resets. A new tide laps at the shore. You stand once more at \
             the beginning.\n\n{}",
            self.current_view()
        ))
    }
}

/// Append the closing prompt unless the text already ends with it.
fn with_prompt(text: String) -> String {
    if text.ends_with(CLOSING_PROMPT) {
        text
    } else {
        format!("{text}\n{CLOSING_PROMPT}")
    }
}
