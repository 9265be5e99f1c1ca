pub mod check;
pub mod export;
pub mod list;
pub mod play;
pub mod show;

use std::path::Path;

use grove_core::{SceneGraph, content};

/// Load and validate a content definition, or fall back to the built-in
/// world when no file is given.
fn load_graph(content_path: Option<&Path>) -> Result<SceneGraph, String> {
    match content_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            SceneGraph::from_json(&json).map_err(|e| e.to_string())
        }
        None => Ok(content::whispering_grove()),
    }
}
