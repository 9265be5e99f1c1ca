use std::path::Path;

use colored::Colorize;

pub fn run(content: Option<&Path>, scene_id: &str) -> Result<(), String> {
    let graph = super::load_graph(content)?;

    let id = scene_id.into();
    let scene = graph
        .get(&id)
        .ok_or_else(|| format!("scene not found: \"{scene_id}\""))?;

    println!("  {} [{}]", scene.title.bold(), scene.id.as_str().dimmed());
    println!();
    for line in graph.describe(&id).lines() {
        println!("  {line}");
    }

    Ok(())
}
