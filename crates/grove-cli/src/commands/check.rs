use std::path::Path;

pub fn run(content: Option<&Path>) -> Result<(), String> {
    let graph = super::load_graph(content)?;

    println!("  All checks passed. Entry scene: '{}'.", graph.entry());
    println!(
        "  {} scenes, {} choices",
        graph.scene_count(),
        graph.choice_count()
    );

    Ok(())
}
