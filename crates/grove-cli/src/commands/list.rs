use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(content: Option<&Path>) -> Result<(), String> {
    let graph = super::load_graph(content)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Title", "Choices"]);

    for scene in graph.scenes() {
        let choices: Vec<&str> = scene.choices.iter().map(|c| c.id.as_str()).collect();
        let choices = if choices.is_empty() {
            "—".to_string()
        } else {
            choices.join(", ")
        };
        table.add_row(vec![scene.id.as_str(), scene.title.as_str(), choices.as_str()]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} scenes, entry '{}'",
        graph.scene_count(),
        graph.entry()
    );

    Ok(())
}
