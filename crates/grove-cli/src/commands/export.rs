use std::path::Path;

pub fn run(content: Option<&Path>) -> Result<(), String> {
    let graph = super::load_graph(content)?;
    let json = graph.to_json().map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
