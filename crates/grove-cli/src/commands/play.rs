use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use grove_session::Session;

pub fn run(content: Option<&Path>, player: Option<&str>) -> Result<(), String> {
    let graph = Arc::new(super::load_graph(content)?);
    let mut session = Session::start(graph, player);

    println!("{}", session.opening());
    println!();
    println!(
        "{}",
        "(say an action, or: look, journal, restart, quit)".dimmed()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            // EOF — end of a piped script or Ctrl-D.
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "look" => println!("{}", session.current_view()),
            "journal" => println!("{}", session.journal_report()),
            "restart" => println!("{}", session.reset()),
            _ => {
                let (text, _) = session.apply_action(input);
                println!("{text}");
            }
        }
        println!();
    }

    println!("The Grove releases you. Farewell.");
    Ok(())
}
