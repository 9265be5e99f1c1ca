//! CLI frontend for the Grove branching-narrative engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "grove",
    about = "Grove — a branching narrative engine for voice-first adventures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure at an interactive prompt
    Play {
        /// Player name used in the greeting
        #[arg(short, long)]
        player: Option<String>,

        /// JSON content definition (default: the built-in Whispering Grove)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Validate a content definition and report its shape
    Check {
        /// JSON content definition (default: the built-in Whispering Grove)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// List the scenes in a content definition
    List {
        /// JSON content definition (default: the built-in Whispering Grove)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Render one scene the way a player would hear it
    Show {
        /// Scene id (e.g. intro)
        scene: String,

        /// JSON content definition (default: the built-in Whispering Grove)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Print the content definition as pretty JSON
    Export {
        /// JSON content definition (default: the built-in Whispering Grove)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { player, content } => {
            commands::play::run(content.as_deref(), player.as_deref())
        }
        Commands::Check { content } => commands::check::run(content.as_deref()),
        Commands::List { content } => commands::list::run(content.as_deref()),
        Commands::Show { scene, content } => commands::show::run(content.as_deref(), &scene),
        Commands::Export { content } => commands::export::run(content.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
