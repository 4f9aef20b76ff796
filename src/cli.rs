// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mru")]
#[command(about = "Keeps a local Minecraft mod folder in sync with Modrinth")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search mods on Modrinth
    Search {
        /// Free-text search query
        query: Vec<String>,
    },
    /// Register mods by project ID and install them
    Install {
        /// Project IDs from Modrinth
        mods: Vec<String>,
        /// Skip the compatibility check and take the newest release
        #[arg(short, long)]
        force: bool,
    },
    /// Re-resolve and (re)download all registered mods
    Update,
    /// List registered mods and their installed versions
    List {
        /// Also print file names and descriptions
        #[arg(short, long)]
        verbose: bool,
    },
    /// Create a mods.json config in the current directory
    #[command(name = "initlocal")]
    InitLocal,
}
