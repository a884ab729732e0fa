//! servicegen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{NewCommand, ResourceCommand};

#[derive(Parser)]
#[command(name = "servicegen")]
#[command(version)]
#[command(about = "Scaffold CRUD services and generate resource artifacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new service project
    New {
        /// Project name (must be a valid crate name)
        name: String,
    },
    /// Generate the artifacts for one resource
    ///
    /// Examples:
    ///   servicegen resource Book Title:string Published:timestamp
    ///   servicegen resource Account Balance:int Active:bool
    Resource {
        /// Resource name (e.g. `Book`, `UserProfile`)
        name: String,
        /// Attribute definitions as name:type pairs
        ///
        /// Supported types: int, string, bool, timestamp
        #[arg(required = false, value_name = "NAME:TYPE")]
        attributes: Vec<String>,
        /// Overwrite existing artifact files without asking
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { name } => {
            let cmd = NewCommand::new(name)?;
            cmd.execute()?;
        }
        Commands::Resource {
            name,
            attributes,
            force,
        } => {
            let cmd = ResourceCommand::new(name, attributes, force);
            cmd.execute()?;
        }
    }

    Ok(())
}
