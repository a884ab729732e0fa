//! Project scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use servicegen::project::{ProjectTemplate, PROJECT_DIRS};
use servicegen::FsProjectFiles;

/// Create a new service project
pub struct NewCommand {
    name: String,
    output_dir: PathBuf,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Project name (must be a valid Rust crate name)
    ///
    /// # Errors
    ///
    /// Fails when the name is invalid or the directory already exists.
    pub fn new(name: String) -> Result<Self> {
        if !is_valid_crate_name(&name) {
            anyhow::bail!(
                "Invalid project name: {name}. Must be a valid Rust crate name (lowercase, alphanumeric, hyphens, underscores)"
            );
        }

        let output_dir = PathBuf::from(&name);

        if output_dir.exists() {
            anyhow::bail!(
                "Directory '{name}' already exists. Please choose a different name or remove the existing directory."
            );
        }

        Ok(Self { name, output_dir })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails when directory creation or file generation fails.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {} {}",
            style("Creating").green().bold(),
            style("service project:").bold(),
            style(&self.name).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Creating project structure...");
        self.create_structure()?;

        spinner.set_message("Generating project files...");
        let files = FsProjectFiles::new(&self.output_dir);
        ProjectTemplate::new(&self.name)
            .generate(&files)
            .context("Failed to generate project files")?;

        spinner.finish_and_clear();

        self.print_success();

        Ok(())
    }

    /// Create directory structure
    fn create_structure(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create directory: {}", self.output_dir.display()))?;

        for dir in PROJECT_DIRS {
            let path = self.output_dir.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!("{}", style("✓ Project created successfully!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cd {}", self.name)).cyan()
        );
        println!();
        println!("  {} Generate your first resource:", style("2.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("servicegen resource Book Title:string Published:timestamp").cyan()
        );
        println!();
        println!("  {} Build the service:", style("3.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("cargo build").cyan()
        );
        println!();
    }
}

/// Validate that a string is a valid Rust crate name
fn is_valid_crate_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    // Must start with letter or underscore
    let first_char = name.chars().next().unwrap();
    if !first_char.is_ascii_lowercase() && first_char != '_' {
        return false;
    }

    // All characters must be alphanumeric, underscore, or hyphen
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
