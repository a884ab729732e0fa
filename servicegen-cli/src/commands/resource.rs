//! Resource generation command
//!
//! Loads the project configuration, builds the schema from the raw
//! `name:type` pairs, runs the generator, and writes the returned artifacts.
//! Generation is all-or-nothing: a schema error aborts before any file is
//! touched.

use anyhow::{Context, Result};
use console::style;
use dialoguer::Confirm;
use std::env;

use servicegen::config::ProjectConfig;
use servicegen::generator::ProjectFiles;
use servicegen::idents;
use servicegen::{FsProjectFiles, ResourceGenerator, ResourceSchema};

/// Generate the artifact set for one resource
pub struct ResourceCommand {
    name: String,
    attributes: Vec<String>,
    force: bool,
}

impl ResourceCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(name: String, attributes: Vec<String>, force: bool) -> Self {
        Self {
            name,
            attributes,
            force,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails on a missing project configuration, an invalid schema, or a
    /// failed file write.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {} {}",
            style("Generating resource").cyan().bold(),
            style(&self.name).green().bold(),
            style("...").cyan().bold()
        );

        let project_root = env::current_dir().context("Failed to get current directory")?;

        let config = ProjectConfig::load(&project_root).context(
            "No project configuration found. Run this command inside a project created \
             with `servicegen new`, or set SERVICEGEN_PROJECT_NAME.",
        )?;

        let schema = ResourceSchema::parse(&self.name, &self.attributes, &config.project_name)?;
        let generator = ResourceGenerator::new(schema)?;

        let store = FsProjectFiles::new(&project_root);
        let artifacts = generator
            .generate(&store)
            .context("Failed to generate resource artifacts")?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            artifacts.len()
        );

        for artifact in &artifacts {
            let full_path = store.resolve(&artifact.path);
            if full_path.exists() && !self.force {
                let overwrite = Confirm::new()
                    .with_prompt(format!("{} already exists. Overwrite?", artifact.path.display()))
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;
                if !overwrite {
                    println!(
                        "  {} {} (skipped)",
                        style("-").yellow(),
                        style(artifact.path.display()).dim()
                    );
                    continue;
                }
            }

            store
                .write_file(&artifact.path, &artifact.content)
                .with_context(|| format!("Failed to write file: {}", artifact.path.display()))?;

            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(artifact.path.display()).dim(),
                style(&artifact.description).dim()
            );
        }

        self.print_next_steps();

        Ok(())
    }

    fn print_next_steps(&self) {
        let table = idents::storage_ident(&self.name);

        println!(
            "\n{} Resource {} is ready!",
            style("✨").green().bold(),
            style(&self.name).green().bold()
        );
        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Add to mapper/mod.rs: {}",
            style(format!("pub mod {table}_mapper;")).yellow()
        );
        println!(
            "  2. Add to handler/mod.rs: {}",
            style(format!("pub mod {table}_handler;")).yellow()
        );
        println!(
            "  3. Merge the routes: {}",
            style(format!(".merge({table}_handler::routes())")).yellow()
        );
        println!(
            "  4. Apply the migration in {}",
            style("database/ddl/").yellow()
        );
    }
}
