//! New-project scaffolding
//!
//! Renders the fixed project skeleton (entry point, root mapper and handler
//! modules, configuration, container files) for `servicegen new`. Resource
//! generation later adds files next to these without touching them.

use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

use crate::error::{Error, Result};
use crate::generator::ProjectFiles;
use crate::templates::project;

/// Directories every generated project starts with
pub const PROJECT_DIRS: &[&str] = &["handler", "mapper", "database/ddl"];

/// Project skeleton generator
pub struct ProjectTemplate {
    name: String,
    handlebars: Handlebars<'static>,
}

impl ProjectTemplate {
    /// Create a template for a project name
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut handlebars = Handlebars::new();

        // Generating code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            name: name.to_string(),
            handlebars,
        }
    }

    /// Render and write every skeleton file through the injected store
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering or a file write fails.
    pub fn generate(&self, files: &dyn ProjectFiles) -> Result<()> {
        let context = json!({
            "project_name": self.name,
            "project_name_snake": self.name.replace('-', "_"),
        });

        self.write(files, "Cargo.toml", project::CARGO_TOML, &context)?;
        self.write(files, "main.rs", project::MAIN_RS, &context)?;
        self.write(files, "mapper/mod.rs", project::MAPPER_MOD, &context)?;
        self.write(files, "handler/mod.rs", project::HANDLER_MOD, &context)?;
        self.write(files, ".servicegen.toml", project::SERVICEGEN_TOML, &context)?;
        self.write(files, "Dockerfile", project::DOCKERFILE, &context)?;
        self.write(files, "docker-compose.yml", project::DOCKER_COMPOSE, &context)?;
        self.write(files, "README.md", project::README_MD, &context)?;
        self.write(files, ".gitignore", project::GITIGNORE, &context)?;

        Ok(())
    }

    fn write(
        &self,
        files: &dyn ProjectFiles,
        relative_path: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<()> {
        let rendered = self.handlebars.render_template(template, context)?;
        files
            .write_file(Path::new(relative_path), &rendered)
            .map_err(|source| Error::Write {
                path: Path::new(relative_path).to_path_buf(),
                source,
            })
    }
}
