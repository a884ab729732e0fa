//! Template registry and skeleton texts

use handlebars::Handlebars;

use crate::error::{Error, Result};

pub mod project;
pub mod resource;

/// Registered names for the resource artifact templates
pub const MAPPER_TEMPLATE: &str = "mapper";
/// Handler artifact template name
pub const HANDLER_TEMPLATE: &str = "handler";
/// Migration artifact template name
pub const MIGRATION_TEMPLATE: &str = "migration";

/// Pre-registered handlebars instance for resource artifact rendering
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Register the three resource artifact templates
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateDefinition`] if a template fails to parse;
    /// this can only happen if a bundled template is broken.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generating code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, template) in [
            (MAPPER_TEMPLATE, resource::MAPPER_RS),
            (HANDLER_TEMPLATE, resource::HANDLER_RS),
            (MIGRATION_TEMPLATE, resource::MIGRATION_SQL),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| Error::TemplateDefinition(Box::new(e)))?;
        }

        Ok(Self { handlebars })
    }

    /// Render a registered template against a context
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if rendering fails.
    pub fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.handlebars.render(name, context)?)
    }
}
