//! Resource schema: a name plus an ordered attribute list
//!
//! Attributes are an explicit ordered sequence from input through every
//! builder. Every generated artifact (select column list, scan targets,
//! insert/update parameter positions, DDL column list) presents attributes in
//! exactly this order, so two generation runs over the same schema are
//! byte-identical.

use crate::error::{Error, Result, Violation};
use crate::idents;
use crate::typemap::TypeTag;

/// One typed attribute of a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Attribute name as given by the caller
    pub name: String,
    /// Abstract type tag
    pub type_tag: TypeTag,
}

impl AttributeSpec {
    /// Parse a `name:type` pair
    ///
    /// # Errors
    ///
    /// Returns a [`Violation`] if the pair is malformed or the type token is
    /// not one of the supported tags.
    pub fn parse(spec: &str) -> std::result::Result<Self, Violation> {
        let Some((name, token)) = spec.split_once(':') else {
            return Err(Violation::MalformedAttribute {
                spec: spec.to_string(),
            });
        };

        let Some(type_tag) = TypeTag::parse(token) else {
            return Err(Violation::UnsupportedType {
                attribute: name.to_string(),
                token: token.to_string(),
            });
        };

        Ok(Self {
            name: name.to_string(),
            type_tag,
        })
    }
}

/// A resource schema driving one generation pass
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    /// Resource name as given by the caller
    pub name: String,
    /// Ordered attribute sequence
    pub attributes: Vec<AttributeSpec>,
    /// Name of the project the resource belongs to
    pub project_path: String,
}

impl ResourceSchema {
    /// Build a schema from already-parsed attributes
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        attributes: Vec<AttributeSpec>,
        project_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            project_path: project_path.into(),
        }
    }

    /// Parse a schema from raw `name:type` pairs
    ///
    /// Every malformed pair and unsupported type token is collected before
    /// reporting, so one pass shows the caller everything to fix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaValidation`] with all parse violations.
    pub fn parse(name: &str, specs: &[String], project_path: &str) -> Result<Self> {
        let mut attributes = Vec::with_capacity(specs.len());
        let mut violations = Vec::new();

        for spec in specs {
            match AttributeSpec::parse(spec) {
                Ok(attribute) => attributes.push(attribute),
                Err(violation) => violations.push(violation),
            }
        }

        if violations.is_empty() {
            Ok(Self::new(name, attributes, project_path))
        } else {
            Err(Error::validation(name, violations))
        }
    }

    /// Validate the schema, aggregating every violation found
    ///
    /// Checks the resource name, each attribute name, and storage-identifier
    /// uniqueness (case-insensitively, since distinct spellings can collapse
    /// to one column). All-or-nothing: a schema that fails here produces zero
    /// artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaValidation`] listing every violation.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push(Violation::EmptyResourceName);
        } else if !idents::is_valid_name(&self.name) {
            violations.push(Violation::InvalidResourceName {
                name: self.name.clone(),
            });
        } else {
            // The code identifier names the generated record struct
            let code = idents::code_ident(&self.name);
            if idents::is_rust_keyword(&code) {
                violations.push(Violation::KeywordIdentifier {
                    name: self.name.clone(),
                    ident: code,
                });
            }
        }

        let mut seen: Vec<(String, &str)> = Vec::with_capacity(self.attributes.len());
        for attribute in &self.attributes {
            if attribute.name.is_empty() {
                violations.push(Violation::EmptyAttributeName);
                continue;
            }
            if !idents::is_valid_name(&attribute.name) {
                violations.push(Violation::InvalidAttributeName {
                    name: attribute.name.clone(),
                });
                continue;
            }

            let storage = idents::storage_ident(&attribute.name);
            if storage == "id" {
                violations.push(Violation::ReservedIdentifier {
                    attribute: attribute.name.clone(),
                });
                continue;
            }
            // The storage identifier names the generated struct field
            if idents::is_rust_keyword(&storage) {
                violations.push(Violation::KeywordIdentifier {
                    name: attribute.name.clone(),
                    ident: storage,
                });
                continue;
            }

            if let Some((_, first)) = seen.iter().find(|(existing, _)| *existing == storage) {
                violations.push(Violation::DuplicateIdentifier {
                    first: (*first).to_string(),
                    second: attribute.name.clone(),
                    storage,
                });
            } else {
                seen.push((storage, attribute.name.as_str()));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(self.name.clone(), violations))
        }
    }
}
