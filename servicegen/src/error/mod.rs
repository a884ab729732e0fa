//! Error types for schema validation and artifact generation

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for generator results
pub type Result<T> = std::result::Result<T, Error>;

/// Generator error type
///
/// A failed generation call never emits a partial artifact set: every variant
/// aborts the whole pass for that resource.
#[derive(Debug, Error)]
pub enum Error {
    /// Schema failed validation; carries every violation found, not just the first
    #[error("schema validation failed for '{resource}': {}", join_violations(.violations))]
    SchemaValidation {
        /// Resource the schema was describing
        resource: String,
        /// All violations detected in one validation pass
        violations: Vec<Violation>,
    },

    /// A sort key referenced a column the schema does not define
    #[error("unknown sort column '{column}' for resource '{resource}'")]
    UnknownSortColumn {
        /// Resource whose statement was being built
        resource: String,
        /// The offending column name
        column: String,
    },

    /// The migration directory listing could not be obtained
    #[error("failed to list migration directory '{}'", .dir.display())]
    MigrationSequencing {
        /// Directory that was being listed
        dir: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// An artifact or skeleton file could not be written
    #[error("failed to write '{}'", .path.display())]
    Write {
        /// Project-relative path of the failed write
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The configured database backend is not supported
    #[error("unsupported database '{database}'; only 'postgres' is supported")]
    UnsupportedDatabase {
        /// The configured backend value
        database: String,
    },

    /// A template failed to register at startup
    #[error("template registration failed: {0}")]
    TemplateDefinition(#[from] Box<handlebars::TemplateError>),

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),
}

impl Error {
    /// Build a `SchemaValidation` error from an aggregated violation list
    #[must_use]
    pub fn validation(resource: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self::SchemaValidation {
            resource: resource.into(),
            violations,
        }
    }
}

/// A single schema violation
///
/// Violations are aggregated so a caller sees everything wrong with a schema
/// in one report, with enough context (attribute name, offending value) to
/// fix it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Resource name is empty
    #[error("resource name is empty")]
    EmptyResourceName,

    /// Resource name contains characters unsafe for paths or SQL
    #[error("resource name '{name}' contains invalid characters")]
    InvalidResourceName {
        /// The rejected name
        name: String,
    },

    /// Attribute name is empty
    #[error("attribute name is empty")]
    EmptyAttributeName,

    /// Attribute name contains characters unsafe for paths or SQL
    #[error("attribute name '{name}' contains invalid characters")]
    InvalidAttributeName {
        /// The rejected name
        name: String,
    },

    /// Attribute pair did not match the `name:type` shape
    #[error("'{spec}' is not a valid name:type pair")]
    MalformedAttribute {
        /// The raw pair as given
        spec: String,
    },

    /// Type token is not one of the supported tags
    #[error("unsupported type '{token}' for attribute '{attribute}'")]
    UnsupportedType {
        /// Attribute the token was attached to
        attribute: String,
        /// The rejected type token
        token: String,
    },

    /// Two distinct attribute names collapse to the same storage identifier
    #[error("attributes '{first}' and '{second}' both map to column '{storage}'")]
    DuplicateIdentifier {
        /// First attribute, in schema order
        first: String,
        /// Second attribute, in schema order
        second: String,
        /// The colliding storage identifier
        storage: String,
    },

    /// Attribute collides with the implicit primary key column
    #[error("attribute '{attribute}' maps to the reserved column 'id'")]
    ReservedIdentifier {
        /// The offending attribute name
        attribute: String,
    },

    /// Name derives an identifier that is a Rust keyword, which cannot name
    /// a generated item
    #[error("'{name}' maps to the reserved word '{ident}'")]
    KeywordIdentifier {
        /// The offending name as given
        name: String,
        /// The derived identifier that collides with a keyword
        ident: String,
    },
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
