//! servicegen core library
//!
//! Schema-driven artifact generation: given a resource name and an ordered
//! list of typed attributes, derive a consistent set of textual artifacts
//! (CRUD SQL, a persistence module, an HTTP handler module, and a sequenced
//! migration file) that all agree on field names, order, and types.
//!
//! Generation is a pure computation over its inputs plus one directory
//! listing; the filesystem is reached only through the injected
//! [`generator::ProjectFiles`] collaborator.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod generator;
pub mod idents;
pub mod migrate;
pub mod project;
pub mod schema;
pub mod sql;
pub mod templates;
pub mod typemap;

pub use config::ProjectConfig;
pub use error::{Error, Result, Violation};
pub use generator::{FsProjectFiles, GeneratedArtifact, ProjectFiles, ResourceGenerator};
pub use project::ProjectTemplate;
pub use schema::{AttributeSpec, ResourceSchema};
pub use sql::{SortDirection, SortKey, SqlStatement, StatementBuilder};
pub use typemap::{ColumnType, TypeTag};
