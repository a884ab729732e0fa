//! Resource generation orchestrator
//!
//! Coordinates one atomic generation pass over a resource schema: validate,
//! derive identifiers, build statements, map column types, compute the
//! migration ordinal, and render the three artifacts. The generator itself
//! has no filesystem side effects; directory listing and file writing go
//! through the injected [`ProjectFiles`] collaborator, so the whole pass is
//! testable without touching disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::json;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::idents;
use crate::migrate::{self, MIGRATIONS_DIR};
use crate::schema::ResourceSchema;
use crate::sql::StatementBuilder;
use crate::templates::{
    TemplateRegistry, HANDLER_TEMPLATE, MAPPER_TEMPLATE, MIGRATION_TEMPLATE,
};

/// Filesystem operations the generator and commands depend on
///
/// Injected so generation can run against an in-memory double in tests.
pub trait ProjectFiles {
    /// List the file names directly inside `dir`, relative to the project root
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the listing cannot be obtained.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Write `content` at `path` relative to the project root, creating
    /// parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the write fails.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Real-filesystem implementation rooted at a project directory
#[derive(Debug, Clone)]
pub struct FsProjectFiles {
    root: PathBuf,
}

impl FsProjectFiles {
    /// Root the collaborator at a project directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path for a project-relative path
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectFiles for FsProjectFiles {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(self.root.join(dir)).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)
    }
}

/// One generated text file, immutable once produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Path relative to the project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// Short description for user feedback
    pub description: String,
}

/// Generates the artifact set for one resource schema
pub struct ResourceGenerator {
    schema: ResourceSchema,
    templates: TemplateRegistry,
}

impl ResourceGenerator {
    /// Create a generator for a schema
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateDefinition`] if a bundled template fails to
    /// register.
    pub fn new(schema: ResourceSchema) -> Result<Self> {
        Ok(Self {
            schema,
            templates: TemplateRegistry::new()?,
        })
    }

    /// Run the generation pass and return the in-memory artifact set
    ///
    /// All-or-nothing: any validation or sequencing failure yields zero
    /// artifacts. Two calls over the same schema and directory listing
    /// produce byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaValidation`] for an invalid schema,
    /// [`Error::MigrationSequencing`] when the migration directory cannot be
    /// listed, or [`Error::Template`] if rendering fails.
    pub fn generate(&self, files: &dyn ProjectFiles) -> Result<Vec<GeneratedArtifact>> {
        self.schema.validate()?;

        let table = idents::storage_ident(&self.schema.name);
        let resource = idents::code_ident(&self.schema.name);
        let builder = StatementBuilder::new(&self.schema);

        let migrations_dir = Path::new(MIGRATIONS_DIR);
        let existing = files
            .list_files(migrations_dir)
            .map_err(|source| Error::MigrationSequencing {
                dir: migrations_dir.to_path_buf(),
                source,
            })?;
        let ordinal = migrate::next_ordinal(&existing);

        tracing::debug!(resource = %resource, table = %table, ordinal, "rendering artifacts");

        let fields: Vec<_> = self
            .schema
            .attributes
            .iter()
            .map(|attribute| {
                json!({
                    "name": idents::storage_ident(&attribute.name),
                    "rust_type": attribute.type_tag.rust_type(),
                })
            })
            .collect();

        let ddl_columns: Vec<_> = self
            .schema
            .attributes
            .iter()
            .map(|attribute| {
                json!({
                    "column": idents::storage_ident(&attribute.name),
                    "sql_type": attribute.type_tag.column_type().as_sql(),
                })
            })
            .collect();

        let select_one = builder.select_one();
        let insert = builder.insert();
        let update = builder.update();
        let delete = builder.delete();

        let context = json!({
            "resource": resource,
            "table": table,
            "project": self.schema.project_path,
            "fields": fields,
            "ddl_columns": ddl_columns,
            "select_columns": builder.select_columns(),
            "scan_targets": builder.scan_targets(),
            "select_one_sql": select_one.sql,
            "insert_sql": insert.sql,
            "insert_binds": insert.binds,
            "update_sql": update.sql,
            "update_binds": update.binds,
            "delete_sql": delete.sql,
        });

        let mapper = GeneratedArtifact {
            path: PathBuf::from(format!("mapper/{table}_mapper.rs")),
            content: self.templates.render(MAPPER_TEMPLATE, &context)?,
            description: format!("Persistence module for {resource}"),
        };
        let handler = GeneratedArtifact {
            path: PathBuf::from(format!("handler/{table}_handler.rs")),
            content: self.templates.render(HANDLER_TEMPLATE, &context)?,
            description: format!("HTTP handlers for {resource}"),
        };
        let migration = GeneratedArtifact {
            path: PathBuf::from(format!("{MIGRATIONS_DIR}/{ordinal}_{table}.sql")),
            content: self.templates.render(MIGRATION_TEMPLATE, &context)?,
            description: format!("Migration {ordinal} for table {table}"),
        };

        Ok(vec![mapper, handler, migration])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AttributeSpec;
    use crate::typemap::TypeTag;
    use std::cell::RefCell;

    /// In-memory stand-in for the project filesystem
    struct MemoryFiles {
        migrations: Vec<String>,
        list_calls: RefCell<u32>,
        fail_listing: bool,
    }

    impl MemoryFiles {
        fn with_migrations(migrations: Vec<String>) -> Self {
            Self {
                migrations,
                list_calls: RefCell::new(0),
                fail_listing: false,
            }
        }

        fn failing() -> Self {
            Self {
                migrations: Vec::new(),
                list_calls: RefCell::new(0),
                fail_listing: true,
            }
        }
    }

    impl ProjectFiles for MemoryFiles {
        fn list_files(&self, _dir: &Path) -> io::Result<Vec<String>> {
            *self.list_calls.borrow_mut() += 1;
            if self.fail_listing {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
            }
            Ok(self.migrations.clone())
        }

        fn write_file(&self, _path: &Path, _content: &str) -> io::Result<()> {
            Ok(())
        }
    }

    fn book_schema() -> ResourceSchema {
        ResourceSchema::new(
            "Book",
            vec![
                AttributeSpec {
                    name: "Title".to_string(),
                    type_tag: TypeTag::Text,
                },
                AttributeSpec {
                    name: "Published".to_string(),
                    type_tag: TypeTag::Timestamp,
                },
            ],
            "bookservice",
        )
    }

    #[test]
    fn generates_three_artifacts_with_deterministic_paths() {
        let generator = ResourceGenerator::new(book_schema()).unwrap();
        let files = MemoryFiles::with_migrations(vec![]);

        let artifacts = generator.generate(&files).unwrap();

        let paths: Vec<_> = artifacts
            .iter()
            .map(|a| a.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            [
                "mapper/book_mapper.rs",
                "handler/book_handler.rs",
                "database/ddl/1_book.sql",
            ]
        );
    }

    #[test]
    fn migration_ordinal_follows_existing_files() {
        let generator = ResourceGenerator::new(book_schema()).unwrap();
        let files = MemoryFiles::with_migrations(vec![
            "1_author.sql".to_string(),
            "2_review.sql".to_string(),
        ]);

        let artifacts = generator.generate(&files).unwrap();
        assert_eq!(
            artifacts[2].path,
            PathBuf::from("database/ddl/3_book.sql")
        );
    }

    #[test]
    fn generation_is_byte_identical_across_runs() {
        let generator = ResourceGenerator::new(book_schema()).unwrap();
        let files = MemoryFiles::with_migrations(vec!["1_author.sql".to_string()]);

        let first = generator.generate(&files).unwrap();
        let second = generator.generate(&files).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn book_migration_matches_schema_order() {
        let generator = ResourceGenerator::new(book_schema()).unwrap();
        let files = MemoryFiles::with_migrations(vec![]);

        let artifacts = generator.generate(&files).unwrap();
        assert_eq!(
            artifacts[2].content,
            "CREATE TABLE book (\n    id varchar PRIMARY KEY,\n    title varchar,\n    published timestamp\n);\n"
        );
    }

    #[test]
    fn book_mapper_carries_consistent_statements() {
        let generator = ResourceGenerator::new(book_schema()).unwrap();
        let files = MemoryFiles::with_migrations(vec![]);

        let artifacts = generator.generate(&files).unwrap();
        let mapper = &artifacts[0].content;

        assert!(mapper.contains("pub struct Book {"));
        assert!(mapper.contains("pub title: String,"));
        assert!(mapper.contains("pub published: chrono::DateTime<chrono::Utc>,"));
        assert!(mapper.contains("SELECT id, title, published FROM book"));
        assert!(mapper.contains("INSERT INTO book (id, title, published) VALUES ($1, $2, $3)"));
        assert!(mapper.contains("UPDATE book SET title = $1, published = $2 WHERE id = $3"));
        assert!(mapper.contains("DELETE FROM book WHERE id = $1"));

        // Scan targets bind positionally in select-column order
        assert!(mapper.contains("id: row.try_get(0)?"));
        assert!(mapper.contains("title: row.try_get(1)?"));
        assert!(mapper.contains("published: row.try_get(2)?"));
    }

    #[test]
    fn book_handler_routes_the_resource() {
        let generator = ResourceGenerator::new(book_schema()).unwrap();
        let files = MemoryFiles::with_migrations(vec![]);

        let artifacts = generator.generate(&files).unwrap();
        let handler = &artifacts[1].content;

        assert!(handler.contains("pub fn routes() -> Router<AppState>"));
        assert!(handler.contains(r#".route("/book", get(page).post(create).put(update))"#));
        assert!(handler.contains(r#".route("/book/{id}", get(one).delete(remove))"#));
        assert!(handler.contains("use crate::mapper::book_mapper::{self as db, Book};"));
    }

    #[test]
    fn empty_attribute_list_still_generates_valid_artifacts() {
        let schema = ResourceSchema::new("Ping", vec![], "pingservice");
        let generator = ResourceGenerator::new(schema).unwrap();
        let files = MemoryFiles::with_migrations(vec![]);

        let artifacts = generator.generate(&files).unwrap();

        assert_eq!(
            artifacts[2].content,
            "CREATE TABLE ping (\n    id varchar PRIMARY KEY\n);\n"
        );
        assert!(artifacts[0]
            .content
            .contains("SELECT id FROM ping"));
    }

    #[test]
    fn invalid_schema_produces_zero_artifacts_and_consumes_no_ordinal() {
        let schema = ResourceSchema::new(
            "Book",
            vec![
                AttributeSpec {
                    name: "Name".to_string(),
                    type_tag: TypeTag::Text,
                },
                AttributeSpec {
                    name: "name".to_string(),
                    type_tag: TypeTag::Text,
                },
            ],
            "bookservice",
        );
        let generator = ResourceGenerator::new(schema).unwrap();
        let files = MemoryFiles::with_migrations(vec![]);

        let err = generator.generate(&files).unwrap_err();
        assert!(matches!(err, Error::SchemaValidation { .. }));

        // Validation failed before the directory was ever consulted
        assert_eq!(*files.list_calls.borrow(), 0);
    }

    #[test]
    fn listing_failure_surfaces_as_sequencing_error() {
        let generator = ResourceGenerator::new(book_schema()).unwrap();
        let files = MemoryFiles::failing();

        let err = generator.generate(&files).unwrap_err();
        assert!(matches!(err, Error::MigrationSequencing { .. }));
    }
}
