//! Parameterized CRUD statement building
//!
//! Every statement draws its column list from the schema's ordered attribute
//! sequence, with the implicit `id` primary key leading. Positional
//! placeholders are always `$1..$k` with no gaps or repeats, and the returned
//! bind list names the source fields in exactly placeholder order.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::idents;
use crate::schema::ResourceSchema;

/// A statement string plus its ordered parameter-binding list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    /// The parameterized SQL text
    pub sql: String,
    /// Source-field references to bind, in placeholder order
    pub binds: Vec<String>,
}

/// Sort direction, restricted to a closed enumeration
///
/// Caller-supplied direction text is parsed into this enum before any SQL is
/// assembled; raw text is never interpolated into a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl SortDirection {
    /// Parse a direction token
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    /// SQL spelling of the direction
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One ORDER BY key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Storage column to sort by
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

/// Builds the CRUD statements for one resource schema
#[derive(Debug)]
pub struct StatementBuilder {
    table: String,
    columns: Vec<String>,
}

impl StatementBuilder {
    /// Derive the builder from a schema
    ///
    /// Columns are the storage identifiers of the attributes, in schema
    /// order; the implicit `id` column is not stored here but leads every
    /// column list the builder emits.
    #[must_use]
    pub fn new(schema: &ResourceSchema) -> Self {
        Self {
            table: idents::storage_ident(&schema.name),
            columns: schema
                .attributes
                .iter()
                .map(|attribute| idents::storage_ident(&attribute.name))
                .collect(),
        }
    }

    /// Table storage identifier
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// `id` plus the attribute columns, joined for a select list
    #[must_use]
    pub fn select_columns(&self) -> String {
        self.scan_targets().join(", ")
    }

    /// Ordered field references used to bind result-row columns into a record
    ///
    /// Must match the `select_page`/`select_one` column order exactly.
    #[must_use]
    pub fn scan_targets(&self) -> Vec<String> {
        let mut targets = Vec::with_capacity(self.columns.len() + 1);
        targets.push("id".to_string());
        targets.extend(self.columns.iter().cloned());
        targets
    }

    /// Paged select over all rows
    ///
    /// Emits `LIMIT $1 OFFSET $2`; an `ORDER BY` clause is added only when
    /// `order_by` is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSortColumn`] if a sort key names a column the
    /// schema does not define.
    pub fn select_page(&self, order_by: &[SortKey]) -> Result<SqlStatement> {
        let mut sql = format!("SELECT {} FROM {}", self.select_columns(), self.table);

        if !order_by.is_empty() {
            let mut keys = Vec::with_capacity(order_by.len());
            for key in order_by {
                if key.column != "id" && !self.columns.contains(&key.column) {
                    return Err(Error::UnknownSortColumn {
                        resource: self.table.clone(),
                        column: key.column.clone(),
                    });
                }
                keys.push(format!("{} {}", key.column, key.direction.as_sql()));
            }
            let _ = write!(sql, " ORDER BY {}", keys.join(", "));
        }

        sql.push_str(" LIMIT $1 OFFSET $2");

        Ok(SqlStatement {
            sql,
            binds: vec!["limit".to_string(), "offset".to_string()],
        })
    }

    /// Select one row by primary key
    #[must_use]
    pub fn select_one(&self) -> SqlStatement {
        SqlStatement {
            sql: format!(
                "SELECT {} FROM {} WHERE id = $1",
                self.select_columns(),
                self.table
            ),
            binds: vec!["id".to_string()],
        }
    }

    /// Insert with the primary key bound first
    #[must_use]
    pub fn insert(&self) -> SqlStatement {
        let targets = self.scan_targets();
        let placeholders: Vec<String> = (1..=targets.len()).map(|n| format!("${n}")).collect();

        SqlStatement {
            sql: format!(
                "INSERT INTO {} ({}) VALUES ({})",
                self.table,
                targets.join(", "),
                placeholders.join(", ")
            ),
            binds: targets,
        }
    }

    /// Update every attribute column, keyed by primary key
    ///
    /// With zero attributes there is nothing to assign, so the statement
    /// degenerates to a valid no-op keyed on the primary key.
    #[must_use]
    pub fn update(&self) -> SqlStatement {
        if self.columns.is_empty() {
            return SqlStatement {
                sql: format!("UPDATE {} SET id = id WHERE id = $1", self.table),
                binds: vec!["id".to_string()],
            };
        }

        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ${}", index + 1))
            .collect();

        let mut binds = self.columns.clone();
        binds.push("id".to_string());

        SqlStatement {
            sql: format!(
                "UPDATE {} SET {} WHERE id = ${}",
                self.table,
                assignments.join(", "),
                self.columns.len() + 1
            ),
            binds,
        }
    }

    /// Delete one row by primary key
    #[must_use]
    pub fn delete(&self) -> SqlStatement {
        SqlStatement {
            sql: format!("DELETE FROM {} WHERE id = $1", self.table),
            binds: vec!["id".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSpec, ResourceSchema};
    use crate::typemap::TypeTag;

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

    fn empty_schema() -> ResourceSchema {
        ResourceSchema::new("Ping", vec![], "pingservice")
    }

    /// Extract the placeholder numbers from a statement, in textual order
    fn placeholders(sql: &str) -> Vec<u32> {
        let mut found = Vec::new();
        let mut rest = sql;
        while let Some(pos) = rest.find('$') {
            rest = &rest[pos + 1..];
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            found.push(digits.parse().unwrap());
        }
        found
    }

    #[test]
    fn select_page_without_order_by() {
        let builder = StatementBuilder::new(&book_schema());
        let stmt = builder.select_page(&[]).unwrap();

        assert_eq!(
            stmt.sql,
            "SELECT id, title, published FROM book LIMIT $1 OFFSET $2"
        );
        assert_eq!(stmt.binds, ["limit", "offset"]);
        assert!(!stmt.sql.contains("ORDER BY"));
    }

    #[test]
    fn select_page_with_order_by() {
        let builder = StatementBuilder::new(&book_schema());
        let stmt = builder
            .select_page(&[
                SortKey {
                    column: "title".to_string(),
                    direction: SortDirection::Asc,
                },
                SortKey {
                    column: "published".to_string(),
                    direction: SortDirection::Desc,
                },
            ])
            .unwrap();

        assert_eq!(
            stmt.sql,
            "SELECT id, title, published FROM book ORDER BY title ASC, published DESC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn select_page_rejects_unknown_sort_column() {
        let builder = StatementBuilder::new(&book_schema());
        let err = builder
            .select_page(&[SortKey {
                column: "title; DROP TABLE book".to_string(),
                direction: SortDirection::Asc,
            }])
            .unwrap_err();

        assert!(matches!(err, Error::UnknownSortColumn { .. }));
    }

    #[test]
    fn sort_direction_rejects_free_text() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("sideways"), None);
        assert_eq!(SortDirection::parse("ASC; DROP TABLE book"), None);
    }

    #[test]
    fn select_one_filters_by_primary_key() {
        let builder = StatementBuilder::new(&book_schema());
        let stmt = builder.select_one();

        assert_eq!(
            stmt.sql,
            "SELECT id, title, published FROM book WHERE id = $1"
        );
        assert_eq!(stmt.binds, ["id"]);
    }

    #[test]
    fn insert_binds_primary_key_first() {
        let builder = StatementBuilder::new(&book_schema());
        let stmt = builder.insert();

        assert_eq!(
            stmt.sql,
            "INSERT INTO book (id, title, published) VALUES ($1, $2, $3)"
        );
        assert_eq!(stmt.binds, ["id", "title", "published"]);
    }

    #[test]
    fn update_assigns_each_column_then_keys_on_id() {
        let builder = StatementBuilder::new(&book_schema());
        let stmt = builder.update();

        assert_eq!(
            stmt.sql,
            "UPDATE book SET title = $1, published = $2 WHERE id = $3"
        );
        assert_eq!(stmt.binds, ["title", "published", "id"]);
    }

    #[test]
    fn delete_is_a_fixed_single_parameter_statement() {
        let builder = StatementBuilder::new(&book_schema());
        let stmt = builder.delete();

        assert_eq!(stmt.sql, "DELETE FROM book WHERE id = $1");
        assert_eq!(stmt.binds, ["id"]);
    }

    #[test]
    fn scan_targets_match_select_column_order() {
        let builder = StatementBuilder::new(&book_schema());
        let targets = builder.scan_targets();

        assert_eq!(targets, ["id", "title", "published"]);
        assert_eq!(builder.select_columns(), "id, title, published");
    }

    #[test]
    fn placeholders_are_contiguous_for_every_statement() {
        for schema in [empty_schema(), book_schema()] {
            let builder = StatementBuilder::new(&schema);
            let statements = [
                builder.select_page(&[]).unwrap(),
                builder.select_one(),
                builder.insert(),
                builder.update(),
                builder.delete(),
            ];

            for stmt in &statements {
                let numbers = placeholders(&stmt.sql);
                let expected: Vec<u32> = (1..=u32::try_from(numbers.len()).unwrap()).collect();
                assert_eq!(numbers, expected, "gaps or repeats in: {}", stmt.sql);
            }
        }
    }

    #[test]
    fn empty_schema_still_yields_valid_statements() {
        let builder = StatementBuilder::new(&empty_schema());

        assert_eq!(
            builder.select_page(&[]).unwrap().sql,
            "SELECT id FROM ping LIMIT $1 OFFSET $2"
        );
        assert_eq!(builder.insert().sql, "INSERT INTO ping (id) VALUES ($1)");
        assert_eq!(builder.update().sql, "UPDATE ping SET id = id WHERE id = $1");
        assert_eq!(builder.scan_targets(), ["id"]);
    }

    #[test]
    fn single_attribute_schema_orders_consistently() {
        let schema = ResourceSchema::new(
            "Note",
            vec![AttributeSpec {
                name: "Body".to_string(),
                type_tag: TypeTag::Text,
            }],
            "svc",
        );
        let builder = StatementBuilder::new(&schema);

        assert_eq!(builder.scan_targets(), ["id", "body"]);
        assert_eq!(builder.insert().binds, ["id", "body"]);
        assert_eq!(builder.update().binds, ["body", "id"]);
    }
}
