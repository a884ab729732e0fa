//! Attribute type tags and their storage/code type mappings
//!
//! The tag set is a closed enum, so an unknown type can only appear at the
//! parsing boundary where it is rejected as an `UnsupportedType` violation.
//! Nothing downstream ever has to default or skip a bad type.

/// Abstract attribute type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// 64-bit signed integer
    Integer,
    /// Variable-length text
    Text,
    /// True/false flag
    Boolean,
    /// Point in time with timezone
    Timestamp,
}

impl TypeTag {
    /// Parse a type token from a `name:type` attribute pair
    ///
    /// Returns `None` for unrecognized tokens; the caller reports the
    /// rejection with the attribute name attached.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "int" | "integer" => Some(Self::Integer),
            "string" | "text" => Some(Self::Text),
            "bool" | "boolean" => Some(Self::Boolean),
            "timestamp" | "datetime" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Storage-engine column type for this tag
    #[must_use]
    pub const fn column_type(self) -> ColumnType {
        match self {
            Self::Integer => ColumnType::Integer,
            Self::Text => ColumnType::Varchar,
            Self::Boolean => ColumnType::Boolean,
            Self::Timestamp => ColumnType::Timestamp,
        }
    }

    /// Rust type used for this tag in generated record structs
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Integer => "i64",
            Self::Text => "String",
            Self::Boolean => "bool",
            Self::Timestamp => "chrono::DateTime<chrono::Utc>",
        }
    }
}

/// Storage-engine (Postgres) column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// `integer`
    Integer,
    /// `varchar`
    Varchar,
    /// `boolean`
    Boolean,
    /// `timestamp`
    Timestamp,
}

impl ColumnType {
    /// SQL spelling of the column type
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Varchar => "varchar",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_tokens() {
        assert_eq!(TypeTag::parse("int"), Some(TypeTag::Integer));
        assert_eq!(TypeTag::parse("integer"), Some(TypeTag::Integer));
        assert_eq!(TypeTag::parse("string"), Some(TypeTag::Text));
        assert_eq!(TypeTag::parse("text"), Some(TypeTag::Text));
        assert_eq!(TypeTag::parse("bool"), Some(TypeTag::Boolean));
        assert_eq!(TypeTag::parse("boolean"), Some(TypeTag::Boolean));
        assert_eq!(TypeTag::parse("timestamp"), Some(TypeTag::Timestamp));
        assert_eq!(TypeTag::parse("datetime"), Some(TypeTag::Timestamp));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(TypeTag::parse("Int"), Some(TypeTag::Integer));
        assert_eq!(TypeTag::parse("STRING"), Some(TypeTag::Text));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(TypeTag::parse("float"), None);
        assert_eq!(TypeTag::parse("uuid"), None);
        assert_eq!(TypeTag::parse(""), None);
    }

    #[test]
    fn maps_every_tag_to_a_column_type() {
        assert_eq!(TypeTag::Integer.column_type().as_sql(), "integer");
        assert_eq!(TypeTag::Text.column_type().as_sql(), "varchar");
        assert_eq!(TypeTag::Boolean.column_type().as_sql(), "boolean");
        assert_eq!(TypeTag::Timestamp.column_type().as_sql(), "timestamp");
    }

    #[test]
    fn maps_every_tag_to_a_rust_type() {
        assert_eq!(TypeTag::Integer.rust_type(), "i64");
        assert_eq!(TypeTag::Text.rust_type(), "String");
        assert_eq!(TypeTag::Boolean.rust_type(), "bool");
        assert_eq!(TypeTag::Timestamp.rust_type(), "chrono::DateTime<chrono::Utc>");
    }
}
