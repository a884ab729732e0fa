//! Identifier derivation for storage and code surfaces
//!
//! Storage identifiers (tables, columns) are lowercase snake case; code
//! identifiers (generated types, handler names) are Pascal case. Both
//! functions are pure, so the same input always yields the same identifier
//! within and across generation runs.

use convert_case::{Case, Casing};

/// Derive the lowercase storage identifier used for a table or column
#[must_use]
pub fn storage_ident(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Derive the Pascal-case code identifier used for a generated type
#[must_use]
pub fn code_ident(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// Whether a raw name is safe to feed into identifier derivation
///
/// Must start with an ASCII letter and contain only ASCII letters, digits,
/// and underscores. This keeps every derived identifier free of path- and
/// SQL-breaking characters by construction.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// Strict and reserved keywords across editions, plus `Self`. `union` is
// contextual and stays usable.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false",
    "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro", "match",
    "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Whether a derived identifier collides with a Rust keyword
///
/// Keywords cannot name generated struct fields or types, so schemas that
/// would derive one are rejected up front.
#[must_use]
pub fn is_rust_keyword(ident: &str) -> bool {
    RUST_KEYWORDS.contains(&ident)
}
