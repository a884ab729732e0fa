//! Migration file sequencing
//!
//! The ordinal scheme is count-based: the next migration gets
//! `count(existing) + 1`. This is the policy the generated projects rely on,
//! kept deliberately simple and isolated here so a stricter scheme (max
//! existing ordinal + 1) could replace it without touching callers. Callers
//! must serialize generation per target directory; under concurrent
//! generation or prior deletions a count-based ordinal can collide.

/// Relative directory that holds a project's migration files
pub const MIGRATIONS_DIR: &str = "database/ddl";

/// Assign the next migration ordinal from a directory listing
///
/// The listing is read once per generation call and never cached across
/// calls.
#[must_use]
pub fn next_ordinal(existing: &[String]) -> u32 {
    let count = u32::try_from(existing.len()).unwrap_or(u32::MAX - 1);
    count + 1
}
