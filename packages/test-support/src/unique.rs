//! Collision-free fixture values.
//!
//! Integration tests that share a database (for example a Postgres instance
//! set through `TEST_DATABASE_URL`) must not reuse emails or slugs, so every
//! value carries a fresh ULID.

use ulid::Ulid;

pub const EMAIL_DOMAIN: &str = "example.test";

/// `{prefix}-{ULID}`
///
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("user");
/// assert_ne!(a, unique_str("user"));
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// An address on [`EMAIL_DOMAIN`] whose local part is [`unique_str`].
pub fn unique_email(prefix: &str) -> String {
    format!("{}@{EMAIL_DOMAIN}", unique_str(prefix))
}

/// Lowercase URL slug, `{prefix}-{ulid}`.
pub fn unique_slug(prefix: &str) -> String {
    unique_str(prefix).to_ascii_lowercase()
}
