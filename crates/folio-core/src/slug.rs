//! URL-safe slugs for blog posts.
//!
//! The admin blog form derives a slug from the title as the editor types.
//! Writers should call [`slugify`] so the reader's slug lookup finds what was
//! written.

use crate::errors::CoreError;

/// Turn a title into a slug: lowercase, whitespace runs become `-`, and
/// anything outside `[a-z0-9_-]` is dropped.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.trim().chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug
}

/// Check that `slug` is non-empty and already URL-safe.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the slug is empty or contains
/// characters [`slugify`] would strip.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("slug must not be empty".into()));
    }
    if let Some(bad) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        return Err(CoreError::Validation(format!(
            "slug '{slug}' contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_titles() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Rust   &  Tokio: A Guide! "), "rust--tokio-a-guide");
        assert_eq!(slugify("Next.js 14 tips"), "nextjs-14-tips");
        assert_eq!(slugify("snake_case-ok"), "snake_case-ok");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Çalışma Notları"), "alma-notlar");
    }

    #[test]
    fn slugified_output_validates() {
        for title in ["Hello World", "Next.js 14 tips", "a_b-c"] {
            assert!(validate_slug(&slugify(title)).is_ok(), "{title}");
        }
    }

    #[test]
    fn rejects_empty_and_unsafe_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Hello").is_err());
        assert!(validate_slug("a b").is_err());
        assert!(validate_slug("ok-slug_1").is_ok());
    }
}
