//! Slug generation and unique-slug resolution for projects.
//!
//! Slugs are the public URL identifiers of projects (`/projects/{slug}`).
//! Every stored slug is non-empty, lowercase `[a-z0-9-]`, and has no leading,
//! trailing, or doubled hyphens.

use std::future::Future;

use crate::error::CoreError;

/// Highest numeric suffix tried by [`ensure_unique_slug`] before giving up.
pub const MAX_SLUG_SUFFIX: u32 = 1000;

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a URL-safe slug from a human-readable title.
///
/// Lowercases and trims the input, drops every character that is not an ASCII
/// word character, whitespace, or hyphen, turns each run of whitespace,
/// underscores, and hyphens into a single hyphen, and trims hyphens from both
/// ends. Non-ASCII letters are dropped rather than transliterated.
///
/// ```
/// use folio_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("Hello, World!"), "hello-world");
/// assert_eq!(generate_slug("  Multiple   Spaces_Here--"), "multiple-spaces-here");
/// assert_eq!(generate_slug(""), "");
/// ```
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.trim_matches(is_js_whitespace).chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c == '-' || c == '_' || is_js_whitespace(c) {
            pending_hyphen = true;
        }
    }

    slug
}

/// The ECMAScript whitespace set, which is what `\s` and `trim()` match in
/// browser-side slug previews. It differs from Unicode `White_Space` in two
/// places: U+FEFF counts as whitespace and U+0085 does not.
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Generate a slug from `title`, rejecting titles that normalize to nothing
/// (for example an emoji-only title).
pub fn slug_from_title(title: &str) -> Result<String, CoreError> {
    let slug = generate_slug(title);
    if slug.is_empty() {
        return Err(CoreError::Validation(
            "title must contain at least one letter or digit".into(),
        ));
    }
    Ok(slug)
}

/// Validate a caller-supplied slug against the stored-slug invariant.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(CoreError::Validation(
            "slug must not start or end with a hyphen or contain consecutive hyphens".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

/// Find the first free slug starting from `base_slug`.
///
/// Tries `base_slug`, then `base_slug-2`, `base_slug-3`, ... until `exists`
/// reports the candidate as free. Errors from `exists` are returned as-is;
/// a failed lookup is never treated as "free".
///
/// The result is only free as of the last check. The store's unique index is
/// the final arbiter, so callers must still handle a duplicate-key rejection
/// on insert.
pub async fn ensure_unique_slug<F, Fut, E>(base_slug: &str, mut exists: F) -> Result<String, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: From<CoreError>,
{
    if base_slug.is_empty() {
        return Err(CoreError::Validation("title produces an empty slug".into()).into());
    }

    let mut candidate = base_slug.to_string();
    let mut counter: u32 = 2;

    while exists(candidate.clone()).await? {
        if counter > MAX_SLUG_SUFFIX {
            return Err(CoreError::Validation("title produces no available slug".into()).into());
        }
        candidate = format!("{base_slug}-{counter}");
        counter += 1;
    }

    Ok(candidate)
}
