/// Path utilities for validation, normalization and hierarchy walks.
///
/// All functions here are pure: same input, same output, no side
/// effects.
use std::borrow::Cow;

pub mod ascent;
pub use ascent::DirectoryAscent;

/// Checks whether a page path is in canonical form.
///
/// Rules:
/// - must start with `/`
/// - must not contain `//` or `\`
/// - must not end with `/` (except root `/`)
/// - must not be empty
///
/// # Examples
///
/// ```
/// use pagekit_locator::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/Customers/Edit"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("Customers/Edit"));
/// assert!(!is_valid_path("/Customers/Edit/"));
/// assert!(!is_valid_path("/Customers//Edit"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalizes a page path to canonical form.
///
/// Returns `Cow::Borrowed` when the input is already canonical (zero
/// allocations), `Cow::Owned` otherwise. Handles missing leading
/// separators, trailing slashes, doubled slashes and backslashes.
///
/// # Examples
///
/// ```
/// use pagekit_locator::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/Customers/Edit");
/// assert!(matches!(path, Cow::Borrowed("/Customers/Edit")));
///
/// assert_eq!(normalize_path("Customers/Edit"), "/Customers/Edit");
/// assert_eq!(normalize_path("/Customers//Edit/"), "/Customers/Edit");
/// assert_eq!(normalize_path("\\Customers\\Edit"), "/Customers/Edit");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}
