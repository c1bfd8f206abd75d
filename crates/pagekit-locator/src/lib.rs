//! # Pagekit Locator
//!
//! A zero-dependency view-location expansion library for page-based
//! routing, with support for:
//! - Templated search locations (`/pages/{1}/{0}.html`)
//! - Directory-ascension expansion (most-specific candidate first)
//! - A pluggable expander extension point for view resolution pipelines
//!
//! ## How expansion works
//!
//! A *location template* is a string pattern probed by the view
//! resolver. Two tokens are recognized:
//! - `{0}` - the view/file name, substituted at resolution time
//! - `{1}` - an ancestor directory of the requested page
//!
//! Given a page `/Customers/Edit` and the template `/{1}/{0}`, the
//! expander walks the page's directory hierarchy upward and produces
//! `/Customers/{0}` then `/{0}`. Templates without the `{1}/` marker
//! pass through verbatim, exactly once. Relative template order is
//! always preserved.
//!
//! ## Example
//!
//! ```
//! use pagekit_locator::PageLocationExpander;
//!
//! let expander = PageLocationExpander::new();
//! let expanded = expander.expand(
//!     Some("/Customers/Add"),
//!     vec!["/{1}/{0}".to_string()],
//! );
//! assert_eq!(expanded, vec!["/Customers/{0}", "/{0}"]);
//! ```

mod context;
mod expander;
pub mod path;

pub use context::ExpansionContext;
pub use expander::{PageLocationExpander, ViewLocationExpander, NAME_TOKEN};
pub use path::{is_valid_path, normalize_path, DirectoryAscent};
