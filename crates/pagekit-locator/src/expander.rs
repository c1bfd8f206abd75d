use crate::context::ExpansionContext;
use crate::path::{normalize_path, DirectoryAscent};

/// Token substituted with the view/file name at resolution time.
pub const NAME_TOKEN: &str = "{0}";

/// The exact substring that makes a template eligible for directory
/// ascension: the directory token `{1}` immediately followed by a
/// separator. A lone `{1}` with no trailing `/` is not a marker.
const DIR_MARKER: &str = "{1}/";

/// Extension point invoked once per view-lookup attempt.
///
/// Participants receive the ordered location templates contributed so
/// far and return the (possibly expanded) ordered list the resolver
/// will probe, short-circuiting on the first existing file.
pub trait ViewLocationExpander {
    /// Contributes contextual values before expansion runs.
    ///
    /// The default implementation does nothing; the page name is
    /// already carried by the context itself.
    fn populate_values(&self, _ctx: &mut ExpansionContext) {}

    /// Rewrites the ordered list of location templates for this
    /// lookup. Implementations must preserve per-template grouping:
    /// all rows produced for one input template come before any row of
    /// the next.
    fn expand_view_locations(&self, ctx: &ExpansionContext, locations: Vec<String>)
        -> Vec<String>;
}

/// Expands page-aware location templates into an ascending directory
/// search over the page hierarchy.
///
/// Templates carrying the `{1}/` marker fan out into one candidate per
/// ancestor directory of the page, deepest first, stopping at the
/// pages root. Templates without the marker pass through verbatim,
/// exactly once. Lookups that are not page-scoped pass the whole list
/// through untouched.
///
/// The expansion is a pure function over its inputs: no state, no
/// I/O, safe to call concurrently from any number of threads.
///
/// # Examples
///
/// ```
/// use pagekit_locator::PageLocationExpander;
///
/// let expander = PageLocationExpander::new();
/// let expanded = expander.expand(
///     Some("/Pages/Customers/Edit"),
///     vec!["/{1}/{0}".to_string(), "/Views/Shared/{0}".to_string()],
/// );
/// assert_eq!(
///     expanded,
///     vec!["/Pages/Customers/{0}", "/Pages/{0}", "/{0}", "/Views/Shared/{0}"],
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLocationExpander;

impl PageLocationExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expands `locations` against `page_name`.
    ///
    /// With no page name (or an empty one) the input vector is
    /// returned as-is, by value, with no re-allocation. Malformed page
    /// names (missing leading separator, doubled or trailing
    /// separators) are normalized first rather than rejected.
    pub fn expand(&self, page_name: Option<&str>, locations: Vec<String>) -> Vec<String> {
        let page = match page_name {
            Some(page) if !page.is_empty() => page,
            // Not a page-scoped lookup: nothing to expand.
            _ => return locations,
        };

        let page = normalize_path(page);
        let mut expanded = Vec::with_capacity(locations.len());

        for location in locations {
            if !location.contains(DIR_MARKER) {
                // No directory marker: one verbatim row, nothing else.
                expanded.push(location);
                continue;
            }

            // Ascending directory search, up to (not past) the pages
            // root. The ascent items already carry the trailing
            // separator the marker implies.
            for ancestor in DirectoryAscent::new(&page) {
                expanded.push(location.replace(DIR_MARKER, ancestor));
            }
        }

        expanded
    }
}

impl ViewLocationExpander for PageLocationExpander {
    fn expand_view_locations(
        &self,
        ctx: &ExpansionContext,
        locations: Vec<String>,
    ) -> Vec<String> {
        self.expand(ctx.page_name.as_deref(), locations)
    }
}
