// File: src/locator.rs
// Purpose: Runs the view-location expansion pipeline and probes candidates

use pagekit_locator::{ExpansionContext, PageLocationExpander, ViewLocationExpander, NAME_TOKEN};
use tracing::{debug, trace};

use crate::config::PagesConfig;

/// Drives view resolution: expands the configured location templates
/// through a chain of [`ViewLocationExpander`] participants, then
/// substitutes the view name and probes the resulting candidates in
/// order.
///
/// The locator never touches the file system itself; existence
/// checking is the caller's probe. This keeps the pipeline testable
/// and lets the host cache or virtualize lookups however it likes.
pub struct ViewLocator {
    locations: Vec<String>,
    expanders: Vec<Box<dyn ViewLocationExpander + Send + Sync>>,
}

impl ViewLocator {
    /// Locator over the given templates, with the page-hierarchy
    /// expander pre-installed.
    pub fn new(locations: Vec<String>) -> Self {
        Self {
            locations,
            expanders: vec![Box::new(PageLocationExpander::new())],
        }
    }

    /// Locator configured from `[pages]` in `pagekit.toml`.
    pub fn from_config(config: &PagesConfig) -> Self {
        Self::new(config.locations.clone())
    }

    /// Appends another expansion participant. Participants run in
    /// registration order, each seeing the previous one's output.
    pub fn with_expander(
        mut self,
        expander: impl ViewLocationExpander + Send + Sync + 'static,
    ) -> Self {
        self.expanders.push(Box::new(expander));
        self
    }

    /// The ordered candidate paths for this lookup, with `{0}`
    /// substituted. Most-specific candidates come first within each
    /// template's group.
    pub fn candidates(&self, ctx: &mut ExpansionContext) -> Vec<String> {
        for expander in &self.expanders {
            expander.populate_values(ctx);
        }

        let mut locations = self.locations.clone();
        for expander in &self.expanders {
            locations = expander.expand_view_locations(ctx, locations);
        }

        let candidates: Vec<String> = locations
            .iter()
            .map(|location| location.replace(NAME_TOKEN, &ctx.view_name))
            .collect();

        debug!(
            view = %ctx.view_name,
            page = ctx.page_name.as_deref().unwrap_or(""),
            count = candidates.len(),
            "expanded view locations"
        );

        candidates
    }

    /// Probes candidates in order and returns the first one the probe
    /// accepts, or `None` when every candidate misses.
    pub fn resolve<F>(&self, ctx: &mut ExpansionContext, mut probe: F) -> Option<String>
    where
        F: FnMut(&str) -> bool,
    {
        self.candidates(ctx).into_iter().find(|candidate| {
            if probe(candidate) {
                debug!(candidate = %candidate, "resolved view");
                true
            } else {
                trace!(candidate = %candidate, "view candidate missed");
                false
            }
        })
    }
}
