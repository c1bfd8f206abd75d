use std::collections::HashMap;

/// Per-lookup input handed to every [`ViewLocationExpander`] in a
/// resolution pipeline.
///
/// `page_name` is the logical page path relative to the pages root,
/// always absolute-style (`/Customers/Edit`). `None` or an empty
/// string means the lookup is not page-scoped (a shared partial, for
/// example) and page expansion does not apply.
///
/// [`ViewLocationExpander`]: crate::ViewLocationExpander
#[derive(Debug, Clone)]
pub struct ExpansionContext {
    /// Name of the view being resolved, substituted for `{0}`.
    pub view_name: String,
    /// Logical page path, or `None` when the lookup is not a page.
    pub page_name: Option<String>,
    /// Whether this lookup is for a main page rather than a partial.
    pub is_main_page: bool,
    /// Contextual values contributed by expanders via
    /// `populate_values`. Keys participate in view-lookup cache keys
    /// on the resolver side.
    pub values: HashMap<String, String>,
}

impl ExpansionContext {
    /// Context for a lookup that is not tied to any page.
    pub fn for_view(view_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            page_name: None,
            is_main_page: true,
            values: HashMap::new(),
        }
    }

    /// Context for a page-scoped lookup.
    pub fn for_page(view_name: impl Into<String>, page_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            page_name: Some(page_name.into()),
            is_main_page: true,
            values: HashMap::new(),
        }
    }

    /// Marks the lookup as a partial rather than a main page.
    pub fn as_partial(mut self) -> Self {
        self.is_main_page = false;
        self
    }
}
