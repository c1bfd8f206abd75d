//! End-to-end tests for the view-location pipeline: configuration,
//! page-hierarchy expansion, view-name substitution and probing.

use pagekit::{Config, ExpansionContext, ViewLocationExpander, ViewLocator};
use pretty_assertions::assert_eq;

#[test]
fn pipeline_expands_page_hierarchy_then_substitutes_view_name() {
    let locator = ViewLocator::new(vec![
        "/pages/{1}/{0}.html".to_string(),
        "/pages/shared/{0}.html".to_string(),
    ]);
    let mut ctx = ExpansionContext::for_page("_list", "/Customers/Edit");

    let candidates = locator.candidates(&mut ctx);

    assert_eq!(
        candidates,
        vec![
            "/pages/Customers/_list.html",
            "/pages/_list.html",
            "/pages/shared/_list.html",
        ],
    );
}

#[test]
fn pipeline_passes_non_page_lookups_through() {
    let locator = ViewLocator::new(vec![
        "/pages/{1}/{0}.html".to_string(),
        "/pages/shared/{0}.html".to_string(),
    ]);
    let mut ctx = ExpansionContext::for_view("_nav").as_partial();

    let candidates = locator.candidates(&mut ctx);

    assert_eq!(
        candidates,
        vec!["/pages/{1}/_nav.html", "/pages/shared/_nav.html"],
    );
}

#[test]
fn resolve_short_circuits_on_first_existing_candidate() {
    let locator = ViewLocator::new(vec!["/pages/{1}/{0}.html".to_string()]);
    let mut ctx = ExpansionContext::for_page("Edit", "/Pages/Customers/Edit");

    let mut probed = Vec::new();
    let resolved = locator.resolve(&mut ctx, |candidate| {
        probed.push(candidate.to_string());
        candidate == "/pages/Pages/Edit.html"
    });

    assert_eq!(resolved.as_deref(), Some("/pages/Pages/Edit.html"));
    // Deepest candidate is probed first; probing stops at the hit.
    assert_eq!(
        probed,
        vec!["/pages/Pages/Customers/Edit.html", "/pages/Pages/Edit.html"],
    );
}

#[test]
fn custom_expander_runs_after_page_expansion() {
    struct SuffixExpander;
    impl ViewLocationExpander for SuffixExpander {
        fn expand_view_locations(
            &self,
            _ctx: &ExpansionContext,
            locations: Vec<String>,
        ) -> Vec<String> {
            locations
                .into_iter()
                .map(|location| format!("/themed{location}"))
                .collect()
        }
    }

    let locator =
        ViewLocator::new(vec!["/{1}/{0}.html".to_string()]).with_expander(SuffixExpander);
    let mut ctx = ExpansionContext::for_page("Add", "/Customers/Add");

    let candidates = locator.candidates(&mut ctx);

    assert_eq!(
        candidates,
        vec!["/themed/Customers/Add.html", "/themed/Add.html"],
    );
}

#[test]
fn custom_expander_can_populate_values() {
    struct ThemeExpander;
    impl ViewLocationExpander for ThemeExpander {
        fn populate_values(&self, ctx: &mut ExpansionContext) {
            ctx.values.insert("theme".to_string(), "dark".to_string());
        }

        fn expand_view_locations(
            &self,
            _ctx: &ExpansionContext,
            locations: Vec<String>,
        ) -> Vec<String> {
            locations
        }
    }

    let locator = ViewLocator::new(vec!["/{0}".to_string()]).with_expander(ThemeExpander);
    let mut ctx = ExpansionContext::for_view("Index");

    locator.candidates(&mut ctx);

    assert_eq!(ctx.values.get("theme").map(String::as_str), Some("dark"));
}

#[test]
fn locator_from_default_config_uses_default_templates() {
    let config = Config::default();
    let locator = ViewLocator::from_config(&config.pages);
    let mut ctx = ExpansionContext::for_page("Edit", "/Customers/Edit");

    let candidates = locator.candidates(&mut ctx);

    assert_eq!(
        candidates,
        vec![
            "/pages/Customers/Edit.html",
            "/pages/Edit.html",
            "/pages/shared/Edit.html",
        ],
    );
}
