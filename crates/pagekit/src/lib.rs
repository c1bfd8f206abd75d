//! Pagekit - page-based view resolution and result helpers on axum.
//!
//! Three pieces:
//! - [`config`] - `pagekit.toml` parsing (pages root, location
//!   templates)
//! - [`locator`] - the [`ViewLocator`] pipeline that expands location
//!   templates through [`ViewLocationExpander`] participants and
//!   probes candidates in order
//! - [`page`] - the [`Page`] trait with convenience constructors for
//!   redirect, content, file and status-code results, all thin
//!   wrappers over axum response types

pub mod config;
pub mod locator;
pub mod page;

pub use config::{Config, PagesConfig};
pub use locator::ViewLocator;
pub use page::{
    ContentResult, FileContentResult, LocalRedirectResult, Page, PageError, RedirectResult,
    StatusCodeResult,
};

// Re-export the expansion core so applications need only one import.
pub use pagekit_locator::{
    ExpansionContext, PageLocationExpander, ViewLocationExpander, NAME_TOKEN,
};
