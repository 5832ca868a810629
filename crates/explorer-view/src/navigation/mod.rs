//! Breadcrumb navigation and its URL representation.
//!
//! The stack lives only in memory and in the address bar; a reloaded or
//! shared URL rebuilds it without asking the server for ancestor metadata.

pub mod breadcrumbs;
pub mod query;

pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use query::{NavigationQuery, Restored};
