//! # explorer-view
//!
//! Presentation state for the item browser, independent of any UI toolkit:
//!
//! - [`navigation`]: the breadcrumb stack and its mirror in the URL query
//! - [`view_mode`]: view and sort selection, per-mode metrics and layout
//! - [`file_type`]: the registry of file types resolved by `file_key`
//! - [`render`]: pure mapping from an item to what a row or tile shows
//! - [`rename`]: the inline rename state machine

pub mod file_type;
pub mod navigation;
pub mod rename;
pub mod render;
pub mod view_mode;

pub use file_type::{FileType, FileTypeRegistry};
pub use navigation::{Breadcrumbs, Crumb, NavigationQuery, Restored};
pub use rename::{RenameEditor, RenameOutcome};
pub use render::{RenderedItem, render};
pub use view_mode::{Layout, Metrics, ViewMode, ViewState};
