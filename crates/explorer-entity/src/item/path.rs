//! Materialized path arithmetic.
//!
//! A path is the `/`-joined chain of names from the root. Folder paths end
//! with `/`; file paths do not.

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Whether `name` can be used as a single path segment.
pub fn is_valid_segment(name: &str) -> bool {
    !name.is_empty() && !name.contains(SEPARATOR)
}

/// Path of a new child named `name` under a folder at `parent_path`.
pub fn child_path(parent_path: &str, name: &str, is_folder: bool) -> String {
    let mut path = String::with_capacity(parent_path.len() + name.len() + 2);
    path.push_str(parent_path);
    if !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }
    path.push_str(name);
    if is_folder {
        path.push('/');
    }
    path
}

/// `path` with its last segment replaced by `new_name`.
pub fn renamed_path(path: &str, new_name: &str, is_folder: bool) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    match trimmed.rsplit_once('/') {
        Some((parent, _)) => child_path(&format!("{parent}/"), new_name, is_folder),
        None => child_path("", new_name, is_folder),
    }
}

/// Whether `path` lies strictly below the folder at `ancestor`.
pub fn is_below(ancestor: &str, path: &str) -> bool {
    ancestor.ends_with('/') && path.len() > ancestor.len() && path.starts_with(ancestor)
}
