//! Directory walking, sibling ordering, and path list assembly.

mod path;
pub(crate) mod walk;

use anyhow::Result;
use std::path::Path;

pub use path::relative_slash_path;
pub use walk::collect_entries;

/// First line of every path list; stands for the root itself.
pub const ROOT_MARKER: &str = ".";

/// A single entry discovered below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Path relative to the root, components joined with `/`.
    pub rel_path: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Nesting depth (0 = direct child of root).
    pub depth: usize,
}

/// Configuration for path collection.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Directory layers to descend below the root's children (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Whether symbolic links are resolved: links to directories sort with the
    /// directories and are descended into. When off, every link is a plain entry.
    pub follow_symlinks: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: true,
        }
    }
}

impl CollectConfig {
    /// Bounded walk with the given depth limit.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }
}

/// Abstraction over entry collection so it can be swapped or mocked.
pub trait PathCollector {
    fn collect(&self, root: &Path, config: &CollectConfig) -> Result<Vec<PathEntry>>;
}

/// Default `PathCollector` that delegates to the walkdir-based implementation.
pub struct WalkdirCollector;

impl PathCollector for WalkdirCollector {
    fn collect(&self, root: &Path, config: &CollectConfig) -> Result<Vec<PathEntry>> {
        collect_entries(root, config)
    }
}

/// Prepend the root marker to the collected entries, keeping traversal order.
pub fn build_path_list(entries: &[PathEntry]) -> Vec<String> {
    std::iter::once(ROOT_MARKER.to_string())
        .chain(entries.iter().map(|e| e.rel_path.clone()))
        .collect()
}

/// Collect entries below `root` and return the full path list.
pub fn collect_paths<C: PathCollector + ?Sized>(
    collector: &C,
    root: &Path,
    config: &CollectConfig,
) -> Result<Vec<String>> {
    let entries = collector.collect(root, config)?;
    Ok(build_path_list(&entries))
}
