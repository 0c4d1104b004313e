use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::path::relative_slash_path;
use super::{CollectConfig, PathEntry};

/// Canonicalize `root` and make sure it is a directory.
pub(crate) fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", root.display()))?;
    anyhow::ensure!(resolved.is_dir(), "{}: Not a directory", resolved.display());
    Ok(resolved)
}

/// Walk the tree below `root` in pre-order and return every entry found.
///
/// Directories that cannot be read contribute no children; the walk carries on
/// with their siblings. Links that cannot be followed (dangling, or looping back
/// to an ancestor) are still listed. Only an invalid root is an error.
pub fn collect_entries(root: &Path, config: &CollectConfig) -> Result<Vec<PathEntry>> {
    let root = resolve_root(root)?;
    let follow = config.follow_symlinks;

    // walkdir counts the root as depth 0, so its children sit at depth 1.
    let mut walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(follow)
        .sort_by(move |a, b| sort_cmp(a, b, follow));

    if let Some(max_depth) = config.max_depth {
        walker = walker.max_depth(max_depth.saturating_add(1));
    }

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let Some(rel_path) = relative_slash_path(&root, entry.path()) else {
                    continue;
                };
                entries.push(PathEntry {
                    rel_path,
                    is_dir: entry.file_type().is_dir(),
                    depth: entry.depth() - 1,
                });
            }
            Err(e) => {
                skipped += 1;
                let reason = match e.io_error() {
                    Some(io_err) => io_err.to_string(),
                    None => e.to_string(),
                };
                match e.path() {
                    Some(path) => warn!("not descending into {}: {reason}", path.display()),
                    None => warn!("skipping unreadable entry: {reason}"),
                }
                if let Some(entry) = failed_entry(&root, &e, entries.last()) {
                    entries.push(entry);
                }
            }
        }
    }

    debug!(
        "collected {} entries under {} ({} without contents)",
        entries.len(),
        root.display(),
        skipped
    );
    Ok(entries)
}

/// Entry for a path walkdir could not handle.
///
/// A directory whose listing failed arrives right after its own entry and is not
/// repeated. Anything else is a link that could not be followed: loops point at a
/// directory, dangling links at nothing.
fn failed_entry(
    root: &Path,
    err: &walkdir::Error,
    last: Option<&PathEntry>,
) -> Option<PathEntry> {
    let rel_path = relative_slash_path(root, err.path()?)?;
    if last.is_some_and(|prev| prev.rel_path == rel_path) {
        return None;
    }
    let depth = rel_path.matches('/').count();
    Some(PathEntry {
        rel_path,
        is_dir: err.loop_ancestor().is_some(),
        depth,
    })
}

/// walkdir hands the sorter unfollowed entries, so links are resolved here when
/// the walk follows them.
fn sorts_as_dir(entry: &DirEntry, follow: bool) -> bool {
    if follow && entry.path_is_symlink() {
        return entry.path().is_dir();
    }
    entry.file_type().is_dir()
}

/// Comparison function for walkdir sorting.
/// Directories first, then case-insensitive alpha. walkdir sorts stably, so equal
/// keys keep the order the filesystem returned them in.
fn sort_cmp(a: &DirEntry, b: &DirEntry, follow: bool) -> Ordering {
    let a_is_dir = sorts_as_dir(a, follow);
    let b_is_dir = sorts_as_dir(b, follow);

    if a_is_dir != b_is_dir {
        return if a_is_dir {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let a_name = a.file_name().to_string_lossy().to_lowercase();
    let b_name = b.file_name().to_string_lossy().to_lowercase();
    a_name.cmp(&b_name)
}
