#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treelist::tree::{collect_paths, CollectConfig, WalkdirCollector};

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Path list for `root` with the given depth limit (`None` = unlimited).
pub fn list_paths(root: &Path, max_depth: Option<usize>) -> Vec<String> {
    let config = CollectConfig {
        max_depth,
        ..CollectConfig::default()
    };
    collect_paths(&WalkdirCollector, root, &config).unwrap()
}
