//! Directory walking.
//!
//! Every walk is raw: no gitignore, no hidden-file filtering. Layer folders
//! are copied and scanned in full, dotfiles included. Entries come back
//! sorted by file name so runs are reproducible.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Build an unfiltered walker over `root`.
#[must_use]
pub fn build_walker(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}

/// Files under `root` whose extension is `extension`, in walk order.
///
/// Unreadable entries are logged and skipped.
#[must_use]
pub fn files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    build_walker(root)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(root = %root.display(), %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == extension)
        })
        .collect()
}
