//! Idempotent file system restructuring.
//!
//! Every operation checks before it acts: re-running after a partial run
//! neither fails nor repeats work.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};


use crate::error::TransformError;
use crate::walk::{build_walker, files_with_extension};

/// Copy `root/<subdir>` to `root/<layer>/<subdir>` for every subdir present
/// whose destination does not exist yet. Returns the created destinations.
///
/// # Errors
/// `Io` when a directory or file cannot be created or copied.
pub fn copy_layer_dirs(
    root: &Path,
    layer: &str,
    subdirs: &[&str],
) -> Result<Vec<PathBuf>, TransformError> {
    let mut copied = Vec::new();
    for subdir in subdirs {
        let source = root.join(subdir);
        let destination = root.join(layer).join(subdir);
        if !source.is_dir() {
            tracing::debug!(source = %source.display(), "layer source absent");
            continue;
        }
        if destination.exists() {
            tracing::debug!(destination = %destination.display(), "layer already populated");
            continue;
        }
        copy_tree(&source, &destination)?;
        tracing::info!(from = %source.display(), to = %destination.display(), "copied layer directory");
        copied.push(destination);
    }
    Ok(copied)
}

/// Rename the first alias present under `root` to `canonical`, unless
/// `canonical` already exists. Later aliases are left alone even when present.
///
/// # Errors
/// `Io` when the rename fails.
pub fn rename_to_canonical(
    root: &Path,
    canonical: &str,
    aliases: &[&str],
) -> Result<Option<PathBuf>, TransformError> {
    let destination = root.join(canonical);
    if destination.exists() {
        return Ok(None);
    }
    let Some(alias) = aliases.iter().map(|a| root.join(a)).find(|p| p.is_dir()) else {
        return Ok(None);
    };
    fs::rename(&alias, &destination).map_err(TransformError::io("rename", &alias))?;
    tracing::info!(from = %alias.display(), to = %destination.display(), "renamed directory");
    Ok(Some(destination))
}

/// Normalize `.{extension}` file names under `dir`: first strip `remove` from names
/// containing it (unless the name starts with it), then append `add` to every
/// stem not already ending in it. Returns the number of renames.
///
/// An existing target name is never replaced; the file is logged and left.
///
/// # Errors
/// `Io` when a rename fails.
pub fn restandardize_suffix(
    dir: &Path,
    extension: &str,
    remove: &str,
    add: &str,
) -> Result<usize, TransformError> {
    if !dir.is_dir() {
        tracing::info!(dir = %dir.display(), "nothing to restandardize");
        return Ok(0);
    }
    let mut renamed = 0;

    for path in files_with_extension(dir, extension) {
        let Some(name) = file_name(&path) else { continue };
        if remove.is_empty() || !name.contains(remove) || name.starts_with(remove) {
            continue;
        }
        let target = path.with_file_name(name.replace(remove, ""));
        if rename_file(&path, &target)? {
            renamed += 1;
        }
    }

    let wanted_tail = format!("{add}.{extension}");
    for path in files_with_extension(dir, extension) {
        let Some(name) = file_name(&path) else { continue };
        if add.is_empty() || name.ends_with(&wanted_tail) {
            continue;
        }
        let stem = name.trim_end_matches(&format!(".{extension}")).to_string();
        let target = path.with_file_name(format!("{stem}{wanted_tail}"));
        if rename_file(&path, &target)? {
            renamed += 1;
        }
    }

    Ok(renamed)
}

/// First candidate present as a directory under `root`.
#[must_use]
pub fn locate_layer_source(root: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.is_dir())
}

/// Copy one file unless the destination exists. Returns whether it was copied.
///
/// # Errors
/// `Io` on any failure other than an existing destination.
pub fn copy_file_if_absent(source: &Path, destination: &Path) -> Result<bool, TransformError> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(TransformError::io("create", parent))?;
    }
    let mut target = match OpenOptions::new().write(true).create_new(true).open(destination) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(TransformError::io("create", destination)(e)),
    };
    let copied = fs::File::open(source)
        .map_err(TransformError::io("open", source))
        .and_then(|mut input| {
            std::io::copy(&mut input, &mut target).map_err(TransformError::io("copy", destination))
        });
    if let Err(err) = copied {
        drop(target);
        discard_partial(destination);
        return Err(err);
    }
    Ok(true)
}

/// Remove a file left half-written by a failed create-only copy.
fn discard_partial(destination: &Path) {
    if let Err(e) = fs::remove_file(destination) {
        tracing::warn!(path = %destination.display(), error = %e, "could not remove partial file");
    }
}

fn copy_tree(source: &Path, destination: &Path) -> Result<(), TransformError> {
    for entry in build_walker(source) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(source = %source.display(), %err, "skipping unreadable entry");
                continue;
            }
        };
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            fs::create_dir_all(&target).map_err(TransformError::io("create", &target))?;
        } else {
            copy_file_if_absent(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn rename_file(from: &Path, to: &Path) -> Result<bool, TransformError> {
    if to.exists() {
        tracing::warn!(from = %from.display(), to = %to.display(), "rename target exists, skipping");
        return Ok(false);
    }
    fs::rename(from, to).map_err(TransformError::io("rename", from))?;
    tracing::info!(from = %from.display(), to = %to.display(), "renamed file");
    Ok(true)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|n| n.to_str()).map(ToString::to_string)
}
