//! Mapping resolver and working-tree mutator.
//!
//! Expands declared [`SourceMapping`] entries into concrete file copies
//! into the target checkout. Exclude globs are matched against paths
//! relative to the source root, mirroring how they were declared.

use std::fs;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use specferry_core::SourceMapping;

use crate::error::{io_err, SyncError};

/// Apply every mapping in declaration order.
///
/// A file maps to a single copy; a directory is enumerated recursively and
/// each contained file is copied unless excluded. Copies overwrite and
/// create destination parents as needed. A missing source path is fatal.
pub fn apply_mappings(
    source_root: &Path,
    target_root: &Path,
    mappings: &[SourceMapping],
) -> Result<(), SyncError> {
    tracing::info!("processing {} source mapping(s)", mappings.len());

    for mapping in mappings {
        let source_path = source_root.join(&mapping.from);
        let dest_path = target_root.join(&mapping.to);

        if !source_path.exists() {
            return Err(SyncError::SourceMissing {
                path: mapping.from.clone(),
            });
        }

        if source_path.is_dir() {
            tracing::info!("syncing directory {}", mapping.from.display());
            let excludes = build_exclude_set(&mapping.exclude)?;
            sync_directory(source_root, &source_path, &dest_path, &excludes)?;
        } else {
            tracing::info!("syncing file {}", mapping.from.display());
            copy_file(&source_path, &dest_path)?;
        }
    }

    Ok(())
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet, SyncError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| SyncError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| SyncError::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}

fn sync_directory(
    source_root: &Path,
    source_dir: &Path,
    dest_dir: &Path,
    excludes: &GlobSet,
) -> Result<(), SyncError> {
    for entry in WalkDir::new(source_dir) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source_dir.to_path_buf());
            match e.into_io_error() {
                Some(source) => io_err(path, source),
                None => SyncError::SourceMissing { path },
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        // Exclusions match against the source-root-relative path.
        let root_relative = entry.path().strip_prefix(source_root).unwrap_or(entry.path());
        if excludes.is_match(root_relative) {
            tracing::info!("skipping {}", root_relative.display());
            continue;
        }

        let dir_relative = entry
            .path()
            .strip_prefix(source_dir)
            .expect("walked entry is under its walk root");
        copy_file(entry.path(), &dest_dir.join(dir_relative))?;
    }
    Ok(())
}

fn copy_file(source: &Path, dest: &Path) -> Result<(), SyncError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    fs::copy(source, dest).map_err(|e| io_err(dest, e))?;
    Ok(())
}
