// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;

/// Predicate over a file path relative to the copy source.
pub type PathFilter<'a> = &'a (dyn Fn(&Path) -> bool + Sync);

/// Recursively copies all contents from src directory to dst directory (async version).
///
/// Creates dst if it doesn't exist. Returns the number of files copied.
///
/// # Example
/// ```no_run
/// use rub_common::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_dir_contents_async(Path::new("/source/dir"), Path::new("/dest/dir")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if any IO operation fails (creating directory, reading, copying).
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<u64> {
    copy_dir_filtered_async(src, dst, &|_| true).await
}

/// Recursively copies the files of `src` accepted by `filter` into `dst`.
///
/// `filter` sees each file path relative to `src`; the same relative path is
/// used below `dst`. Parent directories are created on demand, so skipped
/// subtrees leave no empty directories behind. Returns the number of files
/// copied.
///
/// # Errors
///
/// Returns an error if any IO operation fails (creating directory, reading, copying).
pub async fn copy_dir_filtered_async(src: &Path, dst: &Path, filter: PathFilter<'_>) -> Result<u64> {
    fs::create_dir_all(dst)
        .await
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    copy_tree(src, src, dst, filter).await
}

async fn copy_tree(root: &Path, dir: &Path, dst: &Path, filter: PathFilter<'_>) -> Result<u64> {
    let mut copied = 0;
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", dir.display()))?
    {
        let src_path = entry.path();

        if src_path.is_dir() {
            copied += Box::pin(copy_tree(root, &src_path, dst, filter)).await?;
            continue;
        }

        let relative = src_path
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", src_path.display(), root.display()))?;
        if !filter(relative) {
            tracing::trace!(path = %relative.display(), "Skipping filtered file");
            continue;
        }

        let dst_path = dst.join(relative);
        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::copy(&src_path, &dst_path).await.with_context(|| {
            format!(
                "failed to copy {} to {}",
                src_path.display(),
                dst_path.display()
            )
        })?;
        copied += 1;
    }

    Ok(copied)
}
