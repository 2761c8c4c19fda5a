use std::path::PathBuf;

use color_eyre::eyre::eyre;
use itertools::{Either, Itertools};
use tracing::info;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::{MARKDOWN_EXT, SiteConfig},
    utils::is_hidden,
};

/// Markdown files at any depth below the posts directory, minus listing
/// pages. A missing directory yields no files. Paths come back sorted so
/// that discovery order is stable between runs.
pub fn discover_posts(site: &SiteConfig) -> color_eyre::Result<Vec<PathBuf>> {
    if !site.posts_dir.is_dir() {
        info!(dir = %site.posts_dir.display(), "no posts directory, nothing to syndicate");
        return Ok(Vec::new());
    }

    let (entries, errors): (Vec<DirEntry>, Vec<walkdir::Error>) = WalkDir::new(&site.posts_dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        .partition_map(|r| match r {
            Ok(v) => Either::Left(v),
            Err(e) => Either::Right(e),
        });

    if !errors.is_empty() {
        return Err(eyre!("Failed to open some directory entries: {errors:?}"));
    }

    let mut md_paths: Vec<PathBuf> = entries
        .into_iter()
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == MARKDOWN_EXT))
        .map(DirEntry::into_path)
        .filter(|p| !site.is_excluded(p))
        .collect();

    md_paths.sort();

    info!(count = md_paths.len(), "discovered posts");
    Ok(md_paths)
}
