use std::{fs, path::Path};

use color_eyre::{Section, eyre::WrapErr};
use tracing::info;

use crate::feed::RenderedFeeds;

/// Write `<name>.xml`, `<name>.atom` and `<name>.json` into `out_dir`,
/// creating it if needed and replacing any previous files. There is no
/// rollback if a later write fails.
pub fn write_feeds(out_dir: &Path, name: &str, feeds: &RenderedFeeds) -> color_eyre::Result<()> {
    fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("Failed to create {}", out_dir.display()))?;

    for (ext, payload) in feeds.outputs() {
        let path = out_dir.join(format!("{name}.{ext}"));
        fs::write(&path, payload)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))
            .with_note(|| "While writing feed outputs.")?;
        info!(file = %path.display(), bytes = payload.len(), "wrote feed");
    }

    Ok(())
}
