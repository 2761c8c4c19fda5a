use std::path::{Component, Path};

/// URL path for a source file relative to the content root: extension
/// dropped, components joined with `/`, leading slash included.
pub fn url_path(rel_src: &Path) -> String {
    let stem = rel_src.with_extension("");
    let mut out = String::new();
    for component in stem.components() {
        if let Component::Normal(part) = component {
            out.push('/');
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

/// Whether a file name is hidden (dot-prefixed). Hidden entries never match
/// the post glob.
pub fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
