use std::path::{Path, PathBuf};

/// `{dir}/{name}.{extension}`. The display name is used verbatim, so two
/// players with the same name land on the same file.
pub fn headshot_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}
