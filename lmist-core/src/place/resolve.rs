use std::path::{Component, Path, PathBuf};

/// Builds the absolute destination path for `filename` inside `output_dir`.
///
/// A relative `output_dir` is taken relative to `working_dir`. `.` segments
/// are dropped and `..` pops one component, never climbing above the root.
/// An absolute `filename` replaces the directory prefix entirely.
pub fn resolve(working_dir: &Path, output_dir: &Path, filename: &str) -> PathBuf {
    normalize(&working_dir.join(output_dir).join(filename))
}

/// Resolves `path` against `working_dir` without touching the filesystem.
pub fn absolute(working_dir: &Path, path: &Path) -> PathBuf {
    normalize(&working_dir.join(path))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(segment) => normalized.push(segment),
        }
    }

    normalized
}
