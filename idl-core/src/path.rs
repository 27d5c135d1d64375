//! Pure path arithmetic for generated files.
//!
//! All paths here are relative to a shared output root and are never touched
//! on disk.

use std::path::{Component, Path, PathBuf};

/// The generated file path for a source file: same relative location, new
/// extension.
pub fn output_path(source: &str, extension: &str) -> PathBuf {
    Path::new(source).with_extension(extension)
}

/// Remove the extension from the last segment of a `/`-separated path.
///
/// A leading dot (hidden file) is not treated as an extension separator.
pub fn strip_extension(path: &str) -> &str {
    let start = path.rfind('/').map_or(0, |i| i + 1);
    match path[start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..start + dot],
        _ => path,
    }
}

/// The module specifier that imports `to` from within `from`.
///
/// Both arguments are file paths relative to the same root. The result is
/// relative to the directory containing `from`, uses `/` separators, has its
/// extension removed, and always starts with `.` (`./` is prepended when
/// needed).
///
/// Returns `None` when no such path exists: an absolute path, a path that
/// climbs above the root, or a target that names no file.
pub fn relative_module(from: &str, to: &str) -> Option<String> {
    let from = normalize(Path::new(from))?;
    let mut to = normalize(Path::new(to))?;
    let target = to.pop()?;
    let from_dir = from.split_last().map(|(_, dir)| dir)?;

    let common = from_dir
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = vec![".."; from_dir.len() - common];
    segments.extend(to[common..].iter().map(String::as_str));
    segments.push(strip_extension(&target));

    let module = segments.join("/");
    if module.starts_with('.') {
        Some(module)
    } else {
        Some(format!("./{}", module))
    }
}

/// The `/`-separated form of a relative file path, with `.` and `..`
/// segments resolved.
///
/// Returns `None` for an absolute path, a path that climbs above the root,
/// or one that names no file at all.
pub fn normalize_path(path: &str) -> Option<String> {
    let parts = normalize(Path::new(path))?;
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

fn normalize(path: &Path) -> Option<Vec<String>> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => parts.push(part.to_str()?.to_string()),
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts)
}
