//! Lexical path normalization

use crate::error::{TxtError, TxtResult};
use std::path::{Component, Path, PathBuf};

/// Clean a path without touching the filesystem.
///
/// `.` components are dropped and `..` removes the preceding normal
/// component. `..` directly under the root stays at the root; leading `..`
/// on a relative path is kept. Symlinks are not resolved.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.as_ref().components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Join a relative path onto `cwd` and normalize. Absolute paths ignore `cwd`.
pub fn absolutize_from(path: impl AsRef<Path>, cwd: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(cwd.as_ref().join(path))
    }
}

/// Absolute, normalized form of `path`, relative to the current directory.
pub fn absolutize(path: impl AsRef<Path>) -> TxtResult<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir().map_err(|source| TxtError::AbsolutePath {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(absolutize_from(path, cwd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dot() {
        assert_eq!(normalize("/home/./user/."), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_normalize_dotdot() {
        assert_eq!(
            normalize("/repo/txtdir-core/src/../../data/txt"),
            PathBuf::from("/repo/data/txt")
        );
    }

    #[test]
    fn test_normalize_dotdot_at_root() {
        assert_eq!(normalize("/../../etc"), PathBuf::from("/etc"));
        assert_eq!(normalize("/.."), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_relative_keeps_leading_dotdot() {
        assert_eq!(normalize("../../data"), PathBuf::from("../../data"));
        assert_eq!(normalize("a/../../b"), PathBuf::from("../b"));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), PathBuf::from("."));
        assert_eq!(normalize("a/.."), PathBuf::from("."));
    }

    #[test]
    fn test_normalize_redundant_separators() {
        assert_eq!(normalize("//home//user//"), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_absolutize_from_relative() {
        let abs = absolutize_from("../data/txt", "/srv/app/bin");
        assert_eq!(abs, PathBuf::from("/srv/app/data/txt"));
    }

    #[test]
    fn test_absolutize_from_ignores_cwd_for_absolute() {
        let abs = absolutize_from("/srv/data/./txt", "/somewhere/else");
        assert_eq!(abs, PathBuf::from("/srv/data/txt"));
    }

    #[test]
    fn test_absolutize_uses_current_dir() {
        let abs = absolutize("some/rel").unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/rel"));
    }
}
