// SPDX-License-Identifier: AGPL-3.0-or-later
//! CLI command implementations

use std::io::Write;
use std::path::{Path, PathBuf};
use txtdir_core::{DataDirResolver, DirectoryLister, ListOrder, TxtResult, TxtdirConfig};

/// Options shared by every command
#[derive(Debug, Default)]
pub struct GlobalOpts {
    pub base_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Build the resolver from config, environment and flags
fn init_resolver(opts: &GlobalOpts) -> TxtResult<DataDirResolver> {
    let config = TxtdirConfig::load(opts.config.as_deref())?;
    config.resolver(opts.base_dir.as_deref())
}

/// Print the resolved data directory
pub fn data_dir<W: Write>(opts: &GlobalOpts, out: &mut W) -> TxtResult<()> {
    let resolved = init_resolver(opts)?.resolve()?;
    writeln!(out, "{}", resolved.display())?;
    Ok(())
}

/// List directory entry names, defaulting to the data directory
pub fn ls<W: Write>(opts: &GlobalOpts, path: Option<&Path>, sort: bool, out: &mut W) -> TxtResult<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => init_resolver(opts)?.resolve()?,
    };

    let order = if sort { ListOrder::Name } else { ListOrder::Native };
    let count = DirectoryLister::new().with_order(order).list_to(&target, out)?;
    tracing::debug!(path = %target.display(), count, "listed directory");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use txtdir_core::TxtError;

    /// Options with an empty config file, so the user's own config is ignored
    fn opts_with_base(tmp: &Path, base: &Path) -> GlobalOpts {
        let config = tmp.join("empty.toml");
        fs::write(&config, "").unwrap();
        GlobalOpts {
            base_dir: Some(base.to_path_buf()),
            config: Some(config),
        }
    }

    #[test]
    fn test_data_dir_prints_resolved_path() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("repo").join("crate").join("src");
        fs::create_dir_all(&base).unwrap();

        let mut out = Vec::new();
        data_dir(&opts_with_base(tmp.path(), &base), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let expected = tmp.path().join("repo").join("data").join("txt");
        assert_eq!(printed.trim_end(), expected.display().to_string());
    }

    #[test]
    fn test_ls_explicit_path() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let mut out = Vec::new();
        ls(&GlobalOpts::default(), Some(tmp.path()), true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a.txt\nb.txt\n");
    }

    #[test]
    fn test_ls_defaults_to_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let data = tmp.path().join("data").join("txt");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("shakespeare.txt"), "").unwrap();
        let base = tmp.path().join("a").join("b");

        let mut out = Vec::new();
        ls(&opts_with_base(tmp.path(), &base), None, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "shakespeare.txt\n");
    }

    #[test]
    fn test_ls_missing_data_dir_fails_without_output() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("a").join("b");

        let mut out = Vec::new();
        let err = ls(&opts_with_base(tmp.path(), &base), None, false, &mut out).unwrap_err();
        assert!(matches!(err, TxtError::NotFound(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_bad_config_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("bad.toml");
        fs::write(&config, "base_dir = [").unwrap();
        let opts = GlobalOpts {
            base_dir: None,
            config: Some(config),
        };

        let mut out = Vec::new();
        let err = data_dir(&opts, &mut out).unwrap_err();
        assert!(matches!(err, TxtError::Config(_)));
        assert!(out.is_empty());
    }
}
