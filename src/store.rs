//! The read-only directory of cheat sheets.
//!
//! Each `<command>.json` file under the store root is one document. The
//! store only knows how to name and enumerate files; parsing lives in
//! `document` and memoization in `loader`.

use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name of the bundled store, next to the package or executable.
pub const STORE_DIR_NAME: &str = "cheats";
const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
const DOCUMENT_EXTENSION: &str = "json";

/// A store directory, or no directory at all when discovery failed.
///
/// A rootless store enumerates as empty and resolves no documents.
#[derive(Debug, Clone)]
pub struct Store {
    root: Option<PathBuf>,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Backing file for `command`; the name is lowercased first.
    pub fn document_path(&self, command: &str) -> Option<PathBuf> {
        let root = self.root.as_ref()?;
        Some(root.join(format!("{}.{DOCUMENT_EXTENSION}", document_key(command))))
    }

    /// Every `.json` file in the store, in filesystem enumeration order.
    ///
    /// Entries that cannot be stat'ed are skipped; only a store root that
    /// cannot be read at all is an error.
    pub fn document_files(&self) -> Result<Vec<PathBuf>> {
        let Some(root) = self.root.as_ref() else {
            return Ok(Vec::new());
        };
        let reader =
            fs::read_dir(root).with_context(|| format!("reading store {}", root.display()))?;
        let mut files = Vec::new();
        for entry in reader.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            if !path.is_file() {
                continue;
            }
            files.push(path);
        }
        Ok(files)
    }

    /// Command names (file stems) sorted ascending.
    pub fn command_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .document_files()?
            .iter()
            .filter_map(|path| command_name(path))
            .collect();
        names.sort();
        Ok(names)
    }
}

/// Cache and file key for a command name.
pub fn document_key(command: &str) -> String {
    command.to_lowercase()
}

/// Command name a store file represents.
pub fn command_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

/// Locate the store directory.
///
/// Search order: an explicit override, then the install locations relative
/// to the running executable (`<bin>/cheats`, `<bin>/../share/termi-cheat/cheats`),
/// then the bundled directory recorded at build time. Ancestors of the
/// executable are never searched.
pub fn find_store_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }
        bail!("store directory {} does not exist", path.display());
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = installed_store(exe_dir) {
                debug!(store = %root.display(), "store found beside executable");
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("TERMI_CHEAT_STORE_HINT") {
        let hint_path = PathBuf::from(hint);
        if hint_path.is_dir() {
            debug!(store = %hint_path.display(), "using build-time store");
            return Ok(hint_path);
        }
    }

    bail!("unable to locate the {STORE_DIR_NAME}/ directory; pass --store DIR")
}

/// Install locations checked for an executable living in `exe_dir`.
fn installed_store_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![exe_dir.join(STORE_DIR_NAME)];
    if let Some(prefix) = exe_dir.parent() {
        candidates.push(
            prefix
                .join("share")
                .join(PACKAGE_NAME)
                .join(STORE_DIR_NAME),
        );
    }
    candidates
}

fn installed_store(exe_dir: &Path) -> Option<PathBuf> {
    installed_store_candidates(exe_dir)
        .into_iter()
        .find(|candidate| candidate.is_dir())
}
