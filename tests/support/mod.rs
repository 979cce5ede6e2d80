use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn binary(name: &str) -> PathBuf {
    match name {
        "termi-cheat" => PathBuf::from(env!("CARGO_BIN_EXE_termi-cheat")),
        "tcheat" => PathBuf::from(env!("CARGO_BIN_EXE_tcheat")),
        other => panic!("unknown binary {other}"),
    }
}

/// Store shipped with the package.
pub fn bundled_store() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("cheats")
}

/// Temporary store populated with `(file name, contents)` pairs.
pub fn store_with(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new().context("failed to allocate store dir")?;
    for (name, body) in files {
        fs::write(dir.path().join(name), body)
            .with_context(|| format!("failed to write fixture {name}"))?;
    }
    Ok(dir)
}

/// Run `termi-cheat --store <store> <args>` without asserting on the status.
pub fn run_tool(store: &Path, args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new(binary("termi-cheat"));
    cmd.arg("--store").arg(store).args(args);
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
