//! genman: generate the isoforge man page from the script's comment header.
//!
//! Reads the documented header of `inc/isoforge.sh` and the `VERSION` file,
//! renders `docs/man/isoforge.1` (creating parent directories as needed),
//! and prints a one-line confirmation. The tool takes no arguments and can
//! be run from anywhere inside the repository; the repo root is the nearest
//! ancestor directory containing `VERSION`.

mod header;
mod man;

use anyhow::{Context, Result};
use chrono::Utc;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Version file, doubling as the repo-root marker.
const VERSION_FILE: &str = "VERSION";

/// Script whose header is documented, relative to the repo root.
const SCRIPT_PATH: &str = "inc/isoforge.sh";

/// Destination man page, relative to the repo root.
const MAN_PATH: &str = "docs/man/isoforge.1";

fn main() -> Result<()> {
    let cwd = env::current_dir().context("failed to read working directory")?;
    let root = locate_root(&cwd).with_context(|| {
        format!(
            "no {} file found in {} or any parent directory",
            VERSION_FILE,
            cwd.display()
        )
    })?;

    let version_path = root.join(VERSION_FILE);
    let version = fs::read_to_string(&version_path)
        .with_context(|| format!("failed to read {}", version_path.display()))?
        .trim()
        .to_string();

    let script_path = root.join(SCRIPT_PATH);
    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("failed to read {}", script_path.display()))?;

    let parsed = header::parse(&source);
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let page = man::render(&parsed, &version, &date);

    let man_path = root.join(MAN_PATH);
    if let Some(parent) = man_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&man_path, &page)
        .with_context(|| format!("failed to write {}", man_path.display()))?;

    println!("Wrote {}", man_path.display());
    Ok(())
}

/// Walk upward from `start` to the nearest directory containing the
/// version file.
fn locate_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(VERSION_FILE).is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn root_found_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VERSION_FILE), "1.0.0\n").unwrap();
        assert_eq!(locate_root(dir.path()), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn root_found_from_nested_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VERSION_FILE), "1.0.0\n").unwrap();
        let nested = dir.path().join("docs/man");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(locate_root(&nested), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn version_dir_is_not_a_marker() {
        // A directory named VERSION does not count; the marker is a file.
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(VERSION_FILE)).unwrap();
        fs::write(dir.path().join("VERSION/keep"), "x").unwrap();
        assert_ne!(locate_root(dir.path()), Some(dir.path().to_path_buf()));
    }
}
