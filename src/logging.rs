//! File logging setup.
//!
//! The terminal belongs to the UI, so log records go to a file in the
//! platform data directory instead of stderr.

use directories::ProjectDirs;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// `<data dir>/wirebug.log`, if the platform has a data directory.
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wirebug").map(|dirs| dirs.data_dir().join("wirebug.log"))
}

/// Route `log` records to `path`, appending. Level comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("wirebug.log"));
        }
    }
}
