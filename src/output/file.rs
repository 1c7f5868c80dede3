//! Append-mode log files.

use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Opens `path` for appending, creating it and any missing parent directories.
///
/// A leading `~` is expanded to the user's home directory.
///
/// # Errors
/// I/O errors from creating the directories or opening the file.
pub fn open_file(path: impl AsRef<Path>) -> io::Result<File> {
    let path = expand(path.as_ref());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    internal::info("FILE", &format!("Opening log file {}", path.display()));
    OpenOptions::new().create(true).append(true).open(path)
}

fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("app.log");

        let mut file = open_file(&path).unwrap();
        file.write_all(b"line\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn appends_instead_of_truncating() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app.log");

        open_file(&path).unwrap().write_all(b"one\n").unwrap();
        open_file(&path).unwrap().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
