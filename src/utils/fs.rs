use crate::error::{Result, UpdateError};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => UpdateError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => UpdateError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Truncates `path` and writes `contents` in a single call.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let map_err = |e: std::io::Error| match e.kind() {
        std::io::ErrorKind::PermissionDenied => UpdateError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => UpdateError::Write {
            path: path.to_path_buf(),
            source: e,
        },
    };

    let mut file = File::create(path).map_err(map_err)?;
    file.write_all(contents).map_err(map_err)?;
    Ok(())
}
