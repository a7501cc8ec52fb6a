//! Output path resolution and backup copies.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Derives `<stem>_cleaned<.ext>` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = match input.extension() {
        Some(ext) => format!("{}_cleaned.{}", stem, ext.to_string_lossy()),
        None => format!("{}_cleaned", stem),
    };
    input.with_file_name(name)
}

/// True if both paths resolve to the same absolute location.
pub fn is_same_path(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(std::path::absolute(a)? == std::path::absolute(b)?)
}

/// Copies `input` to `<input>.bak` and verifies the copy.
pub fn create_backup(input: &Path) -> io::Result<PathBuf> {
    let metadata = fs::metadata(input)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("source is not a regular file: {}", input.display()),
        ));
    }

    let mut backup = input.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);

    let written = fs::copy(input, &backup)?;
    if written != metadata.len() {
        return Err(io::Error::new(
            io::ErrorKind::WriteZero,
            format!(
                "incomplete copy: wrote {} bytes, expected {}",
                written,
                metadata.len()
            ),
        ));
    }

    Ok(backup)
}
