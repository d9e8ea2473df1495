//! Location of the ~/.river/ data directory.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.river/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".river");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.river/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}
