//! Filesystem helpers built on `cap-std` and `camino`.
//!
//! Catalog and request files are addressed by UTF-8 paths supplied on the
//! command line, so every helper resolves the parent directory with ambient
//! authority and then works relative to that capability.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// What a path currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProbe {
    /// Nothing exists at the path.
    Missing,
    /// A regular file.
    File,
    /// Something other than a regular file, such as a directory.
    NotFile,
}

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Report whether `path` is missing, a regular file, or something else.
///
/// A missing parent directory also counts as [`PathProbe::Missing`].
///
/// # Errors
/// Returns an I/O error when the path has no file name or its metadata
/// cannot be read for a reason other than absence.
pub fn probe_path(path: &Utf8Path) -> io::Result<PathProbe> {
    let (dir, name) = match open_dir_and_file(path) {
        Ok(found) => found,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(PathProbe::Missing),
        Err(err) => return Err(err),
    };
    match dir.metadata(name.as_str()) {
        Ok(meta) if meta.is_file() => Ok(PathProbe::File),
        Ok(_) => Ok(PathProbe::NotFile),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(PathProbe::Missing),
        Err(err) => Err(err),
    }
}

/// Open the directory containing `path` and return it with the file name.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("path {path} has no file name")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}
