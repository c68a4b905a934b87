//! Loading properties from files and in-memory line slices
//!
//! The text format is one `key=value` pair per line; blank lines and lines
//! whose first non-whitespace character is `#` are skipped. Keys may carry
//! an OS suffix segment (`.linux`, `.freebsd`, `.windows`, `.macosx`) that
//! selects platform-conditional values: the segment matching the target
//! platform is stripped from the key at parse time, so the platform's line
//! wins the plain key while other platforms' lines keep their suffixed keys.
//!
//! The target platform is an explicit [`HostOs`] argument rather than
//! ambient process state, so tests can exercise every platform's parsing
//! on any host.

use crate::error::LoadError;
use crate::map::PropertyMap;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Platforms recognized for OS-conditional keys
///
/// `Macosx` stands in for the Darwin family, matching the suffix used in
/// board definition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOs {
    Linux,
    Freebsd,
    Windows,
    Macosx,
}

impl HostOs {
    /// Detects the running platform
    ///
    /// # Panics
    ///
    /// Panics when the platform is none of the four supported ones:
    /// OS-conditional keys cannot be resolved without a suffix, so there is
    /// no usable fallback.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "freebsd") {
            Self::Freebsd
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Macosx
        } else {
            panic!("Unsupported OS")
        }
    }

    /// The key segment selecting values for this platform
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Freebsd => "freebsd",
            Self::Windows => "windows",
            Self::Macosx => "macosx",
        }
    }
}

/// Reads and parses a properties file
///
/// Line endings are normalized (`\r\n` and bare `\r` both become `\n`)
/// before parsing. Fails with [`LoadError::FileRead`] if the file cannot
/// be read, or [`LoadError::LineFormat`] naming the file and the 0-based
/// line index of the first malformed line.
pub fn load(path: impl AsRef<Path>, os: HostOs) -> Result<PropertyMap, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut properties = PropertyMap::new();
    for (line_num, line) in text.split('\n').enumerate() {
        match parse_line(line, os) {
            Some(ParsedLine::Blank) => {}
            Some(ParsedLine::Pair { key, value }) => properties.set(key, value),
            None => {
                return Err(LoadError::LineFormat {
                    path: path.to_path_buf(),
                    line: line_num,
                });
            }
        }
    }

    debug!(
        "loaded {} properties from '{}'",
        properties.len(),
        path.display()
    );
    Ok(properties)
}

/// Like [`load`], but a missing file yields an empty map instead of an error
///
/// Any other read or parse failure propagates unchanged.
pub fn safe_load(path: impl AsRef<Path>, os: HostOs) -> Result<PropertyMap, LoadError> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("'{}' does not exist, returning empty map", path.display());
            Ok(PropertyMap::new())
        }
        _ => load(path, os),
    }
}

/// Parses properties from a slice of lines
///
/// Per-line semantics are identical to [`load`]; malformed lines are
/// reported as [`LoadError::SliceFormat`] with the slice index.
pub fn load_from_slice<S: AsRef<str>>(lines: &[S], os: HostOs) -> Result<PropertyMap, LoadError> {
    let mut properties = PropertyMap::new();
    for (index, line) in lines.iter().enumerate() {
        match parse_line(line.as_ref(), os) {
            Some(ParsedLine::Blank) => {}
            Some(ParsedLine::Pair { key, value }) => properties.set(key, value),
            None => return Err(LoadError::SliceFormat { index }),
        }
    }
    Ok(properties)
}

enum ParsedLine {
    Blank,
    Pair { key: String, value: String },
}

/// Parses one line; `None` means the line is malformed (no `=`)
fn parse_line(line: &str, os: HostOs) -> Option<ParsedLine> {
    let line = line.trim();

    // Skip empty lines or comments
    if line.is_empty() || line.starts_with('#') {
        return Some(ParsedLine::Blank);
    }

    let (key, value) = line.split_once('=')?;

    // Strip the first occurrence of the platform's suffix segment.
    let key = key.trim().replacen(&format!(".{}", os.suffix()), "", 1);

    Some(ParsedLine::Pair {
        key,
        value: value.trim().to_string(),
    })
}
