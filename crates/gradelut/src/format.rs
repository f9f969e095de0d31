//! Extension-based LUT format dispatch.

use crate::{Lut3D, LutError, LutResult, cube, spi3d};
use std::fmt;
use std::path::Path;

/// A supported LUT file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutFormat {
    /// Adobe/Resolve `.cube`.
    Cube,
    /// Sony Pictures Imageworks `.spi3d`.
    Spi3d,
}

impl LutFormat {
    /// Detects the format from a path's extension (case-insensitive).
    ///
    /// Fails with [`LutError::UnsupportedFormat`] for anything other
    /// than `.cube` or `.spi3d`, without touching the file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> LutResult<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("cube") => Ok(Self::Cube),
            Some("spi3d") => Ok(Self::Spi3d),
            Some(other) if !other.is_empty() => {
                Err(LutError::UnsupportedFormat(format!(".{other}")))
            }
            _ => Err(LutError::UnsupportedFormat("(no extension)".into())),
        }
    }
}

impl fmt::Display for LutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cube => write!(f, "cube"),
            Self::Spi3d => write!(f, "spi3d"),
        }
    }
}

/// Reads a 3D LUT, picking the parser from the file extension.
pub fn read<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    match LutFormat::from_path(path.as_ref())? {
        LutFormat::Cube => cube::read_3d(path),
        LutFormat::Spi3d => spi3d::read_3d(path),
    }
}

/// Writes a 3D LUT, picking the writer from the file extension.
pub fn write<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    match LutFormat::from_path(path.as_ref())? {
        LutFormat::Cube => cube::write_3d(path, lut),
        LutFormat::Spi3d => spi3d::write_3d(path, lut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_extensions() {
        assert_eq!(LutFormat::from_path("grade.cube").unwrap(), LutFormat::Cube);
        assert_eq!(LutFormat::from_path("grade.SPI3D").unwrap(), LutFormat::Spi3d);
    }

    #[test]
    fn rejects_unknown_extension_without_io() {
        // Path does not exist; dispatch must fail before any read.
        let err = read("/no/such/dir/grade.txt").unwrap_err();
        assert!(matches!(err, LutError::UnsupportedFormat(ref ext) if ext == ".txt"));
    }

    #[test]
    fn missing_extension_names_the_problem() {
        let err = LutFormat::from_path("grade").unwrap_err();
        assert_eq!(err.to_string(), "unsupported LUT format: (no extension)");

        // A bare trailing dot is just as extensionless.
        let err = LutFormat::from_path("grade.").unwrap_err();
        assert_eq!(err.to_string(), "unsupported LUT format: (no extension)");
    }
}
