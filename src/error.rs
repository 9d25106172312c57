//! Error types for scenario construction.

use std::fmt;

/// Map parsing failures.
///
/// All variants are fatal: a malformed map aborts construction, there is
/// nothing to recover into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The input contained no rows.
    Empty,
    /// A row's length differs from the first row's length.
    UnevenRow {
        /// Zero-based row index of the offending line.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character that is not `#`, `.` or a faction marker.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Column of the character.
        x: usize,
        /// Row of the character.
        y: usize,
    },
    /// A dimension overflows the grid's 16-bit coordinate range.
    TooLarge {
        /// Parsed width in cells.
        width: usize,
        /// Parsed height in cells.
        height: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "malformed map: empty input"),
            MapError::UnevenRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed map: row {row} has length {found}, expected {expected}"
            ),
            MapError::UnknownSymbol { symbol, x, y } => {
                write!(f, "malformed map: unknown symbol {symbol:?} at ({x}, {y})")
            }
            MapError::TooLarge { width, height } => {
                write!(f, "malformed map: {width}x{height} exceeds the grid size limit")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Failure to load a scenario from a file.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The file contents did not parse as a map.
    Map(MapError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read map file: {e}"),
            LoadError::Map(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Map(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<MapError> for LoadError {
    fn from(e: MapError) -> Self {
        LoadError::Map(e)
    }
}
