use std::{fmt, str::FromStr};

use thiserror::Error;

/// How the columns of each record are reshaped into series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadMode {
    /// Column 0 is x, every further column `i` becomes its own series of `(x, value_i)`.
    /// Rows may differ in width.
    MultiSeries,
    /// Columns 0, 1 and 2 form one 3D point per row
    FixedTriple,
    /// Columns (0, 1) and (0, 2) form two series sharing the same x values
    FixedDouble,
}

impl LoadMode {
    /// All modes, in presentation order
    pub const ALL: [LoadMode; 3] = [LoadMode::MultiSeries, LoadMode::FixedTriple, LoadMode::FixedDouble];

    /// The minimum number of fields a record needs in this mode
    pub fn min_fields(&self) -> usize {
        match self {
            LoadMode::MultiSeries => 1,
            LoadMode::FixedTriple | LoadMode::FixedDouble => 3,
        }
    }

    /// The canonical name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            LoadMode::MultiSeries => "multi-series",
            LoadMode::FixedTriple => "fixed-triple",
            LoadMode::FixedDouble => "fixed-double",
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known [`LoadMode`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown load mode '{0}', expected one of multi-series, fixed-triple, fixed-double")]
pub struct ParseLoadModeError(String);

impl FromStr for LoadMode {
    type Err = ParseLoadModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LoadMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLoadModeError(s.to_string()))
    }
}
