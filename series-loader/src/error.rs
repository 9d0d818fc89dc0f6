use thiserror::Error;

/// Everything that can go wrong while loading a dataset.
/// Any failing row aborts the whole load, there are no partial results.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A row is too short for the requested mode
    #[error("line {row}: expected at least {expected} fields, found {found}")]
    Format {
        /// 1-based line of the offending record
        row: u64,
        /// Number of fields the mode needs
        expected: usize,
        /// Number of fields the record has
        found: usize,
    },

    /// A field does not hold a number
    #[error("line {row}, column {column}: '{value}' is not a number")]
    Parse {
        /// 1-based line of the offending record
        row: u64,
        /// 0-based index of the field within the record
        column: usize,
        /// The raw field text
        value: String,
    },

    /// The input is not valid delimited text, e.g. invalid UTF-8
    #[error("malformed input: {0}")]
    Malformed(csv::Error),
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(e) => return LoadError::Io(e),
                _ => unreachable!("is_io_error guarantees an io kind"),
            }
        }
        LoadError::Malformed(err)
    }
}
