/// Options controlling how an input file is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Whether the first record is a header.
    /// When set, the first record is dropped without being inspected.
    pub has_header: bool,
    /// The field delimiter
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
        }
    }
}
