use std::fmt;

/// Returned when a vector component is addressed by an index other than 0 or 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ComponentIndexError {
    pub index: usize,
}

impl fmt::Display for ComponentIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vector index {} is out of range; only indices 0 and 1 are addressable",
            self.index
        )
    }
}

impl std::error::Error for ComponentIndexError {}
