/// Result type for fallible conversions.
pub type Result<T> = std::result::Result<T, Vec4Error>;

/// Errors raised when building a vector from untyped data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vec4Error {
    LengthMismatch { expected: usize, found: usize }, // Slice had the wrong number of components.
}

impl std::fmt::Display for Vec4Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vec4Error::LengthMismatch { expected, found } => {
                write!(f, "Length Mismatch: expected {expected} components, found {found}")
            }
        }
    }
}

impl std::error::Error for Vec4Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_lengths() {
        let err = Vec4Error::LengthMismatch { expected: 4, found: 3 };
        assert_eq!(err.to_string(), "Length Mismatch: expected 4 components, found 3");
    }
}
