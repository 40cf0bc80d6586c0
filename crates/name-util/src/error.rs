/// An error produced while building a [`Name`](crate::Name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorKind {
    /// Normalizing the source left nothing behind
    EmptyName { src: String },
}

impl Error {
    /// Creates an error for a source string that normalizes to nothing.
    pub fn empty_name(src: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::EmptyName { src: src.into() },
        }
    }

    /// Returns `true` if this error was caused by an empty name.
    pub fn is_empty_name(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyName { .. })
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ErrorKind::EmptyName { src } => {
                write!(f, "name {src:?} is empty after normalization")
            }
        }
    }
}
