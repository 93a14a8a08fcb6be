use std::error::Error as StdError;

use strum_macros::{AsRefStr, Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The flags list was not a list at all.
    TypeMismatch { found: &'static str },
    EmptyInput,
    /// Raw entry count, before duplicates are removed.
    TooManyFlags { count: usize },
    InvalidElementType { index: usize, found: &'static str },
    /// A name that is not part of the flag set the container belongs to.
    UnknownFlag { name: String },
}

/// Fieldless view of [`Error`], for matching on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum ErrorKind {
    TypeMismatch,
    EmptyInput,
    TooManyFlags,
    InvalidElementType,
    UnknownFlag,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::TooManyFlags { .. } => ErrorKind::TooManyFlags,
            Error::InvalidElementType { .. } => ErrorKind::InvalidElementType,
            Error::UnknownFlag { .. } => ErrorKind::UnknownFlag,
        }
    }

    pub fn unknown_flag(name: &str) -> Self {
        Error::UnknownFlag {
            name: String::from(name),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::TypeMismatch { found } => {
                write!(f, "{}: flags must be a list, got {}", self.kind(), found)
            }
            Error::EmptyInput => write!(f, "{}: flags list must not be empty", self.kind()),
            Error::TooManyFlags { count } => write!(
                f,
                "{}: flags list must not be longer than {} items, got {}",
                self.kind(),
                crate::MAX_FLAGS,
                count
            ),
            Error::InvalidElementType { index, found } => write!(
                f,
                "{}: flag at index {} must be a string, got {}",
                self.kind(),
                index,
                found
            ),
            Error::UnknownFlag { name } => write!(f, "{}: invalid flag {:?}", self.kind(), name),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;
