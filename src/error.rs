use std::fmt;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    EmptyList,
    DereferenceInvalid,
    IncrementPastEnd,
    InvalidNode,
    InvalidArgument,
    InvalidIterator,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::EmptyList => write!(f, "front on empty list"),
            ListError::DereferenceInvalid => {
                write!(f, "dereference of an end or before-begin position")
            }
            ListError::IncrementPastEnd => write!(f, "increment past the end of the list"),
            ListError::InvalidNode => write!(f, "sentinel node holds no value"),
            ListError::InvalidArgument => write!(f, "invalid argument"),
            ListError::InvalidIterator => write!(f, "position does not reference a node"),
        }
    }
}

impl std::error::Error for ListError {}
