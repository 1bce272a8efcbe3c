/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use std::error::Error;

use crate::ring_buffer::EMPTY_MESSAGE;

/* -------------------------------------------------------------------------- */
/*                              Struct Definition                             */
/* -------------------------------------------------------------------------- */
#[derive(Debug)]
pub enum CircularBufferError {
    /// a buffer can't be built with a capacity of zero or less
    InvalidCapacity(i64),

    /// the buffer holds no element, this is a notice rather than a fault
    Empty,
    IoError(std::io::Error),
    SerdeError(String),
    Custom(String),
}

/* -------------------------------------------------------------------------- */
/*                            Struct Implementation                           */
/* -------------------------------------------------------------------------- */
impl Error for CircularBufferError {}

impl std::fmt::Display for CircularBufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircularBufferError::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {capacity}, it must be greater than 0")
            }
            CircularBufferError::Empty => write!(f, "{EMPTY_MESSAGE}"),
            CircularBufferError::IoError(e) => write!(f, "IO error: {}", e),
            CircularBufferError::SerdeError(e) => write!(f, "Serialization error: {e}"),
            CircularBufferError::Custom(e) => write!(f, "Error: {e}"),
        }
    }
}

impl CircularBufferError {
    /// return true if the error is only the empty buffer notice
    pub fn is_empty_notice(&self) -> bool {
        matches!(self, CircularBufferError::Empty)
    }
}

/* -------------------------------------------------------------------------- */
/*                             From Implementation                            */
/* -------------------------------------------------------------------------- */
impl From<std::io::Error> for CircularBufferError {
    fn from(value: std::io::Error) -> Self {
        CircularBufferError::IoError(value)
    }
}

impl From<serde_yaml::Error> for CircularBufferError {
    fn from(value: serde_yaml::Error) -> Self {
        CircularBufferError::SerdeError(value.to_string())
    }
}
