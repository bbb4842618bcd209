use thiserror::Error;

/// Errors returned by the list, the deque and the line-reversal utility
#[derive(Debug, Error)]
pub enum Error {
    /// A dynamic value was not an integer, a float or a string
    #[error("unsupported value kind `{kind}`: expected int, float or str")]
    InvalidValueKind { kind: &'static str },
    /// A dynamic integer does not fit in an `i64`
    #[error("integer of type `{kind}` does not fit in a 64-bit signed int")]
    IntegerOutOfRange { kind: &'static str },
    #[error("list is empty")]
    EmptyList,
    #[error("deque is empty")]
    EmptyDeque,
    #[error("value not found in list")]
    NotFound,
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
