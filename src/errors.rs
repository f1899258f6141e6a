use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum KitchenError {
    OutOfBounds { x: usize, y: usize },
    NoPendingOrder,
    InvalidLayout(String),
    InvalidStart { x: usize, y: usize },
    LockError,
    FileReaderError(String),
}

impl fmt::Display for KitchenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitchenError::OutOfBounds { x, y } => write!(f, "position ({}, {}) is out of bounds", x, y),
            KitchenError::NoPendingOrder => write!(f, "no outstanding order"),
            KitchenError::InvalidLayout(reason) => write!(f, "invalid layout: {}", reason),
            KitchenError::InvalidStart { x, y } => {
                write!(f, "player cannot start at ({}, {})", x, y)
            }
            KitchenError::LockError => write!(f, "kitchen lock poisoned"),
            KitchenError::FileReaderError(reason) => {
                write!(f, "could not read kitchen file: {}", reason)
            }
        }
    }
}

impl std::error::Error for KitchenError {}

impl<T> From<std::sync::PoisonError<T>> for KitchenError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        KitchenError::LockError
    }
}
