use std::fmt;

// === TabError ===

/// Errors related to tab container operations.
#[derive(Debug)]
pub enum TabError {
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}

// === StoreError ===

/// Errors related to the settings store.
#[derive(Debug)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing the store file.
    IoError(String),
    /// Failed to serialize or deserialize the store document.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(msg) => write!(f, "Store I/O error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === PageError ===

/// Errors related to saving a page to disk.
#[derive(Debug)]
pub enum PageError {
    /// Writing the page HTML to the chosen path failed.
    WriteFailed(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::WriteFailed(msg) => write!(f, "Failed to save page: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}
