//! Custom error types for ledgerbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

use crate::models::Money;

/// Classification of the conditions the posting pipeline can report
///
/// Every variant except `InventoryShortfall` rejects an entry before any state
/// is touched. A shortfall is reported alongside a successful posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unbalanced,
    Empty,
    MissingDate,
    UnknownAccount,
    InventoryShortfall,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbalanced => write!(f, "unbalanced"),
            Self::Empty => write!(f, "empty"),
            Self::MissingDate => write!(f, "missing date"),
            Self::UnknownAccount => write!(f, "unknown account"),
            Self::InventoryShortfall => write!(f, "inventory shortfall"),
        }
    }
}

/// The main error type for ledgerbook operations
#[derive(Error, Debug)]
pub enum BookError {
    /// Total debits differ from total credits
    #[error("Entry is not balanced: debits {debits}, credits {credits}")]
    Unbalanced { debits: Money, credits: Money },

    /// No line carries a nonzero debit or credit
    #[error("Entry has no lines with a debit or credit amount")]
    Empty,

    /// The entry has no date
    #[error("Entry date is required")]
    MissingDate,

    /// A line references an account that is not in the chart
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BookError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for inventory items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Inventory item",
            identifier: identifier.into(),
        }
    }

    /// The posting error kind, if this error is one
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Unbalanced { .. } => Some(ErrorKind::Unbalanced),
            Self::Empty => Some(ErrorKind::Empty),
            Self::MissingDate => Some(ErrorKind::MissingDate),
            Self::UnknownAccount(_) => Some(ErrorKind::UnknownAccount),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledgerbook operations
pub type BookResult<T> = Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BookError::account_not_found("1000");
        assert_eq!(err.to_string(), "Account not found: 1000");
        assert!(err.is_not_found());
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_unbalanced_error() {
        let err = BookError::Unbalanced {
            debits: Money::from_cents(10000),
            credits: Money::from_cents(9000),
        };
        assert_eq!(
            err.to_string(),
            "Entry is not balanced: debits $100.00, credits $90.00"
        );
        assert_eq!(err.kind(), Some(ErrorKind::Unbalanced));
    }

    #[test]
    fn test_posting_kinds() {
        assert_eq!(BookError::Empty.kind(), Some(ErrorKind::Empty));
        assert_eq!(BookError::MissingDate.kind(), Some(ErrorKind::MissingDate));
        assert_eq!(
            BookError::UnknownAccount("9999".into()).kind(),
            Some(ErrorKind::UnknownAccount)
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BookError = io_err.into();
        assert!(matches!(err, BookError::Io(_)));
    }
}
