//! ledgerbook - double-entry bookkeeping with FIFO inventory costing
//!
//! This library provides the core of the ledgerbook application: a chart of
//! accounts, a journal whose entries must balance before they are posted, a
//! perpetual FIFO inventory driven by account roles, and the reports derived
//! from posted history.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, journal entries, cost layers)
//! - `services`: Validation, posting and inventory costing
//! - `reports`: Trial balance, income statement, balance sheet and ledger
//! - `storage`: JSON file storage layer
//! - `export`: Full-book export and import
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledgerbook::models::{Book, JournalLine, Money};
//! use ledgerbook::reports::TrialBalanceReport;
//! use ledgerbook::services::{JournalService, NewJournalEntry};
//!
//! let mut book = Book::with_default_chart();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! JournalService::new(&mut book)
//!     .record(
//!         NewJournalEntry::new(date)
//!             .line(JournalLine::debit("1000", Money::from_cents(500_000)))
//!             .line(JournalLine::credit("3000", Money::from_cents(500_000))),
//!     )
//!     .unwrap();
//!
//! assert!(TrialBalanceReport::generate(&book).is_balanced());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BookError, BookResult};
pub use models::{Book, Money, Quantity};
