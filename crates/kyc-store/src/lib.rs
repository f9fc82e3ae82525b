//! kyc-store: CSV-backed storage for KYC entries.
//!
//! Contains:
//! - record (the four-column entry, column metadata, validation)
//! - store (ensure / append / read_all over a single CSV file)
//! - error (store and validation errors)

pub mod error;
pub mod record;
pub mod store;

pub use error::{ErrorKind, StoreError, StoreResult, ValidationError};
pub use record::{Column, HEADER, Record, parse_optional_number};
pub use store::{Records, StoreState, append, ensure, read_all, read_to_vec};
