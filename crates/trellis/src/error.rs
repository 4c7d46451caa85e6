//! Error types for the entity model.
//!
//! Every fallible operation in this crate returns [`Error`] through the
//! crate-wide [`Result`] alias. There are exactly two failure classes:
//! structural preconditions ([`Error::InvalidArgument`]) and memory
//! reservation failures ([`Error::AllocationFailure`]).

use std::collections::TryReserveError;

use thiserror::Error;

/// Result alias used by all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for table, column and line operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required object was absent or a structural precondition was
    /// violated: adding a column while lines exist, adding a line to a
    /// zero-column table, sorting by a column without a comparator, or
    /// attaching an object already bound to another table.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Memory could not be reserved during object or copy creation.
    #[error("allocation failure")]
    AllocationFailure,
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocationFailure
    }
}
