// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error type.
//!
//! Maps the error taxonomy to concrete variants: `InvalidArgument`,
//! `OutOfRange`, `IllegalState`, `InvalidInput`. The remaining category,
//! `Fatal` (divide-by-zero in the big-integer backend, random-source
//! failure), is never represented here — those conditions panic instead of
//! returning a `Result`.

use thiserror::Error;

/// Errors surfaced at the boundary of a public operation.
///
/// Secrets are never included in any variant's message or fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was null, empty, or otherwise absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric parameter fell outside its permitted range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// An operation was attempted before the level/prime was initialized.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// Input (typically share text) failed to parse or violated a
    /// structural invariant such as duplicate share x-coordinates.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-local `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
