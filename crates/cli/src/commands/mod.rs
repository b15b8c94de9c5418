//! Subcommand implementations.
//!
//! Every command writes its report to the given writer so the output can be
//! checked in tests without capturing stdout.

pub mod cart;
pub mod catalog;
pub mod orders;

use tea_house_core::{OrderId, StorageError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Local storage could not be opened or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// No recorded order has this id.
    #[error("Order not found: #{0}")]
    OrderNotFound(OrderId),
}
