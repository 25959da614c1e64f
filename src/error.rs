//! The error module houses the one error enum used across the entire crate.
//!
//! Transactions return these errors when a guard fails; the description
//! assembler never errors (unresolved references degrade to omitted facets).

use thiserror::Error;

/// The core error type.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A model builder was given incomplete data
    #[error("error building model: {0}")]
    BuilderFailed(String),
    /// The caller is missing a permission needed for this operation
    #[error("insufficient privileges")]
    InsufficientPrivileges,
    /// Negative amounts have no meaning on advances or movement lines
    #[error("negative amount")]
    NegativeAmount,
    /// Applying advances found nothing pending to project
    #[error("no pending advance items to apply")]
    NothingToApply,
    /// An advance cannot be liquidated while it has unsettled items
    #[error("advance still has pending items")]
    AdvanceHasPendingItems,
    /// The operation tried to modify a deleted object
    #[error("object {0} is deleted")]
    ObjectIsDeleted(String),
    /// The operation tried to modify an inactive object
    #[error("object {0} is inactive")]
    ObjectIsInactive(String),
    /// Liquidated records are immutable
    #[error("object {0} is liquidated")]
    ObjectIsLiquidated(String),
    /// A modification was unwrapped with the wrong operation
    #[error("op does not match expected")]
    OpMismatch,
    /// A modification was unwrapped into the wrong model type
    #[error("model type does not match expected")]
    WrongModelType,
}

/// Standard result, but DIFFERENT
pub type Result<T> = std::result::Result<T, Error>;
