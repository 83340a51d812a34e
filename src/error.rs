//! Errors signalled by the parking lot allocator.
//!
//! Every operation is all-or-nothing: when one of these is returned the lot is left exactly
//! as it was before the call.

use crate::slot::SlotNumber;
use thiserror::Error;

pub type LotResult<T> = Result<T, LotError>;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LotError {
    /// The lot was sized with a slot count that is not a positive integer.
    #[error("Number of slots in the parking lot must be greater than zero (got {0})")]
    InvalidConfiguration(i64),

    /// A vehicle was presented without a registration number or color.
    #[error("Vehicle must have a registration number and a color")]
    InvalidArgument,

    #[error("Parking lot is full")]
    LotFull,

    /// The slot number is not in the occupied set.
    #[error("Slot number {0} is not occupied")]
    SlotNotFound(SlotNumber),
}
