use derive_more::{Display, Error, From, IsVariant};

use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfBounds, ReserveError};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("element size must be non-zero")]
pub struct ZeroElementSizeError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected an element of {expected} bytes, found {found}")]
pub struct ElementSizeError {
    pub expected: usize,
    pub found: usize,
}

/// The ways in which adding an element to an [`ErasedVector`](super::ErasedVector) can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum ErasedPushError {
    ElementSize(ElementSizeError),
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    Alloc(AllocError),
}

impl From<ReserveError> for ErasedPushError {
    fn from(value: ReserveError) -> Self {
        match value {
            ReserveError::CapacityOverflow(e) => e.into(),
            ReserveError::Alloc(e) => e.into(),
        }
    }
}
