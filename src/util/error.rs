use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("memory allocation of {size} bytes failed")]
pub struct AllocError {
    pub size: usize,
}

/// The ways in which a request for more capacity can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum ReserveError {
    CapacityOverflow(CapacityOverflow),
    Alloc(AllocError),
}

/// The ways in which inserting at an index can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum InsertError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    Alloc(AllocError),
}

impl From<ReserveError> for InsertError {
    fn from(value: ReserveError) -> Self {
        match value {
            ReserveError::CapacityOverflow(e) => e.into(),
            ReserveError::Alloc(e) => e.into(),
        }
    }
}
