//! A module containing [`ErasedVector`], a growable array whose element size is chosen at runtime,
//! and its errors.

mod erased_vector;
mod error;
mod tests;

pub use erased_vector::*;
pub use error::*;
