pub mod error;
pub mod result;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod log;
#[cfg(test)]
pub mod panic;
