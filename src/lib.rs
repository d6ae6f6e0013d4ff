//! A small standard-library substitute built directly on the global allocator.
//!
//! # Purpose
//! This crate provides the handful of containers that low-level programs keep rewriting: a growable
//! array, a growable byte-string that is always nul-terminated, a borrowed string view and some
//! thin file-system helpers that produce those types. None of it is built on [`Vec`] or
//! [`String`], every allocation goes through [`std::alloc`] by hand.
//!
//! # Method
//! Both [`Vector`](collections::contiguous::Vector) and
//! [`ByteString`](text::string::ByteString) share a single growth policy: when an operation needs
//! more room than the current capacity, the buffer is reallocated to twice the length that was
//! requested. Capacity is otherwise exactly what the caller asked for, which makes the behaviour of
//! `reserve` and `shrink_to_fit` easy to reason about (and to test).
//!
//! # Error Handling
//! Growing operations come in pairs. The `try_` form returns a strongly typed error, using enums
//! for static dispatch with small structs (often ZSTs) that implement
//! [`Error`](std::error::Error). The plain form reports the error through the [`log`] facade and
//! leaves the container untouched, so that callers who don't care about allocation failure don't
//! have to handle it at every push.
//!
//! Out-of-bounds access is offered both ways too: `unsafe` unchecked accessors for hot paths, and
//! checked ones that return [`None`], a zero sentinel or a null pointer.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers. Errors are declared with
//! `derive_more` and diagnostics are emitted through `log`, leaving the choice of logger to the
//! host program.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "text")]
pub mod text;

pub mod error {
    //! Errors shared by every growable container in this crate.
    pub use crate::util::error::*;
}

pub(crate) mod util;
