//! A module containing [`StringView`], a borrowed window onto bytes owned elsewhere.

mod string_view;
mod tests;

pub use string_view::*;
