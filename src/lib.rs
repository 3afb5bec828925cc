//! This library is a teaching aid for glass box unit testing.
//! The interesting surface is one classifier function; everything else exists to be tested against.

#![warn(missing_docs)]

/// A module containing the FizzBuzz classifier and its error type
pub mod classify;
/// A module with deliberately trivial functions for introducing assertions
pub mod intro;
/// A module for colored, name-prefixed console output
pub mod printer;

pub use classify::{classify, classify_value, label, ClassifyError, Label};
