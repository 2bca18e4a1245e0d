//! # autodiff-ops
//!
//! Scalar building blocks for a reverse-mode automatic differentiation engine.
//!
//! ## Contents
//!
//! - [`operators`]: elementary functions (`mul`, `sigmoid`, `log`, ...) and the
//!   local backward steps (`log_back`, `inv_back`, `relu_back`) that push an
//!   upstream gradient through them.
//! - [`functional`]: generic `map`, `zip_with` and `reduce` for lifting scalar
//!   functions onto slices, with fallible `try_*` variants.
//! - [`lists`]: `neg_list`, `add_lists`, `sum` and `prod` composed from the two
//!   layers above.
//! - [`UnaryOp`] / [`BinaryOp`]: tags naming each operator, for callers that
//!   record a tape and replay backward steps.
//!
//! Inputs where a value or derivative does not exist (`log(0)`, `inv(0)`,
//! `relu_back(0, _)`) are reported as [`OpError`], never approximated.
//!
//! There are no tensors or graphs here; those live in the crates that call
//! into these functions.

#![warn(
    clippy::perf,
    clippy::correctness,
    clippy::complexity,
    clippy::style,
    clippy::suspicious,
    // clippy::pedantic
)]
#![deny(clippy::undocumented_unsafe_blocks, clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

mod error;
pub mod functional;
pub mod lists;
mod op;
pub mod operators;

// Re-export core types for convenience.
pub use error::{OpError, OpResult};
pub use op::{BinaryOp, UnaryOp};
