//! Sequence operations built from the combinators and scalar operators.

use crate::{
    functional::{map, reduce, zip_with},
    operators::{add, mul, neg},
};

/// Negates every element.
pub fn neg_list(seq: &[f64]) -> Vec<f64> {
    map(seq, neg)
}

/// Adds corresponding elements, truncating to the shorter input (see [`zip_with`]).
pub fn add_lists(a: &[f64], b: &[f64]) -> Vec<f64> {
    zip_with(a, b, add)
}

/// Sum of all elements; `0.0` for an empty slice.
pub fn sum(seq: &[f64]) -> f64 {
    reduce(add, seq, 0.0)
}

/// Product of all elements; `1.0` for an empty slice.
pub fn prod(seq: &[f64]) -> f64 {
    reduce(mul, seq, 1.0)
}
