//! Higher-order combinators that lift scalar functions onto sequences.
//!
//! Inputs are borrowed and never modified; each call returns a fresh `Vec`
//! (or a single accumulated value for the folds).

/// Applies `f` to every element, preserving order and length.
pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    T: Clone,
    F: FnMut(T) -> U,
{
    seq.iter().map(|x| f(x.clone())).collect()
}

/// Combines `a[i]` with `b[i]` for every index present in both slices.
///
/// The output has `min(a.len(), b.len())` elements. Trailing elements of the
/// longer slice are dropped, never padded and never reported as an error.
pub fn zip_with<A, B, U, F>(a: &[A], b: &[B], mut f: F) -> Vec<U>
where
    A: Clone,
    B: Clone,
    F: FnMut(A, B) -> U,
{
    a.iter()
        .zip(b)
        .map(|(x, y)| f(x.clone(), y.clone()))
        .collect()
}

/// Left fold: `f(...f(f(init, seq[0]), seq[1])..., seq[n-1])`.
///
/// Returns `init` untouched when `seq` is empty.
pub fn reduce<T, Acc, F>(mut f: F, seq: &[T], init: Acc) -> Acc
where
    T: Clone,
    F: FnMut(Acc, T) -> Acc,
{
    let mut acc = init;
    for x in seq {
        acc = f(acc, x.clone());
    }
    acc
}

/// Like [`map`] for a fallible `f`. Stops at the first error and returns it.
///
/// # Errors
/// Returns the first error produced by `f`, in index order.
pub fn try_map<T, U, E, F>(seq: &[T], mut f: F) -> Result<Vec<U>, E>
where
    T: Clone,
    F: FnMut(T) -> Result<U, E>,
{
    let mut out = Vec::with_capacity(seq.len());
    for (i, x) in seq.iter().enumerate() {
        match f(x.clone()) {
            Ok(v) => out.push(v),
            Err(e) => {
                log::debug!("try_map: stopped at index {i} of {}", seq.len());
                return Err(e);
            }
        }
    }
    Ok(out)
}

/// Like [`zip_with`] for a fallible `f`, with the same truncation.
///
/// Elements past the shorter length are never passed to `f`.
///
/// # Errors
/// Returns the first error produced by `f`, in index order.
pub fn try_zip_with<A, B, U, E, F>(a: &[A], b: &[B], mut f: F) -> Result<Vec<U>, E>
where
    A: Clone,
    B: Clone,
    F: FnMut(A, B) -> Result<U, E>,
{
    let len = a.len().min(b.len());
    let mut out = Vec::with_capacity(len);
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        match f(x.clone(), y.clone()) {
            Ok(v) => out.push(v),
            Err(e) => {
                log::debug!("try_zip_with: stopped at index {i} of {len}");
                return Err(e);
            }
        }
    }
    Ok(out)
}

/// Like [`reduce`] for a fallible `f`.
///
/// # Errors
/// Returns the first error produced by `f`; later elements are not visited.
pub fn try_reduce<T, Acc, E, F>(mut f: F, seq: &[T], init: Acc) -> Result<Acc, E>
where
    T: Clone,
    F: FnMut(Acc, T) -> Result<Acc, E>,
{
    let mut acc = init;
    for (i, x) in seq.iter().enumerate() {
        acc = f(acc, x.clone()).inspect_err(|_| {
            log::debug!("try_reduce: stopped at index {i} of {}", seq.len());
        })?;
    }
    Ok(acc)
}
