//! Property tests for the scalar operators and their backward steps.

use approx::assert_relative_eq;
use autodiff_ops::{
    OpError,
    operators::{
        IS_CLOSE_TOLERANCE, inv, inv_back, is_close, log, log_back, max, relu, relu_back, sigmoid,
    },
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sigmoid_stays_in_open_unit_interval(x in -30.0f64..30.0) {
        let s = sigmoid(x);
        prop_assert!(s > 0.0 && s < 1.0, "sigmoid({x}) = {s}");
    }

    #[test]
    fn sigmoid_is_symmetric(x in -1e3f64..1e3) {
        assert_relative_eq!(sigmoid(x) + sigmoid(-x), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_never_overflows(x in prop::num::f64::NORMAL) {
        let s = sigmoid(x);
        prop_assert!((0.0..=1.0).contains(&s), "sigmoid({x}) = {s}");
    }

    #[test]
    fn relu_is_max_with_zero(x in any::<f64>().prop_filter("not nan", |x| !x.is_nan())) {
        prop_assert_eq!(relu(x), max(0.0, x));
        prop_assert!(relu(x) >= 0.0);
    }

    #[test]
    fn relu_back_passes_gradient_for_positive_inputs(x in 1e-300f64..1e300, y in any::<f64>()) {
        let out = relu_back(x, y).unwrap();
        prop_assert!(out.to_bits() == y.to_bits());
    }

    #[test]
    fn relu_back_blocks_gradient_for_negative_inputs(x in -1e300f64..-1e-300, y in any::<f64>()) {
        prop_assert_eq!(relu_back(x, y), Ok(0.0));
    }

    #[test]
    fn relu_back_fails_at_zero_for_any_gradient(y in any::<f64>()) {
        let is_undefined = matches!(relu_back(0.0, y), Err(OpError::UndefinedDerivative { .. }));
        prop_assert!(is_undefined);
    }

    #[test]
    fn inv_fails_only_at_zero(x in any::<f64>(), y in -1e3f64..1e3) {
        prop_assert_eq!(inv(x).is_err(), x == 0.0);
        prop_assert_eq!(inv_back(x, y).is_err(), x == 0.0);
    }

    #[test]
    fn log_fails_only_for_non_positive(x in any::<f64>().prop_filter("not nan", |x| !x.is_nan())) {
        prop_assert_eq!(log(x).is_err(), x <= 0.0);
    }

    #[test]
    fn is_close_uses_absolute_tolerance(x in -1e6f64..1e6, d in 0.0f64..0.009) {
        prop_assert!(is_close(x, x + d));
        prop_assert!(!is_close(x, x + 2.0 * IS_CLOSE_TOLERANCE));
    }
}

#[test]
fn sigmoid_extremes() {
    assert_eq!(sigmoid(0.0), 0.5);
    assert_eq!(sigmoid(1e300), 1.0);
    assert_eq!(sigmoid(-1e300), 0.0);
    assert_eq!(sigmoid(f64::INFINITY), 1.0);
    assert_eq!(sigmoid(f64::NEG_INFINITY), 0.0);
}

#[test]
fn relu_back_keeps_non_finite_gradients() {
    assert_eq!(relu_back(2.0, f64::INFINITY), Ok(f64::INFINITY));
    assert_eq!(relu_back(-2.0, f64::NAN), Ok(0.0));
    assert!(relu_back(2.0, f64::NAN).unwrap().is_nan());
}

#[test]
fn derivative_examples() {
    assert_eq!(log_back(2.0, 4.0), Ok(2.0));
    assert_eq!(inv_back(0.0, 1.0), Err(OpError::DivisionByZero { op: "inv_back" }));
    assert_eq!(
        log(0.0),
        Err(OpError::Domain {
            op: "log",
            value: 0.0
        })
    );
}

#[test]
fn is_close_boundary() {
    assert!(is_close(1.0, 1.005));
    assert!(!is_close(1.0, 1.02));
}
