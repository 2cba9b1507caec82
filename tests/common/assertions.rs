//! Floating-point assertion macros for benchnorm harnesses.
//!
//! Normalized values are ratios of parsed decimals, so exact equality only
//! holds for carefully chosen inputs. These macros compare with a relative
//! tolerance and say which position diverged.

/// Assert two `f64` values agree to a relative tolerance (default `1e-9`).
///
/// ```rust
/// assert_close!(report.series[0].geometric_mean.unwrap(), 0.5);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {
        $crate::assert_close!($actual, $expected, 1e-9)
    };
    ($actual:expr, $expected:expr, $tol:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        let scale = actual.abs().max(expected.abs()).max(1.0);
        if (actual - expected).abs() > $tol * scale {
            panic!(
                "assert_close! failed:\n  expected: {}\n  actual:   {}\n  tolerance: {} (relative)",
                expected, actual, $tol
            );
        }
    }};
}

/// Assert two `f64` slices have the same length and agree element-wise.
#[macro_export]
macro_rules! assert_all_close {
    ($actual:expr, $expected:expr) => {{
        let actual: &[f64] = &$actual;
        let expected: &[f64] = &$expected;
        if actual.len() != expected.len() {
            panic!(
                "assert_all_close! failed: length {} != {}\n  actual:   {:?}\n  expected: {:?}",
                actual.len(),
                expected.len(),
                actual,
                expected
            );
        }
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            let scale = a.abs().max(e.abs()).max(1.0);
            if (a - e).abs() > 1e-9 * scale {
                panic!(
                    "assert_all_close! failed at position {}:\n  expected: {}\n  actual:   {}\n  all actual: {:?}",
                    i, e, a, actual
                );
            }
        }
    }};
}
