//! Normalization: divides measurements by their baseline and summarises the
//! result with a geometric mean.
//!
//! Everything here is pure: no I/O, no printing. The textual summary lives in
//! [`crate::summary`].

use serde::Serialize;

use crate::error::{NormError, Result};

/// A normalized series and its geometric mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Normalized {
    /// `values[i] / baseline[i]`, in input order.
    pub values: Vec<f64>,
    /// Geometric mean of the strictly positive entries of `values`.
    pub geometric_mean: f64,
}

impl Normalized {
    /// The values with the geometric mean appended, aligned with a baseline
    /// label axis that ends in `G-Mean`.
    pub fn with_mean(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.values.len() + 1);
        out.extend_from_slice(&self.values);
        out.push(self.geometric_mean);
        out
    }
}

/// Normalize `values` position by position against `baseline`.
///
/// Fails with [`NormError::LengthMismatch`] when the two series differ in
/// length, with [`NormError::ZeroBaseline`] when a baseline value is zero and
/// with [`NormError::NoPositiveValues`] when no ratio is strictly positive.
pub fn normalize(values: &[f64], baseline: &[f64]) -> Result<Normalized> {
    if values.len() != baseline.len() {
        return Err(NormError::LengthMismatch { expected: baseline.len(), actual: values.len() });
    }
    check_nonzero(baseline)?;

    let values: Vec<f64> = values.iter().zip(baseline).map(|(v, b)| v / b).collect();
    let geometric_mean = geometric_mean(&values)?;

    Ok(Normalized { values, geometric_mean })
}

/// Geometric mean over the strictly positive entries of `values`.
///
/// Zero, negative and NaN entries are left out of both the product and the
/// count. When the running product leaves the normal `f64` range the mean is
/// taken in log space instead.
pub fn geometric_mean(values: &[f64]) -> Result<f64> {
    let mut positive = Vec::with_capacity(values.len());
    for &v in values {
        if v > 0.0 {
            positive.push(v);
        } else {
            tracing::warn!(value = v, "non-positive value left out of geometric mean");
        }
    }

    if positive.is_empty() {
        return Err(NormError::NoPositiveValues);
    }

    let count = positive.len() as f64;
    let product: f64 = positive.iter().product();
    if product.is_normal() {
        return Ok(product.powf(1.0 / count));
    }
    let log_sum: f64 = positive.iter().map(|v| v.ln()).sum();
    Ok((log_sum / count).exp())
}

/// Fail with [`NormError::ZeroBaseline`] on the first zero in `baseline`.
pub fn check_nonzero(baseline: &[f64]) -> Result<()> {
    match baseline.iter().position(|&b| b == 0.0) {
        Some(i) => Err(NormError::ZeroBaseline { row: i + 1 }),
        None => Ok(()),
    }
}

/// Divide every value by `reference`.
///
/// Used by scaling mode, where all series are expressed relative to the
/// baseline's first measurement.
pub fn scale_to(values: &[f64], reference: f64) -> Vec<f64> {
    values.iter().map(|v| v / reference).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
