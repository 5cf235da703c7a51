//! # Scaleogram - Continuous Wavelet Transform engine
//!
//! Computes a time-by-scale magnitude matrix of a real signal using an
//! in-place radix-2 FFT, frequency-domain correlation and real Morlet /
//! Mexican Hat kernels.
//!
//! ```
//! use ndarray::Array1;
//! use scaleogram::cwt::{scaleogram, Wavelet};
//!
//! let signal = Array1::from_shape_fn(1000, |i| (i as f64 * 0.05).sin());
//! let scales = Array1::linspace(10.0, 0.1, 100);
//!
//! let coefs = scaleogram(signal.view(), scales.view(), Wavelet::Morlet).unwrap();
//! assert_eq!(coefs.dim(), (100, 1000));
//! ```
//!
//! Python bindings are available behind the `python` feature.

pub mod cwt;
pub mod fft;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "scaleogram")]
fn py_scaleogram(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cwt::cwt_py, m)?)?;
    Ok(())
}
