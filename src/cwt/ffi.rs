//! Python FFI bindings for CWT
//!
//! Provides Python-callable functions using PyO3.

use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::core::{cwt, CwtConfig};
use super::wavelets::Wavelet;

/// Python-callable CWT function
///
/// # Arguments
/// * `signal` - Input signal (1D numpy array)
/// * `scales` - Scale values (1D numpy array), all > 0
/// * `wavelet` - `"morlet"` or `"mexicanHat"` (default: `"morlet"`)
/// * `sampling_period` - Sampling period (default: 1.0)
/// * `parallel` - Compute scales on the rayon pool (default: false)
///
/// # Returns
/// Tuple of (coefs, frequencies):
/// - coefs: magnitude matrix, shape (num_scales, signal_length)
/// - frequencies: frequency of each scale (1D array)
///
/// # Example (Python)
/// ```python
/// import numpy as np
/// import scaleogram
///
/// t = np.arange(1000) / 1000
/// signal = np.sin(2 * np.pi * t)
/// scales = np.linspace(10, 0.1, 100)
/// coefs, freqs = scaleogram.cwt_py(signal, scales, "morlet", 1e-3)
/// ```
#[pyfunction]
#[pyo3(signature = (signal, scales, wavelet="morlet", sampling_period=1.0, parallel=false))]
pub fn cwt_py<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<'py, f64>,
    scales: PyReadonlyArray1<'py, f64>,
    wavelet: &str,
    sampling_period: f64,
    parallel: bool,
) -> PyResult<(Bound<'py, PyArray2<f64>>, Bound<'py, PyArray1<f64>>)> {
    let wavelet = Wavelet::from_name(wavelet).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let config = CwtConfig {
        wavelet,
        sampling_period,
        parallel,
    };

    let signal = signal.as_array().to_owned();
    let scales = scales.as_array().to_owned();

    // Release the GIL while computing
    let output = py
        .detach(|| cwt(signal.view(), scales.view(), &config))
        .map_err(|e| PyValueError::new_err(format!("CWT error: {}", e)))?;

    Ok((
        output.coefs.into_pyarray(py),
        output.frequencies.into_pyarray(py),
    ))
}
