//! Utility functions for CWT
//!
//! Padding length and scale-to-frequency conversion.

use ndarray::{Array1, ArrayView1};

use super::wavelets::Wavelet;

/// Padded FFT length for a signal of `n` samples
///
/// Smallest power of two that is at least `2n`, which leaves enough room that
/// circular wrap-around of the frequency-domain correlation cannot reach the
/// first `n` output samples. Returns `None` when that length overflows `usize`.
pub fn padded_length(n: usize) -> Option<usize> {
    n.checked_mul(2)
        .and_then(usize::checked_next_power_of_two)
        .map(|len| len.max(2))
}

/// Frequency analysed at `scale`
///
/// frequency = central_frequency / scale
///
/// The kernel time axis is already in units of the sampling period, so the
/// result is in cycles per those units: cycles per sample with the default
/// period of 1, Hz when the period is given in seconds.
pub fn scale_to_frequency(wavelet: Wavelet, scale: f64) -> f64 {
    wavelet.central_frequency() / scale
}

/// Frequencies for a whole scale list, in the same order
pub fn scales_to_frequencies(wavelet: Wavelet, scales: ArrayView1<f64>) -> Array1<f64> {
    scales.mapv(|scale| scale_to_frequency(wavelet, scale))
}
