//! Core CWT algorithm implementation
//!
//! Implements the continuous wavelet transform as a frequency-domain
//! correlation between one pre-transformed signal spectrum and a freshly
//! synthesised kernel per scale.

use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1, Axis};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::progress::{CwtObserver, NoopObserver, Progress};
use super::utils::{padded_length, scales_to_frequencies};
use super::wavelets::{synthesize_kernel, Wavelet};
use crate::fft::{ComplexBuffer, FftError};

/// CWT error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CwtError {
    #[error("Empty input: {what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error("Invalid scale at index {index}: {value} (must be finite, > 0 and have a finite reciprocal)")]
    InvalidScale { index: usize, value: f64 },

    #[error("Non-finite signal sample at index {index}")]
    NonFiniteSample { index: usize },

    #[error("Invalid sampling period: {0} (must be finite and > 0)")]
    InvalidSamplingPeriod(f64),

    #[error("Unknown wavelet: {0}")]
    UnknownWavelet(String),

    #[error("Signal of {0} samples is too long to pad")]
    SignalTooLong(usize),

    #[error("Cancelled after {completed} of {total} scales")]
    Cancelled { completed: usize, total: usize },

    #[error(transparent)]
    Fft(#[from] FftError),
}

/// CWT parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CwtConfig {
    /// Mother wavelet (default: Morlet)
    pub wavelet: Wavelet,
    /// Time between samples; kernel time is `(i - L/2) * sampling_period`
    /// (default: 1.0, i.e. scales measured in samples)
    pub sampling_period: f64,
    /// Spread scales across the rayon thread pool (default: false)
    pub parallel: bool,
}

impl Default for CwtConfig {
    fn default() -> Self {
        Self {
            wavelet: Wavelet::Morlet,
            sampling_period: 1.0,
            parallel: false,
        }
    }
}

impl CwtConfig {
    pub fn with_wavelet(mut self, wavelet: Wavelet) -> Self {
        self.wavelet = wavelet;
        self
    }

    pub fn with_sampling_period(mut self, sampling_period: f64) -> Self {
        self.sampling_period = sampling_period;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// CWT output structure
#[derive(Debug, Clone)]
pub struct CwtOutput {
    /// Magnitude matrix (num_scales, signal_length), normalised by sqrt(scale)
    pub coefs: Array2<f64>,
    /// Frequencies corresponding to scales
    pub frequencies: Array1<f64>,
}

/// Spectrum of the zero-padded signal
///
/// Computed once per invocation and shared read-only by every scale.
#[derive(Debug, Clone)]
pub struct SignalSpectrum {
    spectrum: ComplexBuffer,
    signal_len: usize,
}

impl SignalSpectrum {
    /// Zero-pad `signal` to [`padded_length`] and forward-transform it
    pub fn new(signal: ArrayView1<f64>) -> Result<Self, CwtError> {
        validate_signal(signal)?;

        let signal_len = signal.len();
        let padded = padded_length(signal_len).ok_or(CwtError::SignalTooLong(signal_len))?;

        let mut spectrum = ComplexBuffer::from_real(signal.iter(), padded)?;
        spectrum.fft()?;

        Ok(Self {
            spectrum,
            signal_len,
        })
    }

    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    pub fn padded_len(&self) -> usize {
        self.spectrum.len()
    }

    pub fn spectrum(&self) -> &ComplexBuffer {
        &self.spectrum
    }
}

/// Per-worker scratch space, reused across scales
///
/// The kernel buffer also receives the spectral product and the inverse
/// transform, so one buffer of the padded length is all a scale needs.
#[derive(Debug, Clone)]
pub struct CwtWorkspace {
    kernel: ComplexBuffer,
}

impl CwtWorkspace {
    pub fn new(padded_len: usize) -> Self {
        Self {
            kernel: ComplexBuffer::zeros(padded_len),
        }
    }
}

/// Compute CWT magnitudes for a single scale
///
/// # Arguments
/// * `spectrum` - Pre-transformed signal
/// * `scale` - Current scale value (finite, > 0)
/// * `wavelet` - Mother wavelet
/// * `sampling_period` - Time step of the kernel axis
/// * `workspace` - Scratch buffers sized to `spectrum.padded_len()`
/// * `row` - Output row; receives `min(row.len(), signal_len)` magnitudes
///
/// # Algorithm
/// 1. Synthesise the kernel centred at `L/2`, imaginary part zero, and FFT it
/// 2. Spectral correlation `P = S · conj(K)`:
///    `re = Sre·Kre + Sim·Kim`, `im = Sim·Kre - Sre·Kim`
/// 3. Inverse FFT of `P`
/// 4. Column `m` reads lag `(m + L/2) mod L`, which is the response of the
///    kernel centred on sample `m`; store `sqrt(re² + im²) / sqrt(scale)`
pub fn cwt_single_scale(
    spectrum: &SignalSpectrum,
    scale: f64,
    wavelet: Wavelet,
    sampling_period: f64,
    workspace: &mut CwtWorkspace,
    mut row: ArrayViewMut1<f64>,
) -> Result<(), CwtError> {
    let padded = spectrum.padded_len();
    let kernel = &mut workspace.kernel;
    if kernel.len() != padded {
        *kernel = ComplexBuffer::zeros(padded);
    }

    // Step 1: kernel spectrum
    kernel.clear();
    synthesize_kernel(wavelet, scale, sampling_period, kernel.re_mut());
    kernel.fft()?;

    // Step 2: correlation, written over the kernel spectrum
    {
        let signal = spectrum.spectrum();
        let (s_re, s_im) = (signal.re(), signal.im());
        let (k_re, k_im) = kernel.parts_mut();
        for k in 0..padded {
            let (kr, ki) = (k_re[k], k_im[k]);
            k_re[k] = s_re[k] * kr + s_im[k] * ki;
            k_im[k] = s_im[k] * kr - s_re[k] * ki;
        }
    }

    // Step 3
    kernel.ifft()?;

    // Step 4: magnitudes for the original time axis
    let offset = padded / 2;
    let norm = scale.sqrt();
    for (m, out) in row.iter_mut().take(spectrum.signal_len()).enumerate() {
        *out = kernel.magnitude((m + offset) % padded) / norm;
    }

    Ok(())
}

/// Compute CWT magnitudes for multiple scales
///
/// Runs the three phases: signal preparation, per-scale correlation and
/// assembly. Scales run in list order, or across the rayon pool when
/// `config.parallel` is set; each row is computed the same way in both
/// modes, so the matrix is identical.
///
/// # Arguments
/// * `signal` - Input signal (N samples, finite)
/// * `scales` - Scale values (M values, finite and > 0)
/// * `config` - Wavelet, sampling period and parallelism
/// * `observer` - Progress callback and cancellation check
///
/// # Returns
/// 2D array of shape (M, N)
///
/// # Errors
/// All input validation happens before any transform. On error, including
/// cancellation, no matrix is returned.
pub fn cwt_multi_scale(
    signal: ArrayView1<f64>,
    scales: ArrayView1<f64>,
    config: &CwtConfig,
    observer: &dyn CwtObserver,
) -> Result<Array2<f64>, CwtError> {
    validate_scales(scales)?;
    validate_sampling_period(config.sampling_period)?;

    let spectrum = SignalSpectrum::new(signal)?;

    let n_scales = scales.len();
    let signal_len = spectrum.signal_len();
    let padded = spectrum.padded_len();

    debug!(
        signal_len,
        n_scales,
        padded_len = padded,
        wavelet = %config.wavelet,
        parallel = config.parallel,
        "computing CWT"
    );

    let mut coefs = Array2::zeros((n_scales, signal_len));
    let wavelet = config.wavelet;
    let dt = config.sampling_period;

    if config.parallel {
        let completed = AtomicUsize::new(0);
        let scale_list = scales.to_vec();

        coefs
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .zip(scale_list.par_iter())
            .enumerate()
            .try_for_each_init(
                || CwtWorkspace::new(padded),
                |workspace, (i, (row, &scale))| {
                    if observer.is_cancelled() {
                        return Err(CwtError::Cancelled {
                            completed: completed.load(Ordering::Relaxed),
                            total: n_scales,
                        });
                    }

                    cwt_single_scale(&spectrum, scale, wavelet, dt, workspace, row)?;

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    trace!(index = i, scale, "scale done");
                    observer.on_scale(Progress {
                        index: i,
                        completed: done,
                        total: n_scales,
                        scale,
                    });
                    Ok(())
                },
            )
            .inspect_err(log_cancelled)?;
    } else {
        let mut workspace = CwtWorkspace::new(padded);

        for (i, (row, &scale)) in coefs.axis_iter_mut(Axis(0)).zip(scales.iter()).enumerate() {
            if observer.is_cancelled() {
                let err = CwtError::Cancelled {
                    completed: i,
                    total: n_scales,
                };
                log_cancelled(&err);
                return Err(err);
            }

            cwt_single_scale(&spectrum, scale, wavelet, dt, &mut workspace, row)?;

            trace!(index = i, scale, "scale done");
            observer.on_scale(Progress {
                index: i,
                completed: i + 1,
                total: n_scales,
                scale,
            });
        }
    }

    Ok(coefs)
}

fn log_cancelled(err: &CwtError) {
    if let CwtError::Cancelled { completed, total } = err {
        warn!(completed, total, "CWT cancelled");
    }
}

/// Full CWT computation
///
/// Main entry point: magnitudes plus the frequency of every scale.
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use scaleogram::cwt::{cwt, CwtConfig, Wavelet};
///
/// let signal = Array1::from_shape_fn(256, |i| (i as f64 * 0.2).sin());
/// let scales = Array1::linspace(8.0, 1.0, 16);
/// let config = CwtConfig::default().with_wavelet(Wavelet::MexicanHat);
///
/// let output = cwt(signal.view(), scales.view(), &config).unwrap();
/// assert_eq!(output.coefs.dim(), (16, 256));
/// assert_eq!(output.frequencies.len(), 16);
/// ```
pub fn cwt(
    signal: ArrayView1<f64>,
    scales: ArrayView1<f64>,
    config: &CwtConfig,
) -> Result<CwtOutput, CwtError> {
    cwt_with_observer(signal, scales, config, &NoopObserver)
}

/// [`cwt`] with progress reporting and cancellation
pub fn cwt_with_observer(
    signal: ArrayView1<f64>,
    scales: ArrayView1<f64>,
    config: &CwtConfig,
    observer: &dyn CwtObserver,
) -> Result<CwtOutput, CwtError> {
    let coefs = cwt_multi_scale(signal, scales, config, observer)?;
    let frequencies = scales_to_frequencies(config.wavelet, scales);

    Ok(CwtOutput { coefs, frequencies })
}

/// Scaleogram with default settings for the chosen wavelet
///
/// Sequential, `sampling_period = 1`. Returns the (M, N) magnitude matrix.
///
/// Scales are measured in samples: scale `s` stretches the kernel over `s`
/// sample steps whatever the signal's real sampling rate. For scales in
/// seconds, call [`cwt`] with [`CwtConfig::with_sampling_period`] set to the
/// sample spacing. A 1 Hz sine sampled at 1 kHz peaks near scale 1.0 that
/// way, but near scale 1000 here.
pub fn scaleogram(
    signal: ArrayView1<f64>,
    scales: ArrayView1<f64>,
    wavelet: Wavelet,
) -> Result<Array2<f64>, CwtError> {
    let config = CwtConfig::default().with_wavelet(wavelet);
    cwt_multi_scale(signal, scales, &config, &NoopObserver)
}

fn validate_signal(signal: ArrayView1<f64>) -> Result<(), CwtError> {
    if signal.is_empty() {
        return Err(CwtError::EmptyInput { what: "signal" });
    }
    match signal.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CwtError::NonFiniteSample { index }),
        None => Ok(()),
    }
}

fn validate_scales(scales: ArrayView1<f64>) -> Result<(), CwtError> {
    if scales.is_empty() {
        return Err(CwtError::EmptyInput { what: "scales" });
    }
    for (index, &value) in scales.iter().enumerate() {
        // The kernel normalisation sqrt(1/scale) must stay finite
        if !(value.is_finite() && value > 0.0 && (1.0 / value).is_finite()) {
            return Err(CwtError::InvalidScale { index, value });
        }
    }
    Ok(())
}

fn validate_sampling_period(dt: f64) -> Result<(), CwtError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(CwtError::InvalidSamplingPeriod(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cwt::progress::{CancelFlag, ProgressFn};
    use crate::cwt::wavelets::mexican_hat;
    use approx::assert_relative_eq;
    use ndarray::{arr1, Array1};
    use std::f64::consts::PI;
    use std::sync::Mutex;

    fn sine(n: usize, cycles: f64) -> Array1<f64> {
        Array1::from_shape_fn(n, |i| (2.0 * PI * cycles * i as f64 / n as f64).sin())
    }

    fn row_means(coefs: &Array2<f64>) -> Vec<f64> {
        coefs
            .axis_iter(Axis(0))
            .map(|row| row.sum() / row.len() as f64)
            .collect()
    }

    #[test]
    fn test_cwt_output_shape() {
        let signal = sine(1000, 5.0);
        let scales = Array1::linspace(10.0, 0.1, 100);
        let coefs = scaleogram(signal.view(), scales.view(), Wavelet::Morlet).unwrap();

        assert_eq!(coefs.shape(), &[100, 1000]);
    }

    #[test]
    fn test_cwt_non_negative_and_finite() {
        let signal = Array1::from_shape_fn(300, |i| ((i * 7919) % 101) as f64 / 50.0 - 1.0);
        let scales = arr1(&[0.5, 1.0, 3.0, 12.0, 40.0]);

        for wavelet in [Wavelet::Morlet, Wavelet::MexicanHat] {
            let coefs = scaleogram(signal.view(), scales.view(), wavelet).unwrap();
            assert!(coefs.iter().all(|&v| v.is_finite() && v >= 0.0));
        }
    }

    #[test]
    fn test_cwt_rejects_non_positive_scales() {
        let signal = sine(64, 2.0);

        let err = scaleogram(signal.view(), arr1(&[1.0, 0.0, 2.0]).view(), Wavelet::Morlet).unwrap_err();
        assert_eq!(err, CwtError::InvalidScale { index: 1, value: 0.0 });

        let err = scaleogram(signal.view(), arr1(&[-3.0]).view(), Wavelet::MexicanHat).unwrap_err();
        assert_eq!(err, CwtError::InvalidScale { index: 0, value: -3.0 });

        let err = scaleogram(signal.view(), arr1(&[1.0, f64::NAN]).view(), Wavelet::Morlet).unwrap_err();
        assert!(matches!(err, CwtError::InvalidScale { index: 1, .. }));
    }

    #[test]
    fn test_cwt_tiny_scales_finite_or_rejected() {
        let signal = sine(64, 3.0);

        for wavelet in [Wavelet::Morlet, Wavelet::MexicanHat] {
            for scale in [1e-160, 1e-200, 1e-300] {
                let coefs = scaleogram(signal.view(), arr1(&[scale]).view(), wavelet).unwrap();
                assert!(
                    coefs.iter().all(|&v| v.is_finite() && v >= 0.0),
                    "{} at scale {:e}",
                    wavelet,
                    scale
                );
            }

            // 1 / scale overflows
            let err = scaleogram(signal.view(), arr1(&[2.0, 1e-320]).view(), wavelet).unwrap_err();
            assert_eq!(err, CwtError::InvalidScale { index: 1, value: 1e-320 });
        }
    }

    #[test]
    fn test_scaleogram_scales_in_samples() {
        let signal = sine(256, 5.0);
        let scales = arr1(&[2.0, 6.0, 17.0]);
        let dt = 0.5;

        let by_sample = scaleogram(signal.view(), scales.view(), Wavelet::Morlet).unwrap();
        let default = cwt(signal.view(), scales.view(), &CwtConfig::default()).unwrap();
        assert_eq!(by_sample, default.coefs);

        // Scales in time units: the same kernels, with both sqrt(1/scale)
        // factors picking up sqrt(1/dt)
        let seconds = scales.mapv(|s| s * dt);
        let config = CwtConfig::default().with_sampling_period(dt);
        let timed = cwt(signal.view(), seconds.view(), &config).unwrap();

        for (a, b) in timed.coefs.iter().zip(by_sample.iter()) {
            assert_relative_eq!(*a, 2.0 * b, max_relative = 1e-9, epsilon = 1e-12);
        }
        assert_relative_eq!(timed.frequencies[0], default.frequencies[0] / dt, max_relative = 1e-12);
    }

    #[test]
    fn test_cwt_rejects_empty_input() {
        let empty: Array1<f64> = Array1::zeros(0);
        let signal = sine(64, 2.0);
        let scales = arr1(&[1.0]);

        assert_eq!(
            scaleogram(empty.view(), scales.view(), Wavelet::Morlet).unwrap_err(),
            CwtError::EmptyInput { what: "signal" }
        );
        assert_eq!(
            scaleogram(signal.view(), empty.view(), Wavelet::Morlet).unwrap_err(),
            CwtError::EmptyInput { what: "scales" }
        );
    }

    #[test]
    fn test_cwt_rejects_bad_signal_and_config() {
        let mut signal = sine(32, 1.0);
        signal[7] = f64::INFINITY;
        let scales = arr1(&[1.0]);
        assert_eq!(
            scaleogram(signal.view(), scales.view(), Wavelet::Morlet).unwrap_err(),
            CwtError::NonFiniteSample { index: 7 }
        );

        let signal = sine(32, 1.0);
        let config = CwtConfig::default().with_sampling_period(0.0);
        assert_eq!(
            cwt(signal.view(), scales.view(), &config).unwrap_err(),
            CwtError::InvalidSamplingPeriod(0.0)
        );
    }

    #[test]
    fn test_cwt_zero_signal_gives_zero_matrix() {
        let signal = Array1::zeros(100);
        let scales = arr1(&[0.5, 2.0, 8.0]);
        let coefs = scaleogram(signal.view(), scales.view(), Wavelet::Morlet).unwrap();
        assert!(coefs.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_cwt_deterministic() {
        let signal = sine(500, 7.0);
        let scales = Array1::linspace(20.0, 1.0, 12);

        let a = scaleogram(signal.view(), scales.view(), Wavelet::MexicanHat).unwrap();
        let b = scaleogram(signal.view(), scales.view(), Wavelet::MexicanHat).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cwt_parallel_matches_sequential() {
        let signal = sine(400, 3.0) + &sine(400, 40.0);
        let scales = Array1::linspace(30.0, 0.5, 24);
        let config = CwtConfig::default().with_wavelet(Wavelet::Morlet);

        let sequential = cwt(signal.view(), scales.view(), &config).unwrap();
        let parallel = cwt(signal.view(), scales.view(), &config.with_parallel(true)).unwrap();

        assert_eq!(sequential.coefs, parallel.coefs);
        assert_eq!(sequential.frequencies, parallel.frequencies);
    }

    #[test]
    fn test_cwt_impulse_is_time_aligned() {
        // A unit impulse at sample 500 returns |psi(500 - m)| / sqrt(scale)
        let mut signal = Array1::zeros(1000);
        signal[500] = 1.0;
        let scale = 2.0;
        let coefs = scaleogram(signal.view(), arr1(&[scale]).view(), Wavelet::MexicanHat).unwrap();
        let row = coefs.row(0);

        let peak = row
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 500);

        for m in [480, 495, 500, 502, 510] {
            let expected = mexican_hat(500.0 - m as f64, scale).abs() / scale.sqrt();
            assert_relative_eq!(row[m], expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cwt_localizes_1hz_sine_at_unit_scale() {
        // 1 Hz sine over one second at 1 kHz, scales in seconds
        let signal = sine(1000, 1.0);
        let scales = Array1::linspace(10.0, 0.1, 100);
        let config = CwtConfig::default()
            .with_wavelet(Wavelet::Morlet)
            .with_sampling_period(1.0 / 1000.0);

        let output = cwt(signal.view(), scales.view(), &config).unwrap();
        assert_eq!(output.coefs.dim(), (100, 1000));

        let means = row_means(&output.coefs);
        let best = (0..means.len())
            .max_by(|&a, &b| means[a].total_cmp(&means[b]))
            .unwrap();
        let nearest_period = (0..scales.len())
            .min_by(|&a, &b| (scales[a] - 1.0).abs().total_cmp(&(scales[b] - 1.0).abs()))
            .unwrap();

        assert_eq!(best, nearest_period);
        assert_relative_eq!(scales[best], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cwt_frequencies() {
        // 1 kHz sampling, scales in seconds
        let signal = sine(1000, 1.0);
        let scales = arr1(&[1.0, 0.5]);
        let config = CwtConfig::default().with_sampling_period(1.0 / 1000.0);

        let output = cwt(signal.view(), scales.view(), &config).unwrap();
        let fc = 6.0 / (2.0 * PI);
        assert_relative_eq!(output.frequencies[0], fc, epsilon = 1e-9);
        assert_relative_eq!(output.frequencies[1], 2.0 * fc, epsilon = 1e-9);
    }

    #[test]
    fn test_progress_reported_in_order() {
        let signal = sine(128, 3.0);
        let scales = arr1(&[4.0, 2.0, 1.0]);
        let seen = Mutex::new(Vec::new());
        let observer = ProgressFn(|p: Progress| seen.lock().unwrap().push((p.index, p.completed, p.total, p.scale)));

        cwt_with_observer(signal.view(), scales.view(), &CwtConfig::default(), &observer).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(0, 1, 3, 4.0), (1, 2, 3, 2.0), (2, 3, 3, 1.0)]
        );
    }

    #[test]
    fn test_progress_counts_all_scales_in_parallel() {
        let signal = sine(128, 3.0);
        let scales = Array1::linspace(8.0, 1.0, 16);
        let seen = Mutex::new(Vec::new());
        let observer = ProgressFn(|p: Progress| seen.lock().unwrap().push(p.index));
        let config = CwtConfig::default().with_parallel(true);

        cwt_with_observer(signal.view(), scales.view(), &config, &observer).unwrap();

        let mut indices = seen.into_inner().unwrap();
        indices.sort_unstable();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_cancelled_before_start() {
        let signal = sine(128, 3.0);
        let scales = arr1(&[4.0, 2.0, 1.0]);
        let flag = CancelFlag::new();
        flag.cancel();

        for parallel in [false, true] {
            let config = CwtConfig::default().with_parallel(parallel);
            let err = cwt_with_observer(signal.view(), scales.view(), &config, &flag).unwrap_err();
            assert_eq!(err, CwtError::Cancelled { completed: 0, total: 3 });
        }
    }

    #[test]
    fn test_cancelled_between_scales() {
        struct StopAfter {
            limit: usize,
            done: AtomicUsize,
        }

        impl CwtObserver for StopAfter {
            fn on_scale(&self, _progress: Progress) {
                self.done.fetch_add(1, Ordering::Relaxed);
            }

            fn is_cancelled(&self) -> bool {
                self.done.load(Ordering::Relaxed) >= self.limit
            }
        }

        let signal = sine(128, 3.0);
        let scales = Array1::linspace(8.0, 1.0, 10);
        let observer = StopAfter {
            limit: 3,
            done: AtomicUsize::new(0),
        };

        let err = cwt_with_observer(signal.view(), scales.view(), &CwtConfig::default(), &observer)
            .unwrap_err();
        assert_eq!(err, CwtError::Cancelled { completed: 3, total: 10 });
    }

    #[test]
    fn test_single_scale_reuses_workspace() {
        let signal = sine(200, 9.0);
        let spectrum = SignalSpectrum::new(signal.view()).unwrap();
        assert_eq!(spectrum.padded_len(), 512);
        assert_eq!(spectrum.signal_len(), 200);

        let mut workspace = CwtWorkspace::new(spectrum.padded_len());
        let mut first = Array1::zeros(200);
        let mut again = Array1::zeros(200);

        cwt_single_scale(&spectrum, 3.0, Wavelet::Morlet, 1.0, &mut workspace, first.view_mut()).unwrap();
        cwt_single_scale(&spectrum, 11.0, Wavelet::Morlet, 1.0, &mut workspace, again.view_mut()).unwrap();
        cwt_single_scale(&spectrum, 3.0, Wavelet::Morlet, 1.0, &mut workspace, again.view_mut()).unwrap();

        assert_eq!(first, again);
    }
}
