//! Wavelet function generation
//!
//! Real-valued Morlet and Mexican Hat kernels, and synthesis of a sampled,
//! centred kernel into a padded FFT buffer.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::core::CwtError;

/// Central angular frequency ω₀ of the Morlet kernel
pub const MORLET_OMEGA0: f64 = 6.0;

/// Supported mother wavelets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wavelet {
    /// Cosine-modulated Gaussian (real part of the Morlet wavelet)
    #[default]
    Morlet,
    /// Negative normalised second derivative of a Gaussian
    MexicanHat,
}

impl Wavelet {
    /// Parse from a wavelet name
    ///
    /// Accepts `"morlet"` and `"mexicanHat"`, plus the aliases
    /// `"mexican_hat"` and `"mexh"`.
    pub fn from_name(name: &str) -> Result<Self, CwtError> {
        match name {
            "morlet" => Ok(Wavelet::Morlet),
            "mexicanHat" | "mexican_hat" | "mexh" => Ok(Wavelet::MexicanHat),
            _ => Err(CwtError::UnknownWavelet(name.to_string())),
        }
    }

    /// Canonical name, as accepted by [`Wavelet::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            Wavelet::Morlet => "morlet",
            Wavelet::MexicanHat => "mexicanHat",
        }
    }

    /// Kernel amplitude at time `t` for the given scale
    #[inline]
    pub fn evaluate(self, t: f64, scale: f64) -> f64 {
        match self {
            Wavelet::Morlet => morlet(t, scale),
            Wavelet::MexicanHat => mexican_hat(t, scale),
        }
    }

    /// Centre frequency at scale 1, in cycles per unit time
    ///
    /// Morlet: `ω₀ / 2π`. Mexican Hat: peak of its power spectrum
    /// `ω² e^{-ω²}`, which sits at `ω = √2`.
    pub fn central_frequency(self) -> f64 {
        match self {
            Wavelet::Morlet => MORLET_OMEGA0 / (2.0 * PI),
            Wavelet::MexicanHat => 2.0_f64.sqrt() / (2.0 * PI),
        }
    }
}

impl fmt::Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Wavelet {
    type Err = CwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Wavelet::from_name(s)
    }
}

/// Morlet kernel
///
/// # Formula
/// ```text
/// psi(t) = sqrt(1/s) * exp(-t^2 / (2 s^2)) * cos(w0 * t / s),  w0 = 6
/// ```
///
/// Only the cosine (real) part is produced; no quadrature component is
/// synthesised.
#[inline]
pub fn morlet(t: f64, scale: f64) -> f64 {
    let x = t / scale;
    let x2 = x * x;
    // Far outside the envelope; exp(-x²/2) is already 0
    if !x2.is_finite() {
        return 0.0;
    }
    let norm = (1.0 / scale).sqrt();
    norm * (-x2 / 2.0).exp() * (MORLET_OMEGA0 * x).cos()
}

/// Mexican Hat kernel
///
/// # Formula
/// ```text
/// x = t / s
/// psi(t) = norm * (1 - x^2) * exp(-x^2 / 2) / sqrt(s),  norm = sqrt(2 / (sqrt(3) * pi^0.25))
/// ```
#[inline]
pub fn mexican_hat(t: f64, scale: f64) -> f64 {
    let x = t / scale;
    let x2 = x * x;
    if !x2.is_finite() {
        return 0.0;
    }
    mexican_hat_norm() * (1.0 - x2) * (-x2 / 2.0).exp() / scale.sqrt()
}

#[inline]
fn mexican_hat_norm() -> f64 {
    (2.0 / (3.0_f64.sqrt() * PI.powf(0.25))).sqrt()
}

/// Sample a kernel into a padded buffer
///
/// Index `i` of `out` receives `psi((i - L/2) * dt, scale)` where `L` is
/// `out.len()`, so the kernel peak sits at index `L/2`. With `dt = 1` the
/// time axis is measured in samples.
///
/// # Arguments
/// * `wavelet` - Mother wavelet
/// * `scale` - Dilation factor (> 0)
/// * `dt` - Sampling period of the time axis
/// * `out` - Real half of the kernel buffer; every element is overwritten
pub fn synthesize_kernel(wavelet: Wavelet, scale: f64, dt: f64, out: &mut [f64]) {
    let center = (out.len() / 2) as f64;
    for (i, v) in out.iter_mut().enumerate() {
        let t = (i as f64 - center) * dt;
        *v = wavelet.evaluate(t, scale);
    }
}
