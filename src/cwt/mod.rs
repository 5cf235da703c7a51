//! # CWT (Continuous Wavelet Transform) Module
//!
//! Scaleogram computation over the crate's radix-2 FFT, with real-valued
//! Morlet and Mexican Hat kernels.

pub mod core;
#[cfg(feature = "python")]
pub mod ffi;
pub mod progress;
pub mod utils;
pub mod wavelets;

// Re-export main types and functions
pub use self::core::{
    cwt, cwt_multi_scale, cwt_single_scale, cwt_with_observer, scaleogram, CwtConfig, CwtError,
    CwtOutput, CwtWorkspace, SignalSpectrum,
};
#[cfg(feature = "python")]
pub use ffi::cwt_py;
pub use progress::{CancelFlag, CwtObserver, NoopObserver, Progress, ProgressFn};
pub use wavelets::Wavelet;
