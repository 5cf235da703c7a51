//! Split-complex working buffer
//!
//! Holds the real and imaginary halves of a complex sequence as two
//! equal-length arrays, which is the layout the radix-2 core works on.

use super::core::{fft_in_place, ifft_in_place, FftError};

/// Complex sequence stored as separate real and imaginary parts
///
/// Both halves always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer {
    re: Vec<f64>,
    im: Vec<f64>,
}

impl ComplexBuffer {
    /// All-zero buffer of `len` samples
    pub fn zeros(len: usize) -> Self {
        Self {
            re: vec![0.0; len],
            im: vec![0.0; len],
        }
    }

    /// Copy real samples into a zero-padded buffer of length `len`
    ///
    /// The imaginary part is zero.
    pub fn from_real<'a, I>(samples: I, len: usize) -> Result<Self, FftError>
    where
        I: IntoIterator<Item = &'a f64>,
        I::IntoIter: ExactSizeIterator,
    {
        let samples = samples.into_iter();
        let needed = samples.len();
        if needed > len {
            return Err(FftError::BufferTooSmall { needed, len });
        }

        let mut buffer = Self::zeros(len);
        for (dst, &src) in buffer.re.iter_mut().zip(samples) {
            *dst = src;
        }
        Ok(buffer)
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn re(&self) -> &[f64] {
        &self.re
    }

    pub fn im(&self) -> &[f64] {
        &self.im
    }

    /// Mutable access to the real half (the imaginary half is left alone)
    pub fn re_mut(&mut self) -> &mut [f64] {
        &mut self.re
    }

    /// Mutable access to both halves at once
    pub fn parts_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.re, &mut self.im)
    }

    /// Modulus of sample `i`, `sqrt(re² + im²)`
    #[inline]
    pub fn magnitude(&self, i: usize) -> f64 {
        let (re, im) = (self.re[i], self.im[i]);
        (re * re + im * im).sqrt()
    }

    /// Zero both halves without reallocating
    pub fn clear(&mut self) {
        self.re.fill(0.0);
        self.im.fill(0.0);
    }

    /// Forward transform in place
    pub fn fft(&mut self) -> Result<(), FftError> {
        fft_in_place(&mut self.re, &mut self.im)
    }

    /// Inverse transform in place
    pub fn ifft(&mut self) -> Result<(), FftError> {
        ifft_in_place(&mut self.re, &mut self.im)
    }
}
