//! Radix-2 FFT core
//!
//! In-place iterative Cooley-Tukey transform over a split (real, imaginary)
//! buffer pair, plus the bit-reversal permutation it relies on.

use std::f64::consts::PI;

/// FFT error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    #[error("Invalid FFT length: {0} (must be a non-zero power of two)")]
    InvalidLength(usize),

    #[error("Real and imaginary buffers differ in length: re = {re}, im = {im}")]
    LengthMismatch { re: usize, im: usize },

    #[error("Buffer too small: {needed} samples do not fit in length {len}")]
    BufferTooSmall { needed: usize, len: usize },
}

/// Reverse the low `log2(n)` bits of `i`.
///
/// `n` must be a power of two and `i < n`. For `n == 1` the only valid index
/// is 0, which maps to itself.
///
/// # Examples
/// ```
/// use scaleogram::fft::bit_reverse;
///
/// assert_eq!(bit_reverse(1, 8), 4);
/// assert_eq!(bit_reverse(6, 8), 3);
/// ```
#[inline]
pub fn bit_reverse(i: usize, n: usize) -> usize {
    let bits = n.trailing_zeros();
    if bits == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - bits)
}

fn check_pair(re: &[f64], im: &[f64]) -> Result<usize, FftError> {
    if re.len() != im.len() {
        return Err(FftError::LengthMismatch {
            re: re.len(),
            im: im.len(),
        });
    }
    let n = re.len();
    if !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }
    Ok(n)
}

/// Forward FFT, in place
///
/// Computes `X[k] = sum_j x[j] * e^{-2πi·jk/n}` without scaling.
///
/// # Algorithm
/// 1. Move every element to its bit-reversed position
/// 2. Butterfly passes for `size = 2, 4, ..., n`; within a block the pair
///    `(j, j + size/2)` uses the twiddle of index `k = (j - block) * n/size`
///
/// The twiddle for a given `k` is computed once per pass and applied to every
/// block, so the transform allocates nothing.
///
/// # Errors
/// * `FftError::LengthMismatch` if `re` and `im` differ in length
/// * `FftError::InvalidLength` if the length is not a power of two
pub fn fft_in_place(re: &mut [f64], im: &mut [f64]) -> Result<(), FftError> {
    let n = check_pair(re, im)?;

    for i in 0..n {
        let j = bit_reverse(i, n);
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
    }

    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let step = n / size;

        for m in 0..half {
            let angle = 2.0 * PI * ((m * step) as f64) / (n as f64);
            let (sin, cos) = angle.sin_cos();

            for start in (0..n).step_by(size) {
                let upper = start + m;
                let lower = upper + half;

                // lower * (cos - i·sin)
                let t_re = re[lower] * cos + im[lower] * sin;
                let t_im = im[lower] * cos - re[lower] * sin;

                re[lower] = re[upper] - t_re;
                im[lower] = im[upper] - t_im;
                re[upper] += t_re;
                im[upper] += t_im;
            }
        }

        size <<= 1;
    }

    Ok(())
}

/// Inverse FFT, in place
///
/// Conjugate trick: `ifft(X) = conj(fft(conj(X))) / n`. The forward pass is
/// reused unchanged; the result is divided by `n` and the imaginary part is
/// negated on the way out.
///
/// # Errors
/// Same as [`fft_in_place`].
pub fn ifft_in_place(re: &mut [f64], im: &mut [f64]) -> Result<(), FftError> {
    let n = check_pair(re, im)?;

    for v in im.iter_mut() {
        *v = -*v;
    }

    fft_in_place(re, im)?;

    let n = n as f64;
    for v in re.iter_mut() {
        *v /= n;
    }
    for v in im.iter_mut() {
        *v = -(*v / n);
    }

    Ok(())
}
