//! Direct discrete Fourier transform
//!
//! O(N²) textbook DFT/IDFT over arbitrary lengths. No zero-padding is
//! applied, so the spectrum always has the same length as the input.
//!
//! Cost grows quadratically with the number of frequency points; a few
//! thousand points already take noticeable time per trace.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex spectrum stored as separate real and imaginary parts
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spectrum {
    pub re: Vec<f64>,
    pub im: Vec<f64>,
}

impl Spectrum {
    /// Spectrum of a purely real sequence (imaginary parts zero)
    pub fn from_real(re: Vec<f64>) -> Self {
        let im = vec![0.0; re.len()];
        Self { re, im }
    }

    pub fn from_complex(values: &[Complex64]) -> Self {
        Self {
            re: values.iter().map(|c| c.re).collect(),
            im: values.iter().map(|c| c.im).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// `|X[k]|` for every bin
    pub fn magnitude(&self) -> Vec<f64> {
        self.re
            .iter()
            .zip(&self.im)
            .map(|(&r, &i)| r.hypot(i))
            .collect()
    }

    pub fn to_complex(&self) -> Vec<Complex64> {
        self.re
            .iter()
            .zip(&self.im)
            .map(|(&r, &i)| Complex64::new(r, i))
            .collect()
    }
}

/// `e^{-2πi·m/N}` for m in [0, N)
///
/// Indexing by `(k·n) mod N` keeps the angle small, which is more accurate
/// than evaluating `2πkn/N` directly for large `k·n`. The index is advanced
/// incrementally so `k·n` is never formed (it overflows a 32-bit `usize`
/// for long traces).
fn twiddles(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|m| Complex64::from_polar(1.0, -2.0 * PI * m as f64 / n as f64))
        .collect()
}

/// `(idx + stride) mod n` for `idx, stride < n`
#[inline]
fn step(idx: usize, stride: usize, n: usize) -> usize {
    let next = idx + stride;
    if next >= n {
        next - n
    } else {
        next
    }
}

/// Forward DFT of a real sequence: `X[k] = Σ x[n]·e^{-2πi·k·n/N}`.
///
/// Empty input yields an empty spectrum.
pub fn dft(values: &[f64]) -> Spectrum {
    let n = values.len();
    if n == 0 {
        return Spectrum::default();
    }

    let w = twiddles(n);
    let mut re = vec![0.0; n];
    let mut im = vec![0.0; n];

    for k in 0..n {
        let mut acc = Complex64::new(0.0, 0.0);
        let mut idx = 0;
        for &x in values {
            acc += w[idx] * x;
            idx = step(idx, k, n);
        }
        re[k] = acc.re;
        im[k] = acc.im;
    }

    Spectrum { re, im }
}

/// Inverse DFT returning the real part:
/// `x[n] = (1/N)·Σ (Re[k]·cos(2πkn/N) − Im[k]·sin(2πkn/N))`.
///
/// The output length is `re.len()`. Missing imaginary parts are treated as
/// zero. Empty input yields an empty sequence.
pub fn idft(re: &[f64], im: &[f64]) -> Vec<f64> {
    let n = re.len();
    if n == 0 {
        return Vec::new();
    }

    let w = twiddles(n);
    let scale = 1.0 / n as f64;

    (0..n)
        .map(|t| {
            let mut sum = 0.0;
            let mut idx = 0;
            for (k, &r) in re.iter().enumerate() {
                let i = im.get(k).copied().unwrap_or(0.0);
                // w is e^{-jθ}: cos θ = w.re, sin θ = -w.im
                let tw = w[idx];
                sum += r * tw.re + i * tw.im;
                idx = step(idx, t, n);
            }
            sum * scale
        })
        .collect()
}

/// Inverse DFT of a [`Spectrum`]
pub fn idft_spectrum(spectrum: &Spectrum) -> Vec<f64> {
    idft(&spectrum.re, &spectrum.im)
}

/// Amplitude spectrum `|DFT(x)|`
pub fn dft_abs(values: &[f64]) -> Vec<f64> {
    dft(values).magnitude()
}

/// Inverse DFT of `values` taken as a real spectrum with zero imaginary part
pub fn idft_real(values: &[f64]) -> Vec<f64> {
    idft(values, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dft_impulse_is_flat() {
        let x = [1.0, 0.0, 0.0, 0.0, 0.0];
        let spec = dft(&x);
        for k in 0..5 {
            assert_relative_eq!(spec.re[k], 1.0, epsilon = 1e-12);
            assert_relative_eq!(spec.im[k], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dft_constant_is_dc() {
        let x = [2.0; 6];
        let spec = dft(&x);
        assert_relative_eq!(spec.re[0], 12.0, epsilon = 1e-12);
        for k in 1..6 {
            assert_relative_eq!(spec.magnitude()[k], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dft_cosine_bins() {
        let n = 8;
        let x: Vec<f64> = (0..n)
            .map(|t| (2.0 * PI * t as f64 / n as f64).cos())
            .collect();
        let mag = dft_abs(&x);
        assert_relative_eq!(mag[1], 4.0, epsilon = 1e-12);
        assert_relative_eq!(mag[7], 4.0, epsilon = 1e-12);
        assert_relative_eq!(mag[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(mag[4], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sine_sign_convention() {
        // sin(2πt/N) has X[1] = -jN/2
        let n = 4;
        let x: Vec<f64> = (0..n)
            .map(|t| (2.0 * PI * t as f64 / n as f64).sin())
            .collect();
        let spec = dft(&x);
        assert_relative_eq!(spec.re[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(spec.im[1], -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_law() {
        for n in 1..=64 {
            let x: Vec<f64> = (0..n)
                .map(|t| (t as f64 * 0.37).sin() * 3.0 + (t % 5) as f64 - 1.25)
                .collect();
            let spec = dft(&x);
            assert_eq!(spec.len(), n);
            let back = idft_spectrum(&spec);
            assert_eq!(back.len(), n);
            for (a, b) in x.iter().zip(&back) {
                assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_idft_real_of_flat_spectrum_is_impulse() {
        let y = idft_real(&[1.0; 4]);
        assert_relative_eq!(y[0], 1.0, epsilon = 1e-12);
        for v in &y[1..] {
            assert_relative_eq!(*v, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(dft(&[]).is_empty());
        assert!(idft(&[], &[]).is_empty());
        assert!(dft_abs(&[]).is_empty());
        assert!(idft_real(&[]).is_empty());
    }

    #[test]
    fn test_spectrum_complex_roundtrip() {
        let c = vec![Complex64::new(1.0, -2.0), Complex64::new(0.5, 0.25)];
        let spec = Spectrum::from_complex(&c);
        assert_eq!(spec.to_complex(), c);
        assert_relative_eq!(spec.magnitude()[0], 5f64.sqrt());
    }
}
