//! Direct O(N²) inverse transform.
//!
//! `x[n] = (1/N)·Σ X[k]·e^{+i2πkn/N}`. This is the only place the 1/N factor is
//! applied; the forward transform leaves its output unscaled.

use rustfft::num_complex::Complex64;

use super::check_lengths;
use super::dft::unit_roots;
use crate::error::Result;

pub fn idft_into(input: &[Complex64], output: &mut [Complex64]) -> Result<()> {
    check_lengths(input.len(), output.len())?;
    let n = input.len();
    let roots = unit_roots(n);
    let scale = 1.0 / n as f64;

    for (t, sample) in output.iter_mut().enumerate() {
        let mut sum = Complex64::new(0.0, 0.0);
        let mut idx = 0usize;
        for &bin in input {
            sum += bin * roots[idx];
            idx += t;
            if idx >= n {
                idx -= n;
            }
        }
        *sample = sum * scale;
    }
    Ok(())
}

pub fn idft(input: &[Complex64]) -> Result<Vec<Complex64>> {
    let mut output = vec![Complex64::new(0.0, 0.0); input.len()];
    idft_into(input, &mut output)?;
    Ok(output)
}

/// Real component of each value: the recovered signal of a round trip.
pub fn real_part(values: &[Complex64]) -> Vec<f64> {
    values.iter().map(|c| c.re).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transform::dft::dft;

    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                0.6 * (0.05 * t).sin() + 0.3 * (0.31 * t + 1.0).cos()
                    + ((i * 7919) % 97) as f64 / 970.0
            })
            .collect()
    }

    #[test]
    fn round_trip_recovers_signal() {
        for n in [1usize, 2, 7, 1000, 1024] {
            let x = test_signal(n);
            let back = idft(&dft(&x).unwrap()).unwrap();
            assert_eq!(back.len(), n);
            for (i, (orig, rec)) in x.iter().zip(back.iter()).enumerate() {
                let tol = 1e-9 * orig.abs().max(1.0);
                assert!((orig - rec.re).abs() <= tol, "n={} i={}: {} vs {}", n, i, orig, rec.re);
                assert!(rec.im.abs() <= 1e-9, "n={} i={}: imaginary residue {}", n, i, rec.im);
            }
        }
    }

    #[test]
    fn flat_spectrum_is_impulse() {
        let back = idft(&vec![Complex64::new(1.0, 0.0); 8]).unwrap();
        assert!((back[0].re - 1.0).abs() < 1e-12);
        for c in &back[1..] {
            assert!(c.norm() < 1e-12);
        }
    }

    #[test]
    fn real_part_drops_imaginary() {
        let v = [Complex64::new(1.5, 1e-17), Complex64::new(-2.0, -3.0)];
        assert_eq!(real_part(&v), vec![1.5, -2.0]);
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(idft(&[]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn mismatched_output_rejected() {
        let input = vec![Complex64::new(1.0, 0.0); 4];
        let mut out = vec![Complex64::new(0.0, 0.0); 5];
        assert!(matches!(
            idft_into(&input, &mut out),
            Err(Error::InvalidArgument(_))
        ));
    }
}
