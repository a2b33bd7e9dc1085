//! Segmentation of a flat sample sequence into fixed-size analysis windows.

use crate::error::{Error, Result};

pub const DEFAULT_WINDOW_SIZE: usize = 1024;

/// Number of windows needed to cover `total` samples: `ceil(total / window_size)`.
pub fn window_count(total: usize, window_size: usize) -> Result<usize> {
    if window_size == 0 {
        return Err(Error::invalid("window size must be positive"));
    }
    Ok(total.div_ceil(window_size))
}

/// Split `samples` into consecutive non-overlapping windows of exactly `window_size`.
///
/// Window `i` covers `[i*window_size, (i+1)*window_size)`; the final window is
/// zero-padded on the right. Empty input produces no windows.
pub fn segment(samples: &[f64], window_size: usize) -> Result<Vec<Vec<f64>>> {
    let count = window_count(samples.len(), window_size)?;
    let mut windows = Vec::with_capacity(count);

    for chunk in samples.chunks(window_size) {
        let mut window = chunk.to_vec();
        window.resize(window_size, 0.0);
        windows.push(window);
    }

    Ok(windows)
}

/// Copy window `index` into `buf`, zero-filling past the end of `samples`.
///
/// `buf.len()` is the window size. Lets a caller reuse one buffer across windows.
pub fn fill_window(samples: &[f64], index: usize, buf: &mut [f64]) -> Result<()> {
    let size = buf.len();
    let count = window_count(samples.len(), size)?;
    if index >= count {
        return Err(Error::invalid(format!(
            "invalid window index {} ({} windows)",
            index, count
        )));
    }

    let start = index * size;
    let end = (start + size).min(samples.len());
    let filled = end - start;
    buf[..filled].copy_from_slice(&samples[start..end]);
    buf[filled..].fill(0.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_last_window() {
        let samples: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let windows = segment(&samples, 4).unwrap();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0], vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(windows[1], vec![5.0, 6.0, 7.0, 8.0]);
        assert_eq!(windows[2], vec![9.0, 10.0, 0.0, 0.0]);
    }

    #[test]
    fn exact_multiple_has_no_padding_window() {
        let windows = segment(&[1.0; 8], 4).unwrap();
        assert_eq!(windows.len(), 2);
        assert!(windows.iter().all(|w| w == &vec![1.0; 4]));
    }

    #[test]
    fn concatenation_reproduces_source() {
        for (len, size) in [(0usize, 3usize), (1, 1), (5, 8), (1000, 7), (2048, 1024), (2049, 1024)] {
            let samples: Vec<f64> = (0..len).map(|i| (i as f64 * 0.37).sin()).collect();
            let windows = segment(&samples, size).unwrap();
            assert_eq!(windows.len(), len.div_ceil(size));
            assert!(windows.iter().all(|w| w.len() == size));

            let joined: Vec<f64> = windows.concat().into_iter().take(len).collect();
            assert_eq!(joined, samples);
        }
    }

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(segment(&[1.0], 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(window_count(10, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn fill_window_reuses_buffer() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut buf = [9.0; 3];
        fill_window(&samples, 1, &mut buf).unwrap();
        assert_eq!(buf, [4.0, 5.0, 0.0]);
        fill_window(&samples, 0, &mut buf).unwrap();
        assert_eq!(buf, [1.0, 2.0, 3.0]);
        assert!(fill_window(&samples, 2, &mut buf).is_err());
    }
}
