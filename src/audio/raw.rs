//! Header-skipping reader for canonical 16-bit PCM WAV files.
//!
//! This does no container parsing at all: it assumes the 44-byte canonical RIFF header
//! and reads everything after it as interleaved little-endian `i16`. Only the `raw`
//! command uses it; everything else goes through [`super::decode::decode_audio`].

use std::path::Path;

use crate::error::{Error, Result};

pub const CANONICAL_HEADER_LEN: usize = 44;

/// Read every 16-bit sample after the canonical header, normalized by 32768.
///
/// Interleaved channels are returned as-is. A trailing odd byte is ignored.
pub fn read_pcm16(path: &Path) -> Result<Vec<f32>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    if bytes.len() < CANONICAL_HEADER_LEN {
        return Err(Error::UnsupportedFormat(format!(
            "{} bytes is shorter than a WAV header",
            bytes.len()
        )));
    }

    let samples: Vec<f32> = bytes[CANONICAL_HEADER_LEN..]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    log::debug!("Raw reader: {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn canonical_wav(name: &str, data: &[i16]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "discrete_signal_raw_{}_{}.wav",
            std::process::id(),
            name
        ));
        let data_len = (data.len() * 2) as u32;
        let mut bytes = Vec::with_capacity(CANONICAL_HEADER_LEN + data_len as usize);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&8000u32.to_le_bytes());
        bytes.extend_from_slice(&16000u32.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for s in data {
            bytes.extend_from_slice(&s.to_le_bytes());
        }
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&bytes).unwrap();
        path
    }

    #[test]
    fn skips_header_and_normalizes() {
        let path = canonical_wav("basic", &[16384, -16384, 0, -32768]);
        let samples = read_pcm16(&path).unwrap();
        assert_eq!(samples, vec![0.5, -0.5, 0.0, -1.0]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn header_only_file_is_empty() {
        let path = canonical_wav("empty", &[]);
        assert!(read_pcm16(&path).unwrap().is_empty());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn truncated_header_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "discrete_signal_raw_{}_short.wav",
            std::process::id()
        ));
        std::fs::write(&path, b"RIFF").unwrap();
        assert!(matches!(
            read_pcm16(&path),
            Err(Error::UnsupportedFormat(_))
        ));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_pcm16(Path::new("/nonexistent/raw.wav")),
            Err(Error::FileNotFound(_))
        ));
    }
}
