use std::path::Path;

use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{
    DecoderOptions, CODEC_TYPE_NULL, CODEC_TYPE_PCM_F32LE, CODEC_TYPE_PCM_S16LE,
    CODEC_TYPE_PCM_S32LE,
};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{Error, Result};

const I16_FULL_SCALE: f64 = 32768.0;
const I32_FULL_SCALE: f64 = 2147483647.0;

/// Decoded samples of the analysis channel plus the stream parameters they came from.
#[derive(Clone, Debug)]
pub struct AudioData {
    /// Normalized samples of the first channel, in [-1.0, 1.0].
    pub samples: Vec<f64>,
    pub sample_rate: u32,
    /// Channel count of the source; only the first one is decoded.
    pub channels: usize,
    pub encoding: Encoding,
}

impl AudioData {
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Sample encodings the decoder accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Int16,
    Int32,
    Float32,
}

/// Decode the first channel of a PCM WAV file into normalized samples.
///
/// The stream is consumed one packet at a time. With `max_count` set, decoding stops
/// as soon as that many samples are collected and the result is truncated exactly at
/// the cap; remaining packets are never read.
pub fn decode_audio(path: &Path, max_count: Option<usize>) -> Result<AudioData> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("wav");

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::UnsupportedFormat("no audio track found".into()))?;

    let track_id = track.id;
    let params = track.codec_params.clone();
    let encoding = detect_encoding(&params)?;
    let channels = params.channels.map_or(1, |c| c.count());
    let sample_rate = params
        .sample_rate
        .ok_or_else(|| Error::UnsupportedFormat("unknown sample rate".into()))?;

    log::debug!(
        "{}: {:?}, {} channel(s), {}Hz",
        path.display(),
        encoding,
        channels,
        sample_rate
    );

    let mut decoder = symphonia::default::get_codecs().make(&params, &DecoderOptions::default())?;

    let cap = max_count.unwrap_or(usize::MAX);
    let expected = params.n_frames.map_or(0, |n| n as usize);
    let mut samples: Vec<f64> = Vec::with_capacity(expected.min(cap));

    while samples.len() < cap {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(msg)) => {
                log::warn!("Skipping undecodable packet: {}", msg);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let remaining = cap - samples.len();
        append_first_channel(&decoded, remaining, &mut samples)?;
    }

    let data = AudioData {
        samples,
        sample_rate,
        channels,
        encoding,
    };

    log::info!(
        "Decoded audio: {} samples, {}Hz, {:.1}s",
        data.samples.len(),
        data.sample_rate,
        data.duration()
    );

    Ok(data)
}

fn detect_encoding(params: &symphonia::core::codecs::CodecParameters) -> Result<Encoding> {
    match params.codec {
        CODEC_TYPE_PCM_S16LE => Ok(Encoding::Int16),
        CODEC_TYPE_PCM_S32LE => Ok(Encoding::Int32),
        CODEC_TYPE_PCM_F32LE => Ok(Encoding::Float32),
        other => {
            let name = symphonia::default::get_codecs()
                .get_codec(other)
                .map_or("unknown codec", |d| d.short_name);
            let bits = params
                .bits_per_sample
                .map_or_else(|| "?".to_string(), |b| b.to_string());
            Err(Error::UnsupportedFormat(format!(
                "{} ({}-bit); expected 16-bit int, 32-bit int or 32-bit float PCM",
                name, bits
            )))
        }
    }
}

/// Append at most `limit` normalized samples of channel 0 from one decoded block.
fn append_first_channel(
    decoded: &AudioBufferRef<'_>,
    limit: usize,
    out: &mut Vec<f64>,
) -> Result<()> {
    match decoded {
        AudioBufferRef::S16(buf) => out.extend(
            buf.chan(0)
                .iter()
                .take(limit)
                .map(|&s| s as f64 / I16_FULL_SCALE),
        ),
        AudioBufferRef::S32(buf) => out.extend(
            buf.chan(0)
                .iter()
                .take(limit)
                .map(|&s| (s as f64 / I32_FULL_SCALE).max(-1.0)),
        ),
        AudioBufferRef::F32(buf) => {
            out.extend(buf.chan(0).iter().take(limit).map(|&s| s as f64))
        }
        _ => {
            return Err(Error::UnsupportedFormat(
                "decoder produced an unexpected sample layout".into(),
            ))
        }
    }
    Ok(())
}
