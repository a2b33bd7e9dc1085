pub mod decode;
pub mod raw;

pub use decode::{decode_audio, AudioData, Encoding};
