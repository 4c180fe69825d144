//! # pcm-convert
//!
//! PCM audio conversion pipeline: sample encoding, rate, channel and
//! endianness conversion between a decoder's output format and the format
//! an audio sink demands.
//!
//! Every chunk of decoded audio passes through one [`AudioConverter`],
//! which picks the needed stages once at construction and then drives each
//! buffer through them:
//!
//! ```text
//! bytes in → native endian → fast narrowing → to float → resample
//!          → to target encoding → channel remap → target endian → bytes out
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pcm_convert::{
//!     AudioConverter, ConvertConfig, Endian, SampleEncoding, SampleFormat, SoundParams,
//! };
//!
//! // An 8 kHz unsigned-8-bit mono stream, played on a sink that wants
//! // 8 kHz signed-16-bit stereo.
//! let from = SoundParams::new(SampleFormat::native(SampleEncoding::U8), 8000, 1);
//! let to = SoundParams::new(
//!     SampleFormat::new(SampleEncoding::S16, Endian::Little),
//!     8000,
//!     2,
//! );
//!
//! let mut converter = AudioConverter::new(from, to, &ConvertConfig::default())?;
//! let output = converter.convert(&[0x80])?; // mid-scale maps to silence
//! assert_eq!(output, vec![0x00, 0x00, 0x00, 0x00]);
//! # Ok::<(), pcm_convert::ConvertError>(())
//! ```
//!
//! ## Scope
//!
//! The pipeline is synchronous and single-threaded per converter: no I/O,
//! no locks, no allocation beyond the per-stage working buffers. Decoders,
//! output back-ends, and the playback machinery around them are external
//! collaborators; this crate only ever sees byte buffers and the two
//! parameter sets describing them.

#![warn(missing_docs)]
// Audio code requires intentional numeric casts between sample formats
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]
mod config;
mod error;
pub mod format;
mod pipeline;
mod resample;
mod sound;

pub use config::{ConvertConfig, ResampleMethod};
pub use error::ConvertError;
pub use pipeline::AudioConverter;
pub use resample::RateConverter;
pub use sound::{Endian, SampleEncoding, SampleFormat, SoundParams};
