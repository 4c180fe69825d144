//! Error types for pcm-convert.
//!
//! All construction-time problems are reported through [`ConvertError`];
//! once a pipeline is built, conversion itself can only fail with
//! [`ConvertError::ResampleFailed`]. Format combinations the pipeline was
//! never built for are programmer errors and panic instead.

use crate::sound::SampleFormat;

/// Errors raised by pipeline construction and conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The requested channel mapping is not supported.
    ///
    /// Only equal channel counts, mono → stereo, and 5.1 → stereo are
    /// implemented.
    #[error("can't change number of channels ({from} to {to})")]
    UnsupportedChannelConversion {
        /// Source channel count.
        from: u16,
        /// Target channel count.
        to: u16,
    },

    /// Sample rates differ but the configuration forbids resampling.
    #[error("resampling disabled ({from_rate} Hz to {to_rate} Hz requested)")]
    ResamplingDisabled {
        /// Source sample rate.
        from_rate: u32,
        /// Target sample rate.
        to_rate: u32,
    },

    /// The configured resample method name is not recognized.
    #[error("bad resample method: {name}")]
    UnknownResampleMethod {
        /// The unrecognized method name.
        name: String,
    },

    /// The underlying resampler rejected the stream parameters.
    #[error("can't resample from {from_rate} Hz to {to_rate} Hz: {reason}")]
    ResamplerInitFailed {
        /// Source sample rate.
        from_rate: u32,
        /// Target sample rate.
        to_rate: u32,
        /// Backend error description.
        reason: String,
    },

    /// A resample step failed at runtime.
    ///
    /// Surfaced from [`AudioConverter::convert`](crate::AudioConverter::convert);
    /// the caller typically ends playback of the current stream.
    #[error("can't resample: {reason}")]
    ResampleFailed {
        /// Backend error description.
        reason: String,
    },

    /// The requested conversion involves a sample format step the pipeline
    /// cannot express (packed 24-bit sign-only change).
    #[error("unsupported sample format conversion involving {format}")]
    UnsupportedFormat {
        /// The offending format.
        format: SampleFormat,
    },

    /// The 5.1 → stereo down-mix does not implement the target encoding.
    #[error("can't downmix to {format}")]
    UnsupportedChannelLayout {
        /// The unsupported target format.
        format: SampleFormat,
    },
}
