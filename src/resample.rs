//! Sample-rate conversion on normalized float buffers.
//!
//! [`RateConverter`] wraps a rubato backend chosen by
//! [`ResampleMethod`](crate::ResampleMethod) (or the FFT-based polyphase
//! alternative when its quality option is set) and hides the backend's
//! fixed-chunk processing behind a carry buffer: input that doesn't fill a
//! whole chunk is retained, interleaved, until the next call.

use rubato::{
    FastFixedIn, FftFixedIn, PolynomialDegree, Resampler, SincFixedIn,
    SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::config::{ConvertConfig, ResampleMethod};
use crate::error::ConvertError;

/// Frames consumed by the backend per processing call.
const CHUNK_FRAMES: usize = 1024;

/// One of the rubato resamplers, all driven identically.
enum Backend {
    Sinc(SincFixedIn<f32>),
    Fast(FastFixedIn<f32>),
    Fft(FftFixedIn<f32>),
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sinc(_) => "Sinc",
            Self::Fast(_) => "Fast",
            Self::Fft(_) => "Fft",
        };
        f.debug_tuple(name).finish()
    }
}

impl Backend {
    fn input_frames_next(&self) -> usize {
        match self {
            Self::Sinc(r) => r.input_frames_next(),
            Self::Fast(r) => r.input_frames_next(),
            Self::Fft(r) => r.input_frames_next(),
        }
    }

    fn process(&mut self, planar: &[Vec<f32>]) -> Result<Vec<Vec<f32>>, ConvertError> {
        let result = match self {
            Self::Sinc(r) => r.process(planar, None),
            Self::Fast(r) => r.process(planar, None),
            Self::Fft(r) => r.process(planar, None),
        };
        result.map_err(|e| ConvertError::ResampleFailed {
            reason: e.to_string(),
        })
    }
}

/// Streaming sample-rate converter for interleaved float buffers.
///
/// Preserves channel count and FIFO order; consecutive calls are
/// equivalent to one call over the concatenated input, up to the trailing
/// frames still held in the carry buffer.
#[derive(Debug)]
pub struct RateConverter {
    backend: Backend,
    channels: usize,
    /// Interleaved input frames not yet consumed by the backend.
    carry: Vec<f32>,
    /// Planar scratch reused across calls.
    scratch: Vec<Vec<f32>>,
}

impl RateConverter {
    /// Builds a converter for the given rates and channel count, choosing
    /// the backend from `config`.
    ///
    /// Fails with [`ConvertError::ResamplerInitFailed`] if the backend
    /// rejects the parameters.
    pub fn new(
        from_rate: u32,
        to_rate: u32,
        channels: u16,
        config: &ConvertConfig,
    ) -> Result<Self, ConvertError> {
        let channels = usize::from(channels);
        let ratio = f64::from(to_rate) / f64::from(from_rate);

        let init_failed = |e: rubato::ResamplerConstructionError| ConvertError::ResamplerInitFailed {
            from_rate,
            to_rate,
            reason: e.to_string(),
        };

        let backend = if let Some(quality) = config.zita_quality {
            // The polyphase alternative: the quality knob picks the
            // analysis granularity of the FFT backend.
            let sub_chunks = (quality.clamp(16, 96) / 16) as usize;
            tracing::debug!(
                "resampling {} Hz -> {} Hz using polyphase quality {}",
                from_rate,
                to_rate,
                quality
            );
            Backend::Fft(
                FftFixedIn::new(
                    from_rate as usize,
                    to_rate as usize,
                    CHUNK_FRAMES,
                    sub_chunks,
                    channels,
                )
                .map_err(init_failed)?,
            )
        } else {
            tracing::debug!(
                "resampling {} Hz -> {} Hz using {}",
                from_rate,
                to_rate,
                config.resample_method
            );
            match config.resample_method {
                ResampleMethod::SincBestQuality => Backend::Sinc(
                    SincFixedIn::new(
                        ratio,
                        1.0,
                        sinc_parameters(256, 256, SincInterpolationType::Cubic),
                        CHUNK_FRAMES,
                        channels,
                    )
                    .map_err(init_failed)?,
                ),
                ResampleMethod::SincMediumQuality => Backend::Sinc(
                    SincFixedIn::new(
                        ratio,
                        1.0,
                        sinc_parameters(128, 128, SincInterpolationType::Linear),
                        CHUNK_FRAMES,
                        channels,
                    )
                    .map_err(init_failed)?,
                ),
                ResampleMethod::SincFastest => Backend::Sinc(
                    SincFixedIn::new(
                        ratio,
                        1.0,
                        sinc_parameters(64, 64, SincInterpolationType::Linear),
                        CHUNK_FRAMES,
                        channels,
                    )
                    .map_err(init_failed)?,
                ),
                ResampleMethod::ZeroOrderHold => Backend::Fast(
                    FastFixedIn::new(ratio, 1.0, PolynomialDegree::Nearest, CHUNK_FRAMES, channels)
                        .map_err(init_failed)?,
                ),
                ResampleMethod::Linear => Backend::Fast(
                    FastFixedIn::new(ratio, 1.0, PolynomialDegree::Linear, CHUNK_FRAMES, channels)
                        .map_err(init_failed)?,
                ),
            }
        };

        Ok(Self {
            backend,
            channels,
            carry: Vec::new(),
            scratch: vec![Vec::with_capacity(CHUNK_FRAMES); channels],
        })
    }

    /// Number of input frames currently held over for the next call.
    #[must_use]
    pub fn carried_frames(&self) -> usize {
        self.carry.len() / self.channels
    }

    /// Resamples interleaved input, returning whatever output the backend
    /// produced for the whole chunks available so far.
    ///
    /// Input that does not fill a chunk stays in the carry buffer; the
    /// carry always holds a whole number of frames.
    pub fn process(&mut self, input: &[f32]) -> Result<Vec<f32>, ConvertError> {
        self.carry.extend_from_slice(input);

        let chunk_samples = self.backend.input_frames_next() * self.channels;
        let mut out = Vec::new();
        let mut consumed = 0;

        while self.carry.len() - consumed >= chunk_samples {
            let block = &self.carry[consumed..consumed + chunk_samples];
            for (ch, lane) in self.scratch.iter_mut().enumerate() {
                lane.clear();
                lane.extend(block.iter().skip(ch).step_by(self.channels));
            }

            let produced = self.backend.process(&self.scratch)?;

            let frames = produced.first().map_or(0, Vec::len);
            out.reserve(frames * self.channels);
            for i in 0..frames {
                for lane in &produced {
                    out.push(lane[i]);
                }
            }
            consumed += chunk_samples;
        }

        self.carry.drain(..consumed);
        Ok(out)
    }
}

fn sinc_parameters(
    sinc_len: usize,
    oversampling_factor: usize,
    interpolation: SincInterpolationType,
) -> SincInterpolationParameters {
    SincInterpolationParameters {
        sinc_len,
        f_cutoff: 0.95,
        interpolation,
        oversampling_factor,
        window: WindowFunction::BlackmanHarris2,
    }
}
