//! The conversion pipeline: stage selection and per-chunk orchestration.
//!
//! A chunk moves through up to seven stages:
//!
//! ```text
//! bytes in → native endian → fast narrowing → to float → resample
//!          → to target encoding (or sign flip) → channel remap
//!          → target endian → bytes out
//! ```
//!
//! Stages that don't apply are skipped; the common cases touch the buffer
//! once or twice.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::format;
use crate::resample::RateConverter;
use crate::sound::{SampleEncoding, SoundParams};

/// A built conversion pipeline between two parameter sets.
///
/// Owned by one producer (the decode/output pump) for the lifetime of a
/// stream; conversion state — the resampler and its carry buffer — lives
/// inside and is released on drop. Configuration is read once at
/// construction, so later option changes don't affect a built pipeline.
///
/// # Example
///
/// ```
/// use pcm_convert::{
///     AudioConverter, ConvertConfig, Endian, SampleEncoding, SampleFormat, SoundParams,
/// };
///
/// let from = SoundParams::new(SampleFormat::new(SampleEncoding::S16, Endian::Big), 44100, 1);
/// let to = SoundParams::new(SampleFormat::new(SampleEncoding::S16, Endian::Little), 44100, 2);
/// let mut converter = AudioConverter::new(from, to, &ConvertConfig::default())?;
///
/// let output = converter.convert(&[0x12, 0x34])?;
/// assert_eq!(output, vec![0x34, 0x12, 0x34, 0x12]);
/// # Ok::<(), pcm_convert::ConvertError>(())
/// ```
#[derive(Debug)]
pub struct AudioConverter {
    from: SoundParams,
    to: SoundParams,
    resampler: Option<RateConverter>,
}

impl AudioConverter {
    /// Builds a pipeline converting `from` into `to`.
    ///
    /// Validates the channel mapping, the down-mix encoding, and the
    /// resampling configuration up front, so that [`convert`](Self::convert)
    /// cannot hit an unsupported combination mid-stream.
    ///
    /// # Panics
    ///
    /// Panics if `from == to`; callers must not build an identity pipeline.
    pub fn new(
        from: SoundParams,
        to: SoundParams,
        config: &ConvertConfig,
    ) -> Result<Self, ConvertError> {
        assert!(from != to, "conversion between identical sound parameters");

        if from.channels != to.channels
            && !((from.channels == 1 || from.channels == 6) && to.channels == 2)
        {
            return Err(ConvertError::UnsupportedChannelConversion {
                from: from.channels,
                to: to.channels,
            });
        }

        // The down-mix runs after quantization, on target-encoded samples.
        if from.channels == 6
            && to.channels == 2
            && !matches!(
                to.format.encoding,
                SampleEncoding::S16 | SampleEncoding::S32 | SampleEncoding::Float
            )
        {
            return Err(ConvertError::UnsupportedChannelLayout { format: to.format });
        }

        // A packed-24 sign-only change would need a flipper that doesn't
        // exist at that layout.
        if from.rate == to.rate
            && matches!(
                (from.format.encoding, to.format.encoding),
                (SampleEncoding::S24_3, SampleEncoding::U24_3)
                    | (SampleEncoding::U24_3, SampleEncoding::S24_3)
            )
        {
            return Err(ConvertError::UnsupportedFormat { format: to.format });
        }

        let resampler = if from.rate == to.rate {
            None
        } else {
            if !config.enable_resample {
                return Err(ConvertError::ResamplingDisabled {
                    from_rate: from.rate,
                    to_rate: to.rate,
                });
            }
            Some(RateConverter::new(
                from.rate,
                to.rate,
                from.channels,
                config,
            )?)
        };

        tracing::debug!("converting {} to {}", from, to);
        Ok(Self {
            from,
            to,
            resampler,
        })
    }

    /// Source parameters this pipeline was built for.
    #[must_use]
    pub fn from_params(&self) -> SoundParams {
        self.from
    }

    /// Target parameters this pipeline was built for.
    #[must_use]
    pub fn to_params(&self) -> SoundParams {
        self.to
    }

    /// Returns `true` if this pipeline performs sample-rate conversion.
    #[must_use]
    pub fn is_resampling(&self) -> bool {
        self.resampler.is_some()
    }

    /// Input frames accepted but not yet consumed by the resampler.
    #[must_use]
    pub fn carried_frames(&self) -> usize {
        self.resampler.as_ref().map_or(0, RateConverter::carried_frames)
    }

    /// Converts one chunk of source-format bytes into a freshly allocated
    /// target-format buffer.
    ///
    /// The input is never written to. The only runtime failure is
    /// [`ConvertError::ResampleFailed`]; every other illegal combination
    /// was rejected at construction.
    pub fn convert(&mut self, input: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let mut buf = input.to_vec();
        let mut encoding = self.from.format.encoding;
        let target = self.to.format.encoding;
        let rates_differ = self.from.rate != self.to.rate;

        if self.from.format.needs_swap() {
            format::swap_endian(&mut buf, encoding);
        }

        if !rates_differ {
            if let Some((reduced, narrowed)) = format::fast_reduce(&buf, encoding, target) {
                tracing::trace!("fast conversion: {} -> {}", encoding, narrowed);
                buf = reduced;
                encoding = narrowed;
            }
        }

        let needs_float = rates_differ
            || encoding.is_float() != target.is_float()
            || (!encoding.is_float() && !encoding.same_width(target));

        if needs_float {
            let mut samples = if encoding.is_float() {
                format::floats_from_bytes(&buf)
            } else {
                format::fixed_to_float(&buf, encoding)
            };

            if let Some(resampler) = self.resampler.as_mut() {
                samples = resampler.process(&samples)?;
            }

            buf = if target.is_float() {
                format::floats_to_bytes(&samples)
            } else {
                format::float_to_fixed(&samples, target)
            };
            encoding = target;
        } else if encoding != target {
            // Same width and container; only the sign interpretation differs.
            encoding = format::flip_sign(&mut buf, encoding);
            debug_assert_eq!(encoding, target);
        }

        match (self.from.channels, self.to.channels) {
            (1, 2) => buf = format::mono_to_stereo(&buf, encoding.bytes_per_sample()),
            (6, 2) => {
                tracing::trace!("downmixing 5.1 to stereo");
                buf = format::downmix_5_1_to_stereo(&buf, encoding);
            }
            _ => {}
        }

        if self.to.format.needs_swap() {
            format::swap_endian(&mut buf, encoding);
        }

        Ok(buf)
    }
}
