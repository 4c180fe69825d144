//! Configuration consumed at pipeline construction.
//!
//! Options are read once by [`AudioConverter::new`](crate::AudioConverter::new);
//! a built pipeline is insensitive to later changes.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Resampling method, matching the recognized configuration names.
///
/// The three sinc grades trade quality for speed; `ZeroOrderHold` and
/// `Linear` are the classic cheap interpolators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleMethod {
    /// Highest-quality windowed-sinc interpolation.
    SincBestQuality,
    /// Medium-quality windowed-sinc interpolation.
    SincMediumQuality,
    /// Fastest windowed-sinc interpolation.
    SincFastest,
    /// Sample-and-hold (nearest neighbour).
    ZeroOrderHold,
    /// Linear interpolation.
    #[default]
    Linear,
}

/// Recognized method names, shared by [`FromStr`] and the config validator
/// so a bad value fails at startup rather than mid-stream.
const METHOD_NAMES: [(&str, ResampleMethod); 5] = [
    ("SincBestQuality", ResampleMethod::SincBestQuality),
    ("SincMediumQuality", ResampleMethod::SincMediumQuality),
    ("SincFastest", ResampleMethod::SincFastest),
    ("ZeroOrderHold", ResampleMethod::ZeroOrderHold),
    ("Linear", ResampleMethod::Linear),
];

impl ResampleMethod {
    /// Returns the canonical configuration name of this method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match METHOD_NAMES.iter().find(|(_, m)| *m == self) {
            Some((name, _)) => name,
            None => unreachable!(),
        }
    }
}

impl FromStr for ResampleMethod {
    type Err = ConvertError;

    /// Parses a configuration value, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        METHOD_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, method)| *method)
            .ok_or_else(|| ConvertError::UnknownResampleMethod {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion options, read once when a pipeline is built.
///
/// # Example
///
/// ```
/// use pcm_convert::{ConvertConfig, ResampleMethod};
///
/// let config = ConvertConfig {
///     resample_method: ResampleMethod::SincMediumQuality,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Whether sample-rate conversion is allowed at all.
    ///
    /// When `false` and the source and target rates differ, construction
    /// fails with [`ConvertError::ResamplingDisabled`].
    /// Default: `true`
    pub enable_resample: bool,

    /// Resampling method used when rates differ.
    ///
    /// Default: [`ResampleMethod::Linear`]
    pub resample_method: ResampleMethod,

    /// Quality level for the alternative polyphase resampler.
    ///
    /// When set, the FFT-based polyphase backend replaces
    /// [`resample_method`](Self::resample_method) entirely. The value is
    /// clamped to 16..=96; higher is slower and cleaner.
    /// Default: `None`
    pub zita_quality: Option<u32>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            enable_resample: true,
            resample_method: ResampleMethod::default(),
            zita_quality: None,
        }
    }
}
