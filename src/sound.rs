//! Sound parameter model: sample encodings, endianness, and stream
//! descriptors shared by every stage of the conversion pipeline.

use std::fmt;

/// Encoding of a single PCM sample.
///
/// Fixed-point encodings come in signed/unsigned pairs at 8, 16, 24 and
/// 32 bits. 24-bit samples exist in two container layouts: padded into a
/// 4-byte word ([`S24`](Self::S24)/[`U24`](Self::U24)) and packed into
/// 3 bytes ([`S24_3`](Self::S24_3)/[`U24_3`](Self::U24_3)) — same numeric
/// range, different container size. [`Float`](Self::Float) is 32-bit IEEE
/// float normalized to [-1.0, 1.0].
#[allow(non_camel_case_types)] // packed-24 names follow the ALSA convention (S24_3LE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleEncoding {
    /// Unsigned 8-bit.
    U8,
    /// Signed 8-bit.
    S8,
    /// Unsigned 16-bit.
    U16,
    /// Signed 16-bit.
    S16,
    /// Unsigned 24-bit, padded into a 4-byte container.
    U24,
    /// Signed 24-bit, padded into a 4-byte container.
    S24,
    /// Unsigned 24-bit, packed into 3 bytes.
    U24_3,
    /// Signed 24-bit, packed into 3 bytes.
    S24_3,
    /// Unsigned 32-bit.
    U32,
    /// Signed 32-bit.
    S32,
    /// 32-bit float, normalized to [-1.0, 1.0].
    Float,
}

impl SampleEncoding {
    /// Returns the container size of one sample in bytes.
    #[must_use]
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::U8 | Self::S8 => 1,
            Self::U16 | Self::S16 => 2,
            Self::U24_3 | Self::S24_3 => 3,
            Self::U24 | Self::S24 | Self::U32 | Self::S32 | Self::Float => 4,
        }
    }

    /// Returns the numeric bit width (24 for both 24-bit layouts).
    #[must_use]
    pub fn bit_width(self) -> u32 {
        match self {
            Self::U8 | Self::S8 => 8,
            Self::U16 | Self::S16 => 16,
            Self::U24 | Self::S24 | Self::U24_3 | Self::S24_3 => 24,
            Self::U32 | Self::S32 | Self::Float => 32,
        }
    }

    /// Returns `true` for signed fixed-point encodings and for `Float`.
    #[must_use]
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::S8 | Self::S16 | Self::S24 | Self::S24_3 | Self::S32 | Self::Float
        )
    }

    /// Returns `true` for the float encoding.
    #[must_use]
    pub fn is_float(self) -> bool {
        self == Self::Float
    }

    /// Returns `true` if samples are multi-byte integers, i.e. byte order
    /// matters. 8-bit and float samples have no meaningful endianness here.
    #[must_use]
    pub fn is_endian_sensitive(self) -> bool {
        !matches!(self, Self::U8 | Self::S8 | Self::Float)
    }

    /// Returns `true` when `self` and `other` agree in both numeric width
    /// and container size, so that a sign flip alone can convert between
    /// them. Padded 24-bit and 32-bit differ despite sharing a 4-byte
    /// container; padded and packed 24-bit differ in container size.
    #[must_use]
    pub fn same_width(self, other: Self) -> bool {
        !self.is_float()
            && !other.is_float()
            && self.bit_width() == other.bit_width()
            && self.bytes_per_sample() == other.bytes_per_sample()
    }

    /// Returns the encoding with the opposite signedness at the same width.
    ///
    /// # Panics
    ///
    /// Panics for `Float` and the packed 24-bit encodings; sign flips on
    /// those always go through a full conversion path instead.
    #[must_use]
    pub fn flipped_sign(self) -> Self {
        match self {
            Self::U8 => Self::S8,
            Self::S8 => Self::U8,
            Self::U16 => Self::S16,
            Self::S16 => Self::U16,
            Self::U24 => Self::S24,
            Self::S24 => Self::U24,
            Self::U32 => Self::S32,
            Self::S32 => Self::U32,
            Self::U24_3 | Self::S24_3 | Self::Float => {
                panic!("no sign-flipped counterpart for {self}")
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::S8 => "s8",
            Self::U16 => "u16",
            Self::S16 => "s16",
            Self::U24 => "u24",
            Self::S24 => "s24",
            Self::U24_3 => "u24_3",
            Self::S24_3 => "s24_3",
            Self::U32 => "u32",
            Self::S32 => "s32",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order of multi-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// The byte order of the compile target.
    pub const NATIVE: Endian = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };

    /// Returns `true` if this is the target's native byte order.
    #[must_use]
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Little => "le",
            Self::Big => "be",
        })
    }
}

/// A complete sample format: encoding plus declared byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleFormat {
    /// Sample encoding.
    pub encoding: SampleEncoding,
    /// Byte order of multi-byte samples. Ignored for 8-bit and float
    /// encodings, which are always treated as native.
    pub endian: Endian,
}

impl SampleFormat {
    /// Creates a format from an encoding and byte order.
    #[must_use]
    pub fn new(encoding: SampleEncoding, endian: Endian) -> Self {
        Self { encoding, endian }
    }

    /// Creates a native-endian format.
    #[must_use]
    pub fn native(encoding: SampleEncoding) -> Self {
        Self::new(encoding, Endian::NATIVE)
    }

    /// Returns the container size of one sample in bytes.
    #[must_use]
    pub fn bytes_per_sample(&self) -> usize {
        self.encoding.bytes_per_sample()
    }

    /// Returns `true` when samples need a byte swap to become native.
    #[must_use]
    pub fn needs_swap(&self) -> bool {
        self.encoding.is_endian_sensitive() && !self.endian.is_native()
    }

    /// Returns a copy with a different encoding, keeping the byte order.
    #[must_use]
    pub fn with_encoding(&self, encoding: SampleEncoding) -> Self {
        Self::new(encoding, self.endian)
    }

    /// Returns a copy with a different byte order, keeping the encoding.
    #[must_use]
    pub fn with_endian(&self, endian: Endian) -> Self {
        Self::new(self.encoding, endian)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.encoding.is_endian_sensitive() {
            write!(f, "{}{}", self.encoding, self.endian)
        } else {
            write!(f, "{}", self.encoding)
        }
    }
}

/// Parameters of one PCM stream: sample format, rate, and channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundParams {
    /// Sample format.
    pub format: SampleFormat,
    /// Sample rate in Hz.
    pub rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl SoundParams {
    /// Creates stream parameters.
    #[must_use]
    pub fn new(format: SampleFormat, rate: u32, channels: u16) -> Self {
        Self {
            format,
            rate,
            channels,
        }
    }

    /// Returns the size of one frame (one sample per channel) in bytes.
    #[must_use]
    pub fn bytes_per_frame(&self) -> usize {
        self.format.bytes_per_sample() * self.channels as usize
    }
}

impl fmt::Display for SoundParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} Hz {}ch", self.format, self.rate, self.channels)
    }
}
