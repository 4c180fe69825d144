//! Direct bit-width narrowing for the equal-rate fast paths.
//!
//! When only the sample width changes, the float round-trip is skipped and
//! samples are narrowed with a plain shift. Signedness is preserved: the
//! shifted bit patterns are identical for signed and unsigned samples once
//! truncated to the narrow width, so one routine serves both tags.
//!
//! All buffers are native-endian.

use crate::sound::SampleEncoding;

/// Narrows 32-bit samples to 16 bits (`v >> 16`).
pub fn reduce_32_to_16(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() / 2);
    for c in buf.chunks_exact(4) {
        let v = i32::from_ne_bytes([c[0], c[1], c[2], c[3]]);
        out.extend_from_slice(&((v >> 16) as i16).to_ne_bytes());
    }
    out
}

/// Narrows 32-bit samples to padded 24-bit (`v >> 8`, still 4 bytes each).
pub fn reduce_32_to_24(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    for c in buf.chunks_exact(4) {
        let v = i32::from_ne_bytes([c[0], c[1], c[2], c[3]]);
        out.extend_from_slice(&(v >> 8).to_ne_bytes());
    }
    out
}

/// Narrows 32-bit samples to packed 24-bit by keeping the three high bytes
/// of the little-endian word.
pub fn reduce_32_to_24_3(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() / 4 * 3);
    for c in buf.chunks_exact(4) {
        let v = u32::from_ne_bytes([c[0], c[1], c[2], c[3]]);
        out.extend_from_slice(&v.to_le_bytes()[1..4]);
    }
    out
}

/// Narrows padded 24-bit samples to 16 bits (`v >> 8`).
pub fn reduce_24_to_16(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() / 2);
    for c in buf.chunks_exact(4) {
        let v = i32::from_ne_bytes([c[0], c[1], c[2], c[3]]);
        out.extend_from_slice(&((v >> 8) as i16).to_ne_bytes());
    }
    out
}

/// The fast narrowing step, if any, from `current` to `target` at equal
/// sample rates. Returns the narrowed buffer and the updated encoding tag
/// (source signedness at the target width).
///
/// The packed-24 path additionally requires signedness parity, since no
/// later sign flip exists at that layout.
pub fn fast_reduce(
    buf: &[u8],
    current: SampleEncoding,
    target: SampleEncoding,
) -> Option<(Vec<u8>, SampleEncoding)> {
    use SampleEncoding::{S16, S24, S24_3, S32, U16, U24, U24_3, U32};

    let signed = current.is_signed();
    match (current, target) {
        (S32 | U32, S24_3 | U24_3) if signed == target.is_signed() => Some((
            reduce_32_to_24_3(buf),
            if signed { S24_3 } else { U24_3 },
        )),
        (S32 | U32, S16 | U16) => Some((reduce_32_to_16(buf), if signed { S16 } else { U16 })),
        (S32 | U32, S24 | U24) => Some((reduce_32_to_24(buf), if signed { S24 } else { U24 })),
        (S24 | U24, S16 | U16) => Some((reduce_24_to_16(buf), if signed { S16 } else { U16 })),
        _ => None,
    }
}
