//! In-place byte-order normalization of sample buffers.

use crate::sound::SampleEncoding;

/// Swaps the byte order of every sample in `buf`, in place.
///
/// A second call with the same encoding restores the buffer, so the same
/// routine serves both the entry normalization (foreign → native) and the
/// exit fix-up (native → foreign).
///
/// No-op for 8-bit and float encodings. The buffer length must be a whole
/// number of samples; a ragged tail is left untouched.
pub fn swap_endian(buf: &mut [u8], encoding: SampleEncoding) {
    if !encoding.is_endian_sensitive() {
        return;
    }

    match encoding {
        SampleEncoding::U16 | SampleEncoding::S16 => {
            for pair in buf.chunks_exact_mut(2) {
                pair.swap(0, 1);
            }
        }
        SampleEncoding::U24_3 | SampleEncoding::S24_3 => {
            for group in buf.chunks_exact_mut(3) {
                group.swap(0, 2);
            }
        }
        SampleEncoding::U24 | SampleEncoding::S24 | SampleEncoding::U32 | SampleEncoding::S32 => {
            for word in buf.chunks_exact_mut(4) {
                word.reverse();
            }
        }
        SampleEncoding::U8 | SampleEncoding::S8 | SampleEncoding::Float => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_16() {
        let mut buf = [0x12, 0x34, 0xAB, 0xCD];
        swap_endian(&mut buf, SampleEncoding::S16);
        assert_eq!(buf, [0x34, 0x12, 0xCD, 0xAB]);
    }

    #[test]
    fn test_swap_packed_24_swaps_outer_bytes() {
        let mut buf = [0x01, 0x02, 0x03, 0x0A, 0x0B, 0x0C];
        swap_endian(&mut buf, SampleEncoding::S24_3);
        assert_eq!(buf, [0x03, 0x02, 0x01, 0x0C, 0x0B, 0x0A]);
    }

    #[test]
    fn test_swap_32_reverses_words() {
        let mut buf = [0x01, 0x02, 0x03, 0x04];
        swap_endian(&mut buf, SampleEncoding::U32);
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_swap_padded_24_reverses_whole_container() {
        let mut buf = [0x01, 0x02, 0x03, 0x00];
        swap_endian(&mut buf, SampleEncoding::S24);
        assert_eq!(buf, [0x00, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_swap_is_noop_for_8_bit_and_float() {
        let mut buf = [0x12, 0x34, 0x56, 0x78];
        swap_endian(&mut buf, SampleEncoding::U8);
        assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
        swap_endian(&mut buf, SampleEncoding::Float);
        assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_swap_twice_is_identity() {
        for encoding in [
            SampleEncoding::S16,
            SampleEncoding::S24,
            SampleEncoding::S24_3,
            SampleEncoding::S32,
        ] {
            let original: Vec<u8> = (0..24).collect();
            let mut buf = original.clone();
            swap_endian(&mut buf, encoding);
            swap_endian(&mut buf, encoding);
            assert_eq!(buf, original, "double swap changed {encoding}");
        }
    }
}
