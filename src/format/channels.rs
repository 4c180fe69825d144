//! Channel remapping: mono duplication and 5.1 surround down-mix.

use crate::sound::SampleEncoding;

/// Down-mix matrix from 5.1 source order `{L, R, C, LFE, Ls, Rs}` to
/// stereo left (row 0) and right (row 1).
const DOWNMIX_MATRIX: [[f32; 6]; 2] = [
    [1.0, 0.0, 0.707, 0.707, -0.8165, -0.5774],
    [0.0, 1.0, 0.707, 0.707, 0.5774, 0.8165],
];

/// Fixed scalar keeping the mix below full scale under worst-case matrix
/// loading.
const DOWNMIX_NORMALIZATION: f32 = 0.2626;

/// Duplicates every mono sample into both stereo channels.
///
/// Works for any encoding since samples are copied byte-wise; the output
/// is exactly twice the input size.
pub fn mono_to_stereo(buf: &[u8], bytes_per_sample: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() * 2);
    for sample in buf.chunks_exact(bytes_per_sample) {
        out.extend_from_slice(sample);
        out.extend_from_slice(sample);
    }
    out
}

/// Down-mixes interleaved 5.1 frames to stereo with the fixed matrix.
///
/// The mix is accumulated in floating point (f64 for 32-bit samples),
/// clamped to the sample range, and rounded, so near-full-scale input on
/// all six channels cannot overflow an intermediate. The output is one
/// third of the input size.
///
/// # Panics
///
/// Panics for encodings other than `S16`, `S32` and `Float`; the pipeline
/// rejects those at build time.
pub fn downmix_5_1_to_stereo(buf: &[u8], encoding: SampleEncoding) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() / 3);
    match encoding {
        SampleEncoding::S16 => {
            for frame in buf.chunks_exact(12) {
                let mut samples = [0.0f32; 6];
                for (s, c) in samples.iter_mut().zip(frame.chunks_exact(2)) {
                    *s = f32::from(i16::from_ne_bytes([c[0], c[1]]));
                }
                for row in &DOWNMIX_MATRIX {
                    let acc = mix_row(row, &samples) * DOWNMIX_NORMALIZATION;
                    let v = acc
                        .clamp(f32::from(i16::MIN), f32::from(i16::MAX))
                        .round_ties_even() as i16;
                    out.extend_from_slice(&v.to_ne_bytes());
                }
            }
        }
        SampleEncoding::S32 => {
            for frame in buf.chunks_exact(24) {
                let mut samples = [0.0f64; 6];
                for (s, c) in samples.iter_mut().zip(frame.chunks_exact(4)) {
                    *s = f64::from(i32::from_ne_bytes([c[0], c[1], c[2], c[3]]));
                }
                for row in &DOWNMIX_MATRIX {
                    let acc: f64 = row
                        .iter()
                        .zip(&samples)
                        .map(|(a, s)| f64::from(*a) * s)
                        .sum::<f64>()
                        * f64::from(DOWNMIX_NORMALIZATION);
                    let v = acc
                        .clamp(f64::from(i32::MIN), f64::from(i32::MAX))
                        .round_ties_even() as i32;
                    out.extend_from_slice(&v.to_ne_bytes());
                }
            }
        }
        SampleEncoding::Float => {
            for frame in buf.chunks_exact(24) {
                let mut samples = [0.0f32; 6];
                for (s, c) in samples.iter_mut().zip(frame.chunks_exact(4)) {
                    *s = f32::from_ne_bytes([c[0], c[1], c[2], c[3]]);
                }
                for row in &DOWNMIX_MATRIX {
                    let acc = mix_row(row, &samples) * DOWNMIX_NORMALIZATION;
                    out.extend_from_slice(&acc.to_ne_bytes());
                }
            }
        }
        _ => panic!("can't downmix {encoding} samples"),
    }
    out
}

fn mix_row(row: &[f32; 6], samples: &[f32; 6]) -> f32 {
    row.iter().zip(samples).map(|(a, s)| a * s).sum()
}
