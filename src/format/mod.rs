//! Sample format conversion leaves.
//!
//! Each submodule implements one stage the pipeline composes:
//! - byte-order normalization ([`swap_endian`])
//! - signed ↔ unsigned reinterpretation ([`flip_sign`])
//! - fixed-point ↔ normalized float ([`fixed_to_float`], [`float_to_fixed`])
//! - equal-rate bit-width narrowing ([`fast_reduce`])
//! - channel remapping ([`mono_to_stereo`], [`downmix_5_1_to_stereo`])
//!
//! All routines work on interleaved buffers and, except for the entry and
//! exit endian swaps, expect native byte order.

mod channels;
mod endian;
mod float;
mod reduce;
mod sign;

pub use channels::{downmix_5_1_to_stereo, mono_to_stereo};
pub use endian::swap_endian;
pub use float::{fixed_to_float, float_to_fixed, floats_from_bytes, floats_to_bytes};
pub use reduce::fast_reduce;
pub use sign::flip_sign;
