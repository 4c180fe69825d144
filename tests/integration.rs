//! End-to-end pipeline tests: concrete conversion scenarios driven through
//! the public API only.

use pcm_convert::{
    AudioConverter, ConvertConfig, ConvertError, Endian, ResampleMethod, SampleEncoding,
    SampleFormat, SoundParams,
};

fn le_params(encoding: SampleEncoding, rate: u32, channels: u16) -> SoundParams {
    SoundParams::new(SampleFormat::new(encoding, Endian::Little), rate, channels)
}

fn native_params(encoding: SampleEncoding, rate: u32, channels: u16) -> SoundParams {
    SoundParams::new(SampleFormat::native(encoding), rate, channels)
}

/// Goertzel power of `freq` Hz in a sampled signal.
fn goertzel_power(samples: &[f64], sample_rate: f64, freq: f64) -> f64 {
    let omega = 2.0 * std::f64::consts::PI * freq / sample_rate;
    let coeff = 2.0 * omega.cos();
    let (mut s1, mut s2) = (0.0f64, 0.0f64);
    for &x in samples {
        let s0 = x + coeff * s1 - s2;
        s2 = s1;
        s1 = s0;
    }
    (s1 * s1 + s2 * s2 - coeff * s1 * s2) / samples.len() as f64
}

#[test]
#[should_panic(expected = "identical sound parameters")]
fn identity_conversion_is_a_caller_bug() {
    let p = le_params(SampleEncoding::S16, 44100, 2);
    let _ = AudioConverter::new(p, p, &ConvertConfig::default());
}

#[test]
fn u8_mid_scale_to_s16_stereo_is_silence() {
    let from = native_params(SampleEncoding::U8, 8000, 1);
    let to = le_params(SampleEncoding::S16, 8000, 2);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

    let out = converter.convert(&[0x80]).unwrap();
    assert_eq!(out, vec![0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn big_endian_mono_to_little_endian_stereo() {
    let from = SoundParams::new(SampleFormat::new(SampleEncoding::S16, Endian::Big), 44100, 1);
    let to = le_params(SampleEncoding::S16, 44100, 2);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

    let out = converter.convert(&[0x12, 0x34]).unwrap();
    assert_eq!(out, vec![0x34, 0x12, 0x34, 0x12]);
}

#[test]
fn s32_to_s16_full_scale_uses_fast_path() {
    let from = le_params(SampleEncoding::S32, 48000, 2);
    let to = le_params(SampleEncoding::S16, 48000, 2);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();
    assert!(!converter.is_resampling());

    // One frame: max-positive left, max-negative right.
    let input = [0xFF, 0xFF, 0xFF, 0x7F, 0x00, 0x00, 0x00, 0x80];
    let out = converter.convert(&input).unwrap();
    assert_eq!(out, vec![0xFF, 0x7F, 0x00, 0x80]);
}

#[test]
fn float_5_1_downmix_to_s16_stereo() {
    let from = native_params(SampleEncoding::Float, 44100, 6);
    let to = le_params(SampleEncoding::S16, 44100, 2);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

    let frame = [0.5f32, 0.5, 0.0, 0.0, 0.0, 0.0];
    let input: Vec<u8> = frame.iter().flat_map(|v| v.to_ne_bytes()).collect();
    let out = converter.convert(&input).unwrap();
    assert_eq!(out.len(), 4);

    let left = i16::from_le_bytes([out[0], out[1]]);
    let right = i16::from_le_bytes([out[2], out[3]]);
    assert_eq!(left, right);
    // 0.5 quantizes to 16384; 16384 * 1.0 * 0.2626 rounds to 4302.
    assert_eq!(left, 4302);
}

#[test]
fn downmix_of_silence_stays_silent_in_every_encoding() {
    for encoding in [
        SampleEncoding::S16,
        SampleEncoding::S32,
        SampleEncoding::Float,
    ] {
        let from = native_params(SampleEncoding::Float, 44100, 6);
        let to = native_params(encoding, 44100, 2);
        let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

        let input = vec![0u8; 10 * 6 * 4];
        let out = converter.convert(&input).unwrap();
        assert_eq!(out.len(), 10 * 2 * encoding.bytes_per_sample(), "{encoding}");
        // All three supported encodings are signed, so silence is all-zero.
        assert!(out.iter().all(|&b| b == 0), "{encoding}");
    }
}

#[test]
fn resampled_frame_count_tracks_the_rate_ratio() {
    let from = le_params(SampleEncoding::S16, 44100, 1);
    let to = le_params(SampleEncoding::S16, 48000, 1);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();
    assert!(converter.is_resampling());

    // Feed whole resampler chunks so nothing is left in carry.
    let chunk = vec![0u8; 1024 * 2];
    let mut out_frames = 0usize;
    for _ in 0..8 {
        out_frames += converter.convert(&chunk).unwrap().len() / 2;
    }
    assert_eq!(converter.carried_frames(), 0);

    let expected = 8.0 * 1024.0 * 48000.0 / 44100.0;
    assert!(
        (out_frames as f64 - expected).abs() <= 2.0,
        "{out_frames} frames vs expected {expected:.1}"
    );
}

#[test]
fn short_buffers_accumulate_in_carry_until_a_chunk_fills() {
    let from = le_params(SampleEncoding::S16, 44100, 2);
    let to = le_params(SampleEncoding::S16, 48000, 2);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

    // 100-frame buffers: the first ten calls fill 1000 frames, all carried.
    let buf = vec![0u8; 100 * 4];
    for i in 1..=10 {
        let out = converter.convert(&buf).unwrap();
        assert!(out.is_empty());
        assert_eq!(converter.carried_frames(), i * 100);
    }
    // The eleventh crosses the 1024-frame chunk boundary.
    let out = converter.convert(&buf).unwrap();
    assert!(!out.is_empty());
    assert_eq!(converter.carried_frames(), 1100 - 1024);
}

#[test]
fn sine_survives_resampling_to_double_rate_stereo() {
    let from = le_params(SampleEncoding::S16, 22050, 1);
    let to = le_params(SampleEncoding::S16, 44100, 2);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

    // A continuous 1 kHz sine at half amplitude, fed in 100-frame buffers.
    let total_frames = 6000usize;
    let mut output = Vec::new();
    for start in (0..total_frames).step_by(100) {
        let chunk: Vec<u8> = (start..start + 100)
            .map(|n| {
                let phase = 2.0 * std::f64::consts::PI * 1000.0 * n as f64 / 22050.0;
                (0.5 * phase.sin() * 32767.0) as i16
            })
            .flat_map(i16::to_le_bytes)
            .collect();
        output.extend(converter.convert(&chunk).unwrap());
    }

    let consumed = total_frames - converter.carried_frames();
    let out_frames = output.len() / 4;
    assert!(
        (out_frames as i64 - 2 * consumed as i64).abs() <= 2,
        "{out_frames} frames out of {consumed} consumed"
    );

    // Both channels carry the identical duplicated signal.
    let mut left = Vec::with_capacity(out_frames);
    for frame in output.chunks_exact(4) {
        let l = i16::from_le_bytes([frame[0], frame[1]]);
        let r = i16::from_le_bytes([frame[2], frame[3]]);
        assert_eq!(l, r);
        left.push(f64::from(l) / 32768.0);
    }

    // The tone sits at 1 kHz; probe against neighbours well off the peak.
    let settled = &left[200..];
    let peak = goertzel_power(settled, 44100.0, 1000.0);
    for probe in [500.0, 3000.0, 7000.0] {
        let off = goertzel_power(settled, 44100.0, probe);
        assert!(
            peak > 50.0 * off,
            "peak {peak:.6} not dominant over {probe} Hz ({off:.6})"
        );
    }
}

#[test]
fn resampling_can_be_disabled_by_configuration() {
    let config = ConvertConfig {
        enable_resample: false,
        ..Default::default()
    };
    let from = le_params(SampleEncoding::S16, 44100, 2);
    let to = le_params(SampleEncoding::S16, 48000, 2);
    let err = AudioConverter::new(from, to, &config).unwrap_err();
    assert!(matches!(err, ConvertError::ResamplingDisabled { .. }));
}

#[test]
fn every_configured_method_resamples() {
    for method in [
        ResampleMethod::SincBestQuality,
        ResampleMethod::SincMediumQuality,
        ResampleMethod::SincFastest,
        ResampleMethod::ZeroOrderHold,
        ResampleMethod::Linear,
    ] {
        let config = ConvertConfig {
            resample_method: method,
            ..Default::default()
        };
        let from = le_params(SampleEncoding::S16, 44100, 2);
        let to = le_params(SampleEncoding::S16, 48000, 2);
        let mut converter = AudioConverter::new(from, to, &config).unwrap();

        let chunk = vec![0u8; 1024 * 4];
        let out = converter.convert(&chunk).unwrap();
        assert!(!out.is_empty(), "{method}");
        assert_eq!(out.len() % 4, 0, "{method}");
    }
}

#[test]
fn polyphase_quality_option_overrides_the_method() {
    let config = ConvertConfig {
        zita_quality: Some(64),
        ..Default::default()
    };
    let from = le_params(SampleEncoding::S16, 44100, 2);
    let to = le_params(SampleEncoding::S16, 48000, 2);
    let mut converter = AudioConverter::new(from, to, &config).unwrap();

    let chunk = vec![0u8; 1024 * 4];
    let out = converter.convert(&chunk).unwrap();
    assert_eq!(converter.carried_frames(), 0);
    assert_eq!(out.len() % 4, 0);
}

#[test]
fn packed_24_round_trip_through_the_pipeline() {
    // S24_3 -> S16 narrows through the float path at differing widths.
    let from = le_params(SampleEncoding::S24_3, 44100, 1);
    let to = le_params(SampleEncoding::S16, 44100, 1);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

    // 0x400000 is half scale in 24-bit.
    let input = [0x00, 0x00, 0x40];
    let out = converter.convert(&input).unwrap();
    let v = i16::from_le_bytes([out[0], out[1]]);
    assert_eq!(v, 0x4000);
}

#[test]
fn fast_path_32_to_packed_24_keeps_high_bytes() {
    let from = le_params(SampleEncoding::S32, 44100, 1);
    let to = le_params(SampleEncoding::S24_3, 44100, 1);
    let mut converter = AudioConverter::new(from, to, &ConvertConfig::default()).unwrap();

    let input = 0x1234_5678i32.to_le_bytes();
    let out = converter.convert(&input).unwrap();
    assert_eq!(out, vec![0x56, 0x34, 0x12]);
}
