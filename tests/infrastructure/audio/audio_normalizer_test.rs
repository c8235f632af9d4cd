use talvik::application::ports::{AudioNormalizer, DecodeError};
use talvik::domain::{AudioBuffer, FormatHint, CANONICAL_SAMPLE_RATE};
use talvik::infrastructure::audio::{pcm_to_wav, SymphoniaNormalizer};

fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

fn sine(sample_rate: u32, seconds: f32, amplitude: i16) -> Vec<i16> {
    let count = (sample_rate as f32 * seconds) as usize;
    (0..count)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (amplitude as f32 * (2.0 * std::f32::consts::PI * 440.0 * t).sin()) as i16
        })
        .collect()
}

#[test]
fn given_canonical_wav_when_normalizing_then_samples_pass_through_at_16khz() {
    let samples = sine(16_000, 0.5, 8_000);
    let wav = build_wav(16_000, 1, &samples);
    let raw = AudioBuffer::new(wav, FormatHint::Wav);

    let audio = SymphoniaNormalizer.normalize(&raw).expect("wav must decode");

    assert!(!audio.is_empty());
    assert!((audio.duration_secs() - 0.5).abs() < 0.05);
}

#[test]
fn given_44100hz_stereo_wav_when_normalizing_then_output_is_16khz_mono() {
    let mono = sine(44_100, 0.5, 8_000);
    // Interleave two identical channels
    let stereo: Vec<i16> = mono.iter().flat_map(|&s| [s, s]).collect();
    let wav = build_wav(44_100, 2, &stereo);
    let raw = AudioBuffer::new(wav, FormatHint::Wav);

    let audio = SymphoniaNormalizer.normalize(&raw).expect("wav must decode");

    // 0.5s of audio at the canonical rate regardless of the source rate.
    let expected = (CANONICAL_SAMPLE_RATE as f32 * 0.5) as usize;
    assert!(audio.len() > expected * 9 / 10);
    assert!(audio.len() <= expected + 16);
}

#[test]
fn given_garbage_bytes_when_normalizing_then_error_is_classified() {
    let raw = AudioBuffer::new(vec![0xFFu8; 256], FormatHint::Unknown);

    let result = SymphoniaNormalizer.normalize(&raw);

    assert!(matches!(
        result,
        Err(DecodeError::UnsupportedFormat(_)) | Err(DecodeError::CorruptData(_))
    ));
}

#[test]
fn given_garbage_with_wav_hint_when_normalizing_then_fallback_also_fails_cleanly() {
    let raw = AudioBuffer::new(vec![0xFFu8; 256], FormatHint::Wav);

    let result = SymphoniaNormalizer.normalize(&raw);

    assert!(result.is_err());
}

#[test]
fn given_canonical_audio_when_serializing_to_wav_then_it_round_trips() {
    let samples = sine(16_000, 0.25, 4_000);
    let wav = build_wav(16_000, 1, &samples);
    let raw = AudioBuffer::new(wav, FormatHint::Wav);
    let audio = SymphoniaNormalizer.normalize(&raw).expect("decodes");

    let bytes = pcm_to_wav(&audio);
    let reparsed = SymphoniaNormalizer
        .normalize(&AudioBuffer::new(bytes, FormatHint::Wav))
        .expect("serialized wav must decode");

    assert_eq!(reparsed.len(), audio.len());
}
