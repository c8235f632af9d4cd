use std::io::Cursor;

use crate::domain::{
    CanonicalAudio, CANONICAL_BITS_PER_SAMPLE, CANONICAL_CHANNELS, CANONICAL_SAMPLE_RATE,
};

/// Serializes canonical PCM as a WAV blob for backends that take whole
/// files. Infallible for in-memory writers apart from allocation.
pub fn pcm_to_wav(audio: &CanonicalAudio) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: CANONICAL_CHANNELS,
        sample_rate: CANONICAL_SAMPLE_RATE,
        bits_per_sample: CANONICAL_BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .expect("in-memory wav writer cannot fail to open");
        for &sample in audio.samples() {
            writer
                .write_sample(sample)
                .expect("in-memory wav write cannot fail");
        }
        writer.finalize().expect("in-memory wav finalize cannot fail");
    }
    cursor.into_inner()
}
