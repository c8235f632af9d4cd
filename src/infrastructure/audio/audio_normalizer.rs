use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioNormalizer, DecodeError};
use crate::domain::{AudioBuffer, CanonicalAudio, FormatHint, CANONICAL_SAMPLE_RATE};

/// Generic container/codec decoding via symphonia, with a direct WAV read
/// as the fallback path for linear PCM uploads the probe rejects. Output is
/// always 16 kHz mono 16-bit signed, whatever the source parameters.
pub struct SymphoniaNormalizer;

impl AudioNormalizer for SymphoniaNormalizer {
    fn normalize(&self, raw: &AudioBuffer) -> Result<CanonicalAudio, DecodeError> {
        match decode_any_container(&raw.bytes, raw.hint) {
            Ok(audio) => Ok(audio),
            Err(probe_err) if raw.hint == FormatHint::Wav => {
                tracing::warn!(
                    error = %probe_err,
                    "Generic decode failed, attempting direct WAV pass-through"
                );
                decode_wav_directly(&raw.bytes)
            }
            Err(e) => Err(e),
        }
    }
}

fn decode_any_container(data: &[u8], hint: FormatHint) -> Result<CanonicalAudio, DecodeError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut probe_hint = Hint::new();
    match hint {
        FormatHint::Wav => {
            probe_hint.with_extension("wav");
        }
        FormatHint::Webm => {
            probe_hint.with_extension("webm");
        }
        FormatHint::Mp3 => {
            probe_hint.with_extension("mp3");
        }
        FormatHint::Ogg => {
            probe_hint.with_extension("ogg");
        }
        FormatHint::Unknown => {}
    }

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();
    let decoder_opts = DecoderOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&probe_hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| DecodeError::UnsupportedFormat(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| DecodeError::UnsupportedFormat("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| DecodeError::CorruptData("unknown sample rate".to_string()))?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &decoder_opts)
        .map_err(|e| DecodeError::UnsupportedFormat(format!("codec: {}", e)))?;

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(DecodeError::CorruptData(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(DecodeError::CorruptData(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let samples = sample_buf.samples();

        // Downmix to mono if multi-channel
        if channels > 1 {
            for frame in samples.chunks(channels) {
                let mono: f32 = frame.iter().sum::<f32>() / channels as f32;
                all_samples.push(mono);
            }
        } else {
            all_samples.extend_from_slice(samples);
        }
    }

    if all_samples.is_empty() {
        return Err(DecodeError::CorruptData(
            "no audio samples decoded".to_string(),
        ));
    }

    if source_rate != CANONICAL_SAMPLE_RATE {
        all_samples = resample(&all_samples, source_rate, CANONICAL_SAMPLE_RATE)?;
    }

    tracing::debug!(
        samples = all_samples.len(),
        duration_secs = all_samples.len() as f32 / CANONICAL_SAMPLE_RATE as f32,
        "Audio decoded to 16kHz mono PCM"
    );

    Ok(CanonicalAudio::new(quantize(&all_samples)))
}

/// Pass-through for linear PCM WAV uploads that the container probe refused.
fn decode_wav_directly(data: &[u8]) -> Result<CanonicalAudio, DecodeError> {
    let mut reader = hound::WavReader::new(Cursor::new(data))
        .map_err(|e| DecodeError::CorruptData(format!("wav header: {}", e)))?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(DecodeError::UnsupportedFormat(format!(
            "wav pass-through requires 16-bit PCM, got {:?} {}-bit",
            spec.sample_format, spec.bits_per_sample
        )));
    }

    let interleaved: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DecodeError::CorruptData(format!("wav samples: {}", e)))?;

    if interleaved.is_empty() {
        return Err(DecodeError::CorruptData("no audio samples decoded".to_string()));
    }

    let channels = spec.channels.max(1) as usize;
    let mut mono: Vec<f32> = Vec::with_capacity(interleaved.len() / channels);
    for frame in interleaved.chunks(channels) {
        let sum: f32 = frame.iter().map(|&s| s as f32 / i16::MAX as f32).sum();
        mono.push(sum / channels as f32);
    }

    if spec.sample_rate != CANONICAL_SAMPLE_RATE {
        mono = resample(&mono, spec.sample_rate, CANONICAL_SAMPLE_RATE)?;
    }

    Ok(CanonicalAudio::new(quantize(&mono)))
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, DecodeError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let chunk_size = 1024;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, chunk_size, 1)
        .map_err(|e| DecodeError::CorruptData(format!("resampler init: {}", e)))?;

    let mut output = Vec::with_capacity((samples.len() as f64 * ratio) as usize + chunk_size);

    for chunk in samples.chunks(chunk_size) {
        let input = if chunk.len() < chunk_size {
            let mut padded = chunk.to_vec();
            padded.resize(chunk_size, 0.0);
            padded
        } else {
            chunk.to_vec()
        };

        let result = resampler
            .process(&[input], None)
            .map_err(|e| DecodeError::CorruptData(format!("resample: {}", e)))?;

        if let Some(channel) = result.first() {
            output.extend_from_slice(channel);
        }
    }

    // Trim to approximate expected length
    let expected_len = (samples.len() as f64 * ratio) as usize;
    output.truncate(expected_len);

    Ok(output)
}

fn quantize(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect()
}
