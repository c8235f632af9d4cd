/// Container format guessed from the uploaded filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Wav,
    Webm,
    Mp3,
    Ogg,
    Unknown,
}

impl FormatHint {
    pub fn from_filename(name: &str) -> Self {
        match name.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
            Some(ext) if ext == "wav" => FormatHint::Wav,
            Some(ext) if ext == "webm" => FormatHint::Webm,
            Some(ext) if ext == "mp3" => FormatHint::Mp3,
            Some(ext) if ext == "ogg" || ext == "oga" => FormatHint::Ogg,
            _ => FormatHint::Unknown,
        }
    }
}

/// Raw uploaded audio, owned for the duration of one transcription call.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    pub bytes: Vec<u8>,
    pub hint: FormatHint,
}

impl AudioBuffer {
    pub fn new(bytes: Vec<u8>, hint: FormatHint) -> Self {
        Self { bytes, hint }
    }

    pub fn from_upload(bytes: Vec<u8>, filename: Option<&str>) -> Self {
        let hint = filename
            .map(FormatHint::from_filename)
            .unwrap_or(FormatHint::Unknown);
        Self { bytes, hint }
    }
}
