use std::path::PathBuf;

/// A synthesized speech file. The filename embeds a sub-second timestamp so
/// concurrent calls never collide.
#[derive(Debug, Clone)]
pub struct SynthesisArtifact {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl SynthesisArtifact {
    pub fn new(path: PathBuf, bytes: Vec<u8>) -> Self {
        Self { path, bytes }
    }

    pub fn filename(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}
