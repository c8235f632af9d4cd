use std::collections::HashSet;

use talvik::application::ports::{SpeechSynthesizer, SynthesisError};
use talvik::infrastructure::synthesis::{unique_artifact_name, HttpTtsSynthesizer};

#[tokio::test]
async fn given_blank_text_when_synthesizing_then_empty_input_and_no_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let synthesizer = HttpTtsSynthesizer::new(dir.path().join("audio"), None);

    let result = synthesizer.synthesize("   \n", "en", false).await;

    assert!(matches!(result, Err(SynthesisError::EmptyInput)));
    // The output directory is only created on a successful fetch.
    assert!(!dir.path().join("audio").exists());
}

#[test]
fn given_many_calls_when_naming_artifacts_then_names_never_collide() {
    let names: HashSet<String> = (0..200).map(|_| unique_artifact_name()).collect();

    assert_eq!(names.len(), 200);
    for name in &names {
        assert!(name.starts_with("tts_output_"));
        assert!(name.ends_with(".mp3"));
    }
}
