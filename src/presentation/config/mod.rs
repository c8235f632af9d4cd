mod settings;

pub use settings::{
    GenerationSettings, LoggingSettings, RecognitionSettings, ServerSettings, Settings,
    SynthesisSettings,
};
