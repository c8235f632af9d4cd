use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub recognition: RecognitionSettings,
    pub generation: GenerationSettings,
    pub synthesis: SynthesisSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecognitionSettings {
    pub api_key: String,
    /// Regional variants tried after the default rung, in order.
    pub locales: Vec<String>,
    pub mic_timeout_secs: u64,
    pub energy_floor: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub api_key: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    pub output_dir: String,
    pub lang: String,
    pub slow: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            locales: vec!["en-US".to_string(), "en-GB".to_string()],
            mic_timeout_secs: 10,
            energy_floor: 0.01,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-pro".to_string(),
            max_output_tokens: 1000,
            temperature: 0.7,
        }
    }
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            output_dir: "static/audio".to_string(),
            lang: "en".to_string(),
            slow: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            recognition: RecognitionSettings::default(),
            generation: GenerationSettings::default(),
            synthesis: SynthesisSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// `config.toml` when present, defaults otherwise, then environment
    /// overrides for deployment-specific values.
    pub fn load() -> anyhow::Result<Self> {
        let mut settings = match std::fs::read_to_string(Path::new("config.toml")) {
            Ok(raw) => toml::from_str(&raw)?,
            Err(_) => Settings::default(),
        };

        if let Ok(host) = std::env::var("SERVER_HOST") {
            settings.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            settings.server.port = port.parse()?;
        }
        if let Ok(key) = std::env::var("SPEECH_API_KEY") {
            settings.recognition.api_key = key;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            settings.generation.api_key = key;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            settings.generation.model = model;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            settings.logging.level = level;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            settings.logging.json = format.eq_ignore_ascii_case("json");
        }

        Ok(settings)
    }
}
