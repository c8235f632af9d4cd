use std::sync::Arc;

use talvik::application::ports::{GenerationError, GenerativeBackend};
use talvik::application::services::{ResponseEngine, FALLBACK_REPLY};

struct FailingBackend;

#[async_trait::async_trait]
impl GenerativeBackend for FailingBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::ApiRequestFailed("connection reset".to_string()))
    }
}

struct BlankBackend;

#[async_trait::async_trait]
impl GenerativeBackend for BlankBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok("   \n".to_string())
    }
}

struct EchoBackend;

#[async_trait::async_trait]
impl GenerativeBackend for EchoBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        Ok(format!("  echo: {}  ", prompt))
    }
}

#[tokio::test]
async fn given_failing_backend_when_responding_then_fallback_reply_is_returned() {
    let engine = ResponseEngine::new(Arc::new(FailingBackend));

    let reply = engine.respond("any prompt").await;

    assert_eq!(reply, FALLBACK_REPLY);
    assert!(!reply.is_empty());
}

#[tokio::test]
async fn given_blank_completion_when_responding_then_fallback_reply_is_returned() {
    let engine = ResponseEngine::new(Arc::new(BlankBackend));

    let reply = engine.respond("any prompt").await;

    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn given_working_backend_when_responding_then_reply_is_trimmed() {
    let engine = ResponseEngine::new(Arc::new(EchoBackend));

    let reply = engine.respond("hi").await;

    assert_eq!(reply, "echo: hi");
}
