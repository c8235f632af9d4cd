use std::sync::Arc;

use crate::application::ports::GenerativeBackend;

/// Reply returned whenever the generative backend fails. The dialogue loop
/// must always produce an assistant turn.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble processing your request right now. Please try again.";

/// Absorbing boundary around the generative backend: `respond` never fails
/// and never returns an empty string. The underlying cause is logged for
/// operators instead of surfacing to the user.
pub struct ResponseEngine<G: GenerativeBackend> {
    backend: Arc<G>,
}

impl<G: GenerativeBackend> ResponseEngine<G> {
    pub fn new(backend: Arc<G>) -> Self {
        Self { backend }
    }

    pub async fn respond(&self, prompt: &str) -> String {
        match self.backend.generate(prompt).await {
            Ok(reply) => {
                let trimmed = reply.trim();
                if trimmed.is_empty() {
                    tracing::error!(
                        prompt_chars = prompt.len(),
                        "Generative backend returned blank reply"
                    );
                    FALLBACK_REPLY.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    prompt_chars = prompt.len(),
                    "Generative backend failed, using fallback reply"
                );
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
