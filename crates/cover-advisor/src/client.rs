//! Gemini-style `generateContent` client
//!
//! The advisory path is fire-and-forget: callers always get text back.
//! Transport errors, HTTP failures, and malformed responses all collapse to
//! a fixed fallback string, logged at warn level. No retries.

use crate::prompts;
use cover_dieline::{CoverDimensions, CoverSpecs};
use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Shown when the chat endpoint cannot be reached
pub const OFFLINE_FALLBACK: &str = "I am currently offline. Please check your connection.";

/// Returned when script generation fails outright
pub const SCRIPT_ERROR_FALLBACK: &str = "// Error generating script. Please try again.";

const NO_ANSWER_FALLBACK: &str = "I apologize, I could not generate a response at this time.";
const EMPTY_SCRIPT_FALLBACK: &str = "// Error: No response text generated.";

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior exchange in the advisory conversation
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum AdvisorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the external text-generation endpoint
pub struct AdvisorClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AdvisorClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a client from `GEMINI_API_KEY`, if set
    pub fn from_env() -> Option<Self> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Self::new)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Answer a prepress question against the current layout context.
    pub async fn ask_print_expert(
        &self,
        history: &[ChatTurn],
        question: &str,
        context: &str,
    ) -> String {
        let system = format!("{}\nContext: {context}", prompts::PRINT_EXPERT_SYSTEM);
        match self.generate(history, question, Some(&system)).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_ANSWER_FALLBACK.to_string(),
            Err(e) => {
                log::warn!("advisory chat request failed: {e}");
                OFFLINE_FALLBACK.to_string()
            }
        }
    }

    /// Generate InDesign document-setup script text for the current layout.
    pub async fn generate_indesign_script(
        &self,
        dims: &CoverDimensions,
        specs: &CoverSpecs,
    ) -> String {
        let prompt = prompts::indesign_script_prompt(dims, specs);
        match self.generate(&[], &prompt, None).await {
            Ok(Some(text)) => strip_code_fences(&text),
            Ok(None) => EMPTY_SCRIPT_FALLBACK.to_string(),
            Err(e) => {
                log::warn!("script generation request failed: {e}");
                SCRIPT_ERROR_FALLBACK.to_string()
            }
        }
    }

    async fn generate(
        &self,
        history: &[ChatTurn],
        question: &str,
        system: Option<&str>,
    ) -> Result<Option<String>, AdvisorError> {
        let url = format!(
            "{ENDPOINT}/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: Some(match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                }),
                parts: vec![Part { text: &turn.text }],
            })
            .collect();
        contents.push(Content {
            role: Some("user"),
            parts: vec![Part { text: question }],
        });

        let body = GenerateRequest {
            contents,
            system_instruction: system.map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let parsed: GenerateResponse = response.json().await?;

        Ok(parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty()))
    }
}

/// Drop markdown code-fence lines from a raw model response, keeping the
/// payload between them.
pub fn strip_code_fences(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
