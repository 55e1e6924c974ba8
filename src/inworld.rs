//! Inworld API client for text generation and speech synthesis

use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::sync::WordAlignment;
use crate::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.inworld.ai";

/// Voice used when a synthesis request does not name one
pub const DEFAULT_VOICE: &str = "Alex";

/// Topics the text-generation endpoint accepts; anything else is rejected
/// before an upstream call is made
pub const ALLOWED_TOPICS: &[&str] = &[
    "sports",
    "travel",
    "music",
    "food",
    "mysteries",
    "canada",
    "space",
    "folklore",
];

/// Whether a topic is in the closed allowed set (case-insensitive)
#[must_use]
pub fn is_allowed_topic(topic: &str) -> bool {
    let lower = topic.to_ascii_lowercase();
    ALLOWED_TOPICS.contains(&lower.as_str())
}

/// A synthesis result: decoded audio plus word-level timing data
#[derive(Debug)]
pub struct Synthesis {
    pub audio: Vec<u8>,
    pub alignment: WordAlignment,
}

/// An available TTS voice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub voice_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Client for the Inworld LLM and TTS HTTP APIs.
///
/// The two services authenticate differently: TTS takes the API key as-is,
/// the LLM takes a base64-encoded `key:secret` pair. Both use Basic scheme.
pub struct InworldClient {
    client: Client,
    base_url: String,
    tts_auth: String,
    llm_auth: String,
}

impl InworldClient {
    #[must_use]
    pub fn new(api_key: &str, jwt_key: &str, jwt_secret: &str) -> Self {
        let llm_credentials =
            base64::engine::general_purpose::STANDARD.encode(format!("{jwt_key}:{jwt_secret}"));
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            tts_auth: format!("Basic {api_key}"),
            llm_auth: format!("Basic {llm_credentials}"),
        }
    }

    /// Point the client at a different API root (tests, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// List English voices available for synthesis
    pub async fn list_voices(&self) -> Result<Vec<Voice>> {
        let response = self
            .client
            .get(format!("{}/tts/v1/voices?filter=language=en", self.base_url))
            .header("Authorization", &self.tts_auth)
            .send()
            .await
            .map_err(|e| Error::Voices(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Voices(format!("API error: {status} - {body}")));
        }

        let listing: VoiceListing = response
            .json()
            .await
            .map_err(|e| Error::Voices(format!("failed to parse response: {e}")))?;

        Ok(listing.voices)
    }

    /// Generate the short narration text for a topic.
    ///
    /// The prompt asks for spoken-style text with sparing `[laugh]` audio
    /// markup, which the display filter later strips.
    pub async fn generate_text(&self, topic: &str) -> Result<String> {
        let now = chrono::Utc::now().timestamp_millis();
        let request = ChatCompletionRequest {
            serving_id: ServingId {
                model_id: ModelId {
                    model: "gpt-4.1-nano",
                    service_provider: "SERVICE_PROVIDER_OPENAI",
                },
                user_id: format!("user-{now}"),
                session_id: format!("session-{now}"),
            },
            messages: vec![ChatMessage {
                content: format!(
                    "Write 2 sentences about {topic}. It will be read aloud so use \
                     filler words and the [laugh] audio markup where appropriate. \
                     But sparingly. Return only the 2 sentences."
                ),
                role: "MESSAGE_ROLE_USER",
            }],
            text_generation_config: TextGenerationConfig {
                max_tokens: 200,
                temperature: 1.0,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/llm/v1alpha/completions:completeChat",
                self.base_url
            ))
            .header("Authorization", &self.llm_auth)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::TextGeneration(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TextGeneration(format!(
                "API error: {status} - {body}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::TextGeneration(format!("failed to parse response: {e}")))?;

        completion
            .result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::TextGeneration("completion returned no choices".to_string()))
    }

    /// Synthesize speech for the text, returning OGG Opus audio and
    /// word-level timestamps.
    ///
    /// Missing timestamp data is not an error: the alignment comes back
    /// empty and the caller degrades to playback without highlighting.
    pub async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> Result<Synthesis> {
        let request = SpeechRequest {
            text,
            voice_id: voice_id.unwrap_or(DEFAULT_VOICE),
            model_id: "inworld-tts-1",
            timestamp_type: "WORD",
            audio_config: AudioConfig {
                audio_encoding: "OGG_OPUS",
                sample_rate_hertz: 48_000,
                speaking_rate: 1.0,
            },
            temperature: 1.1,
        };

        let response = self
            .client
            .post(format!("{}/tts/v1/voice", self.base_url))
            .header("Authorization", &self.tts_auth)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Synthesis(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Synthesis(format!("API error: {status} - {body}")));
        }

        let speech: SpeechResponse = response
            .json()
            .await
            .map_err(|e| Error::Synthesis(format!("failed to parse response: {e}")))?;

        let audio = base64::engine::general_purpose::STANDARD
            .decode(&speech.audio_content)
            .map_err(|e| Error::Synthesis(format!("audio payload is not valid base64: {e}")))?;

        let alignment = speech
            .timestamp_info
            .map(|info| info.word_alignment)
            .unwrap_or_default();

        Ok(Synthesis { audio, alignment })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatCompletionRequest {
    serving_id: ServingId,
    messages: Vec<ChatMessage>,
    text_generation_config: TextGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServingId {
    model_id: ModelId,
    user_id: String,
    session_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelId {
    model: &'static str,
    service_provider: &'static str,
}

#[derive(Serialize)]
struct ChatMessage {
    content: String,
    role: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextGenerationConfig {
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    result: ChatCompletionResult,
}

#[derive(Deserialize)]
struct ChatCompletionResult {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    model_id: &'static str,
    timestamp_type: &'static str,
    audio_config: AudioConfig,
    temperature: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    sample_rate_hertz: u32,
    speaking_rate: f64,
}

#[derive(Deserialize)]
struct VoiceListing {
    #[serde(default)]
    voices: Vec<Voice>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpeechResponse {
    audio_content: String,
    #[serde(default)]
    timestamp_info: Option<TimestampInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimestampInfo {
    #[serde(default)]
    word_alignment: WordAlignment,
}
