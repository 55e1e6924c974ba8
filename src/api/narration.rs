//! Narration API endpoints: voice listing, text generation, speech synthesis
//!
//! Thin proxies in front of the Inworld APIs. Request validation happens
//! here; everything else is delegated to the upstream client and the audio
//! store.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::ApiState;
use crate::inworld::{self, Voice};
use crate::sync::WordAlignment;

/// Build narration router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/voices", get(voices))
        .route("/generate-text", post(generate_text))
        .route("/generate-speech", post(generate_speech))
        .with_state(state)
}

/// Voice listing response
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
}

/// List English voices available for synthesis
async fn voices(State(state): State<Arc<ApiState>>) -> Result<Json<VoicesResponse>, NarrationError> {
    let inworld = state
        .inworld
        .as_ref()
        .ok_or(NarrationError::NotConfigured("upstream credentials not configured"))?;

    let voices = inworld
        .list_voices()
        .await
        .map_err(|e| NarrationError::VoicesFailed(e.to_string()))?;

    Ok(Json(VoicesResponse { voices }))
}

/// Text generation request
#[derive(Debug, Deserialize)]
pub struct GenerateTextRequest {
    pub topic: String,
}

/// Text generation response
#[derive(Debug, Serialize)]
pub struct GenerateTextResponse {
    pub text: String,
}

/// Generate narration text for one of the allowed topics
async fn generate_text(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<GenerateTextRequest>,
) -> Result<Json<GenerateTextResponse>, NarrationError> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(NarrationError::BadRequest("Topic is required"));
    }
    if !inworld::is_allowed_topic(topic) {
        return Err(NarrationError::BadRequest("Invalid topic selection"));
    }

    let inworld = state
        .inworld
        .as_ref()
        .ok_or(NarrationError::NotConfigured("upstream credentials not configured"))?;

    let text = inworld
        .generate_text(&topic.to_ascii_lowercase())
        .await
        .map_err(|e| NarrationError::TextFailed(e.to_string()))?;

    Ok(Json(GenerateTextResponse { text }))
}

/// Speech synthesis request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSpeechRequest {
    pub text: String,
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Speech synthesis response: where the audio was saved plus the word
/// timing data the sync engine consumes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSpeechResponse {
    pub audio_url: String,
    pub timestamps: WordAlignment,
}

/// Synthesize speech with word timestamps and persist the audio
async fn generate_speech(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<GenerateSpeechRequest>,
) -> Result<Json<GenerateSpeechResponse>, NarrationError> {
    if request.text.trim().is_empty() {
        return Err(NarrationError::BadRequest("Text is required"));
    }

    let inworld = state
        .inworld
        .as_ref()
        .ok_or(NarrationError::NotConfigured("upstream credentials not configured"))?;

    let synthesis = inworld
        .synthesize(&request.text, request.voice_id.as_deref())
        .await
        .map_err(|e| NarrationError::SynthesisFailed(e.to_string()))?;

    let audio_url = state
        .audio_store
        .save(&synthesis.audio)
        .map_err(|e| NarrationError::StorageFailed(e.to_string()))?;

    Ok(Json(GenerateSpeechResponse {
        audio_url,
        timestamps: synthesis.alignment,
    }))
}

/// Narration API errors
#[derive(Debug)]
pub enum NarrationError {
    NotConfigured(&'static str),
    BadRequest(&'static str),
    VoicesFailed(String),
    TextFailed(String),
    SynthesisFailed(String),
    StorageFailed(String),
}

impl IntoResponse for NarrationError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: ErrorBody,
        }

        #[derive(Serialize)]
        struct ErrorBody {
            code: &'static str,
            message: String,
        }

        let (status, code, message) = match self {
            Self::NotConfigured(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "not_configured", msg.to_string())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.to_string()),
            Self::VoicesFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "voices_failed", msg)
            }
            Self::TextFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "text_generation_failed", msg)
            }
            Self::SynthesisFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "synthesis_failed", msg)
            }
            Self::StorageFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_failed", msg)
            }
        };

        (status, Json(ErrorResponse { error: ErrorBody { code, message } })).into_response()
    }
}
