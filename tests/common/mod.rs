//! Shared test utilities

use std::sync::Arc;

use karaoke_gateway::AudioStore;
use karaoke_gateway::api::ApiState;

/// Build API state with no upstream client and a throwaway audio directory
#[must_use]
pub fn unconfigured_state() -> Arc<ApiState> {
    let dir = tempfile::tempdir()
        .expect("failed to create temp dir")
        .keep();
    let audio_store = AudioStore::new(dir).expect("failed to init audio store");

    Arc::new(ApiState {
        inworld: None,
        audio_store,
        default_voice: karaoke_gateway::DEFAULT_VOICE.to_string(),
    })
}
