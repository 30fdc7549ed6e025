// SPDX-License-Identifier: MPL-2.0
//! Text-to-speech collaborator.
//!
//! The results display never talks to a speech engine directly. The
//! application holds an optional [`SpeechPlayer`] injected at construction and
//! forwards play requests to it. Without a player the play button is disabled.

mod http;
mod silent;

pub use http::HttpSpeechPlayer;
pub use silent::SilentPlayer;

use crate::app::config::Config;
use crate::domain::ChunkId;
use futures_util::future::BoxFuture;
use std::fmt::Debug;
use std::sync::Arc;

/// Outcome of a successful speech request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    pub chunk_id: ChunkId,
    /// Where the generated audio can be fetched, when the engine produces a file.
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("speech request failed: {0}")]
    Request(String),

    #[error("speech service answered with status {0}")]
    Status(u16),

    #[error("speech response could not be decoded: {0}")]
    Decode(String),
}

impl SpeechError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SpeechError::Request(_) | SpeechError::Status(_) | SpeechError::Decode(_) => {
                "notification-speech-error"
            }
        }
    }
}

/// Something that can speak a chunk of text.
pub trait SpeechPlayer: Send + Sync + Debug {
    /// Speaks `text` on behalf of `chunk_id`.
    ///
    /// The returned future must not borrow `self` so it can run as an Iced task.
    fn play_text(
        &self,
        text: String,
        chunk_id: ChunkId,
    ) -> BoxFuture<'static, Result<Playback, SpeechError>>;
}

/// Builds the player described by the `[speech]` section.
///
/// Returns `None` when speech is disabled. Without an endpoint, a
/// [`SilentPlayer`] stands in so the rest of the flow can still be exercised.
pub fn player_from_config(config: &Config) -> Option<Arc<dyn SpeechPlayer>> {
    if !config.speech.enabled {
        tracing::info!("speech disabled by configuration");
        return None;
    }

    let Some(endpoint) = config.speech.endpoint.as_deref() else {
        return Some(Arc::new(SilentPlayer));
    };

    match HttpSpeechPlayer::new(
        endpoint,
        config.speech.voice.clone(),
        config.speech_rate(),
        config.speech_volume(),
        config.request_timeout(),
    ) {
        Ok(player) => Some(Arc::new(player)),
        Err(err) => {
            tracing::warn!(%err, "speech client unavailable");
            None
        }
    }
}
