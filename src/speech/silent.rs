// SPDX-License-Identifier: MPL-2.0
use super::{Playback, SpeechError, SpeechPlayer};
use crate::domain::ChunkId;
use futures_util::future::{self, BoxFuture, FutureExt};

/// Player that only logs what it would have said.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SpeechPlayer for SilentPlayer {
    fn play_text(
        &self,
        text: String,
        chunk_id: ChunkId,
    ) -> BoxFuture<'static, Result<Playback, SpeechError>> {
        tracing::info!(chunk = %chunk_id, chars = text.chars().count(), "speech requested");
        future::ready(Ok(Playback {
            chunk_id,
            audio_url: None,
        }))
        .boxed()
    }
}
