// SPDX-License-Identifier: MPL-2.0
//! Client for an HTTP text-to-speech service.
//!
//! Requests go to `{endpoint}/generate` as
//! `{"text", "voice", "rate", "volume"}`; the service answers with the URL of
//! the generated audio file.

use super::{Playback, SpeechError, SpeechPlayer};
use crate::domain::ChunkId;
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<String>,
    rate: u32,
    volume: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    audio_url: String,
    #[allow(dead_code)]
    #[serde(default)]
    audio_file: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    text: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    metadata: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct HttpSpeechPlayer {
    client: Client,
    generate_url: String,
    voice: Option<String>,
    rate: u32,
    volume: f32,
}

impl HttpSpeechPlayer {
    pub fn new(
        endpoint: &str,
        voice: Option<String>,
        rate: u32,
        volume: f32,
        timeout: Duration,
    ) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SpeechError::Request(e.to_string()))?;

        Ok(Self {
            client,
            generate_url: format!("{}/generate", endpoint.trim_end_matches('/')),
            voice,
            rate,
            volume,
        })
    }
}

impl SpeechPlayer for HttpSpeechPlayer {
    fn play_text(
        &self,
        text: String,
        chunk_id: ChunkId,
    ) -> BoxFuture<'static, Result<Playback, SpeechError>> {
        let client = self.client.clone();
        let url = self.generate_url.clone();
        let request = GenerateRequest {
            text,
            voice: self.voice.clone(),
            rate: self.rate,
            volume: self.volume,
        };

        async move {
            tracing::debug!(chunk = %chunk_id, %url, "requesting speech");
            let resp = client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| SpeechError::Request(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(SpeechError::Status(status.as_u16()));
            }

            let body: GenerateResponse = resp
                .json()
                .await
                .map_err(|e| SpeechError::Decode(e.to_string()))?;

            tracing::info!(chunk = %chunk_id, audio = %body.audio_url, "speech ready");
            Ok(Playback {
                chunk_id,
                audio_url: Some(body.audio_url),
            })
        }
        .boxed()
    }
}
