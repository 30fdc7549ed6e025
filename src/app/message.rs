// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{ChunkId, ResponseData};
use crate::error::Error;
use crate::speech::{Playback, SpeechError};
use crate::ui::notifications;
use crate::ui::results;
use iced::widget::text_editor;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Results(results::Message),
    Notification(notifications::NotificationMessage),
    /// Edit in the text area holding the document to summarize.
    InputAction(text_editor::Action),
    /// Send the text area contents to the summarization backend.
    Summarize,
    /// Open the native file dialog to pick a results file.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A response arrived from a file or from the backend.
    ResponseLoaded(Result<ResponseData, Error>),
    /// A speech request finished.
    SpeechFinished {
        chunk_id: ChunkId,
        result: Result<Playback, SpeechError>,
    },
    /// Periodic tick for the spinner and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line to bootstrap the app state.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional results file to open on startup.
    pub file_path: Option<String>,
    /// Optional directory containing extra or overriding `.ftl` files.
    pub i18n_dir: Option<String>,
}
