// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of `App`
//! it may touch and returns the follow-up `Task`.

use super::config::Config;
use super::Message;
use crate::domain::{ChunkId, ResponseData};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::source;
use crate::speech::{Playback, SpeechError, SpeechPlayer};
use crate::ui::notifications::{Manager, Notification};
use crate::ui::results::{self, Event as ResultsEvent, RESULTS_SCROLLABLE_ID};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, text_editor, Id};
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const LOADING_SLOW_KEY: &str = "notification-loading-slow";

/// Context for update operations containing references to app state.
pub(super) struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub results: &'a mut results::State,
    pub notifications: &'a mut Manager,
    pub player: Option<&'a Arc<dyn SpeechPlayer>>,
    pub input: &'a mut text_editor::Content,
}

pub(super) fn handle_results_message(
    ctx: &mut UpdateContext<'_>,
    message: results::Message,
) -> Task<Message> {
    let event = ctx.results.update(message);
    handle_results_event(ctx, event)
}

fn handle_results_event(ctx: &mut UpdateContext<'_>, event: ResultsEvent) -> Task<Message> {
    match event {
        ResultsEvent::None => Task::none(),
        ResultsEvent::Revealed => {
            operation::snap_to(Id::new(RESULTS_SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 })
        }
        ResultsEvent::PlayAudio { text, chunk_id } => play(ctx, text, chunk_id),
        ResultsEvent::LoadingTimedOut => {
            ctx.notifications.push(Notification::warning(LOADING_SLOW_KEY));
            Task::none()
        }
    }
}

fn play(ctx: &mut UpdateContext<'_>, text: String, chunk_id: ChunkId) -> Task<Message> {
    let Some(player) = ctx.player else {
        ctx.notifications
            .push(Notification::info("notification-speech-unavailable"));
        return Task::none();
    };

    ctx.results.mark_speaking(chunk_id.clone());
    let future = player.play_text(text, chunk_id.clone());
    Task::perform(future, move |result| Message::SpeechFinished {
        chunk_id: chunk_id.clone(),
        result,
    })
}

pub(super) fn handle_speech_finished(
    ctx: &mut UpdateContext<'_>,
    chunk_id: ChunkId,
    result: Result<Playback, SpeechError>,
) -> Task<Message> {
    ctx.results.finish_speaking(&chunk_id);
    match result {
        Ok(_playback) => {
            ctx.notifications.push(
                Notification::success("notification-speech-ready")
                    .with_arg("chunk", chunk_id.to_string()),
            );
        }
        Err(err) => {
            tracing::warn!(chunk = %chunk_id, %err, "speech failed");
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
    Task::none()
}

pub(super) fn handle_input_action(
    ctx: &mut UpdateContext<'_>,
    action: text_editor::Action,
) -> Task<Message> {
    ctx.input.perform(action);
    Task::none()
}

/// Whether the summarize button may be pressed.
pub(super) fn can_summarize(config: &Config, results: &results::State, input: &str) -> bool {
    config.backend.summarize_url.is_some() && !results.is_loading() && !input.trim().is_empty()
}

pub(super) fn handle_summarize(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let content = ctx.input.text();
    if !can_summarize(ctx.config, ctx.results, &content) {
        return Task::none();
    }
    let Some(endpoint) = ctx.config.backend.summarize_url.clone() else {
        return Task::none();
    };

    ctx.results.set_loading(true);
    let timeout = ctx.config.request_timeout();
    Task::perform(
        source::summarize(endpoint, content, timeout),
        Message::ResponseLoaded,
    )
}

pub(super) fn handle_open_file_dialog(ctx: &UpdateContext<'_>) -> Task<Message> {
    let title = ctx.i18n.tr("dialog-open-title");
    let filter_name = ctx.i18n.tr("dialog-filter-json");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, &["json"])
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Whether a results file may be loaded now: a JSON file and no load in flight.
pub(super) fn can_load_file(results: &results::State, path: &Path) -> bool {
    is_json_file(path) && !results.is_loading()
}

/// Starts loading a results file. Non-JSON files and files dropped while
/// another load is running are ignored.
pub(super) fn load_file(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !can_load_file(ctx.results, &path) {
        tracing::debug!(
            path = %path.display(),
            loading = ctx.results.is_loading(),
            "ignoring file"
        );
        return Task::none();
    }

    ctx.results.set_loading(true);
    Task::perform(source::load_from_path(path), Message::ResponseLoaded)
}

pub(super) fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Applies a response whether it came from disk or from the backend.
///
/// Late responses are applied as they arrive; there is no cancellation.
pub(super) fn handle_response_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ResponseData, Error>,
) -> Task<Message> {
    ctx.results.set_loading(false);
    ctx.notifications.dismiss_key(LOADING_SLOW_KEY);

    match result {
        Ok(response) => match ctx.results.set_response_data(response) {
            Ok(event) => handle_results_event(ctx, event),
            Err(err) => {
                tracing::warn!(%err, "response rejected");
                Task::none()
            }
        },
        Err(err) => {
            tracing::warn!(%err, "failed to obtain response");
            ctx.results.show_error(ctx.i18n.tr(err.i18n_key()));
            Task::none()
        }
    }
}

pub(super) fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    if ctx.results.is_loading() {
        handle_results_message(ctx, results::Message::SpinnerTick)
    } else {
        Task::none()
    }
}
