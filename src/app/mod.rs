// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the results display.
//!
//! The `App` struct wires together the domains (results, localization,
//! settings, speech) and translates messages into side effects like file
//! loading, backend requests or speech playback. Policy decisions (window size,
//! which collaborator gets called) stay close to the main update loop so it is
//! easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::speech::{self, SpeechPlayer};
use crate::ui::notifications;
use crate::ui::results;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    results: results::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Text-to-speech collaborator; `None` disables the play button.
    player: Option<Arc<dyn SpeechPlayer>>,
    /// Document pasted by the user for summarization.
    input: text_editor::Content,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("chunks", &self.results.chunk_count())
            .field("loading", &self.results.is_loading())
            .field("player", &self.player)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default(), I18n::default())
    }
}

impl App {
    /// Loads configuration and localization, builds the speech player and
    /// optionally starts loading the results file named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let player = speech::player_from_config(&config);

        let mut app = Self::from_config(config, i18n).with_player(player);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match flags.file_path {
            Some(path) => app.update(Message::FileDropped(PathBuf::from(path))),
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds an application around an already loaded configuration, without
    /// a speech player.
    #[must_use]
    pub fn from_config(config: Config, i18n: I18n) -> Self {
        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            results: results::State::new(),
            notifications: notifications::Manager::new(),
            player: None,
            input: text_editor::Content::new(),
        }
    }

    /// Injects the text-to-speech collaborator.
    #[must_use]
    pub fn with_player(mut self, player: Option<Arc<dyn SpeechPlayer>>) -> Self {
        self.player = player;
        self
    }

    #[must_use]
    pub fn results(&self) -> &results::State {
        &self.results
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn title(&self) -> String {
        let count = self.results.chunk_count();
        if count == 0 {
            self.i18n.tr("window-title")
        } else {
            let count = count.to_string();
            self.i18n
                .tr_with_args("window-title-with-chunks", &[("count", count.as_str())])
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.results.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            results: &mut self.results,
            notifications: &mut self.notifications,
            player: self.player.as_ref(),
            input: &mut self.input,
        };

        match message {
            Message::Results(msg) => update::handle_results_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::InputAction(action) => update::handle_input_action(&mut ctx, action),
            Message::Summarize => update::handle_summarize(&mut ctx),
            Message::OpenFileDialog => update::handle_open_file_dialog(&ctx),
            Message::OpenFileDialogResult(Some(path)) | Message::FileDropped(path) => {
                update::load_file(&mut ctx, path)
            }
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::ResponseLoaded(result) => update::handle_response_loaded(&mut ctx, result),
            Message::SpeechFinished { chunk_id, result } => {
                update::handle_speech_finished(&mut ctx, chunk_id, result)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            results: &self.results,
            notifications: &self.notifications,
            input: &self.input,
            text_size: self.config.text_size(),
            speech_available: self.player.is_some(),
            can_summarize: update::can_summarize(&self.config, &self.results, &self.input.text()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Chunk, ChunkId, ResponseData};
    use crate::error::Error;
    use crate::speech::{Playback, SpeechError};
    use futures_util::future::{self, BoxFuture, FutureExt};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingPlayer {
        calls: Mutex<Vec<(String, ChunkId)>>,
    }

    impl SpeechPlayer for RecordingPlayer {
        fn play_text(
            &self,
            text: String,
            chunk_id: ChunkId,
        ) -> BoxFuture<'static, Result<Playback, SpeechError>> {
            self.calls
                .lock()
                .expect("lock")
                .push((text, chunk_id.clone()));
            future::ready(Ok(Playback {
                chunk_id,
                audio_url: None,
            }))
            .boxed()
        }
    }

    fn english_app() -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".into()), None, &config);
        App::from_config(config, i18n)
    }

    fn two_chunks() -> ResponseData {
        ResponseData::new(vec![Chunk::new(1, "O1", "S1"), Chunk::new(2, "O2", "S2")])
    }

    #[test]
    fn title_shows_app_name_without_chunks() {
        let app = english_app();
        assert_eq!(app.title(), "FocusLens");
    }

    #[test]
    fn title_counts_loaded_chunks() {
        let mut app = english_app();
        let _ = app.update(Message::ResponseLoaded(Ok(two_chunks())));
        assert_eq!(app.title(), "2 chunks - FocusLens");
    }

    #[test]
    fn response_loaded_ok_shows_first_chunk_and_stops_loading() {
        let mut app = english_app();
        app.results.set_loading(true);

        let _ = app.update(Message::ResponseLoaded(Ok(two_chunks())));

        assert!(!app.results().is_loading());
        assert_eq!(app.results().displayed_text(), Some("S1"));
    }

    #[test]
    fn response_loaded_err_shows_localized_error() {
        let mut app = english_app();
        app.results.set_loading(true);

        let _ = app.update(Message::ResponseLoaded(Err(Error::Network("HTTP 502".into()))));

        assert!(!app.results().is_loading());
        let error = app.results().error().expect("error shown");
        assert_eq!(
            error.message,
            results::ErrorMessage::Text("The summarization service could not be reached.".into())
        );
    }

    #[test]
    fn empty_response_keeps_previous_chunks() {
        let mut app = english_app();
        let _ = app.update(Message::ResponseLoaded(Ok(two_chunks())));
        let _ = app.update(Message::Results(results::Message::NextChunk));

        let _ = app.update(Message::ResponseLoaded(Ok(ResponseData::default())));

        assert_eq!(app.results().current_index(), 1);
        assert!(app.results().error().is_some());
    }

    #[test]
    fn play_without_player_notifies() {
        let mut app = english_app();
        let _ = app.update(Message::ResponseLoaded(Ok(two_chunks())));

        let _ = app.update(Message::Results(results::Message::PlayAudio));

        assert!(app.results().speaking().is_none());
        assert!(app
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-speech-unavailable"));
    }

    #[test]
    fn play_forwards_displayed_text_to_player() {
        let player = Arc::new(RecordingPlayer::default());
        let mut app = english_app().with_player(Some(player.clone() as Arc<dyn SpeechPlayer>));
        let _ = app.update(Message::ResponseLoaded(Ok(two_chunks())));
        let _ = app.update(Message::Results(results::Message::ToggleView));

        let _ = app.update(Message::Results(results::Message::PlayAudio));

        assert_eq!(app.results().speaking(), Some(&ChunkId::Number(1)));
        let calls = player.calls.lock().expect("lock");
        assert_eq!(calls.as_slice(), &[("O1".to_string(), ChunkId::Number(1))]);
    }

    #[test]
    fn speech_finished_clears_marker_and_notifies() {
        let player = Arc::new(RecordingPlayer::default());
        let mut app = english_app().with_player(Some(player as Arc<dyn SpeechPlayer>));
        let _ = app.update(Message::ResponseLoaded(Ok(two_chunks())));
        let _ = app.update(Message::Results(results::Message::PlayAudio));

        let _ = app.update(Message::SpeechFinished {
            chunk_id: ChunkId::Number(1),
            result: Err(SpeechError::Status(503)),
        });

        assert!(app.results().speaking().is_none());
        assert!(app
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-speech-error"));
    }

    #[test]
    fn dropping_non_json_file_is_ignored() {
        let mut app = english_app();
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/notes.txt")));
        assert!(!app.results().is_loading());
    }

    #[test]
    fn dropping_json_file_starts_loading() {
        let mut app = english_app();
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/results.json")));
        assert!(app.results().is_loading());
    }

    #[test]
    fn file_dropped_during_load_is_ignored() {
        let mut app = english_app();
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/first.json")));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/second.json")));

        let _ = app.update(Message::ResponseLoaded(Ok(two_chunks())));

        assert!(!app.results().is_loading());
        assert_eq!(app.results().chunk_count(), 2);
    }

    #[test]
    fn null_chunks_document_shows_no_data_error() {
        let mut app = english_app();
        let response = crate::source::parse_response(r#"{"chunks": null}"#);

        let _ = app.update(Message::ResponseLoaded(response));

        assert_eq!(
            app.results().error().map(|e| &e.message),
            Some(&results::ErrorMessage::Localized("error-no-data"))
        );
    }

    #[test]
    fn summarize_without_endpoint_does_nothing() {
        let mut app = english_app();
        let _ = app.update(Message::Summarize);
        assert!(!app.results().is_loading());
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let app = App::from_config(config, I18n::default());
        assert_eq!(app.theme(), Theme::Light);
    }
}
