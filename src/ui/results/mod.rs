// SPDX-License-Identifier: MPL-2.0
//! Results display: paginated chunk reader.
//!
//! The component shows one chunk of a summarized document at a time. The
//! reader pages with previous/next, switches between the summary and the
//! original text, and asks the host application to speak the displayed text.
//!
//! The host drives it through three calls:
//!
//! - [`State::set_response_data`] seeds a new chunk list
//! - [`State::set_loading`] shows or hides the spinner row
//! - [`State::show_error`] replaces the chunk area with an error card
//!
//! Everything else (button presses, keyboard shortcuts) arrives as
//! [`Message`]s and comes back out as an [`Event`] for the host to act on.

pub mod loading;
pub mod navigation;
pub mod view;
pub mod view_mode;

pub use navigation::{ChunkNavigator, NavigationInfo};
pub use view::{view, ViewContext, RESULTS_SCROLLABLE_ID};
pub use view_mode::ViewMode;

use crate::domain::{Chunk, ChunkId, ResponseData};
use iced::{event, keyboard};

/// Results-level error kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultsError {
    /// The response did not carry a non-empty chunk list.
    #[error("No data received from the server")]
    MissingOrEmptyData,
}

impl ResultsError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ResultsError::MissingOrEmptyData => "error-no-data",
        }
    }
}

/// Text shown in the error card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorMessage {
    /// Resolved through i18n at render time.
    Localized(&'static str),
    /// Already user-facing text supplied by the host.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub message: ErrorMessage,
}

#[derive(Debug, Clone)]
pub enum Message {
    PreviousChunk,
    NextChunk,
    ToggleView,
    PlayAudio,
    DismissError,
    SpinnerTick,
    /// Native event routed from the application subscription.
    RawEvent(event::Event),
}

/// Outcomes the host application must react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// New chunks were shown; the host scrolls the results area to its start.
    Revealed,
    /// The reader asked to hear the displayed text.
    PlayAudio { text: String, chunk_id: ChunkId },
    /// The current load has been running for a long time.
    LoadingTimedOut,
}

/// What occupies the chunk display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkArea<'a> {
    /// Nothing has been revealed yet.
    Hidden,
    Error(&'a ErrorState),
    /// Revealed but no chunks to show.
    Blank,
    Chunk(&'a Chunk),
}

/// State of the results display.
///
/// Owned by the application and passed by reference to [`view`]. Derived
/// values (counter, button states, toggle label) are computed on demand.
#[derive(Debug, Clone, Default)]
pub struct State {
    chunks: ChunkNavigator,
    view_mode: ViewMode,
    loading: loading::State,
    error: Option<ErrorState>,
    visible: bool,
    speaking: Option<ChunkId>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the component with a backend response.
    ///
    /// An empty or missing chunk list shows the "no data" error and leaves the
    /// current chunks, cursor and view mode as they were. The error is also
    /// returned so the caller can log it.
    pub fn set_response_data(&mut self, response: ResponseData) -> Result<Event, ResultsError> {
        if !response.has_chunks() {
            let err = ResultsError::MissingOrEmptyData;
            self.error = Some(ErrorState {
                message: ErrorMessage::Localized(err.i18n_key()),
            });
            self.visible = true;
            return Err(err);
        }

        let count = response.chunks.len();
        self.chunks.replace(response.chunks);
        self.view_mode = ViewMode::Summary;
        self.error = None;
        self.speaking = None;
        self.visible = true;
        tracing::info!(chunks = count, "results loaded");
        Ok(Event::Revealed)
    }

    pub fn navigate_prev(&mut self) {
        if self.chunks.previous() {
            self.error = None;
            tracing::debug!(index = self.chunks.current_index(), "previous chunk");
        }
    }

    pub fn navigate_next(&mut self) {
        if self.chunks.next() {
            self.error = None;
            tracing::debug!(index = self.chunks.current_index(), "next chunk");
        }
    }

    /// Flips between summary and original text without moving the cursor.
    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.error = None;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        let msg = if is_loading {
            loading::Message::StartLoading
        } else {
            loading::Message::StopLoading
        };
        self.loading.handle(msg);
    }

    /// Replaces the chunk area with `message` and reveals the results area.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(ErrorState {
            message: ErrorMessage::Text(message.into()),
        });
        self.visible = true;
    }

    /// Marks `chunk_id` as having a speech request in flight.
    pub fn mark_speaking(&mut self, chunk_id: ChunkId) {
        self.speaking = Some(chunk_id);
    }

    /// Clears the speaking marker if it still belongs to `chunk_id`.
    pub fn finish_speaking(&mut self, chunk_id: &ChunkId) {
        if self.speaking.as_ref() == Some(chunk_id) {
            self.speaking = None;
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PreviousChunk => {
                self.navigate_prev();
                Event::None
            }
            Message::NextChunk => {
                self.navigate_next();
                Event::None
            }
            Message::ToggleView => {
                self.toggle_view();
                Event::None
            }
            Message::PlayAudio => self.play_request(),
            Message::DismissError => {
                self.error = None;
                Event::None
            }
            Message::SpinnerTick => match self.loading.handle(loading::Message::SpinnerTick) {
                loading::Effect::LoadingTimedOut => Event::LoadingTimedOut,
                loading::Effect::None => Event::None,
            },
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Event {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                match shortcut(&key, modifiers) {
                    Some(message) => self.update(message),
                    None => Event::None,
                }
            }
            _ => Event::None,
        }
    }

    fn play_request(&self) -> Event {
        if self.error.is_some() {
            return Event::None;
        }
        match self.chunks.current() {
            Some(chunk) if self.speaking.as_ref() != Some(&chunk.id) => Event::PlayAudio {
                text: self.view_mode.select(chunk).to_string(),
                chunk_id: chunk.id.clone(),
            },
            _ => Event::None,
        }
    }

    /// Text of the chunk currently on screen, if a chunk is shown.
    #[must_use]
    pub fn displayed_text(&self) -> Option<&str> {
        if self.error.is_some() {
            return None;
        }
        self.chunks
            .current()
            .map(|chunk| self.view_mode.select(chunk))
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        self.chunks.navigation_info()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.chunks.current_index()
    }

    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// i18n key of the toggle button label.
    #[must_use]
    pub fn toggle_label_key(&self) -> &'static str {
        self.view_mode.toggle_label_key()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn speaking(&self) -> Option<&ChunkId> {
        self.speaking.as_ref()
    }

    /// Content of the chunk display area. An error replaces the chunk but not
    /// the navigation controls around it.
    #[must_use]
    pub fn chunk_area(&self) -> ChunkArea<'_> {
        if !self.visible {
            return ChunkArea::Hidden;
        }
        if let Some(error) = &self.error {
            return ChunkArea::Error(error);
        }
        match self.chunks.current() {
            Some(chunk) => ChunkArea::Chunk(chunk),
            None => ChunkArea::Blank,
        }
    }

    /// Whether the previous/next/toggle row and the counter are drawn.
    #[must_use]
    pub fn shows_controls(&self) -> bool {
        self.visible && !self.chunks.is_empty()
    }

    pub(crate) fn loading(&self) -> &loading::State {
        &self.loading
    }
}

/// Maps a key press to a results message.
///
/// Shortcuts ignore presses combined with Ctrl/Cmd or Alt so they never shadow
/// platform bindings.
#[must_use]
pub fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::PreviousChunk),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::NextChunk),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("t") => Some(Message::ToggleView),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("p") => Some(Message::PlayAudio),
        _ => None,
    }
}
