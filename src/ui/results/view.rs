// SPDX-License-Identifier: MPL-2.0
//! Rendering of the results display.

use super::{ChunkArea, ErrorMessage, ErrorState, Message, State};
use crate::domain::Chunk;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{alignment, Element, Length};

/// Identifier of the scrollable wrapping the results, used to snap it back to
/// the top when new chunks arrive.
pub const RESULTS_SCROLLABLE_ID: &str = "results-scrollable";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Font size of the chunk text.
    pub text_size: f32,
    /// Whether a speech player is attached; the play button is disabled otherwise.
    pub speech_available: bool,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    if state.is_loading() {
        content = content.push(loading_row(state, ctx.i18n));
    }

    content = content.push(body(state, &ctx));

    Scrollable::new(content)
        .id(Id::new(RESULTS_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn loading_row<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(state.loading().spinner_frame()).size(sizing::SPINNER))
        .push(Text::new(i18n.tr("results-loading")).size(typography::BODY))
        .into()
}

fn body<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let area = match state.chunk_area() {
        ChunkArea::Hidden => {
            return Container::new(Text::new(ctx.i18n.tr("results-empty")).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CHUNK_MIN_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into();
        }
        ChunkArea::Error(error) => error_card(error, ctx.i18n),
        ChunkArea::Blank => Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CHUNK_MIN_HEIGHT))
            .into(),
        ChunkArea::Chunk(chunk) => chunk_card(state, chunk, ctx),
    };

    if !state.shows_controls() {
        return area;
    }

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::READING_MAX_WIDTH)
        .push(area)
        .push(controls(state, ctx.i18n))
        .into()
}

/// An empty response is a warning; failures reported by the host are errors.
fn severity_of(message: &ErrorMessage) -> ErrorSeverity {
    match message {
        ErrorMessage::Localized(_) => ErrorSeverity::Warning,
        ErrorMessage::Text(_) => ErrorSeverity::Error,
    }
}

fn error_card<'a>(error: &ErrorState, i18n: &I18n) -> Element<'a, Message> {
    let message = match &error.message {
        ErrorMessage::Localized(key) => i18n.tr(key),
        ErrorMessage::Text(text) => text.clone(),
    };
    centered_error_view(
        ErrorDisplay::new(severity_of(&error.message))
            .title(i18n.tr("results-error-title"))
            .message(message)
            .action(i18n.tr("results-error-dismiss"), Message::DismissError),
    )
}

fn chunk_card<'a>(state: &'a State, chunk: &'a Chunk, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let position = state.navigation_info().position.to_string();
    let is_speaking = state.speaking() == Some(&chunk.id);

    let play_label = if is_speaking {
        ctx.i18n.tr("results-speaking")
    } else {
        ctx.i18n.tr("results-play-audio")
    };
    let play_button = button(Text::new(play_label).size(typography::BODY))
        .on_press_maybe((ctx.speech_available && !is_speaking).then_some(Message::PlayAudio))
        .style(styles::button::primary);

    let title = Text::new(
        ctx.i18n
            .tr_with_args("results-chunk-title", &[("number", position.as_str())]),
    )
    .size(typography::TITLE_MD);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(play_button);

    let chunk_text = Text::new(state.view_mode().select(chunk))
        .size(ctx.text_size)
        .line_height(text::LineHeight::Relative(typography::READING_LINE_HEIGHT));

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(chunk_text),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .max_width(sizing::READING_MAX_WIDTH)
    .style(styles::container::chunk_card)
    .into()
}

/// Previous/next buttons, the counter and the view toggle.
fn controls<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let info = state.navigation_info();
    let position = info.position.to_string();
    let total = info.total.to_string();

    let counter = Text::new(i18n.tr_with_args(
        "results-counter",
        &[("current", position.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    let previous = button(Text::new(i18n.tr("results-previous")))
        .on_press_maybe(info.has_previous.then_some(Message::PreviousChunk))
        .style(styles::button::secondary);
    let next = button(Text::new(i18n.tr("results-next")))
        .on_press_maybe(info.has_next.then_some(Message::NextChunk))
        .style(styles::button::secondary);
    let toggle = button(Text::new(i18n.tr(state.toggle_label_key())))
        .on_press(Message::ToggleView)
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(counter)
        .push(next)
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}
