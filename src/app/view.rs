// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: toolbar, results display and the
//! toast overlay.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::results::{self, ViewContext as ResultsViewContext};
use crate::ui::styles;
use iced::widget::{button, text_editor, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub results: &'a results::State,
    pub notifications: &'a Manager,
    pub input: &'a text_editor::Content,
    pub text_size: f32,
    pub speech_available: bool,
    pub can_summarize: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let results_view = results::view(
        ctx.results,
        ResultsViewContext {
            i18n: ctx.i18n,
            text_size: ctx.text_size,
            speech_available: ctx.speech_available,
        },
    )
    .map(Message::Results);

    let column = Column::new()
        .push(toolbar(&ctx))
        .push(
            Container::new(results_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open_button = button(Text::new(ctx.i18n.tr("toolbar-open-file")))
        .on_press_maybe((!ctx.results.is_loading()).then_some(Message::OpenFileDialog))
        .style(styles::button::secondary);

    let placeholder = ctx.i18n.tr("toolbar-input-placeholder");
    let input = text_editor(ctx.input)
        .placeholder(placeholder)
        .on_action(Message::InputAction)
        .height(Length::Fixed(sizing::INPUT_HEIGHT));

    let summarize_button = button(Text::new(ctx.i18n.tr("toolbar-summarize")))
        .on_press_maybe(ctx.can_summarize.then_some(Message::Summarize))
        .style(styles::button::primary);

    let buttons = Column::new()
        .spacing(spacing::XS)
        .push(open_button)
        .push(summarize_button);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(input)
            .push(buttons),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}
