// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed as follows:
//! - file drops are handled by the application itself
//! - keyboard events not captured by a focused widget go to the results display
//! - everything else is ignored

use super::Message;
use crate::ui::results;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the spinner and notification timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        if !matches!(event, event::Event::Keyboard(_)) {
            return None;
        }

        // Captured keys belong to the focused widget (e.g. the text area).
        match status {
            event::Status::Ignored => Some(Message::Results(results::Message::RawEvent(event))),
            event::Status::Captured => None,
        }
    })
}

/// Creates a periodic tick subscription for the loading spinner, the loading
/// timeout and notification auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
