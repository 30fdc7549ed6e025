// SPDX-License-Identifier: MPL-2.0
//! Loading indicator sub-component with animated spinner.

use std::time::{Duration, Instant};

/// A request running longer than this raises a single "still working" warning.
pub const LOADING_TIMEOUT: Duration = Duration::from_secs(30);

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.3;

/// Frames drawn for the spinner, indexed by rotation.
const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    /// When loading started (for timeout detection).
    started_at: Option<Instant>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
    /// Whether the timeout warning was already raised for this load.
    timeout_reported: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    StartLoading,
    StopLoading,
    SpinnerTick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Loading has been running longer than [`LOADING_TIMEOUT`].
    LoadingTimedOut,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::StartLoading => {
                // Repeated starts keep the original timestamp.
                if !self.is_loading {
                    self.is_loading = true;
                    self.started_at = Some(Instant::now());
                    self.timeout_reported = false;
                }
                Effect::None
            }
            Message::StopLoading => {
                *self = Self::default();
                Effect::None
            }
            Message::SpinnerTick => {
                if !self.is_loading {
                    return Effect::None;
                }
                self.spinner_rotation += SPINNER_SPEED;
                if self.spinner_rotation > std::f32::consts::TAU {
                    self.spinner_rotation -= std::f32::consts::TAU;
                }
                self.check_timeout(Instant::now())
            }
        }
    }

    fn check_timeout(&mut self, now: Instant) -> Effect {
        match self.started_at {
            Some(started)
                if !self.timeout_reported
                    && now.saturating_duration_since(started) > LOADING_TIMEOUT =>
            {
                self.timeout_reported = true;
                Effect::LoadingTimedOut
            }
            _ => Effect::None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Spinner glyph for the current rotation.
    #[must_use]
    pub fn spinner_frame(&self) -> &'static str {
        let step = std::f32::consts::TAU / SPINNER_FRAMES.len() as f32;
        let index = (self.spinner_rotation / step) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }

    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}
