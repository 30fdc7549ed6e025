// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, accepts a `Message` and reports an `Event` back to the
//! application.
//!
//! - [`results`] - Paginated chunk reader (the main screen)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod results;
pub mod styles;
pub mod theming;
