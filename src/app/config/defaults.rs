// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Display**: Chunk text size bounds
//! - **Backend**: Summarization request timeout
//! - **Speech**: Text-to-speech rate and volume

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default chunk text size in points. Large body text reads more easily.
pub const DEFAULT_TEXT_SIZE: f32 = 18.0;

/// Minimum allowed chunk text size.
pub const MIN_TEXT_SIZE: f32 = 12.0;

/// Maximum allowed chunk text size.
pub const MAX_TEXT_SIZE: f32 = 40.0;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default timeout for a summarization request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Speech Defaults
// ==========================================================================

/// Default speech rate in words per minute.
pub const DEFAULT_SPEECH_RATE: u32 = 150;

/// Default speech volume (0.0 to 1.0).
pub const DEFAULT_SPEECH_VOLUME: f32 = 1.0;

/// Minimum speech volume.
pub const MIN_SPEECH_VOLUME: f32 = 0.0;

/// Maximum speech volume.
pub const MAX_SPEECH_VOLUME: f32 = 1.0;

const _: () = {
    assert!(MIN_TEXT_SIZE < DEFAULT_TEXT_SIZE);
    assert!(DEFAULT_TEXT_SIZE < MAX_TEXT_SIZE);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_SPEECH_VOLUME <= MAX_SPEECH_VOLUME);
};
