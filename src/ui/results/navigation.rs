// SPDX-License-Identifier: MPL-2.0
//! Chunk list plus the cursor into it.
//!
//! The navigator is the single source of truth for which chunk is shown.
//! Buttons and counters are derived from [`NavigationInfo`] at render time, so
//! they can never disagree with the cursor.

use crate::domain::Chunk;

/// Snapshot of the navigation state for rendering controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// 1-based position of the current chunk, 0 when the list is empty.
    pub position: usize,
    /// Number of chunks in the list.
    pub total: usize,
    /// Whether "previous" is enabled.
    pub has_previous: bool,
    /// Whether "next" is enabled.
    pub has_next: bool,
}

/// Ordered chunks with a bounded cursor.
///
/// Invariant: `current_index < chunks.len()` whenever the list is non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkNavigator {
    chunks: Vec<Chunk>,
    current_index: usize,
}

impl ChunkNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list and moves the cursor back to the first chunk.
    pub fn replace(&mut self, chunks: Vec<Chunk>) {
        self.chunks = chunks;
        self.current_index = 0;
    }

    /// Returns the chunk under the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Chunk> {
        self.chunks.get(self.current_index)
    }

    /// Moves one chunk back. Returns `false` at the first chunk.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Moves one chunk forward. Returns `false` at the last chunk.
    pub fn next(&mut self) -> bool {
        // Length is read on every call rather than cached alongside the index.
        if self.current_index + 1 < self.chunks.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        if self.chunks.is_empty() {
            return NavigationInfo::default();
        }
        NavigationInfo {
            position: self.current_index + 1,
            total: self.chunks.len(),
            has_previous: self.current_index > 0,
            has_next: self.current_index + 1 < self.chunks.len(),
        }
    }
}
