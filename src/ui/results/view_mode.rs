// SPDX-License-Identifier: MPL-2.0
//! Summary/original text selection.

use crate::domain::Chunk;

/// Which text of a chunk is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Summary,
    Original,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Summary => ViewMode::Original,
            ViewMode::Original => ViewMode::Summary,
        }
    }

    /// Picks the text shown for `chunk` in this mode.
    #[must_use]
    pub fn select(self, chunk: &Chunk) -> &str {
        match self {
            ViewMode::Summary => &chunk.summary,
            ViewMode::Original => &chunk.original_text,
        }
    }

    /// i18n key of the toggle button label, which names the *next* mode.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            ViewMode::Summary => "results-show-original",
            ViewMode::Original => "results-show-summary",
        }
    }
}
