// SPDX-License-Identifier: MPL-2.0
//! `focus_lens` is a desktop reader for summarized documents, built with the
//! Iced GUI framework.
//!
//! A summarization backend splits a document into chunks and returns a summary
//! for each one. The reader pages through the chunks, switches between summary
//! and original text, and can send the displayed text to a text-to-speech
//! service.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod source;
pub mod speech;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
