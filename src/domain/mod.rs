// SPDX-License-Identifier: MPL-2.0
//! Domain layer - payload types received from the summarization backend.
//!
//! These types carry no UI or transport concerns. They only derive `serde`
//! traits so the `source` layer can decode them from JSON.
//!
//! # Modules
//!
//! - [`chunk`]: [`Chunk`], [`ChunkId`] and the [`ResponseData`] envelope

pub mod chunk;

pub use chunk::{Chunk, ChunkId, ResponseData};
