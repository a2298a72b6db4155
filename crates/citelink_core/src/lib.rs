/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citelink core data model.
//!
//! Shared types for the citelink processor and CLI: the [`Source`] records a
//! response cites, the [`SourceKind`] used to choose icons, and the
//! [`LinkConfig`] that controls how links are rendered.

pub mod options;
pub mod source;

pub use options::LinkConfig;
pub use source::{source_for_index, InputSources, Source, SourceKind, Sources};
