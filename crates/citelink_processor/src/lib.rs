/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citelink Processor
//!
//! This crate turns the numeric citation markers a chat model writes into
//! its answers (`[1]`, `[2]`, ...) into links to the sources the answer was
//! grounded on. Marker `[n]` refers to the `n`th source; markers without a
//! linkable source are left untouched, so processing never fails.
//!
//! Rendering is pluggable through [`render::OutputFormat`] (HTML, Djot,
//! plain text). The crate also handles search-style `[@Web](URL)` citations,
//! numbered reference lists, and a few text clean-up helpers.
//!
//! # Example
//!
//! ```rust
//! use citelink_core::Source;
//! use citelink_processor::{Linker, render::plain::PlainText};
//!
//! let sources = vec![Source::from_url("https://doc.rust-lang.org"), Source::default()];
//! let linker = Linker::<PlainText>::default();
//! let result = linker.link("Ownership [1] and borrowing [2].", &sources);
//! assert_eq!(result, "Ownership [1] <https://doc.rust-lang.org> and borrowing [2].");
//! ```

pub mod error;
pub mod io;
pub mod linker;
pub mod marker;
pub mod references;
pub mod render;
pub mod text;
pub mod web;

pub use error::ProcessorError;
pub use linker::{linkify, Linker, Resolution};
pub use marker::{Marker, MarkerParser, NumericMarkerParser, WebMarkerParser};
pub use references::format_source_references;
pub use web::{
    extract_source_references, process_web_citations, remove_source_references, SourceReference,
    WebCitationProcessor,
};

// Re-export the data model for convenience
pub use citelink_core::{LinkConfig, Source, SourceKind, Sources};
