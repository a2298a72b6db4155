/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Processor errors.
//!
//! Only loading can fail. Linking itself degrades to leaving text as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Format name, then the parser message.
    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),
}
