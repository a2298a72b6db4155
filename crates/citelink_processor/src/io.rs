/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use citelink_core::{InputSources, LinkConfig, Sources};
use serde::de::DeserializeOwned;

use crate::ProcessorError;

/// Load a source list from a file given its path.
/// Supports JSON and YAML, either a bare list or `{sources: [...]}`.
pub fn load_sources(path: &Path) -> Result<Sources, ProcessorError> {
    let input: InputSources = load(path)?;
    Ok(input.into())
}

/// Load link options from a JSON or YAML file.
pub fn load_config(path: &Path) -> Result<LinkConfig, ProcessorError> {
    load(path)
}

/// Parse sources from a string in the given format (`json` or anything else for YAML).
pub fn parse_sources(content: &str, ext: &str) -> Result<Sources, ProcessorError> {
    let input: InputSources = parse(content.as_bytes(), ext)?;
    Ok(input.into())
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    parse(&bytes, ext)
}

fn parse<T: DeserializeOwned>(bytes: &[u8], ext: &str) -> Result<T, ProcessorError> {
    match ext {
        "json" => serde_json::from_slice(bytes)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
        _ => {
            // YAML/Fallback
            let content = String::from_utf8_lossy(bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
        }
    }
}
