// Copyright (C) 2025 The Horizon-rs Project.
//
// problem.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error document Horizon attaches to non-success responses
/// (`application/problem+json`, RFC 7807)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// URI identifying the problem type
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Short human-readable summary
    pub title: String,

    /// HTTP status code repeated in the body
    #[serde(default)]
    pub status: Option<u16>,

    /// Longer explanation of this occurrence
    #[serde(default)]
    pub detail: Option<String>,
}

impl Problem {
    /// Parses a response body into a problem document. Bodies that are
    /// not problem JSON become a generic problem carrying the raw text,
    /// so the caller always has something to print.
    pub fn from_body(status: u16, body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| {
            let trimmed = body.trim();
            let title = if trimmed.is_empty() {
                "unexpected response from horizon".to_string()
            } else {
                trimmed.chars().take(200).collect()
            };
            Self {
                kind: String::new(),
                title,
                status: Some(status),
                detail: None,
            }
        })
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(ref detail) = self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}
