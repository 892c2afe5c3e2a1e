// Copyright (C) 2025 The Horizon-rs Project.
//
// horizon_error.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::Problem;
use thiserror::Error;

/// Errors produced by the Horizon client
#[derive(Error, Debug)]
pub enum HorizonError {
    /// The supplied account id is not a plausible public key
    #[error("invalid account id '{0}': expected 56 base32 characters starting with 'G'")]
    InvalidAccountId(String),

    /// The endpoint URL cannot carry the account path
    #[error("invalid horizon endpoint '{0}': not a hierarchical URL")]
    InvalidEndpoint(String),

    /// Transport-level failure talking to the endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Horizon answered with a non-success status
    #[error("horizon responded with status {status}: {problem}")]
    Api {
        /// HTTP status code of the response
        status: u16,

        /// Problem document carried in the response body
        problem: Problem,
    },

    /// The response body was not a valid account document
    #[error("failed to parse horizon response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A blocking call was made outside a tokio runtime
    #[error("no async runtime available")]
    NoRuntime,
}

impl HorizonError {
    /// Whether the error is Horizon's not-found answer for the account
    pub fn is_not_found(&self) -> bool {
        matches!(self, HorizonError::Api { status: 404, .. })
    }
}
