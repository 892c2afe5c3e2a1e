// Copyright (C) 2025 The Horizon-rs Project.
//
// horizon_client.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::horizon_error::HorizonError;
use crate::models::{AccountRecord, Problem};
use crate::utility::Utility;
use reqwest::{header, Client, Url};
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The REST client for a Horizon-compatible endpoint
#[derive(Debug)]
pub struct HorizonClient {
    base_address: Url,
    http_client: Client,
}

impl HorizonClient {
    /// Creates a new client bound to the given endpoint
    ///
    /// The endpoint must be a hierarchical URL (http or https);
    /// non-base URLs such as `mailto:` cannot carry the
    /// `/accounts/{id}` path and are rejected here.
    pub fn new(url: Url) -> Result<Self, HorizonError> {
        if url.cannot_be_a_base() {
            return Err(HorizonError::InvalidEndpoint(url.to_string()));
        }
        let http_client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(http_client, url))
    }

    /// Creates a client with an existing HTTP client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
        }
    }

    /// The endpoint this client talks to
    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// Fetches the account document for the given public key
    ///
    /// The id is checked for strkey shape before any network I/O.
    /// Non-success responses are returned as [`HorizonError::Api`]
    /// with Horizon's problem document attached.
    pub async fn get_account(&self, account_id: &str) -> Result<AccountRecord, HorizonError> {
        let account_id = Utility::parse_account_id(account_id)?;
        let url = self.account_url(account_id);

        debug!(target: "horizon", %url, "fetching account");

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let content = response.text().await?;

        if !status.is_success() {
            return Err(HorizonError::Api {
                status: status.as_u16(),
                problem: Problem::from_body(status.as_u16(), &content),
            });
        }

        let record: AccountRecord = serde_json::from_str(&content)?;

        debug!(
            target: "horizon",
            account = %record.id,
            balances = record.balances.len(),
            "account fetched"
        );

        Ok(record)
    }

    /// Synchronous wrapper around [`get_account`](Self::get_account);
    /// blocks on the ambient tokio runtime.
    ///
    /// Must be called from a blocking context that belongs to a
    /// runtime, e.g. inside `tokio::task::spawn_blocking` after
    /// entering the runtime handle. Calling it from async code panics
    /// (`Handle::block_on` aborts inside an async context); calling it
    /// with no runtime at all returns [`HorizonError::NoRuntime`].
    pub fn get_account_blocking(&self, account_id: &str) -> Result<AccountRecord, HorizonError> {
        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| HorizonError::NoRuntime)?;
        handle.block_on(self.get_account(account_id))
    }

    fn account_url(&self, account_id: &str) -> Url {
        let mut url = self.base_address.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["accounts", account_id]);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HorizonClient {
        HorizonClient::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn account_url_is_built_from_the_base() {
        let client = client("https://horizon-testnet.stellar.org");
        let url = client.account_url("GABC");
        assert_eq!(
            url.as_str(),
            "https://horizon-testnet.stellar.org/accounts/GABC"
        );
    }

    #[test]
    fn account_url_keeps_an_existing_path_prefix() {
        let client = client("https://example.com/horizon/");
        let url = client.account_url("GABC");
        assert_eq!(url.as_str(), "https://example.com/horizon/accounts/GABC");
    }

    #[test]
    fn non_hierarchical_endpoint_is_rejected() {
        let url = Url::parse("mailto:ops@example.com").unwrap();
        let err = HorizonClient::new(url).unwrap_err();
        assert!(matches!(err, HorizonError::InvalidEndpoint(_)));
        assert!(err.to_string().contains("mailto:ops@example.com"));
    }

    #[test]
    fn blocking_call_outside_a_runtime_fails_cleanly() {
        let client = client("https://horizon-testnet.stellar.org");
        let err = client
            .get_account_blocking("GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ")
            .unwrap_err();
        assert!(matches!(err, HorizonError::NoRuntime));
    }
}
