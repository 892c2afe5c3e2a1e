// Copyright (C) 2025 The Horizon-rs Project.
//
// account_api.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::horizon_client::HorizonClient;
use crate::horizon_error::HorizonError;
use std::sync::Arc;

/// Account convenience APIs over [`HorizonClient`]
pub struct AccountApi {
    /// The Horizon client instance
    horizon_client: Arc<HorizonClient>,
}

impl AccountApi {
    /// AccountApi constructor
    pub fn new(horizon_client: Arc<HorizonClient>) -> Self {
        Self { horizon_client }
    }

    /// Whether the account exists (is funded) on the ledger
    ///
    /// A not-found answer maps to `false`; every other failure
    /// propagates.
    pub async fn exists(&self, account_id: &str) -> Result<bool, HorizonError> {
        match self.horizon_client.get_account(account_id).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Native-asset balance of the account, as a decimal string
    pub async fn native_balance(&self, account_id: &str) -> Result<Option<String>, HorizonError> {
        let record = self.horizon_client.get_account(account_id).await?;
        Ok(record.native_balance().map(|b| b.balance.clone()))
    }

    /// Current sequence number of the account
    pub async fn sequence(&self, account_id: &str) -> Result<String, HorizonError> {
        let record = self.horizon_client.get_account(account_id).await?;
        Ok(record.sequence)
    }
}
