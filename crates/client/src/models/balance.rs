// Copyright (C) 2025 The Horizon-rs Project.
//
// balance.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class of a balance entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// The ledger's native asset (lumens)
    Native,

    /// Issued asset with a code of up to 4 characters
    CreditAlphanum4,

    /// Issued asset with a code of up to 12 characters
    CreditAlphanum12,

    /// Share in a liquidity pool
    LiquidityPoolShares,

    /// Asset type this client does not know about
    #[serde(other)]
    Unknown,
}

/// One entry of an account's balance list
///
/// Amounts stay decimal strings as Horizon sends them; no numeric
/// conversion happens in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Amount held, as a decimal string
    pub balance: String,

    /// Asset class of this entry
    pub asset_type: AssetType,

    /// Asset code for issued assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,

    /// Issuer account for issued assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,

    /// Pool id for liquidity pool shares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_pool_id: Option<String>,

    /// Trustline limit for issued assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,

    /// Amount locked in open buy offers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_liabilities: Option<String>,

    /// Amount locked in open sell offers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_liabilities: Option<String>,

    /// Whether the issuer authorized this trustline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authorized: Option<bool>,

    /// Whether the trustline may keep liabilities while deauthorized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authorized_to_maintain_liabilities: Option<bool>,

    /// Ledger in which this entry last changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_ledger: Option<u32>,
}

impl Balance {
    /// Whether this entry holds the native asset
    pub fn is_native(&self) -> bool {
        self.asset_type == AssetType::Native
    }

    /// Human-readable asset name: "XLM" for native, "CODE:ISSUER" for
    /// issued assets, the pool id for pool shares.
    pub fn asset_name(&self) -> String {
        match self.asset_type {
            AssetType::Native => "XLM".to_string(),
            AssetType::LiquidityPoolShares => self
                .liquidity_pool_id
                .clone()
                .unwrap_or_else(|| "liquidity pool".to_string()),
            _ => match (&self.asset_code, &self.asset_issuer) {
                (Some(code), Some(issuer)) => format!("{}:{}", code, issuer),
                (Some(code), None) => code.clone(),
                _ => "unknown asset".to_string(),
            },
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.balance, self.asset_name())
    }
}
