// Copyright (C) 2025 The Horizon-rs Project.
//
// account.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::Balance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account document returned by Horizon's `/accounts/{id}` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Canonical id of the account (equals the public key)
    pub id: String,

    /// Public key of the account
    pub account_id: String,

    /// Cursor value for paging through account collections
    #[serde(default)]
    pub paging_token: String,

    /// Current sequence number, as a decimal string
    pub sequence: String,

    /// Number of subentries (trustlines, offers, data, signers)
    #[serde(default)]
    pub subentry_count: u32,

    /// Ledger in which this account last changed
    #[serde(default)]
    pub last_modified_ledger: u32,

    /// Signing thresholds
    #[serde(default)]
    pub thresholds: AccountThresholds,

    /// Authorization flags
    #[serde(default)]
    pub flags: AccountFlags,

    /// Balance entries, native asset included
    pub balances: Vec<Balance>,

    /// Signers able to authorize transactions for this account
    #[serde(default)]
    pub signers: Vec<Signer>,

    /// Key/value data entries attached to the account
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl AccountRecord {
    /// The native-asset balance entry, if the record carries one
    pub fn native_balance(&self) -> Option<&Balance> {
        self.balances.iter().find(|b| b.is_native())
    }

    /// Sequence number as an integer
    pub fn sequence_number(&self) -> Option<i64> {
        self.sequence.parse().ok()
    }
}

/// Signing thresholds of an account
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AccountThresholds {
    /// Threshold for low-security operations
    #[serde(default)]
    pub low_threshold: u8,

    /// Threshold for medium-security operations
    #[serde(default)]
    pub med_threshold: u8,

    /// Threshold for high-security operations
    #[serde(default)]
    pub high_threshold: u8,
}

/// Authorization flags of an account
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AccountFlags {
    /// Trustlines require issuer authorization
    #[serde(default)]
    pub auth_required: bool,

    /// The issuer may revoke authorization
    #[serde(default)]
    pub auth_revocable: bool,

    /// These flags can never change
    #[serde(default)]
    pub auth_immutable: bool,

    /// The issuer may claw back asset balances
    #[serde(default)]
    pub auth_clawback_enabled: bool,
}

/// One signer entry of an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signer {
    /// Signing weight of this key
    pub weight: u32,

    /// The signer key
    pub key: String,

    /// Key type, e.g. `ed25519_public_key`
    #[serde(rename = "type")]
    pub signer_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT_JSON: &str = r#"{
        "id": "GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ",
        "account_id": "GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ",
        "paging_token": "",
        "sequence": "3262239422087168",
        "subentry_count": 1,
        "last_modified_ledger": 759488,
        "thresholds": {
            "low_threshold": 0,
            "med_threshold": 0,
            "high_threshold": 0
        },
        "flags": {
            "auth_required": false,
            "auth_revocable": false,
            "auth_immutable": false,
            "auth_clawback_enabled": false
        },
        "balances": [
            {
                "balance": "12.5000000",
                "limit": "922337203685.4775807",
                "asset_type": "credit_alphanum4",
                "asset_code": "USDC",
                "asset_issuer": "GBBD47IF6LWK7P7MDEVSCWR7DPUWV3NY3DTQEVFL4NAT4AQH3ZLLFLA5"
            },
            {
                "balance": "10000.0000000",
                "buying_liabilities": "0.0000000",
                "selling_liabilities": "0.0000000",
                "asset_type": "native"
            }
        ],
        "signers": [
            {
                "weight": 1,
                "key": "GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ",
                "type": "ed25519_public_key"
            }
        ],
        "data": {}
    }"#;

    #[test]
    fn full_account_document_deserializes() {
        let record: AccountRecord = serde_json::from_str(ACCOUNT_JSON).unwrap();

        assert_eq!(record.id, record.account_id);
        assert_eq!(record.sequence, "3262239422087168");
        assert_eq!(record.sequence_number(), Some(3262239422087168));
        assert_eq!(record.balances.len(), 2);
        assert_eq!(record.subentry_count, 1);
        assert_eq!(record.signers.len(), 1);
        assert_eq!(record.signers[0].signer_type, "ed25519_public_key");
    }

    #[test]
    fn native_balance_is_found_regardless_of_position() {
        // Horizon lists the native entry last.
        let record: AccountRecord = serde_json::from_str(ACCOUNT_JSON).unwrap();
        let native = record.native_balance().unwrap();
        assert_eq!(native.balance, "10000.0000000");
    }

    #[test]
    fn sparse_document_uses_defaults() {
        let record: AccountRecord = serde_json::from_str(
            r#"{
                "id": "GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ",
                "account_id": "GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ",
                "sequence": "1",
                "balances": []
            }"#,
        )
        .unwrap();

        assert_eq!(record.subentry_count, 0);
        assert_eq!(record.thresholds.high_threshold, 0);
        assert!(!record.flags.auth_required);
        assert!(record.native_balance().is_none());
        assert!(record.data.is_empty());
    }

    #[test]
    fn non_numeric_sequence_yields_none() {
        let mut record: AccountRecord = serde_json::from_str(ACCOUNT_JSON).unwrap();
        record.sequence = "not-a-number".to_string();
        assert_eq!(record.sequence_number(), None);
    }
}
