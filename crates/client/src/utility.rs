// Copyright (C) 2025 The Horizon-rs Project.
//
// utility.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::horizon_error::HorizonError;

/// Utility functions for the Horizon client
pub struct Utility;

impl Utility {
    /// Checks whether a string has the shape of an ed25519 public-key
    /// strkey: a 'G' prefix followed by 55 more RFC 4648 base32
    /// characters. The embedded checksum is not verified; the endpoint
    /// rejects bad keys anyway.
    pub fn is_valid_account_id(account_id: &str) -> bool {
        account_id.len() == 56
            && account_id.starts_with('G')
            && account_id
                .bytes()
                .all(|b| matches!(b, b'A'..=b'Z' | b'2'..=b'7'))
    }

    /// Validates an account id, returning it on success
    pub fn parse_account_id(account_id: &str) -> Result<&str, HorizonError> {
        if Self::is_valid_account_id(account_id) {
            Ok(account_id)
        } else {
            Err(HorizonError::InvalidAccountId(account_id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUNDED_KEY: &str = "GCNNJFP5YX67O3YYAQAK5CA3DZ63SAVHF5BPZCQKBOT5M4QFIKV3AEHQ";

    #[test]
    fn accepts_a_well_formed_public_key() {
        assert!(Utility::is_valid_account_id(FUNDED_KEY));
        assert_eq!(Utility::parse_account_id(FUNDED_KEY).unwrap(), FUNDED_KEY);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!Utility::is_valid_account_id("GCNNJFP5"));
        assert!(!Utility::is_valid_account_id(""));
    }

    #[test]
    fn rejects_wrong_prefix() {
        // Secret seeds start with 'S'; they must never reach the wire.
        let seed = format!("S{}", &FUNDED_KEY[1..]);
        assert!(!Utility::is_valid_account_id(&seed));
    }

    #[test]
    fn rejects_characters_outside_base32() {
        let lower = FUNDED_KEY.to_lowercase();
        assert!(!Utility::is_valid_account_id(&lower));

        // '0', '1', '8' and '9' are not in the RFC 4648 alphabet.
        let digits = format!("G019{}", &FUNDED_KEY[4..]);
        assert!(!Utility::is_valid_account_id(&digits));
    }

    #[test]
    fn parse_error_carries_the_offending_id() {
        let err = Utility::parse_account_id("bogus").unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }
}
