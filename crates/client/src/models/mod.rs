// Copyright (C) 2025 The Horizon-rs Project.
//
// mod.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Data models for the Horizon account endpoint.

mod account;
mod balance;
mod problem;

pub use account::{AccountFlags, AccountRecord, AccountThresholds, Signer};
pub use balance::{AssetType, Balance};
pub use problem::Problem;
