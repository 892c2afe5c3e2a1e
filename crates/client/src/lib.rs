// Copyright (C) 2025 The Horizon-rs Project.
//
// lib.rs file belongs to the horizon-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Horizon Client Library
//!
//! This crate provides a REST client for looking up accounts on a
//! Horizon-compatible ledger API. It covers the read-only account
//! endpoint only: one GET per lookup, no transaction building.

pub mod models;
mod account_api;
mod horizon_client;
mod horizon_error;
mod utility;

pub use account_api::AccountApi;
pub use horizon_client::HorizonClient;
pub use horizon_error::HorizonError;
pub use utility::Utility;

// Re-export commonly used types
pub use models::{AccountRecord, AssetType, Balance, Problem};
