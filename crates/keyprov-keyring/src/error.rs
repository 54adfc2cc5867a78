// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for keyprov-keyring.

use thiserror::Error;

/// Errors reported by the key store.
///
/// None of the variants carry payload bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyringError {
    /// No record with that serial is visible to the caller.
    #[error("no such key")]
    NotFound,

    /// The record is visible but the caller lacks the requested permission.
    #[error("access denied")]
    PermissionDenied,

    /// No record type is registered under that name.
    #[error("unknown key type: {0}")]
    UnknownKeyType(String),

    /// A record type with the same name is already registered.
    #[error("key type already registered: {0}")]
    DuplicateKeyType(&'static str),

    /// The record type rejected the supplied payload.
    #[error("invalid payload for key type {0}")]
    InvalidPayload(&'static str),

    /// Adding the record would exceed the keyring's key or byte quota.
    #[error("key quota exceeded")]
    QuotaExceeded,

    /// A lock protecting the record table or type table was poisoned.
    #[error("mutex poisoned")]
    MutexPoisoned,
}
