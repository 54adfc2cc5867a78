// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Record type capability interface.

use core::fmt;
use std::any::Any;

use crate::error::KeyringError;

/// Type-erased record payload. Only the owning [`KeyType`] knows its
/// concrete type.
pub type Payload = Box<dyn Any + Send + Sync>;

/// Output of a successful [`KeyType::validate_and_construct`].
pub struct Preparsed {
    pub(crate) payload: Payload,
    pub(crate) quota_len: usize,
}

impl Preparsed {
    /// Wraps a constructed payload together with the number of bytes it is
    /// charged against the keyring quota.
    pub fn new<P>(payload: P, quota_len: usize) -> Self
    where
        P: Any + Send + Sync,
    {
        Self {
            payload: Box::new(payload),
            quota_len,
        }
    }

    /// Bytes charged against the keyring quota.
    pub fn quota_len(&self) -> usize {
        self.quota_len
    }
}

impl fmt::Debug for Preparsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preparsed")
            .field("quota_len", &self.quota_len)
            .finish_non_exhaustive()
    }
}

/// Callbacks the key store dispatches to for one kind of record.
///
/// Implementations hold no per-record state: everything `describe` and
/// `destroy` need lives in the payload itself, so callbacks for different
/// records may run concurrently.
pub trait KeyType: Any + Send + Sync {
    /// Unique type name, used by callers to pick the type when adding a key.
    fn name(&self) -> &'static str;

    /// Validates caller-supplied bytes and builds an owned payload.
    ///
    /// Must not keep any reference to `data`.
    fn validate_and_construct(&self, data: &[u8]) -> Result<Preparsed, KeyringError>;

    /// Human-readable description for listings. Must never contain secret
    /// bytes. `payload` is `None` when the record holds no material.
    fn describe(&self, description: &str, payload: Option<&(dyn Any + Send + Sync)>) -> String;

    /// Releases a payload. Secret-bearing types overwrite it before it is
    /// freed.
    fn destroy(&self, payload: Payload);
}
