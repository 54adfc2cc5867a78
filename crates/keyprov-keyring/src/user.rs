// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The generic `user` record type: any non-empty blob, no purpose binding.

use std::any::Any;
use std::sync::Arc;

use keyprov_zero::{Zeroize, Zeroizing};

use crate::consts::{USER_KEY_MAX_SIZE, USER_KEY_TYPE};
use crate::error::KeyringError;
use crate::key_type::{KeyType, Payload, Preparsed};
use crate::registry::{KeyTypeRegistry, Registration};

/// Record type holding an arbitrary blob of 1 to [`USER_KEY_MAX_SIZE`] bytes.
///
/// The payload is stored as `Zeroizing<Vec<u8>>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserKeyType;

impl UserKeyType {
    /// Registers the `user` type with `registry`.
    pub fn register(registry: &Arc<KeyTypeRegistry>) -> Result<Registration, KeyringError> {
        registry.register(Arc::new(Self))
    }
}

impl KeyType for UserKeyType {
    fn name(&self) -> &'static str {
        USER_KEY_TYPE
    }

    fn validate_and_construct(&self, data: &[u8]) -> Result<Preparsed, KeyringError> {
        if data.is_empty() || data.len() > USER_KEY_MAX_SIZE {
            return Err(KeyringError::InvalidPayload(USER_KEY_TYPE));
        }

        Ok(Preparsed::new(Zeroizing::new(data.to_vec()), data.len()))
    }

    fn describe(&self, description: &str, payload: Option<&(dyn Any + Send + Sync)>) -> String {
        match payload.and_then(|p| p.downcast_ref::<Zeroizing<Vec<u8>>>()) {
            Some(blob) => format!("{}: {}", description, blob.len()),
            None => description.to_owned(),
        }
    }

    fn destroy(&self, payload: Payload) {
        if let Ok(mut blob) = payload.downcast::<Zeroizing<Vec<u8>>>() {
            blob.zeroize();
        }
    }
}
