// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A record type that counts its callbacks.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{KeyType, KeyringError, Payload, Preparsed};

pub const COUNTING_KEY_TYPE: &str = "counting";

#[derive(Default)]
pub struct CountingKeyType {
    destroyed: AtomicUsize,
}

impl CountingKeyType {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }
}

impl KeyType for CountingKeyType {
    fn name(&self) -> &'static str {
        COUNTING_KEY_TYPE
    }

    fn validate_and_construct(&self, data: &[u8]) -> Result<Preparsed, KeyringError> {
        if data.first() == Some(&0xFF) {
            return Err(KeyringError::InvalidPayload(COUNTING_KEY_TYPE));
        }

        Ok(Preparsed::new(data.to_vec(), data.len()))
    }

    fn describe(&self, description: &str, payload: Option<&(dyn Any + Send + Sync)>) -> String {
        match payload.and_then(|p| p.downcast_ref::<Vec<u8>>()) {
            Some(bytes) => format!("{description} ({} bytes)", bytes.len()),
            None => description.to_owned(),
        }
    }

    fn destroy(&self, _payload: Payload) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }
}
