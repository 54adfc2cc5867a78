// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::any::Any;
use std::sync::Arc;

use keyprov_keyring::{KeyType, KeyTypeRegistry, KeyringError, Payload, Preparsed, Registration};
use keyprov_zero::Zeroize;

use crate::consts::PROVISIONING_KEY_TYPE;
use crate::payload::ProvisioningPayload;

/// The `fscrypt-provisioning` record type.
///
/// Records of this type can be added and described through the generic key
/// store, but their secret is only readable through
/// [`KeyProvisioner`](crate::KeyProvisioner).
#[derive(Debug, Default, Clone, Copy)]
pub struct ProvisioningRecordType;

impl ProvisioningRecordType {
    /// Registers the type with `registry`. The type stays available until the
    /// returned [`Registration`] is dropped.
    pub fn register(registry: &Arc<KeyTypeRegistry>) -> Result<Registration, KeyringError> {
        registry.register(Arc::new(Self))
    }
}

impl KeyType for ProvisioningRecordType {
    fn name(&self) -> &'static str {
        PROVISIONING_KEY_TYPE
    }

    fn validate_and_construct(&self, data: &[u8]) -> Result<Preparsed, KeyringError> {
        let payload = ProvisioningPayload::parse(data).map_err(|_| {
            tracing::debug!(len = data.len(), "rejected provisioning payload");
            KeyringError::InvalidPayload(PROVISIONING_KEY_TYPE)
        })?;

        Ok(Preparsed::new(payload, data.len()))
    }

    fn describe(&self, description: &str, payload: Option<&(dyn Any + Send + Sync)>) -> String {
        match payload.and_then(|p| p.downcast_ref::<ProvisioningPayload>()) {
            Some(p) => format!(
                "{}: {} [{}]",
                description,
                p.wire_len(),
                p.variant().wire_tag()
            ),
            None => description.to_owned(),
        }
    }

    fn destroy(&self, payload: Payload) {
        if let Ok(mut p) = payload.downcast::<ProvisioningPayload>() {
            p.zeroize();
        }
    }
}
