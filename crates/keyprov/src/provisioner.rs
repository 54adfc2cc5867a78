// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyprov_keyring::{Credentials, KeyPerm, KeyRef, KeySerial, Keyring};

use crate::error::ProvisionError;
use crate::payload::ProvisioningPayload;
use crate::record::ProvisioningRecordType;
use crate::secret::MasterKeySecret;
use crate::variant::KeySpecifierVariant;

/// Caller-supplied handle naming a record in the key store.
pub type ProvisioningReference = KeySerial;

/// Resolves provisioning references on behalf of one caller.
///
/// This is the only reader of a [`ProvisioningPayload`]'s secret bytes.
#[derive(Debug, Clone, Copy)]
pub struct KeyProvisioner<'a> {
    keyring: &'a Keyring,
    creds: Credentials,
}

impl<'a> KeyProvisioner<'a> {
    /// Creates a provisioner that looks records up in `keyring` as `creds`.
    pub fn new(keyring: &'a Keyring, creds: Credentials) -> Self {
        Self { keyring, creds }
    }

    /// Credentials lookups are made with.
    pub fn credentials(&self) -> &Credentials {
        &self.creds
    }

    /// Copies the secret held by `reference` into `out`.
    ///
    /// The record must be a provisioning key bound to `expected_variant` and
    /// the caller must hold Search permission on it. The reference taken for
    /// the lookup is released before returning, on every path. On error `out`
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// - [`ProvisionError::NotFound`] if `reference` names no record visible
    ///   to the caller
    /// - [`ProvisionError::PermissionDenied`] if the caller can see the
    ///   record but lacks Search permission
    /// - [`ProvisionError::TypeMismatch`] if the record has another type or
    ///   is bound to another variant
    pub fn resolve(
        &self,
        reference: ProvisioningReference,
        expected_variant: KeySpecifierVariant,
        out: &mut MasterKeySecret,
    ) -> Result<(), ProvisionError> {
        let key = self
            .keyring
            .lookup(&self.creds, reference, KeyPerm::SEARCH)?;

        let payload = provisioning_payload(&key).ok_or_else(|| {
            tracing::warn!(
                serial = %reference,
                key_type = key.type_name(),
                "refusing to provision from a non-provisioning key"
            );
            ProvisionError::TypeMismatch
        })?;

        if payload.variant() != expected_variant {
            tracing::warn!(
                serial = %reference,
                bound = %payload.variant(),
                expected = %expected_variant,
                "provisioning key bound to another variant"
            );
            return Err(ProvisionError::TypeMismatch);
        }

        out.fill(payload.raw())?;

        tracing::debug!(
            serial = %reference,
            variant = %expected_variant,
            size = out.size(),
            "master key provisioned from keyring"
        );

        Ok(())
    }
}

fn provisioning_payload(key: &KeyRef) -> Option<&ProvisioningPayload> {
    if !key.is_type::<ProvisioningRecordType>() {
        return None;
    }
    key.payload::<ProvisioningPayload>()
}
