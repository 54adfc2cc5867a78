// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyring fixtures and raw payload builders.

use std::sync::Arc;

use keyprov_keyring::{
    Credentials, KeyPermissions, KeySerial, KeyTypeRegistry, Keyring, KeyringConfig, Registration,
    USER_KEY_TYPE, UserKeyType,
};

use crate::consts::PROVISIONING_KEY_TYPE;
use crate::payload::ProvisioningPayload;
use crate::provisioner::KeyProvisioner;
use crate::record::ProvisioningRecordType;
use crate::variant::KeySpecifierVariant;

/// Keyring with the provisioning and `user` types registered.
pub struct ProvisioningFixture {
    /// Registry both types are registered with.
    pub registry: Arc<KeyTypeRegistry>,
    /// Keyring under test.
    pub keyring: Keyring,
    /// Owner of every key the fixture adds (uid 1000).
    pub owner: Credentials,
    _registrations: Vec<Registration>,
}

impl ProvisioningFixture {
    /// Fixture with the default quotas.
    pub fn new() -> Self {
        Self::with_config(KeyringConfig::default())
    }

    /// Fixture with custom quotas.
    pub fn with_config(config: KeyringConfig) -> Self {
        let registry = KeyTypeRegistry::new();
        let registrations = vec![
            ProvisioningRecordType::register(&registry)
                .expect("Failed to register provisioning type"),
            UserKeyType::register(&registry).expect("Failed to register user type"),
        ];
        let keyring = Keyring::with_config(Arc::clone(&registry), config);

        Self {
            registry,
            keyring,
            owner: Credentials::new(1000),
            _registrations: registrations,
        }
    }

    /// Provisioner acting as `self.owner`.
    pub fn provisioner(&self) -> KeyProvisioner<'_> {
        KeyProvisioner::new(&self.keyring, self.owner)
    }

    /// Provisioner acting as `creds`.
    pub fn provisioner_for(&self, creds: Credentials) -> KeyProvisioner<'_> {
        KeyProvisioner::new(&self.keyring, creds)
    }

    /// Adds a provisioning record owned by `self.owner`.
    pub fn add_provisioning_key(&self, variant: KeySpecifierVariant, raw: &[u8]) -> KeySerial {
        self.add_provisioning_key_with_perm(variant, raw, KeyPermissions::default())
    }

    /// Adds a provisioning record with explicit permissions.
    pub fn add_provisioning_key_with_perm(
        &self,
        variant: KeySpecifierVariant,
        raw: &[u8],
        perm: KeyPermissions,
    ) -> KeySerial {
        let wire = ProvisioningPayload::encode(variant, raw).expect("Failed to encode payload");
        self.keyring
            .add_key_with_perm(&self.owner, PROVISIONING_KEY_TYPE, "fscrypt:test", &wire, perm)
            .expect("Failed to add provisioning key")
    }

    /// Adds a generic `user` record owned by `self.owner`.
    pub fn add_user_key(&self, data: &[u8]) -> KeySerial {
        self.keyring
            .add_key(&self.owner, USER_KEY_TYPE, "user:test", data)
            .expect("Failed to add user key")
    }
}

impl Default for ProvisioningFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw payload bytes with arbitrary header words, for malformed inputs.
pub fn payload_bytes(variant_tag: u32, reserved: u32, raw: &[u8]) -> Vec<u8> {
    let mut wire = Vec::with_capacity(8 + raw.len());
    wire.extend_from_slice(&variant_tag.to_ne_bytes());
    wire.extend_from_slice(&reserved.to_ne_bytes());
    wire.extend_from_slice(raw);
    wire
}
