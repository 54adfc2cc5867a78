// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Provisioning keys for filesystem encryption master secrets.
//!
//! A filesystem accepts a master key either inline, as raw bytes from the
//! caller, or by reference to a record already held in a [`Keyring`]. The
//! reference path lets a privileged process re-install a key after a remount
//! without ever holding the raw bytes itself.
//!
//! Two pieces make the reference path safe:
//!
//! - [`ProvisioningRecordType`]: the `fscrypt-provisioning` record type. Its
//!   payload (`{ variant: u32, reserved: u32, raw: [u8] }`) binds the secret
//!   to one [`KeySpecifierVariant`] and can only be consumed here.
//! - [`KeyProvisioner`]: resolves a [`KeySerial`] with Search permission,
//!   rejects any record that is not a provisioning key for the expected
//!   variant, and copies the secret into a [`MasterKeySecret`].
//!
//! [`add_master_key_secret`] is the entry point that picks between the inline
//! and reference paths.
//!
//! # Example
//!
//! ```rust
//! use keyprov::{
//!     KeyProvisioner, KeySpecifierVariant, MasterKeySecret, PROVISIONING_KEY_TYPE,
//!     ProvisioningPayload, ProvisioningRecordType,
//! };
//! use keyprov_keyring::{Credentials, KeyTypeRegistry, Keyring};
//!
//! # fn example() -> Result<(), keyprov::ProvisionError> {
//! let registry = KeyTypeRegistry::new();
//! let _registration = ProvisioningRecordType::register(&registry)?;
//! let keyring = Keyring::new(registry.clone());
//! let root = Credentials::root();
//!
//! let wire = ProvisioningPayload::encode(KeySpecifierVariant::Identifier, &[0xAB; 32])?;
//! let serial = keyring.add_key(&root, PROVISIONING_KEY_TYPE, "fscrypt:disk0", &wire)?;
//!
//! let mut secret = MasterKeySecret::default();
//! KeyProvisioner::new(&keyring, root).resolve(
//!     serial,
//!     KeySpecifierVariant::Identifier,
//!     &mut secret,
//! )?;
//!
//! assert_eq!(secret.size(), 32);
//! assert!(secret.as_bytes().iter().all(|&b| b == 0xAB));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`Keyring`]: keyprov_keyring::Keyring
//! [`KeySerial`]: keyprov_keyring::KeySerial

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod add_key;
mod consts;
mod error;
mod payload;
mod provisioner;
mod record;
mod secret;
mod variant;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use add_key::{AddKeyArg, KeySpecifier, add_master_key_secret};
pub use consts::{
    KEY_DESCRIPTOR_SIZE, KEY_IDENTIFIER_SIZE, KEY_SPECIFIER_SIZE, MAX_KEY_SIZE, MIN_KEY_SIZE,
    PAYLOAD_HEADER_SIZE, PROVISIONING_KEY_TYPE,
};
pub use error::ProvisionError;
pub use payload::ProvisioningPayload;
pub use provisioner::{KeyProvisioner, ProvisioningReference};
pub use record::ProvisioningRecordType;
pub use secret::MasterKeySecret;
pub use variant::KeySpecifierVariant;
