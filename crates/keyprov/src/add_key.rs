// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Add-key entry point: obtains a master key inline or by reference.

use core::fmt;

use keyprov_keyring::KeySerial;
use keyprov_zero::{Zeroize, Zeroizing};

use crate::consts::{ADD_KEY_RESERVED_WORDS, KEY_SPECIFIER_SIZE, MAX_KEY_SIZE, MIN_KEY_SIZE};
use crate::error::ProvisionError;
use crate::provisioner::KeyProvisioner;
use crate::secret::MasterKeySecret;
use crate::variant::KeySpecifierVariant;

/// Names the master key being added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySpecifier {
    /// Wire variant tag.
    pub kind: u32,
    /// Must be zero.
    pub reserved: u32,
    /// Descriptor or identifier bytes, zero-padded.
    pub bytes: [u8; KEY_SPECIFIER_SIZE],
}

impl KeySpecifier {
    /// Specifier for a descriptor-style key.
    pub fn descriptor(descriptor: [u8; 8]) -> Self {
        let mut bytes = [0u8; KEY_SPECIFIER_SIZE];
        bytes[..descriptor.len()].copy_from_slice(&descriptor);
        Self {
            kind: KeySpecifierVariant::Descriptor.wire_tag(),
            reserved: 0,
            bytes,
        }
    }

    /// Specifier for an identifier-style key. The identifier is filled in
    /// once the key is installed, so the bytes start zeroed.
    pub fn identifier() -> Self {
        Self {
            kind: KeySpecifierVariant::Identifier.wire_tag(),
            reserved: 0,
            bytes: [0u8; KEY_SPECIFIER_SIZE],
        }
    }

    /// Decodes the variant, checking the reserved word.
    ///
    /// # Errors
    ///
    /// [`ProvisionError::InvalidArgument`] if `kind` is unknown or `reserved`
    /// is non-zero.
    pub fn variant(&self) -> Result<KeySpecifierVariant, ProvisionError> {
        if self.reserved != 0 {
            return Err(ProvisionError::InvalidArgument);
        }
        KeySpecifierVariant::from_wire(self.kind).ok_or(ProvisionError::InvalidArgument)
    }
}

/// Argument of the add-key operation.
///
/// `key_id == 0` selects the inline path: `raw` holds exactly `raw_size`
/// bytes of key material. Any other `key_id` names a provisioning record and
/// requires `raw_size == 0` with no inline bytes.
pub struct AddKeyArg {
    /// Which key is being added.
    pub key_spec: KeySpecifier,
    /// Declared length of the inline key.
    pub raw_size: u32,
    /// Serial of a provisioning record, or 0.
    pub key_id: i32,
    /// Must be all zero.
    pub reserved: [u32; ADD_KEY_RESERVED_WORDS],
    /// Inline key bytes.
    pub raw: Zeroizing<Vec<u8>>,
}

impl AddKeyArg {
    /// Argument carrying `raw` inline.
    pub fn inline(key_spec: KeySpecifier, raw: &[u8]) -> Self {
        Self {
            key_spec,
            raw_size: u32::try_from(raw.len()).unwrap_or(u32::MAX),
            key_id: 0,
            reserved: [0; ADD_KEY_RESERVED_WORDS],
            raw: Zeroizing::new(raw.to_vec()),
        }
    }

    /// Argument referring to the provisioning record `key_id`.
    pub fn by_reference(key_spec: KeySpecifier, key_id: KeySerial) -> Self {
        Self {
            key_spec,
            raw_size: 0,
            key_id: key_id.get(),
            reserved: [0; ADD_KEY_RESERVED_WORDS],
            raw: Zeroizing::new(Vec::new()),
        }
    }
}

impl fmt::Debug for AddKeyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddKeyArg")
            .field("key_spec", &self.key_spec)
            .field("raw_size", &self.raw_size)
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

/// Fills `secret` from `arg`, either from the inline bytes or by resolving
/// `arg.key_id` through `provisioner`. Returns the variant of the key being
/// added.
///
/// On any error `secret` is zeroized before returning.
///
/// # Errors
///
/// - [`ProvisionError::InvalidArgument`] if the specifier or reserved words
///   are malformed, if a reference is combined with inline bytes, or if the
///   inline key is not [`MIN_KEY_SIZE`]..=[`MAX_KEY_SIZE`] bytes long
/// - any error of [`KeyProvisioner::resolve`] on the reference path
pub fn add_master_key_secret(
    provisioner: &KeyProvisioner<'_>,
    arg: &AddKeyArg,
    secret: &mut MasterKeySecret,
) -> Result<KeySpecifierVariant, ProvisionError> {
    fill_secret(provisioner, arg, secret).inspect_err(|e| {
        secret.zeroize();
        tracing::debug!(key_id = arg.key_id, error = %e, "add key refused");
    })
}

fn fill_secret(
    provisioner: &KeyProvisioner<'_>,
    arg: &AddKeyArg,
    secret: &mut MasterKeySecret,
) -> Result<KeySpecifierVariant, ProvisionError> {
    let variant = arg.key_spec.variant()?;

    if arg.reserved.iter().any(|&w| w != 0) {
        return Err(ProvisionError::InvalidArgument);
    }

    match KeySerial::new(arg.key_id) {
        Some(reference) => {
            if arg.raw_size != 0 || !arg.raw.is_empty() {
                return Err(ProvisionError::InvalidArgument);
            }
            provisioner.resolve(reference, variant, secret)?;
        }
        None => {
            let size = arg.raw_size as usize;
            if !(MIN_KEY_SIZE..=MAX_KEY_SIZE).contains(&size) || arg.raw.len() != size {
                return Err(ProvisionError::InvalidArgument);
            }
            secret.fill(&arg.raw)?;
            tracing::debug!(%variant, size, "master key supplied inline");
        }
    }

    Ok(variant)
}
