// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wire format and owned form of a provisioning record payload.
//!
//! ```text
//! offset 0  u32  variant   (1 = descriptor, 2 = identifier)
//! offset 4  u32  reserved  (must be 0)
//! offset 8  [u8] raw       (MIN_KEY_SIZE..=MAX_KEY_SIZE bytes)
//! ```
//!
//! Header words use host byte order, the same as the add-key argument.

use core::fmt;

use keyprov_zero::{
    AssertZeroizeOnDrop, Zeroize, ZeroizationProbe, ZeroizeOnDropSentinel, Zeroizing,
    assert_zeroize_on_drop,
};

use crate::consts::{MAX_KEY_SIZE, MIN_KEY_SIZE, PAYLOAD_HEADER_SIZE};
use crate::error::ProvisionError;
use crate::variant::KeySpecifierVariant;

/// Validated, owned provisioning payload.
///
/// The raw secret is overwritten in place when the payload is dropped; its
/// length is kept so the wiped bytes stay observable. It is only readable
/// from inside this crate, by the provisioner.
pub struct ProvisioningPayload {
    variant: KeySpecifierVariant,
    raw: Box<[u8]>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl ProvisioningPayload {
    /// Validates `data` and copies it into an owned payload.
    ///
    /// Checks run in order: total length, variant tag, reserved word. No copy
    /// of `data` is made unless all of them pass.
    ///
    /// # Errors
    ///
    /// [`ProvisionError::InvalidFormat`] if `data` is shorter than the header
    /// plus [`MIN_KEY_SIZE`], longer than the header plus [`MAX_KEY_SIZE`],
    /// carries an unknown variant tag, or has a non-zero reserved word.
    pub fn parse(data: &[u8]) -> Result<Self, ProvisionError> {
        let len = data.len();
        if len < PAYLOAD_HEADER_SIZE + MIN_KEY_SIZE || len > PAYLOAD_HEADER_SIZE + MAX_KEY_SIZE {
            return Err(ProvisionError::InvalidFormat);
        }

        let variant =
            KeySpecifierVariant::from_wire(read_u32(data, 0)).ok_or(ProvisionError::InvalidFormat)?;

        if read_u32(data, 4) != 0 {
            return Err(ProvisionError::InvalidFormat);
        }

        Ok(Self {
            variant,
            raw: Box::from(&data[PAYLOAD_HEADER_SIZE..]),
            __sentinel: ZeroizeOnDropSentinel::default(),
        })
    }

    /// Builds the wire form of a payload binding `raw` to `variant`.
    ///
    /// # Errors
    ///
    /// [`ProvisionError::InvalidFormat`] if `raw` is outside
    /// [`MIN_KEY_SIZE`]..=[`MAX_KEY_SIZE`].
    pub fn encode(
        variant: KeySpecifierVariant,
        raw: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, ProvisionError> {
        if !(MIN_KEY_SIZE..=MAX_KEY_SIZE).contains(&raw.len()) {
            return Err(ProvisionError::InvalidFormat);
        }

        let mut wire = Zeroizing::new(Vec::with_capacity(PAYLOAD_HEADER_SIZE + raw.len()));
        wire.extend_from_slice(&variant.wire_tag().to_ne_bytes());
        wire.extend_from_slice(&0u32.to_ne_bytes());
        wire.extend_from_slice(raw);

        Ok(wire)
    }

    /// Variant the secret is bound to.
    #[inline]
    pub fn variant(&self) -> KeySpecifierVariant {
        self.variant
    }

    /// Length of the raw secret.
    #[inline]
    pub fn secret_len(&self) -> usize {
        self.raw.len()
    }

    /// Length of the payload on the wire, header included.
    #[inline]
    pub fn wire_len(&self) -> usize {
        PAYLOAD_HEADER_SIZE + self.raw.len()
    }

    #[inline]
    pub(crate) fn raw(&self) -> &[u8] {
        &self.raw
    }
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);
    u32::from_ne_bytes(word)
}

impl Zeroize for ProvisioningPayload {
    fn zeroize(&mut self) {
        self.raw.zeroize();
        self.__sentinel.zeroize();
    }
}

impl Drop for ProvisioningPayload {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizationProbe for ProvisioningPayload {
    fn is_zeroized(&self) -> bool {
        self.raw.is_zeroized()
    }
}

impl AssertZeroizeOnDrop for ProvisioningPayload {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl fmt::Debug for ProvisioningPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisioningPayload")
            .field("variant", &self.variant)
            .field("secret_len", &self.raw.len())
            .finish_non_exhaustive()
    }
}
