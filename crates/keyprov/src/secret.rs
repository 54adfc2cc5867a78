// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use keyprov_zero::{
    AssertZeroizeOnDrop, Zeroize, ZeroizationProbe, ZeroizeOnDropSentinel, assert_zeroize_on_drop,
};

use crate::consts::MAX_KEY_SIZE;
use crate::error::ProvisionError;

/// Fixed-capacity buffer receiving a filesystem master key.
///
/// Only the first [`size`](Self::size) bytes are meaningful. The whole
/// buffer is overwritten on drop.
pub struct MasterKeySecret {
    raw: [u8; MAX_KEY_SIZE],
    size: usize,
    __sentinel: ZeroizeOnDropSentinel,
}

impl Default for MasterKeySecret {
    fn default() -> Self {
        Self {
            raw: [0u8; MAX_KEY_SIZE],
            size: 0,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl MasterKeySecret {
    /// Number of meaningful bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if no secret has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The secret bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw[..self.size]
    }

    /// Replaces the contents with `bytes`. Nothing is written when `bytes`
    /// does not fit.
    pub(crate) fn fill(&mut self, bytes: &[u8]) -> Result<(), ProvisionError> {
        if bytes.len() > MAX_KEY_SIZE {
            return Err(ProvisionError::InvalidArgument);
        }

        self.raw[..bytes.len()].copy_from_slice(bytes);
        self.raw[bytes.len()..].zeroize();
        self.size = bytes.len();

        Ok(())
    }
}

impl Zeroize for MasterKeySecret {
    fn zeroize(&mut self) {
        self.raw.zeroize();
        self.size.zeroize();
        self.__sentinel.zeroize();
    }
}

impl Drop for MasterKeySecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizationProbe for MasterKeySecret {
    fn is_zeroized(&self) -> bool {
        self.raw.is_zeroized() && self.size == 0
    }
}

impl AssertZeroizeOnDrop for MasterKeySecret {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl fmt::Debug for MasterKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED MasterKeySecret]")
    }
}
