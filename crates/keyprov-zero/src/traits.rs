// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Verification traits.

use crate::sentinel::ZeroizeOnDropSentinel;

/// Runtime check that a value no longer holds any non-zero byte.
///
/// # Example
///
/// ```rust
/// use keyprov_zero::{Zeroize, ZeroizationProbe};
///
/// let mut key = [0x5Au8; 32];
/// assert!(!key.is_zeroized());
///
/// key.zeroize();
/// assert!(key.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every byte of the value is zero.
    fn is_zeroized(&self) -> bool;
}

/// Types carrying a [`ZeroizeOnDropSentinel`] that can prove they wipe
/// themselves on drop.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal sentinel so it can be observed after drop.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Drops `self` and asserts that zeroization ran during drop.
    ///
    /// # Panics
    ///
    /// Panics if the sentinel was not zeroized by the drop.
    fn assert_zeroize_on_drop(self);
}
