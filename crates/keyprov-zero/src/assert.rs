// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helpers for verifying zeroization behavior.

use crate::traits::AssertZeroizeOnDrop;

/// Asserts that `value` zeroizes itself when dropped.
///
/// 1. Clones the value's sentinel
/// 2. Resets it to pristine
/// 3. Drops the value
/// 4. Asserts the sentinel was zeroized
///
/// # Panics
///
/// Panics if dropping `value` did not run its `zeroize()`.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_zeroized());
    drop(value);
    assert!(sentinel.is_zeroized());
}
