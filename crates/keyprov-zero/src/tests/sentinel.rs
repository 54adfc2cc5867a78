// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::ZeroizeOnDropSentinel;

#[test]
fn test_sentinel_starts_pristine() {
    let sentinel = ZeroizeOnDropSentinel::default();
    assert!(!sentinel.is_zeroized());
}

#[test]
fn test_sentinel_zeroize_is_visible_through_clones() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    let observer = sentinel.clone();

    sentinel.zeroize();

    assert!(sentinel.is_zeroized());
    assert!(observer.is_zeroized());
}

#[test]
fn test_sentinel_reset() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    sentinel.zeroize();
    assert!(sentinel.is_zeroized());

    sentinel.reset();
    assert!(!sentinel.is_zeroized());
}

#[test]
fn test_sentinel_observer_outlives_owner() {
    let observer = {
        let mut owned = ZeroizeOnDropSentinel::default();
        let observer = owned.clone();
        owned.zeroize();
        observer
    };

    assert!(observer.is_zeroized());
}

#[test]
fn test_sentinel_eq_compares_state() {
    let mut a = ZeroizeOnDropSentinel::default();
    let b = ZeroizeOnDropSentinel::default();
    assert_eq!(a, b);

    a.zeroize();
    assert_ne!(a, b);
}
