// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use zeroize::Zeroize;

/// Shared flag recording whether its owner ran `zeroize()`.
///
/// A fresh sentinel is pristine. Calling [`Zeroize::zeroize`] marks it (and
/// every clone) as zeroized. Types embed one as a `__sentinel` field and wipe
/// it last in their own `zeroize()`; a test keeps a clone and checks it once
/// the owner has been dropped or destroyed.
///
/// ```rust
/// use keyprov_zero::{Zeroize, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl ZeroizeOnDropSentinel {
    /// Resets the sentinel (and all clones) to the pristine state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `zeroize()` has been called on any clone.
    pub fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is_zeroized() == other.is_zeroized()
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl Zeroize for ZeroizeOnDropSentinel {
    fn zeroize(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
