// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::num::NonZeroI32;

/// Opaque handle naming a record in a [`Keyring`](crate::Keyring).
///
/// Serials are never zero: zero is reserved by callers to mean "no key".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeySerial(NonZeroI32);

impl KeySerial {
    /// Wraps a raw serial, returning `None` for zero.
    pub fn new(raw: i32) -> Option<Self> {
        NonZeroI32::new(raw).map(Self)
    }

    /// Returns the raw serial.
    #[inline]
    pub fn get(self) -> i32 {
        self.0.get()
    }
}

impl fmt::Display for KeySerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0.get())
    }
}
