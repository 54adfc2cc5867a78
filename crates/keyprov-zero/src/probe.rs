// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroizing;

use crate::traits::ZeroizationProbe;

impl ZeroizationProbe for [u8] {
    fn is_zeroized(&self) -> bool {
        self.iter().fold(0u8, |acc, b| acc | b) == 0
    }
}

impl<const N: usize> ZeroizationProbe for [u8; N] {
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized()
    }
}

// Only the initialized region is probed; `zeroize()` on a Vec also wipes
// spare capacity and truncates, so an empty Vec counts as zeroized.
impl ZeroizationProbe for Vec<u8> {
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized()
    }
}

// `zeroize()` on a boxed slice overwrites in place and keeps the length.
impl ZeroizationProbe for Box<[u8]> {
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

impl<T> ZeroizationProbe for Zeroizing<T>
where
    T: zeroize::Zeroize + ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

impl ZeroizationProbe for u32 {
    fn is_zeroized(&self) -> bool {
        *self == 0
    }
}

impl ZeroizationProbe for usize {
    fn is_zeroized(&self) -> bool {
        *self == 0
    }
}
