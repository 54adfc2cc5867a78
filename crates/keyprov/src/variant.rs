// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::consts::{
    KEY_DESCRIPTOR_SIZE, KEY_IDENTIFIER_SIZE, KEY_SPEC_TYPE_DESCRIPTOR, KEY_SPEC_TYPE_IDENTIFIER,
};

/// Key-derivation scheme a master key is used with.
///
/// A provisioned secret is bound to exactly one variant and is refused for
/// the other, even though its raw bytes would be usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum KeySpecifierVariant {
    /// Keys named by an 8-byte descriptor chosen by the caller.
    Descriptor = KEY_SPEC_TYPE_DESCRIPTOR,
    /// Keys named by a 16-byte identifier derived from the key itself.
    Identifier = KEY_SPEC_TYPE_IDENTIFIER,
}

impl KeySpecifierVariant {
    /// Decodes a wire tag. Unknown tags yield `None`.
    pub fn from_wire(tag: u32) -> Option<Self> {
        match tag {
            KEY_SPEC_TYPE_DESCRIPTOR => Some(Self::Descriptor),
            KEY_SPEC_TYPE_IDENTIFIER => Some(Self::Identifier),
            _ => None,
        }
    }

    /// Wire tag of the variant.
    #[inline]
    pub fn wire_tag(self) -> u32 {
        self as u32
    }

    /// Number of significant bytes in a key specifier of this variant.
    pub fn specifier_len(self) -> usize {
        match self {
            Self::Descriptor => KEY_DESCRIPTOR_SIZE,
            Self::Identifier => KEY_IDENTIFIER_SIZE,
        }
    }
}

impl fmt::Display for KeySpecifierVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descriptor => f.write_str("descriptor"),
            Self::Identifier => f.write_str("identifier"),
        }
    }
}
