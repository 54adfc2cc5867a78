// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Name the provisioning record type is registered under.
pub const PROVISIONING_KEY_TYPE: &str = "fscrypt-provisioning";

/// Smallest accepted master key, in bytes.
pub const MIN_KEY_SIZE: usize = 16;

/// Largest accepted master key, in bytes.
pub const MAX_KEY_SIZE: usize = 64;

/// `variant: u32` + `reserved: u32`.
pub const PAYLOAD_HEADER_SIZE: usize = 8;

/// Width of a descriptor-style key specifier.
pub const KEY_DESCRIPTOR_SIZE: usize = 8;

/// Width of an identifier-style key specifier.
pub const KEY_IDENTIFIER_SIZE: usize = 16;

/// Size of the key specifier union on the wire.
pub const KEY_SPECIFIER_SIZE: usize = 32;

pub(crate) const KEY_SPEC_TYPE_DESCRIPTOR: u32 = 1;
pub(crate) const KEY_SPEC_TYPE_IDENTIFIER: u32 = 2;

/// Reserved words in the add-key argument.
pub(crate) const ADD_KEY_RESERVED_WORDS: usize = 8;

// Linux errno values reported to callers.
pub(crate) const EIO: i32 = 5;
pub(crate) const EACCES: i32 = 13;
pub(crate) const EEXIST: i32 = 17;
pub(crate) const ENODEV: i32 = 19;
pub(crate) const EINVAL: i32 = 22;
pub(crate) const EDQUOT: i32 = 122;
pub(crate) const ENOKEY: i32 = 126;
pub(crate) const EKEYREJECTED: i32 = 129;
