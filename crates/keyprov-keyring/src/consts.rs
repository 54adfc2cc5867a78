// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Name of the generic, unrestricted record type.
pub const USER_KEY_TYPE: &str = "user";

/// Largest payload accepted by the `user` record type.
pub const USER_KEY_MAX_SIZE: usize = 32767;

/// Default cap on the number of live records in one [`Keyring`](crate::Keyring).
pub const DEFAULT_MAX_KEYS: usize = 1_000_000;

/// Default cap on the summed quota charge of live records.
pub const DEFAULT_MAX_BYTES: usize = 25_000_000;
