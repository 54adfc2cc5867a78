// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{DEFAULT_MAX_BYTES, DEFAULT_MAX_KEYS};

/// Quotas applied by a [`Keyring`](crate::Keyring).
///
/// ```rust
/// use keyprov_keyring::KeyringConfig;
///
/// let config = KeyringConfig::default().with_max_keys(16).with_max_bytes(4096);
/// assert_eq!(config.max_keys(), 16);
/// assert_eq!(config.max_bytes(), 4096);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyringConfig {
    max_keys: usize,
    max_bytes: usize,
}

impl KeyringConfig {
    /// Sets the maximum number of live records.
    pub fn with_max_keys(mut self, max_keys: usize) -> Self {
        self.max_keys = max_keys;
        self
    }

    /// Sets the maximum summed quota charge of live records.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Maximum number of live records.
    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    /// Maximum summed quota charge of live records.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            max_keys: DEFAULT_MAX_KEYS,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}
