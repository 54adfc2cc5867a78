// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::KeyringError;
use crate::key_type::KeyType;

/// Table of record types known to the key store.
///
/// Created once at process start and shared (via `Arc`) with every
/// [`Keyring`](crate::Keyring) that needs to construct records.
#[derive(Default)]
pub struct KeyTypeRegistry {
    types: RwLock<HashMap<&'static str, Arc<dyn KeyType>>>,
}

impl fmt::Debug for KeyTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&'static str> = match self.types.read() {
            Ok(types) => types.keys().copied().collect(),
            Err(_) => Vec::new(),
        };
        names.sort_unstable();

        f.debug_struct("KeyTypeRegistry")
            .field("types", &names)
            .finish()
    }
}

impl KeyTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers `key_type`. The type stays registered until the returned
    /// [`Registration`] is dropped.
    pub fn register(
        self: &Arc<Self>,
        key_type: Arc<dyn KeyType>,
    ) -> Result<Registration, KeyringError> {
        let name = key_type.name();
        let mut types = self.types.write().map_err(|_| KeyringError::MutexPoisoned)?;

        if types.contains_key(name) {
            return Err(KeyringError::DuplicateKeyType(name));
        }

        types.insert(name, key_type);
        tracing::info!(key_type = name, "registered key type");

        Ok(Registration {
            registry: Arc::clone(self),
            name,
        })
    }

    /// Returns the type registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn KeyType>, KeyringError> {
        let types = self.types.read().map_err(|_| KeyringError::MutexPoisoned)?;

        types
            .get(name)
            .cloned()
            .ok_or_else(|| KeyringError::UnknownKeyType(name.to_owned()))
    }

    /// Returns `true` if a type is registered under `name`.
    ///
    /// Answers from the table even if the lock was poisoned.
    pub fn is_registered(&self, name: &str) -> bool {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _types = self.types.write();
                panic!("type table poisoned");
            })
            .join()
        });
    }

    fn unregister(&self, name: &'static str) {
        match self.types.write() {
            Ok(mut types) => {
                types.remove(name);
                tracing::info!(key_type = name, "unregistered key type");
            }
            Err(_) => {
                tracing::warn!(key_type = name, "type table poisoned, cannot unregister");
            }
        }
    }
}

/// Keeps a record type registered; unregisters it on drop.
///
/// Records already created with the type keep working (they hold their own
/// reference to it); only new records of that type are refused.
#[must_use = "dropping the registration unregisters the key type"]
pub struct Registration {
    registry: Arc<KeyTypeRegistry>,
    name: &'static str,
}

impl Registration {
    /// Name of the registered type.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .finish()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.registry.unregister(self.name);
    }
}
