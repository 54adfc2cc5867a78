// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::KeyringConfig;
use crate::error::KeyringError;
use crate::perm::{Credentials, KeyPerm, KeyPermissions};
use crate::record::{KeyRecord, KeyRef};
use crate::registry::KeyTypeRegistry;
use crate::serial::KeySerial;

struct Entry {
    record: Arc<KeyRecord>,
    owner: u32,
    perm: KeyPermissions,
}

impl Entry {
    /// Checks `need` for `creds` and returns everything `creds` holds. A
    /// caller that holds neither `need` nor VIEW cannot tell the record
    /// exists.
    fn check(&self, creds: &Credentials, need: KeyPerm) -> Result<KeyPerm, KeyringError> {
        let granted = self.perm.for_caller(self.owner, creds);

        if granted.contains(need) {
            Ok(granted)
        } else if granted.contains(KeyPerm::VIEW) {
            Err(KeyringError::PermissionDenied)
        } else {
            Err(KeyringError::NotFound)
        }
    }
}

struct KeyTable {
    next_serial: i32,
    entries: HashMap<KeySerial, Entry>,
    bytes_used: usize,
}

/// A store of typed records addressed by [`KeySerial`].
///
/// The record table is guarded by one mutex that is held only while an
/// entry is inserted, removed or cloned out; payload construction and
/// destruction and everything a caller does through a [`KeyRef`] happen
/// outside of it.
pub struct Keyring {
    registry: Arc<KeyTypeRegistry>,
    config: KeyringConfig,
    table: Mutex<KeyTable>,
}

impl fmt::Debug for Keyring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyring")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Keyring {
    /// Creates an empty keyring with default quotas.
    pub fn new(registry: Arc<KeyTypeRegistry>) -> Self {
        Self::with_config(registry, KeyringConfig::default())
    }

    /// Creates an empty keyring with the given quotas.
    pub fn with_config(registry: Arc<KeyTypeRegistry>, config: KeyringConfig) -> Self {
        Self {
            registry,
            config,
            table: Mutex::new(KeyTable {
                next_serial: 1,
                entries: HashMap::new(),
                bytes_used: 0,
            }),
        }
    }

    /// Quotas in effect.
    pub fn config(&self) -> &KeyringConfig {
        &self.config
    }

    fn lock(&self) -> Result<MutexGuard<'_, KeyTable>, KeyringError> {
        self.table.lock().map_err(|_| KeyringError::MutexPoisoned)
    }

    /// Creates a record of type `type_name` owned by `creds`, with default
    /// permissions.
    ///
    /// `data` is handed to the type's constructor, which validates it and
    /// keeps its own copy; nothing here retains `data`.
    pub fn add_key(
        &self,
        creds: &Credentials,
        type_name: &str,
        description: &str,
        data: &[u8],
    ) -> Result<KeySerial, KeyringError> {
        self.add_key_with_perm(creds, type_name, description, data, KeyPermissions::default())
    }

    /// Like [`add_key`](Self::add_key) with explicit permissions.
    pub fn add_key_with_perm(
        &self,
        creds: &Credentials,
        type_name: &str,
        description: &str,
        data: &[u8],
        perm: KeyPermissions,
    ) -> Result<KeySerial, KeyringError> {
        let key_type = self.registry.get(type_name)?;
        let preparsed = key_type.validate_and_construct(data).inspect_err(|_| {
            tracing::debug!(key_type = type_name, "key type rejected payload");
        })?;

        let mut table = match self.lock() {
            Ok(table) => table,
            Err(e) => {
                key_type.destroy(preparsed.payload);
                return Err(e);
            }
        };
        let serial = KeySerial::new(table.next_serial);
        let next_serial = table.next_serial.checked_add(1);
        let bytes_after = table.bytes_used.saturating_add(preparsed.quota_len());
        let over_quota = table.entries.len() >= self.config.max_keys()
            || bytes_after > self.config.max_bytes();

        let (Some(serial), Some(next_serial), false) = (serial, next_serial, over_quota) else {
            drop(table);
            tracing::debug!(key_type = type_name, "key quota exceeded");
            // A refused payload still goes through the type's destroy.
            key_type.destroy(preparsed.payload);
            return Err(KeyringError::QuotaExceeded);
        };

        let record = Arc::new(KeyRecord::new(
            serial,
            key_type,
            description,
            preparsed.payload,
            preparsed.quota_len,
        ));

        table.next_serial = next_serial;
        table.bytes_used = bytes_after;
        table.entries.insert(
            serial,
            Entry {
                record,
                owner: creds.uid(),
                perm,
            },
        );

        tracing::debug!(%serial, key_type = type_name, "added key");

        Ok(serial)
    }

    /// Resolves `serial` to a counted reference, requiring `need` on the
    /// record. An empty `need` is treated as VIEW.
    ///
    /// The payload is only reachable through the returned [`KeyRef`] when
    /// the caller holds READ or SEARCH.
    ///
    /// # Errors
    ///
    /// - [`KeyringError::NotFound`] if no such record exists or the caller
    ///   can neither use nor view it
    /// - [`KeyringError::PermissionDenied`] if the caller can view the record
    ///   but lacks `need`
    pub fn lookup(
        &self,
        creds: &Credentials,
        serial: KeySerial,
        need: KeyPerm,
    ) -> Result<KeyRef, KeyringError> {
        let table = self.lock()?;
        let entry = table.entries.get(&serial).ok_or_else(|| {
            tracing::debug!(%serial, "key lookup: not found");
            KeyringError::NotFound
        })?;

        let need = if need.is_empty() { KeyPerm::VIEW } else { need };
        let granted = entry.check(creds, need).inspect_err(|e| {
            tracing::debug!(%serial, uid = creds.uid(), error = %e, "key lookup refused");
        })?;

        Ok(KeyRef::new(Arc::clone(&entry.record), granted))
    }

    /// Removes `serial` from the keyring. Requires WRITE.
    ///
    /// The record is destroyed once every outstanding [`KeyRef`] is gone.
    pub fn revoke(&self, creds: &Credentials, serial: KeySerial) -> Result<(), KeyringError> {
        let mut table = self.lock()?;
        let entry = table.entries.get(&serial).ok_or(KeyringError::NotFound)?;
        entry.check(creds, KeyPerm::WRITE)?;

        let removed = table.entries.remove(&serial);
        if let Some(entry) = &removed {
            table.bytes_used = table.bytes_used.saturating_sub(entry.record.quota_len());
        }
        drop(table);

        tracing::debug!(%serial, "revoked key");

        // Dropped outside the table lock: the type's destroy may run here.
        drop(removed);

        Ok(())
    }

    /// Replaces the permissions of `serial`. Only the owner may do this, and
    /// only while holding SETATTR.
    pub fn set_perm(
        &self,
        creds: &Credentials,
        serial: KeySerial,
        perm: KeyPermissions,
    ) -> Result<(), KeyringError> {
        let mut table = self.lock()?;
        let entry = table
            .entries
            .get_mut(&serial)
            .ok_or(KeyringError::NotFound)?;

        entry.check(creds, KeyPerm::SETATTR)?;
        if entry.owner != creds.uid() {
            return Err(KeyringError::PermissionDenied);
        }

        entry.perm = perm;

        Ok(())
    }

    /// Description of `serial` as rendered by its type. Requires VIEW.
    pub fn describe(&self, creds: &Credentials, serial: KeySerial) -> Result<String, KeyringError> {
        let key = self.lookup(creds, serial, KeyPerm::VIEW)?;
        Ok(key.describe())
    }

    // The read-only accessors below see through a poisoned lock. Everything
    // else reports MutexPoisoned.
    fn read_table(&self) -> MutexGuard<'_, KeyTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live references to `serial`, the keyring's own included.
    /// `None` if the keyring holds no such record.
    pub fn usage(&self, serial: KeySerial) -> Option<usize> {
        self.read_table()
            .entries
            .get(&serial)
            .map(|entry| Arc::strong_count(&entry.record))
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.read_table().entries.len()
    }

    /// Returns `true` if the keyring holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Summed quota charge of the records currently held.
    pub fn bytes_used(&self) -> usize {
        self.read_table().bytes_used
    }

    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _table = self.table.lock();
                panic!("keyring table poisoned");
            })
            .join()
        });
    }
}
