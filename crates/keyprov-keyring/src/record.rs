// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Records and scoped references to them.

use core::fmt;
use std::any::{Any, TypeId};
use std::ops::Deref;
use std::sync::Arc;

use crate::key_type::{KeyType, Payload};
use crate::perm::KeyPerm;
use crate::serial::KeySerial;

/// One typed, payload-bearing entry of a [`Keyring`](crate::Keyring).
///
/// A record is immutable after construction. Its payload is handed back to
/// the owning [`KeyType::destroy`] exactly once, when the last reference to
/// the record goes away.
pub struct KeyRecord {
    serial: KeySerial,
    key_type: Arc<dyn KeyType>,
    description: String,
    payload: Option<Payload>,
    quota_len: usize,
}

impl KeyRecord {
    pub(crate) fn new(
        serial: KeySerial,
        key_type: Arc<dyn KeyType>,
        description: &str,
        payload: Payload,
        quota_len: usize,
    ) -> Self {
        Self {
            serial,
            key_type,
            description: description.to_owned(),
            payload: Some(payload),
            quota_len,
        }
    }

    /// Serial of the record.
    pub fn serial(&self) -> KeySerial {
        self.serial
    }

    /// Name of the record's type.
    pub fn type_name(&self) -> &'static str {
        self.key_type.name()
    }

    /// Returns `true` if the record was constructed by an instance of `T`.
    ///
    /// Compares the concrete type, not the registered name.
    pub fn is_type<T: KeyType>(&self) -> bool {
        (*self.key_type).type_id() == TypeId::of::<T>()
    }

    /// Caller-chosen description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Bytes this record is charged against the keyring quota.
    pub fn quota_len(&self) -> usize {
        self.quota_len
    }

    pub(crate) fn payload<P: Any>(&self) -> Option<&P> {
        self.payload.as_deref().and_then(|p| p.downcast_ref::<P>())
    }

    /// Description as rendered by the record's type.
    pub fn describe(&self) -> String {
        self.key_type
            .describe(&self.description, self.payload.as_deref())
    }
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRecord")
            .field("serial", &self.serial)
            .field("type", &self.key_type.name())
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Drop for KeyRecord {
    fn drop(&mut self) {
        if let Some(payload) = self.payload.take() {
            tracing::debug!(
                serial = %self.serial,
                key_type = self.key_type.name(),
                "destroying key"
            );
            self.key_type.destroy(payload);
        }
    }
}

/// Counted reference to a record, obtained from
/// [`Keyring::lookup`](crate::Keyring::lookup).
///
/// The reference is released when this value is dropped, on every exit path
/// of the holder. While it is held, the record stays readable even if it is
/// revoked concurrently.
pub struct KeyRef {
    record: Arc<KeyRecord>,
    granted: KeyPerm,
}

impl KeyRef {
    pub(crate) fn new(record: Arc<KeyRecord>, granted: KeyPerm) -> Self {
        Self { record, granted }
    }

    /// Permissions the holder had on the record when it was looked up.
    pub fn granted(&self) -> KeyPerm {
        self.granted
    }

    /// Borrows the payload as `P`.
    ///
    /// Requires READ or SEARCH to have been granted at lookup. Returns `None`
    /// otherwise, when the record holds no material, or when its payload is
    /// of another type.
    pub fn payload<P: Any>(&self) -> Option<&P> {
        if !self.granted.intersects(KeyPerm::READ | KeyPerm::SEARCH) {
            return None;
        }
        self.record.payload::<P>()
    }

    /// Number of live references to the record, this one included.
    pub fn usage(&self) -> usize {
        Arc::strong_count(&self.record)
    }
}

impl Deref for KeyRef {
    type Target = KeyRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

impl fmt::Debug for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyRef").field(&*self.record).finish()
    }
}

impl Drop for KeyRef {
    fn drop(&mut self) {
        tracing::trace!(serial = %self.record.serial, "released key reference");
    }
}
