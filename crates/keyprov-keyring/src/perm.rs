// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permission bits and caller credentials.

bitflags::bitflags! {
    /// Operations a caller may perform on a record.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyPerm: u8 {
        /// See that the record exists and read its description.
        const VIEW    = 0x01;
        /// Read the payload through the record type's own reader.
        const READ    = 0x02;
        /// Update or revoke the record.
        const WRITE   = 0x04;
        /// Resolve the record by serial for use by a consumer.
        const SEARCH  = 0x08;
        /// Link the record into another keyring.
        const LINK    = 0x10;
        /// Change ownership or permissions.
        const SETATTR = 0x20;
        /// Everything above.
        const ALL     = 0x3f;
    }
}

/// Permission sets applied to the record owner and to everyone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPermissions {
    /// Granted when the caller's uid matches the record owner.
    pub user: KeyPerm,
    /// Granted to every other caller.
    pub other: KeyPerm,
}

impl KeyPermissions {
    /// Creates a permission pair.
    pub const fn new(user: KeyPerm, other: KeyPerm) -> Self {
        Self { user, other }
    }

    /// Returns the set that applies to `creds` for a record owned by `owner`.
    pub fn for_caller(&self, owner: u32, creds: &Credentials) -> KeyPerm {
        if creds.uid() == owner {
            self.user
        } else {
            self.other
        }
    }
}

impl Default for KeyPermissions {
    fn default() -> Self {
        Self::new(KeyPerm::ALL, KeyPerm::empty())
    }
}

/// Identity of the calling context, used for every permission check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Credentials {
    uid: u32,
}

impl Credentials {
    /// Creates credentials for `uid`.
    pub const fn new(uid: u32) -> Self {
        Self { uid }
    }

    /// Credentials of the superuser.
    pub const fn root() -> Self {
        Self::new(0)
    }

    /// Returns the caller's uid.
    #[inline]
    pub fn uid(&self) -> u32 {
        self.uid
    }
}
