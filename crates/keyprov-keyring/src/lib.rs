// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permission-gated, reference-counted store of typed key records.
//!
//! This crate models the protected key-storage facility that key consumers
//! (such as filesystem encryption) resolve secrets from. It provides the
//! pieces those consumers depend on and nothing else:
//!
//! - a [`KeyType`] capability interface (`validate_and_construct`,
//!   `describe`, `destroy`) implemented once per record kind
//! - a [`KeyTypeRegistry`] handle that owns the type table for the life of
//!   the process; each [`Registration`] unregisters its type when dropped
//! - a [`Keyring`] holding records addressed by opaque [`KeySerial`]s, with
//!   lookups gated by per-record [`KeyPermissions`] against the caller's
//!   [`Credentials`]
//! - a [`KeyRef`] scoped reference: a record stays alive (and readable)
//!   while any reference exists and is destroyed through its type exactly
//!   once, after the last reference is gone
//!
//! # Example
//!
//! ```rust
//! use keyprov_keyring::{
//!     Credentials, KeyPerm, KeyTypeRegistry, Keyring, USER_KEY_TYPE, UserKeyType,
//! };
//!
//! # fn example() -> Result<(), keyprov_keyring::KeyringError> {
//! let registry = KeyTypeRegistry::new();
//! let _user = UserKeyType::register(&registry)?;
//!
//! let keyring = Keyring::new(registry.clone());
//! let creds = Credentials::new(1000);
//!
//! let serial = keyring.add_key(&creds, USER_KEY_TYPE, "token", b"opaque bytes")?;
//! let key = keyring.lookup(&creds, serial, KeyPerm::SEARCH)?;
//! assert_eq!(key.describe(), "token: 12");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod consts;
mod error;
mod key_type;
mod keyring;
mod perm;
mod record;
mod registry;
mod serial;
mod user;

pub use config::KeyringConfig;
pub use consts::{DEFAULT_MAX_BYTES, DEFAULT_MAX_KEYS, USER_KEY_MAX_SIZE, USER_KEY_TYPE};
pub use error::KeyringError;
pub use key_type::{KeyType, Payload, Preparsed};
pub use keyring::Keyring;
pub use perm::{Credentials, KeyPerm, KeyPermissions};
pub use record::{KeyRecord, KeyRef};
pub use registry::{KeyTypeRegistry, Registration};
pub use serial::KeySerial;
pub use user::UserKeyType;
