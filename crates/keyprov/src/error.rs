// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for keyprov.

use keyprov_keyring::KeyringError;
use thiserror::Error;

use crate::consts::{EACCES, EDQUOT, EEXIST, EINVAL, EIO, EKEYREJECTED, ENODEV, ENOKEY};

/// Errors from provisioning and installing master key secrets.
///
/// Values never carry key material. None of them are retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    /// The reference does not name a record visible to the caller.
    #[error("no such key")]
    NotFound,

    /// The record is visible but the caller lacks Search permission on it.
    #[error("access denied")]
    PermissionDenied,

    /// The record is not a provisioning key, or was provisioned for another
    /// key specifier variant.
    #[error("key rejected")]
    TypeMismatch,

    /// A provisioning payload failed validation.
    #[error("invalid argument: malformed provisioning payload")]
    InvalidFormat,

    /// The add-key argument is malformed.
    #[error("invalid argument")]
    InvalidArgument,

    /// The key store failed for a reason unrelated to the record itself.
    #[error("keyring: {0}")]
    Keyring(KeyringError),
}

impl From<KeyringError> for ProvisionError {
    fn from(err: KeyringError) -> Self {
        match err {
            KeyringError::NotFound => Self::NotFound,
            KeyringError::PermissionDenied => Self::PermissionDenied,
            KeyringError::InvalidPayload(_) => Self::InvalidFormat,
            other => Self::Keyring(other),
        }
    }
}

impl ProvisionError {
    /// Linux errno a caller-facing interface reports for this error.
    pub fn errno(&self) -> i32 {
        match self {
            Self::NotFound => ENOKEY,
            Self::PermissionDenied => EACCES,
            Self::TypeMismatch => EKEYREJECTED,
            Self::InvalidFormat | Self::InvalidArgument => EINVAL,
            Self::Keyring(KeyringError::NotFound) => ENOKEY,
            Self::Keyring(KeyringError::PermissionDenied) => EACCES,
            Self::Keyring(KeyringError::InvalidPayload(_)) => EINVAL,
            Self::Keyring(KeyringError::UnknownKeyType(_)) => ENODEV,
            Self::Keyring(KeyringError::DuplicateKeyType(_)) => EEXIST,
            Self::Keyring(KeyringError::QuotaExceeded) => EDQUOT,
            Self::Keyring(KeyringError::MutexPoisoned) => EIO,
        }
    }

    /// Short message suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self.errno() {
            ENOKEY => "no such key",
            EACCES => "access denied",
            EKEYREJECTED => "key rejected",
            EINVAL => "invalid argument",
            ENODEV => "no such key type",
            EEXIST => "key type already exists",
            EDQUOT => "key quota exceeded",
            _ => "input/output error",
        }
    }
}
