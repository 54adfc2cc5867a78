// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Credentials, KeyPerm, KeyPermissions};

#[test]
fn test_default_permissions_grant_everything_to_owner_only() {
    let perm = KeyPermissions::default();
    let owner = Credentials::new(1000);
    let stranger = Credentials::new(1001);

    assert_eq!(perm.for_caller(1000, &owner), KeyPerm::ALL);
    assert_eq!(perm.for_caller(1000, &stranger), KeyPerm::empty());
}

#[test]
fn test_other_permissions_apply_to_root_when_not_owner() {
    let perm = KeyPermissions::new(KeyPerm::ALL, KeyPerm::VIEW);

    assert_eq!(perm.for_caller(1000, &Credentials::root()), KeyPerm::VIEW);
}

#[test]
fn test_all_contains_every_bit() {
    let every = KeyPerm::VIEW
        | KeyPerm::READ
        | KeyPerm::WRITE
        | KeyPerm::SEARCH
        | KeyPerm::LINK
        | KeyPerm::SETATTR;

    assert_eq!(every, KeyPerm::ALL);
}
