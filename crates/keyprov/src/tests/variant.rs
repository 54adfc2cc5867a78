// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::variant::KeySpecifierVariant;

#[test]
fn test_from_wire_known_tags() {
    assert_eq!(
        KeySpecifierVariant::from_wire(1),
        Some(KeySpecifierVariant::Descriptor)
    );
    assert_eq!(
        KeySpecifierVariant::from_wire(2),
        Some(KeySpecifierVariant::Identifier)
    );
}

#[test]
fn test_from_wire_unknown_tags() {
    for tag in [0, 3, 0xFFFF_FFFF] {
        assert_eq!(KeySpecifierVariant::from_wire(tag), None);
    }
}

#[test]
fn test_wire_tag_matches_from_wire() {
    for variant in [KeySpecifierVariant::Descriptor, KeySpecifierVariant::Identifier] {
        assert_eq!(KeySpecifierVariant::from_wire(variant.wire_tag()), Some(variant));
    }
}

#[test]
fn test_specifier_len() {
    assert_eq!(KeySpecifierVariant::Descriptor.specifier_len(), 8);
    assert_eq!(KeySpecifierVariant::Identifier.specifier_len(), 16);
}

#[test]
fn test_display() {
    assert_eq!(KeySpecifierVariant::Descriptor.to_string(), "descriptor");
    assert_eq!(KeySpecifierVariant::Identifier.to_string(), "identifier");
}
