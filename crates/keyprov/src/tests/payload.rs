// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyprov_zero::{AssertZeroizeOnDrop, Zeroize, ZeroizationProbe};
use proptest::prelude::*;

use crate::consts::{MAX_KEY_SIZE, MIN_KEY_SIZE, PAYLOAD_HEADER_SIZE};
use crate::error::ProvisionError;
use crate::payload::ProvisioningPayload;
use crate::support::test_utils::payload_bytes;
use crate::variant::KeySpecifierVariant;

#[test]
fn test_parse_identifier_payload() {
    let wire = payload_bytes(2, 0, &[0xAB; 32]);
    let payload = ProvisioningPayload::parse(&wire).expect("Failed to parse(..)");

    assert_eq!(payload.variant(), KeySpecifierVariant::Identifier);
    assert_eq!(payload.secret_len(), 32);
    assert_eq!(payload.wire_len(), 40);
    assert!(payload.raw().iter().all(|&b| b == 0xAB));
}

#[test]
fn test_parse_three_bytes_is_invalid() {
    let result = ProvisioningPayload::parse(&[1, 0, 0]);
    assert!(matches!(result, Err(ProvisionError::InvalidFormat)));
}

#[test]
fn test_parse_empty_is_invalid() {
    let result = ProvisioningPayload::parse(&[]);
    assert!(matches!(result, Err(ProvisionError::InvalidFormat)));
}

#[test]
fn test_parse_boundaries() {
    let shortest = payload_bytes(1, 0, &[7; MIN_KEY_SIZE]);
    let longest = payload_bytes(1, 0, &[7; MAX_KEY_SIZE]);
    let too_short = payload_bytes(1, 0, &[7; MIN_KEY_SIZE - 1]);
    let too_long = payload_bytes(1, 0, &[7; MAX_KEY_SIZE + 1]);

    assert!(ProvisioningPayload::parse(&shortest).is_ok());
    assert!(ProvisioningPayload::parse(&longest).is_ok());
    assert!(matches!(
        ProvisioningPayload::parse(&too_short),
        Err(ProvisionError::InvalidFormat)
    ));
    assert!(matches!(
        ProvisioningPayload::parse(&too_long),
        Err(ProvisionError::InvalidFormat)
    ));
}

#[test]
fn test_parse_rejects_unknown_variant() {
    let wire = payload_bytes(3, 0, &[1; 32]);
    assert!(matches!(
        ProvisioningPayload::parse(&wire),
        Err(ProvisionError::InvalidFormat)
    ));
}

#[test]
fn test_parse_rejects_reserved() {
    let wire = payload_bytes(2, 1, &[1; 32]);
    assert!(matches!(
        ProvisioningPayload::parse(&wire),
        Err(ProvisionError::InvalidFormat)
    ));
}

#[test]
fn test_parse_copies_input() {
    let mut wire = payload_bytes(1, 0, &[0x11; 20]);
    let payload = ProvisioningPayload::parse(&wire).expect("Failed to parse(..)");

    wire.zeroize();

    assert!(payload.raw().iter().all(|&b| b == 0x11));
}

#[test]
fn test_encode_matches_layout() {
    let wire = ProvisioningPayload::encode(KeySpecifierVariant::Descriptor, &[0x42; 16])
        .expect("Failed to encode(..)");

    assert_eq!(wire.len(), PAYLOAD_HEADER_SIZE + 16);
    assert_eq!(&wire[..], &payload_bytes(1, 0, &[0x42; 16])[..]);
}

#[test]
fn test_encode_rejects_bad_lengths() {
    for len in [0, MIN_KEY_SIZE - 1, MAX_KEY_SIZE + 1] {
        let raw = vec![1u8; len];
        assert!(matches!(
            ProvisioningPayload::encode(KeySpecifierVariant::Identifier, &raw),
            Err(ProvisionError::InvalidFormat)
        ));
    }
}

#[test]
fn test_debug_redacts_secret() {
    let wire = payload_bytes(2, 0, &[0xCD; 32]);
    let payload = ProvisioningPayload::parse(&wire).expect("Failed to parse(..)");
    let debug = format!("{:?}", payload);

    assert!(debug.contains("Identifier"));
    assert!(debug.contains("secret_len: 32"));
    assert!(!debug.contains("205"));
    assert!(!debug.contains("cd"));
}

#[test]
fn test_zeroize() {
    let wire = payload_bytes(2, 0, &[0xCD; 32]);
    let mut payload = ProvisioningPayload::parse(&wire).expect("Failed to parse(..)");

    // Assert (not) zeroization!
    assert!(!payload.is_zeroized());

    payload.zeroize();

    // Assert zeroization!
    assert!(payload.is_zeroized());
    assert_eq!(payload.secret_len(), 32);
    assert_eq!(payload.raw(), &[0u8; 32]);
}

#[test]
fn test_assert_zeroize_on_drop() {
    let wire = payload_bytes(1, 0, &[0x5A; 64]);
    let payload = ProvisioningPayload::parse(&wire).expect("Failed to parse(..)");
    payload.assert_zeroize_on_drop();
}

proptest! {
    #[test]
    fn zeroize_wipes_every_secret_byte(
        raw in prop::collection::vec(1u8..=u8::MAX, MIN_KEY_SIZE..=MAX_KEY_SIZE)
    ) {
        let wire = payload_bytes(1, 0, &raw);
        let mut payload = ProvisioningPayload::parse(&wire).expect("Failed to parse(..)");
        prop_assert!(!payload.is_zeroized());

        payload.zeroize();

        prop_assert_eq!(payload.secret_len(), raw.len());
        prop_assert!(payload.raw().iter().all(|&b| b == 0));
        prop_assert!(payload.is_zeroized());
    }

    #[test]
    fn parse_accepts_every_valid_payload(
        tag in 1u32..=2,
        raw in prop::collection::vec(any::<u8>(), MIN_KEY_SIZE..=MAX_KEY_SIZE)
    ) {
        let wire = payload_bytes(tag, 0, &raw);
        let payload = ProvisioningPayload::parse(&wire).expect("Failed to parse(..)");

        prop_assert_eq!(payload.variant().wire_tag(), tag);
        prop_assert_eq!(payload.raw(), &raw[..]);
    }

    #[test]
    fn parse_rejects_every_bad_length(
        len in prop_oneof![0..PAYLOAD_HEADER_SIZE + MIN_KEY_SIZE, PAYLOAD_HEADER_SIZE + MAX_KEY_SIZE + 1..256usize]
    ) {
        let mut wire = vec![0u8; len];
        if len >= 4 {
            wire[..4].copy_from_slice(&1u32.to_ne_bytes());
        }

        prop_assert_eq!(
            ProvisioningPayload::parse(&wire).err(),
            Some(ProvisionError::InvalidFormat)
        );
    }

    #[test]
    fn parse_rejects_every_unknown_tag(
        tag in any::<u32>().prop_filter("known tag", |t| *t != 1 && *t != 2),
        raw in prop::collection::vec(any::<u8>(), MIN_KEY_SIZE..=MAX_KEY_SIZE)
    ) {
        let wire = payload_bytes(tag, 0, &raw);
        prop_assert_eq!(
            ProvisioningPayload::parse(&wire).err(),
            Some(ProvisionError::InvalidFormat)
        );
    }

    #[test]
    fn parse_rejects_every_reserved_word(
        reserved in 1u32..,
        raw in prop::collection::vec(any::<u8>(), MIN_KEY_SIZE..=MAX_KEY_SIZE)
    ) {
        let wire = payload_bytes(2, reserved, &raw);
        prop_assert_eq!(
            ProvisioningPayload::parse(&wire).err(),
            Some(ProvisionError::InvalidFormat)
        );
    }
}
