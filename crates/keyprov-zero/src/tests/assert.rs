// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::{AssertZeroizeOnDrop, ZeroizeOnDropSentinel, assert_zeroize_on_drop};

struct Wiped {
    bytes: Vec<u8>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl Zeroize for Wiped {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.__sentinel.zeroize();
    }
}

impl Drop for Wiped {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl AssertZeroizeOnDrop for Wiped {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

struct Leaky {
    __sentinel: ZeroizeOnDropSentinel,
}

impl AssertZeroizeOnDrop for Leaky {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

#[test]
fn test_assert_zeroize_on_drop_ok() {
    let value = Wiped {
        bytes: vec![0xCDu8; 32],
        __sentinel: ZeroizeOnDropSentinel::default(),
    };
    let observer = value.clone_sentinel();

    value.assert_zeroize_on_drop();

    assert!(observer.is_zeroized());
}

#[test]
#[should_panic]
fn test_assert_zeroize_on_drop_panics_without_zeroize() {
    let value = Leaky {
        __sentinel: ZeroizeOnDropSentinel::default(),
    };

    value.assert_zeroize_on_drop();
}
