// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # keyprov-zero
//!
//! Zeroization primitives shared by the key provisioning crates.
//!
//! Wiping itself is delegated to [`zeroize`]. On top of it this crate adds a
//! way to *prove* that wiping happened:
//!
//! - [`ZeroizeOnDropSentinel`]: a shared flag flipped by `zeroize()`; a clone
//!   kept by a test observes it after the owner is gone
//! - [`ZeroizationProbe`]: runtime "are all bytes zero" check
//! - [`AssertZeroizeOnDrop`] / [`assert_zeroize_on_drop`]: drop-time assertion
//!
//! ## Example
//!
//! ```rust
//! use keyprov_zero::{AssertZeroizeOnDrop, Zeroize, ZeroizeOnDropSentinel, assert_zeroize_on_drop};
//!
//! struct Token {
//!     bytes: Vec<u8>,
//!     __sentinel: ZeroizeOnDropSentinel,
//! }
//!
//! impl Zeroize for Token {
//!     fn zeroize(&mut self) {
//!         self.bytes.zeroize();
//!         self.__sentinel.zeroize();
//!     }
//! }
//!
//! impl Drop for Token {
//!     fn drop(&mut self) {
//!         self.zeroize();
//!     }
//! }
//!
//! impl AssertZeroizeOnDrop for Token {
//!     fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
//!         self.__sentinel.clone()
//!     }
//!
//!     fn assert_zeroize_on_drop(self) {
//!         assert_zeroize_on_drop(self);
//!     }
//! }
//!
//! let token = Token {
//!     bytes: vec![0xAA; 16],
//!     __sentinel: ZeroizeOnDropSentinel::default(),
//! };
//! token.assert_zeroize_on_drop();
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod assert;
mod probe;
mod sentinel;
mod traits;

pub use assert::assert_zeroize_on_drop;
pub use sentinel::ZeroizeOnDropSentinel;
pub use traits::{AssertZeroizeOnDrop, ZeroizationProbe};

pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
