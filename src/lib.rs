#![no_std]
#![warn(missing_docs)]

//! Growable vector-backed sets with classical set-algebra operations.
//!
//! The central type is [`Set<T>`], an unordered collection of unique
//! elements requiring only `T: Eq`, with no hashing or ordering involved.
//! Membership tests are linear scans, which is the right trade-off for the
//! small sets this crate is meant for; iteration visits elements in
//! insertion order.
//!
//! The [`ops`] module provides checked entry points for the classical set
//! operations (union, intersection, symmetric difference, and the subset
//! test) which accept optional operands and surface precondition violations
//! as [`SetError`] values instead of panicking.

extern crate alloc;

pub mod ops;
pub mod set;

pub use crate::ops::SetError;
pub use crate::set::Set;

#[cfg(test)]
mod test_utils {
    pub(crate) const RNG_SEED: [u8; 32] = [
        0x5E, 0x7A, 0x15, 0x7E, 0xA1, 0x50, 0x06, 0x0D,
        0xF0, 0x2D, 0xA7, 0xA5, 0x7F, 0x2C, 0x7E, 0x55,
        0x8D, 0x1A, 0x2E, 0x3B, 0x4C, 0x5D, 0x6E, 0x7F,
        0x80, 0x91, 0xA2, 0xB3, 0xC4, 0xD5, 0xE6, 0xF7,
    ];
}
