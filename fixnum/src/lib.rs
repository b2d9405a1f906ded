//! Fixed-width multi-word unsigned integer arithmetic executed by a
//! lock-step lane group.
//!
//! A value of `W` words lives across the `W` lanes of a
//! [`lanes::layouts::Group`], one word per lane, least-significant word in
//! lane 0. Every operation here is a set of free functions invoked
//! uniformly by the whole group on caller-owned word slices; cross-word
//! effects (carries, borrows, multiplication cross terms) travel through
//! the group's broadcast/rotate/vote primitives.
//!
//! The kernel is stateless and never allocates: operations that need
//! register temporaries take a [`lanes::layouts::Scratch`] arena sized by
//! their `*_scratch_space` companion.
//!
//! - [`bytes`] -- little-endian byte (de)serialization of values.
//! - [`carry`] -- pure carry/borrow lookahead over vote bitmasks.
//! - [`arith`] -- addition/subtraction with group-wide carry resolution,
//!   increment/decrement.
//! - [`mul`] -- truncated and double-width schoolbook multiplication.
//! - [`predicate`] -- nonzero ballot and three-way comparison.

pub mod arith;
pub mod bytes;
pub mod carry;
pub mod mul;
pub mod predicate;

/// Backend-parametric test functions, instantiated per executor in this
/// crate's tests and reusable by future backend crates.
pub mod tests;

#[cfg(test)]
mod test_soft;

pub use arith::*;
pub use bytes::*;
pub use carry::*;
pub use mul::*;
pub use predicate::*;
