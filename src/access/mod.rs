//! Register access primitives
//!
//! Two building blocks sit between the register map and the bus:
//! - [`Bitfield`]: a run of bits inside one 8-bit register, updated with a
//!   read-modify-write that leaves the neighbouring bits alone
//! - [`RegisterStruct`]: a fixed number of little-endian integers spread over
//!   consecutive registers, moved in a single block transfer
//!
//! Both are plain `const` descriptors; they hold no bus handle and cache
//! nothing between calls. Nothing here validates a value beyond its bit
//! width, so only the driver's typed setters reach these.

mod bitfield;
mod register_struct;

pub(crate) use bitfield::Bitfield;
pub(crate) use register_struct::RegisterStruct;

/// Largest block a single transfer may carry, in bytes
///
/// Matches the write buffers in [`crate::interface`].
pub(crate) const MAX_BLOCK_LEN: usize = 32;
