//! Common utilities for PSO2 tools.
//!
//! This crate provides the foundational types shared by the other crates:
//!
//! - [`ChunkReader`] - Cursor over a byte slice with little-endian reads
//! - [`Color`] - Packed ARGB color decoding

mod color;
mod error;
mod reader;

pub use color::Color;
pub use error::{Error, Result};
pub use reader::ChunkReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};
