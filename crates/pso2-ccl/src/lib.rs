//! Color variant container parser for PSO2 items.
//!
//! Outfits, basewear and cast parts can ship a list of preset color
//! variants. The variants live in a NIFL container whose REL0 section is a
//! flat array of fixed-size color set records.
//!
//! # File Format
//!
//! - 4 bytes: Magic `NIFL`
//! - 4 bytes: NIFL header size (skipped)
//! - N bytes: NIFL header body
//! - 4 bytes: Magic `REL0`
//! - 4 bytes: Reserved
//! - 4 bytes: REL0 size, measured from the `REL0` magic
//! - 8 bytes: Reserved
//! - M x 28 bytes: Color set records
//!
//! # Example
//!
//! ```no_run
//! use pso2_ccl::{Ccl, ObjectType};
//!
//! let table = Ccl::open("colors.ccl")?;
//!
//! if let Some(set) = table.get(3) {
//!     if let Some([(slot1, color1), (slot2, color2)]) = set.colors_for(ObjectType::Basewear) {
//!         println!("{}: {}, {}: {}", slot1, color1, slot2, color2);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod channel;
mod color_set;
mod container;
mod error;
mod object_type;

pub use channel::{channels_for, ColorChannel, ColorChannelInfo, COLOR_CHANNELS};
pub use color_set::{ColorSet, COLOR_SET_SIZE};
pub use container::{Ccl, ColorSetTable};
pub use error::{Error, Result};
pub use object_type::{ObjectType, ParseObjectTypeError};
