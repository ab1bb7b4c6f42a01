//! PSO2 model tool library.
//!
//! This crate provides a unified interface to the tool's library crates.
//!
//! # Crates
//!
//! - [`pso2_common`] - Chunk reading and packed colors
//! - [`pso2_ccl`] - NIFL color variant containers and color channel slots
//! - [`pso2_names`] - Bone identifier names, batch renaming, mesh part ids
//!
//! # Example
//!
//! ```no_run
//! use pso2::prelude::*;
//!
//! let table = Ccl::open("colors.ccl")?;
//! println!("Color sets: {}", table.len());
//!
//! let mut skeleton = vec![Bone::new("(1)Spine"), Bone::new("(2)Neck")];
//! BoneIdentityRenamer::new(RenameDirection::IdsToProperties).rename_batch(&mut skeleton)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use pso2_ccl as ccl;
pub use pso2_common as common;
pub use pso2_names as names;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use pso2_ccl::{channels_for, Ccl, ColorChannel, ColorSet, ColorSetTable, ObjectType};
    pub use pso2_common::{ChunkReader, Color};
    pub use pso2_names::{
        join_bone_name, split_bone_name, Bone, BoneEntity, BoneIdentityRenamer, BoneName,
        DuplicateNameError, MeshId, NameHooks, Pso2NameHooks, RenameDirection,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
