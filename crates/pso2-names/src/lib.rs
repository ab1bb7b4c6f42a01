//! Bone identifier names for PSO2 skeletons.
//!
//! PSO2 bones carry a numeric id that the game needs back on export. FBX has
//! nowhere to store it except the bone name, so the id travels as a
//! `(id)name` prefix and is moved into a typed side field after import.
//!
//! - [`bone_name`] - Encode and decode `(id)name` and the legacy `name(id)`
//! - [`rename`] - All-or-nothing batch renaming with duplicate detection
//! - [`interchange`] - Hooks for the post-import and pre-export name passes
//! - [`mesh_part`] - Mesh part ids embedded in object names
//!
//! # Example
//!
//! ```
//! use pso2_names::{join_bone_name, split_bone_name};
//!
//! let encoded = join_bone_name("Spine#sp", 12);
//! assert_eq!(encoded, "(12)Spine#sp");
//! assert_eq!(split_bone_name(&encoded), Some(("Spine#sp".to_string(), 12)));
//! assert_eq!(split_bone_name("Spine#sp(12)"), Some(("Spine#sp".to_string(), 12)));
//! ```

mod bone;
pub mod bone_name;
mod error;
pub mod interchange;
pub mod mesh_part;
pub mod rename;

pub use bone::{Bone, BoneEntity};
pub use bone_name::{
    has_bone_id, join_bone_name, split_bone_name, BoneName, BONE_ID_PROPERTY,
};
pub use error::DuplicateNameError;
pub use interchange::{ImportedBone, NameHooks, Pso2NameHooks};
pub use mesh_part::MeshId;
pub use rename::{BoneIdentityRenamer, RenameDirection, RenamePlan};
