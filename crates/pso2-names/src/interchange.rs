//! Name hooks for the FBX import and export passes.
//!
//! An interchange wrapper calls [`NameHooks::on_import`] for every skeletal
//! node name right after the importer reads it, and
//! [`NameHooks::on_export`] right before the exporter writes it. Nothing
//! else about the node is inspected.

use std::borrow::Cow;

use crate::bone_name::{join_bone_name, split_bone_name};
use crate::rename::{BoneIdentityRenamer, RenameDirection};
use crate::{BoneEntity, DuplicateNameError};

/// A node name as it should appear in the scene after import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedBone {
    pub name: String,
    pub bone_id: Option<u32>,
}

/// Split an imported node name into the scene name and identifier.
pub fn import_bone_name(raw: &str) -> ImportedBone {
    match split_bone_name(raw) {
        Some((name, bone_id)) => ImportedBone {
            name,
            bone_id: Some(bone_id),
        },
        None => ImportedBone {
            name: raw.to_string(),
            bone_id: None,
        },
    }
}

/// The name to export for a bone: `(id)name` if it has a stored id.
pub fn export_bone_name<E: BoneEntity>(entity: &E) -> Cow<'_, str> {
    match entity.bone_id() {
        Some(bone_id) => Cow::Owned(join_bone_name(entity.name(), bone_id)),
        None => Cow::Borrowed(entity.name()),
    }
}

/// Decode every imported bone of a skeleton in one batch.
///
/// If decoding would produce duplicate names the skeleton keeps its encoded
/// names and the error lists the conflicts.
pub fn apply_import_names<E: BoneEntity>(entities: &mut [E]) -> Result<usize, DuplicateNameError> {
    BoneIdentityRenamer::new(RenameDirection::IdsToProperties).rename_batch(entities)
}

/// Hook points an import/export wrapper calls for skeletal node names.
pub trait NameHooks {
    /// Called with each node name after import.
    fn on_import(&self, raw_name: &str) -> ImportedBone {
        import_bone_name(raw_name)
    }

    /// Called with each bone before export.
    fn on_export<'a>(&self, name: &'a str, bone_id: Option<u32>) -> Cow<'a, str> {
        match bone_id {
            Some(bone_id) => Cow::Owned(join_bone_name(name, bone_id)),
            None => Cow::Borrowed(name),
        }
    }
}

/// Standard hooks: strip `(id)` on import, restore it on export.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pso2NameHooks;

impl NameHooks for Pso2NameHooks {}

/// Names to hand to the exporter for a skeleton.
pub fn export_names<E: BoneEntity, H: NameHooks + ?Sized>(entities: &[E], hooks: &H) -> Vec<String> {
    entities
        .iter()
        .map(|e| hooks.on_export(e.name(), e.bone_id()).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bone;

    #[test]
    fn test_import_bone_name() {
        assert_eq!(
            import_bone_name("(3)Neck#nk"),
            ImportedBone {
                name: "Neck#nk".to_string(),
                bone_id: Some(3)
            }
        );
        assert_eq!(import_bone_name("Neck").bone_id, None);
        assert_eq!(import_bone_name("Neck(8)").bone_id, Some(8));
    }

    #[test]
    fn test_export_bone_name() {
        assert_eq!(export_bone_name(&Bone::with_id("Neck", 3)), "(3)Neck");
        assert!(matches!(
            export_bone_name(&Bone::new("Neck")),
            Cow::Borrowed("Neck")
        ));
    }

    #[test]
    fn test_hooks_roundtrip() {
        let hooks = Pso2NameHooks;
        let raw = ["(0)Root", "(1)Spine#sp", "Camera"];

        let skeleton: Vec<Bone> = raw
            .iter()
            .map(|name| {
                let imported = hooks.on_import(name);
                Bone {
                    name: imported.name,
                    bone_id: imported.bone_id,
                }
            })
            .collect();

        assert_eq!(skeleton[1], Bone::with_id("Spine#sp", 1));
        assert_eq!(export_names(&skeleton, &hooks), raw);
    }

    #[test]
    fn test_legacy_import_exports_prefix() {
        let hooks = Pso2NameHooks;
        let imported = hooks.on_import("Spine(4)");
        assert_eq!(hooks.on_export(&imported.name, imported.bone_id), "(4)Spine");
    }

    #[test]
    fn test_apply_import_names() {
        let mut skeleton = vec![Bone::new("(1)Arm"), Bone::new("(2)Leg")];
        assert_eq!(apply_import_names(&mut skeleton), Ok(2));
        assert_eq!(skeleton[0], Bone::with_id("Arm", 1));

        let mut clash = vec![Bone::new("(1)Arm"), Bone::new("(2)Arm")];
        assert!(apply_import_names(&mut clash).is_err());
        assert_eq!(clash[0].name, "(1)Arm");
    }
}
