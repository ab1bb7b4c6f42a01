//! Batch bone renaming.
//!
//! Moving identifiers between names and the side field is done for a whole
//! skeleton at once. All resulting names are computed first; if any two
//! bones would end up with the same name nothing is changed.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::bone_name::{has_bone_id, join_bone_name, split_bone_name};
use crate::{BoneEntity, DuplicateNameError};

/// Which way identifiers move during a batch rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RenameDirection {
    /// `(id)name` becomes `name` with the id stored in the side field.
    IdsToProperties,
    /// `name` with a stored id becomes `(id)name` and the field is cleared.
    PropertiesToNames,
}

impl RenameDirection {
    /// Whether an entity is affected by a rename in this direction.
    pub fn is_candidate<E: BoneEntity>(&self, entity: &E) -> bool {
        match self {
            Self::IdsToProperties => has_bone_id(entity.name()),
            Self::PropertiesToNames => entity.bone_id().is_some(),
        }
    }

    fn target<E: BoneEntity>(&self, entity: &E) -> Option<(String, Option<u32>)> {
        match self {
            Self::IdsToProperties => {
                split_bone_name(entity.name()).map(|(name, bone_id)| (name, Some(bone_id)))
            }
            Self::PropertiesToNames => entity
                .bone_id()
                .map(|bone_id| (join_bone_name(entity.name(), bone_id), None)),
        }
    }
}

/// Collect the entities matching a predicate.
pub fn collect_candidates<E, F>(entities: &[E], predicate: F) -> Vec<&E>
where
    F: Fn(&E) -> bool,
{
    entities.iter().filter(|&e| predicate(e)).collect()
}

/// A single pending rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// Index of the entity in the planned collection.
    pub index: usize,
    pub name: String,
    pub bone_id: Option<u32>,
}

/// Renames computed for a collection, checked for collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    renames: Vec<PlannedRename>,
    /// Length of the planned collection.
    len: usize,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedRename> {
        self.renames.iter()
    }

    /// Apply every rename to the collection the plan was built from.
    ///
    /// A collection of a different length is left untouched. Returns the
    /// number of entities changed.
    pub(crate) fn commit<E: BoneEntity>(self, entities: &mut [E]) -> usize {
        if entities.len() != self.len {
            tracing::warn!(
                planned = self.len,
                actual = entities.len(),
                "rename plan does not match the collection"
            );
            return 0;
        }

        let count = self.renames.len();
        for rename in self.renames {
            let entity = &mut entities[rename.index];
            entity.set_name(rename.name);
            entity.set_bone_id(rename.bone_id);
        }
        count
    }
}

/// Moves bone identifiers between names and side fields for a skeleton.
#[derive(Debug, Clone, Copy)]
pub struct BoneIdentityRenamer {
    direction: RenameDirection,
}

impl BoneIdentityRenamer {
    pub fn new(direction: RenameDirection) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> RenameDirection {
        self.direction
    }

    /// Entities that a rename in this direction would touch.
    pub fn collect_candidates<'a, E: BoneEntity>(&self, entities: &'a [E]) -> Vec<&'a E> {
        collect_candidates(entities, |e| self.direction.is_candidate(e))
    }

    /// Whether there is anything to rename.
    pub fn has_candidates<E: BoneEntity>(&self, entities: &[E]) -> bool {
        entities.iter().any(|e| self.direction.is_candidate(e))
    }

    /// Compute all renames without touching the entities.
    ///
    /// Fails if two candidates would get the same name, or if a candidate
    /// would take the name of a bone that is not being renamed.
    pub fn plan<E: BoneEntity>(&self, entities: &[E]) -> Result<RenamePlan, DuplicateNameError> {
        let renames: Vec<PlannedRename> = entities
            .iter()
            .enumerate()
            .filter_map(|(index, entity)| {
                self.direction
                    .target(entity)
                    .map(|(name, bone_id)| PlannedRename {
                        index,
                        name,
                        bone_id,
                    })
            })
            .collect();

        let renamed: FxHashSet<usize> = renames.iter().map(|r| r.index).collect();
        let untouched: FxHashSet<&str> = entities
            .iter()
            .enumerate()
            .filter(|(index, _)| !renamed.contains(index))
            .map(|(_, entity)| entity.name())
            .collect();

        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        let mut duplicates: Vec<String> = Vec::new();

        for rename in &renames {
            let count = seen.entry(rename.name.as_str()).or_insert(0);
            *count += 1;

            // Report each name once
            let first_collision = if untouched.contains(rename.name.as_str()) { 1 } else { 2 };
            if *count == first_collision {
                duplicates.push(rename.name.clone());
            }
        }

        if !duplicates.is_empty() {
            tracing::warn!(
                direction = ?self.direction,
                count = duplicates.len(),
                "bone rename rejected due to duplicate names"
            );
            return Err(DuplicateNameError { names: duplicates });
        }

        Ok(RenamePlan {
            renames,
            len: entities.len(),
        })
    }

    /// Rename every candidate, or none of them if any names collide.
    ///
    /// Returns the number of entities changed.
    pub fn rename_batch<E: BoneEntity>(&self, entities: &mut [E]) -> Result<usize, DuplicateNameError> {
        let plan = self.plan(entities)?;
        let count = plan.commit(entities);

        tracing::info!(direction = ?self.direction, count, "renamed bones");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bone;

    fn bones(names: &[&str]) -> Vec<Bone> {
        names.iter().map(|n| Bone::new(*n)).collect()
    }

    #[test]
    fn test_collect_candidates() {
        let skeleton = vec![
            Bone::new("(1)Arm"),
            Bone::new("Leg(2)"),
            Bone::new("Spine"),
            Bone::with_id("Head", 3),
        ];

        let to_props = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);
        let names: Vec<_> = to_props
            .collect_candidates(&skeleton)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["(1)Arm", "Leg(2)"]);

        let to_names = BoneIdentityRenamer::new(RenameDirection::PropertiesToNames);
        assert_eq!(to_names.collect_candidates(&skeleton).len(), 1);
        assert!(to_names.has_candidates(&skeleton));
        assert!(!to_names.has_candidates(&bones(&["Arm"])));
    }

    #[test]
    fn test_ids_to_properties() {
        let mut skeleton = bones(&["(1)Arm", "Leg(2)", "Spine"]);
        let renamer = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);

        assert_eq!(renamer.rename_batch(&mut skeleton), Ok(2));
        assert_eq!(
            skeleton,
            vec![
                Bone::with_id("Arm", 1),
                Bone::with_id("Leg", 2),
                Bone::new("Spine")
            ]
        );
    }

    #[test]
    fn test_properties_to_names() {
        let mut skeleton = vec![Bone::with_id("Arm", 1), Bone::new("Spine")];
        let renamer = BoneIdentityRenamer::new(RenameDirection::PropertiesToNames);

        assert_eq!(renamer.rename_batch(&mut skeleton), Ok(1));
        assert_eq!(skeleton, vec![Bone::new("(1)Arm"), Bone::new("Spine")]);
    }

    #[test]
    fn test_duplicates_abort_whole_batch() {
        let mut skeleton = bones(&["(1)Arm", "(2)Arm", "(3)Leg"]);
        let before = skeleton.clone();
        let renamer = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);

        let err = renamer.rename_batch(&mut skeleton).unwrap_err();
        assert_eq!(err.names, vec!["Arm".to_string()]);
        assert_eq!(skeleton, before);
    }

    #[test]
    fn test_all_duplicates_reported_once() {
        let skeleton = bones(&["(1)Arm", "(2)Arm", "Arm(3)", "(4)Leg", "(5)Leg"]);
        let renamer = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);

        let err = renamer.plan(&skeleton).unwrap_err();
        assert_eq!(err.names, vec!["Arm".to_string(), "Leg".to_string()]);
        assert!(err.to_string().contains("Arm\nLeg"));
    }

    #[test]
    fn test_collision_with_untouched_bone() {
        let mut skeleton = bones(&["(1)Arm", "Arm"]);
        let before = skeleton.clone();
        let renamer = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);

        let err = renamer.rename_batch(&mut skeleton).unwrap_err();
        assert_eq!(err.names, vec!["Arm".to_string()]);
        assert_eq!(skeleton, before);
    }

    #[test]
    fn test_restore_collision() {
        let skeleton = vec![Bone::with_id("Arm", 1), Bone::new("(1)Arm")];
        let renamer = BoneIdentityRenamer::new(RenameDirection::PropertiesToNames);

        assert_eq!(
            renamer.plan(&skeleton),
            Err(DuplicateNameError {
                names: vec!["(1)Arm".to_string()]
            })
        );
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let skeleton = bones(&["(1)Arm", "(2)Leg"]);
        let renamer = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);

        let plan = renamer.plan(&skeleton).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(skeleton, bones(&["(1)Arm", "(2)Leg"]));

        let targets: Vec<_> = plan.iter().map(|r| (r.name.as_str(), r.bone_id)).collect();
        assert_eq!(targets, vec![("Arm", Some(1)), ("Leg", Some(2))]);
    }

    #[test]
    fn test_roundtrip_both_directions() {
        let original = bones(&["(10)Arm#a#b", "(11)Leg", "Root"]);
        let mut skeleton = original.clone();

        BoneIdentityRenamer::new(RenameDirection::IdsToProperties)
            .rename_batch(&mut skeleton)
            .unwrap();
        BoneIdentityRenamer::new(RenameDirection::PropertiesToNames)
            .rename_batch(&mut skeleton)
            .unwrap();

        assert_eq!(skeleton, original);
    }

    #[test]
    fn test_commit_rejects_other_collection() {
        let skeleton = bones(&["(1)Arm", "(2)Leg"]);
        let renamer = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);
        let plan = renamer.plan(&skeleton).unwrap();

        let mut other = bones(&["Spine"]);
        assert_eq!(plan.commit(&mut other), 0);
        assert_eq!(other, bones(&["Spine"]));
    }

    #[test]
    fn test_empty_batch() {
        let mut skeleton = bones(&["Arm", "Leg"]);
        let renamer = BoneIdentityRenamer::new(RenameDirection::IdsToProperties);

        assert!(renamer.plan(&skeleton).unwrap().is_empty());
        assert_eq!(renamer.rename_batch(&mut skeleton), Ok(0));
    }
}
