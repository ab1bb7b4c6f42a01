//! Named skeletal entities.

/// A skeletal entity whose name and identifier can be rewritten.
///
/// Implement this for whatever bone type the host scene uses; [`Bone`] is
/// the in-memory representation used by the CLI and tests.
pub trait BoneEntity {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// The identifier stored beside the name, if any.
    fn bone_id(&self) -> Option<u32>;

    fn set_bone_id(&mut self, bone_id: Option<u32>);
}

/// A bone name with its identifier side field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bone {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bone_id: Option<u32>,
}

impl Bone {
    /// Create a bone without an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bone_id: None,
        }
    }

    /// Create a bone with an identifier.
    pub fn with_id(name: impl Into<String>, bone_id: u32) -> Self {
        Self {
            name: name.into(),
            bone_id: Some(bone_id),
        }
    }
}

impl BoneEntity for Bone {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn bone_id(&self) -> Option<u32> {
        self.bone_id
    }

    fn set_bone_id(&mut self, bone_id: Option<u32>) {
        self.bone_id = bone_id;
    }
}
