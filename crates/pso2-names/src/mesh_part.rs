//! Mesh part ids embedded in object names.
//!
//! Imported mesh objects are named `mesh[N]_<material>#<shader>#<part>`,
//! where the last `#` segment is the part id the game uses to hide or swap
//! pieces of an outfit. Blender may append a `.NNN` suffix to keep names
//! unique.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static BLENDER_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[0-9]+$").expect("valid suffix pattern"));

static MESH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mesh\[[0-9]+\]_.*#.*#([0-9]+)$").expect("valid mesh id pattern")
});

/// Trailing `#id`, with an optional Blender suffix after it.
static MESH_ID_SUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9]+)((?:\.[0-9]+)?)$").expect("valid mesh id pattern"));

/// Part of an outfit a mesh belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum MeshId {
    Costume = 0,
    BreastNeck = 1,
    Front = 2,
    Ornament1 = 3,
    Back = 4,
    Shoulder = 5,
    Forearm = 6,
    Legs = 7,
    Ornament2 = 8,
    HeadOrnament = 9,
    CastBodyOrnament = 10,
    CastLegsOrnament = 11,
    CastArmsOrnament = 12,
    OuterOrnament = 13,
}

impl MeshId {
    pub const ALL: [MeshId; 14] = [
        Self::Costume,
        Self::BreastNeck,
        Self::Front,
        Self::Ornament1,
        Self::Back,
        Self::Shoulder,
        Self::Forearm,
        Self::Legs,
        Self::Ornament2,
        Self::HeadOrnament,
        Self::CastBodyOrnament,
        Self::CastLegsOrnament,
        Self::CastArmsOrnament,
        Self::OuterOrnament,
    ];

    /// Display name shown in part pickers.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Costume => "None",
            Self::BreastNeck => "Breast & Neck",
            Self::Front => "Front",
            Self::Ornament1 => "Basewear Ornament 1",
            Self::Back => "Back",
            Self::Shoulder => "Shoulder",
            Self::Forearm => "Arms",
            Self::Legs => "Legs",
            Self::Ornament2 => "Basewear Ornament 2",
            Self::HeadOrnament => "Head Ornament",
            Self::CastBodyOrnament => "Cast Body Ornament",
            Self::CastLegsOrnament => "Cast Legs Ornament",
            Self::CastArmsOrnament => "Cast Arms Ornament",
            Self::OuterOrnament => "Outerwear Ornament",
        }
    }

    pub const fn value(&self) -> u32 {
        *self as u32
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.value() == value)
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip a trailing `.NNN` uniqueness suffix.
pub fn remove_blender_suffix(name: &str) -> &str {
    match BLENDER_SUFFIX.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}

/// Get the part id from a mesh object name.
pub fn get_mesh_id(name: &str) -> Option<MeshId> {
    let caps = MESH_ID.captures(remove_blender_suffix(name))?;
    caps[1].parse().ok().and_then(MeshId::from_value)
}

/// Rewrite the part id of a mesh object name.
///
/// Returns `(object_name, mesh_data_name)`; the mesh data gets an extra
/// `_mesh` after the id. A Blender suffix is kept in place.
pub fn set_mesh_id(name: &str, mesh_id: MeshId) -> (String, String) {
    let id = mesh_id.value();
    let object_name = MESH_ID_SUB.replace(name, format!("#{id}${{2}}"));
    let mesh_name = MESH_ID_SUB.replace(name, format!("#{id}_mesh${{2}}"));
    (object_name.into_owned(), mesh_name.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_blender_suffix() {
        assert_eq!(remove_blender_suffix("Arm.001"), "Arm");
        assert_eq!(remove_blender_suffix("Arm"), "Arm");
        assert_eq!(remove_blender_suffix("Arm.v2"), "Arm.v2");
    }

    #[test]
    fn test_get_mesh_id() {
        assert_eq!(get_mesh_id("mesh[0]_body#shader#4"), Some(MeshId::Back));
        assert_eq!(get_mesh_id("mesh[12]_a#b#13.002"), Some(MeshId::OuterOrnament));
        assert_eq!(get_mesh_id("mesh[0]_body#shader#99"), None);
        assert_eq!(get_mesh_id("Cube"), None);
    }

    #[test]
    fn test_set_mesh_id() {
        assert_eq!(
            set_mesh_id("mesh[0]_body#shader#4", MeshId::Legs),
            (
                "mesh[0]_body#shader#7".to_string(),
                "mesh[0]_body#shader#7_mesh".to_string()
            )
        );
        assert_eq!(
            set_mesh_id("mesh[0]_body#shader#4.001", MeshId::Front).0,
            "mesh[0]_body#shader#2.001"
        );
        assert_eq!(
            set_mesh_id("mesh[0]_body#shader#4.001", MeshId::Front).1,
            "mesh[0]_body#shader#2_mesh.001"
        );
    }

    #[test]
    fn test_set_then_get() {
        for id in MeshId::ALL {
            let (name, _) = set_mesh_id("mesh[1]_m#s#0", id);
            assert_eq!(get_mesh_id(&name), Some(id));
        }
    }

    #[test]
    fn test_from_value() {
        assert_eq!(MeshId::from_value(5), Some(MeshId::Shoulder));
        assert_eq!(MeshId::from_value(14), None);
        assert_eq!(MeshId::Costume.to_string(), "None");
    }
}
