//! Bone identifier name codec.
//!
//! Three generations of naming exist in the wild:
//!
//! - `(id)name#short1#short2` - the format written by the Aqua library, and
//!   the only one produced by [`join_bone_name`]
//! - `name#short1#short2(id)` - written by older versions of this tool
//! - a bare name with the id stored beside it (see [`BONE_ID_PROPERTY`])
//!
//! Decoding tries the prefix form first, then the suffix form. A name that
//! matches both decodes as the prefix form.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Key of the identifier side field on bones.
pub const BONE_ID_PROPERTY: &str = "pso2_bone_id";

/// Matches `(id)name#short1#short2`.
static BONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\(([0-9]+)\)(.+(?:#.+(?:#.+)?)?)$").expect("valid bone pattern")
});

/// Matches `name#short1#short2(id)`.
static LEGACY_BONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.+(?:#.+(?:#.+)?)?)\(([0-9]+)\)$").expect("valid legacy bone pattern")
});

/// Encode a name and identifier as `(id)name`.
///
/// The name must be non-empty to decode again: `(5)` matches no pattern.
pub fn join_bone_name(name: &str, bone_id: u32) -> String {
    format!("({bone_id}){name}")
}

/// Decode a name carrying an identifier into `(name, id)`.
///
/// Returns `None` if the name matches no known format. A digit run too large
/// for a `u32` does not count as a match.
pub fn split_bone_name(name: &str) -> Option<(String, u32)> {
    if let Some(caps) = BONE_PATTERN.captures(name) {
        if let Ok(bone_id) = caps[1].parse() {
            return Some((caps[2].to_string(), bone_id));
        }
    }

    if let Some(caps) = LEGACY_BONE_PATTERN.captures(name) {
        if let Ok(bone_id) = caps[2].parse() {
            tracing::trace!(name, "decoded legacy suffix bone name");
            return Some((caps[1].to_string(), bone_id));
        }
    }

    None
}

/// Whether a name carries a decodable identifier.
pub fn has_bone_id(name: &str) -> bool {
    split_bone_name(name).is_some()
}

/// A bone name split from its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoneName {
    pub name: String,
    pub bone_id: Option<u32>,
}

impl BoneName {
    pub fn new(name: impl Into<String>, bone_id: Option<u32>) -> Self {
        Self {
            name: name.into(),
            bone_id,
        }
    }

    /// Decode a combined name. Names without an identifier are kept as-is.
    pub fn parse(combined: &str) -> Self {
        match split_bone_name(combined) {
            Some((name, bone_id)) => Self::new(name, Some(bone_id)),
            None => Self::new(combined, None),
        }
    }

    /// The name without any `#` short names.
    pub fn base_name(&self) -> &str {
        self.name.split('#').next().unwrap_or_default()
    }

    /// The `#`-delimited short names following the base name.
    pub fn short_names(&self) -> impl Iterator<Item = &str> {
        self.name.split('#').skip(1)
    }

    /// The combined name to hand to the exporter.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bone_id {
            Some(bone_id) => write!(f, "({}){}", bone_id, self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join_bone_name("Arm", 0), "(0)Arm");
        assert_eq!(join_bone_name("Arm#a#b", 123), "(123)Arm#a#b");
    }

    #[test]
    fn test_roundtrip() {
        let names = ["Arm", "l_hand", "Spine 1", "root.001", "x", "Arm\nL", "\n"];
        let ids = [0, 1, 12, 999, u32::MAX];

        for name in names {
            for id in ids {
                assert_eq!(
                    split_bone_name(&join_bone_name(name, id)),
                    Some((name.to_string(), id)),
                    "{name} {id}"
                );
            }
        }
    }

    #[test]
    fn test_multiline_names() {
        assert_eq!(
            split_bone_name("(3)Arm\nL"),
            Some(("Arm\nL".to_string(), 3))
        );
        assert_eq!(
            split_bone_name("Arm\nL(3)"),
            Some(("Arm\nL".to_string(), 3))
        );
    }

    #[test]
    fn test_empty_name_does_not_roundtrip() {
        assert_eq!(split_bone_name(&join_bone_name("", 5)), None);
    }

    #[test]
    fn test_prefix_format() {
        assert_eq!(
            split_bone_name("(12)Arm#short1#short2"),
            Some(("Arm#short1#short2".to_string(), 12))
        );
    }

    #[test]
    fn test_legacy_suffix_format() {
        assert_eq!(
            split_bone_name("Arm#short1#short2(12)"),
            Some(("Arm#short1#short2".to_string(), 12))
        );
    }

    #[test]
    fn test_prefix_wins_over_suffix() {
        assert_eq!(
            split_bone_name("(1)Arm(2)"),
            Some(("Arm(2)".to_string(), 1))
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(split_bone_name("Arm"), None);
        assert_eq!(split_bone_name("(12)"), None);
        assert_eq!(split_bone_name("()Arm"), None);
        assert_eq!(split_bone_name("(a1)Arm"), None);
        assert_eq!(split_bone_name("x(12)y"), None);
        assert_eq!(split_bone_name(""), None);
        assert!(!has_bone_id("Arm(x)"));
    }

    #[test]
    fn test_overflow_falls_through() {
        assert_eq!(split_bone_name("(99999999999)Arm"), None);
        assert_eq!(
            split_bone_name("(99999999999)Arm(3)"),
            Some(("(99999999999)Arm".to_string(), 3))
        );
    }

    #[test]
    fn test_bone_name_parse() {
        let parsed = BoneName::parse("(4)Spine#sp#s");
        assert_eq!(parsed.bone_id, Some(4));
        assert_eq!(parsed.base_name(), "Spine");
        assert_eq!(parsed.short_names().collect::<Vec<_>>(), vec!["sp", "s"]);
        assert_eq!(parsed.encode(), "(4)Spine#sp#s");

        let plain = BoneName::parse("Spine");
        assert_eq!(plain, BoneName::new("Spine", None));
        assert_eq!(plain.to_string(), "Spine");
        assert_eq!(plain.short_names().count(), 0);
    }

    #[test]
    fn test_legacy_reencodes_as_prefix() {
        assert_eq!(BoneName::parse("Arm(7)").encode(), "(7)Arm");
    }
}
