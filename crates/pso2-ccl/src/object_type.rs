//! Item catalog categories.

use std::fmt;
use std::str::FromStr;

/// Coarse category of an item in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObjectType {
    Accessory,
    Basewear,
    Bodypaint,
    CastArms,
    CastBody,
    CastLegs,
    Costume,
    Ear,
    Eye,
    Eyebrow,
    Eyelash,
    Face,
    FaceTexture,
    Facepaint,
    Hair,
    Horn,
    Innerwear,
    Outerwear,
    Skin,
    Sticker,
    Teeth,
}

impl ObjectType {
    /// All categories in declaration order.
    pub const ALL: [ObjectType; 21] = [
        Self::Accessory,
        Self::Basewear,
        Self::Bodypaint,
        Self::CastArms,
        Self::CastBody,
        Self::CastLegs,
        Self::Costume,
        Self::Ear,
        Self::Eye,
        Self::Eyebrow,
        Self::Eyelash,
        Self::Face,
        Self::FaceTexture,
        Self::Facepaint,
        Self::Hair,
        Self::Horn,
        Self::Innerwear,
        Self::Outerwear,
        Self::Skin,
        Self::Sticker,
        Self::Teeth,
    ];

    /// Snake case key, as used on the command line and in JSON.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Accessory => "accessory",
            Self::Basewear => "basewear",
            Self::Bodypaint => "bodypaint",
            Self::CastArms => "cast_arms",
            Self::CastBody => "cast_body",
            Self::CastLegs => "cast_legs",
            Self::Costume => "costume",
            Self::Ear => "ear",
            Self::Eye => "eye",
            Self::Eyebrow => "eyebrow",
            Self::Eyelash => "eyelash",
            Self::Face => "face",
            Self::FaceTexture => "face_texture",
            Self::Facepaint => "facepaint",
            Self::Hair => "hair",
            Self::Horn => "horn",
            Self::Innerwear => "innerwear",
            Self::Outerwear => "outerwear",
            Self::Skin => "skin",
            Self::Sticker => "sticker",
            Self::Teeth => "teeth",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Accessory => "Accessory",
            Self::Basewear => "Basewear",
            Self::Bodypaint => "Bodypaint",
            Self::CastArms => "Cast Arms",
            Self::CastBody => "Cast Body",
            Self::CastLegs => "Cast Legs",
            Self::Costume => "Costume",
            Self::Ear => "Ears",
            Self::Eye => "Eyes",
            Self::Eyebrow => "Eyebrows",
            Self::Eyelash => "Eyelashes",
            Self::Face => "Face",
            Self::FaceTexture => "Face Texture",
            Self::Facepaint => "Facepaint",
            Self::Hair => "Hair",
            Self::Horn => "Horns",
            Self::Innerwear => "Innerwear",
            Self::Outerwear => "Outerwear",
            Self::Skin => "Skin",
            Self::Sticker => "Sticker",
            Self::Teeth => "Teeth",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown object type: {0}")]
pub struct ParseObjectTypeError(pub String);

impl FromStr for ObjectType {
    type Err = ParseObjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| ParseObjectTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for ty in ObjectType::ALL {
            assert_eq!(ty.key().parse::<ObjectType>(), Ok(ty));
        }
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!("Cast-Body".parse::<ObjectType>(), Ok(ObjectType::CastBody));
        assert_eq!("face texture".parse::<ObjectType>(), Ok(ObjectType::FaceTexture));
        assert!("weapon".parse::<ObjectType>().is_err());
    }
}
