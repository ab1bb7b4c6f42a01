//! Color channel slots.
//!
//! Each wearable layer has a primary and secondary color. An item only
//! exposes the pair belonging to its own layer, and the selected values are
//! published on the scene under a fixed custom property name so later
//! imports can pick them up.

use std::fmt;

use crate::ObjectType;

/// One of the six wear-layer color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorChannel {
    Outer1,
    Outer2,
    Base1,
    Base2,
    Inner1,
    Inner2,
}

/// Static description of a [`ColorChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChannelInfo {
    pub channel: ColorChannel,
    /// Property key used by color pickers.
    pub prop: &'static str,
    /// Display label.
    pub name: &'static str,
    pub description: &'static str,
    /// Scene-level property holding the value when no item-specific
    /// variant is selected.
    pub custom_property_name: &'static str,
}

/// The six slot definitions, indexed by `ColorChannel as usize`.
pub static COLOR_CHANNELS: [ColorChannelInfo; 6] = [
    ColorChannelInfo {
        channel: ColorChannel::Outer1,
        prop: "outer_color_1",
        name: "Outerwear Color 1",
        description: "Primary outerwear color",
        custom_property_name: "pso2_outer_color_1",
    },
    ColorChannelInfo {
        channel: ColorChannel::Outer2,
        prop: "outer_color_2",
        name: "Outerwear Color 2",
        description: "Secondary outerwear color",
        custom_property_name: "pso2_outer_color_2",
    },
    ColorChannelInfo {
        channel: ColorChannel::Base1,
        prop: "base_color_1",
        name: "Basewear Color 1",
        description: "Primary basewear color",
        custom_property_name: "pso2_base_color_1",
    },
    ColorChannelInfo {
        channel: ColorChannel::Base2,
        prop: "base_color_2",
        name: "Basewear Color 2",
        description: "Secondary basewear color",
        custom_property_name: "pso2_base_color_2",
    },
    ColorChannelInfo {
        channel: ColorChannel::Inner1,
        prop: "inner_color_1",
        name: "Innerwear Color 1",
        description: "Primary innerwear color",
        custom_property_name: "pso2_inner_color_1",
    },
    ColorChannelInfo {
        channel: ColorChannel::Inner2,
        prop: "inner_color_2",
        name: "Innerwear Color 2",
        description: "Secondary innerwear color",
        custom_property_name: "pso2_inner_color_2",
    },
];

impl ColorChannel {
    /// All slots in table order.
    pub const ALL: [ColorChannel; 6] = [
        Self::Outer1,
        Self::Outer2,
        Self::Base1,
        Self::Base2,
        Self::Inner1,
        Self::Inner2,
    ];

    /// Get the static slot definition.
    pub fn info(&self) -> &'static ColorChannelInfo {
        &COLOR_CHANNELS[*self as usize]
    }

    pub fn prop(&self) -> &'static str {
        self.info().prop
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn custom_property_name(&self) -> &'static str {
        self.info().custom_property_name
    }

    /// Look up a slot by its property key.
    pub fn from_prop(prop: &str) -> Option<Self> {
        COLOR_CHANNELS
            .iter()
            .find(|info| info.prop == prop)
            .map(|info| info.channel)
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get the pair of slots a color variant sets for an item category.
///
/// Returns `None` for categories that have no variant colors (accessories,
/// face parts, paints, etc.).
pub fn channels_for(object_type: ObjectType) -> Option<(ColorChannel, ColorChannel)> {
    match object_type {
        ObjectType::Outerwear => Some((ColorChannel::Outer1, ColorChannel::Outer2)),
        ObjectType::Basewear
        | ObjectType::Costume
        | ObjectType::CastBody
        | ObjectType::CastArms
        | ObjectType::CastLegs => Some((ColorChannel::Base1, ColorChannel::Base2)),
        ObjectType::Innerwear => Some((ColorChannel::Inner1, ColorChannel::Inner2)),
        _ => None,
    }
}
