//! Color set records.

use pso2_common::Color;
use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

use crate::channel::{channels_for, ColorChannel};
use crate::ObjectType;

/// Size of a single color set record in bytes.
pub const COLOR_SET_SIZE: usize = std::mem::size_of::<RawColorSet>();

/// On-disk layout of a color set record.
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub(crate) struct RawColorSet {
    id: U32,
    outerwear1: U32,
    outerwear2: U32,
    basewear1: U32,
    basewear2: U32,
    innerwear1: U32,
    innerwear2: U32,
}

/// One color variant of an item.
///
/// Colors are packed `0xAARRGGBB` values; use [`Color::from_packed`] or
/// [`ColorSet::colors_for`] to get normalized components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSet {
    pub id: u32,
    pub outerwear1: u32,
    pub outerwear2: u32,
    pub basewear1: u32,
    pub basewear2: u32,
    pub innerwear1: u32,
    pub innerwear2: u32,
}

impl ColorSet {
    pub(crate) fn from_raw(raw: RawColorSet) -> Self {
        Self {
            id: raw.id.get(),
            outerwear1: raw.outerwear1.get(),
            outerwear2: raw.outerwear2.get(),
            basewear1: raw.basewear1.get(),
            basewear2: raw.basewear2.get(),
            innerwear1: raw.innerwear1.get(),
            innerwear2: raw.innerwear2.get(),
        }
    }
}

impl ColorSet {
    pub fn outerwear_colors(&self) -> (u32, u32) {
        (self.outerwear1, self.outerwear2)
    }

    pub fn basewear_colors(&self) -> (u32, u32) {
        (self.basewear1, self.basewear2)
    }

    pub fn innerwear_colors(&self) -> (u32, u32) {
        (self.innerwear1, self.innerwear2)
    }

    /// Get the packed value stored for a slot.
    pub fn color(&self, channel: ColorChannel) -> u32 {
        match channel {
            ColorChannel::Outer1 => self.outerwear1,
            ColorChannel::Outer2 => self.outerwear2,
            ColorChannel::Base1 => self.basewear1,
            ColorChannel::Base2 => self.basewear2,
            ColorChannel::Inner1 => self.innerwear1,
            ColorChannel::Inner2 => self.innerwear2,
        }
    }

    /// Get the slots this variant sets for an item category.
    pub fn get_channels(&self, object_type: ObjectType) -> Option<(ColorChannel, ColorChannel)> {
        channels_for(object_type)
    }

    /// Get the two decoded colors for an item category, paired with their slots.
    pub fn colors_for(&self, object_type: ObjectType) -> Option<[(ColorChannel, Color); 2]> {
        let (first, second) = self.get_channels(object_type)?;
        Some([
            (first, Color::from_packed(self.color(first))),
            (second, Color::from_packed(self.color(second))),
        ])
    }
}
