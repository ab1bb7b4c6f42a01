//! NIFL color variant container.

use std::fs;
use std::path::Path;

use pso2_common::ChunkReader;
use rustc_hash::FxHashMap;

use crate::color_set::{RawColorSet, COLOR_SET_SIZE};
use crate::{ColorSet, Error, Result};

/// Magic bytes at the start of the container.
const NIFL_MAGIC: &[u8; 4] = b"NIFL";

/// Magic bytes at the start of the relocation section.
const REL0_MAGIC: &[u8; 4] = b"REL0";

/// Reader for NIFL color variant containers.
pub struct Ccl;

impl Ccl {
    /// Check if data starts with the NIFL magic.
    pub fn is_ccl(data: &[u8]) -> bool {
        data.len() >= NIFL_MAGIC.len() && &data[..NIFL_MAGIC.len()] == NIFL_MAGIC
    }

    /// Read and parse a container file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ColorSetTable> {
        let data = fs::read(path.as_ref())?;
        Self::parse(&data)
    }

    /// Parse a container from bytes.
    ///
    /// Any structural problem fails the whole read; no partial table is
    /// returned.
    pub fn parse(data: &[u8]) -> Result<ColorSetTable> {
        let mut reader = ChunkReader::new(data);

        reader.expect_magic(NIFL_MAGIC).map_err(|e| match e {
            pso2_common::Error::InvalidMagic { actual, .. } => Error::InvalidMagic { actual },
            e => e.into(),
        })?;

        // The NIFL header body is not needed, only its size
        let header_size = reader.read_u32()?;
        reader.seek_relative(header_size as usize)?;

        let section_start = reader.position();

        reader.expect_magic(REL0_MAGIC).map_err(|e| match e {
            pso2_common::Error::InvalidMagic { actual, .. } => Error::MissingRel0Header { actual },
            e => e.into(),
        })?;

        reader.seek_relative(4)?;
        let rel0_size = reader.read_u32()?;
        reader.seek_relative(8)?;

        let data_offset = reader.position() - section_start;
        let record_count = record_count(rel0_size, data_offset)?;

        tracing::debug!(
            header_size,
            rel0_size,
            record_count,
            "reading color variant records"
        );

        let mut sets = Vec::with_capacity(record_count.min(reader.remaining() / COLOR_SET_SIZE));
        for _ in 0..record_count {
            let raw: RawColorSet = reader.read_struct()?;
            sets.push(ColorSet::from_raw(raw));
        }

        Ok(ColorSetTable::from_sets(sets))
    }
}

fn record_count(rel0_size: u32, data_offset: usize) -> Result<usize> {
    let corrupt = || Error::CorruptRecordCount {
        size: rel0_size,
        data_offset,
    };

    let payload = (rel0_size as usize).checked_sub(data_offset).ok_or_else(corrupt)?;
    if payload % COLOR_SET_SIZE != 0 {
        return Err(corrupt());
    }

    Ok(payload / COLOR_SET_SIZE)
}

/// Color variants of one container, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSetTable {
    sets: FxHashMap<u32, ColorSet>,
}

impl ColorSetTable {
    /// Build a table from records in file order. Later duplicates replace
    /// earlier ones.
    pub fn from_sets<I: IntoIterator<Item = ColorSet>>(sets: I) -> Self {
        let mut map = FxHashMap::default();
        for set in sets {
            if map.insert(set.id, set).is_some() {
                tracing::debug!(id = set.id, "duplicate color set id, keeping the later record");
            }
        }
        Self { sets: map }
    }

    /// Get a color set by id.
    pub fn get(&self, id: u32) -> Option<&ColorSet> {
        self.sets.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.sets.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate over all sets in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorSet> {
        self.sets.values()
    }

    /// All ids in ascending order.
    pub fn ids_sorted(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.sets.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
