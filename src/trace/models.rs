//! Data model shared by every pipeline stage.
//!
//! A trace capture interleaves packets from many tiles and from four
//! different trace units. Everything downstream of the packet demultiplexer
//! is keyed by a [`LaneKey`]: the trace unit kind plus the tile it lives in.

use std::fmt;

use indexmap::IndexMap;

/// Physical tile coordinates.
///
/// `col` is signed because the colshift correction applied to MLIR column
/// numbers may move a tile to a negative column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileLocation {
    pub row: i32,
    pub col: i32,
}

impl TileLocation {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for TileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Kind of trace unit a packet stream originates from.
///
/// The discriminant is the packet type code carried in the stream header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TraceType {
    Core = 0,
    Memory = 1,
    Shim = 2,
    MemTile = 3,
}

impl TraceType {
    /// All trace types in packet type code order.
    pub const ALL: [TraceType; 4] = [
        TraceType::Core,
        TraceType::Memory,
        TraceType::Shim,
        TraceType::MemTile,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(TraceType::Core),
            1 => Some(TraceType::Memory),
            2 => Some(TraceType::Shim),
            3 => Some(TraceType::MemTile),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    /// Prefix used when naming the timeline process of a lane.
    pub fn label(self) -> &'static str {
        match self {
            TraceType::Core => "core_trace",
            TraceType::Memory => "mem_trace",
            TraceType::Shim => "shim_trace",
            TraceType::MemTile => "memtile_trace",
        }
    }
}

impl fmt::Display for TraceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one decode lane: a trace unit in a given tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LaneKey {
    pub trace_type: TraceType,
    pub tile: TileLocation,
}

impl LaneKey {
    pub fn new(trace_type: TraceType, tile: TileLocation) -> Self {
        Self { trace_type, tile }
    }
}

impl fmt::Display for LaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tile {}", self.trace_type, self.tile)
    }
}

/// Map from [`LaneKey`] to per-lane data.
///
/// Lanes remember the order in which they were first seen. Ordered traversal
/// visits trace types in code order and, within a trace type, tiles in
/// discovery order. Process ids and the final JSON depend on this order, so
/// every stage iterates through [`LaneMap::iter`].
#[derive(Clone, Debug)]
pub struct LaneMap<T> {
    lanes: IndexMap<LaneKey, T>,
}

impl<T> LaneMap<T> {
    pub fn new() -> Self {
        Self {
            lanes: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &LaneKey) -> Option<&T> {
        self.lanes.get(key)
    }

    pub fn get_mut(&mut self, key: &LaneKey) -> Option<&mut T> {
        self.lanes.get_mut(key)
    }

    pub fn contains(&self, key: &LaneKey) -> bool {
        self.lanes.contains_key(key)
    }

    pub fn insert(&mut self, key: LaneKey, value: T) -> Option<T> {
        self.lanes.insert(key, value)
    }

    /// Get the lane's value, registering the lane with `init` on first sight.
    pub fn get_or_insert_with(&mut self, key: LaneKey, init: impl FnOnce() -> T) -> &mut T {
        self.lanes.entry(key).or_insert_with(init)
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Iterate lanes by trace type, then by discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&LaneKey, &T)> {
        TraceType::ALL.into_iter().flat_map(move |trace_type| {
            self.lanes
                .iter()
                .filter(move |(key, _)| key.trace_type == trace_type)
        })
    }

    /// Ordered keys, see [`LaneMap::iter`].
    pub fn keys(&self) -> impl Iterator<Item = &LaneKey> {
        self.iter().map(|(key, _)| key)
    }

    /// Transform every lane's value, keeping lane order.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&LaneKey, &T) -> Result<U, E>) -> Result<LaneMap<U>, E> {
        let mut out = LaneMap::new();
        for (key, value) in self.iter() {
            out.insert(*key, f(key, value)?);
        }
        Ok(out)
    }
}

impl<T> Default for LaneMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_location_display() {
        assert_eq!(TileLocation::new(2, 0).to_string(), "2,0");
        assert_eq!(TileLocation::new(0, -1).to_string(), "0,-1");
    }

    #[test]
    fn test_trace_type_codes() {
        for trace_type in TraceType::ALL {
            assert_eq!(TraceType::from_code(trace_type.code()), Some(trace_type));
        }
        assert_eq!(TraceType::from_code(4), None);
        assert_eq!(TraceType::from_code(7), None);
    }

    #[test]
    fn test_lane_map_orders_by_type_then_discovery() {
        let mut map = LaneMap::new();
        map.insert(LaneKey::new(TraceType::Shim, TileLocation::new(0, 1)), 'a');
        map.insert(LaneKey::new(TraceType::Core, TileLocation::new(3, 0)), 'b');
        map.insert(LaneKey::new(TraceType::Core, TileLocation::new(2, 0)), 'c');
        map.insert(LaneKey::new(TraceType::Memory, TileLocation::new(2, 0)), 'd');

        let order: Vec<char> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(order, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_lane_map_get_or_insert_keeps_first_position() {
        let mut map: LaneMap<Vec<u32>> = LaneMap::new();
        let first = LaneKey::new(TraceType::Core, TileLocation::new(2, 0));
        let second = LaneKey::new(TraceType::Core, TileLocation::new(3, 0));
        map.get_or_insert_with(first, Vec::new).push(1);
        map.get_or_insert_with(second, Vec::new).push(2);
        map.get_or_insert_with(first, Vec::new).push(3);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![first, second]);
        assert_eq!(map.get(&first), Some(&vec![1, 3]));
    }
}
