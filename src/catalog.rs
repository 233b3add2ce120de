use crate::footprint::BuildingKind;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

/// Source of building dimensions, owned by the caller.
///
/// The planner treats the returned extents as opaque positive integers.
pub trait BuildingCatalog {
    /// Unrotated `(width, depth)` for a kind, or `None` if it is not listed.
    fn dimensions(&self, kind: BuildingKind) -> Option<(u32, u32)>;
}

/// A fixed kind -> dimensions table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    entries: FnvHashMap<BuildingKind, (u32, u32)>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: BuildingKind, width: u32, depth: u32) -> Self {
        self.entries.insert(kind, (width, depth));
        self
    }

    pub fn insert(&mut self, kind: BuildingKind, width: u32, depth: u32) {
        self.entries.insert(kind, (width, depth));
    }
}

impl BuildingCatalog for StaticCatalog {
    fn dimensions(&self, kind: BuildingKind) -> Option<(u32, u32)> {
        self.entries.get(&kind).copied()
    }
}
