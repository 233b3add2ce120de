//! Occupancy index: derived tile sets used for collision detection.
//!
//! `occupied` holds every tile covered by any footprint, `roads` the subset
//! covered by road footprints. Both are reconstructible from the footprint
//! list at any time and are only ever extended by placement, except for the
//! road-removal step of mega structure placement.

use crate::footprint::*;
use crate::location::*;
use fnv::FnvHashSet;
use log::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupancyIndex {
    occupied: FnvHashSet<TileCoord>,
    roads: FnvHashSet<TileCoord>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a complete footprint list.
    pub fn rebuild<'a, I>(footprints: I) -> Self
    where
        I: IntoIterator<Item = &'a Footprint>,
    {
        let mut index = OccupancyIndex::new();
        for footprint in footprints {
            index.mark(
                footprint.position,
                footprint.width,
                footprint.depth,
                footprint.rotation,
                footprint.kind,
            );
        }
        index
    }

    /// Insert the footprint's tiles. Never removes anything; the caller has
    /// already checked for collisions.
    pub fn mark(
        &mut self,
        position: TileCoord,
        width: u32,
        depth: u32,
        rotation: Rotation,
        kind: BuildingKind,
    ) {
        for tile in rect_tiles(position, width, depth, rotation) {
            self.occupied.insert(tile);
            if kind.is_road() {
                self.roads.insert(tile);
            }
        }
    }

    pub fn mark_footprint(&mut self, footprint: &Footprint) {
        self.mark(
            footprint.position,
            footprint.width,
            footprint.depth,
            footprint.rotation,
            footprint.kind,
        );
    }

    /// Remove every road tile inside the rectangle and return the removed
    /// tiles. Non-road tiles are never removed: finding one here means a
    /// collision check was skipped, so it is logged and left in place.
    pub fn unmark_roads_overlapping(
        &mut self,
        position: TileCoord,
        width: u32,
        depth: u32,
        rotation: Rotation,
    ) -> Vec<TileCoord> {
        let mut removed = Vec::new();

        for tile in rect_tiles(position, width, depth, rotation) {
            if self.roads.remove(&tile) {
                self.occupied.remove(&tile);
                removed.push(tile);
            } else if self.occupied.contains(&tile) {
                error!(
                    "Refusing to clear non-road tile ({}, {}) inside {}x{} rectangle at ({}, {})",
                    tile.x, tile.z, width, depth, position.x, position.z
                );
            }
        }

        removed
    }

    #[inline]
    pub fn is_occupied(&self, tile: TileCoord) -> bool {
        self.occupied.contains(&tile)
    }

    #[inline]
    pub fn is_road(&self, tile: TileCoord) -> bool {
        self.roads.contains(&tile)
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn occupied_tiles(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.occupied.iter().copied()
    }

    pub fn road_tiles(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.roads.iter().copied()
    }

    pub(crate) fn roads(&self) -> &FnvHashSet<TileCoord> {
        &self.roads
    }
}
