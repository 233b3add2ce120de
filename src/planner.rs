//! Public placement API.
//!
//! `SettlementPlanner` owns the occupancy index for one settlement and is the
//! only thing that mutates it. Ordinary buildings go through the spiral block
//! search; mega structures are placed at caller-chosen coordinates and may
//! consume roads. Every operation either commits fully or leaves the index
//! untouched.

use crate::catalog::BuildingCatalog;
use crate::collision::CollisionPolicy;
use crate::config::PlannerConfig;
use crate::constants::*;
use crate::error::PlacementError;
use crate::footprint::*;
use crate::location::*;
use crate::occupancy::OccupancyIndex;
use crate::roads::*;
use crate::spiral::*;
use itertools::Itertools;
use log::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A request for an ordinary building, placed by block search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub kind: BuildingKind,
    pub width: u32,
    pub depth: u32,
}

impl PlacementRequest {
    pub fn new(kind: BuildingKind, width: u32, depth: u32) -> Self {
        PlacementRequest { kind, width, depth }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.depth as u64
    }
}

/// A request for a structure at exact coordinates. Roads under it are
/// consumed and a ring of road is laid around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MegaRequest {
    pub kind: BuildingKind,
    pub width: u32,
    pub depth: u32,
    pub position: TileCoord,
    #[serde(default)]
    pub rotation: Rotation,
}

/// Everything a successful placement changed.
///
/// The caller applies this to its authoritative footprint list: append
/// `new_roads` and `footprint`, and drop the road tiles in `removed_roads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub footprint: Footprint,
    /// Roads laid to keep the new footprint reachable.
    pub new_roads: Vec<Footprint>,
    /// Road tiles consumed by a mega structure. Always empty for block
    /// placements.
    pub removed_roads: Vec<TileCoord>,
}

/// Outcome of a batch request. Partial success is normal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchPlacement {
    /// Successful placements, in the order they were committed.
    pub placed: Vec<Placement>,
    /// Requests that could not be placed, with the reason.
    pub rejected: Vec<(PlacementRequest, PlacementError)>,
}

/// Placement engine for a single settlement.
#[derive(Clone, Debug, Default)]
pub struct SettlementPlanner {
    config: PlannerConfig,
    index: OccupancyIndex,
}

impl SettlementPlanner {
    /// Start with an empty grid.
    pub fn new(config: PlannerConfig) -> Self {
        SettlementPlanner {
            config,
            index: OccupancyIndex::new(),
        }
    }

    /// Start from an existing footprint list, e.g. one loaded from storage.
    pub fn with_footprints<'a, I>(config: PlannerConfig, footprints: I) -> Self
    where
        I: IntoIterator<Item = &'a Footprint>,
    {
        SettlementPlanner {
            config,
            index: OccupancyIndex::rebuild(footprints),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Read-only view of the occupancy index.
    pub fn index(&self) -> &OccupancyIndex {
        &self.index
    }

    /// Replace the index after the footprint list changed out of band.
    pub fn rebuild<'a, I>(&mut self, footprints: I)
    where
        I: IntoIterator<Item = &'a Footprint>,
    {
        self.index = OccupancyIndex::rebuild(footprints);
    }

    /// Preview check for a ghost footprint. Never mutates.
    pub fn can_place_at(
        &self,
        width: u32,
        depth: u32,
        position: TileCoord,
        rotation: Rotation,
        policy: CollisionPolicy,
    ) -> bool {
        width > 0
            && depth > 0
            && !self.index.is_blocked(
                position,
                width,
                depth,
                rotation,
                policy,
                self.config.map_limit,
            )
    }

    /// Place an ordinary building in the nearest block with room for it.
    pub fn place(
        &mut self,
        kind: BuildingKind,
        width: u32,
        depth: u32,
    ) -> Result<Placement, PlacementError> {
        let interior = BLOCK_INTERIOR as u32;
        if width == 0 || depth == 0 || width > interior || depth > interior {
            return Err(PlacementError::InvalidDimensions { width, depth });
        }

        let slot = find_block_slot(
            &self.index,
            width,
            depth,
            self.config.map_limit,
            self.config.spiral_iteration_limit,
        )
        .ok_or(PlacementError::NoSpaceFound { width, depth })?;

        let new_roads = ensure_block_roads(&mut self.index, slot.block, self.config.map_limit);

        let footprint = Footprint::new(kind, slot.position, width, depth, slot.rotation);
        self.index.mark_footprint(&footprint);

        debug!(
            "Placed {:?} {}x{} at ({}, {}) rotation {:?} in block ({}, {})",
            kind,
            width,
            depth,
            slot.position.x,
            slot.position.z,
            slot.rotation,
            slot.block.bx,
            slot.block.bz
        );

        Ok(Placement {
            footprint,
            new_roads,
            removed_roads: Vec::new(),
        })
    }

    pub fn place_request(
        &mut self,
        request: &PlacementRequest,
    ) -> Result<Placement, PlacementError> {
        self.place(request.kind, request.width, request.depth)
    }

    /// Place a building whose dimensions come from the caller's catalog.
    pub fn place_kind<C: BuildingCatalog + ?Sized>(
        &mut self,
        kind: BuildingKind,
        catalog: &C,
    ) -> Result<Placement, PlacementError> {
        let (width, depth) = catalog
            .dimensions(kind)
            .ok_or(PlacementError::UnknownKind(kind))?;
        self.place(kind, width, depth)
    }

    /// Place several buildings, largest area first.
    ///
    /// Ties keep their original order. Each request sees the grid left by the
    /// previous one; failures do not stop the batch.
    pub fn place_batch(&mut self, requests: &[PlacementRequest]) -> BatchPlacement {
        let mut outcome = BatchPlacement::default();

        for request in requests.iter().sorted_by_key(|r| Reverse(r.area())) {
            match self.place_request(request) {
                Ok(placement) => outcome.placed.push(placement),
                Err(err) => {
                    warn!("Batch request {:?} not placed: {}", request, err);
                    outcome.rejected.push((*request, err));
                }
            }
        }

        debug!(
            "Batch placed {} of {} requests",
            outcome.placed.len(),
            requests.len()
        );

        outcome
    }

    /// Place a structure at exact coordinates, consuming any roads it covers
    /// and paving a ring around it.
    pub fn place_mega(&mut self, request: &MegaRequest) -> Result<Placement, PlacementError> {
        let MegaRequest {
            kind,
            width,
            depth,
            position,
            rotation,
        } = *request;

        if width == 0 || depth == 0 {
            return Err(PlacementError::InvalidDimensions { width, depth });
        }

        if self.index.is_blocked(
            position,
            width,
            depth,
            rotation,
            CollisionPolicy::RoadOverridable,
            self.config.map_limit,
        ) {
            return Err(PlacementError::InvalidMegaPlacement {
                position,
                width,
                depth,
            });
        }

        let removed_roads = self
            .index
            .unmark_roads_overlapping(position, width, depth, rotation);

        let footprint = Footprint::new(kind, position, width, depth, rotation);
        self.index.mark_footprint(&footprint);

        let new_roads = regenerate_ring(
            &mut self.index,
            position,
            width,
            depth,
            rotation,
            self.config.map_limit,
        );

        debug!(
            "Placed {:?} {}x{} structure at ({}, {}), consumed {} roads, laid {}",
            kind,
            width,
            depth,
            position.x,
            position.z,
            removed_roads.len(),
            new_roads.len()
        );

        Ok(Placement {
            footprint,
            new_roads,
            removed_roads,
        })
    }
}
