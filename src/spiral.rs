//! Block search: walks block coordinates in an expanding square spiral from
//! the origin block and returns the first interior slot that fits.
//!
//! The traversal order is part of the engine's observable behavior (spawn
//! positions depend on it) and must not change.

use crate::collision::CollisionPolicy;
use crate::constants::*;
use crate::location::*;
use crate::occupancy::OccupancyIndex;
use log::*;
use serde::{Deserialize, Serialize};

/// Expanding square spiral over block coordinates.
///
/// Each iteration walks one horizontal leg then one vertical leg, flips the
/// direction and grows the leg length. Yields `(0,0), (1,0), (1,1), (0,1),
/// (-1,1), (-1,0), (-1,-1), (0,-1), (1,-1), (2,-1), ...` and stops after
/// `iteration_limit` iterations.
#[derive(Clone, Debug)]
pub struct SpiralIter {
    bx: i32,
    bz: i32,
    direction: i32,
    magnitude: i32,
    leg: Leg,
    iterations_left: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Leg {
    Horizontal,
    Vertical,
}

impl SpiralIter {
    pub fn new(iteration_limit: u32) -> Self {
        SpiralIter {
            bx: 0,
            bz: 0,
            direction: 1,
            magnitude: 1,
            leg: Leg::Horizontal,
            iterations_left: iteration_limit,
        }
    }
}

impl Iterator for SpiralIter {
    type Item = BlockCoord;

    fn next(&mut self) -> Option<BlockCoord> {
        while self.iterations_left > 0 {
            match self.leg {
                Leg::Horizontal => {
                    if 2 * self.bx * self.direction < self.magnitude {
                        let block = BlockCoord::new(self.bx, self.bz);
                        self.bx += self.direction;
                        return Some(block);
                    }
                    self.leg = Leg::Vertical;
                }
                Leg::Vertical => {
                    if 2 * self.bz * self.direction < self.magnitude {
                        let block = BlockCoord::new(self.bx, self.bz);
                        self.bz += self.direction;
                        return Some(block);
                    }
                    self.direction = -self.direction;
                    self.magnitude += 1;
                    self.leg = Leg::Horizontal;
                    self.iterations_left -= 1;
                }
            }
        }

        None
    }
}

/// A legal interior slot found by the block search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSlot {
    pub block: BlockCoord,
    pub position: TileCoord,
    pub rotation: Rotation,
}

/// Test a single block's interior for a `width` x `depth` footprint.
///
/// Unrotated offsets are tried first, then (for non-square footprints) the
/// quarter-turned variant. Offsets are walked x-major within each pass; the
/// first fit wins. Rotations 2 and 3 cover the same tiles as 0 and 1 and are
/// never tried.
pub fn try_block(
    index: &OccupancyIndex,
    block: BlockCoord,
    width: u32,
    depth: u32,
    map_limit: i32,
) -> Option<(TileCoord, Rotation)> {
    let origin = block.interior_origin();

    let mut passes = vec![Rotation::R0];
    if width != depth {
        passes.push(Rotation::R90);
    }

    for rotation in passes {
        let (w, d) = effective_dimensions(width, depth, rotation);
        if w > BLOCK_INTERIOR as u32 || d > BLOCK_INTERIOR as u32 {
            continue;
        }
        let max_lx = BLOCK_INTERIOR - w as i32;
        let max_lz = BLOCK_INTERIOR - d as i32;

        for lx in 0..=max_lx {
            for lz in 0..=max_lz {
                let position = origin + (lx, lz);
                if !index.is_blocked(
                    position,
                    width,
                    depth,
                    rotation,
                    CollisionPolicy::Strict,
                    map_limit,
                ) {
                    return Some((position, rotation));
                }
            }
        }
    }

    None
}

/// Walk the spiral until a block accepts the footprint.
///
/// Returns `None` once `iteration_limit` spiral iterations are exhausted.
/// That is an ordinary outcome, not an error.
pub fn find_block_slot(
    index: &OccupancyIndex,
    width: u32,
    depth: u32,
    map_limit: i32,
    iteration_limit: u32,
) -> Option<BlockSlot> {
    let mut blocks_tested = 0usize;

    for block in SpiralIter::new(iteration_limit) {
        blocks_tested += 1;

        if let Some((position, rotation)) = try_block(index, block, width, depth, map_limit) {
            debug!(
                "Found {}x{} slot in block ({}, {}) after testing {} blocks",
                width, depth, block.bx, block.bz, blocks_tested
            );
            return Some(BlockSlot {
                block,
                position,
                rotation,
            });
        }

        trace!(
            "Block ({}, {}) rejected {}x{} footprint",
            block.bx,
            block.bz,
            width,
            depth
        );
    }

    debug!(
        "No slot for {}x{} footprint after testing {} blocks",
        width, depth, blocks_tested
    );

    None
}
