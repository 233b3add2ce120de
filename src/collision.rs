use crate::footprint::rect_tiles;
use crate::location::*;
use crate::occupancy::OccupancyIndex;
use serde::{Deserialize, Serialize};

/// How road tiles are treated when testing a candidate rectangle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Any occupied tile blocks, roads included. Used for ordinary buildings.
    Strict,
    /// Road tiles count as free. Used for mega structures, which consume the
    /// roads they cover.
    RoadOverridable,
}

/// True if the rectangle `[x, x + w) x [z, z + d)` stays inside
/// `[-map_limit, map_limit]` on both axes.
pub fn rect_in_bounds(
    position: TileCoord,
    width: u32,
    depth: u32,
    rotation: Rotation,
    map_limit: i32,
) -> bool {
    let (w, d) = effective_dimensions(width, depth, rotation);
    let limit = map_limit as i64;
    let (x, z) = (position.x as i64, position.z as i64);

    x >= -limit && z >= -limit && x + w as i64 - 1 <= limit && z + d as i64 - 1 <= limit
}

impl OccupancyIndex {
    /// Collision check shared by block search, mega placement and previews.
    ///
    /// Out-of-bounds rectangles are always blocked. Otherwise the first
    /// occupied tile blocks, unless `policy` lets roads through and that tile
    /// is a road.
    pub fn is_blocked(
        &self,
        position: TileCoord,
        width: u32,
        depth: u32,
        rotation: Rotation,
        policy: CollisionPolicy,
        map_limit: i32,
    ) -> bool {
        if !rect_in_bounds(position, width, depth, rotation, map_limit) {
            return true;
        }

        rect_tiles(position, width, depth, rotation).any(|tile| {
            self.is_occupied(tile)
                && !(policy == CollisionPolicy::RoadOverridable && self.is_road(tile))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::*;

    const LIMIT: i32 = 10;

    fn sample_index() -> OccupancyIndex {
        OccupancyIndex::rebuild(&vec![
            Footprint::road(TileCoord::new(0, 0)),
            Footprint::road(TileCoord::new(1, 0)),
            Footprint::new(BuildingKind::Industrial, TileCoord::new(3, 3), 1, 1, Rotation::R0),
        ])
    }

    #[test]
    fn rejects_rectangles_leaving_the_world() {
        let index = OccupancyIndex::new();
        let blocked = |x: i32, z: i32, w: u32, d: u32, rotation: Rotation| {
            index.is_blocked(
                TileCoord::new(x, z),
                w,
                d,
                rotation,
                CollisionPolicy::Strict,
                LIMIT,
            )
        };

        assert!(!blocked(9, 9, 2, 2, Rotation::R0));
        assert!(blocked(10, 9, 2, 2, Rotation::R0));
        assert!(!blocked(-10, -10, 1, 1, Rotation::R0));
        assert!(blocked(-11, 0, 1, 1, Rotation::R0));
        assert!(blocked(10, 0, 2, 1, Rotation::R0));
        assert!(!blocked(10, 0, 2, 1, Rotation::R90));
    }

    #[test]
    fn bounds_helper_is_inclusive() {
        assert!(rect_in_bounds(TileCoord::new(-10, 7), 1, 4, Rotation::R0, LIMIT));
        assert!(!rect_in_bounds(TileCoord::new(-10, 7), 1, 5, Rotation::R0, LIMIT));
        assert!(rect_in_bounds(TileCoord::new(7, -10), 1, 4, Rotation::R90, LIMIT));
    }

    #[test]
    fn strict_policy_blocks_on_roads() {
        let index = sample_index();
        let strict = CollisionPolicy::Strict;

        assert!(index.is_blocked(TileCoord::new(0, 0), 2, 1, Rotation::R0, strict, LIMIT));
        assert!(!index.is_blocked(TileCoord::new(0, 1), 2, 1, Rotation::R0, strict, LIMIT));
    }

    #[test]
    fn road_overridable_policy_ignores_roads_only() {
        let index = sample_index();

        assert!(!index.is_blocked(
            TileCoord::new(0, 0),
            2,
            2,
            Rotation::R0,
            CollisionPolicy::RoadOverridable,
            LIMIT
        ));
        assert!(index.is_blocked(
            TileCoord::new(0, 0),
            4,
            4,
            Rotation::R0,
            CollisionPolicy::RoadOverridable,
            LIMIT
        ));
    }
}
