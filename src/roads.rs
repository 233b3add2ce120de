//! Road maintenance: paves block perimeters and mega structure rings, and
//! answers connectivity questions about the resulting road network.
//!
//! Paving is purely additive. A tile that is already occupied, by a road or
//! anything else, is left alone, so every routine here is idempotent.

use crate::footprint::*;
use crate::location::*;
use crate::occupancy::OccupancyIndex;
use fnv::FnvHashSet;
use log::*;
use pathfinding::undirected::connected_components::connected_components;

/// Commit a 1x1 road on every free, in-bounds tile yielded by `candidates`.
/// Returns the roads that were added.
fn pave<I>(index: &mut OccupancyIndex, candidates: I, map_limit: i32) -> Vec<Footprint>
where
    I: IntoIterator<Item = TileCoord>,
{
    let mut added = Vec::new();

    for tile in candidates {
        if index.is_occupied(tile) {
            continue;
        }
        if !tile.in_bounds(map_limit) {
            warn!(
                "Skipping road at ({}, {}) outside world limit {}",
                tile.x, tile.z, map_limit
            );
            continue;
        }

        let road = Footprint::road(tile);
        index.mark_footprint(&road);
        added.push(road);
    }

    added
}

/// Guarantee the block's perimeter is paved.
///
/// Called for every block that receives a building so newly built interiors
/// are always reachable from the road grid.
pub fn ensure_block_roads(
    index: &mut OccupancyIndex,
    block: BlockCoord,
    map_limit: i32,
) -> Vec<Footprint> {
    let added = pave(index, block.perimeter(), map_limit);

    if !added.is_empty() {
        debug!(
            "Paved {} perimeter tiles of block ({}, {})",
            added.len(),
            block.bx,
            block.bz
        );
    }

    added
}

/// Pave the one-tile ring surrounding a rectangle.
///
/// Used after a mega structure has consumed the roads under it, so the
/// structure stays reachable.
pub fn regenerate_ring(
    index: &mut OccupancyIndex,
    position: TileCoord,
    width: u32,
    depth: u32,
    rotation: Rotation,
    map_limit: i32,
) -> Vec<Footprint> {
    pave(index, ring_tiles(position, width, depth, rotation), map_limit)
}

/// True if every in-bounds perimeter tile of the block is a road.
pub fn block_is_paved(index: &OccupancyIndex, block: BlockCoord, map_limit: i32) -> bool {
    block
        .perimeter()
        .filter(|tile| tile.in_bounds(map_limit))
        .all(|tile| index.is_road(tile))
}

/// Cardinally connected groups of road tiles, largest first.
pub fn road_components(index: &OccupancyIndex) -> Vec<FnvHashSet<TileCoord>> {
    let roads = index.roads();

    let mut starts: Vec<TileCoord> = roads.iter().copied().collect();
    starts.sort();

    let mut components: Vec<FnvHashSet<TileCoord>> =
        connected_components(&starts, |tile: &TileCoord| {
            tile.neighbors_4()
                .filter(|neighbor| roads.contains(neighbor))
                .collect::<Vec<_>>()
        })
        .into_iter()
        .map(|component| component.into_iter().collect())
        .collect();

    components.sort_by_key(|component| std::cmp::Reverse(component.len()));
    components
}

/// True if at least one tile cardinally adjacent to the footprint (and not
/// part of it) is a road.
pub fn is_road_accessible(index: &OccupancyIndex, footprint: &Footprint) -> bool {
    footprint
        .tiles()
        .flat_map(|tile| tile.neighbors_4())
        .filter(|neighbor| !footprint.contains(*neighbor))
        .any(|neighbor| index.is_road(neighbor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn block_roads_are_idempotent() {
        let mut index = OccupancyIndex::new();
        let block = BlockCoord::new(2, -1);

        let first = ensure_block_roads(&mut index, block, MAP_LIMIT);
        let after_first = index.clone();
        let second = ensure_block_roads(&mut index, block, MAP_LIMIT);

        assert_eq!(first.len(), 4 * BLOCK_SIZE as usize);
        assert!(second.is_empty());
        assert_eq!(index, after_first);
        assert!(block_is_paved(&index, block, MAP_LIMIT));
        assert!(!index.is_occupied(block.interior_origin()));
    }

    #[test]
    fn block_roads_leave_occupied_tiles_alone() {
        let mut index = OccupancyIndex::new();
        index.mark(TileCoord::new(0, 0), 1, 1, Rotation::R0, BuildingKind::Civic);

        let added = ensure_block_roads(&mut index, BlockCoord::new(0, 0), MAP_LIMIT);

        assert_eq!(added.len(), 4 * BLOCK_SIZE as usize - 1);
        assert!(!index.is_road(TileCoord::new(0, 0)));
        assert!(index.is_occupied(TileCoord::new(0, 0)));
    }

    #[test]
    fn adjacent_blocks_share_an_edge() {
        let mut index = OccupancyIndex::new();
        ensure_block_roads(&mut index, BlockCoord::new(0, 0), MAP_LIMIT);
        let added = ensure_block_roads(&mut index, BlockCoord::new(1, 0), MAP_LIMIT);

        assert_eq!(added.len(), 4 * BLOCK_SIZE as usize - (BLOCK_SIZE as usize + 1));
        assert_eq!(road_components(&index).len(), 1);
    }

    #[test]
    fn roads_are_clipped_to_the_world() {
        let mut index = OccupancyIndex::new();
        let added = ensure_block_roads(&mut index, BlockCoord::new(-1, 0), 2);

        assert!(added.iter().all(|road| road.position.in_bounds(2)));
        assert!(block_is_paved(&index, BlockCoord::new(-1, 0), 2));
        assert!(!index.is_road(TileCoord::new(-3, 0)));
    }

    #[test]
    fn components_split_on_gaps() {
        let mut index = OccupancyIndex::new();
        for x in 0..3 {
            index.mark_footprint(&Footprint::road(TileCoord::new(x, 0)));
        }
        index.mark_footprint(&Footprint::road(TileCoord::new(10, 10)));
        // Diagonal contact does not connect.
        index.mark_footprint(&Footprint::road(TileCoord::new(3, 1)));

        let components = road_components(&index);
        let sizes: Vec<_> = components.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 1, 1]);
    }

    #[test]
    fn ring_makes_footprint_accessible() {
        let mut index = OccupancyIndex::new();
        let tower = Footprint::new(
            BuildingKind::Landmark,
            TileCoord::new(5, 5),
            3,
            2,
            Rotation::R90,
        );
        index.mark_footprint(&tower);
        assert!(!is_road_accessible(&index, &tower));

        let ring = regenerate_ring(&mut index, tower.position, 3, 2, Rotation::R90, MAP_LIMIT);

        assert_eq!(ring.len(), 2 * (2 + 3) + 4);
        assert!(is_road_accessible(&index, &tower));
        assert_eq!(road_components(&index).len(), 1);
    }
}
