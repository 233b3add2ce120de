use crate::constants::*;
use serde::*;

/// A single cell of the world grid. Unbounded in both directions; the world
/// limit is enforced by collision checks, not by the coordinate type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct TileCoord {
    pub x: i32,
    pub z: i32,
}

impl TileCoord {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        TileCoord { x, z }
    }

    /// Largest absolute coordinate on either axis.
    #[inline]
    pub fn extent(self) -> i32 {
        self.x.abs().max(self.z.abs())
    }

    #[inline]
    pub fn in_bounds(self, map_limit: i32) -> bool {
        self.extent() <= map_limit
    }

    /// Cardinal neighbors, in `NEIGHBORS_4` order.
    pub fn neighbors_4(self) -> impl Iterator<Item = TileCoord> {
        NEIGHBORS_4.into_iter().map(move |offset| self + offset)
    }

    #[inline]
    pub fn block(self) -> BlockCoord {
        BlockCoord::containing(self)
    }
}

impl std::ops::Add<(i32, i32)> for TileCoord {
    type Output = Self;

    fn add(self, (dx, dz): (i32, i32)) -> Self {
        TileCoord {
            x: self.x + dx,
            z: self.z + dz,
        }
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, z): (i32, i32)) -> Self {
        TileCoord { x, z }
    }
}

impl Serialize for TileCoord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x, self.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <(i32, i32)>::deserialize(deserializer).map(TileCoord::from)
    }
}

/// Coarse block index. Block `(bx, bz)` spans world tiles
/// `[bx * BLOCK_SIZE, bx * BLOCK_SIZE + BLOCK_SIZE]` on each axis, border
/// included. Neighboring blocks share their border row.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BlockCoord {
    pub bx: i32,
    pub bz: i32,
}

impl BlockCoord {
    #[inline]
    pub const fn new(bx: i32, bz: i32) -> Self {
        BlockCoord { bx, bz }
    }

    /// The block owning a tile (floor division, so negative tiles map to
    /// negative blocks).
    pub fn containing(tile: TileCoord) -> Self {
        BlockCoord {
            bx: tile.x.div_euclid(BLOCK_SIZE),
            bz: tile.z.div_euclid(BLOCK_SIZE),
        }
    }

    /// World tile at local offset (0, 0).
    #[inline]
    pub fn origin(self) -> TileCoord {
        TileCoord::new(self.bx * BLOCK_SIZE, self.bz * BLOCK_SIZE)
    }

    /// World tile at local offset (1, 1), the lower corner of the buildable
    /// interior.
    #[inline]
    pub fn interior_origin(self) -> TileCoord {
        self.origin() + (1, 1)
    }

    /// Perimeter candidates: the four edges, each walked `0..=BLOCK_SIZE`.
    /// Corners appear more than once.
    pub fn perimeter(self) -> impl Iterator<Item = TileCoord> {
        let origin = self.origin();
        (0..=BLOCK_SIZE).flat_map(move |i| {
            [
                origin + (i, 0),
                origin + (i, BLOCK_SIZE),
                origin + (0, i),
                origin + (BLOCK_SIZE, i),
            ]
        })
    }

    /// True if the tile lies on this block's road border.
    pub fn is_perimeter_tile(self, tile: TileCoord) -> bool {
        let origin = self.origin();
        let lx = tile.x - origin.x;
        let lz = tile.z - origin.z;
        let in_span = (0..=BLOCK_SIZE).contains(&lx) && (0..=BLOCK_SIZE).contains(&lz);
        in_span && (lx == 0 || lx == BLOCK_SIZE || lz == 0 || lz == BLOCK_SIZE)
    }
}

/// Quarter-turn rotation of a footprint around its local origin.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Odd rotations swap width and depth.
    #[inline]
    pub fn swaps_axes(self) -> bool {
        self.quarter_turns() % 2 == 1
    }
}

/// Occupied extents of a `width` x `depth` footprint under `rotation`.
#[inline]
pub fn effective_dimensions(width: u32, depth: u32, rotation: Rotation) -> (u32, u32) {
    if rotation.swaps_axes() {
        (depth, width)
    } else {
        (width, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashSet;

    #[test]
    fn block_of_negative_tiles_uses_floor_division() {
        assert_eq!(TileCoord::new(0, 0).block(), BlockCoord::new(0, 0));
        assert_eq!(TileCoord::new(2, 5).block(), BlockCoord::new(0, 1));
        assert_eq!(TileCoord::new(-1, -3).block(), BlockCoord::new(-1, -1));
        assert_eq!(TileCoord::new(-4, 3).block(), BlockCoord::new(-2, 1));
    }

    #[test]
    fn perimeter_has_twelve_distinct_tiles_on_the_border() {
        let block = BlockCoord::new(-1, 2);
        let candidates: Vec<_> = block.perimeter().collect();
        assert_eq!(candidates.len(), 4 * (BLOCK_SIZE as usize + 1));

        let distinct: FnvHashSet<_> = candidates.iter().copied().collect();
        assert_eq!(distinct.len(), 4 * BLOCK_SIZE as usize);
        assert!(distinct.iter().all(|&t| block.is_perimeter_tile(t)));
        assert!(!block.is_perimeter_tile(block.interior_origin()));
    }

    #[test]
    fn odd_rotations_swap_extents() {
        assert_eq!(effective_dimensions(2, 1, Rotation::R0), (2, 1));
        assert_eq!(effective_dimensions(2, 1, Rotation::R90), (1, 2));
        assert_eq!(effective_dimensions(2, 1, Rotation::R180), (2, 1));
        assert_eq!(effective_dimensions(2, 1, Rotation::R270), (1, 2));
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::R90);
    }
}
