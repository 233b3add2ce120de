use crate::location::*;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// Building category. Only `Road` is treated specially by the engine; the
/// other categories are opaque tags carried through to the caller.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum BuildingKind {
    Road,
    Residential,
    Commercial,
    Industrial,
    Civic,
    Landmark,
}

impl BuildingKind {
    #[inline]
    pub fn is_road(self) -> bool {
        self == BuildingKind::Road
    }
}

/// One building committed to the grid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Footprint {
    #[serde(rename = "k")]
    pub kind: BuildingKind,
    #[serde(rename = "p")]
    pub position: TileCoord,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "d")]
    pub depth: u32,
    #[serde(rename = "r", default)]
    pub rotation: Rotation,
}

impl Footprint {
    pub fn new(
        kind: BuildingKind,
        position: TileCoord,
        width: u32,
        depth: u32,
        rotation: Rotation,
    ) -> Self {
        Footprint {
            kind,
            position,
            width,
            depth,
            rotation,
        }
    }

    /// A single road tile.
    pub fn road(position: TileCoord) -> Self {
        Footprint::new(BuildingKind::Road, position, 1, 1, Rotation::R0)
    }

    #[inline]
    pub fn is_road(&self) -> bool {
        self.kind.is_road()
    }

    /// Occupied extents after rotation.
    #[inline]
    pub fn effective_dimensions(&self) -> (u32, u32) {
        effective_dimensions(self.width, self.depth, self.rotation)
    }

    /// Block owning the footprint's origin tile.
    #[inline]
    pub fn block(&self) -> BlockCoord {
        self.position.block()
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileCoord> {
        rect_tiles(self.position, self.width, self.depth, self.rotation)
    }

    pub fn contains(&self, tile: TileCoord) -> bool {
        let (w, d) = self.effective_dimensions();
        let dx = tile.x - self.position.x;
        let dz = tile.z - self.position.z;
        dx >= 0 && dz >= 0 && (dx as i64) < w as i64 && (dz as i64) < d as i64
    }
}

/// Tiles covered by the rectangle `[x, x + w) x [z, z + d)`, with `(w, d)`
/// resolved through `rotation`. Iterates x-major.
pub fn rect_tiles(
    position: TileCoord,
    width: u32,
    depth: u32,
    rotation: Rotation,
) -> impl Iterator<Item = TileCoord> {
    let (w, d) = effective_dimensions(width, depth, rotation);
    iproduct!(0..w as i32, 0..d as i32).map(move |offset| position + offset)
}

/// Tiles of the one-tile ring hugging the rectangle from outside.
pub fn ring_tiles(
    position: TileCoord,
    width: u32,
    depth: u32,
    rotation: Rotation,
) -> impl Iterator<Item = TileCoord> {
    let (w, d) = effective_dimensions(width, depth, rotation);
    let (w, d) = (w as i32, d as i32);
    iproduct!(-1..=w, -1..=d)
        .filter(move |&(dx, dz)| dx == -1 || dx == w || dz == -1 || dz == d)
        .map(move |offset| position + offset)
}
