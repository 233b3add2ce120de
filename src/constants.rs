/// Side length of a block in tiles, measured between its road edges.
pub const BLOCK_SIZE: i32 = 3;

/// Side length of the buildable interior of a block.
pub const BLOCK_INTERIOR: i32 = BLOCK_SIZE - 1;

/// Default symmetric world bound. No tile of any footprint may lie outside
/// `[-MAP_LIMIT, MAP_LIMIT]` on either axis.
pub const MAP_LIMIT: i32 = 120;

/// Default cap on spiral rings walked by the block search before giving up.
pub const SPIRAL_ITERATION_LIMIT: u32 = 1000;

/// Neighbor offsets for 4-directional (cardinal) adjacency.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
