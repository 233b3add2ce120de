use crate::footprint::BuildingKind;
use crate::location::TileCoord;
use std::fmt;

/// Why a placement request was not committed. Every variant is an expected
/// outcome and leaves the planner untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The spiral search ran out of iterations without a legal slot.
    NoSpaceFound { width: u32, depth: u32 },
    /// The requested mega structure rectangle covers a non-road tile or
    /// leaves the world.
    InvalidMegaPlacement {
        position: TileCoord,
        width: u32,
        depth: u32,
    },
    /// Zero extents, or extents too large for a block interior on the block
    /// search path.
    InvalidDimensions { width: u32, depth: u32 },
    /// The catalog has no dimensions for this kind.
    UnknownKind(BuildingKind),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NoSpaceFound { width, depth } => {
                write!(f, "no space found for a {}x{} building", width, depth)
            }
            PlacementError::InvalidMegaPlacement {
                position,
                width,
                depth,
            } => write!(
                f,
                "invalid location ({}, {}) for a {}x{} structure",
                position.x, position.z, width, depth
            ),
            PlacementError::InvalidDimensions { width, depth } => {
                write!(f, "invalid building dimensions {}x{}", width, depth)
            }
            PlacementError::UnknownKind(kind) => {
                write!(f, "no catalog entry for {:?}", kind)
            }
        }
    }
}

impl std::error::Error for PlacementError {}
