pub mod catalog;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod footprint;
pub mod location;
pub mod occupancy;
pub mod planner;
pub mod roads;
pub mod settlement;
pub mod spiral;

pub mod visual;
pub use visual::*;

pub use catalog::{BuildingCatalog, StaticCatalog};
pub use collision::CollisionPolicy;
pub use config::PlannerConfig;
pub use error::PlacementError;
pub use footprint::{BuildingKind, Footprint};
pub use location::{effective_dimensions, BlockCoord, Rotation, TileCoord};
pub use occupancy::OccupancyIndex;
pub use planner::{BatchPlacement, MegaRequest, Placement, PlacementRequest, SettlementPlanner};
pub use settlement::Settlement;
