//! A settlement: the authoritative footprint list plus the planner that
//! indexes it.
//!
//! The planner only reports what changed; `Settlement` applies those changes
//! to the list so the two never drift apart. Serialization stores the list
//! and config only; the index is rebuilt on load.

use crate::catalog::BuildingCatalog;
use crate::config::PlannerConfig;
use crate::error::PlacementError;
use crate::footprint::*;
use crate::location::*;
use crate::planner::*;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "SavedSettlement", into = "SavedSettlement")]
pub struct Settlement {
    planner: SettlementPlanner,
    footprints: Vec<Footprint>,
}

#[derive(Serialize, Deserialize)]
struct SavedSettlement {
    #[serde(default)]
    config: PlannerConfig,
    footprints: Vec<Footprint>,
}

impl From<SavedSettlement> for Settlement {
    fn from(saved: SavedSettlement) -> Self {
        Settlement::from_footprints(saved.config, saved.footprints)
    }
}

impl From<Settlement> for SavedSettlement {
    fn from(settlement: Settlement) -> Self {
        SavedSettlement {
            config: settlement.planner.config().clone(),
            footprints: settlement.footprints,
        }
    }
}

impl Settlement {
    pub fn new(config: PlannerConfig) -> Self {
        Settlement {
            planner: SettlementPlanner::new(config),
            footprints: Vec::new(),
        }
    }

    /// Adopt an existing footprint list and index it.
    pub fn from_footprints(config: PlannerConfig, footprints: Vec<Footprint>) -> Self {
        Settlement {
            planner: SettlementPlanner::with_footprints(config, &footprints),
            footprints,
        }
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    pub fn planner(&self) -> &SettlementPlanner {
        &self.planner
    }

    pub fn footprint_at(&self, tile: TileCoord) -> Option<&Footprint> {
        self.footprints.iter().find(|f| f.contains(tile))
    }

    pub fn buildings(&self) -> impl Iterator<Item = &Footprint> {
        self.footprints.iter().filter(|f| !f.is_road())
    }

    pub fn place(
        &mut self,
        kind: BuildingKind,
        width: u32,
        depth: u32,
    ) -> Result<Footprint, PlacementError> {
        let placement = self.planner.place(kind, width, depth)?;
        Ok(self.apply(placement))
    }

    pub fn place_kind<C: BuildingCatalog + ?Sized>(
        &mut self,
        kind: BuildingKind,
        catalog: &C,
    ) -> Result<Footprint, PlacementError> {
        let placement = self.planner.place_kind(kind, catalog)?;
        Ok(self.apply(placement))
    }

    pub fn place_mega(&mut self, request: &MegaRequest) -> Result<Footprint, PlacementError> {
        let placement = self.planner.place_mega(request)?;
        Ok(self.apply(placement))
    }

    /// Place a batch and return the committed buildings in placement order,
    /// plus the requests that did not fit.
    pub fn place_batch(
        &mut self,
        requests: &[PlacementRequest],
    ) -> (Vec<Footprint>, Vec<(PlacementRequest, PlacementError)>) {
        let BatchPlacement { placed, rejected } = self.planner.place_batch(requests);
        let committed = placed
            .into_iter()
            .map(|placement| self.apply(placement))
            .collect();
        (committed, rejected)
    }

    /// Fold a placement into the footprint list.
    ///
    /// Road footprints that lost tiles to a mega structure are dropped; any
    /// of their tiles that survived are re-added as 1x1 roads so the list
    /// still covers exactly what the index holds.
    fn apply(&mut self, placement: Placement) -> Footprint {
        let Placement {
            footprint,
            new_roads,
            removed_roads,
        } = placement;

        if !removed_roads.is_empty() {
            let removed: FnvHashSet<TileCoord> = removed_roads.into_iter().collect();
            let mut survivors = Vec::new();

            self.footprints.retain(|existing| {
                if !existing.is_road() || !existing.tiles().any(|t| removed.contains(&t)) {
                    return true;
                }
                survivors.extend(
                    existing
                        .tiles()
                        .filter(|t| !removed.contains(t))
                        .map(Footprint::road),
                );
                false
            });

            self.footprints.extend(survivors);
        }

        self.footprints.extend(new_roads);
        self.footprints.push(footprint);
        footprint
    }
}
