use crate::pond::{CellId, Pond, Terrain};
use crate::solver::{Hop, PondSolver};
use crate::{ANGLED_JUMP_COST, GOAL_COST, INLINE_JUMP_COST};

/// Priorities assigned to each kind of landing spot. Lower values are preferred.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCosts {
    pub water: f64,
    pub reeds: f64,
    /// Reeds next to an alligator. Every other terrain is off limits when an alligator is near.
    pub reeds_near_alligator: f64,
    pub lily_pad: f64,
    /// Food cells holding one, two or three flies.
    pub food: [f64; 3],
    pub goal: f64,
    /// Added on top of the terrain cost for a two-hop jump that keeps its direction.
    pub inline_jump: f64,
    /// Added on top of the terrain cost for a two-hop jump that changes direction.
    pub angled_jump: f64,
}

impl Default for TerrainCosts {
    fn default() -> Self {
        TerrainCosts {
            water: 6.0,
            reeds: 5.0,
            reeds_near_alligator: 10.0,
            lily_pad: 4.0,
            food: [2.0, 1.0, 0.0],
            goal: GOAL_COST,
            inline_jump: INLINE_JUMP_COST,
            angled_jump: ANGLED_JUMP_COST,
        }
    }
}

impl TerrainCosts {
    /// Cost of landing on `cell` regardless of how the frog gets there.
    pub fn landing_cost(&self, pond: &Pond, cell: CellId) -> Option<f64> {
        let terrain = pond.terrain(cell)?;
        match terrain {
            Terrain::End => return Some(self.goal),
            Terrain::Reeds if pond.predator_adjacent(cell) => {
                return Some(self.reeds_near_alligator)
            }
            Terrain::Start | Terrain::Mud | Terrain::Alligator => return None,
            _ => {}
        }
        if pond.predator_adjacent(cell) {
            return None;
        }
        match terrain {
            Terrain::Water => Some(self.water),
            Terrain::Reeds => Some(self.reeds),
            Terrain::LilyPad => Some(self.lily_pad),
            Terrain::Food {
                flies: flies @ 1..=3,
            } => Some(self.food[flies as usize - 1]),
            _ => None,
        }
    }

    pub fn hop_cost(&self, hop: Hop) -> f64 {
        match hop {
            Hop::Single => 0.0,
            Hop::Double { inline: true } => self.inline_jump,
            Hop::Double { inline: false } => self.angled_jump,
        }
    }
}

/// Greedy frog: scores every landing spot with [TerrainCosts] and always takes the cheapest.
#[derive(Clone, Debug, Default)]
pub struct GreedySolver {
    pub costs: TerrainCosts,
}

impl GreedySolver {
    pub fn new() -> GreedySolver {
        GreedySolver {
            costs: TerrainCosts::default(),
        }
    }

    pub fn with_costs(costs: TerrainCosts) -> GreedySolver {
        GreedySolver { costs }
    }
}

impl PondSolver for GreedySolver {
    fn score(&self, pond: &Pond, candidate: CellId, hop: Hop) -> Option<f64> {
        self.costs
            .landing_cost(pond, candidate)
            .map(|cost| cost + self.costs.hop_cost(hop))
    }
}
