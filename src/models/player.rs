//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A player registered for a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Seed order: determines initial placement when partitioning into groups.
    pub seed: u32,
}

impl Player {
    /// Create a new player with the given name and seed order.
    pub fn new(name: impl Into<String>, seed: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            seed,
        }
    }
}

/// Seed for a newly added player: one past the current highest, saturating
/// so an extreme existing seed cannot overflow.
pub fn next_seed(players: &[Player]) -> u32 {
    players
        .iter()
        .map(|p| p.seed.saturating_add(1))
        .max()
        .unwrap_or(1)
}
