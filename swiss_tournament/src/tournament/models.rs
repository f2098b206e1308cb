//! Tournament data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type (assigned by the store, monotonically increasing)
pub type PlayerId = i64;

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

/// A player's aggregate win/match record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandingRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl StandingRecord {
    /// Zeroed record created at registration
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins: 0,
            matches: 0,
        }
    }
}

/// Standing with its competition rank (equal wins share a rank)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedStanding {
    pub rank: u32,
    pub record: StandingRecord,
}

/// Outcome of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl MatchResult {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
        }
    }

    /// Standing increments this result applies, ordered by player ID
    pub fn deltas(&self) -> [StandingDelta; 2] {
        let winner = StandingDelta {
            player_id: self.winner_id,
            wins: 1,
            matches: 1,
        };
        let loser = StandingDelta {
            player_id: self.loser_id,
            wins: 0,
            matches: 1,
        };

        if self.winner_id <= self.loser_id {
            [winner, loser]
        } else {
            [loser, winner]
        }
    }
}

/// Increment applied to one standing row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingDelta {
    pub player_id: PlayerId,
    pub wins: u32,
    pub matches: u32,
}

/// Two players assigned to meet in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    pub fn between(first: &StandingRecord, second: &StandingRecord) -> Self {
        Self {
            player1_id: first.player_id,
            player1_name: first.name.clone(),
            player2_id: second.player_id,
            player2_name: second.name.clone(),
        }
    }

    /// Whether `player_id` plays in this pairing
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

/// Complete plan for one round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    /// Pairings in standings order
    pub pairings: Vec<Pairing>,
    /// Lowest-ranked player left out when the field is odd
    pub bye: Option<StandingRecord>,
}

impl RoundPairings {
    /// Number of players scheduled this round, bye included
    pub fn player_count(&self) -> usize {
        self.pairings.len() * 2 + usize::from(self.bye.is_some())
    }
}
