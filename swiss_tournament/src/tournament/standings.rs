//! Standings ordering and ranking.
//!
//! Players are ordered by wins, most first. Equal wins keep registration
//! order, which is ascending player ID because the store hands out IDs
//! monotonically. The ordering is applied here rather than trusted from the
//! store, so pairings stay reproducible whichever backend is in use.

use super::errors::TournamentResult;
use super::models::{RankedStanding, StandingRecord};
use crate::db::TournamentStore;
use std::cmp::Ordering;
use std::sync::Arc;

/// Compare two records in standings order
pub fn standings_order(a: &StandingRecord, b: &StandingRecord) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| a.player_id.cmp(&b.player_id))
}

/// Sort records into standings order
pub fn order_standings(records: &mut [StandingRecord]) {
    records.sort_by(standings_order);
}

/// Assign competition ranks ("1224") to records already in standings order
pub fn rank_standings(records: Vec<StandingRecord>) -> Vec<RankedStanding> {
    let mut ranked: Vec<RankedStanding> = Vec::with_capacity(records.len());

    for (position, record) in records.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.record.wins == record.wins => prev.rank,
            _ => position as u32 + 1,
        };
        ranked.push(RankedStanding { rank, record });
    }

    ranked
}

/// Reads standings from the store in a deterministic order
#[derive(Clone)]
pub struct StandingsCalculator {
    store: Arc<dyn TournamentStore>,
}

impl StandingsCalculator {
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    /// Current standings, most wins first, ties in registration order
    pub async fn standings(&self) -> TournamentResult<Vec<StandingRecord>> {
        let mut records = self.store.select_standings_ordered_by_wins().await?;
        order_standings(&mut records);
        Ok(records)
    }

    /// Current standings with competition ranks
    pub async fn ranked_standings(&self) -> TournamentResult<Vec<RankedStanding>> {
        Ok(rank_standings(self.standings().await?))
    }
}
