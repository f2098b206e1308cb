//! In-memory `TournamentStore`.
//!
//! All state sits behind one `RwLock`: reads share it, every write holds it
//! exclusively for the whole operation. That gives the same all-or-nothing
//! visibility as the PostgreSQL transactions.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::repository::TournamentStore;
use crate::tournament::{
    Pairing, Player, PlayerId, StandingDelta, StandingRecord, TournamentError, TournamentResult,
};

#[derive(Debug)]
struct MemoryState {
    next_id: PlayerId,
    players: BTreeMap<PlayerId, Player>,
    standings: BTreeMap<PlayerId, StandingRecord>,
    pairings: Vec<Pairing>,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            next_id: 1,
            players: BTreeMap::new(),
            standings: BTreeMap::new(),
            pairings: Vec::new(),
        }
    }
}

/// Store keeping players, standings and pairings in process memory
#[derive(Debug, Default)]
pub struct MemoryTournamentStore {
    state: RwLock<MemoryState>,
}

impl MemoryTournamentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TournamentStore for MemoryTournamentStore {
    async fn register_player(&self, name: &str) -> TournamentResult<Player> {
        let mut state = self.state.write().await;

        // IDs are never reused, even after delete_all_players
        let id = state.next_id;
        state.next_id += 1;

        let player = Player {
            id,
            name: name.to_string(),
            registered_at: Utc::now(),
        };
        state.players.insert(id, player.clone());
        state.standings.insert(id, StandingRecord::new(id, name));

        Ok(player)
    }

    async fn find_player(&self, player_id: PlayerId) -> TournamentResult<Option<Player>> {
        Ok(self.state.read().await.players.get(&player_id).cloned())
    }

    async fn count_players(&self) -> TournamentResult<usize> {
        Ok(self.state.read().await.players.len())
    }

    async fn delete_all_players(&self) -> TournamentResult<()> {
        let mut state = self.state.write().await;
        state.pairings.clear();
        state.standings.clear();
        state.players.clear();
        Ok(())
    }

    async fn update_standings(&self, deltas: &[StandingDelta]) -> TournamentResult<()> {
        let mut state = self.state.write().await;

        // Validate every row before touching any of them
        if let Some(missing) = deltas
            .iter()
            .find(|delta| !state.standings.contains_key(&delta.player_id))
        {
            return Err(TournamentError::PlayerNotFound(missing.player_id));
        }

        for delta in deltas {
            if let Some(record) = state.standings.get_mut(&delta.player_id) {
                record.wins += delta.wins;
                record.matches += delta.matches;
            }
        }

        Ok(())
    }

    async fn reset_standings(&self) -> TournamentResult<()> {
        let mut state = self.state.write().await;
        for record in state.standings.values_mut() {
            record.wins = 0;
            record.matches = 0;
        }
        Ok(())
    }

    async fn select_standings_ordered_by_wins(&self) -> TournamentResult<Vec<StandingRecord>> {
        let state = self.state.read().await;

        // BTreeMap iterates in ID order; the stable sort keeps it within equal wins
        let mut standings: Vec<StandingRecord> = state.standings.values().cloned().collect();
        standings.sort_by(|a, b| b.wins.cmp(&a.wins));

        Ok(standings)
    }

    async fn replace_pairings(&self, pairings: &[Pairing]) -> TournamentResult<()> {
        let mut state = self.state.write().await;
        state.pairings = pairings.to_vec();
        Ok(())
    }

    async fn select_all_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        Ok(self.state.read().await.pairings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let store = MemoryTournamentStore::new();

        let first = store.register_player("Ada").await.unwrap();
        let second = store.register_player("Bo").await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        store.delete_all_players().await.unwrap();
        let third = store.register_player("Cy").await.unwrap();
        assert_eq!(third.id, 3, "IDs keep increasing after a clear");
    }

    #[tokio::test]
    async fn test_update_standings_is_all_or_nothing() {
        let store = MemoryTournamentStore::new();
        let ada = store.register_player("Ada").await.unwrap();

        let deltas = [
            StandingDelta {
                player_id: ada.id,
                wins: 1,
                matches: 1,
            },
            StandingDelta {
                player_id: 99,
                wins: 0,
                matches: 1,
            },
        ];

        let err = store.update_standings(&deltas).await.unwrap_err();
        assert!(matches!(err, TournamentError::PlayerNotFound(99)));

        let standings = store.select_standings_ordered_by_wins().await.unwrap();
        assert_eq!(standings[0].wins, 0);
        assert_eq!(standings[0].matches, 0);
    }

    #[tokio::test]
    async fn test_delete_all_players_cascades() {
        let store = MemoryTournamentStore::new();
        let ada = store.register_player("Ada").await.unwrap();
        let bo = store.register_player("Bo").await.unwrap();
        let pairing = Pairing::between(
            &StandingRecord::new(ada.id, &ada.name),
            &StandingRecord::new(bo.id, &bo.name),
        );
        store.replace_pairings(&[pairing]).await.unwrap();

        store.delete_all_players().await.unwrap();

        assert_eq!(store.count_players().await.unwrap(), 0);
        assert!(store.select_standings_ordered_by_wins().await.unwrap().is_empty());
        assert!(store.select_all_pairings().await.unwrap().is_empty());
        assert!(store.find_player(ada.id).await.unwrap().is_none());
    }
}
