//! Swiss pairing for the next round.
//!
//! Players are walked in standings order and paired with their neighbour:
//! first with second, third with fourth, and so on. This is a single linear
//! pass. It does not look at previous opponents, so two players who already
//! met are paired again whenever they sit next to each other in the standings.
//!
//! With an odd field the lowest-ranked player sits out. That player is left
//! out of the pairing list and reported as the round's bye; no win is credited
//! for it.

use super::errors::TournamentResult;
use super::models::{Pairing, RoundPairings, StandingRecord};
use super::standings::StandingsCalculator;
use crate::db::TournamentStore;
use std::sync::Arc;

/// Pair records that are already in standings order
pub fn pair_adjacent(standings: &[StandingRecord]) -> RoundPairings {
    let mut chunks = standings.chunks_exact(2);

    let pairings = chunks
        .by_ref()
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();
    let bye = chunks.remainder().first().cloned();

    RoundPairings { pairings, bye }
}

/// Generates and stores the pairings for the next round
#[derive(Clone)]
pub struct PairingEngine {
    store: Arc<dyn TournamentStore>,
    standings: StandingsCalculator,
}

impl PairingEngine {
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self {
            standings: StandingsCalculator::new(store.clone()),
            store,
        }
    }

    /// Pair the current standings and replace the stored round with the result
    pub async fn next_round_pairings(&self) -> TournamentResult<RoundPairings> {
        let standings = self.standings.standings().await?;
        let round = pair_adjacent(&standings);

        self.store.replace_pairings(&round.pairings).await?;

        log::info!(
            "Generated {} pairings for {} players",
            round.pairings.len(),
            standings.len()
        );
        if let Some(bye) = &round.bye {
            log::info!("Player {} '{}' has a bye this round", bye.player_id, bye.name);
        }

        Ok(round)
    }

    /// Pairings stored by the last call to `next_round_pairings`
    pub async fn current_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        self.store.select_all_pairings().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryTournamentStore;
    use crate::tournament::{MatchRecorder, PlayerId, PlayerStore};

    fn record(player_id: i64, name: &str, wins: u32) -> StandingRecord {
        StandingRecord {
            player_id,
            name: name.to_string(),
            wins,
            matches: 2,
        }
    }

    fn ids(round: &RoundPairings) -> Vec<(i64, i64)> {
        round
            .pairings
            .iter()
            .map(|p| (p.player1_id, p.player2_id))
            .collect()
    }

    #[test]
    fn test_adjacent_players_are_paired() {
        let standings = vec![
            record(1, "A", 2),
            record(2, "B", 1),
            record(3, "C", 1),
            record(4, "D", 0),
        ];

        let round = pair_adjacent(&standings);

        assert_eq!(ids(&round), vec![(1, 2), (3, 4)]);
        assert_eq!(round.pairings[0].player1_name, "A");
        assert_eq!(round.pairings[1].player2_name, "D");
        assert!(round.bye.is_none());
    }

    #[test]
    fn test_odd_field_gives_last_player_the_bye() {
        let standings = vec![record(1, "A", 2), record(2, "B", 1), record(3, "C", 0)];

        let round = pair_adjacent(&standings);

        assert_eq!(ids(&round), vec![(1, 2)]);
        assert_eq!(round.bye.as_ref().map(|r| r.player_id), Some(3));
        assert_eq!(round.player_count(), 3);
    }

    #[test]
    fn test_empty_and_single_player() {
        let round = pair_adjacent(&[]);
        assert!(round.pairings.is_empty());
        assert!(round.bye.is_none());

        let round = pair_adjacent(&[record(7, "Solo", 0)]);
        assert!(round.pairings.is_empty());
        assert_eq!(round.bye.map(|r| r.player_id), Some(7));
    }

    async fn setup(names: &[&str]) -> (PairingEngine, MatchRecorder, Vec<PlayerId>) {
        let store: Arc<dyn TournamentStore> = Arc::new(MemoryTournamentStore::new());
        let players = PlayerStore::new(store.clone());

        let mut ids = Vec::new();
        for name in names {
            ids.push(players.register(name).await.unwrap().id);
        }

        (
            PairingEngine::new(store.clone()),
            MatchRecorder::new(store),
            ids,
        )
    }

    #[tokio::test]
    async fn test_next_round_replaces_stored_pairings() {
        let (engine, recorder, p) = setup(&["A", "B", "C", "D"]).await;

        let first = engine.next_round_pairings().await.unwrap();
        assert_eq!(ids(&first), vec![(p[0], p[1]), (p[2], p[3])]);
        assert_eq!(engine.current_pairings().await.unwrap(), first.pairings);

        recorder.report(p[0], p[1]).await.unwrap();
        recorder.report(p[2], p[3]).await.unwrap();

        let second = engine.next_round_pairings().await.unwrap();
        assert_eq!(ids(&second), vec![(p[0], p[2]), (p[1], p[3])]);
        assert_eq!(engine.current_pairings().await.unwrap(), second.pairings);
    }

    #[tokio::test]
    async fn test_rematches_are_not_avoided() {
        let (engine, recorder, p) = setup(&["A", "B", "C", "D"]).await;

        // A and B meet, C and D meet, then B beats A back so the neighbours
        // in the standings are the same two pairs again
        recorder.report(p[0], p[1]).await.unwrap();
        recorder.report(p[2], p[3]).await.unwrap();
        recorder.report(p[1], p[0]).await.unwrap();
        recorder.report(p[3], p[2]).await.unwrap();

        let round = engine.next_round_pairings().await.unwrap();

        assert_eq!(ids(&round), vec![(p[0], p[1]), (p[2], p[3])]);
    }
}
