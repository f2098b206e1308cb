//! Player registry.

use super::errors::{TournamentError, TournamentResult};
use super::models::{Player, PlayerId};
use crate::db::TournamentStore;
use std::sync::Arc;

/// Registers players and looks them up
#[derive(Clone)]
pub struct PlayerStore {
    store: Arc<dyn TournamentStore>,
}

impl PlayerStore {
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    /// Register a new player with a zeroed standing
    ///
    /// Names need not be unique; each call creates a distinct player.
    ///
    /// # Errors
    ///
    /// * `TournamentError::EmptyName` - name is empty or only whitespace
    pub async fn register(&self, name: &str) -> TournamentResult<Player> {
        // Whitespace-only names count as empty; the migration's CHECK matches
        if name.trim().is_empty() {
            return Err(TournamentError::EmptyName);
        }

        let player = self.store.register_player(name).await?;
        log::info!("Registered player {} '{}'", player.id, player.name);

        Ok(player)
    }

    /// Number of registered players
    pub async fn count(&self) -> TournamentResult<usize> {
        self.store.count_players().await
    }

    /// Remove every player along with their standings and pairings.
    ///
    /// Meant for use between tournaments, not mid-round.
    pub async fn clear(&self) -> TournamentResult<()> {
        self.store.delete_all_players().await?;
        log::info!("Cleared all players");
        Ok(())
    }

    /// Get a player by ID
    ///
    /// # Errors
    ///
    /// * `TournamentError::PlayerNotFound` - no player has this ID
    pub async fn get(&self, player_id: PlayerId) -> TournamentResult<Player> {
        self.store
            .find_player(player_id)
            .await?
            .ok_or(TournamentError::PlayerNotFound(player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryTournamentStore;

    fn player_store() -> PlayerStore {
        PlayerStore::new(Arc::new(MemoryTournamentStore::new()))
    }

    #[tokio::test]
    async fn test_register_and_get() {
        let players = player_store();

        let ada = players.register("Ada Lovelace").await.unwrap();
        let fetched = players.get(ada.id).await.unwrap();

        assert_eq!(fetched, ada);
        assert_eq!(players.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_blank_names() {
        let players = player_store();

        for name in ["", "   ", "\t\n"] {
            let err = players.register(name).await.unwrap_err();
            assert!(matches!(err, TournamentError::EmptyName), "name {:?}", name);
        }
        assert_eq!(players.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_names_get_distinct_ids() {
        let players = player_store();

        let first = players.register("Sam").await.unwrap();
        let second = players.register("Sam").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(players.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_player() {
        let players = player_store();

        let err = players.get(42).await.unwrap_err();
        assert!(matches!(err, TournamentError::PlayerNotFound(42)));
    }

    #[tokio::test]
    async fn test_clear_removes_everyone() {
        let players = player_store();
        players.register("Ada").await.unwrap();
        players.register("Bo").await.unwrap();

        players.clear().await.unwrap();

        assert_eq!(players.count().await.unwrap(), 0);
    }
}
