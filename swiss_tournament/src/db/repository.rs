//! Store trait for the tournament tables.
//!
//! Every method is one logical operation and runs in a single transaction
//! scope, so callers never observe a partially applied write.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};
use std::sync::Arc;

use super::timeouts::{
    DEFAULT_QUERY_TIMEOUT, DEFAULT_TRANSACTION_TIMEOUT, with_timeout, with_transaction_timeout,
};
use crate::tournament::{
    Pairing, Player, PlayerId, StandingDelta, StandingRecord, TournamentError, TournamentResult,
};

/// Persistence operations needed by the tournament components
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Insert a player and its zeroed standing row
    async fn register_player(&self, name: &str) -> TournamentResult<Player>;

    /// Find player by ID
    async fn find_player(&self, player_id: PlayerId) -> TournamentResult<Option<Player>>;

    /// Number of registered players
    async fn count_players(&self) -> TournamentResult<usize>;

    /// Delete every player together with their standings and pairings
    async fn delete_all_players(&self) -> TournamentResult<()>;

    /// Apply all deltas or none; `PlayerNotFound` if any row is missing
    async fn update_standings(&self, deltas: &[StandingDelta]) -> TournamentResult<()>;

    /// Zero wins and matches for every player
    async fn reset_standings(&self) -> TournamentResult<()>;

    /// Standings by wins descending, ties in registration order
    async fn select_standings_ordered_by_wins(&self) -> TournamentResult<Vec<StandingRecord>>;

    /// Replace the stored pairing set with `pairings`
    async fn replace_pairings(&self, pairings: &[Pairing]) -> TournamentResult<()>;

    /// Stored pairings in insertion order
    async fn select_all_pairings(&self) -> TournamentResult<Vec<Pairing>>;
}

/// PostgreSQL implementation of `TournamentStore`
#[derive(Clone)]
pub struct PgTournamentStore {
    pool: Arc<PgPool>,
}

impl PgTournamentStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn insert_player_tx(&self, name: &str) -> TournamentResult<Player> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "INSERT INTO players (name) VALUES ($1) RETURNING id, name, registered_at",
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        let player = Player {
            id: row.get("id"),
            name: row.get("name"),
            registered_at: row.get::<chrono::NaiveDateTime, _>("registered_at").and_utc(),
        };

        sqlx::query(
            "INSERT INTO player_standings (player_id, name, wins, matches) VALUES ($1, $2, 0, 0)",
        )
        .bind(player.id)
        .bind(&player.name)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(player)
    }

    async fn update_standings_tx(&self, deltas: &[StandingDelta]) -> TournamentResult<()> {
        let mut tx = self.pool.begin().await?;

        // Lock rows in ascending ID order so concurrent reports cannot deadlock
        let mut ordered = deltas.to_vec();
        ordered.sort_by_key(|delta| delta.player_id);

        for delta in &ordered {
            apply_delta(&mut tx, delta).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn replace_pairings_tx(&self, pairings: &[Pairing]) -> TournamentResult<()> {
        let mut tx = self.pool.begin().await?;

        // Serialize overlapping rewrites so a round never mixes with another
        sqlx::query("LOCK TABLE swiss_pairings IN EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM swiss_pairings")
            .execute(&mut *tx)
            .await?;

        for pairing in pairings {
            sqlx::query(
                r#"
                INSERT INTO swiss_pairings (player1_id, player1_name, player2_id, player2_name)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(pairing.player1_id)
            .bind(&pairing.player1_name)
            .bind(pairing.player2_id)
            .bind(&pairing.player2_name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

async fn apply_delta(
    tx: &mut Transaction<'_, Postgres>,
    delta: &StandingDelta,
) -> TournamentResult<()> {
    let result = sqlx::query(
        "UPDATE player_standings SET wins = wins + $1, matches = matches + $2 WHERE player_id = $3",
    )
    .bind(delta.wins as i32)
    .bind(delta.matches as i32)
    .bind(delta.player_id)
    .execute(&mut **tx)
    .await?;

    // Returning early drops the transaction, which rolls back earlier deltas
    if result.rows_affected() == 0 {
        return Err(TournamentError::PlayerNotFound(delta.player_id));
    }

    Ok(())
}

#[async_trait]
impl TournamentStore for PgTournamentStore {
    async fn register_player(&self, name: &str) -> TournamentResult<Player> {
        with_transaction_timeout(DEFAULT_TRANSACTION_TIMEOUT, self.insert_player_tx(name)).await
    }

    async fn find_player(&self, player_id: PlayerId) -> TournamentResult<Option<Player>> {
        let row = with_timeout(
            DEFAULT_QUERY_TIMEOUT,
            sqlx::query("SELECT id, name, registered_at FROM players WHERE id = $1")
                .bind(player_id)
                .fetch_optional(self.pool.as_ref()),
        )
        .await?;

        Ok(row.map(|r| Player {
            id: r.get("id"),
            name: r.get("name"),
            registered_at: r.get::<chrono::NaiveDateTime, _>("registered_at").and_utc(),
        }))
    }

    async fn count_players(&self) -> TournamentResult<usize> {
        let row = with_timeout(
            DEFAULT_QUERY_TIMEOUT,
            sqlx::query("SELECT COUNT(*) AS count FROM players").fetch_one(self.pool.as_ref()),
        )
        .await?;

        let count: i64 = row.get("count");
        Ok(count as usize)
    }

    async fn delete_all_players(&self) -> TournamentResult<()> {
        // Standings and pairings go with their players (ON DELETE CASCADE)
        with_timeout(
            DEFAULT_TRANSACTION_TIMEOUT,
            sqlx::query("DELETE FROM players").execute(self.pool.as_ref()),
        )
        .await?;
        Ok(())
    }

    async fn update_standings(&self, deltas: &[StandingDelta]) -> TournamentResult<()> {
        with_transaction_timeout(DEFAULT_TRANSACTION_TIMEOUT, self.update_standings_tx(deltas))
            .await
    }

    async fn reset_standings(&self) -> TournamentResult<()> {
        with_timeout(
            DEFAULT_TRANSACTION_TIMEOUT,
            sqlx::query("UPDATE player_standings SET wins = 0, matches = 0")
                .execute(self.pool.as_ref()),
        )
        .await?;
        Ok(())
    }

    async fn select_standings_ordered_by_wins(&self) -> TournamentResult<Vec<StandingRecord>> {
        let rows = with_timeout(
            DEFAULT_QUERY_TIMEOUT,
            sqlx::query(
                r#"
                SELECT player_id, name, wins, matches
                FROM player_standings
                ORDER BY wins DESC, player_id ASC
                "#,
            )
            .fetch_all(self.pool.as_ref()),
        )
        .await?;

        let standings = rows
            .into_iter()
            .map(|row| StandingRecord {
                player_id: row.get("player_id"),
                name: row.get("name"),
                wins: row.get::<i32, _>("wins") as u32,
                matches: row.get::<i32, _>("matches") as u32,
            })
            .collect();

        Ok(standings)
    }

    async fn replace_pairings(&self, pairings: &[Pairing]) -> TournamentResult<()> {
        with_transaction_timeout(DEFAULT_TRANSACTION_TIMEOUT, self.replace_pairings_tx(pairings))
            .await
    }

    async fn select_all_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let rows = with_timeout(
            DEFAULT_QUERY_TIMEOUT,
            sqlx::query(
                r#"
                SELECT player1_id, player1_name, player2_id, player2_name
                FROM swiss_pairings
                ORDER BY id
                "#,
            )
            .fetch_all(self.pool.as_ref()),
        )
        .await?;

        let pairings = rows
            .into_iter()
            .map(|row| Pairing {
                player1_id: row.get("player1_id"),
                player1_name: row.get("player1_name"),
                player2_id: row.get("player2_id"),
                player2_name: row.get("player2_name"),
            })
            .collect();

        Ok(pairings)
    }
}
