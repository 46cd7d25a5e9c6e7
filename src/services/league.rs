use anyhow::Result;
use log::info;

use crate::config::settings::LeagueSettings;
use crate::domain::{Game, GameId, NewGame, Player, RosterEntry};
use crate::eligibility::{self, bonus_for};
use crate::errors::LeagueError;
use crate::standings::{self, PlayerHistory, Standings};
use crate::store::LeagueStore;

/// League operations over an injected store.
///
/// Reads go through one snapshot per call; the pure standings and
/// eligibility functions never see a half-written state.
pub struct LeagueService<S> {
    store: S,
    settings: LeagueSettings,
}

impl<S: LeagueStore> LeagueService<S> {
    pub fn new(store: S, settings: LeagueSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn standings(&self) -> Result<Standings> {
        let snapshot = self.store.fetch_snapshot()?;
        Ok(standings::compute_standings(
            &snapshot.players,
            &snapshot.games,
            &self.settings,
        ))
    }

    pub fn player_history(&self, player_name: &str) -> Result<PlayerHistory> {
        let players = self.store.fetch_roster()?;
        find_player(&players, player_name)?;
        let games = self.store.fetch_games_for_player(player_name)?;
        Ok(standings::player_history(player_name, &players, &games, &self.settings))
    }

    pub fn roster(&self) -> Result<Vec<RosterEntry>> {
        let snapshot = self.store.fetch_snapshot()?;
        Ok(snapshot
            .players
            .into_iter()
            .map(|player| RosterEntry {
                has_game_history: snapshot.games.iter().any(|g| g.involves(&player.player_name)),
                player_name: player.player_name,
                handicap: player.handicap,
            })
            .collect())
    }

    pub fn unfinished_players(&self) -> Result<Vec<Player>> {
        let snapshot = self.store.fetch_snapshot()?;
        Ok(eligibility::players_not_finished(&snapshot.players, &snapshot.games))
    }

    pub fn eligible_opponents(&self, winner_name: &str) -> Result<Vec<Player>> {
        let snapshot = self.store.fetch_snapshot()?;
        find_player(&snapshot.players, winner_name)?;
        Ok(eligibility::eligible_opponents_for(
            winner_name,
            &snapshot.players,
            &snapshot.games,
        ))
    }

    pub fn register_player(&self, player_name: &str, handicap: i64) -> Result<Player> {
        let player = Player::parse(player_name, handicap)?;
        self.store.add_player(&player)?;
        Ok(player)
    }

    /// Deletes a player who has no recorded games
    pub fn delete_player(&self, player_name: &str) -> Result<()> {
        self.store.delete_player(player_name)
    }

    /// Validates the pairing, works out the bonus and stores the game.
    pub fn record_game(&self, winner_name: &str, loser_name: &str, score: &str) -> Result<Game> {
        // Bonus is settled below, once both handicaps are known
        let draft = NewGame::parse(winner_name, loser_name, score, 0)?;

        let players = self.store.fetch_roster()?;
        let winner = find_player(&players, &draft.winner_name)?;
        let loser = find_player(&players, &draft.loser_name)?;

        let game = NewGame {
            bonus: bonus_for(winner.handicap, loser.handicap, self.settings.bonus_handicap_gap),
            ..draft
        };
        // The store re-checks both players and the pairing inside the insert
        self.store.record_game(&game, self.settings.rematch_policy)
    }

    pub fn delete_game(&self, id: GameId) -> Result<()> {
        self.store.delete_game(id)
    }

    pub fn is_admin(&self, identity: &str) -> Result<bool> {
        self.store.is_admin(identity)
    }

    /// Fails with `Unauthorized` unless `identity` belongs to an admin
    pub fn authorize(&self, identity: Option<&str>) -> Result<()> {
        let Some(id) = identity else {
            return Err(LeagueError::Unauthorized.into());
        };
        if self.store.is_admin(id)? {
            return Ok(());
        }
        info!("Rejected non-admin identity {}", id);
        Err(LeagueError::Unauthorized.into())
    }
}

fn find_player<'a>(players: &'a [Player], player_name: &str) -> Result<&'a Player> {
    players
        .iter()
        .find(|p| p.player_name == player_name)
        .ok_or_else(|| LeagueError::PlayerNotFound(player_name.to_string()).into())
}
