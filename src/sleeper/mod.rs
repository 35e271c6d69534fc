//! Sleeper API: the player reference index and league data.

pub mod cache_players;
pub mod http;
pub mod types;

pub use cache_players::{load_or_fetch_players, DEFAULT_PLAYERS_MAX_AGE_HOURS};
pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use types::{
    players_by_position, League, LeagueUser, Matchup, NflState, Roster, SleeperPlayer,
    SleeperPlayers,
};
