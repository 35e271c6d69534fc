//! Fantasy Football Asset Fetchers
//!
//! Small fetch → parse → normalize → write procedures for fantasy football
//! data, sharing only file-path conventions.
//!
//! ## Features
//!
//! - **Projections**: Scrape FantasyPros weekly projection tables into one CSV per position
//! - **Headshots**: Download player images from the Sleeper CDN (bounded parallel pool) and ESPN
//! - **Player Matching**: Map scraped free-text names to Sleeper player ids
//! - **Weekly Report**: Summarize a Sleeper league week into markdown via a chat model
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_assets::{commands::projections::*, Season};
//! use std::path::PathBuf;
//!
//! # async fn example() -> ffl_assets::Result<()> {
//! handle_projections(ProjectionsParams {
//!     outdir: PathBuf::from("data"),
//!     season: Season::default(),
//!     week: None,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## File Layout
//!
//! ```text
//! data/<year>/week_<NN>|week_current/<pos>.csv
//! assets/players/<POS>/<sleeper_id>.jpg|.png
//! assets/players/espn/<espn_id>.png
//! reports/week-<NN>.md
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fantasypros;
pub mod headshots;
pub mod matching;
pub mod report;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, Position, Season, Week};
pub use error::{FflError, Result};
