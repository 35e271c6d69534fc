//! Core utilities shared across the fetchers
//!
//! - `cache`: file system paths, read/write helpers, skip-if-exists checks
//! - `http`: reqwest client construction and GET helpers

pub mod cache;
pub mod http;

pub use cache::{
    existing_with_extensions, file_age, sleeper_players_path, try_read_to_string, write_bytes,
    write_string,
};
pub use http::{build_client, fetch_image, fetch_text, ImageBody};
