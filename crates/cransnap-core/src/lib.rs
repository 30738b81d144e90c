pub mod config;
pub mod logging;

pub mod error;
pub mod listing;
pub mod mirrors;
pub mod snapshot_url;
pub mod switch;
pub mod validate;
