pub mod commands;
pub mod config;
pub mod discord_handler;
pub mod discord_helpers;
pub mod error;
pub mod logging;
