pub mod cli;
pub mod combat;
pub mod config;
pub mod data;
pub mod logging;
pub mod server;
