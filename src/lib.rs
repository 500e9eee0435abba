pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{http_client::HttpPingClient, http_server::PingServer};
pub use config::AppConfig;
pub use core::{greeting::Greeter, registry::Registry};
pub use utils::error::{HelloError, Result};
