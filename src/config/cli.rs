use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hello-world")]
#[command(version)]
#[command(about = "A sample greeting service with an HTTP ping endpoint and CLI commands")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Prints a greeting message
    Greet {
        /// The name to greet (default: World)
        name: Option<String>,

        #[arg(long, help = "Append a waving hand to the greeting")]
        emoji: bool,
    },

    /// Shows service status and registrations
    #[command(visible_alias = "info")]
    Status {
        #[arg(long, help = "Also print the HTML footer marker")]
        footer: bool,
    },

    /// Renders the [hello_world] shortcode as an HTML fragment
    Shortcode {
        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Value of the data-style attribute")]
        style: Option<String>,
    },

    /// Serves the ping endpoint over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,

        #[arg(long, help = "Emit logs as JSON lines")]
        json_logs: bool,
    },

    /// Calls a running ping endpoint and checks the response
    TestApi {
        #[arg(long, help = "Full URL of the ping endpoint")]
        endpoint: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Request timeout in seconds")]
        timeout: Option<u64>,
    },
}

impl CliConfig {
    /// 載入設定檔並套用命令列覆寫，最後驗證
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        match &self.command {
            Command::Greet { emoji: true, .. } => config.greeting.emoji = true,
            Command::Serve { host, port, .. } => {
                if let Some(host) = host {
                    config.server.host = host.clone();
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
            }
            Command::TestApi {
                endpoint, timeout, ..
            } => {
                if let Some(endpoint) = endpoint {
                    config.client.endpoint = Some(endpoint.clone());
                }
                if let Some(timeout) = timeout {
                    config.client.timeout_seconds = *timeout;
                }
            }
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_greet() {
        let cli = CliConfig::try_parse_from(["hello-world", "greet", "Alice"]).unwrap();
        match cli.command {
            Command::Greet { name, emoji } => {
                assert_eq!(name.as_deref(), Some("Alice"));
                assert!(!emoji);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = CliConfig::try_parse_from(["hello-world", "greet"]).unwrap();
        assert!(matches!(cli.command, Command::Greet { name: None, .. }));
    }

    #[test]
    fn test_info_is_alias_for_status() {
        let cli = CliConfig::try_parse_from(["hello-world", "info"]).unwrap();
        assert!(matches!(cli.command, Command::Status { footer: false }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from(["hello-world", "status", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            CliConfig::try_parse_from(["hello-world", "serve", "--host", "0.0.0.0", "-p", "9000"])
                .unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_greet_emoji_override() {
        let cli = CliConfig::try_parse_from(["hello-world", "greet", "--emoji"]).unwrap();
        assert!(cli.resolve().unwrap().greeting.emoji);
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let cli =
            CliConfig::try_parse_from(["hello-world", "test-api", "--endpoint", "nope"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
