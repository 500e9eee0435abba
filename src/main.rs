use clap::Parser;
use hello_world::adapters::console;
use hello_world::adapters::http_server::shutdown_signal;
use hello_world::core::render::ShortcodeAttributes;
use hello_world::core::PingProbe;
use hello_world::utils::error::ErrorSeverity;
use hello_world::utils::logger;
use hello_world::{
    AppConfig, CliConfig, Command, Greeter, HelloError, HttpPingClient, PingServer, Registry,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 伺服器模式有自己的日誌格式
    match &cli.command {
        Command::Serve { json_logs, .. } => logger::init_server_logger(cli.verbose, *json_logs),
        _ => logger::init_cli_logger(cli.verbose),
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("Error: {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: Command, config: AppConfig) -> Result<(), HelloError> {
    let greeter = Greeter::new(config.greeting_options());
    let registry = Registry::from_config(&config);

    let lines = match command {
        Command::Greet { name, .. } => console::greet_lines(&greeter, name.as_deref()),
        Command::Status { footer } => console::status_lines(&registry, footer),
        Command::Shortcode { name, style } => {
            console::shortcode_lines(&greeter, &ShortcodeAttributes { name, style })
        }
        Command::Serve { .. } => {
            let server = PingServer::new(config.bind_address()?, Arc::new(greeter), registry);
            server.run(shutdown_signal()).await?;
            Vec::new()
        }
        Command::TestApi { name, .. } => {
            let client = HttpPingClient::new(config.client_endpoint(), config.client_timeout())?;
            println!("{}", console::test_api_header(client.endpoint()));

            let response = client.ping(name.as_deref()).await?;
            console::test_api_lines(&response)
        }
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
