use anyhow::Result;
use clap::Parser;
use hello_world::adapters::console::{greet_lines, status_lines, STATUS_TRAILER};
use hello_world::core::render::{render_shortcode, ShortcodeAttributes};
use hello_world::{CliConfig, Command, Greeter, Registry};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> Result<String> {
    let path = dir.path().join("hello.toml");
    std::fs::write(&path, content)?;
    Ok(path.to_string_lossy().to_string())
}

#[test]
fn test_config_file_drives_greeting_and_status() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        r#"
[plugin]
name = "Hello Codespace"
version = "2.1.0"

[greeting]
default_name = "Friend"
emoji = true

[server]
namespace = "codespace/v2"
"#,
    )?;

    let cli = CliConfig::try_parse_from(["hello-world", "--config", &config_path, "greet"])?;
    let config = cli.resolve()?;
    let greeter = Greeter::new(config.greeting_options());

    let response = greeter.greet(None);
    assert_eq!(response.message, "Hello, Friend! 👋");
    assert_eq!(response.version, "2.1.0");

    let report = status_lines(&Registry::from_config(&config), false);
    assert_eq!(report[0], "Hello Codespace Plugin Status:");
    assert!(report.contains(&"Version: 2.1.0".to_string()));
    assert!(report.contains(&"REST endpoint /codespace/v2/ping: ✓ Registered".to_string()));
    assert!(report.contains(&"Shortcode [hello_world]: ✓ Registered".to_string()));
    assert_eq!(report.last().map(String::as_str), Some(STATUS_TRAILER));
    Ok(())
}

#[test]
fn test_greet_command_output() -> Result<()> {
    let cli = CliConfig::try_parse_from(["hello-world", "greet", "Alice"])?;
    let config = cli.resolve()?;

    let Command::Greet { name, .. } = cli.command else {
        panic!("expected greet command");
    };
    let lines = greet_lines(&Greeter::new(config.greeting_options()), name.as_deref());

    assert_eq!(lines, vec!["Hello, Alice!".to_string()]);
    Ok(())
}

#[test]
fn test_route_with_path_parameters_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for route in ["/ping/*", "/ping/:name"] {
        let config_path = write_config(&temp_dir, &format!("[server]\nroute = \"{}\"\n", route))?;
        let cli = CliConfig::try_parse_from(["hello-world", "--config", &config_path, "serve"])?;
        assert!(cli.resolve().is_err(), "route {} should be rejected", route);
    }
    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, "[server]\nroute = \"no-slash\"\n")?;

    let cli = CliConfig::try_parse_from(["hello-world", "status", "--config", &config_path])?;
    assert!(cli.resolve().is_err());
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("absent.toml");

    let cli = CliConfig::try_parse_from([
        "hello-world",
        "--config",
        missing.to_str().unwrap_or_default(),
        "greet",
    ])?;
    assert!(matches!(
        cli.resolve(),
        Err(hello_world::HelloError::IoError(_))
    ));
    Ok(())
}

#[test]
fn test_shortcode_command_renders_escaped_html() -> Result<()> {
    let cli = CliConfig::try_parse_from([
        "hello-world",
        "shortcode",
        "--name",
        "<script>",
        "--style",
        "fancy",
    ])?;
    let config = cli.resolve()?;

    let Command::Shortcode { name, style } = cli.command else {
        panic!("expected shortcode command");
    };
    let html = render_shortcode(
        &Greeter::new(config.greeting_options()),
        &ShortcodeAttributes { name, style },
    );

    assert_eq!(
        html,
        "<div class=\"hello-world-shortcode\" data-style=\"fancy\"><p>Hello, &lt;script&gt;! 👋</p></div>"
    );
    Ok(())
}
