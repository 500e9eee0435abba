//! 各 CLI 子命令印到 stdout 的文字

use crate::adapters::http_server::mounted_paths;
use crate::core::greeting::Greeter;
use crate::core::registry::Registry;
use crate::core::render::{footer_marker, render_shortcode, ShortcodeAttributes};
use crate::domain::model::GreetingResponse;

pub const STATUS_TRAILER: &str = "Success: Plugin is working correctly!";

pub fn greet_lines(greeter: &Greeter, name: Option<&str>) -> Vec<String> {
    vec![greeter.greet(name).message]
}

pub fn status_lines(registry: &Registry, footer: bool) -> Vec<String> {
    let mut lines = registry.status_report(&mounted_paths(registry));
    if footer {
        lines.push(footer_marker(registry.version()));
    }
    lines.push(STATUS_TRAILER.to_string());
    lines
}

pub fn shortcode_lines(greeter: &Greeter, attributes: &ShortcodeAttributes) -> Vec<String> {
    vec![render_shortcode(greeter, attributes)]
}

pub fn test_api_header(endpoint: &str) -> String {
    format!("Testing {} ...", endpoint)
}

pub fn test_api_lines(response: &GreetingResponse) -> Vec<String> {
    vec![
        "✅ Endpoint is working".to_string(),
        format!("Message: {}", response.message),
        format!("Timestamp: {}", response.timestamp),
        format!("Version: {}", response.version),
    ]
}
