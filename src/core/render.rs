//! HTML 輸出：`[hello_world]` 短代碼片段與頁尾標記
//!
//! 名稱在 API 回應中保持原樣，只有嵌入 HTML 時才轉義。

use crate::core::greeting::Greeter;
use crate::domain::model::GreetingRequest;

pub const DEFAULT_STYLE: &str = "default";

/// 轉義 HTML 文字內容中的特殊字元
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 屬性值的轉義；另外去掉換行，避免破壞單行的屬性
pub fn escape_attr(input: &str) -> String {
    let flattened: String = input.chars().filter(|c| !c.is_control()).collect();
    escape_html(flattened.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeAttributes {
    pub name: Option<String>,
    pub style: Option<String>,
}

impl ShortcodeAttributes {
    pub fn style(&self) -> &str {
        match self.style.as_deref() {
            Some(style) if !style.trim().is_empty() => style,
            _ => DEFAULT_STYLE,
        }
    }
}

pub fn render_shortcode(greeter: &Greeter, attributes: &ShortcodeAttributes) -> String {
    let request = GreetingRequest::new(attributes.name.clone());
    let name = escape_html(&greeter.display_name(&request));

    format!(
        "<div class=\"hello-world-shortcode\" data-style=\"{}\"><p>Hello, {}! 👋</p></div>",
        escape_attr(attributes.style()),
        name
    )
}

pub fn footer_marker(version: &str) -> String {
    format!("<!-- Hello World Plugin v{} - Active -->", escape_html(version))
}
