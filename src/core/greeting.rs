use crate::domain::model::{GreetingRequest, GreetingResponse, DEFAULT_NAME};
use crate::domain::ports::{Clock, SystemClock};
use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

const EMOJI_SUFFIX: &str = " 👋";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// ISO-8601，例如 `2026-10-18T09:30:00+08:00`
    #[default]
    Rfc3339,
    /// `2026-10-18 09:30:00`，與 WordPress `current_time('mysql')` 相同
    Mysql,
}

impl TimestampFormat {
    pub fn format(&self, time: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Rfc3339 => time.to_rfc3339_opts(SecondsFormat::Secs, false),
            TimestampFormat::Mysql => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingOptions {
    pub default_name: String,
    pub emoji: bool,
    pub timestamp_format: TimestampFormat,
    pub max_name_length: usize,
    pub version: String,
}

impl Default for GreetingOptions {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            emoji: false,
            timestamp_format: TimestampFormat::default(),
            max_name_length: 256,
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// 問候服務：無狀態，可在任意數量的 task 之間共用
#[derive(Clone)]
pub struct Greeter {
    options: GreetingOptions,
    clock: Arc<dyn Clock>,
}

impl Greeter {
    pub fn new(options: GreetingOptions) -> Self {
        Self::with_clock(options, Arc::new(SystemClock))
    }

    pub fn with_clock(options: GreetingOptions, clock: Arc<dyn Clock>) -> Self {
        Self { options, clock }
    }

    pub fn greet(&self, name: Option<&str>) -> GreetingResponse {
        self.respond(&GreetingRequest::from(name))
    }

    pub fn respond(&self, request: &GreetingRequest) -> GreetingResponse {
        let name = self.display_name(request);
        let suffix = if self.options.emoji { EMOJI_SUFFIX } else { "" };

        GreetingResponse {
            success: true,
            message: format!("Hello, {}!{}", name, suffix),
            timestamp: self.options.timestamp_format.format(&self.clock.now()),
            version: self.options.version.clone(),
        }
    }

    /// 清理後的顯示名稱，超過長度上限時依字元邊界截斷
    pub fn display_name(&self, request: &GreetingRequest) -> String {
        let name = request.display_name(&self.options.default_name);

        match name.char_indices().nth(self.options.max_name_length) {
            Some((cut, _)) => {
                tracing::debug!(
                    "Truncating name to {} characters",
                    self.options.max_name_length
                );
                name[..cut].trim_end().to_string()
            }
            None => name,
        }
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(GreetingOptions::default())
    }
}

impl std::fmt::Debug for Greeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Greeter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
