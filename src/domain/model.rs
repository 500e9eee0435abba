use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "World";

/// 一次問候請求；`name` 來自外部輸入，視為不可信文字
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRequest {
    pub name: Option<String>,
}

impl GreetingRequest {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// 去除控制字元與前後空白；結果為空時回傳 `None`
    pub fn sanitized_name(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let cleaned: String = name.chars().filter(|c| !c.is_control()).collect();
        let trimmed = cleaned.trim();

        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// 解析出顯示用名稱，永遠不會是空字串
    pub fn display_name(&self, default_name: &str) -> String {
        self.sanitized_name()
            .unwrap_or_else(|| default_name.to_string())
    }
}

impl From<Option<&str>> for GreetingRequest {
    fn from(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
        }
    }
}

/// `GET /ping` 與 `greet` 共用的回應格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub version: String,
}

/// `status` 指令輸出的一行登記狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationStatus {
    pub label: String,
    pub registered: bool,
}
