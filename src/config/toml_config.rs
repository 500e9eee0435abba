use crate::core::greeting::{GreetingOptions, TimestampFormat, SERVICE_VERSION};
use crate::domain::model::DEFAULT_NAME;
use crate::utils::error::{HelloError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

/// 所有區段都有預設值，設定檔本身可省略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub plugin: PluginConfig,
    pub greeting: GreetingConfig,
    pub server: ServerConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            name: "Hello World".to_string(),
            version: SERVICE_VERSION.to_string(),
            description: "A sample greeting service with an HTTP ping endpoint and CLI commands"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub default_name: String,
    pub emoji: bool,
    pub timestamp_format: TimestampFormat,
    pub max_name_length: usize,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            emoji: false,
            timestamp_format: TimestampFormat::Rfc3339,
            max_name_length: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub namespace: String,
    pub route: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            namespace: "hello/v1".to_string(),
            route: "/ping".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 未設定時由 `server` 區段推導
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: 10,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HelloError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 有指定路徑就讀檔，否則使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HelloError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HELLO_PORT})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelloError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn greeting_options(&self) -> GreetingOptions {
        GreetingOptions {
            default_name: self.greeting.default_name.trim().to_string(),
            emoji: self.greeting.emoji,
            timestamp_format: self.greeting.timestamp_format,
            max_name_length: self.greeting.max_name_length,
            version: self.plugin.version.clone(),
        }
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        let ip: IpAddr =
            self.server
                .host
                .parse()
                .map_err(|e| HelloError::InvalidConfigValueError {
                    field: "server.host".to_string(),
                    value: self.server.host.clone(),
                    reason: format!("Not a valid IP address: {}", e),
                })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// 自我測試要呼叫的端點；未設定時指向本機伺服器的命名空間路由
    pub fn client_endpoint(&self) -> String {
        if let Some(endpoint) = &self.client.endpoint {
            return endpoint.clone();
        }

        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" => "127.0.0.1",
            host => host,
        };
        let host = if host.contains(':') {
            format!("[{}]", host)
        } else {
            host.to_string()
        };
        let path = crate::core::registry::RouteEntry::new(
            &self.server.namespace,
            &self.server.route,
        )
        .canonical_path();

        format!("http://{}:{}{}", host, self.server.port, path)
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_seconds)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("plugin.name", &self.plugin.name)?;
        validation::validate_non_empty_string("plugin.version", &self.plugin.version)?;
        validation::validate_non_empty_string("greeting.default_name", &self.greeting.default_name)?;
        validation::validate_range(
            "greeting.max_name_length",
            self.greeting.max_name_length,
            1,
            4096,
        )?;

        self.bind_address()?;
        validation::validate_namespace("server.namespace", &self.server.namespace)?;
        validation::validate_route("server.route", &self.server.route)?;

        if let Some(endpoint) = &self.client.endpoint {
            validation::validate_url("client.endpoint", endpoint)?;
        }
        validation::validate_range("client.timeout_seconds", self.client.timeout_seconds, 1, 300)?;

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
