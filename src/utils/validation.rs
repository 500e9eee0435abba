use crate::utils::error::{HelloError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HelloError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 路由必須以 `/` 開頭，且不能帶查詢字串或片段
pub fn validate_route(field_name: &str, route: &str) -> Result<()> {
    if !route.starts_with('/') {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: route.to_string(),
            reason: "Route must start with '/'".to_string(),
        });
    }

    if route.contains(['?', '#', ' ']) {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: route.to_string(),
            reason: "Route cannot contain '?', '#' or spaces".to_string(),
        });
    }

    // `:` 與 `*` 是路由器的參數語法
    if route.contains([':', '*']) {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: route.to_string(),
            reason: "Route cannot contain path parameters (':' or '*')".to_string(),
        });
    }

    Ok(())
}

/// REST 命名空間，例如 `hello/v1`；空字串表示不掛載命名空間路由
pub fn validate_namespace(field_name: &str, namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Ok(());
    }

    let valid = namespace
        .split('/')
        .all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        });

    if !valid {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: namespace.to_string(),
            reason: "Namespace segments may only contain letters, digits, '-' and '_'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("client.endpoint", "https://example.com/ping").is_ok());
        assert!(validate_url("client.endpoint", "http://127.0.0.1:8080/ping").is_ok());
        assert!(validate_url("client.endpoint", "").is_err());
        assert!(validate_url("client.endpoint", "invalid-url").is_err());
        assert!(validate_url("client.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_route() {
        assert!(validate_route("server.route", "/ping").is_ok());
        assert!(validate_route("server.route", "ping").is_err());
        assert!(validate_route("server.route", "/ping?name=x").is_err());
        assert!(validate_route("server.route", "/ping/*").is_err());
        assert!(validate_route("server.route", "/ping/*rest").is_err());
        assert!(validate_route("server.route", "/ping/:name").is_err());
    }

    #[test]
    fn test_validate_namespace() {
        assert!(validate_namespace("server.namespace", "hello/v1").is_ok());
        assert!(validate_namespace("server.namespace", "").is_ok());
        assert!(validate_namespace("server.namespace", "/hello").is_err());
        assert!(validate_namespace("server.namespace", "hello//v1").is_err());
        assert!(validate_namespace("server.namespace", "hello/v1?").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("greeting.max_name_length", 256, 1, 4096).is_ok());
        assert!(validate_range("greeting.max_name_length", 0, 1, 4096).is_err());
    }
}
