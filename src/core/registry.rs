use crate::config::toml_config::AppConfig;
use crate::domain::model::RegistrationStatus;
use std::collections::BTreeSet;

pub const SHORTCODE_TAG: &str = "hello_world";

/// 一條 REST 路由，例如 namespace `hello/v1` + path `/ping`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub namespace: String,
    pub path: String,
}

impl RouteEntry {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// 完整路徑：`/{namespace}{path}`，沒有命名空間時就是 `path`
    pub fn canonical_path(&self) -> String {
        if self.namespace.is_empty() {
            self.path.clone()
        } else {
            format!("/{}{}", self.namespace.trim_matches('/'), self.path)
        }
    }

    /// 伺服器要掛載的所有路徑；短路徑與命名空間路徑都會回應
    pub fn mount_paths(&self) -> Vec<String> {
        let canonical = self.canonical_path();
        if canonical == self.path {
            vec![canonical]
        } else {
            vec![self.path.clone(), canonical]
        }
    }
}

/// 啟動時明確建立的登記表，交給 HTTP 與 CLI 兩個轉接層使用
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    name: String,
    version: String,
    routes: Vec<RouteEntry>,
    shortcodes: Vec<String>,
}

impl Registry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
            shortcodes: Vec::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.plugin.name, &config.plugin.version)
            .with_shortcode(SHORTCODE_TAG)
            .with_route(RouteEntry::new(
                &config.server.namespace,
                &config.server.route,
            ))
    }

    pub fn with_route(mut self, route: RouteEntry) -> Self {
        if !self.routes.contains(&route) {
            self.routes.push(route);
        }
        self
    }

    pub fn with_shortcode(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.shortcodes.contains(&tag) {
            self.shortcodes.push(tag);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// 所有路由展開後的路徑（去重、排序）
    pub fn route_paths(&self) -> BTreeSet<String> {
        self.routes
            .iter()
            .flat_map(|route| route.mount_paths())
            .collect()
    }

    pub fn has_shortcode(&self, tag: &str) -> bool {
        self.shortcodes.iter().any(|t| t == tag)
    }

    /// 第一條路由的完整路徑；沒有登記任何路由時回傳 `None`
    pub fn primary_route(&self) -> Option<String> {
        self.routes.first().map(RouteEntry::canonical_path)
    }

    /// `mounted` 是伺服器實際掛載的路徑；不在其中的路由回報為未登記
    pub fn registrations(&self, mounted: &BTreeSet<String>) -> Vec<RegistrationStatus> {
        let mut statuses = vec![RegistrationStatus {
            label: format!("Shortcode [{}]", SHORTCODE_TAG),
            registered: self.has_shortcode(SHORTCODE_TAG),
        }];

        for route in &self.routes {
            let path = route.canonical_path();
            statuses.push(RegistrationStatus {
                registered: mounted.contains(&path),
                label: format!("REST endpoint {}", path),
            });
        }

        statuses
    }

    /// `status` 指令印出的文字區塊
    pub fn status_report(&self, mounted: &BTreeSet<String>) -> Vec<String> {
        let title = format!("{} Plugin Status:", self.name);
        let mut lines = vec![
            title.clone(),
            "-".repeat(title.chars().count()),
            format!("Version: {}", self.version),
            "Status: Active".to_string(),
        ];

        for status in self.registrations(mounted) {
            let mark = if status.registered {
                "✓ Registered"
            } else {
                "✗ Not found"
            };
            lines.push(format!("{}: {}", status.label, mark));
        }

        if let Some(route) = self.primary_route() {
            lines.push(format!(
                "Use shortcode [{}] or visit {} to test the plugin.",
                SHORTCODE_TAG, route
            ));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        let route = RouteEntry::new("hello/v1", "/ping");
        assert_eq!(route.canonical_path(), "/hello/v1/ping");
        assert_eq!(route.mount_paths(), vec!["/ping", "/hello/v1/ping"]);

        let bare = RouteEntry::new("", "/ping");
        assert_eq!(bare.mount_paths(), vec!["/ping"]);
    }

    #[test]
    fn test_registry_from_default_config() {
        let registry = Registry::from_config(&AppConfig::default());

        assert!(registry.has_shortcode("hello_world"));
        let paths = registry.route_paths();
        assert!(paths.contains("/ping"));
        assert!(paths.contains("/hello/v1/ping"));
        assert!(!paths.contains("/pong"));
        assert_eq!(registry.primary_route().as_deref(), Some("/hello/v1/ping"));
    }

    #[test]
    fn test_duplicate_registrations_are_ignored() {
        let registry = Registry::new("Hello World", "1.0.0")
            .with_shortcode("hello_world")
            .with_shortcode("hello_world")
            .with_route(RouteEntry::new("hello/v1", "/ping"))
            .with_route(RouteEntry::new("hello/v1", "/ping"));

        assert_eq!(registry.routes().len(), 1);
        assert_eq!(registry.registrations(&registry.route_paths()).len(), 2);
    }

    #[test]
    fn test_status_report() {
        let registry = Registry::new("Hello World", "1.0.0")
            .with_route(RouteEntry::new("hello/v1", "/ping"));
        let report = registry.status_report(&registry.route_paths());

        assert_eq!(report[0], "Hello World Plugin Status:");
        assert_eq!(report[1], "-".repeat(26));
        assert!(report.contains(&"Version: 1.0.0".to_string()));
        assert!(report.contains(&"Shortcode [hello_world]: ✗ Not found".to_string()));
        assert!(report.contains(&"REST endpoint /hello/v1/ping: ✓ Registered".to_string()));
    }

    #[test]
    fn test_unmounted_route_is_reported_missing() {
        let registry = Registry::new("Hello World", "1.0.0")
            .with_shortcode("hello_world")
            .with_route(RouteEntry::new("hello/v1", "/ping"));
        let mounted: BTreeSet<String> = ["/ping".to_string()].into_iter().collect();
        let report = registry.status_report(&mounted);

        assert!(report.contains(&"Shortcode [hello_world]: ✓ Registered".to_string()));
        assert!(report.contains(&"REST endpoint /hello/v1/ping: ✗ Not found".to_string()));
    }
}
