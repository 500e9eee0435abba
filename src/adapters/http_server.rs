//! HTTP ping 伺服器
//!
//! ## 端點
//! - `GET /ping?name=<string>` - 問候訊息（JSON）
//! - `GET /{namespace}/ping?name=<string>` - 同上，帶 REST 命名空間
//!
//! 其他路徑一律回傳 404 與 `rest_no_route` 錯誤。
//!
//! ## 使用示例
//! ```rust,ignore
//! let server = PingServer::new(addr, Arc::new(Greeter::default()), registry);
//! server.run(shutdown_signal()).await?;
//! ```

use crate::core::greeting::Greeter;
use crate::core::registry::Registry;
use crate::domain::model::GreetingResponse;
use crate::utils::error::{HelloError, Result};
use crate::utils::validation::validate_route;
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::BTreeSet;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    greeter: Arc<Greeter>,
}

/// 查詢字串裡的 `name`；重複出現時取最後一個，與 PHP 的 `$_GET` 相同
pub fn name_from_query(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
}

/// 伺服器會掛載的路徑；帶有路由參數語法的路徑會被略過
pub fn mounted_paths(registry: &Registry) -> BTreeSet<String> {
    registry
        .route_paths()
        .into_iter()
        .filter(|path| match validate_route("route", path) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping route {}: {}", path, e);
                false
            }
        })
        .collect()
}

/// 依登記表掛載路由；每條路由的短路徑與命名空間路徑共用同一個 handler
pub fn build_router(greeter: Arc<Greeter>, registry: &Registry) -> Router {
    let mut router = Router::new();
    for path in &mounted_paths(registry) {
        debug!("Registering GET {}", path);
        router = router.route(path, get(ping_handler));
    }

    router
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(AppState { greeter })
}

pub struct PingServer {
    addr: SocketAddr,
    greeter: Arc<Greeter>,
    registry: Registry,
}

impl PingServer {
    pub fn new(addr: SocketAddr, greeter: Arc<Greeter>, registry: Registry) -> Self {
        Self {
            addr,
            greeter,
            registry,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// 綁定位址並持續服務，直到 `shutdown` 完成
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| HelloError::ServerError {
                message: format!("failed to bind {}: {}", self.addr, e),
            })?;

        self.run_with_listener(listener, shutdown).await
    }

    /// 使用已綁定的 listener（測試時可綁在 port 0）
    pub async fn run_with_listener<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        let app = build_router(self.greeter.clone(), &self.registry);

        info!(
            "{} v{} activated on http://{}",
            self.registry.name(),
            self.registry.version(),
            local_addr
        );
        for path in mounted_paths(&self.registry) {
            info!("Ping endpoint: http://{}{}", local_addr, path);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("{} deactivated", self.registry.name());
        Ok(())
    }
}

/// Ctrl-C 時觸發優雅關閉
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn ping_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<GreetingResponse> {
    let response = state.greeter.greet(name_from_query(&pairs));
    debug!("Ping answered: {}", response.message);
    Json(response)
}

async fn not_found_handler(uri: Uri) -> Response {
    debug!("No route for {}", uri.path());
    let body = serde_json::json!({
        "code": "rest_no_route",
        "message": "No route was found matching the URL and request method.",
        "data": { "status": 404 }
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
